// src/cli/handlers/completion.rs

use crate::cli::handlers::App;
use anyhow::{Result, anyhow};

/// `hop completion bash|zsh|fish`.
///
/// Prints the shell integration script on stdout. This is the one handler
/// whose stdout is not the statement stream: the script itself is the
/// eval-able artifact (`eval "$(hop completion bash)"`). The bash and zsh
/// scripts also define the `hop` wrapper function that evaluates the
/// binary's output, which is what makes `cd` and `export` take effect in
/// the calling shell.
pub fn handle(args: Vec<String>, _app: &App) -> Result<()> {
    let shell = args
        .first()
        .ok_or_else(|| anyhow!("specify a shell: bash, zsh, or fish"))?;

    let script = match shell.as_str() {
        "bash" => BASH_SCRIPT,
        "zsh" => ZSH_SCRIPT,
        "fish" => FISH_SCRIPT,
        other => return Err(anyhow!("unsupported shell '{other}'; supported: bash, zsh, fish")),
    };

    println!("{script}");
    eprintln!("# To enable, add to your shell rc file:");
    eprintln!("#   eval \"$(command hop completion {shell})\"");
    Ok(())
}

const BASH_SCRIPT: &str = r#"# hop shell integration for bash
hop() {
    local out
    out="$(command hop "$@")" && eval "$out"
}

_hop_completion() {
    local cur prev commands projects
    COMPREPLY=()
    cur="${COMP_WORDS[COMP_CWORD]}"
    prev="${COMP_WORDS[COMP_CWORD-1]}"

    commands="to env run list config completion"
    projects="$(command hop list projects 2>&1 >/dev/null | grep -E '^  [A-Za-z]' | awk '{print $1}')"

    case "${prev}" in
        hop)
            COMPREPLY=( $(compgen -W "${commands}" -- "${cur}") )
            return 0
            ;;
        to)
            COMPREPLY=( $(compgen -W "${projects}" -- "${cur}") )
            return 0
            ;;
        config)
            COMPREPLY=( $(compgen -W "edit validate path" -- "${cur}") )
            return 0
            ;;
        list)
            COMPREPLY=( $(compgen -W "projects commands environments" -- "${cur}") )
            return 0
            ;;
        completion)
            COMPREPLY=( $(compgen -W "bash zsh fish" -- "${cur}") )
            return 0
            ;;
    esac
}

complete -F _hop_completion hop"#;

const ZSH_SCRIPT: &str = r#"# hop shell integration for zsh
hop() {
    local out
    out="$(command hop "$@")" && eval "$out"
}

_hop() {
    local line state

    _arguments -C \
        "1: :->cmds" \
        "*::arg:->args"

    case "$state" in
        cmds)
            _values 'hop commands' \
                'to[Navigate to a project]' \
                'env[Load an environment layer]' \
                'run[Run a custom command]' \
                'list[List projects/commands/environments]' \
                'config[Manage configuration]' \
                'completion[Print a completion script]'
            ;;
        args)
            case "$line[1]" in
                to)
                    local projects
                    projects=(${(f)"$(command hop list projects 2>&1 >/dev/null | grep -E '^  [A-Za-z]' | awk '{print $1}')"})
                    _values 'projects' $projects
                    ;;
                config)
                    _values 'config subcommands' 'edit' 'validate' 'path'
                    ;;
                list)
                    _values 'list types' 'projects' 'commands' 'environments'
                    ;;
                completion)
                    _values 'shells' 'bash' 'zsh' 'fish'
                    ;;
            esac
            ;;
    esac
}

compdef _hop hop"#;

const FISH_SCRIPT: &str = r#"# hop completions for fish
complete -c hop -f -n "__fish_use_subcommand" -a "to" -d "Navigate to a project"
complete -c hop -f -n "__fish_use_subcommand" -a "env" -d "Load an environment layer"
complete -c hop -f -n "__fish_use_subcommand" -a "run" -d "Run a custom command"
complete -c hop -f -n "__fish_use_subcommand" -a "list" -d "List projects/commands/environments"
complete -c hop -f -n "__fish_use_subcommand" -a "config" -d "Manage configuration"
complete -c hop -f -n "__fish_use_subcommand" -a "completion" -d "Print a completion script"

complete -c hop -f -n "__fish_seen_subcommand_from to" -a "(command hop list projects 2>&1 >/dev/null | grep -E '^  [A-Za-z]' | awk '{print \$1}')"

complete -c hop -f -n "__fish_seen_subcommand_from config" -a "edit validate path"
complete -c hop -f -n "__fish_seen_subcommand_from list" -a "projects commands environments"
complete -c hop -f -n "__fish_seen_subcommand_from completion" -a "bash zsh fish""#;
