use anyhow::Result;
use colored::Colorize;

use crate::cli::handlers::{self, App};

// --- Command Definition and Registry ---

/// Defines a built-in command, its aliases, and its handler function.
/// The handler signature is kept consistent across all commands for
/// simplicity in the registry.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    usage: &'static str,
    summary: &'static str,
    handler: fn(Vec<String>, &App) -> Result<()>,
}

/// The single source of truth for all built-in commands. To add a new
/// command, add an entry here and a handler module under `cli/handlers/`.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "to",
        aliases: &[],
        usage: "to <project> [--no-autorun]",
        summary: "Navigate to a project (runs autoload/autorun)",
        handler: handlers::to::handle,
    },
    CommandDefinition {
        name: "env",
        aliases: &[],
        usage: "env <layer> [--project <p>]",
        summary: "Load an environment layer",
        handler: handlers::env::handle,
    },
    CommandDefinition {
        name: "run",
        aliases: &[],
        usage: "run <name> [args...]",
        summary: "Run a custom command",
        handler: handlers::run::handle,
    },
    CommandDefinition {
        name: "list",
        aliases: &["ls"],
        usage: "list <what> [project]",
        summary: "List projects, commands, or environments",
        handler: handlers::list::handle,
    },
    CommandDefinition {
        name: "config",
        aliases: &[],
        usage: "config [edit|validate|path]",
        summary: "Edit, validate, or locate the config file",
        handler: handlers::config_cmd::handle,
    },
    CommandDefinition {
        name: "completion",
        aliases: &[],
        usage: "completion <shell>",
        summary: "Print a shell completion script",
        handler: handlers::completion::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Routes parsed arguments to the right handler.
///
/// A first argument that is not a built-in command is treated as a custom
/// command name, a shortcut for `hop run <name> [args...]`.
pub fn dispatch(all_args: Vec<String>, app: &App) -> Result<()> {
    log::debug!("Dispatching args: {:?}", all_args);

    let Some(first) = all_args.first() else {
        print_help();
        anyhow::bail!("no command given");
    };

    match first.as_str() {
        "help" | "--help" | "-h" => {
            print_help();
            return Ok(());
        }
        "--version" | "-V" => {
            eprintln!("hop {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }

    let rest: Vec<String> = all_args.iter().skip(1).cloned().collect();

    if let Some(command) = find_command(first) {
        (command.handler)(rest, app)
    } else {
        // Not a built-in: `hop <custom-command> [args...]`.
        handlers::run::handle(all_args, app)
    }
}

/// Renders the help text to stderr. stdout is reserved for the eval stream.
fn print_help() {
    let title = |s: &str| s.yellow().bold();
    let cmd = |s: &str| s.cyan();

    eprintln!("{} - project multiplexer", "hop".yellow().bold());
    eprintln!();
    eprintln!("{}", title("USAGE:"));
    eprintln!("  hop [-v...] [--config PATH] <command> [args...]");
    eprintln!();
    eprintln!("{}", title("COMMANDS:"));
    let width = COMMAND_REGISTRY
        .iter()
        .map(|c| c.usage.len())
        .max()
        .unwrap_or(0);
    for command in COMMAND_REGISTRY {
        // Pad before coloring; ANSI escapes would throw off the width.
        let usage = format!("{:<width$}", command.usage);
        if command.aliases.is_empty() {
            eprintln!("  {}  {}", cmd(&usage), command.summary);
        } else {
            eprintln!(
                "  {}  {} {}",
                cmd(&usage),
                command.summary,
                format!("(alias: {})", command.aliases.join(", ")).dimmed()
            );
        }
    }
    eprintln!();
    eprintln!("Any configured custom command can also be run directly: {}", cmd("hop <name> [args...]"));
    eprintln!();
    eprintln!("{}", title("OPTIONS:"));
    eprintln!("  {}             Increase verbosity (-v info, -vv debug); -v also previews commands", cmd("-v"));
    eprintln!("  {}  Use an explicit configuration file", cmd("--config PATH"));
}
