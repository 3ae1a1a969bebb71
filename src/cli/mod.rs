use clap::Parser;
use std::path::PathBuf;

pub mod args;
pub mod dispatcher;
pub mod handlers;

/// hop: navigate projects, load environments, and run commands through your shell.
///
/// The binary's stdout is `eval`ed by a shell wrapper function, so clap's own
/// help/version printing (which goes to stdout) is disabled; the dispatcher
/// renders both to stderr instead.
#[derive(Parser, Debug)]
#[command(
    name = "hop",
    version,
    about,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase verbosity (-v shows commands before running them and info
    /// logs, -vv adds debug logs). Must precede the command name.
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The command and its arguments, resolved by the dispatcher.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
