// src/cli/args.rs
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)] // The dispatcher strips the command name before parsing.
pub struct ToArgs {
    /// Project name or alias.
    pub project: Option<String>,

    /// Skip the project's autorun commands.
    #[arg(long)]
    pub no_autorun: bool,
}

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)]
pub struct EnvArgs {
    /// Environment layer to load.
    pub layer: Option<String>,

    /// Project name or alias. Defaults to the project containing the
    /// current working directory.
    #[arg(long, short)]
    pub project: Option<String>,
}

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)]
pub struct ListArgs {
    /// What to list: projects, commands, or environments.
    pub kind: Option<String>,

    /// Project name or alias (for commands/environments listings).
    pub project: Option<String>,
}
