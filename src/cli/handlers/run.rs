// src/cli/handlers/run.rs

use crate::cli::handlers::{App, commons};
use crate::core::{ResolveError, command_resolver, orchestrator::Orchestrator};
use crate::models::Project;
use anyhow::{Result, anyhow};
use colored::Colorize;

/// `hop run <name> [args...]` — RunCustomCommand. The dispatcher also routes
/// bare `hop <name> [args...]` here for any non-built-in first argument.
pub fn handle(mut args: Vec<String>, app: &App) -> Result<()> {
    if args.is_empty() {
        return Err(anyhow!("no command name given; usage: hop run <name> [args...]"));
    }
    let name = args.remove(0);
    let extra_args = args;

    let current = commons::detect_current_project(&app.config);
    let orchestrator = Orchestrator::new(&app.config, app.verbose);

    let actions = orchestrator
        .run_custom(current, &name, &extra_args)
        .map_err(|err| {
            if matches!(err, ResolveError::CommandNotFound { .. }) {
                print_available_commands(app, current, &name);
            }
            err
        })?;

    commons::emit(&actions)
}

fn print_available_commands(app: &App, current: Option<&Project>, attempted: &str) {
    let names = command_resolver::available(&app.config, current);
    if names.is_empty() {
        eprintln!("{}", "No custom commands configured.".yellow());
        return;
    }
    if let Some(hint) = commons::suggest(attempted, names.iter().map(String::as_str)) {
        eprintln!("Did you mean: {}?", hint.cyan());
    }
    eprintln!("\nAvailable custom commands:");
    for name in names {
        eprintln!("  {}", name.green());
    }
}
