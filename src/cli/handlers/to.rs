// src/cli/handlers/to.rs

use crate::cli::args::ToArgs;
use crate::cli::handlers::{App, commons};
use crate::core::{ResolveError, orchestrator::Orchestrator, project_resolver};
use anyhow::{Result, anyhow};
use clap::Parser;
use colored::Colorize;

/// `hop to <project> [--no-autorun]` — Navigate.
pub fn handle(args: Vec<String>, app: &App) -> Result<()> {
    let args = ToArgs::try_parse_from(args)?;

    let Some(token) = args.project else {
        commons::print_available_projects(&app.config);
        return Err(anyhow!("no project provided"));
    };

    let orchestrator = Orchestrator::new(&app.config, app.verbose);
    let actions = orchestrator
        .navigate(&token, !args.no_autorun)
        .map_err(|err| {
            if matches!(err, ResolveError::NotFound { .. }) {
                let tokens = project_resolver::all_tokens(&app.config);
                if let Some(hint) = commons::suggest(&token, tokens) {
                    eprintln!("Did you mean: {}?", hint.cyan());
                }
                commons::print_available_projects(&app.config);
            }
            err
        })?;

    commons::emit(&actions)
}
