// src/cli/handlers/env.rs

use crate::cli::args::EnvArgs;
use crate::cli::handlers::{App, commons};
use crate::core::{ResolveError, orchestrator::Orchestrator, project_resolver};
use anyhow::{Result, anyhow};
use clap::Parser;

/// `hop env <layer> [--project <token>]` — LoadEnvironment.
pub fn handle(args: Vec<String>, app: &App) -> Result<()> {
    let args = EnvArgs::try_parse_from(args)?;
    let current = commons::detect_current_project(&app.config);

    let Some(layer) = args.layer else {
        // Point at the right layer list before failing.
        let target = match args.project.as_deref() {
            Some(token) => Some(project_resolver::resolve(&app.config, token)?),
            None => current,
        };
        if let Some(project) = target {
            commons::print_available_layers(project);
        }
        return Err(anyhow!("no environment layer given"));
    };

    let orchestrator = Orchestrator::new(&app.config, app.verbose);
    let actions = orchestrator
        .load_environment(current, args.project.as_deref(), &layer)
        .map_err(|err| {
            if let ResolveError::UnknownLayer { .. } = &err {
                let shown = args
                    .project
                    .as_deref()
                    .and_then(|token| project_resolver::resolve(&app.config, token).ok())
                    .or(current);
                if let Some(project) = shown {
                    commons::print_available_layers(project);
                }
            }
            err
        })?;

    commons::emit(&actions)
}
