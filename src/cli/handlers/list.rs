// src/cli/handlers/list.rs

use crate::cli::args::ListArgs;
use crate::cli::handlers::{App, commons};
use crate::constants::BUILTIN_COMMANDS;
use crate::core::project_resolver;
use crate::models::Project;
use anyhow::{Result, anyhow};
use clap::Parser;
use colored::Colorize;

/// `hop list projects|commands|environments [project]`.
///
/// Listings are informational, so they go to stderr; the eval stream stays
/// empty for this command.
pub fn handle(args: Vec<String>, app: &App) -> Result<()> {
    let args = ListArgs::try_parse_from(args)?;

    match args.kind.as_deref() {
        Some("projects") => list_projects(app),
        Some("commands") => list_commands(app, args.project.as_deref()),
        Some("environments") => list_environments(app, args.project.as_deref()),
        Some(other) => Err(anyhow!(
            "unknown list type '{other}'; expected projects, commands, or environments"
        )),
        None => Err(anyhow!(
            "specify what to list: hop list projects | commands [project] | environments [project]"
        )),
    }
}

fn list_projects(app: &App) -> Result<()> {
    if app.config.projects.is_empty() {
        eprintln!("{}", "No projects configured.".yellow());
        return Ok(());
    }

    eprintln!("{}\n", "Available projects:".cyan());
    let mut projects: Vec<&Project> = app.config.projects.iter().collect();
    projects.sort_by(|a, b| a.name.cmp(&b.name));
    for project in projects {
        eprintln!("  {}", project.name.green());
        eprintln!("    Root: {}", project.root);
        if !project.aliases.is_empty() {
            eprintln!("    Aliases: {}", project.aliases.join(", "));
        }
        if !project.commands.is_empty() {
            eprintln!("    Commands: {}", project.commands.len());
        }
        let mut layers = project.layer_names();
        if !layers.is_empty() {
            layers.sort_unstable();
            eprintln!("    Environments: {}", layers.join(", "));
        }
        eprintln!();
    }
    Ok(())
}

fn list_commands(app: &App, token: Option<&str>) -> Result<()> {
    let project = match token {
        Some(token) => Some(project_resolver::resolve(&app.config, token)?),
        None => commons::detect_current_project(&app.config),
    };

    eprintln!("{}\n", "Available commands:".cyan());

    eprintln!("{}", "Built-in commands:".yellow());
    for name in BUILTIN_COMMANDS {
        eprintln!("  {}", name.green());
    }
    eprintln!();

    if !app.config.commands.is_empty() {
        eprintln!("{}", "Global commands:".yellow());
        for name in app.config.commands.keys() {
            eprintln!("  {}", name.green());
        }
        eprintln!();
    }

    if let Some(project) = project {
        if project.commands.is_empty() {
            eprintln!("{}", format!("No commands specific to project '{}'.", project.name).yellow());
        } else {
            eprintln!("{}", format!("Commands for project '{}':", project.name).yellow());
            for name in project.commands.keys() {
                eprintln!("  {}", name.green());
            }
        }
    }
    Ok(())
}

fn list_environments(app: &App, token: Option<&str>) -> Result<()> {
    let project = match token {
        Some(token) => project_resolver::resolve(&app.config, token)?,
        None => commons::detect_current_project(&app.config).ok_or_else(|| {
            anyhow!("not inside a project; usage: hop list environments <project>")
        })?,
    };

    eprintln!("{}", format!("Environments for project '{}':", project.name).cyan());
    commons::print_available_layers(project);
    Ok(())
}
