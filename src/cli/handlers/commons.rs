// src/cli/handlers/commons.rs

use crate::core::context;
use crate::models::{Config, Project, ScriptAction};
use crate::system::emitter::ShellEmitter;
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

/// Writes the resolved actions to stdout as the eval-able statement stream.
pub fn emit(actions: &[ScriptAction]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    ShellEmitter::new(&mut lock).emit_all(actions)?;
    lock.flush()?;
    Ok(())
}

/// Detects the project containing the current working directory, the ambient
/// context for `env`/`run` actions issued without an explicit project token.
pub fn detect_current_project(config: &Config) -> Option<&Project> {
    let cwd = std::env::current_dir().ok()?;
    context::current_project(config, &cwd)
}

/// Picks the candidate closest to a mistyped token, for "Did you mean" hints
/// after a failed lookup. Resolution itself stays exact-match; this only
/// shapes the stderr diagnostic.
pub fn suggest<'a>(
    input: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    candidates
        .into_iter()
        .map(|candidate| (candidate, strsim::jaro_winkler(input, candidate)))
        .filter(|(_, score)| *score >= 0.8)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate)
}

/// Prints the configured projects to stderr, typically after a failed lookup.
pub fn print_available_projects(config: &Config) {
    if config.projects.is_empty() {
        eprintln!("{}", "No projects configured.".yellow());
        return;
    }
    eprintln!("\nAvailable projects:");
    let mut projects: Vec<&Project> = config.projects.iter().collect();
    projects.sort_by(|a, b| a.name.cmp(&b.name));
    for project in projects {
        if project.aliases.is_empty() {
            eprintln!("  {}", project.name.green());
        } else {
            eprintln!(
                "  {} {}",
                project.name.green(),
                format!("(aliases: {})", project.aliases.join(", ")).dimmed()
            );
        }
    }
}

/// Prints a project's environment layers to stderr.
pub fn print_available_layers(project: &Project) {
    let mut layers = project.layer_names();
    if layers.is_empty() {
        eprintln!("{}", format!("No environments configured for project '{}'.", project.name).yellow());
        return;
    }
    layers.sort_unstable();
    let autoload = project.env.as_ref().and_then(|e| e.autoload.as_deref());
    eprintln!("\nAvailable environments:");
    for layer in layers {
        if autoload == Some(layer) {
            eprintln!("  {} {}", layer.green(), "(autoload)".dimmed());
        } else {
            eprintln!("  {}", layer.green());
        }
    }
}
