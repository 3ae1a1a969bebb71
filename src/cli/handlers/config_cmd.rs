// src/cli/handlers/config_cmd.rs

use crate::cli::handlers::{App, commons};
use crate::core::config_loader;
use crate::models::ScriptAction;
use crate::system::emitter;
use anyhow::{Result, anyhow};
use colored::Colorize;

/// `hop config [edit|validate|path]` (default: edit).
pub fn handle(args: Vec<String>, app: &App) -> Result<()> {
    let subcommand = args.first().map(String::as_str).unwrap_or("edit");
    match subcommand {
        "edit" => edit(app),
        "validate" => validate(app),
        "path" => {
            eprintln!("{}", app.config_path.display());
            Ok(())
        }
        other => Err(anyhow!(
            "unknown config subcommand '{other}'; expected edit, validate, or path"
        )),
    }
}

/// Emits a run statement opening the config in `$EDITOR`. The redirection
/// from /dev/tty keeps the editor interactive even though the wrapper
/// captures our stdout.
fn edit(app: &App) -> Result<()> {
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let path = emitter::quote(&app.config_path.to_string_lossy())?.into_owned();
    commons::emit(&[ScriptAction::RunCommand(format!(
        "{editor} {path} </dev/tty"
    ))])
}

fn validate(app: &App) -> Result<()> {
    // The config already parsed at startup; re-run the schema checks so the
    // subcommand reports on exactly the file that was loaded.
    config_loader::validate(&app.config, &app.config_path)?;
    eprintln!(
        "{} Configuration is valid: {}",
        "ok:".green().bold(),
        app.config_path.display()
    );
    Ok(())
}
