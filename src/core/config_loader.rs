//! # Config Loader
//!
//! Finds, parses, and validates the static `config.toml`. The rest of the
//! crate only ever sees a validated, immutable [`Config`]; every resolution
//! invariant that can be checked up front is checked here, and all violations
//! are reported together rather than one at a time.

use crate::constants::DEFAULT_LAYER;
use crate::core::paths::{self, PathError};
use crate::models::{Config, Project};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("could not read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
    #[error("configuration validation failed ({}):\n  - {}", path.display(), problems.join("\n  - "))]
    Validation { path: PathBuf, problems: Vec<String> },
}

/// Locates, loads, and validates the configuration.
///
/// Returns the validated model together with the path it was loaded from
/// (the path is reported back to the user by `hop config path`).
pub fn load_and_validate(cli_arg: Option<&Path>) -> Result<(Config, PathBuf), ConfigError> {
    let path = paths::find_config_path(cli_arg)?;
    let config = load(&path)?;
    validate(&config, &path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok((config, path))
}

fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

/// Validates the structural invariants of the configuration.
///
/// Collects every problem before failing so the user can fix the file in one
/// pass.
pub fn validate(config: &Config, path: &Path) -> Result<(), ConfigError> {
    let mut problems = Vec::new();

    // Names and aliases form one unique-key namespace across all projects.
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for project in &config.projects {
        validate_project(project, &mut problems);
        for token in std::iter::once(project.name.as_str())
            .chain(project.aliases.iter().map(String::as_str))
        {
            if token.is_empty() {
                continue;
            }
            if let Some(owner) = seen.insert(token, &project.name) {
                problems.push(format!(
                    "'{token}' is declared by both '{owner}' and '{}'; project names and aliases must be unique",
                    project.name
                ));
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation {
            path: path.to_path_buf(),
            problems,
        })
    }
}

fn validate_project(project: &Project, problems: &mut Vec<String>) {
    if project.name.is_empty() {
        problems.push("a project is missing a 'name'".to_string());
        return;
    }
    let prefix = format!("project '{}'", project.name);

    if project.root.is_empty() {
        problems.push(format!("{prefix} is missing a 'root' directory"));
    }

    if let Some(env) = &project.env {
        if let Some(autoload) = &env.autoload {
            if autoload == DEFAULT_LAYER {
                problems.push(format!(
                    "{prefix}: 'env.autoload' must name a layer other than '{DEFAULT_LAYER}'"
                ));
            } else if !env.layers.contains_key(autoload) {
                problems.push(format!(
                    "{prefix}: 'env.autoload' references undefined layer '{autoload}'"
                ));
            }
        }

        // Variable names are interpolated into `export NAME=...` statements
        // unquoted, so anything but a shell identifier could smuggle extra
        // statements into the eval stream.
        for (layer, vars) in &env.layers {
            for name in vars.keys() {
                if !is_shell_identifier(name) {
                    problems.push(format!(
                        "{prefix}: layer '{layer}' variable '{name}' is not a valid shell identifier"
                    ));
                }
            }
        }
    }
}

fn is_shell_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
