//! # Resolution Engine
//!
//! Everything between a validated [`crate::models::Config`] and the ordered
//! list of [`crate::models::ScriptAction`]s handed to the emitter lives here:
//! project and command lookup, environment-layer merging, template variable
//! substitution, and the per-action orchestration that composes them.

use std::path::PathBuf;
use thiserror::Error;

pub mod command_resolver;
pub mod config_loader;
pub mod context;
pub mod env_resolver;
pub mod interpolator;
pub mod orchestrator;
pub mod paths;
pub mod project_resolver;

/// Failures of the resolution engine. All of these represent user
/// configuration or input mistakes; none are retried.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("there is no project '{token}' configured")]
    NotFound { token: String },

    /// Defensive: unique names/aliases are enforced at validation time, so
    /// this should be unreachable for a validated configuration.
    #[error("'{token}' matches more than one project name or alias")]
    AmbiguousReference { token: String },

    #[error("project '{project}' has no environment layer '{layer}'")]
    UnknownLayer { project: String, layer: String },

    #[error("command '{name}' is not defined for this project or globally")]
    CommandNotFound { name: String },

    #[error("project root '{}' does not exist", path.display())]
    PathNotFound { path: PathBuf },

    #[error("variable '{name}' is not set in the resolved environment")]
    UnsetVariable { name: String },

    #[error("not inside a configured project (pass --project or `cd` into one)")]
    NoActiveProject,

    #[error("value cannot be represented as a shell word: {0}")]
    Quote(#[from] shlex::QuoteError),
}
