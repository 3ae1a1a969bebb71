// src/models.rs

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

// --- CONFIG MODELS (what is read from config.toml) ---
// The configuration is loaded once per invocation and is immutable afterwards.
// `BTreeMap` is used throughout so that exports and listings are deterministic
// regardless of the order keys appear in the file.

/// The root of the deserialized `config.toml`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    /// Global custom commands, visible from any working directory.
    #[serde(default)]
    pub commands: BTreeMap<String, String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Behavior switches that are deliberate configuration choices, not guesses.
#[derive(Deserialize, Debug, Clone, Copy, Default)]
pub struct Settings {
    /// What to do when a command template references a variable that is not
    /// present in the resolved environment.
    #[serde(default)]
    pub on_missing_var: MissingVarPolicy,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingVarPolicy {
    /// Leave the reference verbatim; the evaluating shell resolves it.
    #[default]
    Passthrough,
    /// Fail resolution loudly.
    Error,
}

/// A single configured project.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Project {
    pub name: String,
    /// Filesystem root; may contain a `~` shorthand, expanded at resolution time.
    pub root: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Project-scoped custom commands. These shadow global commands of the same name.
    #[serde(default)]
    pub commands: BTreeMap<String, String>,
    pub env: Option<EnvConfig>,
    /// Shell templates run, in order, after navigating into the project.
    #[serde(default)]
    pub autorun: Vec<String>,
}

/// The `[projects.env]` block: named variable layers plus an optional
/// `autoload` pointer naming the layer applied automatically on navigation.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EnvConfig {
    pub autoload: Option<String>,
    /// Layer name -> variable name -> value. The `default` layer, if present,
    /// is merged under every named layer.
    #[serde(flatten)]
    pub layers: BTreeMap<String, BTreeMap<String, String>>,
}

impl Project {
    /// Exact-match test against the project's name and aliases.
    pub fn matches_token(&self, token: &str) -> bool {
        self.name == token || self.aliases.iter().any(|a| a == token)
    }

    /// Layer names a user can ask for (the reserved `default` layer excluded).
    pub fn layer_names(&self) -> Vec<&str> {
        self.env
            .as_ref()
            .map(|env| {
                env.layers
                    .keys()
                    .map(String::as_str)
                    .filter(|name| *name != crate::constants::DEFAULT_LAYER)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// The final, merged variable set for one action. Computed fresh per action
/// and discarded after emission.
pub type ResolvedEnvironment = BTreeMap<String, String>;

// --- EMISSION MODEL ---

/// A logical shell action produced by the orchestrator. The emitter is the
/// only component that turns these into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptAction {
    ChangeDirectory(PathBuf),
    ExportVar { name: String, value: String },
    /// A fully variable-expanded command, emitted as-is.
    RunCommand(String),
    /// Verbose-mode preview of the command about to run.
    Echo(String),
}
