// src/cli/handlers/mod.rs

use crate::models::Config;
use std::path::PathBuf;

pub mod commons;
pub mod completion;
pub mod config_cmd;
pub mod env;
pub mod list;
pub mod run;
pub mod to;

/// Per-invocation application state: the validated, immutable configuration,
/// where it came from, and the verbose policy. Built once in `main` and
/// passed by reference into every handler.
#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub config_path: PathBuf,
    pub verbose: bool,
}
