// src/core/paths.rs

use crate::constants::{CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILENAME};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("could not find the system config directory")]
    ConfigDirNotFound,
    #[error("config file not found: {}", path.display())]
    ConfigFileNotFound { path: PathBuf },
    #[error(
        "no configuration file found; create one at {}, set ${CONFIG_ENV_VAR}, or pass --config",
        default.display()
    )]
    NoConfigFile { default: PathBuf },
}

/// Expands a leading `~` in a user-supplied path.
///
/// Only home-directory shorthand is expanded here; environment variables in
/// paths are left to the evaluating shell.
pub fn expand_user_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

/// A display-clean form of a path (strips Windows `\\?\` prefixes and the like).
pub fn clean(path: &Path) -> PathBuf {
    dunce::simplified(path).to_path_buf()
}

/// Locates the configuration file.
///
/// Priority order: the `--config` argument, the `$HOP_CONFIG` environment
/// variable, then `<config_dir>/hop/config.toml`.
pub fn find_config_path(cli_arg: Option<&Path>) -> Result<PathBuf, PathError> {
    if let Some(arg) = cli_arg {
        let path = expand_user_path(&arg.to_string_lossy());
        return if path.is_file() {
            Ok(path)
        } else {
            Err(PathError::ConfigFileNotFound { path })
        };
    }

    if let Ok(from_env) = env::var(CONFIG_ENV_VAR) {
        let path = expand_user_path(&from_env);
        return if path.is_file() {
            Ok(path)
        } else {
            Err(PathError::ConfigFileNotFound { path })
        };
    }

    let default = default_config_path()?;
    if default.is_file() {
        Ok(default)
    } else {
        Err(PathError::NoConfigFile { default })
    }
}

/// The default configuration location (`~/.config/hop/config.toml` on Linux).
pub fn default_config_path() -> Result<PathBuf, PathError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
        .ok_or(PathError::ConfigDirNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_is_expanded() {
        let expanded = expand_user_path("~/proj/api");
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("proj/api"));
    }

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_user_path("/opt/work"), PathBuf::from("/opt/work"));
    }

    #[test]
    fn explicit_config_arg_must_exist() {
        let missing = Path::new("/definitely/not/here.toml");
        let err = find_config_path(Some(missing)).unwrap_err();
        assert!(matches!(err, PathError::ConfigFileNotFound { .. }));
    }
}
