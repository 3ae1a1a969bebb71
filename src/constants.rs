// src/constants.rs

/// The name of the directory containing hop configuration (inside the system config dir).
pub const CONFIG_DIR_NAME: &str = "hop";

/// The name of the configuration file (inside the hop config dir).
pub const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "HOP_CONFIG";

/// The reserved base environment layer, merged under every named layer.
pub const DEFAULT_LAYER: &str = "default";

/// Built-in command names, reserved ahead of user-defined custom commands.
pub const BUILTIN_COMMANDS: &[&str] = &["to", "env", "run", "list", "config", "completion"];
