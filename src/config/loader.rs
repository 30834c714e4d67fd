// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Environment variable that overrides the default config location.
pub const CONFIG_ENV: &str = "SHELLCMD_CONFIG";

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** check that the
/// commands are runnable. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    debug!(
        path = %path.display(),
        commands = config.shell_command.len(),
        "parsed config file"
    );
    Ok(config)
}

/// Load a configuration file from path and validate every command block.
///
/// - Reads TOML.
/// - Applies defaults (`timeout = 2.0`, `verbose = true`).
/// - Checks names, that each `command` splits into at least one word, and
///   that each `timeout` is a finite number >= 0.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Config path used when `--config` is not given: `$SHELLCMD_CONFIG`, or
/// `shell_commands.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("shell_commands.toml"))
}
