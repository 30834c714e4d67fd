// src/config/validate.rs

use std::time::Duration;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, ShellCmdError};
use crate::exec::split;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::ShellCmdError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.shell_command))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_commands(cfg)?;
    for (name, cmd) in cfg.shell_command.iter() {
        validate_name(name)?;
        parse_template(name, &cmd.command)?;
        parse_timeout(name, cmd.timeout)?;
    }
    Ok(())
}

fn ensure_has_commands(cfg: &RawConfigFile) -> Result<()> {
    if cfg.shell_command.is_empty() {
        return Err(ShellCmdError::ConfigError(
            "config must contain at least one [shell_command.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ShellCmdError::ConfigError(
            "shell_command name must not be empty".to_string(),
        ));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(ShellCmdError::ConfigError(format!(
            "shell_command name '{}' must not contain whitespace",
            name
        )));
    }
    Ok(())
}

/// Split a command template, requiring at least one word (the executable).
pub fn parse_template(name: &str, command: &str) -> Result<Vec<String>> {
    let words = split(command).map_err(|e| {
        ShellCmdError::ConfigError(format!("shell_command '{}': invalid `command`: {}", name, e))
    })?;

    if words.is_empty() {
        return Err(ShellCmdError::ConfigError(format!(
            "shell_command '{}': `command` must name an executable (got {:?})",
            name, command
        )));
    }

    Ok(words)
}

/// Convert a configured timeout into a `Duration`, rejecting negative,
/// NaN, infinite and out-of-range values.
pub fn parse_timeout(name: &str, timeout_secs: f64) -> Result<Duration> {
    if timeout_secs.is_nan() || timeout_secs < 0.0 {
        return Err(ShellCmdError::ConfigError(format!(
            "shell_command '{}': `timeout` must be >= 0 (got {})",
            name, timeout_secs
        )));
    }

    Duration::try_from_secs_f64(timeout_secs).map_err(|e| {
        ShellCmdError::ConfigError(format!(
            "shell_command '{}': `timeout` out of range ({}): {}",
            name, timeout_secs, e
        ))
    })
}
