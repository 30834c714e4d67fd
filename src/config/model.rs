// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::{CommandDefinition, DEFAULT_TIMEOUT_SECS, DEFAULT_VERBOSE};

/// Configuration exactly as read from TOML, before validation.
///
/// ```toml
/// [shell_command.hello]
/// command = "echo hello"
/// timeout = 2.0
/// verbose = true
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// All command blocks from `[shell_command.<name>]`, keyed by name.
    #[serde(default)]
    pub shell_command: BTreeMap<String, CommandConfig>,
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see `validate.rs`), so
/// every definition it yields is known to produce a working runner.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub shell_command: BTreeMap<String, CommandConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(shell_command: BTreeMap<String, CommandConfig>) -> Self {
        Self { shell_command }
    }

    /// Command definitions in name order.
    pub fn definitions(&self) -> impl Iterator<Item = CommandDefinition> + '_ {
        self.shell_command
            .iter()
            .map(|(name, cmd)| cmd.to_definition(name))
    }

    pub fn definition(&self, name: &str) -> Option<CommandDefinition> {
        self.shell_command
            .get(name)
            .map(|cmd| cmd.to_definition(name))
    }
}

/// `[shell_command.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandConfig {
    /// Program plus fixed arguments, shell-quoted.
    pub command: String,

    /// Seconds to wait before giving up on the process. Minimum 0.
    #[serde(default = "default_timeout")]
    pub timeout: f64,

    /// Echo the argv and the captured output to the console.
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

fn default_timeout() -> f64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_verbose() -> bool {
    DEFAULT_VERBOSE
}

impl CommandConfig {
    pub fn to_definition(&self, name: &str) -> CommandDefinition {
        CommandDefinition {
            name: name.to_string(),
            command: self.command.clone(),
            timeout_secs: self.timeout,
            verbose: self.verbose,
        }
    }
}
