#![allow(dead_code)]

use std::collections::BTreeMap;

use shellcmd::config::{CommandConfig, ConfigFile, RawConfigFile};
use shellcmd::types::{DEFAULT_TIMEOUT_SECS, DEFAULT_VERBOSE};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                shell_command: BTreeMap::new(),
            },
        }
    }

    pub fn with_command(mut self, name: &str, command: CommandConfig) -> Self {
        self.config.shell_command.insert(name.to_string(), command);
        self
    }

    /// The raw config, for tests that exercise validation failures.
    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn try_build(self) -> anyhow::Result<ConfigFile> {
        Ok(ConfigFile::try_from(self.config)?)
    }

    pub fn build(self) -> ConfigFile {
        self.try_build()
            .expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `CommandConfig`.
pub struct CommandConfigBuilder {
    command: CommandConfig,
}

impl CommandConfigBuilder {
    pub fn new(command: &str) -> Self {
        Self {
            command: CommandConfig {
                command: command.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
                verbose: DEFAULT_VERBOSE,
            },
        }
    }

    pub fn timeout(mut self, secs: f64) -> Self {
        self.command.timeout = secs;
        self
    }

    pub fn verbose(mut self, val: bool) -> Self {
        self.command.verbose = val;
        self
    }

    pub fn build(self) -> CommandConfig {
        self.command
    }
}
