// src/registry.rs

//! Name -> runner table standing in for the console's command registration.
//!
//! The console invokes a named command with a map of parameters, e.g.
//! `RUN_SHELL_COMMAND CMD=backup PARAMS="--full /data"`. The registry looks
//! up the runner for `CMD` and passes `PARAMS` through as the extra
//! arguments.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::ConfigFile;
use crate::errors::{Result, ShellCmdError};
use crate::exec::CommandRunner;
use crate::report::Reporter;
use crate::types::RunResult;

/// Parameter carrying the caller-supplied extra arguments.
pub const PARAMS_KEY: &str = "PARAMS";

#[derive(Debug, Default)]
pub struct CommandRegistry {
    runners: BTreeMap<String, CommandRunner>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one runner per configured command, all sharing `reporter`.
    ///
    /// Any invalid definition aborts the whole build: a misconfigured
    /// command should stop startup rather than silently go missing.
    pub fn from_config(cfg: &ConfigFile, reporter: Arc<dyn Reporter>) -> Result<Self> {
        let mut registry = Self::new();
        for definition in cfg.definitions() {
            let runner = CommandRunner::new(definition, Arc::clone(&reporter))?;
            registry.register(runner)?;
        }
        info!(commands = registry.len(), "command registry ready");
        Ok(registry)
    }

    /// Add a runner under its own name. Names must be unique.
    pub fn register(&mut self, runner: CommandRunner) -> Result<()> {
        let name = runner.name().to_string();
        if self.runners.contains_key(&name) {
            return Err(ShellCmdError::ConfigError(format!(
                "shell_command '{}' is registered more than once",
                name
            )));
        }
        debug!(command = %name, "registered command");
        self.runners.insert(name, runner);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CommandRunner> {
        self.runners.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.runners.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.runners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runners.is_empty()
    }

    /// Run the command registered as `name` with the console parameters
    /// `params`.
    ///
    /// Only an unknown `name` is an error here; everything that can go wrong
    /// while running is part of the returned [`RunResult`].
    pub async fn dispatch(
        &self,
        name: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<RunResult> {
        let runner = self
            .get(name)
            .ok_or_else(|| ShellCmdError::CommandNotFound(name.to_string()))?;

        Ok(runner.run(extra_params(params)).await)
    }
}

/// The `PARAMS` value from a console parameter map (key matched
/// case-insensitively), or `""` when absent.
pub fn extra_params(params: &BTreeMap<String, String>) -> &str {
    params
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(PARAMS_KEY))
        .map(|(_, value)| value.as_str())
        .unwrap_or("")
}
