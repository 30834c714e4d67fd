// src/exec/runner.rs

//! Runner for a single named external command.

use std::process::{Output, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::{parse_template, parse_timeout};
use crate::exec::split::{split, SplitError};
use crate::report::Reporter;
use crate::types::{CommandDefinition, RunResult};

/// Message reported on the error channel when the deadline passes.
pub const TIMEOUT_MESSAGE: &str = "Command timeout";

/// Executes one [`CommandDefinition`] on demand.
///
/// A runner holds no per-run state, so it can be invoked again after a
/// timeout or an error. Distinct runners share nothing except, possibly, the
/// reporter.
pub struct CommandRunner {
    definition: CommandDefinition,
    template: Vec<String>,
    timeout: Duration,
    reporter: Arc<dyn Reporter>,
}

impl std::fmt::Debug for CommandRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRunner")
            .field("definition", &self.definition)
            .field("template", &self.template)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl CommandRunner {
    /// Build a runner, validating the definition.
    ///
    /// Fails with `ShellCmdError::ConfigError` when the command line does
    /// not split into at least one word or the timeout is not a finite
    /// number >= 0. Nothing is spawned here.
    pub fn new(
        definition: CommandDefinition,
        reporter: Arc<dyn Reporter>,
    ) -> crate::errors::Result<Self> {
        let template = parse_template(&definition.name, &definition.command)?;
        let timeout = parse_timeout(&definition.name, definition.timeout_secs)?;

        debug!(
            command = %definition.name,
            ?template,
            timeout_ms = timeout.as_millis() as u64,
            verbose = definition.verbose,
            "built command runner"
        );

        Ok(Self {
            definition,
            template,
            timeout,
            reporter,
        })
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn definition(&self) -> &CommandDefinition {
        &self.definition
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The argv a `run(extra_params)` call would execute.
    pub fn compose(&self, extra_params: &str) -> std::result::Result<Vec<String>, SplitError> {
        let mut argv = self.template.clone();
        argv.extend(split(extra_params)?);
        Ok(argv)
    }

    /// Run the command with `extra_params` appended, and report the outcome.
    ///
    /// Never fails: spawn problems, I/O problems and bad quoting in
    /// `extra_params` all come back as `RunResult::ExecutionError`, with a
    /// matching error notification.
    pub async fn run(&self, extra_params: &str) -> RunResult {
        let argv = match self.compose(extra_params) {
            Ok(argv) => argv,
            Err(e) => {
                return self.finish(RunResult::ExecutionError {
                    message: format!("invalid PARAMS: {e}"),
                });
            }
        };

        if self.definition.verbose {
            self.reporter.info(&format!("Running Command: {argv:?}"));
        }

        let result = match execute(&self.definition.name, &argv, self.timeout).await {
            Ok(Some(output)) => RunResult::Success {
                stdout: output.stdout,
                stderr: output.stderr,
            },
            Ok(None) => RunResult::TimedOut,
            Err(err) => RunResult::ExecutionError {
                message: format!("{err:#}"),
            },
        };

        self.finish(result)
    }

    /// Emit the post-run notifications for `result`.
    fn finish(&self, result: RunResult) -> RunResult {
        match result {
            RunResult::Success { stdout, stderr } => {
                if self.definition.verbose {
                    if let Err(message) = self.report_output(&stdout, &stderr) {
                        return self.finish(RunResult::ExecutionError { message });
                    }
                }
                RunResult::Success { stdout, stderr }
            }
            RunResult::TimedOut => {
                warn!(
                    command = %self.definition.name,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "command timed out"
                );
                self.reporter.error(TIMEOUT_MESSAGE);
                RunResult::TimedOut
            }
            RunResult::ExecutionError { message } => {
                warn!(command = %self.definition.name, error = %message, "command failed");
                self.reporter.error(&format!("Command error: {message}"));
                RunResult::ExecutionError { message }
            }
        }
    }

    /// One info notification per non-empty stream, stdout first.
    ///
    /// Both streams are decoded before anything is reported, so a decode
    /// failure never leaves a half-reported run behind.
    fn report_output(&self, stdout: &[u8], stderr: &[u8]) -> std::result::Result<(), String> {
        let mut texts = Vec::with_capacity(2);
        for (stream, bytes) in [("stdout", stdout), ("stderr", stderr)] {
            if bytes.is_empty() {
                continue;
            }
            let text = std::str::from_utf8(bytes)
                .map_err(|e| format!("{stream} is not valid UTF-8: {e}"))?;
            texts.push(text);
        }

        for text in texts {
            self.reporter.info(text);
        }
        Ok(())
    }
}

/// Spawn `argv` and wait for it, bounded by `limit`.
///
/// Returns `Ok(None)` on timeout. The child is spawned with
/// `kill_on_drop(true)`, so when the timeout drops the wait future the child
/// is sent a kill signal and reaped in the background by tokio.
async fn execute(name: &str, argv: &[String], limit: Duration) -> Result<Option<Output>> {
    let (program, args) = argv
        .split_first()
        .context("empty argument vector")?;

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let started = Instant::now();
    let child = cmd
        .spawn()
        .with_context(|| format!("failed to spawn '{}'", program))?;

    info!(command = %name, pid = child.id(), ?argv, "started command process");

    // `wait_with_output` drains stdout and stderr concurrently with the wait,
    // so a child filling one pipe cannot stall us on the other.
    match tokio::time::timeout(limit, child.wait_with_output()).await {
        Ok(output) => {
            let output = output.with_context(|| format!("waiting for '{}'", program))?;
            info!(
                command = %name,
                exit_code = output.status.code().unwrap_or(-1),
                stdout_bytes = output.stdout.len(),
                stderr_bytes = output.stderr.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "command process exited"
            );
            Ok(Some(output))
        }
        Err(_elapsed) => {
            debug!(command = %name, "deadline reached; dropping child (killed on drop)");
            Ok(None)
        }
    }
}
