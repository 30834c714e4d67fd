// src/types.rs

//! Types shared between the config layer, the runner and the registry.

/// Default `timeout` for a named command, in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 2.0;

/// Default `verbose` flag for a named command.
pub const DEFAULT_VERBOSE: bool = true;

/// One named external command, as configured.
///
/// Immutable once built; a [`crate::exec::CommandRunner`] owns its definition
/// for its whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDefinition {
    /// Name the command is registered under (the `<name>` in
    /// `[shell_command.<name>]`).
    pub name: String,
    /// Base command line: program plus fixed arguments, shell-quoted.
    pub command: String,
    /// How long to wait for the process before giving up.
    pub timeout_secs: f64,
    /// Whether to report the argv before running and the captured output
    /// afterwards.
    pub verbose: bool,
}

impl CommandDefinition {
    /// Definition with the default timeout and verbosity.
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            verbose: DEFAULT_VERBOSE,
        }
    }

    pub fn with_timeout(mut self, timeout_secs: f64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Outcome of a single `run`.
///
/// The process exit status is deliberately not part of this: any process that
/// exits before the deadline counts as `Success`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    /// The process exited in time; both streams were captured in full.
    Success { stdout: Vec<u8>, stderr: Vec<u8> },
    /// The process was still running when the timeout elapsed.
    TimedOut,
    /// The process could not be spawned, talked to, or its output decoded.
    ExecutionError { message: String },
}

impl RunResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RunResult::Success { .. })
    }

    pub fn stdout(&self) -> Option<&[u8]> {
        match self {
            RunResult::Success { stdout, .. } => Some(stdout),
            _ => None,
        }
    }

    pub fn stderr(&self) -> Option<&[u8]> {
        match self {
            RunResult::Success { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}
