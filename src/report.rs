// src/report.rs

//! Operator-facing notifications.
//!
//! The runner never prints directly; it talks to a [`Reporter`] handed to it
//! at construction. The console binary uses [`ConsoleReporter`]; tests use a
//! recording implementation from `shellcmd-test-utils`.

use tracing::debug;

/// Two notification channels surfaced to the operator.
pub trait Reporter: Send + Sync {
    /// Informational message (argv echo, captured output).
    fn info(&self, msg: &str);

    /// Error message (`Command timeout`, `Command error: ...`).
    fn error(&self, msg: &str);
}

/// Writes notifications the way the printer console shows them: info lines
/// prefixed with `// ` on stdout, errors prefixed with `!! ` on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, msg: &str) {
        debug!(len = msg.len(), "console info");
        for line in info_lines(msg) {
            println!("{line}");
        }
    }

    fn error(&self, msg: &str) {
        debug!(msg, "console error");
        eprintln!("{}", error_line(msg));
    }
}

/// Console rendering of an info message: one `// `-prefixed line per line
/// of `msg`.
pub fn info_lines(msg: &str) -> impl Iterator<Item = String> + '_ {
    msg.lines().map(|line| format!("// {line}"))
}

/// Console rendering of an error message.
pub fn error_line(msg: &str) -> String {
    format!("!! {msg}")
}
