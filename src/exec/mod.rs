// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`split`] turns shell-quoted command lines into argument vectors. It is
//!   pure and has no knowledge of processes.
//! - [`runner`] owns [`CommandRunner`], which composes the argv for one named
//!   command, runs it with `tokio::process::Command` under a timeout, and
//!   reports the outcome through an injected [`crate::report::Reporter`].

pub mod runner;
pub mod split;

pub use runner::CommandRunner;
pub use split::{compose_argv, join, quote, split, SplitError};
