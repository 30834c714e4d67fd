// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `shellcmd`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shellcmd",
    version,
    about = "Run configured named shell commands with a timeout.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `$SHELLCMD_CONFIG`, or `shell_commands.toml` in the current
    /// working directory.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SHELLCMD_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// List the configured commands.
    List,

    /// Validate the config and print each command line, without running
    /// anything.
    Check,

    /// Run one named command.
    Run {
        /// Name of the command (`[shell_command.<NAME>]`).
        name: String,

        /// Extra arguments appended to the configured command line,
        /// shell-quoted as one string.
        #[arg(long, value_name = "STRING", default_value = "", allow_hyphen_values = true)]
        params: String,
    },

    /// Look for unconfigured boards on a CAN interface.
    ScanCan {
        /// CAN interface; defaults to `$KATANA_CAN_INTERFACE` or `can0`.
        #[arg(long, value_name = "IFACE")]
        interface: Option<String>,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
