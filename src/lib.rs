// src/lib.rs

pub mod can_scan;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod registry;
pub mod report;
pub mod types;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, CliCommand};
use crate::config::loader::{default_config_path, load_and_validate};
use crate::config::model::ConfigFile;
use crate::exec::join;
use crate::registry::{CommandRegistry, PARAMS_KEY};
use crate::report::{ConsoleReporter, Reporter};
use crate::types::RunResult;

pub use crate::exec::CommandRunner;
pub use crate::types::CommandDefinition;

/// High-level entry point used by `main.rs`.
///
/// Returns `Ok(false)` when the requested command ran but did not succeed
/// (timeout, execution error, missing CAN interface), so the binary can exit
/// non-zero without treating it as a crash.
pub async fn run(args: CliArgs) -> Result<bool> {
    let reporter: Arc<dyn Reporter> = Arc::new(ConsoleReporter);

    match args.command {
        CliCommand::List => {
            let cfg = load_config(args.config.as_deref())?;
            print_commands(&cfg);
            Ok(true)
        }
        CliCommand::Check => {
            let cfg = load_config(args.config.as_deref())?;
            // Building the registry runs the same checks the runners do.
            let registry = CommandRegistry::from_config(&cfg, reporter)?;
            print_dry_run(&registry);
            Ok(true)
        }
        CliCommand::Run { name, params } => {
            let cfg = load_config(args.config.as_deref())?;
            let registry = CommandRegistry::from_config(&cfg, reporter)?;

            let mut console_params = BTreeMap::new();
            console_params.insert(PARAMS_KEY.to_string(), params);

            let result = registry.dispatch(&name, &console_params).await?;
            info!(command = %name, outcome = outcome_label(&result), "dispatch finished");
            Ok(result.is_success())
        }
        CliCommand::ScanCan { interface } => {
            let interface = can_scan::resolve_interface(interface.as_deref());
            let home = can_scan::home_dir();
            let outcome = can_scan::scan(&interface, home.as_deref(), reporter).await?;
            debug!(?outcome, "CAN scan finished");
            Ok(!matches!(outcome, can_scan::ScanOutcome::InterfaceMissing))
        }
    }
}

fn load_config(path: Option<&str>) -> Result<ConfigFile> {
    let path = path.map(PathBuf::from).unwrap_or_else(default_config_path);
    debug!(path = %path.display(), "loading config");
    Ok(load_and_validate(&path)?)
}

/// Print configured commands with their settings.
fn print_commands(cfg: &ConfigFile) {
    println!("commands ({}):", cfg.shell_command.len());
    for definition in cfg.definitions() {
        println!("  - {}", definition.name);
        println!("      command: {}", definition.command);
        println!("      timeout: {}s", definition.timeout_secs);
        println!("      verbose: {}", definition.verbose);
    }
}

/// Dry-run output: the argv each command would execute without PARAMS.
fn print_dry_run(registry: &CommandRegistry) {
    println!("shellcmd dry-run");
    println!("commands ({}):", registry.len());
    for name in registry.names() {
        let Some(runner) = registry.get(name) else {
            continue;
        };
        // The template was validated when the runner was built.
        let argv = runner.compose("").unwrap_or_default();
        println!("  - {name}");
        println!("      argv: {:?}", argv);
        println!("      line: {}", join(&argv));
        println!("      timeout: {:?}", runner.timeout());
    }

    debug!("dry-run complete (no execution)");
}

/// Short label for a run outcome, used in logs and by callers that only
/// care about the variant.
pub fn outcome_label(result: &RunResult) -> &'static str {
    match result {
        RunResult::Success { .. } => "success",
        RunResult::TimedOut => "timeout",
        RunResult::ExecutionError { .. } => "error",
    }
}
