// src/can_scan.rs

//! Probe a CAN bus for unconfigured controller boards.
//!
//! Nothing CAN-specific happens here: the interface check is `ip link`, and
//! the actual query is delegated to the Klipper/CanBoot or Katapult flash
//! tool when one is installed under the user's home directory.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;
use tracing::{debug, info};

use crate::exec::{quote, CommandRunner};
use crate::report::Reporter;
use crate::types::{CommandDefinition, RunResult};

/// Environment variable naming the CAN interface to scan.
pub const INTERFACE_ENV: &str = "KATANA_CAN_INTERFACE";

pub const DEFAULT_INTERFACE: &str = "can0";

/// Flash tools answer a query within a few seconds; allow some slack.
const QUERY_TIMEOUT_SECS: f64 = 30.0;

const STATS_TIMEOUT_SECS: f64 = 5.0;

/// Paths (relative to `$HOME`) checked for a query tool, in order.
const CANBOOT_TOOL: &str = "klipper/lib/canboot/flash_can.py";
const KATAPULT_TOOL: &str = "katapult/scripts/flashtool.py";

/// Vendor tool able to list unconfigured nodes on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTool {
    CanBoot(PathBuf),
    Katapult(PathBuf),
}

impl ScanTool {
    pub fn path(&self) -> &Path {
        match self {
            ScanTool::CanBoot(p) | ScanTool::Katapult(p) => p,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ScanTool::CanBoot(_) => "Klipper/CanBoot",
            ScanTool::Katapult(_) => "Katapult",
        }
    }

    /// Command line that asks the tool to query `interface`.
    pub fn query_command(&self, interface: &str) -> String {
        format!(
            "python3 {} -i {} -q",
            quote(&self.path().to_string_lossy()),
            quote(interface)
        )
    }
}

/// How a scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// `ip link show` did not know the interface.
    InterfaceMissing,
    /// A flash tool was found and run.
    Queried { tool: ScanTool, result: RunResult },
    /// No flash tool installed; interface statistics were shown instead.
    NoTool { stats: RunResult },
}

/// `cli` if given, else `$KATANA_CAN_INTERFACE`, else `can0`.
pub fn resolve_interface(cli: Option<&str>) -> String {
    cli.map(str::to_string)
        .or_else(|| std::env::var(INTERFACE_ENV).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_INTERFACE.to_string())
}

/// First installed query tool under `home`, CanBoot before Katapult.
pub fn find_scan_tool(home: &Path) -> Option<ScanTool> {
    let canboot = home.join(CANBOOT_TOOL);
    if canboot.exists() {
        return Some(ScanTool::CanBoot(canboot));
    }
    let katapult = home.join(KATAPULT_TOOL);
    if katapult.exists() {
        return Some(ScanTool::Katapult(katapult));
    }
    None
}

/// Whether the OS knows a network link called `interface`.
pub async fn interface_exists(interface: &str) -> bool {
    let status = Command::new("ip")
        .args(["link", "show", interface])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match status {
        Ok(status) => status.success(),
        Err(e) => {
            debug!(interface, error = %e, "could not run `ip link show`");
            false
        }
    }
}

/// Scan `interface`, looking for query tools under `home`.
pub async fn scan(
    interface: &str,
    home: Option<&Path>,
    reporter: Arc<dyn Reporter>,
) -> crate::errors::Result<ScanOutcome> {
    reporter.info(&format!("Scanning CAN Bus ({interface})..."));

    if !interface_exists(interface).await {
        reporter.error(&format!(
            "Interface {interface} not found. Setup network first."
        ));
        return Ok(ScanOutcome::InterfaceMissing);
    }

    if let Some(tool) = home.and_then(find_scan_tool) {
        info!(interface, tool = %tool.path().display(), "querying CAN bus");
        reporter.info(&format!(
            "Using {} tool: {}",
            tool.label(),
            tool.path().display()
        ));

        let definition = CommandDefinition::new("can_query", tool.query_command(interface))
            .with_timeout(QUERY_TIMEOUT_SECS);
        let runner = CommandRunner::new(definition, Arc::clone(&reporter))?;
        let result = runner.run("").await;
        return Ok(ScanOutcome::Queried { tool, result });
    }

    reporter.error("No Klipper/Katapult flash tools found.");
    reporter.info("Ensure Klipper is installed to use advanced scanning.");
    reporter.info("Interface Statistics:");

    let definition = CommandDefinition::new("can_stats", "ip -s link show")
        .with_timeout(STATS_TIMEOUT_SECS);
    let runner = CommandRunner::new(definition, reporter)?;
    let stats = runner.run(&quote(interface)).await;
    Ok(ScanOutcome::NoTool { stats })
}

/// The current user's home directory (`$HOME`, falling back to the
/// password database).
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}
