//! Full setup sequence: resolve, patch, probe.

use anyhow::Result;
use std::time::Duration;

use crate::cli::SetupOptions;
use crate::error::LanlinkError;
use crate::exec::SystemRunner;
use crate::fs_abstraction::real_fs;
use crate::patcher::patch_api_config;
use crate::prober::{ProbeOutcome, Prober};
use crate::resolver;

/// Run the full setup sequence.
///
/// Reported failures print their diagnostic and end the run early;
/// none of them escalate into a non-zero exit. A failed reachability
/// probe is a warning, not a failure: the config is already updated.
pub async fn run(opts: &SetupOptions) -> Result<()> {
    println!("lanlink mobile setup");
    println!("{}", "=".repeat(40));

    println!();
    println!("Finding your IP address...");
    let ip = resolve_or_override(opts);
    println!("Your IP address: {}", ip);

    println!();
    println!("Updating API configuration...");
    match patch_api_config(real_fs(), &opts.config, &ip, opts.port) {
        Ok(report) => {
            println!("[OK] Updated {} with IP {}", opts.config.display(), ip);
            if report.total() == 0 {
                println!("     (no dev URL assignments found; file left as-is)");
            }
        }
        Err(LanlinkError::ConfigNotFound(path)) => {
            println!("[FAIL] Configuration file not found: {}", path);
            return Ok(());
        }
        Err(e) => {
            println!("[FAIL] Error updating configuration: {}", e);
            return Ok(());
        }
    }

    println!();
    println!("Testing server connection...");
    let prober = Prober::new(opts.port, Duration::from_secs(opts.timeout))?;
    match prober.check(&ip).await {
        ProbeOutcome::Reachable { url, status } => {
            println!("[OK] Server is accessible at {} (HTTP {})", url, status);
            println!();
            println!("Setup completed successfully.");
            println!();
            println!("To run on mobile:");
            println!("  1. Make sure your mobile device is on the same network");
            println!("  2. Run: flutter run --dart-define=ENVIRONMENT=mobile");
            println!("  3. Or:  flutter run -d android --dart-define=ENVIRONMENT=mobile");
        }
        ProbeOutcome::Unreachable { url } => {
            println!("[FAIL] Server is not accessible at {}", url);
            print_remediation(opts.port);
        }
        ProbeOutcome::Failed { url, detail } => {
            println!("[FAIL] Connection test failed for {}: {}", url, detail);
            print_remediation(opts.port);
        }
    }

    Ok(())
}

/// Take the `--ip` override when given, otherwise run detection.
pub(crate) fn resolve_or_override(opts: &SetupOptions) -> String {
    match &opts.ip {
        Some(ip) => ip.clone(),
        None => resolver::resolve(&SystemRunner::new()),
    }
}

fn print_remediation(port: u16) {
    println!();
    println!("Setup completed but the server connection failed. Check that:");
    println!("  - the dev server is running (npm run dev in the server directory)");
    println!("  - the firewall allows connections on port {}", port);
    println!("  - the mobile device is on the same network");
}
