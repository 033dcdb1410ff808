//! Reachability probe command.

use anyhow::Result;
use std::time::Duration;

use crate::cli::SetupOptions;
use crate::prober::{ProbeOutcome, Prober};

/// Run the probe command: one reachability check against the dev server.
pub async fn run(opts: &SetupOptions) -> Result<()> {
    let ip = super::setup::resolve_or_override(opts);

    let prober = Prober::new(opts.port, Duration::from_secs(opts.timeout))?;
    match prober.check(&ip).await {
        ProbeOutcome::Reachable { url, status } => {
            println!("[OK] Server is accessible at {} (HTTP {})", url, status);
        }
        ProbeOutcome::Unreachable { url } => {
            println!("[FAIL] Server is not accessible at {}", url);
            println!(
                "       Make sure the server is running and port {} is open",
                opts.port
            );
        }
        ProbeOutcome::Failed { url, detail } => {
            println!("[FAIL] Connection test failed for {}: {}", url, detail);
        }
    }
    Ok(())
}
