//! Config rewrite command.

use anyhow::{Context, Result};

use crate::cli::SetupOptions;
use crate::fs_abstraction::real_fs;
use crate::patcher::patch_api_config;

/// Run the patch command: rewrite the config without probing.
pub async fn run(opts: &SetupOptions) -> Result<()> {
    let ip = super::setup::resolve_or_override(opts);

    let report = patch_api_config(real_fs(), &opts.config, &ip, opts.port)
        .with_context(|| format!("Failed to update {}", opts.config.display()))?;

    println!(
        "Updated {} with IP {} ({} assignment(s) rewritten)",
        opts.config.display(),
        ip,
        report.total()
    );
    Ok(())
}
