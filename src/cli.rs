//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::patcher::{DEFAULT_CONFIG_PATH, DEV_SERVER_PORT};
use crate::prober::PROBE_TIMEOUT_SECS;

#[derive(Parser)]
#[command(name = "lanlink")]
#[command(author, version, about = "LAN setup tool for mobile app development")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to run; omitting it runs the full setup sequence
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Mobile client config file to rewrite
    #[arg(long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,

    /// Skip address detection and use this IP
    #[arg(long, global = true)]
    pub ip: Option<String>,

    /// Development server port
    #[arg(long, default_value_t = DEV_SERVER_PORT, global = true)]
    pub port: u16,

    /// Reachability probe timeout in seconds
    #[arg(long, default_value_t = PROBE_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect the LAN address, rewrite the config, probe the dev server
    Setup,

    /// Detect and print the LAN address
    Ip,

    /// Rewrite the config file only
    Patch,

    /// Probe the development server only
    Probe,

    /// Show version
    Version,
}

/// Options shared by the setup steps.
#[derive(Debug, Clone)]
pub struct SetupOptions {
    pub config: PathBuf,
    pub ip: Option<String>,
    pub port: u16,
    pub timeout: u64,
}

impl Cli {
    /// Collect the global flags the commands consume.
    pub fn options(&self) -> SetupOptions {
        SetupOptions {
            config: self.config.clone(),
            ip: self.ip.clone(),
            port: self.port,
            timeout: self.timeout,
        }
    }
}
