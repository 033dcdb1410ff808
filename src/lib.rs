//! # lanlink - LAN setup tool for mobile app development
//!
//! Points a mobile client at a development server running on this
//! machine. One run performs three steps:
//!
//! 1. Resolve the host's LAN-facing IPv4 address (interface-utility
//!    probe, then a UDP-socket fallback, then loopback as a last resort).
//! 2. Rewrite the two dev-URL constants in the client's API config
//!    (`frontend/lib/config/api_config.dart`) to point at that address.
//! 3. Probe `http://<address>:4000` to confirm the dev server answers.
//!
//! Address detection never fails; config patching reports a missing file
//! instead of crashing; a failed probe is a warning with remediation
//! hints, not an abort.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`error`] - Error types
//! - [`exec`] - Command execution abstraction
//! - [`fs_abstraction`] - Filesystem abstraction
//! - [`patcher`] - Config file patching
//! - [`prober`] - Dev server reachability probe
//! - [`resolver`] - LAN address resolution

pub mod cli;
pub mod commands;
pub mod error;
pub mod exec;
pub mod fs_abstraction;
pub mod patcher;
pub mod prober;
pub mod resolver;

pub use cli::{Cli, Commands};
