//! Development server reachability probe.
//!
//! One bounded-timeout HTTP GET against the resolved address. Any HTTP
//! response counts as reachable, whatever the status code: the probe
//! checks that something answers on the port, not that the app is
//! healthy. Exactly one attempt, no retries.

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// Default probe timeout in seconds.
pub const PROBE_TIMEOUT_SECS: u64 = 5;

/// Result of a reachability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered; status is whatever it returned.
    Reachable { url: String, status: u16 },
    /// Connection-level failure: refused, unreachable, or timed out.
    Unreachable { url: String },
    /// Any other failure, reported as-is.
    Failed { url: String, detail: String },
}

/// HTTP client wrapper for the reachability check.
pub struct Prober {
    client: Client,
    port: u16,
}

impl Prober {
    /// Create a prober with the given target port and request timeout.
    pub fn new(port: u16, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("lanlink/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, port })
    }

    /// Issue a single GET against `http://<ip>:<port>`.
    pub async fn check(&self, ip: &str) -> ProbeOutcome {
        let url = format!("http://{}:{}", ip, self.port);
        match self.client.get(&url).send().await {
            Ok(response) => ProbeOutcome::Reachable {
                status: response.status().as_u16(),
                url,
            },
            Err(e) if e.is_connect() || e.is_timeout() => ProbeOutcome::Unreachable { url },
            Err(e) => ProbeOutcome::Failed {
                detail: e.to_string(),
                url,
            },
        }
    }
}
