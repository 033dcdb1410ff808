//! LAN address resolution.
//!
//! Finds the IPv4 address by which devices on the same local network can
//! reach this machine. Resolution is an ordered fallback chain: an
//! OS-specific interface-utility probe, then a UDP-socket probe against a
//! public address, then loopback. The chain never fails; a loopback result
//! means detection degraded, not that something went wrong.

use std::net::{Ipv4Addr, UdpSocket};
use tracing::debug;

use crate::exec::CommandRunner;

/// Returned when every resolution strategy fails.
pub const LOOPBACK_ADDR: &str = "127.0.0.1";

/// Address the UDP-socket probe "connects" to. No packet is ever sent;
/// connecting a datagram socket only selects a route and a local endpoint.
const SOCKET_PROBE_TARGET: &str = "8.8.8.8:80";

/// Private-range prefix the interface-utility scan matches on. Typical
/// home/office networks where the mobile device sits on the same subnet
/// use 192.168.0.0/16; other private ranges (10.x, 172.16-31.x) are
/// intentionally not matched.
const PRIVATE_PREFIX: &str = "192.168.";

/// Resolve the machine's LAN-facing IPv4 address.
///
/// Always returns some dotted-quad string. Strategy failures are logged
/// at debug level and silently fall through to the next strategy.
pub fn resolve(runner: &dyn CommandRunner) -> String {
    resolve_with(
        probe_platform_interfaces(runner, std::env::consts::OS),
        probe_default_route_socket,
    )
}

/// The fallback chain, with the socket probe injectable for tests.
fn resolve_with<F>(platform: Option<String>, socket_probe: F) -> String
where
    F: FnOnce() -> Option<String>,
{
    platform
        .or_else(socket_probe)
        .unwrap_or_else(|| LOOPBACK_ADDR.to_string())
}

/// Ask the OS interface utility for a private LAN address.
///
/// On Windows this scans `ipconfig` output for a line carrying both the
/// "IPv4 Address" label and the private prefix; on Linux and macOS it
/// scans `ifconfig` output for "inet " lines the same way. Returns `None`
/// on any failure (utility missing, non-zero exit, no matching line) so
/// the caller can fall through to the next strategy.
pub fn probe_platform_interfaces(runner: &dyn CommandRunner, os: &str) -> Option<String> {
    let (utility, marker) = match os {
        "windows" => ("ipconfig", "IPv4 Address"),
        "linux" | "macos" => ("ifconfig", "inet "),
        other => {
            debug!("no interface utility known for OS '{}'", other);
            return None;
        }
    };

    let output = match runner.run(utility, &[]) {
        Ok(output) if output.success => output,
        Ok(_) => {
            debug!("{} exited with failure", utility);
            return None;
        }
        Err(e) => {
            debug!("failed to invoke {}: {}", utility, e);
            return None;
        }
    };

    for line in output.stdout.lines() {
        if line.contains(marker) && line.contains(PRIVATE_PREFIX) {
            if let Some(ip) = extract_ipv4(line) {
                return Some(ip);
            }
        }
    }

    debug!("{} output had no {} address line", utility, PRIVATE_PREFIX);
    None
}

/// UDP-socket fallback: "connect" a datagram socket to a public address
/// and read back the local endpoint's IP. Works without shelling out, but
/// may return a non-LAN address when the default route is not local.
fn probe_default_route_socket() -> Option<String> {
    let probe = || -> std::io::Result<String> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.connect(SOCKET_PROBE_TARGET)?;
        Ok(socket.local_addr()?.ip().to_string())
    };

    match probe() {
        Ok(addr) => Some(addr),
        Err(e) => {
            debug!("socket probe failed: {}", e);
            None
        }
    }
}

/// Extract the first dotted-quad from a line of utility output.
///
/// Scans runs of digits and dots and takes the first run that parses as
/// an IPv4 address. Windows dot-leader lines ("IPv4 Address. . . . : x")
/// contain lone dots that must not confuse the scan.
fn extract_ipv4(line: &str) -> Option<String> {
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                i += 1;
            }
            let candidate = line[start..i].trim_end_matches('.');
            if candidate.parse::<Ipv4Addr>().is_ok() {
                return Some(candidate.to_string());
            }
        } else {
            i += 1;
        }
    }

    None
}
