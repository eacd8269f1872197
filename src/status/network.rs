//! Network interface enumeration via the brief interface listing.

use crate::error::{Result, SystemError};
use crate::status::data::NetworkInterface;
use std::process::Command;
use tracing::warn;

/// Source of network interface records.
///
/// Abstracts the external listing command so it can be swapped for a test
/// double or a platform-native enumeration API.
pub trait InterfaceSource {
    /// List interfaces in the order the underlying source reports them.
    ///
    /// The loopback interface is never included.
    fn list(&self) -> Result<Vec<NetworkInterface>>;
}

/// Lists interfaces by invoking `ip -brief address`.
#[derive(Debug, Clone, Default)]
pub struct IpCommandLister;

const IP_ARGS: [&str; 2] = ["-brief", "address"];

impl InterfaceSource for IpCommandLister {
    fn list(&self) -> Result<Vec<NetworkInterface>> {
        let invocation = format!("ip {}", IP_ARGS.join(" "));
        let output = Command::new("ip")
            .args(IP_ARGS)
            .output()
            .map_err(|source| SystemError::command_error(invocation.clone(), source.to_string()))?;

        // Combined output so diagnostics survive even when stderr carries the cause.
        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(SystemError::command_error(invocation, combined));
        }

        Ok(parse_brief_output(&combined))
    }
}

/// Parse the output of a brief interface listing.
///
/// Each line is `<name> <state> [<address>[/<prefix>]] ...`; only the first
/// three whitespace-delimited fields are consumed. Lines with fewer than two
/// fields are skipped with a warning, and the loopback interface is excluded.
pub fn parse_brief_output(output: &str) -> Vec<NetworkInterface> {
    let mut interfaces = Vec::new();
    for line in output.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            if !line.trim().is_empty() {
                warn!("skipping malformed interface line: {:?}", line);
            }
            continue;
        }
        if fields[0] == "lo" {
            continue;
        }
        interfaces.push(NetworkInterface {
            name: fields[0].to_string(),
            state: fields[1].to_string(),
            address: fields.get(2).copied().unwrap_or("").to_string(),
        });
    }
    interfaces
}
