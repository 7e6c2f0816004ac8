use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use localnet_common::utils::command::{self, ToolError, ToolOutput};
use tracing::debug;

use super::{NeighborEntry, NeighborResolver};

/// Looks an address up with `ip neigh show`, falling back to `arp -an` on
/// systems without iproute2.
pub struct IpNeighResolver;

#[async_trait]
impl NeighborResolver for IpNeighResolver {
    async fn lookup(&self, address: Ipv4Addr, timeout: Duration) -> NeighborEntry {
        let addr = address.to_string();

        let ip_neigh = command::run("ip", &["neigh", "show", addr.as_str()], timeout).await;
        if let Some(entry) = from_ip_neigh(ip_neigh, address) {
            return entry;
        }

        from_arp_an(command::run("arp", &["-an"], timeout).await, address)
    }
}

/// `None` asks for the `arp -an` fallback.
fn from_ip_neigh(
    output: Result<ToolOutput, ToolError>,
    address: Ipv4Addr,
) -> Option<NeighborEntry> {
    match output {
        Ok(output) if output.succeeded() && !output.stdout.is_empty() => {
            Some(parse_ip_neigh(&output.stdout, address))
        }
        Ok(_) => None,
        Err(e) => {
            debug!("ip neigh lookup of {address} failed: {e}");
            None
        }
    }
}

fn from_arp_an(output: Result<ToolOutput, ToolError>, address: Ipv4Addr) -> NeighborEntry {
    match output {
        Ok(output) if output.succeeded() => parse_arp_an(&output.stdout, address),
        Ok(_) => NeighborEntry::default(),
        Err(e) => {
            debug!("arp lookup of {address} failed: {e}");
            NeighborEntry::default()
        }
    }
}

/// Reads `<addr> dev <dev> lladdr <mac> <STATE>`.
///
/// Uses the line that starts with `address`, or the first line if none does.
/// The state is the last all-uppercase token, or the last token at all.
pub(crate) fn parse_ip_neigh(raw: &str, address: Ipv4Addr) -> NeighborEntry {
    let addr = address.to_string();
    let lines: Vec<&str> = raw.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let Some(line) = lines
        .iter()
        .find(|line| line.split_whitespace().next() == Some(addr.as_str()))
        .or(lines.first())
    else {
        return NeighborEntry::default();
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let value_after = |key: &str| -> Option<String> {
        let idx = tokens.iter().position(|t| *t == key)?;
        tokens.get(idx + 1).map(|v| v.to_string())
    };

    let state = tokens
        .iter()
        .rev()
        .find(|t| t.chars().any(char::is_alphabetic) && !t.chars().any(char::is_lowercase))
        .or(tokens.last())
        .map(|t| t.to_string());

    NeighborEntry {
        hardware_address: value_after("lladdr"),
        device: value_after("dev"),
        state,
    }
}

/// Finds the first colon-hex MAC on the `arp -an` line that mentions `address`.
pub(crate) fn parse_arp_an(raw: &str, address: Ipv4Addr) -> NeighborEntry {
    let needle = format!("({address})");
    let hardware_address = raw
        .lines()
        .find(|line| line.contains(&needle))
        .and_then(|line| {
            line.split_whitespace()
                .find(|token| {
                    token.len() == 17
                        && token.split(':').count() == 6
                        && token.chars().all(|c| c == ':' || c.is_ascii_hexdigit())
                })
                .map(str::to_string)
        });

    NeighborEntry {
        hardware_address,
        ..NeighborEntry::default()
    }
}
