//! Passive seed from the kernel's ARP/neighbour cache.
//!
//! Sends nothing on the wire: every IPv4 neighbour the kernel still knows
//! about inside the scanned subnet becomes a bare host record.

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use localnet_common::network::host::HostRecord;
use localnet_common::network::subnet::Subnet;
use localnet_common::utils::command::{self, ToolError, ToolOutput};
use tracing::debug;

use super::{HostProbe, leading_ipv4};

pub struct NeighborCacheProbe;

#[async_trait]
impl HostProbe for NeighborCacheProbe {
    fn name(&self) -> &'static str {
        "neighbour cache"
    }

    async fn scan_hosts(
        &self,
        subnet: &Subnet,
        timeout: Duration,
        _interface: Option<&str>,
    ) -> Vec<HostRecord> {
        let output = command::run("ip", &["-4", "neigh", "show"], timeout).await;
        from_output(output, subnet)
    }
}

/// Neighbours on other links are left out of the pass.
fn from_output(output: Result<ToolOutput, ToolError>, subnet: &Subnet) -> Vec<HostRecord> {
    match output {
        Ok(output) if output.succeeded() => parse_neighbors(&output.stdout)
            .into_iter()
            .filter(|address| subnet.contains(*address))
            .map(HostRecord::new)
            .collect(),
        Ok(output) => {
            debug!("ip neigh exited with {:?}", output.code);
            Vec::new()
        }
        Err(e) => {
            debug!("neighbour cache skipped: {e}");
            Vec::new()
        }
    }
}

/// Addresses of every `ip -4 neigh show` entry that is not `FAILED`.
pub(crate) fn parse_neighbors(raw: &str) -> Vec<Ipv4Addr> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains("FAILED"))
        .filter_map(leading_ipv4)
        .collect()
}
