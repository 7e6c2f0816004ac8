//! Ping scan through `nmap -sn`, read back in grepable form.

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use localnet_common::network::subnet::Subnet;
use localnet_common::utils::command::{self, ToolError, ToolOutput};
use tracing::debug;

use super::AddressProbe;

pub struct NmapPingProbe;

#[async_trait]
impl AddressProbe for NmapPingProbe {
    fn name(&self) -> &'static str {
        "nmap ping scan"
    }

    async fn scan_addresses(&self, subnet: &Subnet, timeout: Duration) -> Vec<Ipv4Addr> {
        let subnet = subnet.to_string();
        let args = ["-sn", "-n", "-oG", "-", subnet.as_str()];
        from_output(command::run("nmap", &args, timeout).await)
    }
}

fn from_output(output: Result<ToolOutput, ToolError>) -> Vec<Ipv4Addr> {
    match output {
        Ok(output) if output.succeeded() => parse_nmap_grepable(&output.stdout),
        Ok(output) => {
            debug!("nmap exited with {:?}", output.code);
            Vec::new()
        }
        Err(e) => {
            debug!("nmap ping scan skipped: {e}");
            Vec::new()
        }
    }
}

/// Second field of every `Host:` line.
pub(crate) fn parse_nmap_grepable(raw: &str) -> Vec<Ipv4Addr> {
    raw.lines()
        .filter(|line| line.starts_with("Host:"))
        .filter_map(|line| line.split_whitespace().nth(1)?.parse().ok())
        .collect()
}
