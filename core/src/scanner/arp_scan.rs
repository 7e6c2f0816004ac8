//! Active ARP sweep through `arp-scan`.
//!
//! Needs raw socket privileges. Without them arp-scan exits non-zero and the
//! probe contributes nothing.

use std::time::Duration;

use async_trait::async_trait;
use localnet_common::network::host::HostRecord;
use localnet_common::network::subnet::Subnet;
use localnet_common::utils::command::{self, ToolError, ToolOutput};
use tracing::debug;

use super::{HostProbe, leading_ipv4};

pub struct ArpScanProbe;

#[async_trait]
impl HostProbe for ArpScanProbe {
    fn name(&self) -> &'static str {
        "arp-scan"
    }

    async fn scan_hosts(
        &self,
        subnet: &Subnet,
        timeout: Duration,
        interface: Option<&str>,
    ) -> Vec<HostRecord> {
        let subnet = subnet.to_string();
        let args: Vec<&str> = match interface {
            Some(intf) => vec!["-I", intf, subnet.as_str()],
            None => vec!["--localnet"],
        };

        from_output(command::run("arp-scan", &args, timeout).await)
    }
}

fn from_output(output: Result<ToolOutput, ToolError>) -> Vec<HostRecord> {
    match output {
        Ok(output) if output.succeeded() => parse_arp_scan_output(&output.stdout),
        Ok(output) => {
            debug!("arp-scan exited with {:?}", output.code);
            Vec::new()
        }
        Err(e) => {
            debug!("arp-scan skipped: {e}");
            Vec::new()
        }
    }
}

/// Parses result lines shaped `IP <ws> MAC <tab> VENDOR`, skipping the
/// banner and summary lines arp-scan prints around them.
pub(crate) fn parse_arp_scan_output(raw: &str) -> Vec<HostRecord> {
    raw.lines()
        .map(str::trim)
        .filter_map(|line| {
            let address = leading_ipv4(line)?;
            let (_, rest) = line.split_once(char::is_whitespace)?;
            let rest = rest.trim_start();
            let (mac, vendor) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if !is_colon_hex_mac(mac) {
                return None;
            }
            Some(HostRecord::new(address).with_mac(mac).with_vendor(vendor))
        })
        .collect()
}

fn is_colon_hex_mac(s: &str) -> bool {
    s.len() == 17
        && s.split(':').count() == 6
        && s.split(':').all(|oct| oct.len() == 2 && oct.chars().all(|c| c.is_ascii_hexdigit()))
}
