//! Fast ICMP sweep through `fping`, only registered for deep discovery.

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use localnet_common::network::subnet::Subnet;
use localnet_common::utils::command::{self, ToolError, ToolOutput};
use tracing::debug;

use super::{AddressProbe, leading_ipv4};

/// fping exits with 1 when some targets were unreachable, which is the
/// normal outcome of a sweep.
const ACCEPTED_EXIT_CODES: &[i32] = &[0, 1];

pub struct FpingProbe;

#[async_trait]
impl AddressProbe for FpingProbe {
    fn name(&self) -> &'static str {
        "fping sweep"
    }

    async fn scan_addresses(&self, subnet: &Subnet, timeout: Duration) -> Vec<Ipv4Addr> {
        let subnet = subnet.to_string();
        let args = ["-a", "-g", "-r", "0", "-t", "200", subnet.as_str()];
        from_output(command::run("fping", &args, timeout).await)
    }
}

fn from_output(output: Result<ToolOutput, ToolError>) -> Vec<Ipv4Addr> {
    match output {
        Ok(output) if output.has_output_with(ACCEPTED_EXIT_CODES) => parse_alive(&output.stdout),
        Ok(output) => {
            debug!("fping exited with {:?} and no alive hosts", output.code);
            Vec::new()
        }
        Err(e) => {
            debug!("fping sweep skipped: {e}");
            Vec::new()
        }
    }
}

pub(crate) fn parse_alive(raw: &str) -> Vec<Ipv4Addr> {
    raw.lines().filter_map(leading_ipv4).collect()
}
