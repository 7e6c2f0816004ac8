use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use localnet_common::network::subnet::Subnet;
use localnet_common::utils::command::{self, ToolError, ToolOutput};
use tracing::debug;

use super::NameTableResolver;

/// NetBIOS name table of a whole subnet through `nbtscan`.
pub struct NbtscanResolver;

#[async_trait]
impl NameTableResolver for NbtscanResolver {
    async fn resolve_range(&self, subnet: &Subnet, timeout: Duration) -> HashMap<Ipv4Addr, String> {
        let subnet = subnet.to_string();
        from_output(command::run("nbtscan", &[subnet.as_str()], timeout).await)
    }
}

fn from_output(output: Result<ToolOutput, ToolError>) -> HashMap<Ipv4Addr, String> {
    match output {
        Ok(output) if output.succeeded() => parse_nbtscan_output(&output.stdout),
        Ok(output) => {
            debug!("nbtscan exited with {:?}", output.code);
            HashMap::new()
        }
        Err(e) => {
            debug!("NetBIOS sweep skipped: {e}");
            HashMap::new()
        }
    }
}

/// Maps the leading address of every result line to the name after it,
/// e.g. `192.168.0.50    ALPHA<00>  UNIQUE` to `ALPHA<00>`.
pub(crate) fn parse_nbtscan_output(raw: &str) -> HashMap<Ipv4Addr, String> {
    raw.lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let address: Ipv4Addr = fields.next()?.parse().ok()?;
            let name = fields.next()?;
            Some((address, name.to_string()))
        })
        .collect()
}
