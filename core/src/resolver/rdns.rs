use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::NameResolver;

/// PTR lookup through the system resolver.
pub struct SystemReverseDns;

#[async_trait]
impl NameResolver for SystemReverseDns {
    fn source(&self) -> &'static str {
        "reverse DNS"
    }

    async fn resolve(&self, address: Ipv4Addr, timeout: Duration) -> Option<String> {
        let ip = IpAddr::V4(address);
        let lookup = tokio::task::spawn_blocking(move || dns_lookup::lookup_addr(&ip));

        match tokio::time::timeout(timeout, lookup).await {
            Ok(Ok(Ok(name))) => accept_name(name),
            Ok(Ok(Err(e))) => {
                debug!("reverse DNS of {address}: {e}");
                None
            }
            Ok(Err(e)) => {
                debug!("reverse DNS task for {address} failed: {e}");
                None
            }
            Err(_) => {
                debug!("reverse DNS of {address} timed out after {timeout:?}");
                None
            }
        }
    }
}

/// Numeric answers are the resolver echoing the address, not a name.
fn accept_name(name: String) -> Option<String> {
    let name = name.trim_end_matches('.').trim();
    if name.is_empty() || name.parse::<IpAddr>().is_ok() {
        None
    } else {
        Some(name.to_string())
    }
}
