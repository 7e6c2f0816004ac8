use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use localnet_common::utils::command::{self, ToolError, ToolOutput};
use tracing::debug;

use super::NameResolver;

/// Multicast DNS reverse lookup through avahi.
pub struct AvahiMdnsResolver;

#[async_trait]
impl NameResolver for AvahiMdnsResolver {
    fn source(&self) -> &'static str {
        "mDNS"
    }

    async fn resolve(&self, address: Ipv4Addr, timeout: Duration) -> Option<String> {
        let addr = address.to_string();
        let output = command::run("avahi-resolve-address", &[addr.as_str()], timeout).await;
        from_output(output, address)
    }
}

fn from_output(output: Result<ToolOutput, ToolError>, address: Ipv4Addr) -> Option<String> {
    match output {
        Ok(output) if output.succeeded() => parse_avahi_output(&output.stdout),
        Ok(_) => None,
        Err(e) => {
            debug!("mDNS lookup of {address} failed: {e}");
            None
        }
    }
}

/// avahi prints `<address>\t<name>`; the name is the last token.
pub(crate) fn parse_avahi_output(raw: &str) -> Option<String> {
    let mut tokens = raw.split_whitespace();
    tokens.next()?;
    // A lone token is the address echoed back without an answer.
    tokens.last().map(str::to_string)
}
