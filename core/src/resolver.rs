//! Identity **resolvers**.
//!
//! A resolver enriches an address that is already known with a MAC address
//! or a hostname. Like the probes they never fail: no answer, a missing tool
//! and a timeout all look the same to the caller.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use localnet_common::network::subnet::Subnet;

mod mdns;
mod neighbor;
mod netbios;
mod rdns;

pub use mdns::AvahiMdnsResolver;
pub use neighbor::IpNeighResolver;
pub use netbios::NbtscanResolver;
pub use rdns::SystemReverseDns;

/// One entry of the local neighbour table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborEntry {
    pub hardware_address: Option<String>,
    pub device: Option<String>,
    pub state: Option<String>,
}

/// Single-address neighbour table lookup.
#[async_trait]
pub trait NeighborResolver: Send + Sync {
    async fn lookup(&self, address: Ipv4Addr, timeout: Duration) -> NeighborEntry;
}

/// Single-address hostname lookup (mDNS, reverse DNS).
#[async_trait]
pub trait NameResolver: Send + Sync {
    fn source(&self) -> &'static str;

    async fn resolve(&self, address: Ipv4Addr, timeout: Duration) -> Option<String>;
}

/// Batch hostname lookup over a whole subnet (NetBIOS).
#[async_trait]
pub trait NameTableResolver: Send + Sync {
    async fn resolve_range(&self, subnet: &Subnet, timeout: Duration) -> HashMap<Ipv4Addr, String>;
}
