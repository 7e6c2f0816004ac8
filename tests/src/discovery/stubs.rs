//! In-memory stand-ins for the tool-backed probes and resolvers.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use localnet_common::network::host::HostRecord;
use localnet_common::network::mac::VendorRepository;
use localnet_common::network::subnet::Subnet;
use localnet_core::resolver::{NameResolver, NameTableResolver, NeighborEntry, NeighborResolver};
use localnet_core::scanner::{AddressProbe, HostProbe};

pub fn ip(last: u8) -> Ipv4Addr {
    Ipv4Addr::new(192, 168, 0, last)
}

pub struct StaticHosts(pub Vec<HostRecord>);

#[async_trait]
impl HostProbe for StaticHosts {
    fn name(&self) -> &'static str {
        "static hosts"
    }

    async fn scan_hosts(&self, _: &Subnet, _: Duration, _: Option<&str>) -> Vec<HostRecord> {
        self.0.clone()
    }
}

pub struct StaticAddresses(pub Vec<Ipv4Addr>);

#[async_trait]
impl AddressProbe for StaticAddresses {
    fn name(&self) -> &'static str {
        "static addresses"
    }

    async fn scan_addresses(&self, _: &Subnet, _: Duration) -> Vec<Ipv4Addr> {
        self.0.clone()
    }
}

#[derive(Default)]
pub struct StaticNeighbors(pub HashMap<Ipv4Addr, String>);

#[async_trait]
impl NeighborResolver for StaticNeighbors {
    async fn lookup(&self, address: Ipv4Addr, _: Duration) -> NeighborEntry {
        NeighborEntry {
            hardware_address: self.0.get(&address).cloned(),
            ..NeighborEntry::default()
        }
    }
}

pub struct StaticNames {
    pub source: &'static str,
    pub names: HashMap<Ipv4Addr, String>,
    pub calls: Arc<AtomicUsize>,
}

impl StaticNames {
    pub fn new(source: &'static str, names: &[(Ipv4Addr, &str)]) -> Self {
        Self {
            source,
            names: names.iter().map(|(ip, name)| (*ip, name.to_string())).collect(),
            calls: Arc::default(),
        }
    }
}

#[async_trait]
impl NameResolver for StaticNames {
    fn source(&self) -> &'static str {
        self.source
    }

    async fn resolve(&self, address: Ipv4Addr, _: Duration) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.names.get(&address).cloned()
    }
}

pub struct StaticNameTable {
    pub names: HashMap<Ipv4Addr, String>,
    pub calls: Arc<AtomicUsize>,
}

impl StaticNameTable {
    pub fn new(names: &[(Ipv4Addr, &str)]) -> Self {
        Self {
            names: names.iter().map(|(ip, name)| (*ip, name.to_string())).collect(),
            calls: Arc::default(),
        }
    }
}

#[async_trait]
impl NameTableResolver for StaticNameTable {
    async fn resolve_range(&self, _: &Subnet, _: Duration) -> HashMap<Ipv4Addr, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.names.clone()
    }
}

pub struct StaticVendors(pub HashMap<String, String>);

impl VendorRepository for StaticVendors {
    fn get_vendor(&self, mac: &str) -> Option<String> {
        self.0.get(mac).cloned()
    }
}
