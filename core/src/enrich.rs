//! Fills in MAC, vendor and hostname of every discovered host.
//!
//! Hostname sources are tried in a fixed order, mDNS, then the NetBIOS name
//! table, then reverse DNS, and the first answer wins. Once a host has a
//! name the remaining sources are not queried for it.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::time::Duration;

use localnet_common::network::host::HostRecord;
use localnet_common::network::mac::VendorRepository;
use localnet_common::network::subnet::Subnet;
use tracing::debug;

use crate::merge::HostMap;
use crate::resolver::{NameResolver, NameTableResolver, NeighborResolver};

/// The resolvers of one discovery service. `None` disables a source.
pub struct Resolvers {
    pub neighbor: Box<dyn NeighborResolver>,
    pub vendors: Option<Box<dyn VendorRepository>>,
    pub mdns: Option<Box<dyn NameResolver>>,
    pub netbios: Option<Box<dyn NameTableResolver>>,
    pub rdns: Option<Box<dyn NameResolver>>,
}

impl Resolvers {
    /// Only the neighbour table, every optional source disabled.
    pub fn new(neighbor: Box<dyn NeighborResolver>) -> Self {
        Self {
            neighbor,
            vendors: None,
            mdns: None,
            netbios: None,
            rdns: None,
        }
    }

    /// Enriches every host in `hosts`.
    ///
    /// The NetBIOS table is fetched once for the whole subnet before the
    /// first host is touched.
    pub async fn enrich(&self, hosts: &mut HostMap, subnet: &Subnet, timeout: Duration) {
        let names = self.netbios_table(subnet, timeout).await;

        for host in hosts.values_mut() {
            self.enrich_host(host, &names, timeout).await;
        }
    }

    async fn netbios_table(&self, subnet: &Subnet, timeout: Duration) -> HashMap<Ipv4Addr, String> {
        let Some(netbios) = &self.netbios else {
            return HashMap::new();
        };
        let names = netbios.resolve_range(subnet, timeout).await;
        debug!("NetBIOS answered for {} host(s)", names.len());
        names
    }

    async fn enrich_host(
        &self,
        host: &mut HostRecord,
        netbios_names: &HashMap<Ipv4Addr, String>,
        timeout: Duration,
    ) {
        let address = host.address;

        let neighbor = self.neighbor.lookup(address, timeout).await;
        if !host.has_mac()
            && let Some(mac) = neighbor.hardware_address.as_deref()
        {
            host.fill_mac(mac);
        }

        if !host.has_vendor()
            && let Some(vendors) = &self.vendors
            && let Some(mac) = host.hardware_address.clone()
            && let Some(vendor) = vendors.get_vendor(&mac)
        {
            host.fill_vendor(&vendor);
        }

        if !host.has_hostname()
            && let Some(mdns) = &self.mdns
        {
            fill_name(host, mdns.source(), mdns.resolve(address, timeout).await);
        }

        if !host.has_hostname()
            && let Some(name) = netbios_names.get(&address)
        {
            fill_name(host, "NetBIOS", Some(name.clone()));
        }

        if !host.has_hostname()
            && let Some(rdns) = &self.rdns
        {
            fill_name(host, rdns.source(), rdns.resolve(address, timeout).await);
        }
    }
}

fn fill_name(host: &mut HostRecord, source: &str, name: Option<String>) {
    if let Some(name) = name
        && host.fill_hostname(&name)
    {
        debug!("{} is {name} according to {source}", host.address);
    }
}
