//! # Network Discovery Service
//!
//! Implements the single discovery pass:
//!
//! 1. **Collect**: run every host probe, then every address probe, and fold
//!    the results into one record per address.
//! 2. **Enrich**: fetch the NetBIOS table once, then fill MAC, vendor and
//!    hostname of every host from the configured resolvers.
//! 3. **Order**: sort by numeric address.
//!
//! A pass cannot fail once it has started. Everything that can go wrong
//! while talking to the external tools is absorbed by the probes and
//! resolvers and only costs the information they would have contributed.

use std::time::Duration;

use localnet_common::config::Config;
use localnet_common::network::host::HostRecord;
use localnet_common::network::mac::{MacOuiRepo, VendorRepository};
use localnet_common::network::subnet::Subnet;
use tracing::info;

use crate::enrich::Resolvers;
use crate::merge;
use crate::resolver::{
    AvahiMdnsResolver, IpNeighResolver, NameResolver, NameTableResolver, NbtscanResolver,
    NeighborResolver, SystemReverseDns,
};
use crate::scanner::{
    AddressProbe, ArpScanProbe, FpingProbe, HostProbe, NeighborCacheProbe, NmapPingProbe,
};

/// Application Service for Network Discovery.
///
/// Configured once, then [`discover`](Self::discover) may be called for any
/// number of passes. No state survives from one pass to the next.
pub struct DiscoveryService {
    host_probes: Vec<Box<dyn HostProbe>>,
    address_probes: Vec<Box<dyn AddressProbe>>,
    resolvers: Resolvers,
    timeout: Duration,
    interface: Option<String>,
}

impl DiscoveryService {
    /// A service without probes that only consults the neighbour table.
    pub fn new(neighbor: Box<dyn NeighborResolver>, timeout: Duration) -> Self {
        Self {
            host_probes: Vec::new(),
            address_probes: Vec::new(),
            resolvers: Resolvers::new(neighbor),
            timeout,
            interface: None,
        }
    }

    /// The tool-backed stack described by `cfg`.
    pub fn from_config(cfg: &Config) -> Self {
        let mut service = Self::new(Box::new(IpNeighResolver), cfg.timeout)
            .with_interface(cfg.interface.clone())
            .with_host_probe(Box::new(NeighborCacheProbe));

        if !cfg.no_arpscan {
            service = service.with_host_probe(Box::new(ArpScanProbe));
        }

        service = service.with_address_probe(Box::new(NmapPingProbe));
        if cfg.deep {
            service = service.with_address_probe(Box::new(FpingProbe));
        }

        if !cfg.no_oui {
            service = service.with_vendor_repository(Box::new(MacOuiRepo));
        }
        if !cfg.no_mdns {
            service = service.with_mdns(Box::new(AvahiMdnsResolver));
        }
        if !cfg.no_netbios {
            service = service.with_netbios(Box::new(NbtscanResolver));
        }
        if !cfg.no_rdns {
            service = service.with_reverse_dns(Box::new(SystemReverseDns));
        }

        service
    }

    pub fn with_interface(mut self, interface: Option<String>) -> Self {
        self.interface = interface;
        self
    }

    /// Registers a host probe. Earlier probes win field conflicts.
    pub fn with_host_probe(mut self, probe: Box<dyn HostProbe>) -> Self {
        self.host_probes.push(probe);
        self
    }

    pub fn with_address_probe(mut self, probe: Box<dyn AddressProbe>) -> Self {
        self.address_probes.push(probe);
        self
    }

    pub fn with_vendor_repository(mut self, vendors: Box<dyn VendorRepository>) -> Self {
        self.resolvers.vendors = Some(vendors);
        self
    }

    pub fn with_mdns(mut self, resolver: Box<dyn NameResolver>) -> Self {
        self.resolvers.mdns = Some(resolver);
        self
    }

    pub fn with_netbios(mut self, resolver: Box<dyn NameTableResolver>) -> Self {
        self.resolvers.netbios = Some(resolver);
        self
    }

    pub fn with_reverse_dns(mut self, resolver: Box<dyn NameResolver>) -> Self {
        self.resolvers.rdns = Some(resolver);
        self
    }

    pub fn host_probe_names(&self) -> Vec<&'static str> {
        self.host_probes.iter().map(|probe| probe.name()).collect()
    }

    pub fn address_probe_names(&self) -> Vec<&'static str> {
        self.address_probes.iter().map(|probe| probe.name()).collect()
    }

    /// Executes one discovery pass against `subnet`.
    pub async fn discover(&self, subnet: &Subnet) -> Vec<HostRecord> {
        info!("Discovering hosts in {subnet}");

        let mut hosts = merge::collect_hosts(
            &self.host_probes,
            &self.address_probes,
            subnet,
            self.timeout,
            self.interface.as_deref(),
        )
        .await;
        info!("{} candidate host(s), resolving identities", hosts.len());

        self.resolvers.enrich(&mut hosts, subnet, self.timeout).await;

        order_hosts(hosts.into_values().collect())
    }
}

/// Sorts by numeric address, so `192.168.0.2` comes before `192.168.0.10`.
pub fn order_hosts(mut hosts: Vec<HostRecord>) -> Vec<HostRecord> {
    hosts.sort_by_key(|host| host.address);
    hosts
}
