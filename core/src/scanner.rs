//! The discovery **probes**.
//!
//! A probe finds candidate hosts on a subnet. There are two shapes, consumed
//! by separate stages of the pipeline:
//!
//! * [`HostProbe`]: can observe more than liveness and yields partial
//!   [`HostRecord`]s (address plus MAC and vendor where known).
//! * [`AddressProbe`]: can only confirm that an address is up.
//!
//! Probes are fail-soft. A missing tool, a timeout or output that cannot be
//! parsed all produce an empty result, which is why neither trait returns a
//! `Result`.

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use localnet_common::network::host::HostRecord;
use localnet_common::network::subnet::Subnet;

mod arp_scan;
mod fping;
mod neighbor_cache;
mod nmap;

pub use arp_scan::ArpScanProbe;
pub use fping::FpingProbe;
pub use neighbor_cache::NeighborCacheProbe;
pub use nmap::NmapPingProbe;

#[async_trait]
pub trait HostProbe: Send + Sync {
    fn name(&self) -> &'static str;

    async fn scan_hosts(
        &self,
        subnet: &Subnet,
        timeout: Duration,
        interface: Option<&str>,
    ) -> Vec<HostRecord>;
}

#[async_trait]
pub trait AddressProbe: Send + Sync {
    fn name(&self) -> &'static str;

    async fn scan_addresses(&self, subnet: &Subnet, timeout: Duration) -> Vec<Ipv4Addr>;
}

/// Parses the leading dotted quad of a line of tool output.
pub(crate) fn leading_ipv4(line: &str) -> Option<Ipv4Addr> {
    line.split_whitespace().next()?.parse().ok()
}
