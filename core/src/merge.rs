//! Folds the output of every probe into one record per address.
//!
//! Host probes run strictly in registration order and the first probe to
//! report a field wins it, so registration order is the tie-break when two
//! probes disagree about the same host.

use std::collections::{HashMap, HashSet};
use std::net::Ipv4Addr;
use std::time::Duration;

use localnet_common::network::host::HostRecord;
use localnet_common::network::subnet::Subnet;
use tracing::debug;

use crate::scanner::{AddressProbe, HostProbe};

pub type HostMap = HashMap<Ipv4Addr, HostRecord>;

/// Merges `incoming` into the record already known for the same address.
///
/// Without an existing record `incoming` is taken verbatim. Otherwise every
/// field that is still unset on `existing` takes `incoming`'s value; set
/// fields are never replaced or cleared.
pub fn merge_into(existing: Option<HostRecord>, incoming: HostRecord) -> HostRecord {
    match existing {
        None => incoming,
        Some(mut host) => {
            host.merge_from(&incoming);
            host
        }
    }
}

/// Folds `records` into `hosts` in order.
pub fn merge_all(hosts: &mut HostMap, records: impl IntoIterator<Item = HostRecord>) {
    for record in records {
        let existing = hosts.remove(&record.address);
        let merged = merge_into(existing, record);
        hosts.insert(merged.address, merged);
    }
}

/// Adds a bare record for every address not present yet.
pub fn seed_addresses(hosts: &mut HostMap, addresses: impl IntoIterator<Item = Ipv4Addr>) {
    for address in addresses {
        hosts.entry(address).or_insert_with(|| HostRecord::new(address));
    }
}

/// Runs every probe once and builds the per-pass host map.
pub async fn collect_hosts(
    host_probes: &[Box<dyn HostProbe>],
    address_probes: &[Box<dyn AddressProbe>],
    subnet: &Subnet,
    timeout: Duration,
    interface: Option<&str>,
) -> HostMap {
    let mut hosts = HostMap::new();

    for probe in host_probes {
        let records = probe.scan_hosts(subnet, timeout, interface).await;
        debug!("{} reported {} host(s)", probe.name(), records.len());
        merge_all(&mut hosts, records);
    }

    let mut seen: HashSet<Ipv4Addr> = hosts.keys().copied().collect();
    for probe in address_probes {
        let addresses = probe.scan_addresses(subnet, timeout).await;
        debug!("{} reported {} address(es)", probe.name(), addresses.len());
        seen.extend(addresses);
    }
    seed_addresses(&mut hosts, seen);

    hosts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(last: u8) -> Ipv4Addr {
        Ipv4Addr::new(192, 168, 0, last)
    }

    #[test]
    fn absent_existing_takes_incoming_verbatim() {
        let incoming = HostRecord::new(ip(2)).with_mac("00:11:22:33:44:02").with_vendor("V1");
        assert_eq!(merge_into(None, incoming.clone()), incoming);
    }

    #[test]
    fn first_merged_value_wins() {
        let first = HostRecord::new(ip(2)).with_mac("00:11:22:33:44:02");
        let second = HostRecord::new(ip(2))
            .with_mac("ff:ff:ff:ff:ff:ff")
            .with_vendor("V2");

        let merged = merge_into(Some(first), second);

        assert_eq!(merged.hardware_address.as_deref(), Some("00:11:22:33:44:02"));
        assert_eq!(merged.vendor.as_deref(), Some("V2"));
    }

    #[test]
    fn merge_is_idempotent() {
        let host = HostRecord::new(ip(3)).with_hostname("nas").with_mac("00:11:22:33:44:03");
        assert_eq!(merge_into(Some(host.clone()), host.clone()), host);
    }

    #[test]
    fn empty_incoming_never_clears() {
        let host = HostRecord::new(ip(4)).with_vendor("V4");
        assert_eq!(merge_into(Some(host.clone()), HostRecord::new(ip(4))), host);
    }

    #[test]
    fn merge_all_keeps_one_record_per_address() {
        let mut hosts = HostMap::new();
        merge_all(
            &mut hosts,
            vec![
                HostRecord::new(ip(2)),
                HostRecord::new(ip(10)).with_vendor("V10"),
                HostRecord::new(ip(2)).with_mac("00:11:22:33:44:02"),
            ],
        );

        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[&ip(2)].hardware_address.as_deref(), Some("00:11:22:33:44:02"));
        assert_eq!(hosts[&ip(10)].vendor.as_deref(), Some("V10"));
    }

    #[test]
    fn seeding_does_not_touch_known_hosts() {
        let mut hosts = HostMap::new();
        merge_all(&mut hosts, vec![HostRecord::new(ip(2)).with_mac("00:11:22:33:44:02")]);
        seed_addresses(&mut hosts, vec![ip(2), ip(3), ip(3)]);

        assert_eq!(hosts.len(), 2);
        assert!(hosts[&ip(2)].has_mac());
        assert_eq!(hosts[&ip(3)], HostRecord::new(ip(3)));
    }
}
