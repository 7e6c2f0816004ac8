#![cfg(test)]
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::Ordering;
use std::time::Duration;

use localnet_common::network::host::HostRecord;
use localnet_common::network::subnet::Subnet;
use localnet_core::discovery::DiscoveryService;

use super::stubs::{
    StaticAddresses, StaticHosts, StaticNameTable, StaticNames, StaticNeighbors, StaticVendors,
    ip,
};

const TIMEOUT: Duration = Duration::from_secs(1);

fn subnet() -> Subnet {
    "192.168.0.0/24".parse().unwrap()
}

fn service() -> DiscoveryService {
    DiscoveryService::new(Box::new(StaticNeighbors::default()), TIMEOUT)
}

fn addresses(hosts: &[HostRecord]) -> Vec<Ipv4Addr> {
    hosts.iter().map(|host| host.address).collect()
}

fn hostname_of(hosts: &[HostRecord], address: Ipv4Addr) -> Option<&str> {
    hosts
        .iter()
        .find(|host| host.address == address)
        .and_then(|host| host.hostname.as_deref())
}

/// The example network: two hosts seen with MACs, one only pinged.
fn scenario() -> DiscoveryService {
    let neighbors = StaticNeighbors(HashMap::from([(ip(3), "AA:BB:CC:DD:EE:FF".to_string())]));

    DiscoveryService::new(Box::new(neighbors), TIMEOUT)
        .with_host_probe(Box::new(StaticHosts(vec![
            HostRecord::new(ip(2)).with_mac("00:11:22:33:44:02").with_vendor("V1"),
            HostRecord::new(ip(10)).with_mac("00:11:22:33:44:0A").with_vendor("V2"),
        ])))
        .with_address_probe(Box::new(StaticAddresses(vec![ip(2), ip(10), ip(3)])))
        .with_netbios(Box::new(StaticNameTable::new(&[(ip(3), "WINHOST")])))
        .with_mdns(Box::new(StaticNames::new("mDNS", &[(ip(2), "printer.local")])))
        .with_reverse_dns(Box::new(StaticNames::new("reverse DNS", &[(ip(10), "server.local")])))
}

#[tokio::test]
async fn end_to_end_scenario() {
    let hosts = scenario().discover(&subnet()).await;

    assert_eq!(
        hosts,
        vec![
            HostRecord::new(ip(2))
                .with_hostname("printer.local")
                .with_mac("00:11:22:33:44:02")
                .with_vendor("V1"),
            HostRecord::new(ip(3))
                .with_hostname("WINHOST")
                .with_mac("AA:BB:CC:DD:EE:FF"),
            HostRecord::new(ip(10))
                .with_hostname("server.local")
                .with_mac("00:11:22:33:44:0A")
                .with_vendor("V2"),
        ]
    );
}

#[tokio::test]
async fn one_record_per_address_in_numeric_order() {
    let hosts = service()
        .with_host_probe(Box::new(StaticHosts(vec![
            HostRecord::new(ip(10)),
            HostRecord::new(ip(2)),
        ])))
        .with_host_probe(Box::new(StaticHosts(vec![HostRecord::new(ip(2))])))
        .with_address_probe(Box::new(StaticAddresses(vec![ip(3), ip(10), ip(3)])))
        .with_address_probe(Box::new(StaticAddresses(vec![ip(1)])))
        .discover(&subnet())
        .await;

    assert_eq!(addresses(&hosts), vec![ip(1), ip(2), ip(3), ip(10)]);
}

#[tokio::test]
async fn earlier_host_probe_wins_conflicts() {
    let hosts = service()
        .with_host_probe(Box::new(StaticHosts(vec![
            HostRecord::new(ip(2)).with_mac("00:11:22:33:44:02"),
        ])))
        .with_host_probe(Box::new(StaticHosts(vec![
            HostRecord::new(ip(2)).with_mac("ff:ff:ff:ff:ff:ff").with_vendor("Late"),
        ])))
        .discover(&subnet())
        .await;

    assert_eq!(hosts[0].hardware_address.as_deref(), Some("00:11:22:33:44:02"));
    assert_eq!(hosts[0].vendor.as_deref(), Some("Late"));
}

#[tokio::test]
async fn resolvers_never_replace_known_fields() {
    let neighbors = StaticNeighbors(HashMap::from([(ip(2), "ff:ff:ff:ff:ff:ff".to_string())]));
    let vendors = StaticVendors(HashMap::from([(
        "00:11:22:33:44:02".to_string(),
        "From OUI".to_string(),
    )]));

    let hosts = DiscoveryService::new(Box::new(neighbors), TIMEOUT)
        .with_host_probe(Box::new(StaticHosts(vec![
            HostRecord::new(ip(2))
                .with_hostname("probe-name")
                .with_mac("00:11:22:33:44:02")
                .with_vendor("From probe"),
        ])))
        .with_vendor_repository(Box::new(vendors))
        .with_mdns(Box::new(StaticNames::new("mDNS", &[(ip(2), "other.local")])))
        .discover(&subnet())
        .await;

    assert_eq!(
        hosts,
        vec![
            HostRecord::new(ip(2))
                .with_hostname("probe-name")
                .with_mac("00:11:22:33:44:02")
                .with_vendor("From probe"),
        ]
    );
}

#[tokio::test]
async fn vendor_comes_from_the_neighbor_mac() {
    let neighbors = StaticNeighbors(HashMap::from([(ip(7), "00:11:22:33:44:07".to_string())]));
    let vendors = StaticVendors(HashMap::from([(
        "00:11:22:33:44:07".to_string(),
        "Acme".to_string(),
    )]));

    let hosts = DiscoveryService::new(Box::new(neighbors), TIMEOUT)
        .with_address_probe(Box::new(StaticAddresses(vec![ip(7)])))
        .with_vendor_repository(Box::new(vendors))
        .discover(&subnet())
        .await;

    assert_eq!(hosts[0].hardware_address.as_deref(), Some("00:11:22:33:44:07"));
    assert_eq!(hosts[0].vendor.as_deref(), Some("Acme"));
}

fn naming_service(mdns: bool, netbios: bool, rdns: bool) -> DiscoveryService {
    let mut service = service().with_address_probe(Box::new(StaticAddresses(vec![ip(5)])));
    if mdns {
        service = service.with_mdns(Box::new(StaticNames::new("mDNS", &[(ip(5), "m.local")])));
    }
    if netbios {
        service = service.with_netbios(Box::new(StaticNameTable::new(&[(ip(5), "NBNAME")])));
    }
    if rdns {
        service = service.with_reverse_dns(Box::new(StaticNames::new(
            "reverse DNS",
            &[(ip(5), "r.example.com")],
        )));
    }
    service
}

#[tokio::test]
async fn hostname_priority_under_every_source_combination() {
    let cases = [
        ((true, true, true), Some("m.local")),
        ((true, true, false), Some("m.local")),
        ((true, false, true), Some("m.local")),
        ((false, true, true), Some("NBNAME")),
        ((false, true, false), Some("NBNAME")),
        ((false, false, true), Some("r.example.com")),
        ((true, false, false), Some("m.local")),
        ((false, false, false), None),
    ];

    for ((mdns, netbios, rdns), expected) in cases {
        let hosts = naming_service(mdns, netbios, rdns).discover(&subnet()).await;
        assert_eq!(
            hostname_of(&hosts, ip(5)),
            expected,
            "mdns={mdns} netbios={netbios} rdns={rdns}"
        );
    }
}

#[tokio::test]
async fn later_sources_are_not_asked_once_named() {
    let rdns = StaticNames::new("reverse DNS", &[(ip(2), "r.local"), (ip(3), "r3.local")]);
    let rdns_calls = rdns.calls.clone();

    let hosts = service()
        .with_address_probe(Box::new(StaticAddresses(vec![ip(2), ip(3)])))
        .with_mdns(Box::new(StaticNames::new("mDNS", &[(ip(2), "m.local")])))
        .with_reverse_dns(Box::new(rdns))
        .discover(&subnet())
        .await;

    assert_eq!(hostname_of(&hosts, ip(2)), Some("m.local"));
    assert_eq!(hostname_of(&hosts, ip(3)), Some("r3.local"));
    assert_eq!(rdns_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn netbios_table_is_fetched_once_per_pass() {
    let table = StaticNameTable::new(&[(ip(4), "WIN4")]);
    let calls = table.calls.clone();

    let service = service()
        .with_address_probe(Box::new(StaticAddresses(vec![ip(2), ip(3), ip(4)])))
        .with_netbios(Box::new(table));

    let hosts = service.discover(&subnet()).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(hostname_of(&hosts, ip(4)), Some("WIN4"));

    service.discover(&subnet()).await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn netbios_names_outside_the_pass_are_ignored() {
    let hosts = service()
        .with_address_probe(Box::new(StaticAddresses(vec![ip(2)])))
        .with_netbios(Box::new(StaticNameTable::new(&[(ip(99), "GHOST")])))
        .discover(&subnet())
        .await;

    assert_eq!(addresses(&hosts), vec![ip(2)]);
    assert_eq!(hosts[0].hostname, None);
}

#[tokio::test]
async fn nothing_found_is_an_empty_result() {
    let hosts = service()
        .with_host_probe(Box::new(StaticHosts(Vec::new())))
        .with_address_probe(Box::new(StaticAddresses(Vec::new())))
        .with_mdns(Box::new(StaticNames::new("mDNS", &[])))
        .with_netbios(Box::new(StaticNameTable::new(&[])))
        .discover(&subnet())
        .await;

    assert!(hosts.is_empty());
}
