//! Local subnet detection for `--auto`.
//!
//! Picks the interface that most likely faces the LAN and reports its first
//! private IPv4 network, host bits included (e.g. `192.168.0.110/24`).

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::{IpNetwork, Ipv4Network};
use tracing::debug;

#[cfg(target_os = "linux")]
use linux_impl::{is_physical, is_wireless};
#[cfg(not(target_os = "linux"))]
use fallback_impl::{is_physical, is_wireless};

use crate::error::ConfigError;
use crate::network::subnet::Subnet;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ViabilityError {
    /// The interface is operationally down.
    IsDown,
    /// The interface was filtered out as "not physical" by the provided logic.
    NotPhysical,
    /// The interface does not have a MAC address.
    NoMacAddress,
    /// The interface does not support broadcast (required for ARP).
    NotBroadcast,
    /// The interface is a point-to-point link (e.g., a VPN).
    IsPointToPoint,
    /// The interface has no private IPv4 address.
    NoValidLanIp,
}

/// Finds the primary LAN subnet of this machine.
///
/// With `preferred` set only the interface of that name is considered, and
/// it does not have to be backed by physical hardware.
pub fn detect_subnet(preferred: Option<&str>) -> Result<Subnet, ConfigError> {
    let interfaces: Vec<NetworkInterface> = pnet::datalink::interfaces();
    debug!("Identified {} network interface(s)", interfaces.len());

    let network = select_lan_network(interfaces, preferred, is_physical, is_wired)?;
    Ok(Subnet::from(network))
}

fn select_lan_network(
    interfaces: Vec<NetworkInterface>,
    preferred: Option<&str>,
    is_physical: impl Fn(&NetworkInterface) -> bool,
    is_wired: impl Fn(&NetworkInterface) -> bool,
) -> Result<Ipv4Network, ConfigError> {
    let candidates: Vec<NetworkInterface> = match preferred {
        Some(name) => interfaces
            .into_iter()
            .filter(|interface| interface.name == name)
            .filter(|interface| is_viable_lan_interface(interface, |_| true).is_ok())
            .collect(),
        None => interfaces
            .into_iter()
            .filter(|interface| is_viable_lan_interface(interface, &is_physical).is_ok())
            .collect(),
    };

    let Some(interface) = select_best_lan_interface(candidates, is_wired) else {
        let reason = match preferred {
            Some(name) => format!("interface {name} is missing, down or has no private IPv4 address"),
            None => "no interface available for LAN discovery".to_string(),
        };
        return Err(ConfigError::NoSubnet(reason));
    };

    debug!("Selected {} for LAN discovery", interface.name);
    first_private_ipv4(&interface).ok_or_else(|| {
        ConfigError::NoSubnet(format!("interface {} has no private IPv4 address", interface.name))
    })
}

fn first_private_ipv4(interface: &NetworkInterface) -> Option<Ipv4Network> {
    interface.ips.iter().find_map(|net| match net {
        IpNetwork::V4(v4) if v4.ip().is_private() => Some(*v4),
        _ => None,
    })
}

fn is_viable_lan_interface(
    interface: &NetworkInterface,
    is_physical: impl Fn(&NetworkInterface) -> bool,
) -> Result<(), ViabilityError> {
    if !interface.is_up() {
        return Err(ViabilityError::IsDown);
    }
    if interface.is_loopback() || !is_physical(interface) {
        return Err(ViabilityError::NotPhysical);
    }
    if interface.mac.is_none() {
        return Err(ViabilityError::NoMacAddress);
    }
    if !interface.is_broadcast() {
        return Err(ViabilityError::NotBroadcast);
    }
    if interface.is_point_to_point() {
        return Err(ViabilityError::IsPointToPoint);
    }
    if first_private_ipv4(interface).is_none() {
        return Err(ViabilityError::NoValidLanIp);
    }

    Ok(())
}

fn select_best_lan_interface(
    interfaces: Vec<NetworkInterface>,
    is_wired: impl Fn(&NetworkInterface) -> bool,
) -> Option<NetworkInterface> {
    let wired = interfaces.iter().position(|interface| is_wired(interface));
    let idx = wired.unwrap_or(0);
    interfaces.into_iter().nth(idx)
}

fn is_wired(interface: &NetworkInterface) -> bool {
    is_physical(interface) && !is_wireless(interface)
}

#[cfg(target_os = "linux")]
mod linux_impl {
    use super::*;
    use std::path::Path;

    pub fn is_physical(interface: &NetworkInterface) -> bool {
        Path::new(&format!("/sys/class/net/{}/device", interface.name)).exists()
    }

    pub fn is_wireless(interface: &NetworkInterface) -> bool {
        Path::new(&format!("/sys/class/net/{}/wireless", interface.name)).exists()
    }
}

#[cfg(not(target_os = "linux"))]
mod fallback_impl {
    use super::*;

    pub fn is_physical(interface: &NetworkInterface) -> bool {
        !interface.is_loopback()
    }

    pub fn is_wireless(interface: &NetworkInterface) -> bool {
        interface.name.starts_with("wl")
    }
}
