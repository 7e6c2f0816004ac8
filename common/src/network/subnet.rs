//! # Scan Subnet
//!
//! The IPv4 CIDR block a discovery pass covers.
//!
//! The block is kept exactly as written (`192.168.0.110/24` stays
//! `192.168.0.110/24`) because it is handed verbatim to the external tools,
//! all of which accept host bits in a CIDR.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subnet {
    network: Ipv4Network,
}

impl Subnet {
    pub fn new(ip: Ipv4Addr, prefix: u8) -> Result<Self, ConfigError> {
        let network = Ipv4Network::new(ip, prefix).map_err(|e| ConfigError::InvalidSubnet {
            input: format!("{ip}/{prefix}"),
            reason: e.to_string(),
        })?;
        Ok(Self { network })
    }

    /// Whether `addr` falls inside the block, host bits ignored.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.network.contains(addr)
    }
}

impl From<Ipv4Network> for Subnet {
    fn from(network: Ipv4Network) -> Self {
        Self { network }
    }
}

impl FromStr for Subnet {
    type Err = ConfigError;

    /// Parses `a.b.c.d/p`. A bare address is treated as a `/32`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = |reason: String| ConfigError::InvalidSubnet {
            input: s.to_string(),
            reason,
        };

        let Some((ip_str, prefix_str)) = s.split_once('/') else {
            let ip = s
                .parse::<Ipv4Addr>()
                .map_err(|e| invalid(format!("not an IPv4 address: {e}")))?;
            return Subnet::new(ip, 32);
        };

        let ip = ip_str
            .parse::<Ipv4Addr>()
            .map_err(|e| invalid(format!("not an IPv4 address: {e}")))?;
        let prefix = prefix_str
            .parse::<u8>()
            .map_err(|e| invalid(format!("bad prefix length: {e}")))?;

        Ipv4Network::new(ip, prefix)
            .map(Subnet::from)
            .map_err(|e| invalid(e.to_string()))
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network.ip(), self.network.prefix())
    }
}
