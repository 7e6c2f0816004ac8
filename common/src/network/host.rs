//! # Host Record
//!
//! Everything known about a single IPv4 address during a discovery pass.
//!
//! A record is created by the first probe or resolver that mentions its
//! address and is afterwards only ever *filled*: a field that holds a value
//! keeps it for the rest of the pass, whatever later sources report.
//!
//! Serializes as `{ip, hostname, mac, vendor}` with unknown fields as `""`.

use std::net::Ipv4Addr;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostRecord {
    #[serde(rename = "ip")]
    pub address: Ipv4Addr,
    #[serde(serialize_with = "unknown_as_empty")]
    pub hostname: Option<String>,
    #[serde(rename = "mac", serialize_with = "unknown_as_empty")]
    pub hardware_address: Option<String>,
    #[serde(serialize_with = "unknown_as_empty")]
    pub vendor: Option<String>,
}

impl HostRecord {
    /// A bare record that only knows its address.
    pub fn new(address: Ipv4Addr) -> Self {
        Self {
            address,
            hostname: None,
            hardware_address: None,
            vendor: None,
        }
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = non_empty(hostname.into());
        self
    }

    pub fn with_mac(mut self, mac: impl Into<String>) -> Self {
        self.hardware_address = non_empty(mac.into());
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = non_empty(vendor.into());
        self
    }

    /// Copies every field of `other` that is set there and still unset here.
    ///
    /// Fields that already hold a value are left untouched, so when two
    /// sources disagree the one merged first wins.
    pub fn merge_from(&mut self, other: &HostRecord) {
        fill(&mut self.hostname, other.hostname.as_deref());
        fill(&mut self.hardware_address, other.hardware_address.as_deref());
        fill(&mut self.vendor, other.vendor.as_deref());
    }

    /// Sets the hostname if none is known yet. Returns `true` if it changed.
    pub fn fill_hostname(&mut self, hostname: &str) -> bool {
        fill(&mut self.hostname, Some(hostname))
    }

    pub fn fill_mac(&mut self, mac: &str) -> bool {
        fill(&mut self.hardware_address, Some(mac))
    }

    pub fn fill_vendor(&mut self, vendor: &str) -> bool {
        fill(&mut self.vendor, Some(vendor))
    }

    pub fn has_hostname(&self) -> bool {
        is_set(&self.hostname)
    }

    pub fn has_mac(&self) -> bool {
        is_set(&self.hardware_address)
    }

    pub fn has_vendor(&self) -> bool {
        is_set(&self.vendor)
    }
}

fn is_set(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.trim().is_empty())
}

fn fill(field: &mut Option<String>, incoming: Option<&str>) -> bool {
    if is_set(field) {
        return false;
    }
    match incoming.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => {
            *field = Some(value.to_string());
            true
        }
        None => false,
    }
}

fn unknown_as_empty<S>(field: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(field.as_deref().unwrap_or_default())
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
