use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Options of a single discovery run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Upper bound for every single external tool invocation.
    pub timeout: Duration,
    /// Interface handed to the probes that can bind to one (arp-scan).
    pub interface: Option<String>,
    /// Adds the fping ICMP sweep to the address probes.
    pub deep: bool,
    pub no_arpscan: bool,
    pub no_mdns: bool,
    pub no_netbios: bool,
    pub no_rdns: bool,
    /// Disables the OUI database vendor lookup.
    pub no_oui: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            interface: None,
            deep: false,
            no_arpscan: false,
            no_mdns: false,
            no_netbios: false,
            no_rdns: false,
            no_oui: false,
            quiet: 0,
        }
    }
}
