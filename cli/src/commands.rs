pub mod discover;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use localnet_common::config::Config;
use localnet_common::error::ConfigError;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "localnet")]
#[command(version)]
#[command(about = "One-shot local network discovery built on arp-scan, nmap, fping and friends.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover hosts in a local IPv4 subnet
    #[command(alias = "d")]
    Discover(DiscoverArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DiscoverArgs {
    /// CIDR to scan, e.g. 192.168.0.0/24
    #[arg(short, long, conflicts_with = "auto")]
    pub subnet: Option<String>,

    /// Auto-detect the primary private IPv4 network of this machine
    #[arg(long)]
    pub auto: bool,

    /// Interface for arp-scan and for subnet auto-detection
    #[arg(short, long)]
    pub interface: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Upper bound per external tool, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Do not try arp-scan even if available
    #[arg(long)]
    pub no_arpscan: bool,

    /// Add an fping ICMP sweep to the address probes
    #[arg(long)]
    pub deep: bool,

    /// Skip multicast DNS hostname lookups
    #[arg(long)]
    pub no_mdns: bool,

    /// Skip the NetBIOS name table sweep
    #[arg(long)]
    pub no_netbios: bool,

    /// Skip reverse DNS hostname lookups
    #[arg(long)]
    pub no_rdns: bool,

    /// Skip the OUI database vendor lookup
    #[arg(long)]
    pub no_oui: bool,

    /// Less terminal output, repeat for even less
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl DiscoverArgs {
    pub fn to_config(&self) -> Result<Config, ConfigError> {
        if self.timeout == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(Config {
            timeout: Duration::from_secs(self.timeout),
            interface: self.interface.clone(),
            deep: self.deep,
            no_arpscan: self.no_arpscan,
            no_mdns: self.no_mdns,
            no_netbios: self.no_netbios,
            no_rdns: self.no_rdns,
            no_oui: self.no_oui,
            quiet: self.quiet,
        })
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
