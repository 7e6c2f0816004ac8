use thiserror::Error;

/// Problems that stop a discovery pass before any probe runs.
///
/// Everything that goes wrong *during* a pass (missing tools, timeouts,
/// unreadable output) is absorbed by the probes and resolvers themselves.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid subnet '{input}': {reason}")]
    InvalidSubnet { input: String, reason: String },

    #[error("could not auto-detect a subnet: {0}")]
    NoSubnet(String),

    #[error("no subnet given, provide --subnet (e.g. 192.168.0.0/24) or use --auto")]
    MissingSubnet,

    #[error("timeout must be at least one second")]
    InvalidTimeout,
}
