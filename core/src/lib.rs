//! # localnet core
//!
//! The discovery pipeline and the collaborators it talks to.
//!
//! * **[`scanner`]**: probes that find candidate hosts.
//! * **[`resolver`]**: identity sources for hosts that are already known.
//! * **[`merge`]**: the field-level merge that keeps one record per address.
//! * **[`enrich`]**: resolver priority and the per-host enrichment loop.
//! * **[`discovery`]**: the [`DiscoveryService`](discovery::DiscoveryService)
//!   tying it all together.

pub mod discovery;
pub mod enrich;
pub mod merge;
pub mod resolver;
pub mod scanner;

#[cfg(test)]
mod testing;
