//! # localnet common
//!
//! Types shared by every crate in the workspace:
//!
//! * **[`network`]**: the per-host record, the subnet type, interface based
//!   subnet detection and the OUI vendor database.
//! * **[`config`]**: options of a single discovery run.
//! * **[`error`]**: configuration errors, the only errors a caller ever sees.
//! * **[`utils`]**: the external tool runner.

pub mod config;
pub mod error;
pub mod network;
pub mod utils;
