//! core
//!
//! Configuration and the injectable pieces the data sources build on.
//!
//! # Modules
//!
//! - [`config`] - Configuration schema and loading
//! - [`clock`] - Injectable time source
//! - [`ids`] - Random repository identifiers

pub mod clock;
pub mod config;
pub mod ids;
