//! cli
//!
//! Command-line interface layer for churnscope.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration and build the data source
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and talks to data
//! only through [`crate::api::RepositoryApi`], which it builds with the
//! [`crate::source::create_source`] factory.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::Result;

use crate::core::config::Overrides;
use crate::ui::output::Verbosity;

/// Settings shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Enable debug output
    pub debug: bool,
    /// Minimal output
    pub quiet: bool,
    /// Print results as JSON
    pub json: bool,
    /// Data source overrides from the command line
    pub overrides: Overrides,
}

impl Context {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs` once logging is set up.
pub fn run(cli: Cli) -> Result<()> {
    let ctx = Context {
        debug: cli.debug,
        quiet: cli.quiet,
        json: cli.json,
        overrides: cli.overrides(),
    };

    commands::dispatch(cli.command, &ctx)
}
