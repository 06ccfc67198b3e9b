//! ui
//!
//! Terminal output for the CLI.

pub mod output;
