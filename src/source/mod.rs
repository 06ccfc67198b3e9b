//! source
//!
//! Abstraction over where repository and commit data comes from.
//!
//! # Architecture
//!
//! The `DataSource` trait defines the three operations the analytics front
//! end needs. Commands use the [`create_source`] factory function rather
//! than importing specific implementations directly.
//!
//! # Modules
//!
//! - `traits`: Core `DataSource` trait, records and `TransportError`
//! - [`mock`]: In-memory fake that fabricates data
//! - [`http`]: Client for the backend JSON API
//! - `factory`: Source selection from configuration
//!
//! # Example
//!
//! ```ignore
//! use churnscope::core::config::Config;
//! use churnscope::source::create_source;
//!
//! let source = create_source(&Config::load()?)?;
//! for repo in source.list_repositories().await? {
//!     println!("{} {}", repo.id, repo.name);
//! }
//! ```

mod factory;
pub mod http;
pub mod mock;
mod traits;

pub use factory::{create_source, valid_source_names, SourceKind};
pub use traits::*;
