//! churnscope - Repository and code-churn data for an analytics front end
//!
//! churnscope provides the data-access layer a repository analytics UI sits
//! on: list repositories, add a repository, and fetch a repository's daily
//! code churn. The data comes from a pluggable source: an in-memory fake that
//! fabricates plausible data, or the backend's JSON API over HTTP.
//!
//! # Architecture
//!
//! - [`api`] - The three data operations, with log-and-return error policy
//! - [`source`] - `DataSource` trait, mock and HTTP implementations, factory
//! - [`core`] - Configuration, injectable clock and id generation
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - Output formatting
//!
//! # Example
//!
//! ```
//! use churnscope::api::RepositoryApi;
//! use churnscope::source::mock::MockSource;
//!
//! # tokio_test::block_on(async {
//! let api = RepositoryApi::new(Box::new(MockSource::new()));
//! let repo = api.add_repository("github.com/acme/widget").await.unwrap();
//! assert_eq!(repo.name, "github.com/acme/widget");
//! # });
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod source;
pub mod ui;
