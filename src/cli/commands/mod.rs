//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Async Commands
//!
//! Data commands (repos, add, commits) are async because the data source
//! may do network I/O. Each one builds a tokio runtime and blocks on its
//! async implementation.

mod add;
mod commits;
mod completion;
mod config_cmd;
mod repos;

pub use add::add;
pub use commits::commits;
pub use completion::completion;
pub use repos::repos;

use anyhow::{Context as _, Result};

use super::args::{Command, ConfigAction};
use super::Context;
use crate::api::RepositoryApi;
use crate::core::config::Config;
use crate::source::create_source;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Repos => repos(ctx),
        Command::Add { name } => add(ctx, &name),
        Command::Commits { repository_id } => commits(ctx, &repository_id),
        Command::Config { action } => match action {
            ConfigAction::Show => config_cmd::show(ctx),
            ConfigAction::Init { force } => config_cmd::init(ctx, force),
        },
        Command::Completion { shell } => completion(shell),
    }
}

/// Load configuration with command-line overrides applied.
pub(crate) fn load_config(ctx: &Context) -> Result<Config> {
    let config = Config::load().context("Failed to load config")?;
    config
        .with_overrides(ctx.overrides.clone())
        .context("Invalid data source settings")
}

/// Build the repository API for the configured data source.
pub(crate) fn open_api(ctx: &Context) -> Result<RepositoryApi> {
    let config = load_config(ctx)?;
    let source = create_source(&config).context("Failed to create data source")?;
    tracing::debug!(source = source.name(), "data source ready");
    Ok(RepositoryApi::new(source))
}
