//! repos command - List repositories

use anyhow::Result;

use super::open_api;
use crate::cli::Context;
use crate::ui::output;

/// Run the repos command.
pub fn repos(ctx: &Context) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(repos_async(ctx))
}

async fn repos_async(ctx: &Context) -> Result<()> {
    let api = open_api(ctx)?;
    let repos = api.fetch_repositories().await?;

    if ctx.json {
        output::json(&repos)?;
    } else if repos.is_empty() {
        output::print("No repositories.", ctx.verbosity());
    } else {
        output::print(output::format_repositories(&repos), ctx.verbosity());
    }

    Ok(())
}
