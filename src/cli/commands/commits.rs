//! commits command - Show daily churn for a repository

use anyhow::Result;

use super::open_api;
use crate::cli::Context;
use crate::ui::output;

/// Run the commits command.
pub fn commits(ctx: &Context, repository_id: &str) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(commits_async(ctx, repository_id))
}

async fn commits_async(ctx: &Context, repository_id: &str) -> Result<()> {
    let api = open_api(ctx)?;
    let commits = api.fetch_commits(repository_id).await?;

    if ctx.json {
        output::json(&commits)?;
    } else {
        output::print(output::format_commits(&commits), ctx.verbosity());
    }

    Ok(())
}
