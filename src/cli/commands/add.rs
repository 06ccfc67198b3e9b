//! add command - Add a repository

use anyhow::Result;

use super::open_api;
use crate::cli::Context;
use crate::ui::output;

/// Run the add command.
pub fn add(ctx: &Context, name: &str) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(add_async(ctx, name))
}

async fn add_async(ctx: &Context, name: &str) -> Result<()> {
    let api = open_api(ctx)?;
    let repo = api.add_repository(name).await?;

    if ctx.json {
        output::json(&repo)?;
    } else if ctx.quiet {
        // Just the id, for scripts
        println!("{}", repo.id);
    } else {
        output::print(
            format!("Added {}", output::format_repository(&repo)),
            ctx.verbosity(),
        );
    }

    Ok(())
}
