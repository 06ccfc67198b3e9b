//! config command - Show or create the configuration file

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::load_config;
use crate::cli::Context;
use crate::core::config::{Config, GlobalConfig};
use crate::ui::output;

/// Effective settings, as printed by `config show --json`.
#[derive(Debug, Serialize)]
struct EffectiveConfig<'a> {
    path: Option<String>,
    source: &'a str,
    base_url: Option<&'a str>,
    base_path: &'a str,
}

/// Show the effective configuration.
pub fn show(ctx: &Context) -> Result<()> {
    let config = load_config(ctx)?;
    let effective = EffectiveConfig {
        path: config.loaded_from().map(|p| p.display().to_string()),
        source: config.source_kind(),
        base_url: config.base_url(),
        base_path: config.base_path(),
    };

    if ctx.json {
        output::json(&effective)?;
        return Ok(());
    }

    let verbosity = ctx.verbosity();
    output::print(
        format!(
            "config:    {}",
            effective.path.as_deref().unwrap_or("(none, using defaults)")
        ),
        verbosity,
    );
    output::print(format!("source:    {}", effective.source), verbosity);
    output::print(
        format!("base_url:  {}", effective.base_url.unwrap_or("(unset)")),
        verbosity,
    );
    output::print(format!("base_path: {}", effective.base_path), verbosity);

    Ok(())
}

/// Write a starter configuration file.
pub fn init(ctx: &Context, force: bool) -> Result<()> {
    let path = Config::global_config_path()?;
    Config::write_global(&path, &GlobalConfig::starter(), force)
        .with_context(|| format!("Failed to initialize config at {}", path.display()))?;

    output::print(format!("Wrote {}", path.display()), ctx.verbosity());
    Ok(())
}
