//! `gitdeck config` - inspect or change the repositories root.

use anyhow::{Context as _, Result};
use gitdeck_core::ConfigStore;

use super::Context;
use crate::output;
use crate::services::config::absolute_path;

/// Print the configured root.
pub fn show(ctx: &Context) -> Result<()> {
    let root = ctx.config.require()?;
    output::essential(&root.display().to_string());
    output::info(&format!("Stored in {}", ctx.config.path().display()));
    if !root.is_dir() {
        output::warn("The repositories root does not exist");
    }
    Ok(())
}

/// Overwrite the configured root.
pub fn set(ctx: &Context, path: &str) -> Result<()> {
    let root = absolute_path(path)?;
    ctx.config
        .save(&root)
        .context("Failed to save configuration")?;
    output::success(&format!("Repositories root set to {}", output::path(&root)));
    if !root.is_dir() {
        output::warn("The directory does not exist yet; the next session offers to create it");
    }
    Ok(())
}

/// Delete the config file.
pub fn reset(ctx: &Context) -> Result<()> {
    if ctx.config.reset()? {
        output::success(&format!("Removed {}", ctx.config.path().display()));
    } else {
        output::info("Nothing to reset");
    }
    Ok(())
}
