//! `gitdeck status` - the status check without the menus.

use std::path::Path;

use anyhow::{Result, bail};
use gitdeck_git::GitOps;

use super::{Context, utils};
use crate::output;
use crate::services::{collect_status, print_status};

/// Run the status command.
pub fn run(ctx: &Context, path: Option<&Path>, json: bool) -> Result<()> {
    let dir = utils::dir_or_cwd(path)?;
    if !ctx.git.is_repository(&dir) {
        bail!("{} is not a git repository", dir.display());
    }

    let report = collect_status(&ctx.git, &dir)?;
    if json {
        output::essential(&serde_json::to_string_pretty(&report)?);
    } else {
        output::info(&format!("Repository: {}", output::path(&dir)));
        print_status(&report);
    }
    Ok(())
}
