//! `gitdeck scan` - list repositories under the root without prompting.

use anyhow::Result;
use gitdeck_core::locator;
use serde::Serialize;

use super::{Context, utils};
use crate::output;

#[derive(Debug, Serialize)]
struct ScanOutput {
    root: std::path::PathBuf,
    repositories: Vec<locator::RepoRef>,
}

/// Run the scan command.
pub fn run(ctx: &Context, json: bool) -> Result<()> {
    let root = utils::existing_root(ctx)?;
    let repositories = locator::scan(&root)?;

    if json {
        let out = ScanOutput { root, repositories };
        output::essential(&serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if repositories.is_empty() {
        output::warn(&format!("No repositories found in {}", output::path(&root)));
        return Ok(());
    }

    output::info(&format!("Repositories in {}", output::path(&root)));
    for (i, repo) in repositories.iter().enumerate() {
        output::essential(&format!("{:>3}) {}", i + 1, repo.name));
    }
    Ok(())
}
