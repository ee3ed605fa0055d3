use anyhow::{Context as _, Result};
use gitdeck_core::{ConfigFile, locator};
use gitdeck_git::GitCli;

use super::Cli;

/// Dependencies shared by all commands, built from global flags.
#[derive(Debug)]
pub struct Context {
    pub config: ConfigFile,
    pub git: GitCli,
}

impl Context {
    /// Resolve `--config` and `--git`.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => ConfigFile::new(path),
            None => ConfigFile::at_default_location()?,
        };
        let git = cli
            .git
            .as_ref()
            .map_or_else(GitCli::new, GitCli::with_program);

        Ok(Self { config, git })
    }
}

/// Helper to get the configured root, which must exist.
pub fn existing_root(ctx: &Context) -> Result<std::path::PathBuf> {
    let root = ctx.config.require()?;
    locator::require_root(&root).context("Run `gitdeck` to fix the repositories root")?;
    Ok(root)
}

/// Helper to resolve an optional path argument against the current directory.
pub fn dir_or_cwd(path: Option<&std::path::Path>) -> Result<std::path::PathBuf> {
    let dir = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir().context("Cannot determine the current directory")?,
    };
    std::path::absolute(&dir).with_context(|| format!("Cannot resolve {}", dir.display()))
}
