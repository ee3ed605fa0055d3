//! Repositories root validation and working-copy selection.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gitdeck_core::locator::{self, RootStatus};
use gitdeck_core::ConfigStore;

use crate::menu::{Menu, MenuChoice};
use crate::output;
use crate::prompt::Prompter;

/// What to do when the configured root is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootRecovery {
    /// Create the directory.
    Create,
    /// Delete the config file so the next start asks again.
    ResetConfig,
    /// Give up.
    Exit,
}

impl MenuChoice for RootRecovery {
    const ALL: &'static [Self] = &[Self::Create, Self::ResetConfig, Self::Exit];
    const TITLE: &'static str = "The repositories root does not exist. What now?";

    fn label(self) -> &'static str {
        match self {
            Self::Create => "Create it",
            Self::ResetConfig => "Reset configuration",
            Self::Exit => "Exit",
        }
    }
}

/// Result of checking the repositories root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootCheck {
    /// The root exists (possibly just created).
    Ready,
    /// Configuration was deleted; the user must restart.
    Reset,
    /// The user chose to stop, or the root is unusable.
    Abort,
}

/// Validates the root and lets the user pick a working copy under it.
pub struct LocateService<'a, C: ConfigStore, P: Prompter> {
    store: &'a C,
    prompter: &'a P,
}

impl<'a, C: ConfigStore, P: Prompter> LocateService<'a, C, P> {
    /// Create a new locate service.
    pub const fn new(store: &'a C, prompter: &'a P) -> Self {
        Self { store, prompter }
    }

    /// Make sure `root` is a directory, offering recovery when it is missing.
    pub fn validate_root(&self, root: &Path) -> Result<RootCheck> {
        match locator::root_status(root) {
            RootStatus::Ready => return Ok(RootCheck::Ready),
            RootStatus::NotADirectory => {
                output::error(&format!(
                    "Repositories root {} is not a directory",
                    output::path(root)
                ));
                return Ok(RootCheck::Abort);
            }
            RootStatus::Missing => {}
        }

        output::warn(&format!(
            "Repositories root {} does not exist",
            output::path(root)
        ));

        match RootRecovery::pick(self.prompter, RootRecovery::Create)? {
            Some(RootRecovery::Create) => {
                fs::create_dir_all(root)
                    .with_context(|| format!("Failed to create {}", root.display()))?;
                output::success(&format!("Created {}", output::path(root)));
                Ok(RootCheck::Ready)
            }
            Some(RootRecovery::ResetConfig) => {
                self.store.reset().context("Failed to reset configuration")?;
                output::success(&format!("Removed {}", self.store.path().display()));
                output::info("Restart gitdeck to choose a new repositories root");
                Ok(RootCheck::Reset)
            }
            Some(RootRecovery::Exit) | None => Ok(RootCheck::Abort),
        }
    }

    /// List working copies under `root` and let the user pick one.
    ///
    /// Returns `None` when there is nothing to pick or the choice is invalid.
    pub fn scan_and_pick(&self, root: &Path) -> Result<Option<PathBuf>> {
        let repos = locator::scan(root)
            .with_context(|| format!("Failed to read {}", root.display()))?;

        if repos.is_empty() {
            output::warn(&format!("No repositories found in {}", output::path(root)));
            return Ok(None);
        }

        let menu = Menu::new(
            format!("Repositories in {}", root.display()),
            repos.iter().map(|r| r.name.clone()).collect(),
        );
        let picked = menu
            .select(self.prompter, 1)?
            .and_then(|i| repos.get(i))
            .map(|r| r.path.clone());
        Ok(picked)
    }
}
