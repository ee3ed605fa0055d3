//! First-run setup of the repositories root.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use gitdeck_core::ConfigStore;

use crate::menu::MenuChoice;
use crate::output;
use crate::prompt::Prompter;

/// How the user wants to pick the repositories root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupChoice {
    /// Accept the path derived from the current user.
    UseDefault,
    /// Type a path.
    Custom,
}

impl MenuChoice for SetupChoice {
    const ALL: &'static [Self] = &[Self::UseDefault, Self::Custom];
    const TITLE: &'static str = "Where do your repositories live?";

    fn label(self) -> &'static str {
        match self {
            Self::UseDefault => "Use the default location",
            Self::Custom => "Enter a custom path",
        }
    }
}

/// Turn user input into an absolute path. Blank input is an error.
pub fn absolute_path(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("Path cannot be empty");
    }
    std::path::absolute(Path::new(trimmed))
        .with_context(|| format!("Cannot resolve path '{trimmed}'"))
}

/// Loads the repositories root, asking for one on first run.
pub struct ConfigService<'a, C: ConfigStore, P: Prompter> {
    store: &'a C,
    prompter: &'a P,
    default_root: Option<PathBuf>,
}

impl<'a, C: ConfigStore, P: Prompter> ConfigService<'a, C, P> {
    /// Create a new config service.
    ///
    /// `default_root` is offered on first run; `None` skips straight to
    /// asking for a custom path.
    pub const fn new(store: &'a C, prompter: &'a P, default_root: Option<PathBuf>) -> Self {
        Self {
            store,
            prompter,
            default_root,
        }
    }

    /// Return the stored root, or run first-time setup and persist the answer.
    pub fn load_or_init(&self) -> Result<PathBuf> {
        if let Some(root) = self.store.load()? {
            return Ok(root);
        }

        output::info("No repositories root configured yet");
        let root = self.ask_root()?;

        self.store
            .save(&root)
            .context("Failed to save configuration")?;
        output::success(&format!(
            "Saved repositories root {} to {}",
            output::path(&root),
            self.store.path().display()
        ));
        Ok(root)
    }

    fn ask_root(&self) -> Result<PathBuf> {
        let Some(default) = &self.default_root else {
            return self.ask_custom();
        };

        output::detail(&format!("Default: {}", default.display()));
        match SetupChoice::pick(self.prompter, SetupChoice::UseDefault)? {
            Some(SetupChoice::UseDefault) => Ok(default.clone()),
            Some(SetupChoice::Custom) => self.ask_custom(),
            None => bail!("No repositories root chosen"),
        }
    }

    fn ask_custom(&self) -> Result<PathBuf> {
        let input = self.prompter.input("Repositories root:", None)?;
        absolute_path(&input)
    }
}
