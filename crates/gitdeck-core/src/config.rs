//! The one-line file holding the repositories root.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::traits::ConfigStore;

/// Directory under the platform config dir that holds gitdeck files.
pub const CONFIG_DIR_NAME: &str = "gitdeck";

/// Name of the file storing the repositories root.
pub const CONFIG_FILE_NAME: &str = "root";

/// Directory name, under the user's home, offered as the default root.
pub const DEFAULT_ROOT_DIR_NAME: &str = "repositories";

/// Default location of the config file, e.g. `~/.config/gitdeck/root`.
///
/// # Errors
/// Returns `NoConfigDir` if the platform has no config directory.
pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(Error::NoConfigDir)
}

/// Default repositories root for the current OS user, `~/repositories`.
///
/// # Errors
/// Returns `NoHomeDir` if the user's home directory is unknown.
pub fn default_root() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_ROOT_DIR_NAME))
        .ok_or(Error::NoHomeDir)
}

/// File-backed [`ConfigStore`].
///
/// The file holds a single line: the absolute path of the repositories root.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// Use the config file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the platform default location.
    ///
    /// # Errors
    /// Returns `NoConfigDir` if the platform has no config directory.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(default_config_path()?))
    }

    /// Check whether the backing file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the root, failing with `NotConfigured` when absent.
    ///
    /// # Errors
    /// Returns `NotConfigured` if nothing is stored, or an IO error.
    pub fn require(&self) -> Result<PathBuf> {
        self.load()?.ok_or(Error::NotConfigured)
    }
}

impl ConfigStore for ConfigFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<PathBuf>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let root = content.lines().next().map(str::trim).unwrap_or_default();
        if root.is_empty() {
            debug!(path = %self.path.display(), "config file has no root");
            return Ok(None);
        }

        Ok(Some(PathBuf::from(root)))
    }

    fn save(&self, root: &Path) -> Result<()> {
        let line = root.to_string_lossy();
        if line.trim().is_empty() {
            return Err(Error::EmptyPath);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{}\n", line.trim()))?;
        debug!(path = %self.path.display(), root = %line, "saved config");
        Ok(())
    }

    fn reset(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
