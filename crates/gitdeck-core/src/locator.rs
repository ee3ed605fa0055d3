//! Discovery of working copies directly under the repositories root.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};

/// Subdirectory whose presence marks a git working copy.
pub const MARKER: &str = ".git";

/// A working copy found under the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoRef {
    /// Directory name.
    pub name: String,
    /// Full path to the working copy.
    pub path: PathBuf,
}

/// What is on disk at the configured root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootStatus {
    /// A directory; ready to scan.
    Ready,
    /// Nothing exists at the path.
    Missing,
    /// Something exists but it is not a directory.
    NotADirectory,
}

/// Check what exists at `root`.
#[must_use]
pub fn root_status(root: &Path) -> RootStatus {
    if root.is_dir() {
        RootStatus::Ready
    } else if root.exists() {
        RootStatus::NotADirectory
    } else {
        RootStatus::Missing
    }
}

/// Require `root` to be an existing directory.
///
/// # Errors
/// Returns `RootMissing` or `RootNotADirectory`.
pub fn require_root(root: &Path) -> Result<()> {
    match root_status(root) {
        RootStatus::Ready => Ok(()),
        RootStatus::Missing => Err(Error::RootMissing(root.to_path_buf())),
        RootStatus::NotADirectory => Err(Error::RootNotADirectory(root.to_path_buf())),
    }
}

/// Check whether `dir` contains the [`MARKER`] subdirectory.
#[must_use]
pub fn has_marker(dir: &Path) -> bool {
    dir.join(MARKER).is_dir()
}

/// List immediate subdirectories of `root` that are working copies.
///
/// Entries come back sorted by name, the order `ls` shows them in. Nested
/// working copies are not searched.
///
/// # Errors
/// Returns an IO error if `root` cannot be read.
pub fn scan(root: &Path) -> Result<Vec<RepoRef>> {
    let mut repos = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() || !has_marker(&path) {
            continue;
        }

        repos.push(RepoRef {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
        });
    }

    repos.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(repos)
}
