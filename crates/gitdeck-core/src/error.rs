//! Error types for gitdeck-core.

use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gitdeck-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No repositories root has been configured yet.
    #[error("repositories root not configured - run `gitdeck` to set it up")]
    NotConfigured,

    /// The platform has no configuration directory.
    #[error("cannot determine a configuration directory - pass --config")]
    NoConfigDir,

    /// The current user's home directory is unknown.
    #[error("cannot determine the home directory of the current user")]
    NoHomeDir,

    /// A required path was left blank.
    #[error("path cannot be empty")]
    EmptyPath,

    /// The configured root does not exist.
    #[error("repositories root does not exist: {0}")]
    RootMissing(PathBuf),

    /// The configured root exists but is a file.
    #[error("repositories root is not a directory: {0}")]
    RootNotADirectory(PathBuf),

    /// Invalid repository name.
    #[error("invalid repository name '{name}': {reason}")]
    InvalidRepoName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Invalid remote account identifier.
    #[error("invalid account '{account}': {reason}")]
    InvalidAccount {
        /// The rejected account.
        account: String,
        /// Why it was rejected.
        reason: String,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
