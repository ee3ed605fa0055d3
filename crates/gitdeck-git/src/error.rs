//! Error types for gitdeck-git.

use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to git.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The git binary could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that was executed.
        program: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// git ran but exited with a non-zero status.
    #[error("`git {command}` failed: {message}")]
    CommandFailed {
        /// Subcommand and arguments, space separated.
        command: String,
        /// Trimmed stderr (or stdout when stderr is empty).
        message: String,
    },

    /// Not inside a git repository.
    #[error("not a git repository: {0}")]
    NotARepository(PathBuf),
}
