//! Generated text: timestamps, the bootstrap README and default commit messages.

use chrono::{Local, NaiveDateTime};

/// Format used wherever a timestamp is shown or written.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prefix of the message used when the user leaves the commit message blank.
pub const AUTO_COMMIT_PREFIX: &str = "Auto commit";

/// Message of the first commit in a new repository.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Name of the file written by the initializer.
pub const README_FILE: &str = "README.md";

/// Format a timestamp with [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// The current local time formatted with [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now().naive_local())
}

/// Contents of the README committed into a new repository.
#[must_use]
pub fn readme(name: &str, timestamp: &str) -> String {
    format!("# {name}\n\nCreated on {timestamp}\n")
}

/// Commit message used when none was given.
#[must_use]
pub fn auto_commit_message(timestamp: &str) -> String {
    format!("{AUTO_COMMIT_PREFIX} {timestamp}")
}
