//! Captured result of a single git invocation.

use std::process::Output;

use crate::error::{Error, Result};

/// Exit status and output of one git command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    /// Whether git exited with status 0.
    pub success: bool,
    /// Captured stdout, lossily decoded.
    pub stdout: String,
    /// Captured stderr, lossily decoded.
    pub stderr: String,
}

impl GitOutput {
    /// A successful result with the given stdout.
    #[must_use]
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed result with the given stderr.
    #[must_use]
    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Text worth showing to the user: stdout and stderr, trimmed and joined.
    #[must_use]
    pub fn display_text(&self) -> String {
        [self.stdout.trim_end(), self.stderr.trim_end()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Turn a non-zero exit into [`Error::CommandFailed`].
    ///
    /// # Errors
    /// Returns `CommandFailed` when `success` is false.
    pub fn into_result(self, command: &str) -> Result<Self> {
        if self.success {
            return Ok(self);
        }

        let message = if self.stderr.trim().is_empty() {
            self.stdout.trim().to_string()
        } else {
            self.stderr.trim().to_string()
        };

        Err(Error::CommandFailed {
            command: command.to_string(),
            message,
        })
    }
}

impl From<Output> for GitOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
