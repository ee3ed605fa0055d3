//! Repository name validation and newtype.
//!
//! A [`RepoName`] becomes both a directory under the repositories root and
//! the last segment of a remote URL, so it must stay a single path component.

use std::fmt;

use crate::error::Error;

/// A validated name for a new repository.
///
/// # Examples
///
/// ```
/// use gitdeck_core::RepoName;
///
/// let name = RepoName::new("  demo ").unwrap();
/// assert_eq!(name.as_str(), "demo");
///
/// assert!(RepoName::new("").is_err());
/// assert!(RepoName::new("../escape").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName(String);

impl RepoName {
    /// Create a validated repository name. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRepoName`] if the name is blank or is not a
    /// single path component.
    pub fn new(name: impl AsRef<str>) -> Result<Self, Error> {
        let name = name.as_ref().trim();
        validate_repo_name(name)?;
        Ok(Self(name.to_string()))
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RepoName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn invalid(name: &str, reason: &str) -> Error {
    Error::InvalidRepoName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_repo_name(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(invalid(name, "repository name cannot be empty"));
    }

    if name == "." || name == ".." {
        return Err(invalid(name, "repository name cannot be '.' or '..'"));
    }

    if name.contains(['/', '\\']) {
        return Err(invalid(name, "repository name cannot contain path separators"));
    }

    if name.chars().any(char::is_control) {
        return Err(invalid(name, "repository name cannot contain control characters"));
    }

    Ok(())
}
