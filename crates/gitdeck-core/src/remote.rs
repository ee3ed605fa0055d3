//! Remote URLs for freshly created repositories.

use std::fmt;

use crate::error::Error;
use crate::repo_name::RepoName;

/// Host new repositories are linked to.
pub const GITHUB_HOST: &str = "github.com";

const MAX_ACCOUNT_LEN: usize = 39;

/// An HTTPS clone URL on [`GITHUB_HOST`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl(String);

impl RemoteUrl {
    /// Build `https://github.com/<account>/<name>.git`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidAccount`] if the account is not a valid
    /// GitHub user or organization name, and [`Error::InvalidRepoName`] if
    /// the name contains whitespace.
    pub fn github(account: &str, name: &RepoName) -> Result<Self, Error> {
        let account = account.trim();
        validate_account(account)?;
        if name.as_str().contains(char::is_whitespace) {
            return Err(Error::InvalidRepoName {
                name: name.to_string(),
                reason: "whitespace is not allowed in a remote URL".to_string(),
            });
        }
        Ok(Self(format!("https://{GITHUB_HOST}/{account}/{name}.git")))
    }

    /// Get the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn validate_account(account: &str) -> Result<(), Error> {
    let reason = if account.is_empty() {
        Some("account cannot be empty")
    } else if account.len() > MAX_ACCOUNT_LEN {
        Some("account is longer than 39 characters")
    } else if !account.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        Some("only letters, digits and '-' are allowed")
    } else if account.starts_with('-') || account.ends_with('-') {
        Some("account cannot start or end with '-'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidAccount {
            account: account.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_github_url() {
        let name = RepoName::new("demo").unwrap();
        let url = RemoteUrl::github("octocat", &name).unwrap();
        assert_eq!(url.as_str(), "https://github.com/octocat/demo.git");
    }

    #[test]
    fn test_account_is_trimmed() {
        let name = RepoName::new("demo").unwrap();
        let url = RemoteUrl::github("  octo-cat ", &name).unwrap();
        assert_eq!(url.to_string(), "https://github.com/octo-cat/demo.git");
    }

    #[test]
    fn test_name_with_space_has_no_url() {
        let name = RepoName::new("Project 2").unwrap();
        let err = RemoteUrl::github("octocat", &name).unwrap_err();
        assert!(matches!(err, Error::InvalidRepoName { .. }));
    }

    #[test]
    fn test_invalid_accounts() {
        let name = RepoName::new("demo").unwrap();
        let long = "a".repeat(40);
        for account in ["", "-octo", "octo-", "oc/to", "oc to", long.as_str()] {
            assert!(
                RemoteUrl::github(account, &name).is_err(),
                "{account:?} should be rejected"
            );
        }
    }
}
