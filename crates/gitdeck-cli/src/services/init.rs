//! Creating a new repository under the repositories root.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use gitdeck_core::template::{self, INITIAL_COMMIT_MESSAGE, README_FILE};
use gitdeck_core::{RemoteUrl, RepoName};
use gitdeck_git::{DEFAULT_REMOTE, GitOps, PRIMARY_BRANCH};

use crate::output;
use crate::prompt::Prompter;
use crate::services::config::absolute_path;

/// Result of creating a repository.
#[derive(Debug)]
pub struct InitOutcome {
    /// Where the repository was created.
    pub path: PathBuf,
    /// Remote linked to the repository, if any.
    pub remote: Option<RemoteUrl>,
    /// Whether the first push succeeded.
    pub pushed: bool,
}

impl InitOutcome {
    /// Local bootstrap always succeeded; a linked remote must also have been pushed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.remote.is_none() || self.pushed
    }
}

/// Service for bootstrapping a new repository with trait-based dependencies.
pub struct InitService<'a, G: GitOps, P: Prompter> {
    git: &'a G,
    prompter: &'a P,
}

impl<'a, G: GitOps, P: Prompter> InitService<'a, G, P> {
    /// Create a new init service.
    pub const fn new(git: &'a G, prompter: &'a P) -> Self {
        Self { git, prompter }
    }

    /// Ask for a name and location, create the repository, and optionally
    /// link and push it to a remote.
    ///
    /// This will:
    /// 1. Create the directory
    /// 2. `git init`, write and commit the README, rename the branch to `main`
    /// 3. If an account is given, add `origin` and push with upstream tracking
    ///
    /// Any failure in steps 1-2 stops the remaining steps. An existing
    /// repository or a non-empty directory is refused before anything is
    /// written.
    pub fn run(&self, root: &Path) -> Result<InitOutcome> {
        let raw = self.prompter.input("New repository name:", None)?;
        let name = RepoName::new(&raw)?;

        let default_path = root.join(name.as_str());
        let custom = self.prompter.input(
            &format!("Path (Enter for {}):", default_path.display()),
            None,
        )?;
        let path = if custom.trim().is_empty() {
            default_path
        } else {
            absolute_path(&custom)?
        };

        ensure_fresh_target(&path)?;

        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        self.bootstrap(&path, &name)?;
        output::success(&format!(
            "Created repository {} on branch {PRIMARY_BRANCH}",
            output::path(&path)
        ));

        let Some(remote) = self.ask_remote(&name)? else {
            return Ok(InitOutcome {
                path,
                remote: None,
                pushed: false,
            });
        };

        let pushed = self.link_remote(&path, &remote)?;
        Ok(InitOutcome {
            path,
            remote: Some(remote),
            pushed,
        })
    }

    /// Init, first commit, primary branch.
    fn bootstrap(&self, path: &Path, name: &RepoName) -> Result<()> {
        self.git.init(path)?.into_result("init")?;

        let readme = template::readme(name.as_str(), &template::now_timestamp());
        fs::write(path.join(README_FILE), readme)
            .with_context(|| format!("Failed to write {README_FILE}"))?;

        self.git
            .add(path, README_FILE)?
            .into_result(&format!("add {README_FILE}"))?;
        self.git
            .commit(path, INITIAL_COMMIT_MESSAGE)?
            .into_result("commit")?;
        self.git
            .rename_branch(path, PRIMARY_BRANCH)?
            .into_result(&format!("branch -M {PRIMARY_BRANCH}"))?;
        Ok(())
    }

    /// Ask for an account; blank skips remote setup.
    fn ask_remote(&self, name: &RepoName) -> Result<Option<RemoteUrl>> {
        let account = self
            .prompter
            .input("GitHub username (Enter to skip):", None)?;
        if account.trim().is_empty() {
            output::info("Skipping remote setup");
            return Ok(None);
        }

        match RemoteUrl::github(&account, name) {
            Ok(url) => Ok(Some(url)),
            Err(e) => {
                output::warn(&format!("{e}; skipping remote setup"));
                Ok(None)
            }
        }
    }

    /// Register `origin` and push `main` with upstream tracking.
    fn link_remote(&self, path: &Path, remote: &RemoteUrl) -> Result<bool> {
        output::info(&format!(
            "Create an empty repository at {remote} (no README, no license) before continuing"
        ));
        self.prompter
            .acknowledge("Press Enter once the remote repository exists")?;

        let added = self.git.add_remote(path, DEFAULT_REMOTE, remote.as_str())?;
        if !added.success {
            output::warn("Failed to add remote; skipping push");
            output::detail(&added.display_text());
            return Ok(false);
        }

        let pushed = self.git.push_upstream(path, DEFAULT_REMOTE, PRIMARY_BRANCH)?;
        if pushed.success {
            output::success(&format!("Pushed {PRIMARY_BRANCH} to {remote}"));
        } else {
            output::warn("Push failed");
            output::detail(&pushed.display_text());
        }
        Ok(pushed.success)
    }
}

/// Refuse targets that already hold a repository or any other files.
fn ensure_fresh_target(path: &Path) -> Result<()> {
    if path.join(gitdeck_core::locator::MARKER).exists() {
        bail!("{} already contains a git repository", path.display());
    }
    if path.is_file() {
        bail!("{} is a file", path.display());
    }
    if path.is_dir() {
        let mut entries = fs::read_dir(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if entries.next().is_some() {
            bail!("{} is not empty", path.display());
        }
    }
    Ok(())
}
