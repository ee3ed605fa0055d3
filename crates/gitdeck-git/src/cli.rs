//! `GitOps` implementation that shells out to the git binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};
use crate::{GitOps, GitOutput};

/// Runs git as a child process, one invocation per operation.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    /// Use `git` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable.
    #[must_use]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Find the working-copy root containing `dir`.
    ///
    /// # Errors
    /// Returns `NotARepository` if `dir` is not inside a working copy.
    pub fn workdir(&self, dir: &Path) -> Result<PathBuf> {
        let repo = git2::Repository::discover(dir)
            .map_err(|_| Error::NotARepository(dir.to_path_buf()))?;
        repo.workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::NotARepository(dir.to_path_buf()))
    }

    /// Run `git -C <dir> <args...>` and capture the result.
    fn run(&self, dir: &Path, args: &[&str]) -> Result<GitOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-C").arg(dir).args(args);

        debug!(
            target: "gitdeck::git",
            program = %self.program.display(),
            ?args,
            dir = %dir.display(),
            "exec"
        );

        let output = cmd.output().map_err(|source| Error::Spawn {
            program: self.program.clone(),
            source,
        })?;
        let output = GitOutput::from(output);

        debug!(target: "gitdeck::git", success = output.success, "exit");
        Ok(output)
    }
}

impl GitOps for GitCli {
    fn is_repository(&self, dir: &Path) -> bool {
        self.workdir(dir).is_ok()
    }

    fn current_branch(&self, dir: &Path) -> Result<GitOutput> {
        self.run(dir, &["branch", "--show-current"])
    }

    fn status(&self, dir: &Path) -> Result<GitOutput> {
        self.run(dir, &["status"])
    }

    fn log(&self, dir: &Path, limit: usize) -> Result<GitOutput> {
        let limit = format!("-{limit}");
        self.run(dir, &["log", "--oneline", &limit])
    }

    fn init(&self, dir: &Path) -> Result<GitOutput> {
        self.run(dir, &["init"])
    }

    fn add(&self, dir: &Path, pathspec: &str) -> Result<GitOutput> {
        self.run(dir, &["add", pathspec])
    }

    fn add_all(&self, dir: &Path) -> Result<GitOutput> {
        self.run(dir, &["add", "-A"])
    }

    fn commit(&self, dir: &Path, message: &str) -> Result<GitOutput> {
        self.run(dir, &["commit", "-m", message])
    }

    fn rename_branch(&self, dir: &Path, name: &str) -> Result<GitOutput> {
        self.run(dir, &["branch", "-M", name])
    }

    fn rebase_abort(&self, dir: &Path) -> Result<GitOutput> {
        self.run(dir, &["rebase", "--abort"])
    }

    fn merge_abort(&self, dir: &Path) -> Result<GitOutput> {
        self.run(dir, &["merge", "--abort"])
    }

    fn reset_hard(&self, dir: &Path) -> Result<GitOutput> {
        self.run(dir, &["reset", "--hard", "HEAD"])
    }

    fn add_remote(&self, dir: &Path, name: &str, url: &str) -> Result<GitOutput> {
        self.run(dir, &["remote", "add", name, url])
    }

    fn push(&self, dir: &Path) -> Result<GitOutput> {
        self.run(dir, &["push"])
    }

    fn force_push(&self, dir: &Path) -> Result<GitOutput> {
        self.run(dir, &["push", "--force"])
    }

    fn push_upstream(&self, dir: &Path, remote: &str, branch: &str) -> Result<GitOutput> {
        self.run(dir, &["push", "-u", remote, branch])
    }
}
