//! Trait abstraction for git operations.
//!
//! `GitOps` lets the CLI services run against the real git binary or a
//! recording mock. Every method receives the repository directory, so no
//! operation depends on the process working directory.

use std::path::Path;

use crate::{GitOutput, Result};

/// Trait for git repository operations.
///
/// `Err` means git could not be run at all. A command that ran and failed is
/// reported as `Ok` with `success == false`; callers decide whether it matters.
#[allow(clippy::missing_errors_doc)]
pub trait GitOps {
    // === Repository Info ===

    /// Check whether `dir` is inside a git working copy.
    fn is_repository(&self, dir: &Path) -> bool;

    /// `git branch --show-current`.
    fn current_branch(&self, dir: &Path) -> Result<GitOutput>;

    /// `git status`.
    fn status(&self, dir: &Path) -> Result<GitOutput>;

    /// `git log --oneline -<limit>`.
    fn log(&self, dir: &Path, limit: usize) -> Result<GitOutput>;

    // === Local Changes ===

    /// `git init`.
    fn init(&self, dir: &Path) -> Result<GitOutput>;

    /// `git add <pathspec>`.
    fn add(&self, dir: &Path, pathspec: &str) -> Result<GitOutput>;

    /// `git add -A`.
    fn add_all(&self, dir: &Path) -> Result<GitOutput>;

    /// `git commit -m <message>`.
    fn commit(&self, dir: &Path, message: &str) -> Result<GitOutput>;

    /// `git branch -M <name>`.
    fn rename_branch(&self, dir: &Path, name: &str) -> Result<GitOutput>;

    // === Recovery ===

    /// `git rebase --abort`.
    fn rebase_abort(&self, dir: &Path) -> Result<GitOutput>;

    /// `git merge --abort`.
    fn merge_abort(&self, dir: &Path) -> Result<GitOutput>;

    /// `git reset --hard HEAD`.
    fn reset_hard(&self, dir: &Path) -> Result<GitOutput>;

    // === Remote Operations ===

    /// `git remote add <name> <url>`.
    fn add_remote(&self, dir: &Path, name: &str, url: &str) -> Result<GitOutput>;

    /// `git push`.
    fn push(&self, dir: &Path) -> Result<GitOutput>;

    /// `git push --force`.
    fn force_push(&self, dir: &Path) -> Result<GitOutput>;

    /// `git push -u <remote> <branch>`.
    fn push_upstream(&self, dir: &Path, remote: &str, branch: &str) -> Result<GitOutput>;
}
