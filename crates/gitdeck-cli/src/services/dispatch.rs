//! Maintenance operations on an already selected repository.

use std::path::Path;

use anyhow::{Result, bail};
use gitdeck_core::template;
use gitdeck_git::{DEFAULT_REMOTE, GitOps, GitOutput, PRIMARY_BRANCH};
use serde::Serialize;
use tracing::debug;

use crate::menu::MenuChoice;
use crate::output;
use crate::prompt::Prompter;

/// Number of log entries shown by the status check.
pub const STATUS_LOG_LIMIT: usize = 5;

/// Operations offered for a selected repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Stage everything, commit, push.
    SimpleCommit,
    /// Abort rebase/merge, hard reset, force push.
    ForceResolve,
    /// Branch, recent log, working tree status.
    CheckStatus,
    /// Link a remote and push the primary branch.
    PushExisting,
}

impl MenuChoice for Operation {
    const ALL: &'static [Self] = &[
        Self::SimpleCommit,
        Self::ForceResolve,
        Self::CheckStatus,
        Self::PushExisting,
    ];
    const TITLE: &'static str = "What do you want to do?";

    fn label(self) -> &'static str {
        match self {
            Self::SimpleCommit => "Commit and push all changes",
            Self::ForceResolve => "Force resolve (discard local state, force push)",
            Self::CheckStatus => "Check status",
            Self::PushExisting => "Push to a new remote",
        }
    }
}

/// Read-only snapshot shown by the status check.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    /// Checked-out branch; empty on a detached HEAD.
    pub branch: String,
    /// One-line log entries, newest first.
    pub log: Vec<String>,
    /// `git status` output as shown to the user.
    pub status: String,
}

/// Gather branch, recent log and status for `dir`.
pub fn collect_status<G: GitOps>(git: &G, dir: &Path) -> Result<StatusReport> {
    let branch = git.current_branch(dir)?;
    let log = git.log(dir, STATUS_LOG_LIMIT)?;
    let status = git.status(dir)?;

    // A fresh repository has no commits; show that instead of git's error.
    let log = if log.success {
        log.stdout.lines().map(str::to_string).collect()
    } else {
        Vec::new()
    };

    Ok(StatusReport {
        branch: branch.stdout.trim().to_string(),
        log,
        status: status.display_text(),
    })
}

/// Print a status report for humans.
pub fn print_status(report: &StatusReport) {
    let branch = if report.branch.is_empty() {
        "(detached HEAD)"
    } else {
        report.branch.as_str()
    };
    output::info(&format!("Branch: {branch}"));

    output::heading(&format!("Last {STATUS_LOG_LIMIT} commits"));
    if report.log.is_empty() {
        output::detail("(no commits yet)");
    }
    for line in &report.log {
        output::detail(&format!("  {line}"));
    }

    output::heading("Working tree");
    output::detail(&report.status);
}

/// Service running one maintenance operation with trait-based dependencies.
pub struct DispatchService<'a, G: GitOps, P: Prompter> {
    git: &'a G,
    prompter: &'a P,
}

impl<'a, G: GitOps, P: Prompter> DispatchService<'a, G, P> {
    /// Create a new dispatch service.
    pub const fn new(git: &'a G, prompter: &'a P) -> Self {
        Self { git, prompter }
    }

    /// Show the operation menu. `None` after invalid input.
    pub fn choose(&self) -> Result<Option<Operation>> {
        Operation::pick(self.prompter, Operation::SimpleCommit)
    }

    /// Run `op` against `dir`, returning whether every step succeeded.
    pub fn execute(&self, op: Operation, dir: &Path) -> Result<bool> {
        match op {
            Operation::SimpleCommit => self.simple_commit(dir),
            Operation::ForceResolve => self.force_resolve(dir),
            Operation::CheckStatus => self.check_status(dir),
            Operation::PushExisting => self.push_existing(dir),
        }
    }

    /// Show the result of one git step; failures are reported, not raised.
    fn step(label: &str, out: &GitOutput) -> bool {
        let text = out.display_text();
        if out.success {
            output::success(label);
            if !text.is_empty() {
                output::detail(&text);
            }
        } else {
            output::warn(&format!("{label} failed"));
            if !text.is_empty() {
                output::detail(&text);
            }
        }
        out.success
    }

    /// Stage all changes, commit with the given (or an automatic) message, push.
    ///
    /// Every command runs even if an earlier one fails.
    pub fn simple_commit(&self, dir: &Path) -> Result<bool> {
        let status = self.git.status(dir)?;
        output::heading("Working tree");
        output::detail(&status.display_text());

        let input = self
            .prompter
            .input("Commit message (Enter for automatic):", None)?;
        let message = if input.trim().is_empty() {
            template::auto_commit_message(&template::now_timestamp())
        } else {
            input.trim().to_string()
        };

        let staged = Self::step("Staged changes", &self.git.add_all(dir)?);
        let committed = Self::step(
            &format!("Committed \"{message}\""),
            &self.git.commit(dir, &message)?,
        );
        let pushed = Self::step("Pushed", &self.git.push(dir)?);

        Ok(staged && committed && pushed)
    }

    /// Discard in-progress rebase/merge and local changes, then force push.
    pub fn force_resolve(&self, dir: &Path) -> Result<bool> {
        output::warn("Discarding local changes and overwriting the remote branch");

        // Nothing to abort is the common case.
        for (name, out) in [
            ("rebase --abort", self.git.rebase_abort(dir)?),
            ("merge --abort", self.git.merge_abort(dir)?),
        ] {
            if !out.success {
                debug!(command = name, stderr = %out.stderr.trim(), "ignored abort failure");
            }
        }

        let reset = Self::step("Reset to last commit", &self.git.reset_hard(dir)?);
        let pushed = Self::step("Force pushed", &self.git.force_push(dir)?);
        Ok(reset && pushed)
    }

    /// Show branch, recent log and working tree status.
    pub fn check_status(&self, dir: &Path) -> Result<bool> {
        let report = collect_status(self.git, dir)?;
        print_status(&report);
        Ok(true)
    }

    /// Link a remote given by URL and push the primary branch to it.
    pub fn push_existing(&self, dir: &Path) -> Result<bool> {
        if !self.git.is_repository(dir) {
            bail!("{} is not a git repository", dir.display());
        }

        let url = self.prompter.input("Remote URL:", None)?;
        let url = url.trim();
        if url.is_empty() {
            bail!("Remote URL cannot be empty");
        }

        let added = Self::step(
            &format!("Added remote {DEFAULT_REMOTE}"),
            &self.git.add_remote(dir, DEFAULT_REMOTE, url)?,
        );
        if !added {
            // An existing origin would receive the push instead of `url`.
            output::warn(&format!(
                "Not pushing; check `git remote -v` in {}",
                dir.display()
            ));
            return Ok(false);
        }

        let renamed = Self::step(
            &format!("Renamed branch to {PRIMARY_BRANCH}"),
            &self.git.rename_branch(dir, PRIMARY_BRANCH)?,
        );
        let pushed = Self::step(
            &format!("Pushed {PRIMARY_BRANCH} to {url}"),
            &self.git.push_upstream(dir, DEFAULT_REMOTE, PRIMARY_BRANCH)?,
        );
        Ok(renamed && pushed)
    }
}
