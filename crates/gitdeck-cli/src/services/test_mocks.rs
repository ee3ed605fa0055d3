//! Mock implementations for testing services.
//!
//! These mocks implement the traits from gitdeck-git, gitdeck-core and the
//! prompt module so service logic can be tested without a terminal or git.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use gitdeck_core::{ConfigStore, Result as CoreResult};
use gitdeck_git::{GitOps, GitOutput, Result as GitResult};

use crate::prompt::{PromptError, Prompter};

/// Mock implementation of `GitOps` that records every call.
///
/// Calls are recorded as `"<op> <args>"`, e.g. `"commit Initial commit"`.
pub struct MockGitOps {
    pub calls: RefCell<Vec<String>>,
    pub failing: RefCell<HashSet<&'static str>>,
    pub outputs: RefCell<HashMap<&'static str, String>>,
    pub is_repository: RefCell<bool>,
}

impl Default for MockGitOps {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGitOps {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failing: RefCell::new(HashSet::new()),
            outputs: RefCell::new(HashMap::new()),
            is_repository: RefCell::new(true),
        }
    }

    /// Make `op` exit non-zero.
    pub fn with_failure(self, op: &'static str) -> Self {
        self.failing.borrow_mut().insert(op);
        self
    }

    /// Set the stdout `op` produces.
    pub fn with_output(self, op: &'static str, stdout: &str) -> Self {
        self.outputs.borrow_mut().insert(op, stdout.to_string());
        self
    }

    pub fn with_repository(self, is_repo: bool) -> Self {
        *self.is_repository.borrow_mut() = is_repo;
        self
    }

    /// Recorded calls, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Just the operation names, in order.
    pub fn ops(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| c.split(' ').next().unwrap_or_default().to_string())
            .collect()
    }

    fn record(&self, op: &'static str, args: &str) -> GitResult<GitOutput> {
        let call = if args.is_empty() {
            op.to_string()
        } else {
            format!("{op} {args}")
        };
        self.calls.borrow_mut().push(call);

        if self.failing.borrow().contains(op) {
            return Ok(GitOutput::failed(format!("fatal: {op} failed")));
        }
        let stdout = self.outputs.borrow().get(op).cloned().unwrap_or_default();
        Ok(GitOutput::ok(stdout))
    }
}

impl GitOps for MockGitOps {
    fn is_repository(&self, _dir: &Path) -> bool {
        *self.is_repository.borrow()
    }

    fn current_branch(&self, _dir: &Path) -> GitResult<GitOutput> {
        self.record("current_branch", "")
    }

    fn status(&self, _dir: &Path) -> GitResult<GitOutput> {
        self.record("status", "")
    }

    fn log(&self, _dir: &Path, limit: usize) -> GitResult<GitOutput> {
        self.record("log", &limit.to_string())
    }

    fn init(&self, _dir: &Path) -> GitResult<GitOutput> {
        self.record("init", "")
    }

    fn add(&self, _dir: &Path, pathspec: &str) -> GitResult<GitOutput> {
        self.record("add", pathspec)
    }

    fn add_all(&self, _dir: &Path) -> GitResult<GitOutput> {
        self.record("add_all", "")
    }

    fn commit(&self, _dir: &Path, message: &str) -> GitResult<GitOutput> {
        self.record("commit", message)
    }

    fn rename_branch(&self, _dir: &Path, name: &str) -> GitResult<GitOutput> {
        self.record("rename_branch", name)
    }

    fn rebase_abort(&self, _dir: &Path) -> GitResult<GitOutput> {
        self.record("rebase_abort", "")
    }

    fn merge_abort(&self, _dir: &Path) -> GitResult<GitOutput> {
        self.record("merge_abort", "")
    }

    fn reset_hard(&self, _dir: &Path) -> GitResult<GitOutput> {
        self.record("reset_hard", "")
    }

    fn add_remote(&self, _dir: &Path, name: &str, url: &str) -> GitResult<GitOutput> {
        self.record("add_remote", &format!("{name} {url}"))
    }

    fn push(&self, _dir: &Path) -> GitResult<GitOutput> {
        self.record("push", "")
    }

    fn force_push(&self, _dir: &Path) -> GitResult<GitOutput> {
        self.record("force_push", "")
    }

    fn push_upstream(&self, _dir: &Path, remote: &str, branch: &str) -> GitResult<GitOutput> {
        self.record("push_upstream", &format!("{remote} {branch}"))
    }
}

/// Mock implementation of `ConfigStore` for testing.
pub struct MockConfigStore {
    pub path: PathBuf,
    pub root: RefCell<Option<PathBuf>>,
    pub saves: RefCell<usize>,
    pub resets: RefCell<usize>,
}

impl Default for MockConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConfigStore {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("/mock/config/root"),
            root: RefCell::new(None),
            saves: RefCell::new(0),
            resets: RefCell::new(0),
        }
    }

    pub fn with_root(self, root: impl Into<PathBuf>) -> Self {
        *self.root.borrow_mut() = Some(root.into());
        self
    }

    pub fn stored(&self) -> Option<PathBuf> {
        self.root.borrow().clone()
    }
}

impl ConfigStore for MockConfigStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> CoreResult<Option<PathBuf>> {
        Ok(self.root.borrow().clone())
    }

    fn save(&self, root: &Path) -> CoreResult<()> {
        *self.root.borrow_mut() = Some(root.to_path_buf());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn reset(&self) -> CoreResult<bool> {
        *self.resets.borrow_mut() += 1;
        Ok(self.root.borrow_mut().take().is_some())
    }
}

/// `Prompter` that replays canned answers.
///
/// Every `input`, `confirm` and `acknowledge` consumes one answer. Running out
/// of answers behaves like the user pressing Esc.
pub struct ScriptedPrompter {
    pub answers: RefCell<VecDeque<String>>,
    pub questions: RefCell<Vec<String>>,
    pub shown: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            questions: RefCell::new(Vec::new()),
            shown: RefCell::new(Vec::new()),
        }
    }

    pub fn shown(&self) -> Vec<String> {
        self.shown.borrow().clone()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, message: &str) -> anyhow::Result<String> {
        self.questions.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| PromptError::Cancelled.into())
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, message: &str, default: Option<&str>) -> anyhow::Result<String> {
        let answer = self.next(message)?;
        match default {
            Some(default) if answer.trim().is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn confirm(&self, message: &str, default: bool) -> anyhow::Result<bool> {
        let answer = self.next(message)?;
        Ok(match answer.trim() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        })
    }

    fn acknowledge(&self, message: &str) -> anyhow::Result<()> {
        self.next(message).map(|_| ())
    }

    fn show(&self, text: &str) {
        self.shown.borrow_mut().push(text.to_string());
    }
}
