//! The interactive session loop.
//!
//! Each pass loads the configuration, validates the root, picks a repository
//! (or creates one), runs one operation and asks whether to go again.

use std::path::PathBuf;

use anyhow::Result;
use gitdeck_core::ConfigStore;
use gitdeck_git::GitOps;
use tracing::debug;

use crate::menu::MenuChoice;
use crate::output;
use crate::prompt::{PromptError, Prompter};
use crate::services::config::{ConfigService, absolute_path};
use crate::services::dispatch::DispatchService;
use crate::services::init::InitService;
use crate::services::locate::{LocateService, RootCheck};

/// Where the repository for this pass comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoSource {
    /// Pick from working copies under the root.
    ScanAndPick,
    /// Type a path.
    ManualPath,
    /// The directory gitdeck was started in.
    CurrentDirectory,
    /// Create a new repository under the root.
    CreateNew,
}

impl MenuChoice for RepoSource {
    const ALL: &'static [Self] = &[
        Self::ScanAndPick,
        Self::ManualPath,
        Self::CurrentDirectory,
        Self::CreateNew,
    ];
    const TITLE: &'static str = "Choose a repository";

    fn label(self) -> &'static str {
        match self {
            Self::ScanAndPick => "Pick from the repositories root",
            Self::ManualPath => "Enter a path",
            Self::CurrentDirectory => "Use the current directory",
            Self::CreateNew => "Create a new repository",
        }
    }
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user declined to continue.
    Declined,
    /// The configuration was reset; a restart is required.
    Reset,
    /// The user gave up on a missing repositories root.
    Aborted,
}

/// Session states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    ConfigLoading,
    RootValidating(PathBuf),
    RepoSelecting(PathBuf),
    InitNewRepo(PathBuf),
    OperationDispatch(PathBuf),
    ContinuePrompt,
    Terminate(SessionEnd),
}

/// Drives the session state machine.
pub struct Session<'a, C: ConfigStore, G: GitOps, P: Prompter> {
    store: &'a C,
    git: &'a G,
    prompter: &'a P,
    cwd: PathBuf,
    default_root: Option<PathBuf>,
}

impl<'a, C: ConfigStore, G: GitOps, P: Prompter> Session<'a, C, G, P> {
    /// Create a session.
    ///
    /// `cwd` backs the "current directory" choice; `default_root` is offered
    /// during first-run setup.
    pub const fn new(
        store: &'a C,
        git: &'a G,
        prompter: &'a P,
        cwd: PathBuf,
        default_root: Option<PathBuf>,
    ) -> Self {
        Self {
            store,
            git,
            prompter,
            cwd,
            default_root,
        }
    }

    /// Run until the user stops.
    ///
    /// Errors inside a pass are reported and lead to the continue prompt.
    /// Only a failed or cancelled prompt ends the session with an error.
    pub fn run(&self) -> Result<SessionEnd> {
        let mut stage = Stage::ConfigLoading;

        loop {
            debug!(?stage, "session");
            stage = match stage {
                Stage::Terminate(end) => return Ok(end),
                current => match self.advance(current) {
                    Ok(next) => next,
                    Err(e) if e.is::<PromptError>() => return Err(e),
                    Err(e) => {
                        output::error(&format!("{e:#}"));
                        Stage::ContinuePrompt
                    }
                },
            };
        }
    }

    /// Perform one transition.
    pub fn advance(&self, stage: Stage) -> Result<Stage> {
        let next = match stage {
            Stage::ConfigLoading => {
                let config =
                    ConfigService::new(self.store, self.prompter, self.default_root.clone());
                Stage::RootValidating(config.load_or_init()?)
            }
            Stage::RootValidating(root) => match self.locate().validate_root(&root)? {
                RootCheck::Ready => Stage::RepoSelecting(root),
                RootCheck::Reset => Stage::Terminate(SessionEnd::Reset),
                RootCheck::Abort => Stage::Terminate(SessionEnd::Aborted),
            },
            Stage::RepoSelecting(root) => self.select_repo(root)?,
            Stage::InitNewRepo(root) => {
                let outcome = InitService::new(self.git, self.prompter).run(&root)?;
                output::outcome(
                    &format!("Setup of {}", outcome.path.display()),
                    outcome.is_success(),
                );
                Stage::ContinuePrompt
            }
            Stage::OperationDispatch(dir) => {
                output::info(&format!("Repository: {}", output::path(&dir)));
                let dispatch = DispatchService::new(self.git, self.prompter);
                if let Some(op) = dispatch.choose()? {
                    let ok = dispatch.execute(op, &dir)?;
                    output::outcome(op.label(), ok);
                }
                Stage::ContinuePrompt
            }
            Stage::ContinuePrompt => {
                output::hr();
                if self.prompter.confirm("Continue?", true)? {
                    Stage::ConfigLoading
                } else {
                    Stage::Terminate(SessionEnd::Declined)
                }
            }
            Stage::Terminate(end) => Stage::Terminate(end),
        };
        Ok(next)
    }

    fn locate(&self) -> LocateService<'a, C, P> {
        LocateService::new(self.store, self.prompter)
    }

    fn select_repo(&self, root: PathBuf) -> Result<Stage> {
        let Some(source) = RepoSource::pick(self.prompter, RepoSource::ScanAndPick)? else {
            return Ok(Stage::ContinuePrompt);
        };

        let dir = match source {
            RepoSource::ScanAndPick => self.locate().scan_and_pick(&root)?,
            RepoSource::ManualPath => self.ask_manual_path()?,
            RepoSource::CurrentDirectory => Some(self.cwd.clone()),
            RepoSource::CreateNew => return Ok(Stage::InitNewRepo(root)),
        };

        Ok(dir.map_or(Stage::ContinuePrompt, Stage::OperationDispatch))
    }

    fn ask_manual_path(&self) -> Result<Option<PathBuf>> {
        let input = self.prompter.input("Repository path:", None)?;
        if input.trim().is_empty() {
            output::warn("No path entered");
            return Ok(None);
        }

        let dir = absolute_path(&input)?;
        if !dir.is_dir() {
            output::warn(&format!("{} is not a directory", output::path(&dir)));
            return Ok(None);
        }
        Ok(Some(dir))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::dispatch::Operation;
    use crate::services::test_mocks::{MockConfigStore, MockGitOps, ScriptedPrompter};
    use gitdeck_core::locator::MARKER;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn make_repo(root: &Path, name: &str) -> PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(dir.join(MARKER)).unwrap();
        dir
    }

    fn session<'a>(
        store: &'a MockConfigStore,
        git: &'a MockGitOps,
        prompter: &'a ScriptedPrompter,
        cwd: &Path,
    ) -> Session<'a, MockConfigStore, MockGitOps, ScriptedPrompter> {
        Session::new(store, git, prompter, cwd.to_path_buf(), None)
    }

    #[test]
    fn test_scan_pick_status_then_exit() {
        let temp = TempDir::new().unwrap();
        make_repo(temp.path(), "A");
        let store = MockConfigStore::new().with_root(temp.path());
        let git = MockGitOps::new();
        // source=scan, repo=1, op=status, continue=no
        let prompter = ScriptedPrompter::new(["1", "1", "3", "n"]);

        let end = session(&store, &git, &prompter, temp.path()).run().unwrap();
        assert_eq!(end, SessionEnd::Declined);
        assert_eq!(git.ops(), ["current_branch", "log", "status"]);
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_loops_until_declined() {
        let temp = TempDir::new().unwrap();
        let store = MockConfigStore::new().with_root(temp.path());
        let git = MockGitOps::new();
        // Two passes using the current directory and the status check.
        let prompter = ScriptedPrompter::new(["3", "3", "y", "3", "3", "n"]);

        let end = session(&store, &git, &prompter, temp.path()).run().unwrap();
        assert_eq!(end, SessionEnd::Declined);
        assert_eq!(git.ops().iter().filter(|op| *op == "status").count(), 2);
    }

    #[test]
    fn test_create_new_skips_dispatch() {
        let temp = TempDir::new().unwrap();
        let store = MockConfigStore::new().with_root(temp.path());
        let git = MockGitOps::new();
        // source=create, name, default path, no account, continue=no
        let prompter = ScriptedPrompter::new(["4", "demo", "", "", "n"]);

        let end = session(&store, &git, &prompter, temp.path()).run().unwrap();
        assert_eq!(end, SessionEnd::Declined);
        assert!(temp.path().join("demo").is_dir());
        assert_eq!(git.ops(), ["init", "add", "commit", "rename_branch"]);
        assert!(
            !prompter
                .shown()
                .iter()
                .any(|s| s.contains(Operation::TITLE))
        );
    }

    #[test]
    fn test_no_repositories_goes_to_continue_prompt() {
        let temp = TempDir::new().unwrap();
        let store = MockConfigStore::new().with_root(temp.path());
        let git = MockGitOps::new();
        let prompter = ScriptedPrompter::new(["1", "n"]);

        let end = session(&store, &git, &prompter, temp.path()).run().unwrap();
        assert_eq!(end, SessionEnd::Declined);
        assert!(git.calls().is_empty());
    }

    #[test]
    fn test_invalid_source_goes_to_continue_prompt() {
        let temp = TempDir::new().unwrap();
        let store = MockConfigStore::new().with_root(temp.path());
        let git = MockGitOps::new();
        let prompter = ScriptedPrompter::new(["9", "n"]);

        let end = session(&store, &git, &prompter, temp.path()).run().unwrap();
        assert_eq!(end, SessionEnd::Declined);
        assert!(git.calls().is_empty());
    }

    #[test]
    fn test_blank_manual_path_goes_to_continue_prompt() {
        let temp = TempDir::new().unwrap();
        let store = MockConfigStore::new().with_root(temp.path());
        let git = MockGitOps::new();
        let prompter = ScriptedPrompter::new(["2", "", "n"]);

        let end = session(&store, &git, &prompter, temp.path()).run().unwrap();
        assert_eq!(end, SessionEnd::Declined);
        assert!(git.calls().is_empty());
    }

    #[test]
    fn test_manual_path_dispatches() {
        let temp = TempDir::new().unwrap();
        let repo = make_repo(temp.path(), "elsewhere");
        let store = MockConfigStore::new().with_root(temp.path());
        let git = MockGitOps::new();
        let prompter = ScriptedPrompter::new(["2", repo.to_str().unwrap(), "2", "n"]);

        session(&store, &git, &prompter, temp.path()).run().unwrap();
        assert_eq!(
            git.ops(),
            ["rebase_abort", "merge_abort", "reset_hard", "force_push"]
        );
    }

    #[test]
    fn test_operation_error_is_not_fatal() {
        let temp = TempDir::new().unwrap();
        let store = MockConfigStore::new().with_root(temp.path());
        let git = MockGitOps::new().with_repository(false);
        // current dir, push existing (fails: not a repo), continue=no
        let prompter = ScriptedPrompter::new(["3", "4", "n"]);

        let end = session(&store, &git, &prompter, temp.path()).run().unwrap();
        assert_eq!(end, SessionEnd::Declined);
    }

    #[test]
    fn test_first_run_setup_then_continue() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("repos");
        fs::create_dir(&root).unwrap();
        let store = MockConfigStore::new();
        let git = MockGitOps::new();
        let prompter = ScriptedPrompter::new(["", "1", "n"]);

        let cwd = temp.path().to_path_buf();
        let end = Session::new(&store, &git, &prompter, cwd, Some(root.clone()))
            .run()
            .unwrap();
        assert_eq!(end, SessionEnd::Declined);
        assert_eq!(store.stored(), Some(root));
    }

    #[test]
    fn test_missing_root_reset_terminates() {
        let temp = TempDir::new().unwrap();
        let store = MockConfigStore::new().with_root(temp.path().join("gone"));
        let git = MockGitOps::new();
        let prompter = ScriptedPrompter::new(["2"]);

        let end = session(&store, &git, &prompter, temp.path()).run().unwrap();
        assert_eq!(end, SessionEnd::Reset);
        assert!(store.stored().is_none());
    }

    #[test]
    fn test_missing_root_exit_aborts() {
        let temp = TempDir::new().unwrap();
        let store = MockConfigStore::new().with_root(temp.path().join("gone"));
        let git = MockGitOps::new();
        let prompter = ScriptedPrompter::new(["3"]);

        let end = session(&store, &git, &prompter, temp.path()).run().unwrap();
        assert_eq!(end, SessionEnd::Aborted);
    }

    #[test]
    fn test_cancelled_prompt_ends_with_error() {
        let temp = TempDir::new().unwrap();
        let store = MockConfigStore::new().with_root(temp.path());
        let git = MockGitOps::new();
        let prompter = ScriptedPrompter::new(Vec::<String>::new());

        let err = session(&store, &git, &prompter, temp.path()).run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PromptError>(),
            Some(PromptError::Cancelled)
        ));
    }

    #[test]
    fn test_advance_continue_prompt() {
        let temp = TempDir::new().unwrap();
        let store = MockConfigStore::new();
        let git = MockGitOps::new();
        let prompter = ScriptedPrompter::new(["y", "n"]);
        let s = session(&store, &git, &prompter, temp.path());

        assert_eq!(s.advance(Stage::ContinuePrompt).unwrap(), Stage::ConfigLoading);
        assert_eq!(
            s.advance(Stage::ContinuePrompt).unwrap(),
            Stage::Terminate(SessionEnd::Declined)
        );
    }
}
