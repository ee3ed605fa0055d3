//! # gitdeck-git
//!
//! Thin layer over the `git` binary for gitdeck. Every operation takes the
//! repository directory explicitly and reports the exit status together with
//! the captured output; nothing here interprets what git prints.

mod cli;
mod error;
mod output;
mod traits;

pub use cli::GitCli;
pub use error::{Error, Result};
pub use output::GitOutput;
pub use traits::GitOps;

/// Branch name repositories are standardized onto.
pub const PRIMARY_BRANCH: &str = "main";

/// Remote name used when linking a repository.
pub const DEFAULT_REMOTE: &str = "origin";
