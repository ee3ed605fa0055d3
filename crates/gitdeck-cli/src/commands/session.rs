//! `gitdeck` / `gitdeck run` - the interactive session.

use std::io::IsTerminal;

use anyhow::{Context as _, Result, bail};
use gitdeck_core::config::default_root;

use super::Context;
use crate::output;
use crate::prompt::ConsolePrompter;
use crate::services::{Session, SessionEnd};

/// Run the session loop until the user stops.
pub fn run(ctx: &Context) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        bail!("The interactive session needs a terminal - try `gitdeck scan` or `gitdeck status`");
    }

    let cwd = std::env::current_dir().context("Cannot determine the current directory")?;
    let prompter = ConsolePrompter;
    let session = Session::new(&ctx.config, &ctx.git, &prompter, cwd, default_root().ok());

    match session.run()? {
        SessionEnd::Declined => {
            output::info("Bye");
            Ok(())
        }
        SessionEnd::Reset => Ok(()),
        SessionEnd::Aborted => bail!("Repositories root is unavailable"),
    }
}
