//! Line-oriented user input.
//!
//! Services read input through [`Prompter`] so every interactive flow can be
//! driven by a scripted prompter in tests.

use anyhow::Result;
use inquire::{Confirm, InquireError, Text};

/// Input could not be obtained. Ends the session instead of looping.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The user pressed Esc or Ctrl-C.
    #[error("cancelled by user")]
    Cancelled,

    /// The terminal is unusable (not a TTY, closed stdin).
    #[error("cannot read input: {0}")]
    Unavailable(String),
}

/// Source of interactive input.
pub trait Prompter {
    /// Read one line. Blank input yields `default` when one is given,
    /// otherwise the empty string.
    fn input(&self, message: &str, default: Option<&str>) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;

    /// Wait until the user presses Enter.
    fn acknowledge(&self, message: &str) -> Result<()>;

    /// Show a block of text such as a rendered menu.
    fn show(&self, text: &str);
}

/// [`Prompter`] backed by `inquire` on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompter;

fn map_err(err: InquireError) -> anyhow::Error {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            PromptError::Cancelled.into()
        }
        other => PromptError::Unavailable(other.to_string()).into(),
    }
}

impl Prompter for ConsolePrompter {
    fn input(&self, message: &str, default: Option<&str>) -> Result<String> {
        let mut prompt = Text::new(message);
        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }
        prompt.prompt().map_err(map_err)
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Confirm::new(message)
            .with_default(default)
            .prompt()
            .map_err(map_err)
    }

    fn acknowledge(&self, message: &str) -> Result<()> {
        Text::new(message)
            .with_help_message("Press Enter to continue")
            .prompt()
            .map(|_| ())
            .map_err(map_err)
    }

    fn show(&self, text: &str) {
        println!("{text}");
    }
}
