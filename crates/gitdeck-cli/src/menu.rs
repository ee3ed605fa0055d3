//! Numbered menus and choice parsing.
//!
//! Options are shown 1-indexed. [`parse_choice`] turns one line of input into
//! an index; it never loops, so callers decide whether to re-prompt or abort.
//! [`MenuChoice`] ties a closed enum to its menu so services match on variants
//! instead of numbers.

use std::num::IntErrorKind;

use anyhow::Result;
use colored::Colorize;

use crate::output;
use crate::prompt::Prompter;

/// Why a line of input is not a valid menu choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceError {
    /// Input was not a whole number.
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// Number outside `1..=max`, including numbers too large to represent.
    #[error("{choice} is not between 1 and {max}")]
    OutOfRange {
        /// The number entered, as typed.
        choice: String,
        /// Highest valid option.
        max: usize,
    },
}

/// Parse a 1-based menu choice.
///
/// Blank input (including whitespace only) yields `default`.
pub fn parse_choice(input: &str, default: usize, max: usize) -> Result<usize, ChoiceError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }

    let out_of_range = || ChoiceError::OutOfRange {
        choice: input.to_string(),
        max,
    };

    match input.parse::<usize>() {
        Ok(choice) if (1..=max).contains(&choice) => Ok(choice),
        Ok(_) => Err(out_of_range()),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(out_of_range()),
        Err(_) => Err(ChoiceError::NotANumber(input.to_string())),
    }
}

/// An ordered list of labels shown under a title.
#[derive(Debug, Clone)]
pub struct Menu {
    title: String,
    options: Vec<String>,
}

impl Menu {
    /// Create a menu.
    pub fn new(title: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            title: title.into(),
            options,
        }
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Render the title and the 1-indexed options.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.options.len() + 1);
        lines.push(self.title.bold().to_string());
        for (i, option) in self.options.iter().enumerate() {
            lines.push(format!("  {}) {option}", (i + 1).to_string().cyan()));
        }
        lines.join("\n")
    }

    /// Show the menu and read one choice.
    ///
    /// Returns the 0-based index, or `None` after reporting invalid input.
    pub fn select<P: Prompter>(&self, prompter: &P, default: usize) -> Result<Option<usize>> {
        prompter.show(&self.render());
        let message = format!("Select [1-{}] (default {default}):", self.len());
        let line = prompter.input(&message, None)?;

        match parse_choice(&line, default, self.len()) {
            Ok(choice) => Ok(Some(choice - 1)),
            Err(e) => {
                output::warn(&format!("Invalid selection: {e}"));
                Ok(None)
            }
        }
    }
}

/// A closed set of menu entries.
pub trait MenuChoice: Copy + PartialEq + 'static {
    /// Every entry, in display order.
    const ALL: &'static [Self];

    /// Title shown above the options.
    const TITLE: &'static str;

    /// Label shown for this entry.
    fn label(self) -> &'static str;

    /// Build the menu for this set.
    #[must_use]
    fn menu() -> Menu {
        Menu::new(
            Self::TITLE,
            Self::ALL.iter().map(|c| c.label().to_string()).collect(),
        )
    }

    /// Show the menu and resolve the answer to an entry.
    ///
    /// `default` is the entry chosen on blank input. Returns `None` after
    /// reporting invalid input.
    fn pick<P: Prompter>(prompter: &P, default: Self) -> Result<Option<Self>> {
        let position = Self::ALL.iter().position(|c| *c == default).unwrap_or(0);
        let index = Self::menu().select(prompter, position + 1)?;
        Ok(index.and_then(|i| Self::ALL.get(i).copied()))
    }
}
