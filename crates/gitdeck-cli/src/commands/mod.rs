//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub mod completions;
pub mod config;
pub mod scan;
pub mod session;
pub mod status;
pub mod utils;

pub use utils::Context;

/// gitdeck - a menu-driven console for everyday git chores.
///
/// Without a subcommand, starts the interactive session: pick a repository
/// under your repositories root, then commit, force resolve, check status or
/// push it.
#[derive(Debug, Parser)]
#[command(name = "gitdeck", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// File holding the repositories root
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// git executable to run
    #[arg(long, global = true, value_name = "BIN")]
    pub git: Option<PathBuf>,

    /// Only print errors and essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log every git invocation to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive session (default)
    Run,

    /// List repositories under the repositories root
    Scan {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show branch, recent commits and working tree status
    Status {
        /// Repository directory (defaults to the current directory)
        path: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change the repositories root
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the repositories root and the config file location
    Show,

    /// Set the repositories root
    Set {
        /// New repositories root
        path: String,
    },

    /// Delete the config file; the next session asks again
    Reset,
}
