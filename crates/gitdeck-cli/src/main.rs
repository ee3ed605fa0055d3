//! gitdeck - a menu-driven console for everyday git chores.

use anyhow::Result;
use clap::Parser;

mod commands;
mod logging;
mod menu;
mod output;
mod prompt;
mod services;

use commands::{Cli, Commands, ConfigAction, Context};

fn main() {
    let cli = Cli::parse();

    output::set_quiet(cli.quiet);
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = Context::from_cli(&cli)?;

    match cli.command {
        None | Some(Commands::Run) => commands::session::run(&ctx),
        Some(Commands::Scan { json }) => commands::scan::run(&ctx, json),
        Some(Commands::Status { path, json }) => commands::status::run(&ctx, path.as_deref(), json),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&ctx),
            ConfigAction::Set { path } => commands::config::set(&ctx, &path),
            ConfigAction::Reset => commands::config::reset(&ctx),
        },
        Some(Commands::Completions { shell }) => commands::completions::run(shell),
    }
}
