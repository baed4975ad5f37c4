//! `wt`: the CLI binary over the `slotwt` library.
//!
//! Grounded on the teacher's `main.rs`: `env_logger` initialized from
//! verbosity flags, a single top-level error handler that prints one line
//! and sets the process exit code (`spec.md` §7 — "a single line on stderr
//! prefixed `wt: `, exit 1. No stack traces, no raw subprocess output.").

mod cli;
mod commands;

use clap::Parser;
use slotwt::styling::eprintln;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("wt: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Init { url, slots } => commands::handle_init(url.as_deref(), slots),
        Commands::Checkout { branch, no_restore } => commands::handle_checkout(&branch, no_restore),
        Commands::Pin { slot } => commands::handle_pin(slot.as_deref()),
        Commands::Unpin { slot } => commands::handle_unpin(slot.as_deref()),
        Commands::Resume => commands::handle_resume(),
        Commands::ShellInit { shell } => commands::handle_shell_init(shell),
    }
}
