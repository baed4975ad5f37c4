//! Command-line surface (`spec.md` §6). A thin `clap` derive wrapper;
//! everything that matters lives in the library modules under `src/`.
//!
//! Grounded on the teacher's `Cli`/`Commands` derive shape (`src/cli/mod.rs`):
//! a top-level struct with global flags, an enum of subcommands, aliases via
//! `#[command(alias = "...")]`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use slotwt::shell::Shell;

#[derive(Parser, Debug)]
#[command(name = "wt", version, about = "A fixed-size pool of git worktree slots")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a container: `.wt/`, a shared repo, and `slot_count` slots.
    Init {
        /// Clone URL. Omit to adopt the repository containing the current
        /// directory.
        url: Option<String>,
        /// Number of slots to allocate.
        #[arg(long, default_value_t = 4)]
        slots: usize,
    },

    /// Check out `branch` into a slot, evicting the LRU slot if needed.
    #[command(alias = "co")]
    Checkout {
        branch: String,
        /// Leave any stashed work for `branch` in the archive instead of
        /// reapplying it.
        #[arg(long)]
        no_restore: bool,
    },

    /// Mark a slot as ineligible for LRU eviction.
    Pin {
        /// Defaults to the slot containing the current directory.
        slot: Option<String>,
    },

    /// Clear a slot's pin.
    Unpin {
        /// Defaults to the slot containing the current directory.
        slot: Option<String>,
    },

    /// Navigate to the most-recently-used occupied slot.
    #[command(alias = "-")]
    Resume,

    /// Emit the shell integration snippet for `shell`.
    ShellInit { shell: Shell },
}

/// Where to start container discovery from, when a command needs one.
pub fn current_dir() -> PathBuf {
    std::env::current_dir().expect("current directory must be readable")
}
