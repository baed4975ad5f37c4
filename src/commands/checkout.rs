use slotwt::git::CliGit;
use slotwt::styling::{eprintln, println, warning_message};

use crate::cli::current_dir;

pub fn handle_checkout(branch: &str, no_restore: bool) -> anyhow::Result<()> {
    let outcome = slotwt::engine::checkout(&current_dir(), &CliGit, branch, no_restore)?;

    println!("wt: checked out {branch} in slot {}", outcome.slot_name);
    if let Some(warning) = outcome.stash_restore_warning {
        eprintln!("{}", warning_message(warning));
    }
    Ok(())
}
