use slotwt::git::CliGit;
use slotwt::styling::println;

use crate::cli::current_dir;

pub fn handle_pin(slot: Option<&str>) -> anyhow::Result<()> {
    let name = slotwt::ops::pin(&current_dir(), &CliGit, slot)?;
    println!("wt: pinned slot {name}");
    Ok(())
}

pub fn handle_unpin(slot: Option<&str>) -> anyhow::Result<()> {
    let name = slotwt::ops::unpin(&current_dir(), &CliGit, slot)?;
    println!("wt: unpinned slot {name}");
    Ok(())
}
