use slotwt::git::CliGit;
use slotwt::ops::ResumeOutcome;
use slotwt::styling::println;

use crate::cli::current_dir;

pub fn handle_resume() -> anyhow::Result<()> {
    match slotwt::ops::resume(&current_dir(), &CliGit)? {
        ResumeOutcome::Navigated { slot_name } => println!("wt: resumed slot {slot_name}"),
        ResumeOutcome::AlreadyThere { slot_name } => {
            println!("wt: already in slot {slot_name}")
        }
    }
    Ok(())
}
