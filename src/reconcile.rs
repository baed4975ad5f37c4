//! Reconciliation: merge recorded state with filesystem/git truth
//! (`spec.md` §4.5). Silent — no user-facing output — and idempotent.
//!
//! No teacher equivalent; worktrunk treats `git worktree list --porcelain`
//! as the only source of truth and never reconciles a parallel state
//! document. The enumeration step below is grounded on the teacher's own
//! `list_worktrees`/porcelain-parsing idiom
//! (`src/git/repository/worktrees.rs`), adapted from "parse git's worktree
//! list" to "list slot directories directly", since slots are always
//! immediate children of `container_root` and don't need porcelain parsing.

use chrono::Utc;

use crate::error::Error;
use crate::git::GitFacade;
use crate::path::ContainerPaths;
use crate::state::{Slot, State};

/// Enumerate immediate subdirectories of `container_root`, excluding `.wt`.
fn list_slot_directories(paths: &ContainerPaths) -> Result<Vec<String>, Error> {
    let mut names = Vec::new();
    let entries = std::fs::read_dir(&paths.container_root)
        .map_err(|e| Error::io(&paths.container_root, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&paths.container_root, e))?;
        if !entry.file_type().map_err(|e| Error::io(&paths.container_root, e))?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == ".wt" {
            continue;
        }
        names.push(name);
    }
    Ok(names)
}

/// Merge `state` with what's actually on disk, per `spec.md` §4.5, and
/// persist the result before returning it.
pub fn reconcile(
    paths: &ContainerPaths,
    git: &dyn GitFacade,
    mut state: State,
) -> Result<State, Error> {
    let on_disk = list_slot_directories(paths)?;

    for slot_name in &on_disk {
        let slot_path = paths.slot_path(slot_name);
        let actual_branch = git.current_branch(&slot_path)?;

        match state.slots.get_mut(slot_name) {
            Some(slot) => {
                slot.branch = actual_branch;
            }
            None => {
                state.slots.insert(
                    slot_name.clone(),
                    Slot {
                        branch: actual_branch,
                        last_used_at: chrono::DateTime::<Utc>::UNIX_EPOCH,
                        pinned: false,
                    },
                );
            }
        }
    }

    state.slots.retain(|name, _| on_disk.contains(name));

    state.write(&paths.control_dir)?;
    Ok(state)
}
