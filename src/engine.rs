//! The slot engine: `checkout`, the core algorithm of `spec.md` §4.7.
//!
//! No direct teacher equivalent — worktrunk's closest analogue is its
//! `switch`/`new` command pair (one worktree per branch, created on demand,
//! never evicted), whereas this engine manages a *fixed-size* pool with LRU
//! eviction. Structure is grounded on the teacher's command-handler shape
//! (`src/commands/handle_switch.rs`, `src/commands/worktree/switch.rs`):
//! acquire what's needed, call into the git facade, update persisted state,
//! report one outcome. Built fresh from the
//! spec's own nine-step algorithm since nothing in the pack models a bounded
//! eviction pool.

use chrono::Utc;

use crate::error::Error;
use crate::git::GitFacade;
use crate::lock::ContainerLock;
use crate::path::ContainerPaths;
use crate::reconcile::reconcile;
use crate::shell::write_nav;
use crate::stash::StashArchive;
use crate::state::{Slot, State};

/// Outcome of a successful [`checkout`], for the CLI layer to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOutcome {
    pub slot_name: String,
    /// Set when a stash existed for `branch` but restoring it failed
    /// (`spec.md` §7: non-fatal — the checkout itself still succeeds).
    pub stash_restore_warning: Option<String>,
}

/// Check out `branch` into the container rooted at (or reached via an
/// ancestor of) `start`, per `spec.md` §4.7. All mutation happens inside the
/// container lock.
pub fn checkout(
    start: &std::path::Path,
    git: &dyn GitFacade,
    branch: &str,
    no_restore: bool,
) -> Result<CheckoutOutcome, Error> {
    let paths = ContainerPaths::discover(start)?;
    let _guard = ContainerLock::acquire(&paths.control_dir)?;

    let state = State::read(&paths.control_dir)?;
    let mut state = reconcile(&paths, git, state)?;
    let now = Utc::now();

    // Step 3: already-checked-out branch short-circuits everything else,
    // including pin status (spec.md §4.7 edge case: pinning never blocks
    // reuse of a slot the caller is explicitly asking for).
    if let Some((slot_name, slot)) = state
        .slots
        .iter_mut()
        .find(|(_, slot)| slot.branch.as_deref() == Some(branch))
    {
        slot.last_used_at = now;
        let slot_name = slot_name.clone();
        state.write(&paths.control_dir)?;
        let slot_path = paths.slot_path(&slot_name);
        write_nav(&slot_path)?;
        return Ok(CheckoutOutcome {
            slot_name,
            stash_restore_warning: None,
        });
    }

    let target_slot = select_target_slot(&state)?;
    let slot_path = paths.slot_path(&target_slot);

    let occupied_branch = state.slots.get(&target_slot).and_then(|s| s.branch.clone());
    if let Some(outgoing_branch) = occupied_branch {
        evict(git, &paths, &slot_path, &outgoing_branch)?;

        // Step 5's eviction deletes the slot directory outright (so a real
        // `git worktree remove` has nothing stale to complain about). Commit
        // the slot as vacant right away, before step 6a's fallible branch
        // check: if that check fails, the early return below must still
        // leave the slot "vacant in state" per spec.md §4.7's edge case,
        // not pointing at a branch whose worktree no longer exists. Leaving
        // this until after a successful worktree_add would mean an
        // `UnknownBranch` failure returns with the on-disk state still
        // claiming the evicted branch occupies a directory that's gone —
        // and the next reconcile, finding no directory, would drop the slot
        // from the pool entirely instead of marking it vacant.
        std::fs::create_dir_all(&slot_path).map_err(|e| Error::io(&slot_path, e))?;
        if let Some(slot) = state.slots.get_mut(&target_slot) {
            slot.branch = None;
        }
        state.write(&paths.control_dir)?;
    }

    if !git.branch_exists(&paths.repo_dir, branch)? {
        return Err(Error::UnknownBranch(branch.to_string()));
    }
    git.worktree_add(&paths.repo_dir, &slot_path, branch)?;

    let stash_restore_warning = if no_restore {
        None
    } else {
        restore_stash(git, &paths, &slot_path, branch)?
    };

    let pinned = state.slots.get(&target_slot).map(|s| s.pinned).unwrap_or(false);
    state.slots.insert(
        target_slot.clone(),
        Slot {
            branch: Some(branch.to_string()),
            last_used_at: now,
            pinned,
        },
    );
    state.write(&paths.control_dir)?;

    write_nav(&slot_path)?;

    Ok(CheckoutOutcome {
        slot_name: target_slot,
        stash_restore_warning,
    })
}

/// Step 4: prefer a vacant slot, else the unpinned slot with the smallest
/// `last_used_at` (ties broken by slot-name order, since [`indexmap::IndexMap`]
/// preserves insertion order and slot names are inserted in sorted order by
/// `init`). Fails `AllSlotsPinned` if every slot is occupied and pinned.
fn select_target_slot(state: &State) -> Result<String, Error> {
    if let Some(vacant) = state
        .slots
        .iter()
        .find(|(_, slot)| slot.is_vacant())
        .map(|(name, _)| name.clone())
    {
        return Ok(vacant);
    }

    state
        .slots
        .iter()
        .filter(|(_, slot)| !slot.pinned)
        .min_by(|(name_a, slot_a), (name_b, slot_b)| {
            slot_a
                .last_used_at
                .cmp(&slot_b.last_used_at)
                .then_with(|| name_a.cmp(name_b))
        })
        .map(|(name, _)| name.clone())
        .ok_or(Error::AllSlotsPinned)
}

/// Step 5: capture dirty work, archive the stash handle, then remove the
/// worktree registration and delete the slot directory.
fn evict(
    git: &dyn GitFacade,
    paths: &ContainerPaths,
    slot_path: &std::path::Path,
    outgoing_branch: &str,
) -> Result<(), Error> {
    if let Some(handle) = git.stash_create(slot_path)? {
        let mut archive = StashArchive::read(&paths.control_dir)?;
        archive.insert(outgoing_branch, handle, Utc::now());
        archive.write(&paths.control_dir)?;
    }

    git.worktree_remove(&paths.repo_dir, slot_path)?;
    match std::fs::remove_dir_all(slot_path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(slot_path, e)),
    }
    Ok(())
}

/// Step 7: restore a stash for `branch` if one is archived. Failure is
/// non-fatal — the stash stays archived and the caller reports a warning
/// (`spec.md` §7).
fn restore_stash(
    git: &dyn GitFacade,
    paths: &ContainerPaths,
    slot_path: &std::path::Path,
    branch: &str,
) -> Result<Option<String>, Error> {
    let mut archive = StashArchive::read(&paths.control_dir)?;
    let Some(entry) = archive.take(branch) else {
        return Ok(None);
    };

    match git.stash_apply(slot_path, &entry.handle) {
        Ok(()) => {
            archive.write(&paths.control_dir)?;
            Ok(None)
        }
        // Persisting nothing here leaves the on-disk archive with the
        // entry still in it, satisfying "the stash remains in the
        // archive" (spec.md §7) even though `take` already removed it
        // from this in-memory copy.
        Err(e) => Ok(Some(
            Error::StashRestoreFailed {
                branch: branch.to_string(),
                detail: e.to_string(),
            }
            .to_string(),
        )),
    }
}
