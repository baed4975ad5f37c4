//! Pin / unpin / resume (`spec.md` §4.9): thin operations over the same
//! primitives `engine.rs` uses.
//!
//! No direct teacher equivalent (worktrunk has no pinning concept); grounded
//! on the same command-handler shape as `engine.rs` — reconcile, mutate
//! under the lock, write, report one outcome.

use chrono::Utc;

use crate::error::Error;
use crate::git::GitFacade;
use crate::lock::ContainerLock;
use crate::path::ContainerPaths;
use crate::reconcile::reconcile;
use crate::shell::write_nav;
use crate::state::State;

/// Resolve an explicit slot name, or fall back to the slot `cwd` is
/// currently inside. Fails `SlotNotFound` for an explicit name that doesn't
/// exist, and `NotInContainer` for an implicit lookup outside any slot —
/// the latter reuses [`ContainerPaths::discover`]'s own error via its
/// caller, so this function assumes `cwd` is already known to be a slot.
fn resolve_slot(
    paths: &ContainerPaths,
    state: &State,
    slot: Option<&str>,
    cwd: &std::path::Path,
) -> Result<String, Error> {
    match slot {
        Some(name) => {
            if state.slots.contains_key(name) {
                Ok(name.to_string())
            } else {
                Err(Error::SlotNotFound(name.to_string()))
            }
        }
        None => paths
            .current_slot_name(cwd)
            .filter(|name| state.slots.contains_key(name))
            .ok_or_else(|| Error::SlotNotFound("<current directory>".to_string())),
    }
}

/// Set or clear `pinned` on the resolved slot, per `spec.md` §4.9.
fn set_pinned(
    start: &std::path::Path,
    git: &dyn GitFacade,
    slot: Option<&str>,
    pinned: bool,
) -> Result<String, Error> {
    let paths = ContainerPaths::discover(start)?;
    let _guard = ContainerLock::acquire(&paths.control_dir)?;

    let state = State::read(&paths.control_dir)?;
    let mut state = reconcile(&paths, git, state)?;

    let slot_name = resolve_slot(&paths, &state, slot, start)?;
    state.slots.get_mut(&slot_name).expect("resolved above").pinned = pinned;
    state.write(&paths.control_dir)?;

    Ok(slot_name)
}

pub fn pin(start: &std::path::Path, git: &dyn GitFacade, slot: Option<&str>) -> Result<String, Error> {
    set_pinned(start, git, slot, true)
}

pub fn unpin(start: &std::path::Path, git: &dyn GitFacade, slot: Option<&str>) -> Result<String, Error> {
    set_pinned(start, git, slot, false)
}

/// Outcome of [`resume`]: either navigation happened, or the caller was
/// already in the target slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeOutcome {
    Navigated { slot_name: String },
    AlreadyThere { slot_name: String },
}

/// Navigate to the most-recently-used occupied slot, per `spec.md` §4.9.
pub fn resume(start: &std::path::Path, git: &dyn GitFacade) -> Result<ResumeOutcome, Error> {
    let paths = ContainerPaths::discover(start)?;
    let _guard = ContainerLock::acquire(&paths.control_dir)?;

    let state = State::read(&paths.control_dir)?;
    let state = reconcile(&paths, git, state)?;

    let (slot_name, _) = state
        .slots
        .iter()
        .filter(|(_, slot)| !slot.is_vacant())
        .max_by(|(name_a, slot_a), (name_b, slot_b)| {
            slot_a
                .last_used_at
                .cmp(&slot_b.last_used_at)
                .then_with(|| name_a.cmp(name_b))
        })
        .ok_or(Error::NoSlotsInUse)?;
    let slot_name = slot_name.clone();

    if paths.current_slot_name(start).as_deref() == Some(slot_name.as_str()) {
        return Ok(ResumeOutcome::AlreadyThere { slot_name });
    }

    write_nav(&paths.slot_path(&slot_name))?;
    Ok(ResumeOutcome::Navigated { slot_name })
}
