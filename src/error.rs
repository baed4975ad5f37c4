//! Crate-wide error taxonomy.
//!
//! One enum, values not types, per `spec.md` §7. Each variant maps to a
//! single user-visible stderr line (`wt: <message>`) and exit code 1; none of
//! these carry a raw Rust backtrace or subprocess dump into the terminal.

use std::path::PathBuf;

use crate::styling::{ERROR, ERROR_BOLD, ERROR_EMOJI, HINT, HINT_EMOJI};

#[derive(Debug)]
pub enum Error {
    /// Discovery walked up to the filesystem root without finding `.wt/`.
    NotInContainer,
    /// `.wt/` exists but essential pieces (repo, state version) are missing
    /// or unparsable.
    ContainerCorrupt(String),
    /// Another process held the container lock past the timeout.
    LockTimeout,
    /// The requested branch does not exist and the core cannot create it.
    UnknownBranch(String),
    /// No eviction candidate: every slot is pinned.
    AllSlotsPinned,
    /// A `git` subprocess exited non-zero.
    GitFailure { op: String, stderr: String },
    /// An explicit slot name did not match any slot.
    SlotNotFound(String),
    /// Restoring a stash failed; the checkout itself still succeeded. Carried
    /// as an error value so callers can choose to downgrade it to a warning
    /// (see `spec.md` §7 — non-fatal).
    StashRestoreFailed { branch: String, detail: String },
    /// A filesystem operation failed.
    Io { path: PathBuf, detail: String },
    /// No slot currently holds a branch (`resume` with nothing checked out).
    NoSlotsInUse,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            detail: err.to_string(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotInContainer => write!(
                f,
                "{ERROR_EMOJI} {ERROR}Not inside a worktree container{ERROR:#}\n\n{HINT_EMOJI} {HINT}Run 'wt init' to create one{HINT:#}"
            ),
            Error::ContainerCorrupt(detail) => {
                write!(f, "{ERROR_EMOJI} {ERROR}Container is corrupt: {detail}{ERROR:#}")
            }
            Error::LockTimeout => write!(
                f,
                "{ERROR_EMOJI} {ERROR}Timed out waiting for another 'wt' process to finish{ERROR:#}"
            ),
            Error::UnknownBranch(name) => write!(
                f,
                "{ERROR_EMOJI} {ERROR}Branch {ERROR_BOLD}{name}{ERROR_BOLD:#}{ERROR} does not exist{ERROR:#}"
            ),
            Error::AllSlotsPinned => write!(
                f,
                "{ERROR_EMOJI} {ERROR}All slots are pinned; nothing to evict{ERROR:#}\n\n{HINT_EMOJI} {HINT}Unpin a slot with 'wt unpin' first{HINT:#}"
            ),
            Error::GitFailure { op, stderr } => {
                let stderr = stderr.trim();
                if stderr.is_empty() {
                    write!(f, "{ERROR_EMOJI} {ERROR}git {op} failed{ERROR:#}")
                } else {
                    write!(f, "{ERROR_EMOJI} {ERROR}git {op} failed: {stderr}{ERROR:#}")
                }
            }
            Error::SlotNotFound(name) => {
                write!(f, "{ERROR_EMOJI} {ERROR}No slot named {ERROR_BOLD}{name}{ERROR_BOLD:#}{ERROR:#}")
            }
            Error::StashRestoreFailed { branch, detail } => write!(
                f,
                "{ERROR_EMOJI} {ERROR}Could not restore stashed work for {ERROR_BOLD}{branch}{ERROR_BOLD:#}{ERROR}: {detail}{ERROR:#}"
            ),
            Error::Io { path, detail } => {
                write!(f, "{ERROR_EMOJI} {ERROR}{}: {detail}{ERROR:#}", path.display())
            }
            Error::NoSlotsInUse => {
                write!(f, "{ERROR_EMOJI} {ERROR}No slots currently have a branch checked out{ERROR:#}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io {
            path: PathBuf::new(),
            detail: e.to_string(),
        }
    }
}
