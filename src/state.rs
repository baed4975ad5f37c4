//! The persistent state document (`spec.md` §3, "State document") and its
//! atomic on-disk representation (§4.3).
//!
//! Atomic write is grounded on the teacher's rename-into-place pattern for
//! on-disk caches (`src/commands/list/ci_status.rs`, `src/commands/select/
//! summary.rs` both write a sibling temp file then `fs::rename` over the
//! target); here done with `tempfile::NamedTempFile` for the fsync-then-
//! persist idiom instead of a hand-rolled temp path.

use std::path::Path;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub type SlotName = String;
pub type BranchName = String;

/// Current on-disk state-document version. Bumped only by a migration; none
/// exist yet.
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub branch: Option<BranchName>,
    pub last_used_at: DateTime<Utc>,
    #[serde(default)]
    pub pinned: bool,
}

impl Slot {
    pub fn vacant(now: DateTime<Utc>) -> Self {
        Slot {
            branch: None,
            last_used_at: now,
            pinned: false,
        }
    }

    pub fn is_vacant(&self) -> bool {
        self.branch.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub version: u32,
    #[serde(default)]
    pub slots: IndexMap<SlotName, Slot>,
}

impl Default for State {
    fn default() -> Self {
        State {
            version: CURRENT_VERSION,
            slots: IndexMap::new(),
        }
    }
}

impl State {
    fn state_path(control_dir: &Path) -> std::path::PathBuf {
        control_dir.join("state.toml")
    }

    /// Read the state document. An absent file is not an error: it means an
    /// empty, freshly-initialized state (`spec.md` §4.3).
    pub fn read(control_dir: &Path) -> Result<State, Error> {
        let path = Self::state_path(control_dir);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(State::default()),
            Err(e) => return Err(Error::io(&path, e)),
        };
        toml::from_str(&content).map_err(|e| Error::ContainerCorrupt(e.to_string()))
    }

    /// Atomically write the state document: write to a sibling temp file,
    /// fsync, then rename over the target.
    pub fn write(&self, control_dir: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(control_dir).map_err(|e| Error::io(control_dir, e))?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::ContainerCorrupt(e.to_string()))?;

        let mut temp = tempfile::Builder::new()
            .prefix("state")
            .suffix(".toml.tmp")
            .tempfile_in(control_dir)
            .map_err(|e| Error::io(control_dir, e))?;

        use std::io::Write;
        temp.write_all(content.as_bytes())
            .map_err(|e| Error::io(control_dir, e))?;
        temp.as_file().sync_all().map_err(|e| Error::io(control_dir, e))?;

        let path = Self::state_path(control_dir);
        temp.persist(&path)
            .map_err(|e| Error::io(&path, e.error))?;
        Ok(())
    }
}
