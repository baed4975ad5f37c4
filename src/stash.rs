//! The stash archive: a container-local `(branch -> stash handle)` map,
//! persisted outside the state document's slot table (`spec.md` §4.7 step
//! 5b, §9 Open Question on format).
//!
//! Resolved as a flat TOML map at `.wt/stashes/archive.toml`, keyed by the
//! §4.2-encoded branch name (branch names aren't valid TOML keys or
//! filesystem-safe on their own). Atomic write follows the same
//! temp-file-then-rename idiom as [`crate::state`].

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StashEntry {
    pub handle: String,
    pub stashed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StashArchive {
    /// Keyed by the §4.2-encoded branch name; use `BTreeMap` (rather than
    /// `IndexMap`, see `state.rs`) since ordering here is incidental and
    /// sorted-by-key output is the more readable diff for an archive file.
    #[serde(default)]
    entries: BTreeMap<String, StashEntry>,
}

impl StashArchive {
    fn archive_path(control_dir: &Path) -> std::path::PathBuf {
        control_dir.join("stashes").join("archive.toml")
    }

    pub fn read(control_dir: &Path) -> Result<StashArchive, Error> {
        let path = Self::archive_path(control_dir);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(StashArchive::default()),
            Err(e) => return Err(Error::io(&path, e)),
        };
        toml::from_str(&content).map_err(|e| Error::ContainerCorrupt(e.to_string()))
    }

    pub fn write(&self, control_dir: &Path) -> Result<(), Error> {
        let dir = control_dir.join("stashes");
        std::fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
        let content = toml::to_string_pretty(self).map_err(|e| Error::ContainerCorrupt(e.to_string()))?;

        let mut temp = tempfile::Builder::new()
            .prefix("archive")
            .suffix(".toml.tmp")
            .tempfile_in(&dir)
            .map_err(|e| Error::io(&dir, e))?;
        use std::io::Write;
        temp.write_all(content.as_bytes()).map_err(|e| Error::io(&dir, e))?;
        temp.as_file().sync_all().map_err(|e| Error::io(&dir, e))?;

        let path = Self::archive_path(control_dir);
        temp.persist(&path).map_err(|e| Error::io(&path, e.error))?;
        Ok(())
    }

    pub fn insert(&mut self, branch: &str, handle: String, now: DateTime<Utc>) {
        self.entries.insert(
            codec::encode(branch),
            StashEntry {
                handle,
                stashed_at: now,
            },
        );
    }

    pub fn take(&mut self, branch: &str) -> Option<StashEntry> {
        self.entries.remove(&codec::encode(branch))
    }

    pub fn get(&self, branch: &str) -> Option<&StashEntry> {
        self.entries.get(&codec::encode(branch))
    }
}
