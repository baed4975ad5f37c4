//! Container discovery.
//!
//! Grounded on the ancestor-walk the teacher uses to locate a `.git`
//! directory from an arbitrary starting path — here walking for `.wt`
//! instead (see `spec.md` §4.1).

use std::path::{Path, PathBuf};

use crate::error::Error;

/// The triple of paths that identify a container, per `spec.md` §3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerPaths {
    pub container_root: PathBuf,
    pub control_dir: PathBuf,
    pub repo_dir: PathBuf,
}

impl ContainerPaths {
    fn at(container_root: PathBuf) -> Self {
        let control_dir = container_root.join(".wt");
        let repo_dir = control_dir.join("repo");
        ContainerPaths {
            container_root,
            control_dir,
            repo_dir,
        }
    }

    /// Walk `start` and its ancestors looking for a `.wt` directory.
    ///
    /// Fails with [`Error::NotInContainer`] once the filesystem root is
    /// reached without a match.
    pub fn discover(start: &Path) -> Result<Self, Error> {
        for ancestor in start.ancestors() {
            if ancestor.join(".wt").is_dir() {
                return Ok(ContainerPaths::at(ancestor.to_path_buf()));
            }
        }
        Err(Error::NotInContainer)
    }

    /// Construct the paths for a container known to be rooted at `root`,
    /// without touching the filesystem. Used by `init`, which creates `.wt/`
    /// itself, and by tests.
    pub fn for_new_container(root: impl Into<PathBuf>) -> Self {
        ContainerPaths::at(root.into())
    }

    /// The first path component of `cwd` relative to `container_root`, or
    /// `None` if `cwd` is not inside a slot directory (including being the
    /// container root itself, or inside `.wt/`).
    pub fn current_slot_name(&self, cwd: &Path) -> Option<String> {
        let relative = cwd.strip_prefix(&self.container_root).ok()?;
        let first = relative.components().next()?;
        let name = first.as_os_str().to_str()?.to_string();
        if name == ".wt" { None } else { Some(name) }
    }

    pub fn slot_path(&self, slot_name: &str) -> PathBuf {
        self.container_root.join(slot_name)
    }
}
