//! Test harness for integration tests: a real temporary git repository and a
//! real container built from it, driven through the library's public API
//! rather than mocked.
//!
//! Grounded on the teacher's `TestRepo` (`tests/common/mod.rs`): isolated git
//! environment (`GIT_AUTHOR_*`/committer env vars, no global config
//! pollution), one helper per git operation a test needs. Simplified
//! relative to the teacher's version — no fixture-template cache, no
//! mocked `gh`/`glab`, since this crate has no such collaborators.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use indexmap::IndexMap;
use tempfile::TempDir;

use slotwt::config::Config;
use slotwt::path::ContainerPaths;
use slotwt::state::{Slot, State};

/// A source git repository with one commit on `main`, independent of any
/// container.
pub struct SourceRepo {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl SourceRepo {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("source");
        std::fs::create_dir(&root).unwrap();

        run_git_in(&root, &["init", "--initial-branch=main", "-q"]);
        std::fs::write(root.join("README.md"), "hello\n").unwrap();
        run_git_in(&root, &["add", "README.md"]);
        commit_in(&root, "initial commit");

        SourceRepo { _temp_dir: temp_dir, root }
    }

    pub fn branch(&self, name: &str) {
        run_git_in(&self.root, &["branch", name]);
    }
}

fn run_git_in(dir: &Path, args: &[&str]) {
    let status = git_command(dir, args).status().unwrap();
    assert!(status.success(), "git {args:?} failed in {}", dir.display());
}

fn commit_in(dir: &Path, message: &str) {
    run_git_in(
        dir,
        &["-c", "user.name=Test", "-c", "user.email=test@example.com", "commit", "-q", "-m", message],
    );
}

fn git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE");
    cmd
}

/// A container: `.wt/repo` bare-cloned from a [`SourceRepo`], `slot_count`
/// empty slot directories, a default config, and a freshly written state
/// document with every slot vacant. Equivalent to what `wt init` produces,
/// built directly against the library rather than by spawning the binary.
pub struct TestContainer {
    pub temp_dir: TempDir,
    pub source: SourceRepo,
    pub paths: ContainerPaths,
    pub slot_names: Vec<String>,
}

impl TestContainer {
    pub fn new(slot_count: usize) -> Self {
        let source = SourceRepo::new();
        let temp_dir = TempDir::new().unwrap();
        let container_root = temp_dir.path().join("container");
        std::fs::create_dir(&container_root).unwrap();
        let paths = ContainerPaths::for_new_container(&container_root);
        std::fs::create_dir_all(&paths.control_dir).unwrap();

        run_git_in(
            temp_dir.path(),
            &[
                "clone",
                "--bare",
                "-q",
                &source.root.to_string_lossy(),
                &paths.repo_dir.to_string_lossy(),
            ],
        );

        let slot_names = slotwt::names::slot_names(slot_count);
        let mut slots = IndexMap::new();
        for name in &slot_names {
            std::fs::create_dir(paths.slot_path(name)).unwrap();
            slots.insert(name.clone(), Slot::vacant(chrono::Utc::now()));
        }

        Config {
            slot_count,
            ..Config::default()
        }
        .write(&paths.control_dir)
        .unwrap();

        State {
            version: slotwt::state::CURRENT_VERSION,
            slots,
        }
        .write(&paths.control_dir)
        .unwrap();

        TestContainer {
            temp_dir,
            source,
            paths,
            slot_names,
        }
    }

    pub fn container_root(&self) -> &Path {
        &self.paths.container_root
    }

    /// Create `name` on the source repo and fetch it into the container's
    /// bare clone (`.wt/repo`), so `GitFacade::branch_exists` can see it.
    ///
    /// `TestContainer::new` clones the source *before* a test gets a chance
    /// to create any feature branches, so branching the source alone never
    /// reaches the clone `engine::checkout` actually queries; every branch a
    /// test wants visible to the engine has to go through this method
    /// instead of `self.source.branch` directly.
    pub fn branch(&self, name: &str) {
        self.source.branch(name);
        run_git_in(
            &self.paths.repo_dir,
            &["fetch", "origin", &format!("refs/heads/{name}:refs/heads/{name}")],
        );
    }

    pub fn state(&self) -> State {
        State::read(&self.paths.control_dir).unwrap()
    }

    /// Write a file and commit it directly inside a slot's working tree,
    /// simulating uncommitted or committed work a user left behind.
    pub fn write_uncommitted(&self, slot_name: &str, file: &str, content: &str) {
        let slot_path = self.paths.slot_path(slot_name);
        std::fs::write(slot_path.join(file), content).unwrap();
    }

    pub fn read_file(&self, slot_name: &str, file: &str) -> Option<String> {
        std::fs::read_to_string(self.paths.slot_path(slot_name).join(file)).ok()
    }
}

/// Map of slot name -> occupant branch, for concise assertions.
pub fn occupants(state: &State) -> HashMap<String, Option<String>> {
    state
        .slots
        .iter()
        .map(|(name, slot)| (name.clone(), slot.branch.clone()))
        .collect()
}
