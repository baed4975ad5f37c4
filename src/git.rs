//! Git facade (`spec.md` §4.6): the abstract operations the slot engine
//! consumes. `CliGit` shells out to the real `git` binary, grounded line for
//! line on the teacher's `Repository::run_command`
//! (`src/git/repository/mod.rs`): `Command::new("git")`, `.args(...)`,
//! `.current_dir(...)`, capture both streams, non-zero exit becomes a
//! taxonomy error carrying the op name and trimmed stderr.
//!
//! Per `spec.md` §9 ("a capability value ... no runtime class hierarchy
//! needed"), this is a plain trait rather than a trait-object registry; the
//! real implementation is exercised directly against throwaway repositories
//! in tests, matching the teacher's preference for running real git over
//! mocking it.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::Error;

/// The eight git operations the slot engine needs, per `spec.md` §4.6.
pub trait GitFacade {
    fn current_branch(&self, path: &Path) -> Result<Option<String>, Error>;
    fn branch_exists(&self, repo: &Path, name: &str) -> Result<bool, Error>;
    fn create_branch(&self, repo: &Path, name: &str, from_ref: &str) -> Result<(), Error>;
    fn worktree_add(&self, repo: &Path, path: &Path, branch: &str) -> Result<(), Error>;
    fn worktree_remove(&self, repo: &Path, path: &Path) -> Result<(), Error>;
    fn stash_create(&self, slot_path: &Path) -> Result<Option<String>, Error>;
    fn stash_apply(&self, slot_path: &Path, handle: &str) -> Result<(), Error>;
    fn is_clean(&self, slot_path: &Path) -> Result<bool, Error>;
}

/// Shells out to the system `git` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliGit;

impl CliGit {
    fn run(&self, op: &str, dir: &Path, args: &[&str]) -> Result<String, Error> {
        log::debug!("$ git {} [{}]", args.join(" "), dir.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| Error::GitFailure {
                op: op.to_string(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::GitFailure {
                op: op.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitFacade for CliGit {
    fn current_branch(&self, path: &Path) -> Result<Option<String>, Error> {
        if !path.is_dir() {
            return Ok(None);
        }
        match self.run(
            "rev-parse --abbrev-ref HEAD",
            path,
            &["rev-parse", "--abbrev-ref", "HEAD"],
        ) {
            Ok(stdout) => {
                let branch = stdout.trim();
                if branch.is_empty() || branch == "HEAD" {
                    Ok(None) // detached HEAD
                } else {
                    Ok(Some(branch.to_string()))
                }
            }
            Err(_) => Ok(None), // not a git worktree at all
        }
    }

    fn branch_exists(&self, repo: &Path, name: &str) -> Result<bool, Error> {
        let reference = format!("refs/heads/{name}");
        match self.run(
            "show-ref --verify --quiet",
            repo,
            &["show-ref", "--verify", "--quiet", &reference],
        ) {
            Ok(_) => Ok(true),
            Err(Error::GitFailure { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn create_branch(&self, repo: &Path, name: &str, from_ref: &str) -> Result<(), Error> {
        self.run("branch", repo, &["branch", name, from_ref])?;
        Ok(())
    }

    fn worktree_add(&self, repo: &Path, path: &Path, branch: &str) -> Result<(), Error> {
        let path_str = path.to_string_lossy().into_owned();
        self.run(
            "worktree add",
            repo,
            &["worktree", "add", &path_str, branch],
        )?;
        Ok(())
    }

    fn worktree_remove(&self, repo: &Path, path: &Path) -> Result<(), Error> {
        let path_str = path.to_string_lossy().into_owned();
        self.run(
            "worktree remove",
            repo,
            &["worktree", "remove", "--force", &path_str],
        )?;
        Ok(())
    }

    fn stash_create(&self, slot_path: &Path) -> Result<Option<String>, Error> {
        if self.is_clean(slot_path)? {
            return Ok(None);
        }
        // `git stash create [<message>]` takes no flags — every argument
        // after the subcommand is folded into the message, so
        // `stash create -u` silently does *not* enable untracked files; it
        // just names the stash "-u". To capture untracked files (required by
        // `spec.md` §3's stash-handle contract) we stage them into this
        // worktree's own index first (each `git worktree` has its own index,
        // so this can't disturb another slot's staged state), then let
        // `stash create` snapshot the now-fully-staged tree.
        self.run("add -A", slot_path, &["add", "-A"])?;
        let handle = self.run("stash create", slot_path, &["stash", "create", "slotwt-evicted"])?;
        let handle = handle.trim();
        if handle.is_empty() {
            return Ok(None);
        }
        // `stash create` leaves the working tree (and the index we just
        // staged) untouched and doesn't add to `refs/stash`, so the commit
        // it returns is otherwise unreachable and eligible for gc. `stash
        // store` anchors it in the stash reflog; the engine's own archive
        // still holds the authoritative `(branch -> handle)` mapping. Reset
        // and clean the working tree ourselves afterward, since the
        // engine's next step deletes this directory and expects a tree with
        // nothing left to capture.
        self.run(
            "stash store",
            slot_path,
            &["stash", "store", "-m", "slotwt-evicted", handle],
        )?;
        self.run("reset --hard", slot_path, &["reset", "--hard", "HEAD"])?;
        self.run(
            "clean -fd",
            slot_path,
            &["clean", "-fd"],
        )?;
        Ok(Some(handle.to_string()))
    }

    fn stash_apply(&self, slot_path: &Path, handle: &str) -> Result<(), Error> {
        // `git stash apply` accepts a bare commit-ish directly, but `git
        // stash drop` does not — it only accepts a `stash@{N}` reflog
        // reference and rejects a raw sha with "is not a stash reference".
        // `refs/stash` is shared by every worktree of this container's repo
        // (it isn't a per-worktree ref), so every slot's eviction piles onto
        // the same reflog; resolve `handle`'s current position in it rather
        // than assuming any fixed index.
        self.run("stash apply", slot_path, &["stash", "apply", handle])?;
        let stash_ref = self.stash_ref_for(slot_path, handle)?;
        self.run("stash drop", slot_path, &["stash", "drop", &stash_ref])?;
        Ok(())
    }

    /// Resolve `handle` (a stash commit's sha) to its current `stash@{N}`
    /// position in `refs/stash`'s reflog, for operations like `stash drop`
    /// that require the reflog form rather than a bare commit-ish.
    fn stash_ref_for(&self, slot_path: &Path, handle: &str) -> Result<String, Error> {
        let list = self.run("stash list", slot_path, &["stash", "list", "--format=%H"])?;
        let index = list
            .lines()
            .position(|line| line.trim() == handle)
            .ok_or_else(|| Error::GitFailure {
                op: "stash drop".to_string(),
                stderr: format!("no entry for {handle} in refs/stash"),
            })?;
        Ok(format!("stash@{{{index}}}"))
    }

    fn is_clean(&self, slot_path: &Path) -> Result<bool, Error> {
        let status = self.run(
            "status --porcelain",
            slot_path,
            &["status", "--porcelain"],
        )?;
        Ok(status.trim().is_empty())
    }
}

/// Where this container's bare-ish clone lives, relative to the control
/// directory (`spec.md` §3: `repo_dir = control_dir/repo`).
pub fn repo_dir(control_dir: &Path) -> PathBuf {
    control_dir.join("repo")
}
