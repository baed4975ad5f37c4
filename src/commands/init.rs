//! `wt init` (`spec.md` §6): create `.wt/`, clone or adopt a repository, and
//! allocate `slot_count` vacant slot directories.
//!
//! Not part of the core's §4 component design — the spec names `init` only
//! in the command table, leaving the clone/adopt mechanics unspecified — so
//! this handler shells out to `git` directly rather than through
//! [`slotwt::git::GitFacade`] (whose eight operations are the ones the
//! checkout engine needs, not container bootstrapping). Grounded on the
//! teacher's own `git clone --bare <url> project/.git` convention documented
//! in its worktree-path-template help text (`src/cli/mod.rs`).

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context};
use chrono::Utc;
use indexmap::IndexMap;

use slotwt::config::Config;
use slotwt::names::slot_names;
use slotwt::path::ContainerPaths;
use slotwt::state::{Slot, State};

use crate::cli::current_dir;

pub fn handle_init(url: Option<&str>, slots: usize) -> anyhow::Result<()> {
    let container_root = current_dir();
    let paths = ContainerPaths::for_new_container(&container_root);

    if paths.control_dir.is_dir() {
        bail!("{} is already a container", container_root.display());
    }
    std::fs::create_dir_all(&paths.control_dir)
        .with_context(|| format!("creating {}", paths.control_dir.display()))?;

    match url {
        Some(url) => clone_bare(url, &paths.repo_dir)?,
        None => adopt_bare(&container_root, &paths.repo_dir)?,
    }

    let names = slot_names(slots);
    let mut state_slots = IndexMap::new();
    let now = Utc::now();
    for name in &names {
        let slot_dir = paths.slot_path(name);
        std::fs::create_dir_all(&slot_dir)
            .with_context(|| format!("creating slot directory {}", slot_dir.display()))?;
        state_slots.insert(name.clone(), Slot::vacant(now));
    }

    Config {
        slot_count: slots,
        ..Config::default()
    }
    .write(&paths.control_dir)?;

    State {
        version: slotwt::state::CURRENT_VERSION,
        slots: state_slots,
    }
    .write(&paths.control_dir)?;

    println!(
        "wt: initialized container at {} with {slots} slots",
        container_root.display()
    );
    Ok(())
}

fn clone_bare(url: &str, repo_dir: &Path) -> anyhow::Result<()> {
    let repo_dir = repo_dir.to_string_lossy().into_owned();
    run_git(&["clone", "--bare", url, &repo_dir])
}

/// Adopt the repository containing `start`: locate its `.git` by walking
/// ancestors, then local-clone it bare into `repo_dir`. A local clone (no
/// network) keeps `init` fast and leaves the original working copy
/// untouched.
fn adopt_bare(start: &Path, repo_dir: &Path) -> anyhow::Result<()> {
    let git_dir = find_git_dir(start)
        .with_context(|| format!("no git repository found above {}", start.display()))?;
    let git_dir = git_dir.to_string_lossy().into_owned();
    let repo_dir = repo_dir.to_string_lossy().into_owned();
    run_git(&["clone", "--bare", &git_dir, &repo_dir])
}

fn find_git_dir(start: &Path) -> Option<std::path::PathBuf> {
    start.ancestors().map(|a| a.join(".git")).find(|p| p.exists())
}

fn run_git(args: &[&str]) -> anyhow::Result<()> {
    let output = Command::new("git")
        .args(args)
        .output()
        .context("spawning git")?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("git {}: {}", args.join(" "), stderr.trim());
    }
    Ok(())
}
