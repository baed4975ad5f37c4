//! Shell handoff (`spec.md` §4.8): the nav-file handshake plus the
//! `shell-init` template generator.
//!
//! The nav file itself has no teacher equivalent — worktrunk keeps a
//! persistent shell wrapper that pipes a directive back over a named pipe
//! (`src/shell_exec.rs`, `src/output/shell_integration.rs`); this is a
//! simplified descendant of that idea using a plain per-pid file instead.
//! The `shell-init` half is grounded directly on the teacher's
//! `askama::Template`-backed `ShellInit` (`src/shell/mod.rs`): one template
//! struct per shell, rendered from a file under `templates/`.

use std::path::{Path, PathBuf};

use askama::Template;

use crate::error::Error;

/// `/tmp/wt-nav-<parent_pid>`, per `spec.md` §4.8.
///
/// Keyed by the *parent's* pid, not `wt`'s own — the shell function that
/// invokes `wt` (`templates/bash.sh`, `templates/zsh.zsh`: `$$`;
/// `templates/fish.fish`: `%self`) constructs this same path from its own
/// pid after `wt` exits, and can only agree with the child on a path built
/// from a pid that doesn't change on every invocation. Since `wt` always
/// runs as a direct child of the interactive shell, its own parent pid is
/// exactly that shell's pid.
pub fn nav_file_path() -> PathBuf {
    std::env::temp_dir().join(format!("wt-nav-{}", std::os::unix::process::parent_id()))
}

/// Write `target_dir` to the nav file, atomically.
pub fn write_nav(target_dir: &Path) -> Result<(), Error> {
    let path = nav_file_path();
    let content = format!("{}\n", target_dir.display());

    let dir = path.parent().unwrap_or_else(|| Path::new("/tmp"));
    let mut temp = tempfile::Builder::new()
        .prefix("wt-nav")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| Error::io(dir, e))?;
    use std::io::Write;
    temp.write_all(content.as_bytes()).map_err(|e| Error::io(&path, e))?;
    temp.persist(&path).map_err(|e| Error::io(&path, e.error))?;
    Ok(())
}

/// Read the nav file at `path`, if present. Only the shell integration
/// function is expected to call this; the engine never reads its own
/// writes (`spec.md` §4.8).
pub fn read_nav(path: &Path) -> Option<PathBuf> {
    let content = std::fs::read_to_string(path).ok()?;
    let line = content.lines().next()?;
    if line.is_empty() {
        None
    } else {
        Some(PathBuf::from(line))
    }
}

/// Idempotent unlink: an absent file is success.
pub fn clean_nav(path: &Path) -> Result<(), Error> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// The shells `shell-init` can target (`spec.md` §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Template)]
#[template(path = "bash.sh")]
struct BashTemplate;

#[derive(Template)]
#[template(path = "zsh.zsh")]
struct ZshTemplate;

#[derive(Template)]
#[template(path = "fish.fish")]
struct FishTemplate;

/// Render the integration snippet for `shell`, per `spec.md` §6.
pub fn render_init(shell: Shell) -> String {
    match shell {
        Shell::Bash => BashTemplate.render().expect("static template"),
        Shell::Zsh => ZshTemplate.render().expect("static template"),
        Shell::Fish => FishTemplate.render().expect("static template"),
    }
}
