//! Read-only container configuration (`spec.md` §3, "Config").
//!
//! Grounded on the shape of the teacher's `WorktrunkConfig`
//! (`src/config/user/mod.rs`): kebab-case TOML fields via `serde` +
//! `#[serde(rename = "...")]`, a `Default` impl, and round-trip unit tests.
//! Parsing precedence, environment-variable overrides, project/user config
//! merging, hooks, and LLM commit-message generation are the out-of-scope
//! "Configuration parsing" collaborator from `spec.md` §1 — this struct is
//! read-only and the core never merges or migrates it.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// The subset of container configuration the core consumes.
///
/// Lives at `.wt/config.toml`; written once by `init` and otherwise treated
/// as read-only by everything in this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "slot-count")]
    pub slot_count: usize,

    /// Days after which an unpinned, unused slot becomes eligible for a
    /// higher-level `clean` sweep. The core records this value but does not
    /// act on it — archival sweeps are out of scope (`spec.md` §1).
    #[serde(rename = "archive-after-days", default = "default_archive_after_days")]
    pub archive_after_days: u32,

    #[serde(default)]
    pub shared: SharedConfig,

    /// Template names consumed by the out-of-scope shared-directory
    /// symlinking/templating collaborator.
    #[serde(default)]
    pub templates: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedConfig {
    #[serde(default)]
    pub directories: Vec<String>,
}

fn default_archive_after_days() -> u32 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Config {
            slot_count: 4,
            archive_after_days: default_archive_after_days(),
            shared: SharedConfig::default(),
            templates: Vec::new(),
        }
    }
}

impl Config {
    pub fn read(control_dir: &Path) -> anyhow::Result<Self> {
        let path = control_dir.join("config.toml");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| crate::error::Error::io(&path, e))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn write(&self, control_dir: &Path) -> anyhow::Result<()> {
        let path = control_dir.join("config.toml");
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content).map_err(|e| crate::error::Error::io(&path, e))?;
        Ok(())
    }
}
