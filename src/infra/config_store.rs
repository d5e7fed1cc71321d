// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and restores the exact configuration of a split run.
//
// Why save the config?
//   A percentile-of-sample split depends on random draws.
//   The config records the seed (chosen automatically when the
//   user did not pass one), so any split can be replayed later
//   with `split --from-config <output_dir>/split_config.json`.
//
// File layout:
//   splits/
//     train.csv
//     test.csv
//     split_config.json   ← written here
//     split_report.csv
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json crate documentation

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::split_use_case::SplitConfig;

/// File name of the saved config inside an output directory
pub const CONFIG_FILE: &str = "split_config.json";

/// Reads and writes SplitConfig JSON files in one directory
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    /// Path the config is written to
    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Save the config as pretty-printed JSON
    pub fn save(&self, cfg: &SplitConfig) -> Result<()> {
        let path = self.path();
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved split config to '{}'", path.display());
        Ok(())
    }

    /// Load a config from any JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<SplitConfig> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Invalid split config in '{}'", path.display()))
    }
}
