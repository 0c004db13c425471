// Store configuration, read from `kanban.yml` in the store directory

use crate::snapshot::DEFAULT_SLOT;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE: &str = "kanban.yml";

/// Where the snapshot is kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// `<slot>.json` in the store directory
    #[default]
    File,
    /// `kanban.db` in the store directory
    Sqlite,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendKind,
    pub slot: String,
    /// Start from the built-in tasks when nothing is stored
    pub seed_defaults: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            slot: DEFAULT_SLOT.to_string(),
            seed_defaults: true,
        }
    }
}

impl Config {
    /// Read `kanban.yml` from `dir`; a missing file yields the defaults
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if !path.exists() {
            debug!(file = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).with_context(|| format!("Failed to read config {:?}", path))?;
        let config: Config =
            serde_yaml::from_str(&content).with_context(|| format!("Failed to parse config {:?}", path))?;
        debug!(file = ?path, ?config, "Loaded config");
        Ok(config)
    }

    /// Platform data directory, or `.kanban` in the working directory
    pub fn default_store_dir() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("kanban"))
            .unwrap_or_else(|| PathBuf::from(".kanban"))
    }
}
