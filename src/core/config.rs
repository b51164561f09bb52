use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CheckError, Result};

/// Persistent plugin defaults, overridable per-run by CLI flags.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hpasmcli_path: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub warn_temp_pct: Option<u32>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)?;

        // An empty or corrupted file falls back to defaults
        // (this can happen when the config format changes)
        if data.trim().is_empty() {
            Ok(Config::default())
        } else {
            Ok(serde_json::from_str(&data).unwrap_or_default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(self)
            .map_err(|e| CheckError::config(format!("failed to serialize config: {}", e)))?;

        fs::write(path, data)?;
        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CheckError::config("could not determine config directory"))?;

        Ok(config_dir.join("check_proliant").join("config.json"))
    }
}
