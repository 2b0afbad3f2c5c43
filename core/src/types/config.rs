use crate::types::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Paths and saved settings for one installation.
#[derive(Clone)]
pub struct Config {
    pub base_path: PathBuf,
    pub saved: SavedConfig,
}

impl Config {
    pub fn db_path(&self) -> PathBuf {
        self.base_path.join("pokesort.redb")
    }

    pub fn data_path(&self) -> PathBuf {
        self.base_path.join("pokemon.json")
    }

    pub fn config_path(&self) -> PathBuf {
        SavedConfig::path(&self.base_path)
    }
}

/// User-facing settings, persisted as config.toml.
///
/// Search tuning lives here so the weights and threshold survive restarts;
/// the search crate turns these into its own config at engine construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedConfig {
    pub language: Language,
    /// Worst per-field score (0-1 scale, lower is better) still counted as
    /// a match.
    pub threshold: f64,
    pub weight_name_en: f64,
    pub weight_name_de: f64,
    pub weight_number: f64,
}

impl Default for SavedConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            threshold: 0.4,
            weight_name_en: 1.0,
            weight_name_de: 1.0,
            weight_number: 0.8,
        }
    }
}

impl SavedConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(base_path: &Path) -> PathBuf {
        base_path.join("config.toml")
    }

    /// Loads settings from a TOML file. Returns defaults if the file doesn't
    /// exist.
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but an unreadable or unparsable file also
    /// falls back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Saves settings to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigFileError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
