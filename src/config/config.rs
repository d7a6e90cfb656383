use crate::pipeline::DEFAULT_TOP_N;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Field delimiter. When unset it is inferred from the file extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,

    #[serde(default = "default_coordinate_sentinel")]
    pub coordinate_sentinel: String,

    #[serde(default = "default_missing_label_markers")]
    pub missing_label_markers: Vec<String>,

    #[serde(default = "default_unknown_region")]
    pub unknown_region: String,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_coordinate_sentinel() -> String {
    "..".to_string()
}

fn default_missing_label_markers() -> Vec<String> {
    vec!["..".to_string(), "n/a (<2x)".to_string(), "n/a".to_string()]
}

fn default_unknown_region() -> String {
    "Indeterminado".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            delimiter: None,
            coordinate_sentinel: default_coordinate_sentinel(),
            missing_label_markers: default_missing_label_markers(),
            unknown_region: default_unknown_region(),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "haplotracker", "haplo-tracker")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Loads the user config, falling back to defaults when it is absent or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => warn!("Ignoring {}: {:#}", config_path.display(), e),
                }
            }
        }
        Config::default()
    }

    /// Loads an explicitly requested config file. Unlike `load`, failures are errors.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path =
            Self::default_path().context("Failed to determine project directories")?;
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir)?;
        }
        fs::write(&config_path, self.to_toml()?)?;
        Ok(config_path)
    }

    pub fn is_missing_label(&self, raw: &str) -> bool {
        let raw = raw.trim();
        raw.is_empty() || self.missing_label_markers.iter().any(|m| m == raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml("top_n = 5\ndelimiter = \",\"\n").unwrap();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.delimiter, Some(','));
        assert_eq!(config.coordinate_sentinel, "..");
        assert_eq!(config.unknown_region, "Indeterminado");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_label_markers() {
        let config = Config::default();
        assert!(config.is_missing_label("n/a (<2x)"));
        assert!(config.is_missing_label(" .. "));
        assert!(config.is_missing_label(""));
        assert!(!config.is_missing_label("H1a"));
    }

    #[test]
    fn test_load_from_reports_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "top_n = \"many\"").unwrap();
        assert!(Config::load_from(&path).is_err());
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
