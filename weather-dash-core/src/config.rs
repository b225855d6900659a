use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    fetch::DEFAULT_BASE_URL,
    paths::{project_dirs, read_toml, write_toml},
};

/// API key shipped with the dashboard. Anyone running the binary can read it;
/// set `api_key` in the config file to use your own.
pub const DEFAULT_API_KEY: &str = "f9646f3a450d44fca6754146250510";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "London"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,

    /// Override of the `current.json` endpoint.
    pub base_url: Option<String>,

    /// City fetched when an interactive session starts.
    pub default_city: Option<String>,
}

impl Config {
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().filter(|k| !k.is_empty()).unwrap_or(DEFAULT_API_KEY)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().filter(|u| !u.is_empty()).unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn default_city(&self) -> Option<&str> {
        self.default_city.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key).filter(|k| !k.trim().is_empty());
    }

    pub fn set_default_city(&mut self, city: String) {
        self.default_city = Some(city.trim().to_string()).filter(|c| !c.is_empty());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        read_toml(path, "config file")
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        write_toml(path, self, "config file")
    }

    pub fn config_file_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_fall_back_to_embedded_values() {
        let cfg = Config::default();

        assert_eq!(cfg.api_key(), DEFAULT_API_KEY);
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
        assert_eq!(cfg.default_city(), None);
    }

    #[test]
    fn blank_values_are_ignored() {
        let mut cfg = Config::default();
        cfg.set_api_key("   ".into());
        cfg.set_default_city("  ".into());

        assert_eq!(cfg.api_key, None);
        assert_eq!(cfg.default_city, None);
        assert_eq!(cfg.api_key(), DEFAULT_API_KEY);
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("config.toml")).expect("load must succeed");

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_api_key("MY_KEY".into());
        cfg.set_default_city(" Paris ".into());
        cfg.save_to(&path).expect("save must succeed");

        let loaded = Config::load_from(&path).expect("load must succeed");
        assert_eq!(loaded.api_key(), "MY_KEY");
        assert_eq!(loaded.default_city(), Some("Paris"));
        assert_eq!(loaded.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn config_lives_in_platform_config_dir() {
        let path = Config::config_file_path().expect("platform dirs available");
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_key = ").expect("seed file");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
