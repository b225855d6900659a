//! Platform directories and the TOML files kept in them.

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Serialize, de::DeserializeOwned};
use std::{fs, path::Path};

pub(crate) fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "weather-dash", "weather-dash")
        .ok_or_else(|| anyhow!("Could not determine platform directories"))
}

/// Parse `path` as `T`; a file that doesn't exist yet reads as `T::default()`.
pub(crate) fn read_toml<T: DeserializeOwned + Default>(path: &Path, what: &str) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {what}: {}", path.display()))?;

    toml::from_str(&contents).with_context(|| format!("Failed to parse {what}: {}", path.display()))
}

/// Serialize `value` to `path`, creating parent directories as needed.
pub(crate) fn write_toml<T: Serialize>(path: &Path, value: &T, what: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {what} directory: {}", parent.display()))?;
    }

    let toml =
        toml::to_string_pretty(value).with_context(|| format!("Failed to serialize {what}"))?;

    fs::write(path, toml).with_context(|| format!("Failed to write {what}: {}", path.display()))
}
