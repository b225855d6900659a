//! Key-value persistence for user preferences.

use anyhow::Result;
use std::{collections::BTreeMap, path::PathBuf};

use crate::paths::{project_dirs, read_toml, write_toml};

/// String key-value storage that survives between runs.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept as a flat TOML table on disk.
///
/// ```toml
/// theme = "light"
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(project_dirs()?.data_dir().join("preferences.toml"))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        read_toml(&self.path, "preferences")
    }
}

impl PreferenceStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());

        write_toml(&self.path, &items, "preferences")
    }
}
