// SPDX-License-Identifier: MPL-2.0
//! Durable key-value storage for user preferences.
//!
//! The language store only ever needs one string under a fixed key, but the
//! seam is a plain key-value trait so tests can swap in an in-memory map.

use crate::config::{self, defaults::LANGUAGE_KEY, Config};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A synchronous string key-value store that survives restarts.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store backed by a `HashMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a `settings.toml` file.
///
/// Each `set` re-reads the file, updates one key and rewrites it, so keys
/// owned by other tools are preserved. A file that is not valid TOML is
/// left untouched and `set` fails with [`Error::Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the settings file at the resolved config location.
    ///
    /// See [`config::paths`] for the resolution order.
    pub fn open_default() -> Result<Self> {
        config::get_default_config_path()
            .map(Self::new)
            .ok_or_else(|| Error::Config("cannot determine config directory".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        config::load_from_path(&self.path)
    }

    /// Like `read`, but a corrupt file is an error instead of an empty config.
    fn read_for_update(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        config::parse_from_path(&self.path)
    }
}

impl PreferenceStore for SettingsFile {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let config = self.read()?;
        if key == LANGUAGE_KEY {
            return Ok(config.language);
        }
        Ok(config
            .extra
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut config = self.read_for_update()?;
        if key == LANGUAGE_KEY {
            config.language = Some(value.to_string());
        } else {
            config
                .extra
                .insert(key.to_string(), toml::Value::String(value.to_string()));
        }
        config::save_to_path(&config, &self.path)
    }
}
