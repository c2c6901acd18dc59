// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use bhasha::config;
//!
//! let path = config::get_default_config_path().expect("no config directory");
//!
//! // Load existing configuration
//! let mut config = config::load_from_path(&path).unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("gu".to_string());
//!
//! // Save the modified configuration
//! config::save_to_path(&config, &path).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

use crate::error::{Error, Result};
use defaults::CONFIG_FILE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Keys this crate does not own, kept so a rewrite does not drop them.
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

/// Returns the full path of `settings.toml` inside the resolved config directory.
pub fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Reads a settings file. Invalid TOML yields the default config.
pub fn load_from_path(path: &Path) -> Result<Config> {
    match parse_from_path(path) {
        Ok(config) => Ok(config),
        Err(Error::Config(err)) => {
            log::warn!("Ignoring unreadable settings file {}: {}", path.display(), err);
            Ok(Config::default())
        }
        Err(err) => Err(err),
    }
}

/// Reads a settings file, failing with [`Error::Config`] on invalid TOML.
///
/// Used before rewriting a file so a corrupt one is never replaced.
pub fn parse_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
