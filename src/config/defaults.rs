// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and persistence.
//!
//! This module serves as the single source of truth for names and codes
//! shared between the language store, the settings file and the CLI.

// ==========================================================================
// Application Identity
// ==========================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "Bhasha";

/// Settings file name within the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "BHASHA_CONFIG_DIR";

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Code of the language active before any preference is set.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Fixed key under which the language preference is persisted.
pub const LANGUAGE_KEY: &str = "language";
