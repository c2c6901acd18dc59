// SPDX-License-Identifier: MPL-2.0
//! `bhasha` keeps track of the user's UI language and resolves display strings.
//!
//! It provides a language preference store mirrored into a `settings.toml`
//! file, bundled Fluent dictionaries with key fallback, and an optional
//! transliteration capability.

pub mod config;
pub mod error;
pub mod i18n;
pub mod storage;
pub mod transliteration;
