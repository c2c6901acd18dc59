// SPDX-License-Identifier: MPL-2.0
//! Transliteration port.
//!
//! An engine that suggests script conversions for typed text (for example
//! romanized Gujarati to Gujarati script) may or may not be available at
//! runtime. [`Transliteration`] records that once, at construction, and falls
//! back to returning the input unchanged when no engine is present.

use crate::error::Result;
use crate::i18n::Language;
use std::fmt;

// =============================================================================
// Transliterator
// =============================================================================

/// An engine producing ranked transliteration candidates.
pub trait Transliterator {
    /// Returns candidates for `text` in the script of `target`, best first.
    fn suggestions(&self, text: &str, target: Language) -> Result<Vec<String>>;
}

// =============================================================================
// Transliteration
// =============================================================================

/// A transliteration capability that is either present or absent.
pub struct Transliteration {
    engine: Option<Box<dyn Transliterator>>,
}

impl Transliteration {
    pub fn unavailable() -> Self {
        Self { engine: None }
    }

    pub fn with(engine: impl Transliterator + 'static) -> Self {
        Self {
            engine: Some(Box::new(engine)),
        }
    }

    pub fn is_available(&self) -> bool {
        self.engine.is_some()
    }

    /// Returns the engine's first candidate, or `text` verbatim.
    ///
    /// Falls back to the input when no engine is present, when the engine
    /// returns no candidates, or when it fails.
    pub fn transliterate(&self, text: &str, target: Language) -> String {
        let Some(engine) = &self.engine else {
            return text.to_string();
        };

        match engine.suggestions(text, target) {
            Ok(candidates) => candidates
                .into_iter()
                .next()
                .unwrap_or_else(|| text.to_string()),
            Err(err) => {
                log::warn!("Transliteration into {} failed: {}", target.code(), err);
                text.to_string()
            }
        }
    }
}

impl Default for Transliteration {
    fn default() -> Self {
        Self::unavailable()
    }
}

impl fmt::Debug for Transliteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transliteration")
            .field("available", &self.is_available())
            .finish()
    }
}
