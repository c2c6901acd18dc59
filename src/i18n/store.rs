// SPDX-License-Identifier: MPL-2.0
//! The language preference store.
//!
//! [`LanguageStore`] is the single owner of the active UI language. It is an
//! explicit value handed to whoever needs it, and every change is mirrored
//! into a [`PreferenceStore`] under [`LANGUAGE_KEY`].

use super::Language;
use crate::config::defaults::LANGUAGE_KEY;
use crate::storage::PreferenceStore;

/// In-memory language state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageState {
    pub language: Language,
}

/// The only mutation the store accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageAction {
    SetLanguage(Language),
}

#[derive(Debug)]
pub struct LanguageStore<S> {
    state: LanguageState,
    storage: S,
}

impl<S: PreferenceStore> LanguageStore<S> {
    /// Creates a store in the default state. Nothing is read or written.
    pub fn new(storage: S) -> Self {
        Self {
            state: LanguageState::default(),
            storage,
        }
    }

    /// Creates a store seeded from the persisted preference.
    ///
    /// A missing, unreadable or unsupported value leaves the default state.
    pub fn restore(storage: S) -> Self {
        let language = persisted_language(&storage).unwrap_or_default();
        log::debug!("Restored language {}", language.code());
        Self {
            state: LanguageState { language },
            storage,
        }
    }

    /// Creates a store with an explicit starting language, without writing it.
    pub fn with_language(storage: S, language: Language) -> Self {
        Self {
            state: LanguageState { language },
            storage,
        }
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn state(&self) -> LanguageState {
        self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Applies an action and returns the resulting language.
    pub fn dispatch(&mut self, action: LanguageAction) -> Language {
        match action {
            LanguageAction::SetLanguage(language) => self.set_language(language),
        }
    }

    /// Switches the active language and writes its code to storage.
    ///
    /// A failed write is logged and otherwise ignored: the in-memory change
    /// always takes effect.
    pub fn set_language(&mut self, language: Language) -> Language {
        self.state.language = language;
        log::debug!("Language set to {}", language.code());

        if let Err(err) = self.storage.set(LANGUAGE_KEY, language.code()) {
            log::warn!(
                "Failed to persist language preference {}: {}",
                language.code(),
                err
            );
        }
        language
    }
}

/// Reads the persisted preference, if any, as a supported language.
pub fn persisted_language<S: PreferenceStore>(storage: &S) -> Option<Language> {
    let stored = match storage.get(LANGUAGE_KEY) {
        Ok(stored) => stored?,
        Err(err) => {
            log::warn!("Failed to read language preference: {}", err);
            return None;
        }
    };
    match stored.parse() {
        Ok(language) => Some(language),
        Err(err) => {
            log::warn!("Ignoring persisted language preference: {}", err);
            None
        }
    }
}
