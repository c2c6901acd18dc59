// SPDX-License-Identifier: MPL-2.0
//! Key lookup against the active language.

use super::{Catalog, Language, LanguageStore};
use crate::storage::PreferenceStore;

/// Resolves display strings from a [`Catalog`].
///
/// Unknown keys resolve to themselves so a missing translation shows up in
/// the UI as its key rather than as an error.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Translator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolves `key` in the store's current language.
    pub fn t<'r, S>(&self, store: &LanguageStore<S>, key: &'r str) -> &'r str
    where
        'a: 'r,
        S: PreferenceStore,
    {
        self.t_in(store.language(), key)
    }

    /// Resolves `key` in an explicit language.
    pub fn t_in<'r>(&self, language: Language, key: &'r str) -> &'r str
    where
        'a: 'r,
    {
        let resolved = self.catalog.dictionary(language).get(key).unwrap_or(key);
        log::trace!("t({}) [{}] -> {}", key, language.code(), resolved);
        resolved
    }
}
