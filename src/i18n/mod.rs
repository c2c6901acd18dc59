// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! # Features
//!
//! - Startup language resolution from CLI, persisted preference, or system locale
//! - Bundled Fluent dictionaries, flattened to key/string lookups
//! - Runtime language switching mirrored into durable storage
//! - Fallback to the lookup key itself when a translation is missing

pub mod catalog;
pub mod language;
pub mod store;
pub mod translator;

pub use catalog::{Catalog, Dictionary};
pub use language::Language;
pub use store::{LanguageAction, LanguageState, LanguageStore};
pub use translator::Translator;

use crate::error::Result;
use crate::storage::PreferenceStore;

/// Catalog and language store bundled together for application code.
#[derive(Debug)]
pub struct I18n<S> {
    catalog: Catalog,
    store: LanguageStore<S>,
}

impl<S: PreferenceStore> I18n<S> {
    /// Loads the bundled dictionaries and resolves the starting language.
    ///
    /// See [`resolve_language`] for the precedence order.
    pub fn new(cli_lang: Option<String>, storage: S) -> Result<Self> {
        let catalog = Catalog::bundled()?;
        Ok(Self::with_catalog(catalog, cli_lang, storage))
    }

    pub fn with_catalog(catalog: Catalog, cli_lang: Option<String>, storage: S) -> Self {
        let persisted = store::persisted_language(&storage);
        let language = resolve_language(cli_lang.as_deref(), persisted, sys_locale::get_locale());
        Self {
            catalog,
            store: LanguageStore::with_language(storage, language),
        }
    }

    pub fn tr<'r>(&'r self, key: &'r str) -> &'r str {
        Translator::new(&self.catalog).t(&self.store, key)
    }

    pub fn set_language(&mut self, language: Language) -> Language {
        self.store.set_language(language)
    }

    pub fn dispatch(&mut self, action: LanguageAction) -> Language {
        self.store.dispatch(action)
    }

    pub fn current_language(&self) -> Language {
        self.store.language()
    }

    pub fn store(&self) -> &LanguageStore<S> {
        &self.store
    }
}

/// Picks the starting language.
///
/// 1. CLI `--lang` value
/// 2. Persisted preference
/// 3. OS locale
/// 4. [`Language::default`]
///
/// Unsupported CLI or OS values are skipped rather than rejected.
pub fn resolve_language(
    cli_lang: Option<&str>,
    persisted: Option<Language>,
    os_locale: Option<String>,
) -> Language {
    if let Some(lang) = cli_lang.and_then(|code| code.parse().ok()) {
        return lang;
    }

    if let Some(lang) = persisted {
        return lang;
    }

    if let Some(lang) = os_locale.and_then(|locale| locale.parse().ok()) {
        return lang;
    }

    Language::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::LANGUAGE_KEY;
    use crate::storage::MemoryStore;

    #[test]
    fn test_resolve_language_cli() {
        let lang = resolve_language(Some("gu"), Some(Language::English), None);
        assert_eq!(lang, Language::Gujarati);
    }

    #[test]
    fn test_resolve_language_persisted() {
        let lang = resolve_language(None, Some(Language::Gujarati), Some("en-US".into()));
        assert_eq!(lang, Language::Gujarati);
    }

    #[test]
    fn test_resolve_language_os_locale() {
        let lang = resolve_language(None, None, Some("gu_IN.UTF-8".into()));
        assert_eq!(lang, Language::Gujarati);
    }

    #[test]
    fn test_resolve_language_skips_unsupported_cli() {
        let lang = resolve_language(Some("fr"), Some(Language::Gujarati), None);
        assert_eq!(lang, Language::Gujarati);
    }

    #[test]
    fn test_resolve_language_default() {
        let lang = resolve_language(None, None, Some("de-DE".into()));
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn cli_language_is_not_persisted_until_set() {
        let i18n = I18n::with_catalog(Catalog::default(), Some("gu".into()), MemoryStore::new());
        assert_eq!(i18n.current_language(), Language::Gujarati);
        assert_eq!(i18n.store().storage().get(LANGUAGE_KEY).unwrap(), None);
    }

    #[test]
    fn tr_follows_language_changes() {
        let catalog = Catalog::from_entries([
            (Language::English, Dictionary::from_iter([("greeting", "Hello")])),
            (Language::Gujarati, Dictionary::from_iter([("greeting", "નમસ્તે")])),
        ]);
        let mut i18n = I18n::with_catalog(catalog, Some("en".into()), MemoryStore::new());

        assert_eq!(i18n.tr("greeting"), "Hello");
        i18n.dispatch(LanguageAction::SetLanguage(Language::Gujarati));
        assert_eq!(i18n.tr("greeting"), "નમસ્તે");
        assert_eq!(i18n.tr("unknown_key"), "unknown_key");
    }
}
