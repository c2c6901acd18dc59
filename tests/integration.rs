// SPDX-License-Identifier: MPL-2.0
use bhasha::config::{self, defaults::LANGUAGE_KEY, Config};
use bhasha::i18n::{Catalog, Dictionary, I18n, Language, LanguageAction, LanguageStore, Translator};
use bhasha::storage::{MemoryStore, PreferenceStore, SettingsFile};
use tempfile::tempdir;

fn greeting_catalog() -> Catalog {
    Catalog::from_entries([
        (Language::English, Dictionary::from_iter([("greeting", "Hello")])),
        (Language::Gujarati, Dictionary::from_iter([("greeting", "નમસ્તે")])),
    ])
}

#[test]
fn test_greeting_scenario() {
    let catalog = greeting_catalog();
    let translator = Translator::new(&catalog);
    let mut store = LanguageStore::new(MemoryStore::new());

    assert_eq!(store.language(), Language::English);
    assert_eq!(translator.t(&store, "greeting"), "Hello");
    assert_eq!(translator.t(&store, "unknown_key"), "unknown_key");

    store.dispatch(LanguageAction::SetLanguage(Language::Gujarati));
    assert_eq!(translator.t(&store, "greeting"), "નમસ્તે");
    assert_eq!(translator.t(&store, "unknown_key"), "unknown_key");
}

#[test]
fn test_every_bundled_key_resolves_after_switching() {
    let catalog = Catalog::bundled().expect("bundled dictionaries must parse");
    let translator = Translator::new(&catalog);
    let mut store = LanguageStore::new(MemoryStore::new());

    for language in Language::ALL {
        store.set_language(language);
        let dictionary = catalog.dictionary(language);
        for key in dictionary.keys() {
            assert_eq!(Some(translator.t(&store, key)), dictionary.get(key));
        }
    }
}

#[test]
fn test_language_change_persists_to_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings_path = dir.path().join("settings.toml");

    let mut store = LanguageStore::new(SettingsFile::new(&settings_path));
    store.set_language(Language::Gujarati);
    store.set_language(Language::Gujarati);

    let loaded: Config = config::load_from_path(&settings_path).expect("settings should exist");
    assert_eq!(loaded.language.as_deref(), Some("gu"));
    assert_eq!(
        store.storage().get(LANGUAGE_KEY).unwrap().as_deref(),
        Some("gu")
    );

    // Next start-up picks the preference back up
    let restored = LanguageStore::restore(SettingsFile::new(&settings_path));
    assert_eq!(restored.language(), Language::Gujarati);
}

#[test]
fn test_i18n_uses_persisted_preference_over_os_locale() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings_path = dir.path().join("settings.toml");
    config::save_to_path(
        &Config {
            language: Some("gu".to_string()),
            ..Config::default()
        },
        &settings_path,
    )
    .expect("Failed to write settings");

    let mut i18n = I18n::with_catalog(greeting_catalog(), None, SettingsFile::new(&settings_path));
    assert_eq!(i18n.current_language(), Language::Gujarati);
    assert_eq!(i18n.tr("greeting"), "નમસ્તે");

    i18n.set_language(Language::English);
    let reloaded = config::load_from_path(&settings_path).expect("reload");
    assert_eq!(reloaded.language.as_deref(), Some("en"));
}

#[test]
fn test_i18n_new_loads_bundled_catalog() {
    let i18n = I18n::new(Some("en".to_string()), MemoryStore::new()).expect("bundled catalog");
    assert_eq!(i18n.tr("greeting"), "Hello");
    assert_eq!(i18n.tr("not-a-key"), "not-a-key");
}
