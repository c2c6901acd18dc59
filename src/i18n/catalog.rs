// SPDX-License-Identifier: MPL-2.0
//! Static per-language dictionaries.
//!
//! Dictionaries are bundled as Fluent `.ftl` files under `assets/i18n/`,
//! one file per language code, and flattened into plain key/string maps at
//! load time. A [`Catalog`] is total over [`Language`]: every language owns a
//! dictionary, possibly empty, so lookups never fail on the language side.

use super::Language;
use crate::error::{Error, Result};
use enum_map::EnumMap;
use fluent_bundle::{FluentBundle, FluentResource};
use fluent_syntax::ast;
use rust_embed::RustEmbed;
use std::collections::{BTreeSet, HashMap};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Immutable key to display-string mapping for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses Fluent source into a flat dictionary.
    ///
    /// Messages without a value (attribute-only) are skipped. Messages with
    /// placeables are formatted without arguments.
    pub fn from_ftl(language: Language, source: &str) -> Result<Self> {
        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            Error::Catalog(format!(
                "{} dictionary has {} syntax error(s)",
                language.code(),
                errors.len()
            ))
        })?;

        let ids: Vec<String> = resource
            .entries()
            .filter_map(|entry| match entry {
                ast::Entry::Message(message) => Some(message.id.name.to_string()),
                _ => None,
            })
            .collect();

        let mut bundle = FluentBundle::new(vec![language.langid()?]);
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            Error::Catalog(format!(
                "{} dictionary has {} duplicate or invalid message(s)",
                language.code(),
                errors.len()
            ))
        })?;

        let mut entries = HashMap::with_capacity(ids.len());
        for id in ids {
            let Some(pattern) = bundle.get_message(&id).and_then(|msg| msg.value()) else {
                continue;
            };
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, None, &mut errors);
            if !errors.is_empty() {
                log::debug!(
                    "{} message {} formatted with {} error(s)",
                    language.code(),
                    id,
                    errors.len()
                );
            }
            entries.insert(id, value.into_owned());
        }

        Ok(Self { entries })
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Dictionaries for every supported language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    dictionaries: EnumMap<Language, Dictionary>,
}

impl Catalog {
    /// Loads the dictionaries embedded from `assets/i18n/`.
    ///
    /// Files named after an unsupported code are skipped. Languages without
    /// a file keep an empty dictionary.
    pub fn bundled() -> Result<Self> {
        let mut catalog = Self::default();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(code) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let language = match code.parse::<Language>() {
                Ok(language) => language,
                Err(err) => {
                    log::warn!("Skipping dictionary {}: {}", filename, err);
                    continue;
                }
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref());
                catalog.dictionaries[language] = Dictionary::from_ftl(language, &source)?;
            }
        }

        for language in Language::ALL {
            let missing = catalog.missing_keys(language);
            if !missing.is_empty() {
                log::warn!(
                    "{} dictionary lacks {} key(s) present elsewhere: {:?}",
                    language.code(),
                    missing.len(),
                    missing
                );
            }
        }

        Ok(catalog)
    }

    /// Builds a catalog from in-memory key/value pairs per language.
    pub fn from_entries<I, D>(dictionaries: I) -> Self
    where
        I: IntoIterator<Item = (Language, D)>,
        D: Into<Dictionary>,
    {
        let mut catalog = Self::default();
        for (language, dictionary) in dictionaries {
            catalog.dictionaries[language] = dictionary.into();
        }
        catalog
    }

    pub fn dictionary(&self, language: Language) -> &Dictionary {
        &self.dictionaries[language]
    }

    /// Keys present in some other language but absent from `language`.
    ///
    /// Key-set parity across languages is reported, not enforced.
    pub fn missing_keys(&self, language: Language) -> BTreeSet<&str> {
        let own = self.dictionary(language);
        self.dictionaries
            .iter()
            .filter(|(other, _)| *other != language)
            .flat_map(|(_, dictionary)| dictionary.keys())
            .filter(|key| !own.contains_key(key))
            .collect()
    }
}
