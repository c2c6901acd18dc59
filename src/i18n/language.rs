// SPDX-License-Identifier: MPL-2.0
//! The closed set of supported UI languages.

use crate::error::{Error, Result};
use enum_map::Enum;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Supported application languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Enum)]
pub enum Language {
    #[default]
    English,
    Gujarati,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Gujarati];

    /// Short code used for persistence and asset file names.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Gujarati => "gu",
        }
    }

    /// Name of the language written in that language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Gujarati => "ગુજરાતી",
        }
    }

    pub fn langid(&self) -> Result<LanguageIdentifier> {
        self.code()
            .parse()
            .map_err(|err| Error::Catalog(format!("invalid language id {}: {}", self.code(), err)))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Accepts bare codes and full locale tags (`gu-IN`, `en_US.UTF-8`),
    /// matching on the primary language subtag only.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        // POSIX locales carry an encoding suffix and use '_' between subtags
        let tag = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('_', "-");
        let langid: LanguageIdentifier = tag
            .parse()
            .map_err(|_| Error::UnsupportedLanguage(trimmed.to_string()))?;
        let primary = langid.language.as_str();

        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(primary))
            .ok_or_else(|| Error::UnsupportedLanguage(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::default().code(), "en");
    }

    #[test]
    fn parses_bare_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("gu".parse::<Language>().unwrap(), Language::Gujarati);
    }

    #[test]
    fn parses_region_tags_and_case() {
        assert_eq!("gu-IN".parse::<Language>().unwrap(), Language::Gujarati);
        assert_eq!("EN-us".parse::<Language>().unwrap(), Language::English);
        assert_eq!("en_US.UTF-8".parse::<Language>().unwrap(), Language::English);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(
            "fr".parse::<Language>(),
            Err(Error::UnsupportedLanguage("fr".to_string()))
        );
        assert!("".parse::<Language>().is_err());
        assert!("not a tag!".parse::<Language>().is_err());
    }

    #[test]
    fn code_round_trips_through_parse() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn display_uses_native_name() {
        assert_eq!(Language::Gujarati.to_string(), "ગુજરાતી");
    }
}
