use std::fmt;
use std::str::FromStr;

use icu_locale_core::LanguageIdentifier;
use serde::{Deserialize, Serialize};

use crate::engine::{ConjugationError, compute_suggestions};

/// A language the engine knows how to conjugate.
///
/// Languages are identified in table files and on the command line by their
/// ISO 639 code: `fr` for French, `swb` for Shimaoré and `buc` for Kibouchi.
///
/// # Example
///
/// ```
/// use conjugator::Language;
///
/// assert_eq!("Shimaoré".parse::<Language>().unwrap(), Language::Shimaore);
/// assert_eq!("fr-YT".parse::<Language>().unwrap(), Language::French);
/// assert!("German".parse::<Language>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    French,
    Shimaore,
    Kibouchi,
}

/// Names accepted for each language, compared after lowercasing.
const NAMES: &[(&str, Language)] = &[
    ("french", Language::French),
    ("français", Language::French),
    ("francais", Language::French),
    ("shimaoré", Language::Shimaore),
    ("shimaore", Language::Shimaore),
    ("shimaorais", Language::Shimaore),
    ("kibouchi", Language::Kibouchi),
    ("kibushi", Language::Kibouchi),
];

impl Language {
    /// All supported languages, in declaration order.
    pub const ALL: [Language; 3] = [Language::French, Language::Shimaore, Language::Kibouchi];

    /// ISO 639 code for this language.
    pub fn code(self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::Shimaore => "swb",
            Language::Kibouchi => "buc",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Language::French => "French",
            Language::Shimaore => "Shimaoré",
            Language::Kibouchi => "Kibouchi",
        }
    }

    /// Look up a language by its ISO 639 code.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl FromStr for Language {
    type Err = ConjugationError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let folded = tag.trim().to_lowercase();
        if let Some((_, lang)) = NAMES.iter().find(|(name, _)| *name == folded) {
            return Ok(*lang);
        }
        let identifier = folded.parse::<LanguageIdentifier>().ok();
        if let Some(lang) = identifier.and_then(|id| Language::from_code(id.language.as_str())) {
            return Ok(lang);
        }

        let mut candidates: Vec<String> = NAMES.iter().map(|(name, _)| name.to_string()).collect();
        candidates.extend(Language::ALL.iter().map(|lang| lang.code().to_string()));
        Err(ConjugationError::InvalidLanguage {
            tag: tag.to_string(),
            suggestions: compute_suggestions(&folded, &candidates),
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
