use std::fmt;

use serde::{Deserialize, Serialize};

/// A conjugation pattern shared by a group of verbs.
///
/// Every lemma resolves to exactly one class per language. Lemmas that no
/// ending pattern or irregular override recognizes resolve to
/// [`ParadigmClass::Unclassified`], for which the rule table never has rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParadigmClass {
    /// A class declared in the language's table file (e.g. `er_regular`, `etre`).
    Named(String),
    /// Reserved class for verbs the classifier cannot place.
    Unclassified,
}

impl ParadigmClass {
    pub fn named(name: impl Into<String>) -> Self {
        ParadigmClass::Named(name.into())
    }

    /// The class name, or `None` for [`ParadigmClass::Unclassified`].
    pub fn name(&self) -> Option<&str> {
        match self {
            ParadigmClass::Named(name) => Some(name),
            ParadigmClass::Unclassified => None,
        }
    }

    pub fn is_unclassified(&self) -> bool {
        matches!(self, ParadigmClass::Unclassified)
    }
}

impl fmt::Display for ParadigmClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParadigmClass::Named(name) => f.write_str(name),
            ParadigmClass::Unclassified => f.write_str("unclassified"),
        }
    }
}

/// How a class extracts the stem from a lemma.
///
/// Written in table files as a template with a single `{}` hole: `"{}er"`
/// strips a trailing `er`, `"u{}"` strips a leading `u`, `"{}"` keeps the
/// lemma whole.
///
/// ```
/// use conjugator::StemShape;
///
/// let shape = StemShape::new("u", "");
/// assert_eq!(shape.stem("usoma"), "soma");
/// // Lemmas that don't fit the shape keep their full text.
/// assert_eq!(shape.stem("soma"), "soma");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StemShape {
    prefix: String,
    suffix: String,
}

impl StemShape {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Extract the stem of `lemma`.
    pub fn stem<'a>(&self, lemma: &'a str) -> &'a str {
        if lemma.len() < self.prefix.len() + self.suffix.len() {
            return lemma;
        }
        lemma
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_suffix(self.suffix.as_str()))
            .unwrap_or(lemma)
    }
}

impl fmt::Display for StemShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}{{}}{}\"", self.prefix, self.suffix)
    }
}
