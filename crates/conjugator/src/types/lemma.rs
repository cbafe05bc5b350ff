use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use crate::engine::ConjugationError;
use crate::types::{Language, ParadigmClass};

/// The canonical, uninflected form of a verb in one language.
///
/// A lemma's paradigm class is resolved the first time a conjugator needs it
/// and cached on the lemma, stamped with the generation of the tables that
/// produced it. Tables from another load or another conjugator ignore the
/// stamped class and classify afresh.
///
/// # Example
///
/// ```
/// use conjugator::{Language, Lemma};
///
/// let lemma = Lemma::new("parler", Language::French);
/// assert_eq!(lemma.text(), "parler");
/// assert!(lemma.cached_class().is_none());
///
/// assert!(Lemma::parse("sprechen", "German").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Lemma {
    text: String,
    language: Language,
    paradigm_class: OnceLock<(u64, ParadigmClass)>,
}

impl Lemma {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
            paradigm_class: OnceLock::new(),
        }
    }

    /// Create a lemma from a caller-supplied language tag.
    pub fn parse(text: impl Into<String>, language_tag: &str) -> Result<Self, ConjugationError> {
        Ok(Self::new(text, language_tag.parse()?))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The paradigm class, if it has been resolved already.
    pub fn cached_class(&self) -> Option<&ParadigmClass> {
        self.paradigm_class.get().map(|(_, class)| class)
    }

    /// The paradigm class under the tables of `generation`.
    ///
    /// The first resolution is cached on the lemma. A class cached under a
    /// different generation is never returned; `classify` runs instead.
    pub(crate) fn class_for(
        &self,
        generation: u64,
        classify: impl FnOnce() -> ParadigmClass,
    ) -> Cow<'_, ParadigmClass> {
        let mut classify = Some(classify);
        let (cached_generation, class) = self.paradigm_class.get_or_init(|| {
            let class = classify.take().map_or(ParadigmClass::Unclassified, |f| f());
            (generation, class)
        });
        match classify {
            Some(classify) if *cached_generation != generation => Cow::Owned(classify()),
            _ => Cow::Borrowed(class),
        }
    }
}

/// Lemmas are equal when text and language match; the cached class is derived.
impl PartialEq for Lemma {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.language == other.language
    }
}

impl Eq for Lemma {}

impl fmt::Display for Lemma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.language.code())
    }
}
