//! Verb-specific literal forms that take precedence over every rule.

use std::collections::HashMap;

use crate::types::GrammaticalParameters;

/// Per-language exception dictionary.
///
/// Entries are keyed by exact lemma text and parameter tuple. They do not take
/// part in classification: a lemma with exceptions still has a paradigm class
/// for the tuples the dictionary does not list.
///
/// # Example
///
/// ```
/// use conjugator::{ExceptionDictionary, GrammaticalParameters};
///
/// let mut exceptions = ExceptionDictionary::new();
/// let params: GrammaticalParameters = "present.indicative.3sg".parse().unwrap();
/// exceptions.insert("être", params, "est");
///
/// assert_eq!(exceptions.override_for("être", &params), Some("est"));
/// assert_eq!(exceptions.override_for("etre", &params), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExceptionDictionary {
    entries: HashMap<String, HashMap<GrammaticalParameters, String>>,
    len: usize,
}

impl ExceptionDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Returns false, leaving the dictionary unchanged, if the
    /// key already has a form.
    pub fn insert(
        &mut self,
        lemma: impl Into<String>,
        parameters: GrammaticalParameters,
        form: impl Into<String>,
    ) -> bool {
        let forms = self.entries.entry(lemma.into()).or_default();
        if forms.contains_key(&parameters) {
            return false;
        }
        forms.insert(parameters, form.into());
        self.len += 1;
        true
    }

    /// The literal form for this exact key, if any.
    pub fn override_for(&self, lemma: &str, parameters: &GrammaticalParameters) -> Option<&str> {
        self.entries
            .get(lemma)?
            .get(parameters)
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
