use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{GrammaticalParameters, Language};

/// Where a conjugated form came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// A verb-specific entry in the exception dictionary.
    Exception,
    /// A rule-table transformation, after phonological adjustment.
    Rule,
    /// Nothing applied; the lemma is echoed verbatim.
    Fallback,
}

impl Provenance {
    pub fn as_str(self) -> &'static str {
        match self {
            Provenance::Exception => "exception",
            Provenance::Rule => "rule",
            Provenance::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A computed verb form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugatedForm {
    pub lemma: String,
    pub language: Language,
    pub parameters: GrammaticalParameters,
    pub surface: String,
    pub provenance: Provenance,
}

impl ConjugatedForm {
    /// True unless the form is a verbatim fallback echo.
    pub fn is_conjugated(&self) -> bool {
        self.provenance != Provenance::Fallback
    }
}

impl fmt::Display for ConjugatedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.surface)
    }
}
