//! Error types for the conjugation engine.

use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

/// The single error a conjugation request can produce.
///
/// Every other problem (unknown lemma, missing rule, unusual text) resolves
/// to a fallback form instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConjugationError {
    /// The caller's language tag is not French, Shimaoré or Kibouchi.
    #[error("unsupported language '{tag}'{}", format_suggestions(suggestions))]
    InvalidLanguage {
        tag: String,
        suggestions: Vec<String>,
    },
}

/// Errors that occur while loading conjugation tables.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a table file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A definition refers to a paradigm class that was never declared.
    #[error("unknown class '{name}' in {context}{}", format_suggestions(suggestions))]
    UnknownClass {
        name: String,
        context: String,
        suggestions: Vec<String>,
    },

    /// A rule template names a stem mutation that does not exist.
    #[error("unknown stem mutation '{{{name}}}'{}", format_suggestions(suggestions))]
    UnknownMutation {
        name: String,
        suggestions: Vec<String>,
    },

    /// The same key is defined twice.
    #[error("duplicate {what} '{key}'")]
    Duplicate { what: &'static str, key: String },

    /// A template is not valid where it is used.
    #[error("invalid template for {context}: {message}")]
    InvalidTemplate { context: String, message: String },

    /// A rewrite pattern is malformed.
    #[error("invalid rewrite pattern \"{pattern}\": {message}")]
    InvalidRewrite { pattern: String, message: String },

    /// Attempted to reload tables that were loaded from a string.
    #[error("cannot reload '{language}': was loaded from string, not file")]
    NoPathForReload { language: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute typo suggestions for `name` among `available`.
///
/// Uses Levenshtein distance, allowing one edit for names of three
/// characters or fewer and two edits otherwise. Returns at most three
/// suggestions, closest first.
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            (dist <= max_distance && dist > 0).then_some((dist, candidate))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.dedup_by(|a, b| a.1 == b.1);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, s)| s.clone())
        .collect()
}
