//! Conjugation engine.
//!
//! This module turns parsed table files into per-language lookup structures
//! and resolves conjugation requests against them: exceptions first, then
//! classification and rule application with phonological adjustment, then a
//! verbatim fallback.

mod cache;
mod classifier;
mod conjugator;
mod error;
mod exceptions;
mod language_meta;
mod mutation;
mod phonology;
mod rules;
mod tables;

pub use cache::ClassCache;
pub use classifier::{ClassDeclaration, Classifier, EndingPattern};
pub use conjugator::{Conjugator, bundled_source};
pub use error::{ConjugationError, LoadError, compute_suggestions};
pub use exceptions::ExceptionDictionary;
pub use language_meta::{declared_parameters, is_declared, tense_moods};
pub use mutation::StemMutation;
pub use phonology::{AdjacentSounds, PhonologicalAdjuster, RewriteRule};
pub use rules::{Coverage, RuleTable};
pub use tables::LanguageTables;
