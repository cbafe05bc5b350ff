pub mod engine;
pub mod global;
pub mod parser;
pub mod types;

pub use engine::{
    AdjacentSounds, ClassCache, Classifier, ConjugationError, Conjugator, Coverage,
    ExceptionDictionary, LanguageTables, LoadError, PhonologicalAdjuster, RewriteRule, RuleTable,
    StemMutation, compute_suggestions, declared_parameters, is_declared,
};
pub use types::{
    ConjugatedForm, GrammaticalParameters, Language, Lemma, Mood, Number, ParadigmClass, Person,
    Provenance, Slot, StemShape, Tense, Transformation,
};
