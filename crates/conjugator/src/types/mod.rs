mod form;
mod grammar;
mod language;
mod lemma;
mod paradigm;
mod transformation;

pub use form::{ConjugatedForm, Provenance};
pub use grammar::{GrammaticalParameters, Mood, Number, Person, Slot, Tense, UnknownKeyword};
pub use language::Language;
pub use lemma::Lemma;
pub use paradigm::{ParadigmClass, StemShape};
pub use transformation::Transformation;
