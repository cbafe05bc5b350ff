//! Process-wide conjugator holding the bundled tables.
//!
//! Provides shared access to a `Conjugator` without threading one through
//! every call site. The tables are loaded on first use and never change.

use std::sync::LazyLock;

use tracing::error;

use crate::{ConjugatedForm, Conjugator, GrammaticalParameters, Lemma};

static GLOBAL_CONJUGATOR: LazyLock<Conjugator> = LazyLock::new(|| {
    Conjugator::with_bundled_tables().unwrap_or_else(|e| {
        error!("bundled conjugation tables failed to load: {e}");
        Conjugator::new()
    })
});

/// The shared conjugator.
pub fn conjugator() -> &'static Conjugator {
    &GLOBAL_CONJUGATOR
}

/// Conjugates with the shared conjugator.
///
/// ```
/// use conjugator::{Language, Lemma, global};
///
/// let params = "present.indicative.3sg".parse().unwrap();
/// let form = global::conjugate(&Lemma::new("être", Language::French), params);
/// assert_eq!(form.surface, "est");
/// ```
pub fn conjugate(lemma: &Lemma, parameters: GrammaticalParameters) -> ConjugatedForm {
    GLOBAL_CONJUGATOR.conjugate(lemma, parameters)
}

/// Full paradigm from the shared conjugator.
pub fn conjugate_all(lemma: &Lemma) -> Vec<ConjugatedForm> {
    GLOBAL_CONJUGATOR.conjugate_all(lemma)
}
