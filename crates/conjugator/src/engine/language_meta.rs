//! Language-specific metadata: which parameter tuples each language supports.
//!
//! French inflects for tense and mood; Shimaoré and Kibouchi mark aspect
//! (present, past, future) and have no subjunctive or conditional. The
//! imperative only exists for the persons a command can address.

use crate::types::{GrammaticalParameters, Language, Mood, Number, Person, Tense};

const ALL_SLOTS: &[(Person, Number)] = &[
    (Person::First, Number::Singular),
    (Person::Second, Number::Singular),
    (Person::Third, Number::Singular),
    (Person::First, Number::Plural),
    (Person::Second, Number::Plural),
    (Person::Third, Number::Plural),
];

const FRENCH_IMPERATIVE: &[(Person, Number)] = &[
    (Person::Second, Number::Singular),
    (Person::First, Number::Plural),
    (Person::Second, Number::Plural),
];

const SHIMAORE_IMPERATIVE: &[(Person, Number)] = &[
    (Person::Second, Number::Singular),
    (Person::Second, Number::Plural),
];

type TenseMood = (Tense, Mood, &'static [(Person, Number)]);

/// Tense/mood combinations and the person/number slots each one supports.
pub fn tense_moods(language: Language) -> &'static [TenseMood] {
    match language {
        Language::French => &[
            (Tense::Present, Mood::Indicative, ALL_SLOTS),
            (Tense::Present, Mood::Conditional, ALL_SLOTS),
            (Tense::Present, Mood::Subjunctive, ALL_SLOTS),
            (Tense::Present, Mood::Imperative, FRENCH_IMPERATIVE),
            (Tense::Imperfect, Mood::Indicative, ALL_SLOTS),
            (Tense::Future, Mood::Indicative, ALL_SLOTS),
        ],
        Language::Shimaore => &[
            (Tense::Present, Mood::Indicative, ALL_SLOTS),
            (Tense::Present, Mood::Imperative, SHIMAORE_IMPERATIVE),
            (Tense::Past, Mood::Indicative, ALL_SLOTS),
            (Tense::Future, Mood::Indicative, ALL_SLOTS),
        ],
        Language::Kibouchi => &[
            (Tense::Present, Mood::Indicative, ALL_SLOTS),
            (Tense::Past, Mood::Indicative, ALL_SLOTS),
            (Tense::Future, Mood::Indicative, ALL_SLOTS),
        ],
    }
}

/// Every supported parameter tuple for a language, in canonical order
/// (tense, then mood, then number, then person).
///
/// The order depends only on the enum declarations, never on table contents.
///
/// ```
/// use conjugator::{Language, declared_parameters};
///
/// let french = declared_parameters(Language::French);
/// assert_eq!(french.len(), 33);
/// assert_eq!(french[0].to_string(), "present.indicative.1sg");
/// assert!(french.windows(2).all(|w| w[0] < w[1]));
/// ```
pub fn declared_parameters(language: Language) -> Vec<GrammaticalParameters> {
    let mut params: Vec<GrammaticalParameters> = tense_moods(language)
        .iter()
        .flat_map(|(tense, mood, slots)| {
            slots.iter().map(|(person, number)| {
                GrammaticalParameters::new(*tense, *mood, *person, *number)
            })
        })
        .collect();
    params.sort_unstable();
    params
}

/// True if `parameters` is one of the language's declared tuples.
pub fn is_declared(language: Language, parameters: &GrammaticalParameters) -> bool {
    tense_moods(language).iter().any(|(tense, mood, slots)| {
        *tense == parameters.tense
            && *mood == parameters.mood
            && slots.contains(&(parameters.person, parameters.number))
    })
}
