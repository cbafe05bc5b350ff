use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tense or aspect of a verb form.
///
/// Declaration order is the canonical enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    /// Perfective past (Shimaoré and Kibouchi).
    Past,
    Imperfect,
    Future,
}

/// Grammatical mood of a verb form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Indicative,
    Conditional,
    Subjunctive,
    Imperative,
}

/// Grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
}

/// The grammatical parameters selecting one inflected form.
///
/// Field order defines the canonical ordering: tense first, then mood, then
/// number, then person. `conjugate_all` relies on this to produce stable
/// output.
///
/// # Example
///
/// ```
/// use conjugator::{GrammaticalParameters, Mood, Number, Person, Tense};
///
/// let params = GrammaticalParameters::new(Tense::Present, Mood::Indicative, Person::First, Number::Singular);
/// assert_eq!(params.to_string(), "present.indicative.1sg");
/// assert_eq!("present.indicative.1sg".parse::<GrammaticalParameters>().unwrap(), params);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GrammaticalParameters {
    pub tense: Tense,
    pub mood: Mood,
    pub number: Number,
    pub person: Person,
}

impl GrammaticalParameters {
    pub fn new(tense: Tense, mood: Mood, person: Person, number: Number) -> Self {
        Self {
            tense,
            mood,
            number,
            person,
        }
    }

    /// The person/number slot, written as in table files (`1sg` .. `3pl`).
    pub fn slot(&self) -> Slot {
        Slot {
            person: self.person,
            number: self.number,
        }
    }
}

/// A person/number pair, written `1sg`, `2sg`, `3sg`, `1pl`, `2pl` or `3pl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub person: Person,
    pub number: Number,
}

/// Error returned when a grammatical keyword is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownKeyword {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownKeyword {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl Tense {
    pub fn as_str(self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Past => "past",
            Tense::Imperfect => "imperfect",
            Tense::Future => "future",
        }
    }
}

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Indicative => "indicative",
            Mood::Conditional => "conditional",
            Mood::Subjunctive => "subjunctive",
            Mood::Imperative => "imperative",
        }
    }
}

impl Person {
    pub fn as_str(self) -> &'static str {
        match self {
            Person::First => "1",
            Person::Second => "2",
            Person::Third => "3",
        }
    }
}

impl Number {
    pub fn as_str(self) -> &'static str {
        match self {
            Number::Singular => "sg",
            Number::Plural => "pl",
        }
    }
}

impl FromStr for Tense {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Tense::Present),
            "past" => Ok(Tense::Past),
            "imperfect" => Ok(Tense::Imperfect),
            "future" => Ok(Tense::Future),
            _ => Err(UnknownKeyword::new("tense", s)),
        }
    }
}

impl FromStr for Mood {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "indicative" => Ok(Mood::Indicative),
            "conditional" => Ok(Mood::Conditional),
            "subjunctive" => Ok(Mood::Subjunctive),
            "imperative" => Ok(Mood::Imperative),
            _ => Err(UnknownKeyword::new("mood", s)),
        }
    }
}

impl FromStr for Person {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "first" => Ok(Person::First),
            "2" | "second" => Ok(Person::Second),
            "3" | "third" => Ok(Person::Third),
            _ => Err(UnknownKeyword::new("person", s)),
        }
    }
}

impl FromStr for Number {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sg" | "singular" => Ok(Number::Singular),
            "pl" | "plural" => Ok(Number::Plural),
            _ => Err(UnknownKeyword::new("number", s)),
        }
    }
}

impl FromStr for Slot {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(split) = s.char_indices().nth(1).map(|(i, _)| i) else {
            return Err(UnknownKeyword::new("person/number slot", s));
        };
        let (person, number) = s.split_at(split);
        match (person.parse(), number.parse()) {
            (Ok(person), Ok(number)) => Ok(Slot { person, number }),
            _ => Err(UnknownKeyword::new("person/number slot", s)),
        }
    }
}

/// Parses `tense.mood.slot`, e.g. `future.indicative.3pl`.
impl FromStr for GrammaticalParameters {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(tense), Some(mood), Some(slot), None) => {
                let slot: Slot = slot.parse()?;
                Ok(GrammaticalParameters::new(
                    tense.parse()?,
                    mood.parse()?,
                    slot.person,
                    slot.number,
                ))
            }
            _ => Err(UnknownKeyword::new("parameter tuple", s)),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.person.as_str(), self.number.as_str())
    }
}

impl fmt::Display for GrammaticalParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.tense.as_str(),
            self.mood.as_str(),
            self.slot()
        )
    }
}
