//! Rule table mapping (class, parameters) to transformations.

use std::collections::HashMap;

use crate::types::{GrammaticalParameters, ParadigmClass, Transformation};

/// Per-language rule table.
///
/// Coverage is allowed to be partial: a missing entry is a normal `None`
/// result, which the conjugator turns into a fallback form.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: HashMap<String, HashMap<GrammaticalParameters, Transformation>>,
    len: usize,
}

/// Which declared parameter tuples a class has rules for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    pub class: String,
    pub covered: usize,
    pub missing: Vec<GrammaticalParameters>,
}

impl Coverage {
    pub fn total(&self) -> usize {
        self.covered + self.missing.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. Returns false, leaving the table unchanged, if a rule for
    /// the same class and parameters already exists.
    pub fn insert(
        &mut self,
        class: impl Into<String>,
        parameters: GrammaticalParameters,
        transformation: Transformation,
    ) -> bool {
        let by_params = self.rules.entry(class.into()).or_default();
        if by_params.contains_key(&parameters) {
            return false;
        }
        by_params.insert(parameters, transformation);
        self.len += 1;
        true
    }

    /// Find the rule for a class and parameter tuple.
    ///
    /// Always `None` for [`ParadigmClass::Unclassified`].
    pub fn lookup(
        &self,
        class: &ParadigmClass,
        parameters: &GrammaticalParameters,
    ) -> Option<&Transformation> {
        self.rules.get(class.name()?)?.get(parameters)
    }

    /// Report which of `declared` a class covers.
    pub fn coverage(&self, class: &str, declared: &[GrammaticalParameters]) -> Coverage {
        let by_params = self.rules.get(class);
        let missing: Vec<GrammaticalParameters> = declared
            .iter()
            .filter(|params| by_params.is_none_or(|rules| !rules.contains_key(*params)))
            .copied()
            .collect();
        Coverage {
            class: class.to_string(),
            covered: declared.len() - missing.len(),
            missing,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mood, Number, Person, Tense};

    fn params(person: Person, number: Number) -> GrammaticalParameters {
        GrammaticalParameters::new(Tense::Present, Mood::Indicative, person, number)
    }

    #[test]
    fn unclassified_never_has_rules() {
        let mut table = RuleTable::new();
        table.insert(
            "er",
            params(Person::First, Number::Singular),
            Transformation::suffix("e"),
        );
        assert!(
            table
                .lookup(
                    &ParadigmClass::Unclassified,
                    &params(Person::First, Number::Singular)
                )
                .is_none()
        );
    }

    #[test]
    fn duplicate_rule_is_rejected() {
        let mut table = RuleTable::new();
        let p = params(Person::First, Number::Singular);
        assert!(table.insert("er", p, Transformation::suffix("e")));
        assert!(!table.insert("er", p, Transformation::suffix("x")));
        assert_eq!(
            table.lookup(&ParadigmClass::named("er"), &p),
            Some(&Transformation::suffix("e"))
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn coverage_lists_missing_tuples_in_declared_order() {
        let mut table = RuleTable::new();
        table.insert(
            "er",
            params(Person::First, Number::Singular),
            Transformation::suffix("e"),
        );
        let declared = [
            params(Person::First, Number::Singular),
            params(Person::Second, Number::Singular),
            params(Person::First, Number::Plural),
        ];
        let coverage = table.coverage("er", &declared);
        assert_eq!(coverage.covered, 1);
        assert_eq!(coverage.missing, declared[1..].to_vec());
        assert_eq!(table.coverage("ir", &declared).covered, 0);
    }
}
