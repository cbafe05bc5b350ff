//! Assembles parsed definitions into the tables of one language.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::engine::error::{LoadError, compute_suggestions};
use crate::engine::{
    Classifier, ExceptionDictionary, PhonologicalAdjuster, RewriteRule, RuleTable, StemMutation,
};
use crate::parser::{Definition, SlotEntry, Template};
use crate::types::{GrammaticalParameters, Mood, StemShape, Tense, Transformation};

/// Everything the conjugator needs for one language.
///
/// Built once from a table file and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct LanguageTables {
    classifier: Classifier,
    rules: RuleTable,
    phonology: PhonologicalAdjuster,
    exceptions: ExceptionDictionary,
    generation: u64,
}

/// Source of table generations. Zero is reserved for empty default tables.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

impl LanguageTables {
    /// Build tables from parsed definitions, validating cross references.
    ///
    /// Classes may be declared anywhere in the file; every other definition
    /// that names a class must name a declared one.
    pub fn from_definitions(definitions: &[Definition]) -> Result<Self, LoadError> {
        let mut tables = LanguageTables {
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
            ..LanguageTables::default()
        };

        for def in definitions {
            if let Definition::Class { name, shape } = def {
                let shape = stem_shape(name, shape)?;
                if !tables.classifier.declare_class(name.as_str(), shape) {
                    return Err(LoadError::Duplicate {
                        what: "class",
                        key: name.clone(),
                    });
                }
            }
        }

        for def in definitions {
            match def {
                Definition::Class { .. } => {}
                Definition::Irregular { lemma, class } => {
                    tables.check_class(class, || format!("irregular \"{lemma}\""))?;
                    if !tables.classifier.add_irregular(lemma.as_str(), class.as_str()) {
                        return Err(LoadError::Duplicate {
                            what: "irregular override",
                            key: lemma.clone(),
                        });
                    }
                }
                Definition::Ending { ending, class } => {
                    tables.check_class(class, || format!("ending \"{ending}\""))?;
                    if ending.is_empty() {
                        return Err(LoadError::InvalidTemplate {
                            context: format!("ending for class '{class}'"),
                            message: "ending must not be empty".to_string(),
                        });
                    }
                    if !tables.classifier.add_ending(ending.as_str(), class.as_str()) {
                        return Err(LoadError::Duplicate {
                            what: "ending",
                            key: ending.clone(),
                        });
                    }
                }
                Definition::Rules {
                    class,
                    tense,
                    mood,
                    entries,
                } => {
                    tables.check_class(class, || {
                        format!("rules for {}.{}", tense.as_str(), mood.as_str())
                    })?;
                    for (params, template) in expand_entries(*tense, *mood, entries) {
                        let transformation = transformation(template)?;
                        if !tables.rules.insert(class.as_str(), params, transformation) {
                            return Err(LoadError::Duplicate {
                                what: "rule",
                                key: format!("{class} {params}"),
                            });
                        }
                    }
                }
                Definition::Rewrite {
                    pattern,
                    replacement,
                } => {
                    let rule = RewriteRule::parse(pattern, replacement).map_err(|message| {
                        LoadError::InvalidRewrite {
                            pattern: pattern.clone(),
                            message,
                        }
                    })?;
                    tables.phonology.push(rule);
                }
                Definition::Exception {
                    lemma,
                    tense,
                    mood,
                    entries,
                } => {
                    for (params, template) in expand_entries(*tense, *mood, entries) {
                        let Template::Literal(form) = template else {
                            return Err(LoadError::InvalidTemplate {
                                context: format!("exception \"{lemma}\" {params}"),
                                message: "exception forms are literal and cannot contain a stem hole"
                                    .to_string(),
                            });
                        };
                        if !tables.exceptions.insert(lemma.as_str(), params, form.as_str()) {
                            return Err(LoadError::Duplicate {
                                what: "exception",
                                key: format!("\"{lemma}\" {params}"),
                            });
                        }
                    }
                }
            }
        }

        Ok(tables)
    }

    fn check_class(&self, name: &str, context: impl FnOnce() -> String) -> Result<(), LoadError> {
        if self.classifier.has_class(name) {
            return Ok(());
        }
        Err(LoadError::UnknownClass {
            name: name.to_string(),
            context: context(),
            suggestions: compute_suggestions(name, &self.classifier.class_names()),
        })
    }

    /// Identifies this build of the tables. Every successful load gets a new
    /// generation, so classifications cached against older tables can be
    /// told apart.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn phonology(&self) -> &PhonologicalAdjuster {
        &self.phonology
    }

    pub fn exceptions(&self) -> &ExceptionDictionary {
        &self.exceptions
    }
}

/// Expand `1sg, 3sg: "..."` entries into one item per parameter tuple.
fn expand_entries(
    tense: Tense,
    mood: Mood,
    entries: &[SlotEntry],
) -> impl Iterator<Item = (GrammaticalParameters, &Template)> {
    entries.iter().flat_map(move |entry| {
        entry.slots.iter().map(move |slot| {
            (
                GrammaticalParameters::new(tense, mood, slot.person, slot.number),
                &entry.template,
            )
        })
    })
}

fn stem_shape(class: &str, template: &Template) -> Result<StemShape, LoadError> {
    match template {
        Template::Affixed {
            prefix,
            mutation: None,
            suffix,
        } => Ok(StemShape::new(prefix.as_str(), suffix.as_str())),
        Template::Affixed {
            mutation: Some(_), ..
        } => Err(LoadError::InvalidTemplate {
            context: format!("class '{class}'"),
            message: "a stem shape cannot name a mutation".to_string(),
        }),
        Template::Literal(_) => Err(LoadError::InvalidTemplate {
            context: format!("class '{class}'"),
            message: "a stem shape needs a '{}' hole".to_string(),
        }),
    }
}

fn transformation(template: &Template) -> Result<Transformation, LoadError> {
    match template {
        Template::Literal(text) => Ok(Transformation::Replace(text.clone())),
        Template::Affixed {
            prefix,
            mutation: None,
            suffix,
        } => Ok(Transformation::Append {
            prefix: prefix.clone(),
            suffix: suffix.clone(),
        }),
        Template::Affixed {
            prefix,
            mutation: Some(name),
            suffix,
        } => {
            let mutation = StemMutation::from_name(name).ok_or_else(|| {
                let names: Vec<String> = StemMutation::ALL
                    .iter()
                    .map(|m| m.name().to_string())
                    .collect();
                LoadError::UnknownMutation {
                    name: name.clone(),
                    suggestions: compute_suggestions(name, &names),
                }
            })?;
            Ok(Transformation::Mutate {
                mutation,
                prefix: prefix.clone(),
                suffix: suffix.clone(),
            })
        }
    }
}
