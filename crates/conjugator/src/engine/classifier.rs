//! Assigns lemmas to paradigm classes.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::types::{ParadigmClass, StemShape};

/// An ending pattern and the class it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndingPattern {
    pub ending: String,
    pub class: String,
    /// Length in grapheme clusters; longer patterns are tried first.
    specificity: usize,
}

/// A declared paradigm class and its stem shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub name: String,
    pub shape: StemShape,
}

/// Per-language lemma classifier.
///
/// Resolution order:
/// 1. Exact match in the irregular override table
/// 2. Ending patterns, longest first (ties keep declaration order)
/// 3. [`ParadigmClass::Unclassified`]
///
/// Because patterns are kept sorted by specificity, adding a pattern never
/// changes the class of a lemma already matched by a longer pattern.
///
/// # Example
///
/// ```
/// use conjugator::{Classifier, ParadigmClass, StemShape};
///
/// let mut classifier = Classifier::new();
/// classifier.declare_class("er_regular", StemShape::new("", "er"));
/// classifier.declare_class("ir_regular", StemShape::new("", "ir"));
/// classifier.add_ending("er", "er_regular");
/// classifier.add_ending("ir", "ir_regular");
///
/// assert_eq!(classifier.classify("parler"), ParadigmClass::named("er_regular"));
/// assert_eq!(classifier.classify("xyzabc"), ParadigmClass::Unclassified);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    classes: Vec<ClassDeclaration>,
    class_index: HashMap<String, usize>,
    irregular: HashMap<String, String>,
    endings: Vec<EndingPattern>,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a class. Returns false if the name was already declared.
    pub fn declare_class(&mut self, name: impl Into<String>, shape: StemShape) -> bool {
        let name = name.into();
        if self.class_index.contains_key(&name) {
            return false;
        }
        self.class_index.insert(name.clone(), self.classes.len());
        self.classes.push(ClassDeclaration { name, shape });
        true
    }

    /// Map a lemma to a class regardless of its ending. Returns false if the
    /// lemma already had an override.
    pub fn add_irregular(&mut self, lemma: impl Into<String>, class: impl Into<String>) -> bool {
        let lemma = lemma.into();
        if self.irregular.contains_key(&lemma) {
            return false;
        }
        self.irregular.insert(lemma, class.into());
        true
    }

    /// Add an ending pattern. Returns false if the ending was already present.
    pub fn add_ending(&mut self, ending: impl Into<String>, class: impl Into<String>) -> bool {
        let ending = ending.into();
        if ending.is_empty() || self.endings.iter().any(|p| p.ending == ending) {
            return false;
        }
        let specificity = ending.graphemes(true).count();
        // Insert after every pattern at least as specific, keeping ties in
        // declaration order.
        let position = self
            .endings
            .partition_point(|p| p.specificity >= specificity);
        self.endings.insert(
            position,
            EndingPattern {
                ending,
                class: class.into(),
                specificity,
            },
        );
        true
    }

    /// Classify a lemma. Never fails.
    pub fn classify(&self, lemma: &str) -> ParadigmClass {
        if let Some(class) = self.irregular.get(lemma) {
            return ParadigmClass::named(class.as_str());
        }
        self.endings
            .iter()
            .find(|p| lemma.ends_with(p.ending.as_str()))
            .map_or(ParadigmClass::Unclassified, |p| {
                ParadigmClass::named(p.class.as_str())
            })
    }

    /// Stem shape of a declared class.
    pub fn shape(&self, class: &ParadigmClass) -> Option<&StemShape> {
        let index = *self.class_index.get(class.name()?)?;
        Some(&self.classes[index].shape)
    }

    /// Extract the stem of `lemma` for `class`; unknown classes keep the
    /// whole lemma.
    pub fn stem<'a>(&self, class: &ParadigmClass, lemma: &'a str) -> &'a str {
        self.shape(class).map_or(lemma, |shape| shape.stem(lemma))
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.class_index.contains_key(name)
    }

    /// Declared classes, in declaration order.
    pub fn classes(&self) -> &[ClassDeclaration] {
        &self.classes
    }

    pub fn class_names(&self) -> Vec<String> {
        self.classes.iter().map(|c| c.name.clone()).collect()
    }

    /// Ending patterns in evaluation order.
    pub fn endings(&self) -> &[EndingPattern] {
        &self.endings
    }

    pub fn irregular_count(&self) -> usize {
        self.irregular.len()
    }
}
