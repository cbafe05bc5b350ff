use crate::engine::{AdjacentSounds, StemMutation};

/// What a rule does to a lemma's stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformation {
    /// Stem with a prefix and/or suffix attached.
    Append { prefix: String, suffix: String },
    /// Stem rewritten by a [`StemMutation`], then affixed.
    Mutate {
        mutation: StemMutation,
        prefix: String,
        suffix: String,
    },
    /// A literal form that ignores the stem.
    Replace(String),
}

impl Transformation {
    pub fn suffix(suffix: impl Into<String>) -> Self {
        Transformation::Append {
            prefix: String::new(),
            suffix: suffix.into(),
        }
    }

    /// Build the raw form and the morpheme boundaries inside it.
    ///
    /// The raw form still needs phonological adjustment.
    ///
    /// ```
    /// use conjugator::Transformation;
    ///
    /// let rule = Transformation::Append { prefix: "ni".into(), suffix: String::new() };
    /// let (raw, sounds) = rule.apply("usoma", "soma");
    /// assert_eq!(raw, "nisoma");
    /// assert_eq!(sounds.boundaries(), &[2]);
    /// ```
    pub fn apply(&self, lemma: &str, stem: &str) -> (String, AdjacentSounds) {
        match self {
            Transformation::Append { prefix, suffix } => compose(prefix, stem, suffix),
            Transformation::Mutate {
                mutation,
                prefix,
                suffix,
            } => compose(prefix, &mutation.apply(lemma, stem), suffix),
            Transformation::Replace(text) => (text.clone(), AdjacentSounds::none()),
        }
    }
}

fn compose(prefix: &str, stem: &str, suffix: &str) -> (String, AdjacentSounds) {
    let mut text = String::with_capacity(prefix.len() + stem.len() + suffix.len());
    let mut boundaries = Vec::with_capacity(2);

    text.push_str(prefix);
    if !prefix.is_empty() && !stem.is_empty() {
        boundaries.push(text.len());
    }
    text.push_str(stem);
    if !text.is_empty() && !suffix.is_empty() {
        boundaries.push(text.len());
    }
    text.push_str(suffix);

    (text, AdjacentSounds::at(boundaries))
}
