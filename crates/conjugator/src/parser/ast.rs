//! Public AST types for table files and affix templates.

use thiserror::Error;

use crate::types::{Mood, Slot, Tense};

/// A parsed affix template.
///
/// `"{}ons"` appends a suffix to the stem, `"ni{}"` prepends a prefix,
/// `"{lemma}ai"` appends to a mutated stem, and a template without a stem hole
/// (`"est"`) is a literal full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// No stem hole: the text is the whole form.
    Literal(String),
    /// Text around a single stem hole.
    Affixed {
        prefix: String,
        /// Stem mutation named inside the hole (`{lemma}`), if any.
        mutation: Option<String>,
        suffix: String,
    },
}

/// A piece of template text before holes are counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Hole(Option<String>),
}

/// Error building a [`Template`] from segments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("template has {holes} stem holes, at most one is allowed")]
pub struct TooManyHoles {
    pub holes: usize,
}

impl Template {
    /// Fold parsed segments into a template, merging adjacent literals.
    pub fn from_segments(segments: Vec<Segment>) -> Result<Template, TooManyHoles> {
        let holes = segments
            .iter()
            .filter(|s| matches!(s, Segment::Hole(_)))
            .count();
        if holes > 1 {
            return Err(TooManyHoles { holes });
        }

        let mut before = String::new();
        let mut after = String::new();
        let mut hole = None;
        for segment in segments {
            match segment {
                Segment::Literal(text) if hole.is_none() => before.push_str(&text),
                Segment::Literal(text) => after.push_str(&text),
                Segment::Hole(mutation) => hole = Some(mutation),
            }
        }

        Ok(match hole {
            None => Template::Literal(before),
            Some(mutation) => Template::Affixed {
                prefix: before,
                mutation,
                suffix: after,
            },
        })
    }
}

/// A `slots: "template"` line inside a rules or exception block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEntry {
    pub slots: Vec<Slot>,
    pub template: Template,
}

/// A single top-level definition in a table file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    /// `class er_regular = "{}er";`
    Class { name: String, shape: Template },
    /// `irregular "être" => etre;`
    Irregular { lemma: String, class: String },
    /// `ending "er" => er_regular;`
    Ending { ending: String, class: String },
    /// `rules er_regular present.indicative { 1sg: "{}e", ... };`
    Rules {
        class: String,
        tense: Tense,
        mood: Mood,
        entries: Vec<SlotEntry>,
    },
    /// `rewrite "g|o" => "geo";`
    Rewrite {
        pattern: String,
        replacement: String,
    },
    /// `exception "être" present.indicative { 3sg: "est", ... };`
    Exception {
        lemma: String,
        tense: Tense,
        mood: Mood,
        entries: Vec<SlotEntry>,
    },
}

impl Definition {
    /// Keyword that introduces this definition in a table file.
    pub fn keyword(&self) -> &'static str {
        match self {
            Definition::Class { .. } => "class",
            Definition::Irregular { .. } => "irregular",
            Definition::Ending { .. } => "ending",
            Definition::Rules { .. } => "rules",
            Definition::Rewrite { .. } => "rewrite",
            Definition::Exception { .. } => "exception",
        }
    }
}
