//! Surface-form corrections applied after stem and affixes are joined.
//!
//! Naive concatenation gets morpheme boundaries wrong: French needs `mangeons`
//! rather than `mangons`, Shimaoré turns `ni` + `enda` into `nyenda`. Each
//! language declares an ordered list of rewrite rules that fix these up.
//!
//! Rules run exactly once each, in declaration order. Text written by a rule
//! is locked, so a later rule can never match across it: on a conflict the
//! earliest-declared rule wins and rewriting always terminates.

use std::fmt;

/// Byte offsets in a raw form where two morphemes meet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacentSounds {
    boundaries: Vec<usize>,
}

impl AdjacentSounds {
    /// No morpheme boundaries (a literal replacement form).
    pub fn none() -> Self {
        Self::default()
    }

    /// Boundaries at the given byte offsets.
    pub fn at(boundaries: impl IntoIterator<Item = usize>) -> Self {
        let mut boundaries: Vec<usize> = boundaries.into_iter().collect();
        boundaries.sort_unstable();
        boundaries.dedup();
        Self { boundaries }
    }

    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }
}

/// A single rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteRule {
    /// Matches only where `left` ends one morpheme and `right` starts the next.
    /// Written `"left|right"` in table files.
    Boundary {
        left: String,
        right: String,
        replacement: String,
    },
    /// Matches anywhere inside a morpheme. Written without `|`.
    Anywhere {
        pattern: String,
        replacement: String,
    },
}

impl RewriteRule {
    /// Parse a table-file pattern into a rule.
    ///
    /// ```
    /// use conjugator::RewriteRule;
    ///
    /// let rule = RewriteRule::parse("g|o", "geo").unwrap();
    /// assert!(matches!(rule, RewriteRule::Boundary { .. }));
    /// assert!(RewriteRule::parse("a|b|c", "x").is_err());
    /// ```
    pub fn parse(pattern: &str, replacement: &str) -> Result<RewriteRule, String> {
        let mut sides = pattern.split('|');
        match (sides.next(), sides.next(), sides.next()) {
            (Some(""), None, None) => Err("pattern is empty".to_string()),
            (Some(text), None, None) => Ok(RewriteRule::Anywhere {
                pattern: text.to_string(),
                replacement: replacement.to_string(),
            }),
            (Some(""), Some(""), None) => {
                Err("boundary pattern needs text on at least one side".to_string())
            }
            (Some(left), Some(right), None) => Ok(RewriteRule::Boundary {
                left: left.to_string(),
                right: right.to_string(),
                replacement: replacement.to_string(),
            }),
            _ => Err("pattern has more than one boundary marker '|'".to_string()),
        }
    }
}

impl fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteRule::Boundary {
                left,
                right,
                replacement,
            } => write!(f, "\"{left}|{right}\" => \"{replacement}\""),
            RewriteRule::Anywhere {
                pattern,
                replacement,
            } => write!(f, "\"{pattern}\" => \"{replacement}\""),
        }
    }
}

/// Work-in-progress form: morpheme text, locked rewrites, and boundaries.
#[derive(Debug)]
enum Piece {
    Open(String),
    Locked(String),
    Boundary,
}

/// Ordered, single-pass rewrite rules for one language.
#[derive(Debug, Clone, Default)]
pub struct PhonologicalAdjuster {
    rules: Vec<RewriteRule>,
}

impl PhonologicalAdjuster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; it runs after every rule already added.
    pub fn push(&mut self, rule: RewriteRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule once, in order, to `raw`.
    ///
    /// Rules that do not match leave the text unchanged. Boundary offsets in
    /// `context` that fall outside `raw` or inside a character are ignored.
    ///
    /// ```
    /// use conjugator::{AdjacentSounds, PhonologicalAdjuster, RewriteRule};
    ///
    /// let mut adjuster = PhonologicalAdjuster::new();
    /// adjuster.push(RewriteRule::parse("g|o", "geo").unwrap());
    /// assert_eq!(adjuster.adjust("mangons", &AdjacentSounds::at([4])), "mangeons");
    /// // No boundary between "g" and "o" here, so nothing changes.
    /// assert_eq!(adjuster.adjust("gomme", &AdjacentSounds::none()), "gomme");
    /// ```
    pub fn adjust(&self, raw: &str, context: &AdjacentSounds) -> String {
        if self.rules.is_empty() {
            return raw.to_string();
        }

        let mut pieces = split_at_boundaries(raw, context);
        for rule in &self.rules {
            match rule {
                RewriteRule::Boundary {
                    left,
                    right,
                    replacement,
                } => rewrite_boundaries(&mut pieces, left, right, replacement),
                RewriteRule::Anywhere {
                    pattern,
                    replacement,
                } => pieces = rewrite_anywhere(pieces, pattern, replacement),
            }
        }

        pieces
            .iter()
            .map(|piece| match piece {
                Piece::Open(text) | Piece::Locked(text) => text.as_str(),
                Piece::Boundary => "",
            })
            .collect()
    }
}

fn split_at_boundaries(raw: &str, context: &AdjacentSounds) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for &offset in context.boundaries() {
        if offset <= start || offset >= raw.len() || !raw.is_char_boundary(offset) {
            continue;
        }
        pieces.push(Piece::Open(raw[start..offset].to_string()));
        pieces.push(Piece::Boundary);
        start = offset;
    }
    pieces.push(Piece::Open(raw[start..].to_string()));
    pieces
}

fn rewrite_boundaries(pieces: &mut [Piece], left: &str, right: &str, replacement: &str) {
    for i in 0..pieces.len() {
        if !matches!(pieces[i], Piece::Boundary) {
            continue;
        }
        let left_ok = left.is_empty()
            || matches!(pieces.get(i.wrapping_sub(1)), Some(Piece::Open(text)) if text.ends_with(left));
        let right_ok = right.is_empty()
            || matches!(pieces.get(i + 1), Some(Piece::Open(text)) if text.starts_with(right));
        if !left_ok || !right_ok {
            continue;
        }

        if let Some(Piece::Open(text)) = i.checked_sub(1).and_then(|j| pieces.get_mut(j)) {
            text.truncate(text.len() - left.len());
        }
        if let Some(Piece::Open(text)) = pieces.get_mut(i + 1) {
            text.replace_range(..right.len(), "");
        }
        pieces[i] = Piece::Locked(replacement.to_string());
    }
}

fn rewrite_anywhere(pieces: Vec<Piece>, pattern: &str, replacement: &str) -> Vec<Piece> {
    let mut result = Vec::with_capacity(pieces.len());
    for piece in pieces {
        let Piece::Open(text) = piece else {
            result.push(piece);
            continue;
        };
        let mut rest = text.as_str();
        while let Some(found) = rest.find(pattern) {
            result.push(Piece::Open(rest[..found].to_string()));
            result.push(Piece::Locked(replacement.to_string()));
            rest = &rest[found + pattern.len()..];
        }
        result.push(Piece::Open(rest.to_string()));
    }
    result
}
