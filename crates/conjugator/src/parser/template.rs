//! Affix template parser using winnow.
//!
//! Handles literal text, a single stem hole (`{}` or `{mutation}`) and the
//! escape sequences `{{` and `}}`.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

use super::ast::{Segment, Template};
use super::error::{ParseError, calculate_position};

/// Parse a standalone affix template, e.g. `ni{drop_final_vowel}ile`.
///
/// # Example
///
/// ```
/// use conjugator::parser::{Template, parse_template};
///
/// let template = parse_template("{}ons").unwrap();
/// assert_eq!(
///     template,
///     Template::Affixed { prefix: String::new(), mutation: None, suffix: "ons".into() }
/// );
/// assert_eq!(parse_template("est").unwrap(), Template::Literal("est".into()));
/// ```
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut remaining = input;
    let segments = match segments(&mut remaining) {
        Ok(segments) => segments,
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            return Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {e}"),
            });
        }
    };
    if !remaining.is_empty() {
        let (line, column) = calculate_position(input, remaining);
        return Err(ParseError::Syntax {
            line,
            column,
            message: format!(
                "unexpected character: '{}'",
                remaining.chars().next().unwrap_or('?')
            ),
        });
    }
    Template::from_segments(segments).map_err(|e| ParseError::Syntax {
        line: 1,
        column: 1,
        message: e.to_string(),
    })
}

/// Parse template content up to (not including) a closing quote.
pub(crate) fn template_content(input: &mut &str) -> ModalResult<Template> {
    segments.try_map(Template::from_segments).parse_next(input)
}

fn segments(input: &mut &str) -> ModalResult<Vec<Segment>> {
    repeat(0.., segment).parse_next(input)
}

/// Parse a single segment (escape, hole, or literal).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, hole, literal_char)).parse_next(input)
}

/// Parse escape sequences: `{{` -> `{`, `}}` -> `}`
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

/// Parse a stem hole: `{}` or `{mutation_name}`.
fn hole(input: &mut &str) -> ModalResult<Segment> {
    delimited(
        '{',
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
        '}',
    )
    .map(|name: &str| Segment::Hole((!name.is_empty()).then(|| name.to_string())))
    .parse_next(input)
}

/// Parse a literal character (not `{`, `}` or `"`).
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    none_of(['{', '}', '"'])
        .map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_and_suffix_around_mutation() {
        assert_eq!(
            parse_template("ni{drop_final_vowel}ile").unwrap(),
            Template::Affixed {
                prefix: "ni".to_string(),
                mutation: Some("drop_final_vowel".to_string()),
                suffix: "ile".to_string(),
            }
        );
    }

    #[test]
    fn escaped_braces_are_literal() {
        assert_eq!(
            parse_template("{{x}}").unwrap(),
            Template::Literal("{x}".to_string())
        );
    }

    #[test]
    fn two_holes_are_rejected() {
        assert!(parse_template("{}-{}").is_err());
    }

    #[test]
    fn unclosed_hole_is_rejected() {
        assert!(parse_template("ni{").is_err());
    }
}
