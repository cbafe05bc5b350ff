//! Table file format parser.
//!
//! Parses `.conj` files containing class, ending, irregular, rules, rewrite
//! and exception definitions.

use winnow::combinator::{alt, delimited, opt, preceded, repeat, separated, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, none_of, take_while};

use super::ast::{Definition, SlotEntry, Template};
use super::error::{ParseError, calculate_position};
use super::template::template_content;
use crate::types::{Mood, Slot, Tense};

/// Parse an entire table file into definitions.
///
/// # Example
///
/// ```
/// use conjugator::parser::{Definition, parse_file};
///
/// let defs = parse_file(r#"
///     class er_regular = "{}er";
///     ending "er" => er_regular;
/// "#).unwrap();
/// assert_eq!(defs.len(), 2);
/// assert_eq!(defs[1].keyword(), "ending");
/// ```
pub fn parse_file(input: &str) -> Result<Vec<Definition>, ParseError> {
    let mut remaining = input;
    match file(&mut remaining) {
        Ok(definitions) => {
            // Skip any trailing whitespace/comments
            let _ = skip_ws_and_comments(&mut remaining);
            if remaining.is_empty() {
                Ok(definitions)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            if remaining.is_empty() {
                Err(ParseError::UnexpectedEof { line, column })
            } else {
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!("parse error: {e}"),
                })
            }
        }
    }
}

/// Parse an entire file into definitions.
fn file(input: &mut &str) -> ModalResult<Vec<Definition>> {
    skip_ws_and_comments(input)?;
    repeat(0.., terminated(definition, skip_ws_and_comments)).parse_next(input)
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse one definition, terminated by `;`.
fn definition(input: &mut &str) -> ModalResult<Definition> {
    let def = alt((
        class_definition,
        irregular_definition,
        ending_definition,
        rules_definition,
        rewrite_definition,
        exception_definition,
    ))
    .parse_next(input)?;
    skip_ws_and_comments(input)?;
    ';'.parse_next(input)?;
    Ok(def)
}

/// Parse a keyword followed by at least one whitespace character.
fn keyword<'i>(word: &'static str) -> impl Parser<&'i str, (), ErrMode<ContextError>> {
    terminated(word, ws_only).void()
}

/// `class name = "shape"`
fn class_definition(input: &mut &str) -> ModalResult<Definition> {
    keyword("class").parse_next(input)?;
    skip_ws_and_comments(input)?;
    let name = identifier(input)?;
    skip_ws_and_comments(input)?;
    '='.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let shape = template_string(input)?;
    Ok(Definition::Class { name, shape })
}

/// `irregular "lemma" => class`
fn irregular_definition(input: &mut &str) -> ModalResult<Definition> {
    keyword("irregular").parse_next(input)?;
    let (lemma, class) = mapping(input)?;
    Ok(Definition::Irregular { lemma, class })
}

/// `ending "er" => class`
fn ending_definition(input: &mut &str) -> ModalResult<Definition> {
    keyword("ending").parse_next(input)?;
    let (ending, class) = mapping(input)?;
    Ok(Definition::Ending { ending, class })
}

/// `"text" => identifier`
fn mapping(input: &mut &str) -> ModalResult<(String, String)> {
    skip_ws_and_comments(input)?;
    let text = string_literal(input)?;
    skip_ws_and_comments(input)?;
    "=>".parse_next(input)?;
    skip_ws_and_comments(input)?;
    let class = identifier(input)?;
    Ok((text, class))
}

/// `rules class tense.mood { entries }`
fn rules_definition(input: &mut &str) -> ModalResult<Definition> {
    keyword("rules").parse_next(input)?;
    skip_ws_and_comments(input)?;
    let class = identifier(input)?;
    skip_ws_and_comments(input)?;
    let (tense, mood) = tense_mood(input)?;
    skip_ws_and_comments(input)?;
    let entries = slot_block(input)?;
    Ok(Definition::Rules {
        class,
        tense,
        mood,
        entries,
    })
}

/// `exception "lemma" tense.mood { entries }`
fn exception_definition(input: &mut &str) -> ModalResult<Definition> {
    keyword("exception").parse_next(input)?;
    skip_ws_and_comments(input)?;
    let lemma = string_literal(input)?;
    skip_ws_and_comments(input)?;
    let (tense, mood) = tense_mood(input)?;
    skip_ws_and_comments(input)?;
    let entries = slot_block(input)?;
    Ok(Definition::Exception {
        lemma,
        tense,
        mood,
        entries,
    })
}

/// `rewrite "pattern" => "replacement"`
fn rewrite_definition(input: &mut &str) -> ModalResult<Definition> {
    keyword("rewrite").parse_next(input)?;
    skip_ws_and_comments(input)?;
    let pattern = string_literal(input)?;
    skip_ws_and_comments(input)?;
    "=>".parse_next(input)?;
    skip_ws_and_comments(input)?;
    let replacement = string_literal(input)?;
    Ok(Definition::Rewrite {
        pattern,
        replacement,
    })
}

/// Parse a snake_case identifier (lowercase start, alphanumeric + underscore).
fn identifier(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_')
        .verify(|s: &str| s.starts_with(|c: char| c.is_ascii_lowercase()))
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

/// Parse `tense.mood`, e.g. `present.indicative`.
fn tense_mood(input: &mut &str) -> ModalResult<(Tense, Mood)> {
    let tense = take_while(1.., |c: char| c.is_ascii_lowercase())
        .verify_map(|s: &str| s.parse::<Tense>().ok())
        .parse_next(input)?;
    '.'.parse_next(input)?;
    let mood = take_while(1.., |c: char| c.is_ascii_lowercase())
        .verify_map(|s: &str| s.parse::<Mood>().ok())
        .parse_next(input)?;
    Ok((tense, mood))
}

/// Parse a slot block: { 1sg, 3sg: "template", ... }
fn slot_block(input: &mut &str) -> ModalResult<Vec<SlotEntry>> {
    delimited(
        ('{', skip_ws_and_comments),
        slot_entries,
        (skip_ws_and_comments, '}'),
    )
    .parse_next(input)
}

/// Parse slot entries with trailing comma support.
fn slot_entries(input: &mut &str) -> ModalResult<Vec<SlotEntry>> {
    let entries: Vec<SlotEntry> = separated(
        0..,
        slot_entry,
        (skip_ws_and_comments, ',', skip_ws_and_comments),
    )
    .parse_next(input)?;

    // Allow trailing comma
    let _ = opt((skip_ws_and_comments, ',')).parse_next(input)?;

    Ok(entries)
}

/// Parse a single entry: 1sg, 3sg: "template"
fn slot_entry(input: &mut &str) -> ModalResult<SlotEntry> {
    let slots = separated(1.., slot, (skip_ws_and_comments, ',', skip_ws_and_comments))
        .parse_next(input)?;
    skip_ws_and_comments(input)?;
    ':'.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let template = template_string(input)?;
    Ok(SlotEntry { slots, template })
}

/// Parse a person/number slot: `1sg` .. `3pl`.
fn slot(input: &mut &str) -> ModalResult<Slot> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric())
        .verify_map(|s: &str| s.parse::<Slot>().ok())
        .parse_next(input)
}

/// Parse a quoted affix template: "ni{}"
fn template_string(input: &mut &str) -> ModalResult<Template> {
    delimited('"', template_content, '"').parse_next(input)
}

/// Parse a plain quoted string with `\"` and `\\` escapes.
fn string_literal(input: &mut &str) -> ModalResult<String> {
    delimited('"', repeat(0.., string_char), '"').parse_next(input)
}

fn string_char(input: &mut &str) -> ModalResult<char> {
    alt((preceded('\\', any), none_of(['"', '\\']))).parse_next(input)
}
