//! Implementation of the `conjugator conjugate` command.

use std::path::Path;

use conjugator::{GrammaticalParameters, Language, Mood, Number, Person, Tense, is_declared};
use miette::IntoDiagnostic;
use owo_colors::OwoColorize;
use tracing::warn;

use crate::tables::load_conjugator;

/// Arguments for the conjugate command.
#[derive(Debug, clap::Args)]
pub struct ConjugateArgs {
    /// Verb in its infinitive form (e.g., parler, usoma, mihinagna)
    pub lemma: String,

    /// Language name or code (e.g., fr, swb, buc, Shimaoré)
    #[arg(long, required = true)]
    pub lang: String,

    /// Tense: present, past, imperfect, future
    #[arg(long, default_value = "present")]
    pub tense: Tense,

    /// Mood: indicative, conditional, subjunctive, imperative
    #[arg(long, default_value = "indicative")]
    pub mood: Mood,

    /// Person: 1, 2, 3
    #[arg(long)]
    pub person: Person,

    /// Number: sg, pl
    #[arg(long, default_value = "sg")]
    pub number: Number,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the conjugate command.
pub fn run_conjugate(args: ConjugateArgs, tables: Option<&Path>) -> miette::Result<i32> {
    let conjugator = load_conjugator(tables)?;
    let parameters = GrammaticalParameters::new(args.tense, args.mood, args.person, args.number);

    let form = match conjugator.conjugate_tag(&args.lemma, &args.lang, parameters) {
        Ok(form) => form,
        Err(e) => {
            if args.json {
                let output = serde_json::json!({ "error": e.to_string() });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("{}: {}", "error".red().bold(), e);
            }
            return Ok(exitcode::USAGE);
        }
    };

    if let Some(message) = undeclared_warning(form.language, &parameters) {
        warn!("{message}");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&form).into_diagnostic()?);
    } else {
        println!("{}", form.surface);
        if !form.is_conjugated() {
            eprintln!(
                "{}: no rule for '{}' at {}; the infinitive was returned unchanged",
                "note".yellow().bold(),
                args.lemma,
                parameters
            );
        }
    }
    Ok(exitcode::OK)
}

/// Warning text when `parameters` is outside the language's paradigm.
fn undeclared_warning(language: Language, parameters: &GrammaticalParameters) -> Option<String> {
    if is_declared(language, parameters) {
        return None;
    }
    Some(format!(
        "{parameters} is not part of the {} paradigm",
        language.name()
    ))
}
