//! Implementation of the `conjugator paradigm` command.

use std::path::Path;

use miette::IntoDiagnostic;
use owo_colors::OwoColorize;

use crate::output::table::format_paradigm_table;
use crate::tables::load_conjugator;

/// Arguments for the paradigm command.
#[derive(Debug, clap::Args)]
pub struct ParadigmArgs {
    /// Verb in its infinitive form
    pub lemma: String,

    /// Language name or code (e.g., fr, swb, buc)
    #[arg(long, required = true)]
    pub lang: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the paradigm command.
pub fn run_paradigm(args: ParadigmArgs, tables: Option<&Path>) -> miette::Result<i32> {
    let conjugator = load_conjugator(tables)?;

    let forms = match conjugator.conjugate_all_tag(&args.lemma, &args.lang) {
        Ok(forms) => forms,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            return Ok(exitcode::USAGE);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&forms).into_diagnostic()?);
    } else {
        println!("{}", format_paradigm_table(&forms));
        let fallbacks = forms.iter().filter(|f| !f.is_conjugated()).count();
        if fallbacks > 0 {
            eprintln!(
                "{}: {fallbacks} of {} forms fell back to the infinitive",
                "note".yellow().bold(),
                forms.len()
            );
        }
    }
    Ok(exitcode::OK)
}
