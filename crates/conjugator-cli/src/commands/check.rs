//! Implementation of the `conjugator check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use conjugator::parser::parse_file;
use conjugator::LanguageTables;
use miette::{IntoDiagnostic, Report};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::ConjDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.conj)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckResult {
    file: String,
    ok: bool,
    definitions: usize,
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut results = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let file = path.display().to_string();
        let content = match read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                results.push(CheckResult {
                    file,
                    ok: false,
                    definitions: 0,
                    error: Some(format!("cannot read file: {e}")),
                });
                continue;
            }
        };

        let definitions = match parse_file(&content) {
            Ok(definitions) => definitions,
            Err(e) => {
                if !args.json {
                    let diagnostic = ConjDiagnostic::from_parse_error(path, &content, &e);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                results.push(CheckResult {
                    file,
                    ok: false,
                    definitions: 0,
                    error: Some(e.to_string()),
                });
                continue;
            }
        };

        let error = LanguageTables::from_definitions(&definitions)
            .err()
            .map(|e| e.to_string());
        results.push(CheckResult {
            file,
            ok: error.is_none(),
            definitions: definitions.len(),
            error,
        });
    }

    let failed = results.iter().filter(|r| !r.ok).count();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
    } else {
        for result in &results {
            match &result.error {
                None => println!(
                    "{} {} ({} definitions)",
                    "ok".green().bold(),
                    result.file,
                    result.definitions
                ),
                Some(error) => println!("{} {}: {}", "FAIL".red().bold(), result.file, error),
            }
        }
    }

    if failed > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
