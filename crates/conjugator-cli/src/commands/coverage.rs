//! Coverage command implementation.

use std::path::Path;

use clap::Args;
use conjugator::{declared_parameters, Language};
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::table::{format_coverage_table, ClassCoverage};
use crate::tables::load_conjugator;

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Language name or code (e.g., fr, swb, buc).
    #[arg(long)]
    pub lang: String,

    /// Exit with non-zero code if any class with rules is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    class: String,
    covered: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs, tables: Option<&Path>) -> Result<i32> {
    let language: Language = args.lang.parse().map_err(|e| miette!("{e}"))?;
    let conjugator = load_conjugator(tables)?;
    let language_tables = conjugator
        .tables(language)
        .ok_or_else(|| miette!("no tables loaded for {language}"))?;

    let declared = declared_parameters(language);
    let coverage_data: Vec<ClassCoverage> = language_tables
        .classifier()
        .classes()
        .iter()
        .map(|decl| ClassCoverage {
            class: decl.name.clone(),
            shape: decl.shape.to_string(),
            coverage: language_tables.rules().coverage(&decl.name, &declared),
        })
        .collect();

    // Classes without any rule are resolved through exceptions.
    let any_incomplete = coverage_data
        .iter()
        .any(|c| c.coverage.covered > 0 && !c.coverage.is_complete());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                class: c.class.clone(),
                covered: c.coverage.covered,
                total: c.coverage.total(),
                missing: c.coverage.missing.iter().map(ToString::to_string).collect(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{}", format_coverage_table(&coverage_data));
        println!(
            "{} exceptions for {} lemmas with irregular overrides",
            language_tables.exceptions().len(),
            language_tables.classifier().irregular_count()
        );

        for class in &coverage_data {
            if class.coverage.covered > 0 && !class.coverage.is_complete() {
                println!("\nMissing in {}:", class.class);
                for params in &class.coverage.missing {
                    println!("  - {}", params);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
