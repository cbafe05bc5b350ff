//! Conjugator CLI entry point.
//!
//! Provides command-line tools for conjugating verbs and working with
//! conjugation table files:
//! - `conjugator conjugate` - Conjugate one form
//! - `conjugator paradigm` - Print every form of a verb
//! - `conjugator check` - Validate .conj files
//! - `conjugator coverage` - Report rule coverage per class

mod commands;
mod output;
mod tables;

use std::io::stderr;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_conjugate, run_coverage, run_paradigm, CheckArgs, ConjugateArgs, CoverageArgs,
    ParadigmArgs,
};
use tracing_subscriber::EnvFilter;

/// Verb conjugation for French, Shimaoré and Kibouchi.
#[derive(Debug, Parser)]
#[command(name = "conjugator")]
#[command(about = "Verb conjugation for French, Shimaoré and Kibouchi", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory with <code>.conj files used instead of the bundled tables
    #[arg(long, env = "CONJUGATOR_TABLES", global = true)]
    pub tables: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Conjugate a verb for one tense, mood, person and number
    Conjugate(ConjugateArgs),
    /// Print the full paradigm of a verb
    Paradigm(ParadigmArgs),
    /// Check .conj table files
    Check(CheckArgs),
    /// Report rule coverage per paradigm class
    Coverage(CoverageArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` or the verbosity flag.
fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let tables = cli.tables.as_deref();
    let result = match cli.command {
        Commands::Conjugate(args) => run_conjugate(args, tables),
        Commands::Paradigm(args) => run_paradigm(args, tables),
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args, tables),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
