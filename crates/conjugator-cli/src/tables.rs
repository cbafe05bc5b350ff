//! Builds the conjugator the commands run against.

use std::fs::read_to_string;
use std::path::Path;

use conjugator::{Conjugator, Language, LoadError};
use miette::{miette, Report};
use tracing::{debug, info};

use crate::output::ConjDiagnostic;

/// Conjugator with the bundled tables, or with `<code>.conj` files from
/// `dir` for every language that has one.
pub fn load_conjugator(dir: Option<&Path>) -> miette::Result<Conjugator> {
    let mut conjugator = Conjugator::new();
    for language in Language::ALL {
        let file = dir
            .map(|dir| dir.join(format!("{}.conj", language.code())))
            .filter(|file| file.is_file());
        match file {
            Some(file) => {
                let count = conjugator
                    .load_tables(language, &file)
                    .map_err(|e| load_error_report(&file, e))?;
                info!(language = language.code(), file = %file.display(), count, "loaded tables");
            }
            None => {
                conjugator
                    .load_bundled(language)
                    .map_err(|e| miette!("bundled {} tables: {e}", language.code()))?;
                debug!(language = language.code(), "using bundled tables");
            }
        }
    }
    Ok(conjugator)
}

/// Turn a load error into a report, with source context for syntax errors.
pub fn load_error_report(path: &Path, err: LoadError) -> Report {
    if let LoadError::Parse {
        line,
        column,
        message,
        ..
    } = &err
    {
        if let Ok(content) = read_to_string(path) {
            return ConjDiagnostic::at(path, &content, *line, *column, message.clone()).into();
        }
    }
    miette!("{err}")
}
