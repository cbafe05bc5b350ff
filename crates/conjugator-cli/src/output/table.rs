//! Table formatting utilities for CLI output.

use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use conjugator::{ConjugatedForm, Coverage, Provenance};

/// Coverage data for a single paradigm class.
pub struct ClassCoverage {
    /// Class name (e.g., "er_regular").
    pub class: String,
    /// Stem shape as written in the table file.
    pub shape: String,
    /// Rule coverage over the language's declared tuples.
    pub coverage: Coverage,
}

/// Format a paradigm as an ASCII table, one row per form.
pub fn format_paradigm_table(forms: &[ConjugatedForm]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Tense", "Mood", "Person", "Form", "Source"]);

    for form in forms {
        let source = match form.provenance {
            Provenance::Exception => Cell::new("exception").fg(Color::Cyan),
            Provenance::Rule => Cell::new("rule"),
            Provenance::Fallback => Cell::new("fallback").fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(form.parameters.tense.as_str()),
            Cell::new(form.parameters.mood.as_str()),
            Cell::new(form.parameters.slot()),
            Cell::new(&form.surface),
            source,
        ]);
    }

    table
}

/// Format class coverage as an ASCII table.
pub fn format_coverage_table(coverage: &[ClassCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Class", "Shape", "Coverage", "Missing"]);

    for class in coverage {
        table.add_row(vec![
            class.class.clone(),
            class.shape.clone(),
            format!("{}/{}", class.coverage.covered, class.coverage.total()),
            class.coverage.missing.len().to_string(),
        ]);
    }

    table
}
