//! CLI command implementations.

mod check;
mod conjugate;
mod coverage;
mod paradigm;

pub use check::{run_check, CheckArgs};
pub use conjugate::{run_conjugate, ConjugateArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use paradigm::{run_paradigm, ParadigmArgs};
