//! Conjugation table file parser.
//!
//! Parses `.conj` table files and affix templates into an AST that the engine
//! turns into classifiers, rule tables, rewrite lists and exception
//! dictionaries. The AST is public so external tooling (the `check` command,
//! editors) can inspect table files without loading them.

pub mod ast;
pub mod error;
mod file;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use file::parse_file;
pub use template::parse_template;
