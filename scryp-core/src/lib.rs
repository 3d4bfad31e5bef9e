//! Core types for the scrypgen editor bridge.
//!
//! This crate holds the pure parts of the bridge: pulling generated source
//! out of the generator's mixed output, the language selector users pick
//! from, and the highlighting mode chosen for the resulting document.

mod extract;
mod language;
mod syntax;

pub use extract::{ExtractedScript, RawOutput, extract, is_script_start};
pub use language::LanguageSelector;
pub use syntax::Syntax;
