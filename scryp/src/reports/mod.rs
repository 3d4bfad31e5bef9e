//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod document;
mod extract;
mod health;
mod output;

pub use document::DocumentReport;
pub use extract::{ExtractReport, NO_SCRIPT_WARNING};
pub use health::HealthReport;
pub use output::{Output, Report, TerminalOutput};
