//! Extraction-only report.

use scrypgen_core::ExtractedScript;

use super::output::{Output, Report};

pub const NO_SCRIPT_WARNING: &str = "No recognizable script in generator output";

/// The script pulled out of captured generator output.
#[derive(Debug)]
pub struct ExtractReport<'a> {
    pub script: &'a ExtractedScript,
}

impl Report for ExtractReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        if self.script.is_empty() {
            out.warning(NO_SCRIPT_WARNING);
            return;
        }
        out.preformatted(self.script.as_str());
    }
}
