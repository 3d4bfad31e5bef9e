//! Generated document report.

use scrypgen_bridge::Document;

use super::output::{Output, Report};

/// A generated document printed to the terminal.
#[derive(Debug)]
pub struct DocumentReport<'a> {
    pub document: &'a Document,
}

impl Report for DocumentReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        let label = match self.document.syntax {
            Some(syntax) => syntax.name(),
            None => "Plain Text",
        };
        out.divider(label);
        out.preformatted(self.document.script.as_str());
    }
}
