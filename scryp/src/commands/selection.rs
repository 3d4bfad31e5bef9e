use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use scrypgen_bridge::DescriptionSource;
use scrypgen_core::LanguageSelector;

use super::{DocumentArgs, ProjectArgs, run_session};
use crate::host::{LineRange, TerminalHost, selection_source};

#[derive(Args)]
pub struct SelectionCommand {
    /// File holding the selection (reads piped stdin when omitted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Only use these lines of the file, e.g. 4:12
    #[arg(long, requires = "file", value_name = "START:END")]
    pub lines: Option<LineRange>,

    /// Target language: auto, python or bash (prompted for when omitted)
    #[arg(short, long)]
    pub language: Option<LanguageSelector>,

    #[command(flatten)]
    pub project: ProjectArgs,

    #[command(flatten)]
    pub document: DocumentArgs,
}

impl SelectionCommand {
    pub fn run(&self, config: Option<&Path>) -> Result<()> {
        let host = TerminalHost::new(
            self.project.projects.clone(),
            selection_source(self.file.clone(), self.lines),
            self.document.sink(),
        );

        run_session(host, config, |session| {
            session.generate(DescriptionSource::Selection, self.language)
        })
    }
}
