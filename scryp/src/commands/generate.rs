use std::path::Path;

use clap::Args;
use eyre::Result;
use scrypgen_bridge::DescriptionSource;
use scrypgen_core::LanguageSelector;

use super::{DocumentArgs, ProjectArgs, run_session};
use crate::host::{SelectionSource, TerminalHost};

#[derive(Args)]
pub struct GenerateCommand {
    /// What the script should do (prompted for when omitted)
    pub description: Option<String>,

    /// Target language: auto, python or bash (prompted for when omitted)
    #[arg(short, long)]
    pub language: Option<LanguageSelector>,

    #[command(flatten)]
    pub project: ProjectArgs,

    #[command(flatten)]
    pub document: DocumentArgs,
}

impl GenerateCommand {
    pub fn run(&self, config: Option<&Path>) -> Result<()> {
        let host = TerminalHost::new(
            self.project.projects.clone(),
            SelectionSource::None,
            self.document.sink(),
        );
        let source = match &self.description {
            Some(text) => DescriptionSource::Text(text.clone()),
            None => DescriptionSource::Prompt,
        };

        run_session(host, config, |session| {
            session.generate(source, self.language)
        })
    }
}
