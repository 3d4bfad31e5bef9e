use std::{io::Read, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use scrypgen_bridge::Document;
use scrypgen_core::{LanguageSelector, RawOutput, Syntax};

use crate::reports::{ExtractReport, NO_SCRIPT_WARNING, Output, Report, TerminalOutput};

#[derive(Args)]
pub struct ExtractCommand {
    /// File with captured generator output (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Language used to pick the syntax in JSON output
    #[arg(short, long, default_value = "auto")]
    pub language: LanguageSelector,

    /// Print the document as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExtractCommand {
    pub fn run(&self) -> Result<()> {
        let raw = self.read_input()?;
        let script = raw.extract();

        if self.json {
            if script.is_empty() {
                TerminalOutput::new().warning(NO_SCRIPT_WARNING);
            }

            let document = Document {
                syntax: Syntax::choose(self.language, script.as_str()),
                script,
                language: self.language,
            };
            let json =
                serde_json::to_string_pretty(&document).wrap_err("Failed to serialize document")?;
            println!("{}", json);
        } else {
            ExtractReport { script: &script }.render(&mut TerminalOutput::new());
        }

        Ok(())
    }

    fn read_input(&self) -> Result<RawOutput> {
        match &self.input {
            Some(path) => std::fs::read(path)
                .map(|bytes| RawOutput::from_utf8_lossy(&bytes))
                .wrap_err_with(|| format!("Failed to read {}", path.display())),
            None => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .wrap_err("Failed to read generator output from stdin")?;
                Ok(RawOutput::from_utf8_lossy(&bytes))
            }
        }
    }
}
