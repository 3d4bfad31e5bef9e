//! The generate-and-insert flow shared by every entry point.

use eyre::Result;
use scrypgen_core::{LanguageSelector, Syntax};

use crate::{
    config::Settings,
    host::{Document, Host, Selection},
    invoke::Generator,
    menu::{ABOUT_TEXT, MenuItem},
    project::resolve_project_root,
};

/// Where the description for a generation request comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionSource {
    /// Ask the user through the host's input prompt.
    Prompt,
    /// Use the active view's selection.
    Selection,
    /// Already provided by the caller.
    Text(String),
}

/// How a request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A document was opened.
    Generated(Document),
    /// The generator succeeded but no script could be found in its output.
    /// An empty document was still opened.
    Empty(Document),
    /// The user dismissed a prompt or gave an empty description.
    Cancelled,
    /// The request was refused before running the generator.
    Rejected(String),
    /// The generator failed.
    Failed(String),
}

impl Outcome {
    /// Whether the request ended without an error being shown.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Generated(_) | Outcome::Empty(_) | Outcome::Cancelled)
    }
}

/// One user-initiated request against a host.
pub struct Session<'a, H: Host + ?Sized> {
    host: &'a mut H,
    settings: &'a Settings,
}

impl<'a, H: Host + ?Sized> Session<'a, H> {
    pub fn new(host: &'a mut H, settings: &'a Settings) -> Self {
        Self { host, settings }
    }

    /// Generate a script and open it as a new document.
    ///
    /// `language` skips the language prompt when given; otherwise the
    /// configured default is used before falling back to the prompt.
    pub fn generate(
        &mut self,
        source: DescriptionSource,
        language: Option<LanguageSelector>,
    ) -> Result<Outcome> {
        let description = match self.description(source)? {
            Ok(description) => description,
            Err(outcome) => return Ok(outcome),
        };

        let language = match language.or(self.settings.editor.default_language) {
            Some(language) => language,
            None => match self.host.prompt_language()? {
                Some(language) => language,
                None => return Ok(Outcome::Cancelled),
            },
        };

        self.host.status("Generating script with ScrypGen...");

        let root = resolve_project_root(&self.host.folders(), self.host.active_file().as_deref())?;
        let generator = Generator::from_config(&self.settings.generator);

        let raw = match generator.invoke(&description, language, &root) {
            Ok(raw) => raw,
            Err(e) => {
                let message = e.to_string();
                log::warn!("generator failed: {}", message);
                self.host
                    .error(&format!("ScrypGen generation failed: {}", message));
                return Ok(Outcome::Failed(message));
            }
        };

        let script = raw.extract();
        log::debug!("extracted {} script lines", script.line_count());

        let empty = script.is_empty();
        let document = Document {
            syntax: Syntax::choose(language, script.as_str()),
            script,
            language,
        };
        self.host.open_document(&document)?;

        if empty {
            self.host.status("ScrypGen produced no recognizable script");
            return Ok(Outcome::Empty(document));
        }

        self.host.status("Script generated successfully!");
        Ok(Outcome::Generated(document))
    }

    /// Offer the menu and run the chosen entry.
    pub fn show_menu(&mut self) -> Result<Outcome> {
        match self.host.prompt_menu()? {
            Some(MenuItem::FromDescription) => self.generate(DescriptionSource::Prompt, None),
            Some(MenuItem::FromSelection) => self.generate(DescriptionSource::Selection, None),
            Some(MenuItem::About) => {
                self.host.message(ABOUT_TEXT);
                Ok(Outcome::Cancelled)
            }
            None => Ok(Outcome::Cancelled),
        }
    }

    /// Resolve the description, or the outcome that ends the request early.
    fn description(&mut self, source: DescriptionSource) -> Result<Result<String, Outcome>> {
        let text = match source {
            DescriptionSource::Text(text) => text,
            DescriptionSource::Prompt => match self.host.prompt_description()? {
                Some(text) => text,
                None => return Ok(Err(Outcome::Cancelled)),
            },
            DescriptionSource::Selection => match self.host.selection()? {
                Selection::NoActiveView => return Ok(Err(self.reject("No active view found"))),
                Selection::Text(text) if text.is_empty() => {
                    return Ok(Err(self.reject("No text selected")));
                }
                Selection::Text(text) if text.trim().is_empty() => {
                    return Ok(Err(self.reject("Selection is empty")));
                }
                Selection::Text(text) => return Ok(Ok(text)),
            },
        };

        if text.trim().is_empty() {
            return Ok(Err(Outcome::Cancelled));
        }
        Ok(Ok(text))
    }

    fn reject(&mut self, message: &str) -> Outcome {
        self.host.error(message);
        Outcome::Rejected(message.to_string())
    }
}
