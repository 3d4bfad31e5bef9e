//! Terminal implementation of the editor host.

use std::{
    fmt,
    io::{IsTerminal, Read},
    path::{Path, PathBuf},
    str::FromStr,
};

use dialoguer::{Input, Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use scrypgen_bridge::{Document, Host, MenuItem, Selection};
use scrypgen_core::{LanguageSelector, Syntax};

use crate::reports::{DocumentReport, Report, TerminalOutput};

/// A 1-based inclusive line range, written `START:END` or `LINE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    /// Cut the range out of `text`. Lines past the end are ignored.
    pub fn slice(&self, text: &str) -> String {
        text.lines()
            .skip(self.start - 1)
            .take(self.end - self.start + 1)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

impl FromStr for LineRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s.split_once(':').unwrap_or((s, s));
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| format!("invalid line number '{}'", part))
        };
        let (start, end) = (parse(start)?, parse(end)?);

        if start == 0 {
            return Err("line numbers start at 1".to_string());
        }
        if end < start {
            return Err(format!("range '{}' ends before it starts", s));
        }
        Ok(Self { start, end })
    }
}

/// Where the "current selection" comes from in a terminal.
#[derive(Debug, Clone, Default)]
pub enum SelectionSource {
    /// Nothing to select from.
    #[default]
    None,
    /// A file, optionally narrowed to a line range.
    File {
        path: PathBuf,
        lines: Option<LineRange>,
    },
    /// Piped standard input.
    Stdin,
}

/// Where opened documents go.
#[derive(Debug, Clone, Default)]
pub enum DocumentSink {
    /// Print to stdout under a syntax header.
    #[default]
    Stdout,
    /// Print the document as JSON for editor plugins.
    Json,
    /// Write to a file, or into a directory as `generated_script.<ext>`.
    File(PathBuf),
}

/// Editor host backed by the terminal.
///
/// Prompts use dialoguer, status lines and errors go to stderr so stdout
/// only carries documents.
#[derive(Debug, Default)]
pub struct TerminalHost {
    folders: Vec<PathBuf>,
    selection: SelectionSource,
    sink: DocumentSink,
}

impl TerminalHost {
    pub fn new(folders: Vec<PathBuf>, selection: SelectionSource, sink: DocumentSink) -> Self {
        Self {
            folders,
            selection,
            sink,
        }
    }

    /// Path a document is written to for a file sink.
    fn target_path(path: &Path, syntax: Option<Syntax>) -> PathBuf {
        if path.is_dir() {
            let extension = syntax.map(|s| s.extension()).unwrap_or("txt");
            path.join(format!("generated_script.{}", extension))
        } else {
            path.to_path_buf()
        }
    }

    fn write_document(path: &Path, document: &Document) -> Result<PathBuf> {
        let target = Self::target_path(path, document.syntax);
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }

        let mut content = document.script.as_str().to_string();
        if !content.is_empty() {
            content.push('\n');
        }
        std::fs::write(&target, content)
            .wrap_err_with(|| format!("Failed to write {}", target.display()))?;
        Ok(target)
    }
}

impl Host for TerminalHost {
    fn folders(&self) -> Vec<PathBuf> {
        self.folders.clone()
    }

    fn active_file(&self) -> Option<PathBuf> {
        match &self.selection {
            SelectionSource::File { path, .. } => Some(path.clone()),
            _ => None,
        }
    }

    fn selection(&mut self) -> Result<Selection> {
        match &self.selection {
            SelectionSource::None => Ok(Selection::NoActiveView),
            SelectionSource::File { path, lines } => {
                let text = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
                let text = match lines {
                    Some(range) => {
                        log::debug!("selecting lines {} of {}", range, path.display());
                        range.slice(&text)
                    }
                    None => text,
                };
                Ok(Selection::Text(text))
            }
            SelectionSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .wrap_err("Failed to read selection from stdin")?;
                Ok(Selection::Text(text))
            }
        }
    }

    fn prompt_description(&mut self) -> Result<Option<String>> {
        let description = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Describe the script you want to generate")
            .allow_empty(true)
            .interact_text()
            .wrap_err("Failed to read description")?;
        Ok(Some(description))
    }

    fn prompt_language(&mut self) -> Result<Option<LanguageSelector>> {
        let labels: Vec<&str> = LanguageSelector::ALL.iter().map(|l| l.label()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select script language")
            .items(&labels)
            .default(0)
            .interact_opt()
            .wrap_err("Failed to get language selection")?;

        Ok(selection.and_then(|i| LanguageSelector::ALL.get(i).copied()))
    }

    fn prompt_menu(&mut self) -> Result<Option<MenuItem>> {
        let labels: Vec<&str> = MenuItem::ALL.iter().map(|m| m.label()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("ScrypGen")
            .items(&labels)
            .default(0)
            .interact_opt()
            .wrap_err("Failed to get menu selection")?;

        Ok(selection.and_then(|i| MenuItem::ALL.get(i).copied()))
    }

    fn open_document(&mut self, document: &Document) -> Result<()> {
        let written = match &self.sink {
            DocumentSink::Stdout => {
                DocumentReport { document }.render(&mut TerminalOutput::new());
                None
            }
            DocumentSink::Json => {
                let json = serde_json::to_string_pretty(document)
                    .wrap_err("Failed to serialize document")?;
                println!("{}", json);
                None
            }
            DocumentSink::File(path) => Some(Self::write_document(path, document)?),
        };

        if let Some(target) = written {
            self.status(&format!("Wrote {}", target.display()));
        }
        Ok(())
    }

    fn status(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn error(&mut self, message: &str) {
        eprintln!("error: {}", message);
    }

    fn message(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Selection source for the given flags: a file if named, else piped stdin.
pub fn selection_source(file: Option<PathBuf>, lines: Option<LineRange>) -> SelectionSource {
    match file {
        Some(path) => SelectionSource::File { path, lines },
        None if !std::io::stdin().is_terminal() => SelectionSource::Stdin,
        None => SelectionSource::None,
    }
}
