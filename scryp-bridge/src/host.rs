//! The editor surface the session drives.

use std::path::PathBuf;

use eyre::Result;
use scrypgen_core::{ExtractedScript, LanguageSelector, Syntax};
use serde::Serialize;

use crate::menu::MenuItem;

/// What the editor reports as the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// There is no active view to select from.
    NoActiveView,
    /// Selected text, possibly empty.
    Text(String),
}

/// A new document to open with the generated script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Full content of the document.
    pub script: ExtractedScript,
    /// Highlighting mode, `None` leaves the editor default.
    pub syntax: Option<Syntax>,
    /// Language the user asked for.
    pub language: LanguageSelector,
}

/// Host editor facilities used by a [`Session`](crate::Session).
///
/// Prompt methods return `Ok(None)` when the user dismisses the prompt.
pub trait Host {
    /// Open project folders, in editor order.
    fn folders(&self) -> Vec<PathBuf>;

    /// File shown in the active view, if any.
    fn active_file(&self) -> Option<PathBuf>;

    /// Current selection in the active view.
    fn selection(&mut self) -> Result<Selection>;

    /// Ask for a free-text description.
    fn prompt_description(&mut self) -> Result<Option<String>>;

    /// Ask for the target language.
    fn prompt_language(&mut self) -> Result<Option<LanguageSelector>>;

    /// Offer the top-level menu.
    fn prompt_menu(&mut self) -> Result<Option<MenuItem>>;

    /// Open a new document holding the generated script.
    fn open_document(&mut self, document: &Document) -> Result<()>;

    /// Transient status line.
    fn status(&mut self, message: &str);

    /// Error dialog.
    fn error(&mut self, message: &str);

    /// Informational dialog.
    fn message(&mut self, message: &str);
}
