//! Test utilities for hosts and generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
};

use eyre::{Result, eyre};
use scrypgen_core::LanguageSelector;

use crate::{
    config::GeneratorConfig,
    host::{Document, Host, Selection},
    menu::MenuItem,
};

/// A [`Host`] that answers prompts from queues and records everything shown.
///
/// Running out of queued answers for a prompt is an error, so tests fail
/// loudly when the session asks something unexpected.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    pub folders: Vec<PathBuf>,
    pub active_file: Option<PathBuf>,
    pub selection: Option<Selection>,
    pub descriptions: VecDeque<Option<String>>,
    pub languages: VecDeque<Option<LanguageSelector>>,
    pub menu: VecDeque<Option<MenuItem>>,
    /// Names of the prompts shown, in order
    pub prompts: Vec<&'static str>,
    pub documents: Vec<Document>,
    pub statuses: Vec<String>,
    pub errors: Vec<String>,
    pub messages: Vec<String>,
}

impl ScriptedHost {
    pub fn in_folder(folder: impl Into<PathBuf>) -> Self {
        Self {
            folders: vec![folder.into()],
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.descriptions.push_back(description.map(String::from));
        self
    }

    pub fn with_language(mut self, language: Option<LanguageSelector>) -> Self {
        self.languages.push_back(language);
        self
    }

    pub fn with_menu(mut self, item: Option<MenuItem>) -> Self {
        self.menu.push_back(item);
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }
}

impl Host for ScriptedHost {
    fn folders(&self) -> Vec<PathBuf> {
        self.folders.clone()
    }

    fn active_file(&self) -> Option<PathBuf> {
        self.active_file.clone()
    }

    fn selection(&mut self) -> Result<Selection> {
        Ok(self.selection.clone().unwrap_or(Selection::NoActiveView))
    }

    fn prompt_description(&mut self) -> Result<Option<String>> {
        self.prompts.push("description");
        self.descriptions
            .pop_front()
            .ok_or_else(|| eyre!("unexpected description prompt"))
    }

    fn prompt_language(&mut self) -> Result<Option<LanguageSelector>> {
        self.prompts.push("language");
        self.languages
            .pop_front()
            .ok_or_else(|| eyre!("unexpected language prompt"))
    }

    fn prompt_menu(&mut self) -> Result<Option<MenuItem>> {
        self.prompts.push("menu");
        self.menu
            .pop_front()
            .ok_or_else(|| eyre!("unexpected menu prompt"))
    }

    fn open_document(&mut self, document: &Document) -> Result<()> {
        self.documents.push(document.clone());
        Ok(())
    }

    fn status(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Write a `/bin/sh` script standing in for the generator.
///
/// The returned config runs it through `sh`, so inside `body` the
/// description is `$1` and `--language <lang>` follow as `$2`/`$3`.
pub fn fake_generator(dir: &Path, body: &str) -> Result<GeneratorConfig> {
    let path = dir.join("fake-scrypgen.sh");
    std::fs::write(&path, format!("{}\n", body))?;
    Ok(GeneratorConfig {
        program: "sh".to_string(),
        subcommand: path.display().to_string(),
        extra_args: Vec::new(),
    })
}
