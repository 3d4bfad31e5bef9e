//! Settings loaded from `scrypgen.toml`.

use std::path::{Path, PathBuf};

use scrypgen_core::LanguageSelector;
use serde::Deserialize;

use crate::{Error, Result};

/// File name looked up in the project root.
pub const SETTINGS_FILE: &str = "scrypgen.toml";

/// Environment variable overriding `generator.program`.
pub const PROGRAM_ENV: &str = "SCRYPGEN_PROGRAM";

/// Root of `scrypgen.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// How the external generator is invoked
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Editor-side behaviour
    #[serde(default)]
    pub editor: EditorConfig,
}

/// `[generator]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Executable to run, resolved through `PATH`
    pub program: String,
    /// First argument, before the description
    pub subcommand: String,
    /// Appended after the `--language` flag
    pub extra_args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: "scrypgen".to_string(),
            subcommand: "generate".to_string(),
            extra_args: Vec::new(),
        }
    }
}

/// `[editor]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// When set, the language prompt is skipped
    pub default_language: Option<LanguageSelector>,
}

impl Settings {
    /// Parse settings from a string, using `filename` in diagnostics.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

        if settings.generator.program.trim().is_empty() {
            return Err(Error::validation_at_key(
                "generator program must not be empty",
                "program",
                content,
                filename,
            ));
        }
        if settings.generator.subcommand.trim().is_empty() {
            return Err(Error::validation_at_key(
                "generator subcommand must not be empty",
                "subcommand",
                content,
                filename,
            ));
        }

        Ok(settings)
    }

    /// Open and parse a settings file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Locate and load settings.
    ///
    /// An explicit path must exist. Otherwise `scrypgen.toml` in the project
    /// root is used when present, else the defaults. `SCRYPGEN_PROGRAM`
    /// overrides the generator program in every case.
    pub fn discover(explicit: Option<&Path>, project_root: &Path) -> Result<Self> {
        let settings = match explicit {
            Some(path) => Self::open(path)?,
            None => {
                let candidate = Self::default_path(project_root);
                if candidate.is_file() {
                    log::debug!("loading settings from {}", candidate.display());
                    Self::open(&candidate)?
                } else {
                    Self::default()
                }
            }
        };

        Ok(settings.with_program_override(std::env::var(PROGRAM_ENV).ok()))
    }

    /// Path of the settings file inside a project root.
    pub fn default_path(project_root: &Path) -> PathBuf {
        project_root.join(SETTINGS_FILE)
    }

    /// Replace the generator program when an override is given.
    pub fn with_program_override(mut self, program: Option<String>) -> Self {
        if let Some(program) = program.filter(|p| !p.trim().is_empty()) {
            log::debug!("generator program overridden by {}: {}", PROGRAM_ENV, program);
            self.generator.program = program;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use miette::SourceSpan;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_str_with_filename("", SETTINGS_FILE).unwrap();
        assert_eq!(settings.generator, GeneratorConfig::default());
        assert_eq!(settings.generator.program, "scrypgen");
        assert_eq!(settings.generator.subcommand, "generate");
        assert_eq!(settings.editor.default_language, None);
    }

    #[test]
    fn test_full_file() {
        let settings = Settings::from_str_with_filename(
            r#"
            [generator]
            program = "/opt/scrypgen/bin/scrypgen"
            extra_args = ["--no-validate"]

            [editor]
            default_language = "bash"
            "#,
            SETTINGS_FILE,
        )
        .unwrap();

        assert_eq!(settings.generator.program, "/opt/scrypgen/bin/scrypgen");
        assert_eq!(settings.generator.subcommand, "generate");
        assert_eq!(settings.generator.extra_args, vec!["--no-validate"]);
        assert_eq!(
            settings.editor.default_language,
            Some(LanguageSelector::Bash)
        );
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Settings::from_str_with_filename("[generator]\nbinary = \"x\"\n", SETTINGS_FILE)
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_bad_language_is_parse_error() {
        let err = Settings::from_str_with_filename(
            "[editor]\ndefault_language = \"ruby\"\n",
            SETTINGS_FILE,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_program_is_validation_error() {
        let err = Settings::from_str_with_filename("[generator]\nprogram = \"  \"\n", SETTINGS_FILE)
            .unwrap_err();
        match *err {
            Error::Validation { span, message, .. } => {
                assert_eq!(message, "generator program must not be empty");
                assert_eq!(span, Some(SourceSpan::from((12, 7))));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validation_span_ignores_comment_mentions() {
        let err = Settings::from_str_with_filename(
            "# program is required\n[generator]\nprogram = \"\"\n",
            SETTINGS_FILE,
        )
        .unwrap_err();
        match *err {
            Error::Validation { span, .. } => {
                assert_eq!(span, Some(SourceSpan::from((34, 7))));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_program_override() {
        let settings = Settings::default().with_program_override(Some("my-gen".to_string()));
        assert_eq!(settings.generator.program, "my-gen");

        let settings = Settings::default().with_program_override(Some(" ".to_string()));
        assert_eq!(settings.generator.program, "scrypgen");
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = Settings::open(temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_reads_project_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            Settings::default_path(temp.path()),
            "[generator]\nsubcommand = \"gen\"\n",
        )
        .unwrap();

        let settings = Settings::open(Settings::default_path(temp.path())).unwrap();
        assert_eq!(settings.generator.subcommand, "gen");
    }

    #[test]
    fn test_discover_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::discover(None, temp.path()).unwrap();
        assert_eq!(settings.generator.subcommand, "generate");
        assert_eq!(settings.editor, EditorConfig::default());
    }

    #[test]
    fn test_discover_prefers_explicit_path() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            Settings::default_path(temp.path()),
            "[editor]\ndefault_language = \"bash\"\n",
        )
        .unwrap();
        let explicit = temp.path().join("other.toml");
        std::fs::write(&explicit, "[editor]\ndefault_language = \"python\"\n").unwrap();

        let settings = Settings::discover(Some(&explicit), temp.path()).unwrap();
        assert_eq!(
            settings.editor.default_language,
            Some(LanguageSelector::Python)
        );

        let settings = Settings::discover(None, temp.path()).unwrap();
        assert_eq!(settings.editor.default_language, Some(LanguageSelector::Bash));
    }
}
