use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for bridge operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(scrypgen::io),
        help("check the --config path, or remove it to use the defaults")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to determine the current directory")]
    #[diagnostic(code(scrypgen::current_dir))]
    CurrentDir {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scrypgen.toml")]
    #[diagnostic(code(scrypgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(scrypgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error pointing at the line that assigns `key`
    pub fn validation_at_key(
        message: impl Into<String>,
        key: &str,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        let span = key_offset(src, key).map(|offset| SourceSpan::from((offset, key.len())));
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }
}

/// Byte offset of `key` in the first line of the form `key = ...`.
fn key_offset(src: &str, key: &str) -> Option<usize> {
    let mut line_start = 0;
    for line in src.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let assigns = line[indent..]
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if assigns {
            return Some(line_start + indent);
        }
        line_start += line.len();
    }
    None
}
