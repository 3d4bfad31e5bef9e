//! Extraction of generated source from raw generator output.
//!
//! Generators tend to print banners, progress logs or a short chat-style
//! preamble before the actual program. There is no fence or delimiter we can
//! rely on, so extraction keys off tokens that reliably open a Python or Bash
//! program and keeps everything from the first such line onward.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// `def name` / `function name`, optionally indented.
static DEFINITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:def|function)\s+[\p{L}_]").expect("definition pattern is valid")
});

/// Verbatim standard output of the generator command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutput(String);

impl RawOutput {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Decode captured bytes, replacing invalid UTF-8 sequences.
    pub fn from_utf8_lossy(bytes: &[u8]) -> Self {
        Self(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Run the extractor over this output.
    pub fn extract(&self) -> ExtractedScript {
        extract(&self.0)
    }
}

impl From<String> for RawOutput {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for RawOutput {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Generated program text with the leading commentary removed.
///
/// Either empty, or a contiguous tail of the raw output's lines starting at
/// the first line that satisfies [`is_script_start`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedScript(String);

impl ExtractedScript {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of lines in the script (zero when empty).
    pub fn line_count(&self) -> usize {
        self.0.lines().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ExtractedScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExtractedScript {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whether `line` looks like the first line of a generated program.
///
/// Matches a shebang, any line containing `import `, a `# ` comment with text
/// after the marker, or a `def`/`function` definition.
pub fn is_script_start(line: &str) -> bool {
    line.starts_with("#!")
        || line.contains("import ")
        || line.trim().starts_with("# ")
        || DEFINITION.is_match(line)
}

/// Extract the generated program from raw generator output.
///
/// Never fails: if no line satisfies [`is_script_start`] the result is empty.
/// Once the first matching line is found every following line is kept as is.
pub fn extract(raw_output: &str) -> ExtractedScript {
    let mut in_script = false;
    let mut script_lines = Vec::new();

    for line in raw_output.lines() {
        if !in_script && is_script_start(line) {
            in_script = true;
        }

        if in_script {
            script_lines.push(line);
        }
    }

    ExtractedScript(script_lines.join("\n").trim().to_string())
}
