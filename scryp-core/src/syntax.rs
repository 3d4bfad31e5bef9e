//! Highlighting mode for generated documents.

use std::fmt;

use serde::Serialize;

use crate::LanguageSelector;

/// Syntax highlighting applied to a generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    Python,
    #[serde(rename = "shellscript")]
    ShellScript,
}

impl Syntax {
    /// Pick the highlighting mode for a script.
    ///
    /// An explicit selector wins. For [`LanguageSelector::Auto`] the leading
    /// content of the script is inspected; `None` when nothing matches.
    pub fn choose(selector: LanguageSelector, script: &str) -> Option<Syntax> {
        match selector {
            LanguageSelector::Python => Some(Syntax::Python),
            LanguageSelector::Bash => Some(Syntax::ShellScript),
            LanguageSelector::Auto => Self::detect(script),
        }
    }

    /// Detect the highlighting mode from script content alone.
    pub fn detect(script: &str) -> Option<Syntax> {
        if script.starts_with("#!/usr/bin/env python") || script.contains("import ") {
            Some(Syntax::Python)
        } else if script.starts_with("#!/bin/bash") || script.starts_with("#!/usr/bin/env bash") {
            Some(Syntax::ShellScript)
        } else {
            None
        }
    }

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Syntax::Python => "Python",
            Syntax::ShellScript => "Shell Script (Bash)",
        }
    }

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Syntax::Python => "py",
            Syntax::ShellScript => "sh",
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_selector_skips_detection() {
        assert_eq!(
            Syntax::choose(LanguageSelector::Bash, "import os"),
            Some(Syntax::ShellScript)
        );
        assert_eq!(
            Syntax::choose(LanguageSelector::Python, ""),
            Some(Syntax::Python)
        );
    }

    #[test]
    fn test_detect_python() {
        assert_eq!(
            Syntax::detect("#!/usr/bin/env python3\nprint(1)"),
            Some(Syntax::Python)
        );
        assert_eq!(
            Syntax::detect("# tool\nimport json"),
            Some(Syntax::Python)
        );
    }

    #[test]
    fn test_detect_bash() {
        assert_eq!(
            Syntax::detect("#!/bin/bash\necho hi"),
            Some(Syntax::ShellScript)
        );
        assert_eq!(
            Syntax::detect("#!/usr/bin/env bash\nset -e"),
            Some(Syntax::ShellScript)
        );
    }

    #[test]
    fn test_python_signature_wins_over_bash_shebang() {
        assert_eq!(
            Syntax::detect("#!/bin/bash\npython -c 'import os'"),
            Some(Syntax::Python)
        );
    }

    #[test]
    fn test_detect_nothing() {
        assert_eq!(Syntax::choose(LanguageSelector::Auto, "def run():"), None);
        assert_eq!(Syntax::detect("#!/bin/sh\necho hi"), None);
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_string(&Syntax::ShellScript).unwrap(),
            r#""shellscript""#
        );
        assert_eq!(serde_json::to_string(&Syntax::Python).unwrap(), r#""python""#);
    }
}
