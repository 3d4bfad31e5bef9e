//! Target language selection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The user's choice of target scripting language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageSelector {
    /// Let the generator decide, detect highlighting from the output.
    #[default]
    Auto,
    /// Python 3
    Python,
    /// Bash
    Bash,
}

impl LanguageSelector {
    /// Every selector, in the order they are offered to the user.
    pub const ALL: [LanguageSelector; 3] = [
        LanguageSelector::Auto,
        LanguageSelector::Python,
        LanguageSelector::Bash,
    ];

    /// Returns the selector identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageSelector::Auto => "auto",
            LanguageSelector::Python => "python",
            LanguageSelector::Bash => "bash",
        }
    }

    /// Label shown in selection prompts.
    pub fn label(&self) -> &'static str {
        match self {
            LanguageSelector::Auto => "Auto Detect",
            LanguageSelector::Python => "Python",
            LanguageSelector::Bash => "Bash",
        }
    }

    /// Value for the generator's `--language` flag, `None` for auto.
    pub fn cli_value(&self) -> Option<&'static str> {
        match self {
            LanguageSelector::Auto => None,
            explicit => Some(explicit.as_str()),
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, LanguageSelector::Auto)
    }
}

impl fmt::Display for LanguageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LanguageSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(LanguageSelector::Auto),
            "python" | "py" => Ok(LanguageSelector::Python),
            "bash" | "sh" => Ok(LanguageSelector::Bash),
            _ => Err(format!(
                "unknown language '{}', expected 'auto', 'python' or 'bash'",
                s
            )),
        }
    }
}
