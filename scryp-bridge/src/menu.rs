//! Top-level menu entries.

use std::fmt;

/// Text of the About dialog.
pub const ABOUT_TEXT: &str = "\
ScrypGen - Transform Ideas into Code
Alsania Protocol v1.0
Built by Sigma, Powered by Echo

Transform natural language descriptions into
production-ready Python and Bash scripts.";

/// Entries offered by the menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    FromDescription,
    FromSelection,
    About,
}

impl MenuItem {
    /// Every entry, in menu order.
    pub const ALL: [MenuItem; 3] = [
        MenuItem::FromDescription,
        MenuItem::FromSelection,
        MenuItem::About,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::FromDescription => "Generate Script from Description",
            MenuItem::FromSelection => "Generate Script from Selection",
            MenuItem::About => "About ScrypGen",
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
