//! Health command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from the generator health check.
#[derive(Debug)]
pub struct HealthReport {
    /// Generator program as configured.
    pub program: String,
    /// Project root the check ran in.
    pub project_root: PathBuf,
    /// Settings file in use, `None` for built-in defaults.
    pub settings_path: Option<PathBuf>,
    /// Version line, or the reason the generator could not be run.
    pub version: Result<String, String>,
}

impl HealthReport {
    /// Whether the generator could be run.
    pub fn is_healthy(&self) -> bool {
        self.version.is_ok()
    }
}

impl Report for HealthReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Generator", &self.program);
        out.key_value("Project", &self.project_root.display().to_string());
        let settings = self
            .settings_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in defaults".to_string());
        out.key_value("Settings", &settings);
        out.newline();

        match &self.version {
            Ok(version) if version.is_empty() => out.preformatted("✓ generator is reachable"),
            Ok(version) => out.preformatted(&format!("✓ generator is reachable ({})", version)),
            Err(reason) => out.warning(&format!("generator is not usable: {}", reason)),
        }
    }
}
