use std::path::Path;

use clap::Args;
use eyre::Result;
use scrypgen_bridge::{Generator, Settings, project::resolve_project_root};

use super::{ProjectArgs, UnwrapOrExit};
use crate::reports::{HealthReport, Report, TerminalOutput};

#[derive(Args)]
pub struct HealthCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl HealthCommand {
    pub fn run(&self, config: Option<&Path>) -> Result<()> {
        let root = resolve_project_root(&self.project.projects, None).unwrap_or_exit();
        let settings = Settings::discover(config, &root).unwrap_or_exit();

        let settings_path = match config {
            Some(path) => Some(path.to_path_buf()),
            None => Some(Settings::default_path(&root)).filter(|p| p.is_file()),
        };

        let generator = Generator::from_config(&settings.generator);
        let report = HealthReport {
            program: generator.program().to_string(),
            version: generator.probe(&root).map_err(|e| e.to_string()),
            project_root: root,
            settings_path,
        };
        report.render(&mut TerminalOutput::new());

        if !report.is_healthy() {
            std::process::exit(1);
        }
        Ok(())
    }
}
