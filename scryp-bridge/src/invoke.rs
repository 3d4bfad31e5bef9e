//! Running the external generator.
//!
//! The description is passed as a single argument in an argument vector, so
//! quotes and shell metacharacters in user text never reach a shell.

use std::{
    path::Path,
    process::{Command, Output},
};

use miette::Diagnostic;
use scrypgen_core::{LanguageSelector, RawOutput};
use thiserror::Error;

use crate::config::GeneratorConfig;

/// Failure to obtain output from the generator.
#[derive(Debug, Error, Diagnostic)]
pub enum InvokeError {
    #[error("failed to run '{program}': {source}")]
    #[diagnostic(
        code(scrypgen::spawn),
        help("install scrypgen, or set generator.program in scrypgen.toml")
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(scrypgen::generator_failed))]
    Failed {
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
        message: String,
    },
}

/// The external generation command.
#[derive(Debug, Clone)]
pub struct Generator {
    program: String,
    subcommand: String,
    extra_args: Vec<String>,
}

impl Generator {
    pub fn new(program: impl Into<String>) -> Self {
        Self::from_config(&GeneratorConfig {
            program: program.into(),
            ..GeneratorConfig::default()
        })
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            program: config.program.clone(),
            subcommand: config.subcommand.clone(),
            extra_args: config.extra_args.clone(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program, excluding the program itself.
    pub fn args(&self, description: &str, language: LanguageSelector) -> Vec<String> {
        let mut args = vec![self.subcommand.clone(), description.to_string()];
        if let Some(lang) = language.cli_value() {
            args.push("--language".to_string());
            args.push(lang.to_string());
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Run the generator and capture its standard output.
    ///
    /// A non-zero exit is an error; its output is never returned.
    pub fn invoke(
        &self,
        description: &str,
        language: LanguageSelector,
        cwd: &Path,
    ) -> Result<RawOutput, InvokeError> {
        let args = self.args(description, language);
        log::info!(
            "running {} ({} args) in {}",
            self.program,
            args.len(),
            cwd.display()
        );

        let output = self.run(&args, cwd)?;
        Ok(RawOutput::from_utf8_lossy(&output.stdout))
    }

    /// Check that the generator is reachable, returning its version line.
    pub fn probe(&self, cwd: &Path) -> Result<String, InvokeError> {
        let output = self.run(&["--version".to_string()], cwd)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn run(&self, args: &[String], cwd: &Path) -> Result<Output, InvokeError> {
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|source| InvokeError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        log::debug!(
            "{} exited with {} ({} bytes stdout, {} bytes stderr)",
            self.program,
            output.status,
            output.stdout.len(),
            output.stderr.len()
        );

        if output.status.success() {
            Ok(output)
        } else {
            let code = output.status.code();
            Err(InvokeError::Failed {
                code,
                message: failure_message(code, &output.stderr),
            })
        }
    }
}

/// Standard error when present, otherwise a generic message with the code.
fn failure_message(code: Option<i32>, stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }

    match code {
        Some(code) => format!("Command failed with code {}", code),
        None => "Command terminated by signal".to_string(),
    }
}
