mod about;
mod completions;
mod extract;
mod generate;
mod health;
mod menu;
mod selection;

use std::path::{Path, PathBuf};

use about::AboutCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use extract::ExtractCommand;
use eyre::Result;
use generate::GenerateCommand;
use health::HealthCommand;
use menu::MenuCommand;
use scrypgen_bridge::{Host, Outcome, Session, Settings, project::resolve_project_root};
use selection::SelectionCommand;

use crate::host::{DocumentSink, TerminalHost};

/// Extension trait for exiting on bridge errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for scrypgen_bridge::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "scryp")]
#[command(version)]
#[command(about = "Generate scripts from natural language descriptions with scrypgen")]
pub(crate) struct Cli {
    /// Settings file (defaults to <project>/scrypgen.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let config = self.config.as_deref();
        match &self.command {
            Commands::Generate(cmd) => cmd.run(config),
            Commands::Selection(cmd) => cmd.run(config),
            Commands::Menu(cmd) => cmd.run(config),
            Commands::About(cmd) => cmd.run(),
            Commands::Extract(cmd) => cmd.run(),
            Commands::Health(cmd) => cmd.run(config),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a script from a description
    #[command(alias = "gen")]
    Generate(GenerateCommand),

    /// Generate a script from selected text
    Selection(SelectionCommand),

    /// Choose an action from the ScrypGen menu
    Menu(MenuCommand),

    /// Show information about ScrypGen
    About(AboutCommand),

    /// Extract the script from captured generator output
    Extract(ExtractCommand),

    /// Check that the generator can be run
    Health(HealthCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Project folders shared by the generating commands.
#[derive(Args)]
pub(crate) struct ProjectArgs {
    /// Project folder the generator runs in (first one wins)
    #[arg(short, long = "project", value_name = "DIR")]
    pub projects: Vec<PathBuf>,
}

/// Where the generated document goes.
#[derive(Args)]
pub(crate) struct DocumentArgs {
    /// Write the script to this file or directory instead of stdout
    #[arg(short, long, conflicts_with = "json")]
    pub output: Option<PathBuf>,

    /// Print the document as JSON
    #[arg(long)]
    pub json: bool,
}

impl DocumentArgs {
    pub fn sink(&self) -> DocumentSink {
        match (&self.output, self.json) {
            (Some(path), _) => DocumentSink::File(path.clone()),
            (None, true) => DocumentSink::Json,
            (None, false) => DocumentSink::Stdout,
        }
    }
}

/// Load settings for the host's project and run one session against it.
///
/// Exits with status 1 when the request ended with an error shown to the user.
pub(crate) fn run_session<F>(mut host: TerminalHost, config: Option<&Path>, request: F) -> Result<()>
where
    F: FnOnce(&mut Session<'_, TerminalHost>) -> Result<Outcome>,
{
    let root = resolve_project_root(&host.folders(), host.active_file().as_deref()).unwrap_or_exit();
    let settings = Settings::discover(config, &root).unwrap_or_exit();

    let outcome = request(&mut Session::new(&mut host, &settings))?;
    log::debug!("request finished: {:?}", outcome);

    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
