use clap::Args;
use eyre::Result;
use scrypgen_bridge::{Host, menu::ABOUT_TEXT};

use crate::host::TerminalHost;

#[derive(Args)]
pub struct AboutCommand {}

impl AboutCommand {
    pub fn run(&self) -> Result<()> {
        TerminalHost::default().message(ABOUT_TEXT);
        Ok(())
    }
}
