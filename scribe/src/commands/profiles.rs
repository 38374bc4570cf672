use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::load_manifest;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ProfilesCommand {
    /// Path to scribe.toml (defaults to ./scribe.toml, optional)
    #[arg(short, long, default_value = super::DEFAULT_CONFIG)]
    pub config: PathBuf,
}

impl ProfilesCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = load_manifest(&self.config);
        let report = ops::profiles(&manifest);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
