use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{TemplateArgs, load_manifest};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub template: TemplateArgs,

    /// Output file (defaults to <template>.generated.cs|vb beside the template)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = load_manifest(&self.template.config);
        let job = ops::prepare(&manifest, self.template.job_options())?;

        let report = ops::generate(
            job,
            GenerateOptions {
                output: self.output.as_deref(),
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.succeeded() {
            std::process::exit(1);
        }
        Ok(())
    }
}
