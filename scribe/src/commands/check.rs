use clap::{Args, ValueEnum};
use eyre::{Context, Result};

use super::{TemplateArgs, load_manifest};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub template: TemplateArgs,

    /// Report format
    #[arg(long, value_enum, default_value_t)]
    pub format: Format,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = load_manifest(&self.template.config);
        let job = ops::prepare(&manifest, self.template.job_options())?;
        let report = ops::check(job);

        match self.format {
            Format::Text => report.render(&mut TerminalOutput::new()),
            Format::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .wrap_err("Failed to serialize check report")?;
                println!("{}", json);
            }
        }

        if !report.valid {
            std::process::exit(1);
        }
        Ok(())
    }
}
