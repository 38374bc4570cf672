mod check;
mod completions;
mod generate;
mod profiles;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use profiles::ProfilesCommand;
use scribe_core::TargetLanguage;
use scribe_manifest::Manifest;

use crate::ops::JobOptions;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for scribe_manifest::Result<T> {
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

/// Load the manifest at `path`, falling back to defaults when the default
/// path does not exist.
pub(crate) fn load_manifest(path: &Path) -> Manifest {
    if path == Path::new(DEFAULT_CONFIG) {
        Manifest::from_file_or_default(path).unwrap_or_exit()
    } else {
        Manifest::from_file(path).unwrap_or_exit()
    }
}

const DEFAULT_CONFIG: &str = "scribe.toml";

#[derive(Parser)]
#[command(name = "scribe")]
#[command(version)]
#[command(about = "Compile text templates into C# and Visual Basic source files")]
pub(crate) struct Cli {
    /// Log pipeline stages (-v for debug, -vv for trace; RUST_LOG overrides)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Profiles(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a source file from a template
    Generate(GenerateCommand),

    /// Run a generation pass and report diagnostics without writing output
    Check(CheckCommand),

    /// List built-in and configured transformer profiles
    Profiles(ProfilesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Arguments shared by commands that run a generation pass.
#[derive(Args)]
pub(crate) struct TemplateArgs {
    /// Template file to compile
    pub template: PathBuf,

    /// Path to scribe.toml (defaults to ./scribe.toml, optional)
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Transformer profile (overrides the manifest)
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Namespace of the generated type
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Target language (derived from the template extension when omitted)
    #[arg(short, long)]
    pub language: Option<TargetLanguage>,

    /// Directive passed to the transformers, e.g. -D ClassName=Mail
    #[arg(short = 'D', long = "directive", value_name = "KEY=VALUE", value_parser = parse_directive)]
    pub directives: Vec<(String, String)>,

    /// Directory the default type name is computed relative to
    #[arg(long)]
    pub project_root: Option<PathBuf>,
}

impl TemplateArgs {
    pub fn job_options(&self) -> JobOptions {
        JobOptions {
            template: self.template.clone(),
            profile: self.profile.clone(),
            namespace: self.namespace.clone(),
            language: self.language,
            directives: self.directives.clone(),
            project_root: self.project_root.clone(),
        }
    }
}

fn parse_directive(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("directive '{}' has an empty name", s));
    }
    Ok((key.to_string(), value.to_string()))
}
