//! Generate operation - run a pass and write the output file.

use std::path::Path;

use eyre::{Context, Result};
use scribe_core::{OutputFile, WriteResult};

use super::Job;
use crate::reports::{GenerateOutcome, GenerateReport};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output file; defaults to `<template>.generated.<ext>` beside the template.
    pub output: Option<&'a Path>,
    /// Whether to preview without writing.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// A failed pass is not an error here: the report carries the fatal
/// diagnostic and the caller decides the exit status.
pub fn generate(mut job: Job, opts: GenerateOptions) -> Result<GenerateReport> {
    let path = match opts.output {
        Some(path) => path.to_path_buf(),
        None => OutputFile::path_for_template(&job.template, job.language.extension()),
    };

    let outcome = match job.orchestrator.generate() {
        Ok(text) if opts.dry_run => GenerateOutcome::Preview(text),
        Ok(text) => {
            let file = OutputFile::new(&path, text);
            match file.write().wrap_err("Failed to write generated code")? {
                WriteResult::Written => GenerateOutcome::Written,
                WriteResult::Unchanged => GenerateOutcome::Unchanged,
            }
        }
        Err(failure) => {
            tracing::debug!(state = %failure.state(), "generation failed");
            GenerateOutcome::Failed
        }
    };

    Ok(GenerateReport {
        template: job.template,
        output: path,
        profile: job.profile,
        diagnostics: job.log.diagnostics(),
        outcome,
    })
}
