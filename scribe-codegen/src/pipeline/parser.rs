//! Template parser collaborator.

use eyre::Result;
use scribe_model::CodeModel;

use super::{Diagnostic, HostSettings};

/// Result of parsing a template.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub model: CodeModel,
    /// Recoverable problems, in source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn new(model: CodeModel) -> Self {
        Self {
            model,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Vec<Diagnostic>) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

/// Turns template source into a code model.
///
/// The model is built from `settings`: its namespace, type name, base type
/// and imports start out as the settings say. Syntax problems are returned
/// as diagnostics; an `Err` aborts the pass.
pub trait TemplateParser: Send + Sync {
    fn parse(&self, source: &str, settings: &HostSettings) -> Result<ParseOutput>;
}
