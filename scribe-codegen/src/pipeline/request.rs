//! Generation request.

use std::path::{Path, PathBuf};

use scribe_core::TargetLanguage;
use scribe_model::Directives;

/// What to generate. Immutable for the duration of a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    source_path: PathBuf,
    project_relative_path: String,
    language: TargetLanguage,
    directives: Directives,
}

impl GenerationRequest {
    pub fn new(
        source_path: impl Into<PathBuf>,
        project_relative_path: impl Into<String>,
        language: TargetLanguage,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            project_relative_path: project_relative_path.into(),
            language,
            directives: Directives::new(),
        }
    }

    pub fn with_directives(mut self, directives: Directives) -> Self {
        self.directives = directives;
        self
    }

    /// Template file read by the pass.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Path the default type name is derived from.
    pub fn project_relative_path(&self) -> &str {
        &self.project_relative_path
    }

    pub fn language(&self) -> TargetLanguage {
        self.language
    }

    pub fn directives(&self) -> &Directives {
        &self.directives
    }
}
