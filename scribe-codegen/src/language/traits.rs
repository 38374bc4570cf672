//! Renderer trait implemented by the language crates.

use eyre::Result;
use scribe_core::TargetLanguage;
use scribe_model::CodeModel;

/// Options that affect rendering but not the code model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit line-mapping annotations for entry method statements.
    pub line_pragmas: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { line_pragmas: true }
    }
}

/// Turns a code model into source text for one language.
///
/// The returned text excludes the [`LanguageProfile`](super::LanguageProfile)
/// decoration; the orchestrator wraps it. Renderers treat the type's entry
/// method specially: each statement that carries a template line is
/// preceded by a line-mapping annotation when enabled.
pub trait CodeRenderer: Send + Sync {
    /// The language this renderer produces.
    fn language(&self) -> TargetLanguage;

    /// Render the model.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be expressed in the language.
    /// The orchestrator reports it as a fatal diagnostic.
    fn render(&self, model: &CodeModel, options: &RenderOptions) -> Result<String>;
}
