//! Unified language dispatch.
//!
//! Pairs each target language with its renderer.

use scribe_codegen::{GenerationRequest, Orchestrator};
use scribe_codegen_csharp::CSharpRenderer;
use scribe_codegen_vb::VisualBasicRenderer;
use scribe_core::TargetLanguage;
use scribe_template::TemplateSyntax;

/// Language-specific support for code generation.
#[derive(Debug, Clone, Copy)]
pub struct LanguageSupport {
    language: TargetLanguage,
}

impl LanguageSupport {
    pub fn get(language: TargetLanguage) -> Self {
        Self { language }
    }

    /// File extension (without dot) of generated files.
    pub fn extension(&self) -> &'static str {
        self.language.source_extension()
    }

    /// Create an orchestrator for a request using this language's renderer.
    pub fn orchestrator(&self, request: GenerationRequest) -> Orchestrator {
        match self.language {
            TargetLanguage::CSharp => {
                Orchestrator::new(request, TemplateSyntax::new(), CSharpRenderer::new())
            }
            TargetLanguage::VisualBasic => {
                Orchestrator::new(request, TemplateSyntax::new(), VisualBasicRenderer::new())
            }
        }
    }
}
