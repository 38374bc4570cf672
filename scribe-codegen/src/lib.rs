//! Generation core for the Scribe template code generator.
//!
//! This crate turns a template into target-language source text. It owns the
//! generation pass and the transformer framework; parsing and rendering are
//! injected collaborators implemented by other crates
//! (`scribe-template`, `scribe-codegen-csharp`, `scribe-codegen-vb`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - LanguageProfile, naming conventions and the renderer trait
//! - [`transform`] - Transformer trait, TransformChain, transformer catalog, profiles
//! - [`pipeline`] - Orchestrator, request, diagnostics and progress reporting
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod language;
pub mod pipeline;
pub mod transform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable, code_lines};
pub use language::{CodeRenderer, LanguageProfile, NamingConvention, RenderOptions};
pub use pipeline::{
    Diagnostic, EventLog, FATAL_ERROR_CODE, GenerationEvent, GenerationFailure,
    GenerationRequest, HostSettings, NullReporter, Orchestrator, ParseOutput, PassState, Progress,
    Reporter, TemplateParser, TracingReporter,
};
pub use transform::{ProfileInfo, ProfileRegistry, ProfileSource, TransformChain, Transformer};
