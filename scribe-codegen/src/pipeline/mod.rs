//! The generation pass.
//!
//! An [`Orchestrator`] drives one template through a fixed sequence of
//! stages:
//!
//! - Initialize the transformer chain with per-pass [`HostSettings`]
//! - Read and parse the template ([`TemplateParser`])
//! - Mutate the code model with the chain
//! - Render the model ([`CodeRenderer`](crate::CodeRenderer)) and wrap it with the
//!   [`LanguageProfile`](crate::LanguageProfile) decoration
//! - Mutate the final text with the chain
//!
//! Diagnostics and progress are pushed to a [`Reporter`] as they happen.
//!
//! # Example
//!
//! ```ignore
//! let request = GenerationRequest::new("Views/Index.cshtml", "Views/Index.cshtml", TargetLanguage::CSharp);
//! let mut orchestrator = Orchestrator::new(request, TemplateSyntax::new(), CSharpRenderer::new())
//!     .chain(ProfileRegistry::builtin().resolve("template")?)
//!     .reporter(TracingReporter::new("Views/Index.cshtml"));
//!
//! let text = orchestrator.generate()?;
//! ```

mod diagnostic;
mod error;
mod orchestrator;
mod parser;
mod reporter;
mod request;
mod settings;
mod state;

pub use diagnostic::{Diagnostic, FATAL_ERROR_CODE};
pub use error::GenerationFailure;
pub use orchestrator::Orchestrator;
pub use parser::{ParseOutput, TemplateParser};
pub use reporter::{EventLog, GenerationEvent, NullReporter, Progress, Reporter, TracingReporter};
pub use request::GenerationRequest;
pub use settings::{DEFAULT_BASE_TYPE, DEFAULT_IMPORTS, HostSettings};
pub use state::PassState;
