//! C# renderer for Scribe code models.

mod literal;
mod naming;
mod renderer;

pub use literal::string_literal;
pub use naming::CSHARP_NAMING;
pub use renderer::CSharpRenderer;
