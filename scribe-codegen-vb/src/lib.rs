//! Visual Basic renderer for Scribe code models.

mod literal;
mod naming;
mod renderer;

pub use literal::string_literal;
pub use naming::VB_NAMING;
pub use renderer::VisualBasicRenderer;
