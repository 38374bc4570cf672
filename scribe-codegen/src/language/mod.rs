//! Language-specific abstractions.
//!
//! - [`LanguageProfile`] - Decoration text wrapped around rendered code
//! - [`NamingConvention`] - Reserved words and identifier escaping
//! - [`CodeRenderer`] - Trait implemented by language renderers

mod naming;
mod profile;
mod traits;

pub use naming::NamingConvention;
pub use profile::LanguageProfile;
pub use traits::{CodeRenderer, RenderOptions};
