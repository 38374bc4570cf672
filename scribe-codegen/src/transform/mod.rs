//! Transformers and transformer chains.
//!
//! A [`Transformer`] hooks into three points of a generation pass:
//! initialization (host settings), model mutation, and final text mutation.
//! A [`TransformChain`] runs its members in order and is itself a
//! transformer, so chains nest.
//!
//! Built-in transformers live in this module; named chains are resolved by
//! the [`ProfileRegistry`].

mod attributes;
mod chain;
mod directives;
mod host;
mod imports;
mod profiles;
mod text;
mod transformer;
mod types;

pub use attributes::{
    AddGeneratedCodeAttribute, AddMarkerAttribute, ExcludeFromCodeCoverage,
    EXCLUDE_FROM_CODE_COVERAGE, GENERATED_CODE_ATTRIBUTE, GENERATOR_NAME, GENERATOR_VERSION,
};
pub use chain::TransformChain;
pub use directives::{DirectiveAction, DirectiveDispatch};
pub use host::{SetLinePragmas, SetNamespace};
pub use imports::SetImports;
pub use profiles::{ProfileInfo, ProfileRegistry, ProfileSource, TEMPLATE_BASE_TYPE, TEMPLATE_IMPORTS};
pub use text::ReplaceText;
pub use transformer::Transformer;
pub use types::{MakePartialAndStripDefaultConstructor, SetBaseType};
