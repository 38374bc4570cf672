//! `scribe.toml` parsing and validation.
//!
//! The manifest selects the transformer profile used for generation,
//! supplies request defaults (namespace, language, directives) and declares
//! custom profiles as ordered lists of transformer specs.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod parse;
mod profile;
mod validate;

pub use error::{Error, Result};
pub use manifest::{DEFAULT_NAMESPACE, DEFAULT_PROFILE, GeneratorConfig, Manifest};
pub use parse::parse_manifest;
pub use profile::{BUILTIN_PROFILES, ProfileConfig, TransformerSpec};
