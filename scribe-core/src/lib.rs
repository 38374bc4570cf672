//! Core utilities and types for the Scribe template code generator.
//!
//! This crate provides fundamental types and utilities used across
//! the Scribe workspace: the target language enumeration, type name
//! sanitizing, encoding-aware source reading and output file writing.

mod file;
mod language;
mod naming;
mod source;

// File operations
pub use file::{OutputFile, WriteResult};
// Fundamental types
pub use language::TargetLanguage;
// String utilities
pub use naming::{is_identifier_part, is_identifier_start, sanitize_type_name};
// Source reading
pub use source::{SourceEncoding, SourceText, decode_source, read_source};
