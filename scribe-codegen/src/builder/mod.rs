//! Code generation building blocks.
//!
//! Renderers describe output as [`CodeFragment`]s and feed them to a
//! [`CodeBuilder`], which owns indentation and line endings:
//! - [`CodeBuilder`] - Builder for indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation width, and [`code_lines`] for embedded code blocks

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::{Indent, code_lines};
pub use renderable::{CodeFragment, Renderable};
