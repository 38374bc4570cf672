//! Code model types for the Scribe template code generator.
//!
//! The code model is the structured form of one generated compilation unit:
//! a single namespace holding a single type declaration. It is produced by a
//! template parser, mutated by transformers and consumed by a renderer.
//!
//! # Architecture
//!
//! ```text
//! template → parser → CodeModel → transformers → renderer → source text
//! ```
//!
//! The types are language-agnostic: the same model renders to C# or
//! Visual Basic.

mod directives;
mod members;
mod model;
mod sets;

pub use directives::Directives;
pub use members::{Constructor, Located, Member, Method, Param, Statement};
pub use model::{CodeModel, Namespace, TypeDecl, Visibility};
pub use sets::{Attribute, AttributeArg, AttributeSet, ImportSet};
