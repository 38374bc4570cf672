//! Template syntax parser for Scribe.
//!
//! Templates are markup with embedded code introduced by `@`:
//!
//! | Syntax | Meaning |
//! |---|---|
//! | `@name.Member(args)[i]` | write an expression |
//! | `@( expr )` | write an explicit expression |
//! | `@{ code }` | embed a code block |
//! | `@* comment *@` | discarded |
//! | `@@` | a literal `@` |
//! | `@using Namespace` | add an import (at line start) |
//! | `@inherits Type` | set the base type (at line start) |
//!
//! An `@` directly preceded by a letter or digit is literal text, so email
//! addresses need no escaping.
//!
//! Syntax problems are reported as diagnostics with the codes in
//! [`codes`]; the parser always produces a model.

mod cursor;
mod parser;

pub use parser::{TemplateSyntax, parse_template};

/// Diagnostic codes reported by the parser.
pub mod codes {
    /// `@{` without a matching `}`.
    pub const UNTERMINATED_CODE_BLOCK: u32 = 101;
    /// `@(` or a call in an implicit expression without its closing bracket.
    pub const UNTERMINATED_EXPRESSION: u32 = 102;
    /// `@*` without a matching `*@`.
    pub const UNTERMINATED_COMMENT: u32 = 103;
    /// `@` not followed by an expression, block or comment.
    pub const EMPTY_EXPRESSION: u32 = 104;
    /// Control-flow keyword after `@`; use a code block instead.
    pub const UNSUPPORTED_KEYWORD: u32 = 105;
    /// `@using` or `@inherits` without a value.
    pub const EMPTY_DIRECTIVE: u32 = 106;
}
