//! Diagnostic records reported during a generation pass.

use std::fmt;

use serde::Serialize;

/// Code reported for failures that abort a pass (unreadable template,
/// parser crash, renderer error).
pub const FATAL_ERROR_CODE: u32 = 4;

/// A diagnostic message with a 1-based template location.
///
/// Diagnostics carry no severity: parser diagnostics are recoverable and
/// generation continues, while [`FATAL_ERROR_CODE`] marks the single
/// diagnostic emitted for an aborted pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: u32,
    pub message: String,
    pub line: u32,
    pub column: u32,
}

impl Diagnostic {
    pub fn new(code: u32, message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            code,
            message: message.into(),
            line,
            column,
        }
    }

    /// The diagnostic reported for an aborted pass, located at 1:1.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(FATAL_ERROR_CODE, message, 1, 1)
    }

    pub fn is_fatal(&self) -> bool {
        self.code == FATAL_ERROR_CODE
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: [SC{:04}] {}",
            self.line, self.column, self.code, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_diagnostic() {
        let diag = Diagnostic::fatal("failed to read 'x.cshtml'");
        assert!(diag.is_fatal());
        assert_eq!((diag.line, diag.column), (1, 1));
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::new(101, "unterminated code block", 3, 7);
        assert_eq!(diag.to_string(), "3:7: [SC0101] unterminated code block");
    }

    #[test]
    fn test_serialize() {
        let diag = Diagnostic::new(102, "bad", 2, 1);
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": 102, "message": "bad", "line": 2, "column": 1 })
        );
    }
}
