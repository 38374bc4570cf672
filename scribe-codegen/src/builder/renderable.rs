//! Renderable trait and CodeFragment for decoupled code generation.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A line written at column zero regardless of nesting
    /// (preprocessor directives such as `#line`).
    Unindented(String),
    /// A blank line.
    Blank,
    /// A block: header line, optional opening line, indented body and
    /// optional closing line.
    Block {
        header: String,
        open: Option<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create an unindented line fragment.
    pub fn unindented(s: impl Into<String>) -> Self {
        Self::Unindented(s.into())
    }

    /// Create a brace block in the "C" bracing style:
    /// the braces sit on their own lines.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            open: Some("{".to_string()),
            body,
            close: Some("}".to_string()),
        }
    }

    /// Create a keyword-terminated block (`Class X` ... `End Class`).
    pub fn terminated(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            open: None,
            body,
            close: Some(close.into()),
        }
    }

    /// Create a sequence of fragments.
    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}
