//! Indentation of generated code and of embedded code blocks.

/// One level of indentation, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(u8);

impl Indent {
    /// Four spaces, the C# and Visual Basic convention.
    pub const FOUR: Self = Self(4);

    pub fn spaces(width: u8) -> Self {
        Self(width)
    }

    pub fn width(&self) -> usize {
        usize::from(self.0)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR
    }
}

/// Split a template code block into lines ready for re-indentation.
///
/// The first line starts right after the block opener and is trimmed on its
/// own. The remaining lines lose the leading whitespace they all share, so
/// nesting inside the block survives. Blank lines are dropped and trailing
/// whitespace is removed.
///
/// ```
/// use scribe_codegen::builder::code_lines;
///
/// let code = " if (ok) {\n        Write(1);\n    }\n";
/// assert_eq!(code_lines(code), ["if (ok) {", "    Write(1);", "}"]);
/// ```
pub fn code_lines(code: &str) -> Vec<&str> {
    let mut lines = code.lines();
    let first = lines.next().map(str::trim).filter(|l| !l.is_empty());
    let rest: Vec<&str> = lines.filter(|l| !l.trim().is_empty()).collect();

    let common = rest
        .iter()
        .map(|l| leading_whitespace(l))
        .min()
        .unwrap_or(0);

    first
        .into_iter()
        .chain(rest.into_iter().map(|l| l[common..].trim_end()))
        .collect()
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}
