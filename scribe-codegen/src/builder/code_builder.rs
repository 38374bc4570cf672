//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Mutable builder for indented code.
///
/// # Example
///
/// ```
/// use scribe_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::default();
/// builder.emit(&CodeFragment::braced(
///     "public class Index",
///     vec![CodeFragment::line("int count;")],
/// ));
///
/// assert_eq!(builder.build(), "public class Index\n{\n    int count;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a line at column zero.
    pub fn push_unindented(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Unindented(s) => {
                self.push_unindented(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                open,
                body,
                close,
            } => {
                self.push_line(&header);
                if let Some(o) = open {
                    self.push_line(&o);
                }
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        let width = self.indent_level * self.indent.width();
        self.buffer.extend(std::iter::repeat_n(' ', width));
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::FOUR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::default();
        builder.push_line("int x = 1;");
        assert_eq!(builder.build(), "int x = 1;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::default();
        builder.push_dedent().push_dedent().push_line("x");
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::default();
        builder.emit(&CodeFragment::braced(
            "namespace Templates",
            vec![CodeFragment::braced(
                "public class Index",
                vec![CodeFragment::line("int x;")],
            )],
        ));

        assert_eq!(
            builder.build(),
            "namespace Templates\n{\n    public class Index\n    {\n        int x;\n    }\n}\n"
        );
    }

    #[test]
    fn test_unindented_ignores_nesting() {
        let mut builder = CodeBuilder::default();
        builder.emit(&CodeFragment::braced(
            "void Execute()",
            vec![
                CodeFragment::unindented("#line 3 \"Index.cshtml\""),
                CodeFragment::line("Write(x);"),
            ],
        ));

        assert_eq!(
            builder.build(),
            "void Execute()\n{\n#line 3 \"Index.cshtml\"\n    Write(x);\n}\n"
        );
    }

    #[test]
    fn test_terminated_block() {
        let mut builder = CodeBuilder::new(Indent::spaces(2));
        builder.emit(&CodeFragment::terminated(
            "Public Class Index",
            vec![CodeFragment::line("Inherits Base")],
            "End Class",
        ));

        assert_eq!(
            builder.build(),
            "Public Class Index\n  Inherits Base\nEnd Class\n"
        );
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::default();
        builder
            .push_indent()
            .push_line("a")
            .push_blank()
            .push_line("b");
        assert_eq!(builder.build(), "    a\n\n    b\n");
    }
}
