//! Template parser.

use eyre::Result;
use scribe_codegen::{Diagnostic, HostSettings, ParseOutput, TemplateParser};
use scribe_core::{is_identifier_part, is_identifier_start};
use scribe_model::{CodeModel, Constructor, ImportSet, Located, Namespace, Statement, TypeDecl};

use crate::{codes, cursor::Cursor};

/// Keywords that would start a statement rather than an expression.
const STATEMENT_KEYWORDS: &[&str] = &[
    "if", "else", "for", "foreach", "while", "do", "switch", "try", "lock", "section", "helper",
    "functions",
];

/// The `@`-syntax template parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSyntax;

impl TemplateSyntax {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateParser for TemplateSyntax {
    fn parse(&self, source: &str, settings: &HostSettings) -> Result<ParseOutput> {
        Ok(parse_template(source, settings))
    }
}

/// Parse a template into a code model built from `settings`.
///
/// The generated type starts with a public parameterless constructor and
/// an entry method holding one statement per literal run, expression and
/// code block, each tagged with its template line.
pub fn parse_template(source: &str, settings: &HostSettings) -> ParseOutput {
    let parsed = Parser::new(source).run();
    tracing::debug!(
        statements = parsed.body.len(),
        diagnostics = parsed.diagnostics.len(),
        "parsed template"
    );

    let mut type_decl = TypeDecl::new(&settings.type_name).with_member(Constructor::default());
    type_decl.base_type = parsed.base_type.or_else(|| settings.base_type.clone());
    type_decl.entry_method.body = parsed.body;

    let mut imports: ImportSet = settings.imports.iter().cloned().collect();
    imports.extend(parsed.imports);

    let model = CodeModel::new(Namespace::new(&settings.namespace, type_decl).with_imports(imports));
    ParseOutput::new(model).with_diagnostics(parsed.diagnostics)
}

#[derive(Debug, Default)]
struct Parsed {
    body: Vec<Located<Statement>>,
    imports: Vec<String>,
    base_type: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

struct Parser {
    cursor: Cursor,
    literal: String,
    literal_line: u32,
    out: Parsed,
}

impl Parser {
    fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            literal: String::new(),
            literal_line: 1,
            out: Parsed::default(),
        }
    }

    fn run(mut self) -> Parsed {
        while let Some(c) = self.cursor.peek() {
            if c == '@' {
                self.at_sign();
            } else {
                self.push_literal(c);
                self.cursor.bump();
            }
        }
        self.flush_literal();
        self.out
    }

    fn at_sign(&mut self) {
        let (line, column) = (self.cursor.line(), self.cursor.column());
        let follows_word = self.cursor.prev().is_some_and(|c| c.is_alphanumeric());
        let line_start = self.cursor.at_line_start();
        self.cursor.bump();

        match self.cursor.peek() {
            Some('@') => {
                self.cursor.bump();
                self.push_literal('@');
            }
            Some('*') => {
                self.cursor.bump();
                self.comment(line, column);
            }
            Some('{') => {
                self.cursor.bump();
                self.code_block(line, column, line_start);
            }
            Some('(') => {
                self.cursor.bump();
                self.explicit_expression(line, column);
            }
            Some(c) if follows_word && is_identifier_part(c) => {
                self.push_literal('@');
            }
            Some(c) if is_identifier_start(c) => {
                self.identifier(line, column, line_start);
            }
            _ => {
                self.diagnostic(
                    codes::EMPTY_EXPRESSION,
                    "expected an expression, '{', '(' or '*' after '@'",
                    line,
                    column,
                );
                self.push_literal('@');
            }
        }
    }

    fn comment(&mut self, line: u32, column: u32) {
        loop {
            if self.cursor.eat("*@") {
                return;
            }
            if self.cursor.bump().is_none() {
                self.diagnostic(
                    codes::UNTERMINATED_COMMENT,
                    "comment is missing its closing '*@'",
                    line,
                    column,
                );
                return;
            }
        }
    }

    fn code_block(&mut self, line: u32, column: u32, line_start: bool) {
        let (code, terminated) = self.balanced('{', '}');
        if !terminated {
            self.diagnostic(
                codes::UNTERMINATED_CODE_BLOCK,
                "code block is missing its closing '}'",
                line,
                column,
            );
        }

        // a block on a line of its own leaves no blank line behind
        let own_line = line_start && terminated;
        if own_line {
            self.trim_literal_indent();
        }

        let code = code.trim();
        if !code.is_empty() {
            self.flush_literal();
            self.out
                .body
                .push(Located::new(Statement::Code(code.to_string()), line));
        }

        if own_line {
            self.skip_line_end();
        }
    }

    fn explicit_expression(&mut self, line: u32, column: u32) {
        let (expr, terminated) = self.balanced('(', ')');
        if !terminated {
            self.diagnostic(
                codes::UNTERMINATED_EXPRESSION,
                "expression is missing its closing ')'",
                line,
                column,
            );
        }

        let expr = expr.trim();
        if expr.is_empty() {
            self.diagnostic(codes::EMPTY_EXPRESSION, "empty expression '@()'", line, column);
            return;
        }
        self.push_write(expr.to_string(), line);
    }

    fn identifier(&mut self, line: u32, column: u32, line_start: bool) {
        let word = self.cursor.take_while(is_identifier_part);

        if line_start && matches!(word.as_str(), "using" | "inherits") && self.at_space() {
            self.directive(&word, line, column);
            return;
        }

        if STATEMENT_KEYWORDS.contains(&word.as_str()) {
            self.diagnostic(
                codes::UNSUPPORTED_KEYWORD,
                format!("'@{}' is not supported; use a '@{{ }}' code block", word),
                line,
                column,
            );
            self.push_literal('@');
            for c in word.chars() {
                self.push_literal(c);
            }
            return;
        }

        let mut expr = word;
        loop {
            match self.cursor.peek() {
                Some('.') if self.cursor.peek_nth(1).is_some_and(is_identifier_start) => {
                    self.cursor.bump();
                    expr.push('.');
                    expr.push_str(&self.cursor.take_while(is_identifier_part));
                }
                Some(open @ ('(' | '[')) => {
                    let close = if open == '(' { ')' } else { ']' };
                    self.cursor.bump();
                    let (inner, terminated) = self.balanced(open, close);
                    expr.push(open);
                    expr.push_str(&inner);
                    if !terminated {
                        self.diagnostic(
                            codes::UNTERMINATED_EXPRESSION,
                            format!("expression is missing its closing '{}'", close),
                            line,
                            column,
                        );
                        break;
                    }
                    expr.push(close);
                }
                _ => break,
            }
        }
        self.push_write(expr, line);
    }

    fn directive(&mut self, name: &str, line: u32, column: u32) {
        let value = self.cursor.take_while(|c| c != '\n' && c != '\r');
        let value = value.trim().trim_end_matches(';').trim_end();
        self.trim_literal_indent();
        self.skip_line_end();

        if value.is_empty() {
            self.diagnostic(
                codes::EMPTY_DIRECTIVE,
                format!("'@{}' requires a value", name),
                line,
                column,
            );
            return;
        }

        if name == "using" {
            self.out.imports.push(value.to_string());
        } else {
            self.out.base_type = Some(value.to_string());
        }
    }

    /// Read up to the `close` matching an already consumed `open`, skipping
    /// string and character literals. Returns the text between them and
    /// whether the closing character was found.
    fn balanced(&mut self, open: char, close: char) -> (String, bool) {
        let mut depth = 1usize;
        let mut text = String::new();
        while let Some(c) = self.cursor.bump() {
            match c {
                '"' | '\'' => {
                    text.push(c);
                    self.quoted(c, &mut text);
                }
                c if c == open => {
                    depth += 1;
                    text.push(c);
                }
                c if c == close => {
                    depth -= 1;
                    if depth == 0 {
                        return (text, true);
                    }
                    text.push(c);
                }
                c => text.push(c),
            }
        }
        (text, false)
    }

    fn quoted(&mut self, quote: char, text: &mut String) {
        while let Some(c) = self.cursor.bump() {
            text.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = self.cursor.bump() {
                        text.push(escaped);
                    }
                }
                '\n' => return,
                c if c == quote => return,
                _ => {}
            }
        }
    }

    fn at_space(&self) -> bool {
        matches!(self.cursor.peek(), Some(' ' | '\t'))
    }

    fn skip_line_end(&mut self) {
        self.cursor.eat("\r");
        self.cursor.eat("\n");
    }

    /// Drop spaces and tabs written since the last line break.
    fn trim_literal_indent(&mut self) {
        let trimmed = self.literal.trim_end_matches([' ', '\t']).len();
        if self.literal[..trimmed].is_empty() || self.literal[..trimmed].ends_with('\n') {
            self.literal.truncate(trimmed);
        }
    }

    fn push_literal(&mut self, c: char) {
        if self.literal.is_empty() {
            self.literal_line = self.cursor.line();
        }
        self.literal.push(c);
    }

    fn push_write(&mut self, expr: String, line: u32) {
        self.flush_literal();
        self.out
            .body
            .push(Located::new(Statement::Write(expr), line));
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            let text = std::mem::take(&mut self.literal);
            self.out
                .body
                .push(Located::new(Statement::WriteLiteral(text), self.literal_line));
        }
    }

    fn diagnostic(&mut self, code: u32, message: impl Into<String>, line: u32, column: u32) {
        self.out
            .diagnostics
            .push(Diagnostic::new(code, message, line, column));
    }
}

#[cfg(test)]
mod tests {
    use scribe_model::Member;

    use super::*;

    fn settings() -> HostSettings {
        HostSettings {
            type_name: "Index".into(),
            imports: vec!["System".into()],
            ..HostSettings::default()
        }
    }

    fn body(source: &str) -> Vec<(Statement, Option<u32>)> {
        parse_template(source, &settings())
            .model
            .type_decl()
            .entry_method
            .body
            .iter()
            .map(|s| (s.value.clone(), s.line))
            .collect()
    }

    fn diagnostics(source: &str) -> Vec<(u32, u32, u32)> {
        parse_template(source, &settings())
            .diagnostics
            .iter()
            .map(|d| (d.code, d.line, d.column))
            .collect()
    }

    fn literal(s: &str, line: u32) -> (Statement, Option<u32>) {
        (Statement::WriteLiteral(s.into()), Some(line))
    }

    fn write(s: &str, line: u32) -> (Statement, Option<u32>) {
        (Statement::Write(s.into()), Some(line))
    }

    fn code(s: &str, line: u32) -> (Statement, Option<u32>) {
        (Statement::Code(s.into()), Some(line))
    }

    #[test]
    fn test_plain_markup() {
        assert_eq!(body("<p>Hello</p>\n"), [literal("<p>Hello</p>\n", 1)]);
    }

    #[test]
    fn test_model_from_settings() {
        let output = parse_template("", &settings());
        let ty = output.model.type_decl();
        assert_eq!(ty.name, "Index");
        assert_eq!(ty.base_type, settings().base_type);
        assert_eq!(ty.members, [Member::Constructor(Constructor::default())]);
        assert_eq!(output.model.namespace.name, "Templates");
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn test_implicit_expression() {
        assert_eq!(
            body("<h1>@Model.Title</h1>"),
            [
                literal("<h1>", 1),
                write("Model.Title", 1),
                literal("</h1>", 1)
            ]
        );
    }

    #[test]
    fn test_implicit_expression_with_calls_and_indexers() {
        assert_eq!(
            body("@Html.Raw(items[0].Name).ToString() done."),
            [
                write("Html.Raw(items[0].Name).ToString()", 1),
                literal(" done.", 1)
            ]
        );
    }

    #[test]
    fn test_trailing_dot_is_markup() {
        assert_eq!(
            body("Hi @name."),
            [literal("Hi ", 1), write("name", 1), literal(".", 1)]
        );
    }

    #[test]
    fn test_explicit_expression() {
        assert_eq!(
            body("Total: @(price * (1 + tax))"),
            [literal("Total: ", 1), write("price * (1 + tax)", 1)]
        );
    }

    #[test]
    fn test_indented_code_block() {
        assert_eq!(
            body("<ul>\n    @{ i++; }\n</ul>"),
            [literal("<ul>\n", 1), code("i++;", 2), literal("</ul>", 3)]
        );
    }

    #[test]
    fn test_code_block_on_its_own_line() {
        assert_eq!(
            body("<ul>\n@{ var x = \"}\"; }\n</ul>"),
            [
                literal("<ul>\n", 1),
                code("var x = \"}\";", 2),
                literal("</ul>", 3)
            ]
        );
    }

    #[test]
    fn test_escaped_at_and_email() {
        assert_eq!(
            body("@@home mail me@example.com"),
            [literal("@home mail me@example.com", 1)]
        );
    }

    #[test]
    fn test_comment_is_dropped() {
        assert_eq!(body("a@* note\n*@b"), [literal("ab", 1)]);
    }

    #[test]
    fn test_directives() {
        let output = parse_template(
            "@using MyApp.Models;\n  @inherits MyApp.ViewBase\n<p></p>",
            &settings(),
        );
        let ty = output.model.type_decl();
        assert_eq!(ty.base_type.as_deref(), Some("MyApp.ViewBase"));
        let imports: Vec<&str> = output.model.imports().iter().collect();
        assert_eq!(imports, ["System", "MyApp.Models"]);
        assert_eq!(
            ty.entry_method.body,
            [Located::new(Statement::WriteLiteral("<p></p>".into()), 3)]
        );
    }

    #[test]
    fn test_using_mid_line_is_expression() {
        assert_eq!(body("x @using y"), [literal("x ", 1), write("using", 1), literal(" y", 1)]);
    }

    #[test]
    fn test_unterminated_code_block() {
        assert_eq!(
            diagnostics("line\n  @{ var x = 1;"),
            [(codes::UNTERMINATED_CODE_BLOCK, 2, 3)]
        );
        assert_eq!(
            body("@{ var x = 1;"),
            [code("var x = 1;", 1)]
        );
    }

    #[test]
    fn test_unterminated_expression_and_comment() {
        assert_eq!(diagnostics("@(a"), [(codes::UNTERMINATED_EXPRESSION, 1, 1)]);
        assert_eq!(diagnostics("x @Foo(1"), [(codes::UNTERMINATED_EXPRESSION, 1, 3)]);
        assert_eq!(diagnostics("\n\n@* open"), [(codes::UNTERMINATED_COMMENT, 3, 1)]);
    }

    #[test]
    fn test_recoverable_problems_keep_parsing() {
        assert_eq!(
            diagnostics("@ x\n@if (a) {}\n@()\n@using \n"),
            [
                (codes::EMPTY_EXPRESSION, 1, 1),
                (codes::UNSUPPORTED_KEYWORD, 2, 1),
                (codes::EMPTY_EXPRESSION, 3, 1),
                (codes::EMPTY_DIRECTIVE, 4, 1),
            ]
        );
    }

    #[test]
    fn test_keyword_is_kept_as_markup() {
        assert_eq!(body("@if"), [literal("@if", 1)]);
    }
}
