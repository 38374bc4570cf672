//! C# string literals.

/// Quote `s` as a regular C# string literal.
///
/// ```
/// use scribe_codegen_csharp::string_literal;
///
/// assert_eq!(string_literal("say \"hi\"\n"), r#""say \"hi\"\n""#);
/// ```
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            // controls and line separators cannot appear raw
            c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() {
        assert_eq!(string_literal("<p>"), "\"<p>\"");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(string_literal("a\\b\r\n\t"), r#""a\\b\r\n\t""#);
        assert_eq!(string_literal("\u{1}"), r#""\u0001""#);
        assert_eq!(string_literal("x\u{2028}y"), r#""x\u2028y""#);
    }

    #[test]
    fn test_non_ascii_is_kept() {
        assert_eq!(string_literal("café ✓"), "\"café ✓\"");
    }
}
