//! Visual Basic string expressions.

/// Quote `s` as a Visual Basic string expression.
///
/// Visual Basic literals have no escape sequences: quotes are doubled and
/// control characters are concatenated in with `ChrW`.
///
/// ```
/// use scribe_codegen_vb::string_literal;
///
/// assert_eq!(string_literal("say \"hi\""), r#""say ""hi""""#);
/// assert_eq!(
///     string_literal("a\nb"),
///     r#""a" & Global.Microsoft.VisualBasic.ChrW(10) & "b""#
/// );
/// ```
pub fn string_literal(s: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut run = String::new();

    for c in s.chars() {
        if c.is_control() || c == '\u{2028}' || c == '\u{2029}' {
            if !run.is_empty() {
                parts.push(quote(&run));
                run.clear();
            }
            parts.push(format!("Global.Microsoft.VisualBasic.ChrW({})", c as u32));
        } else {
            run.push(c);
        }
    }
    if !run.is_empty() || parts.is_empty() {
        parts.push(quote(&run));
    }

    parts.join(" & ")
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(string_literal(""), "\"\"");
    }

    #[test]
    fn test_leading_and_trailing_controls() {
        assert_eq!(
            string_literal("\r\nx\t"),
            "Global.Microsoft.VisualBasic.ChrW(13) & Global.Microsoft.VisualBasic.ChrW(10) & \"x\" & Global.Microsoft.VisualBasic.ChrW(9)"
        );
    }

    #[test]
    fn test_backslash_is_literal() {
        assert_eq!(string_literal("C:\\temp"), "\"C:\\temp\"");
    }
}
