//! Reserved-word handling for target languages.

/// Language-specific identifier rules.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Whether keyword matching is case-sensitive (false for Visual Basic)
    pub case_sensitive: bool,
    /// Escape a reserved word (e.g., "class" -> "@class" in C#)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        if self.case_sensitive {
            self.reserved_words.contains(&name)
        } else {
            self.reserved_words
                .iter()
                .any(|w| w.eq_ignore_ascii_case(name))
        }
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Escape every segment of a dotted name (`My.class.Views`).
    pub fn safe_qualified_name(&self, name: &str) -> String {
        name.split('.')
            .map(|segment| self.safe_name(segment))
            .collect::<Vec<_>>()
            .join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_prefix(s: &str) -> String {
        format!("@{}", s)
    }

    const SAMPLE: NamingConvention = NamingConvention {
        reserved_words: &["class", "Namespace"],
        case_sensitive: true,
        escape_reserved: at_prefix,
    };

    #[test]
    fn test_safe_name() {
        assert_eq!(SAMPLE.safe_name("class"), "@class");
        assert_eq!(SAMPLE.safe_name("Class"), "Class");
        assert_eq!(SAMPLE.safe_name("Index"), "Index");
    }

    #[test]
    fn test_case_insensitive() {
        let vb = NamingConvention {
            case_sensitive: false,
            ..SAMPLE
        };
        assert!(vb.is_reserved("CLASS"));
        assert!(vb.is_reserved("namespace"));
    }

    #[test]
    fn test_safe_qualified_name() {
        assert_eq!(SAMPLE.safe_qualified_name("My.class.Views"), "My.@class.Views");
    }
}
