//! C#-specific naming conventions.

use scribe_codegen::NamingConvention;

fn escape_csharp_reserved(name: &str) -> String {
    format!("@{}", name)
}

/// C# keywords, escaped with a verbatim `@` prefix.
pub const CSHARP_NAMING: NamingConvention = NamingConvention {
    reserved_words: &[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
        "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
        "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
        "void", "volatile", "while",
    ],
    case_sensitive: true,
    escape_reserved: escape_csharp_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csharp_reserved_words() {
        assert!(CSHARP_NAMING.is_reserved("class"));
        assert!(CSHARP_NAMING.is_reserved("namespace"));
        assert!(!CSHARP_NAMING.is_reserved("Class"));
    }

    #[test]
    fn test_csharp_escape_reserved() {
        assert_eq!(CSHARP_NAMING.safe_name("class"), "@class");
        assert_eq!(CSHARP_NAMING.safe_name("Index"), "Index");
        assert_eq!(
            CSHARP_NAMING.safe_qualified_name("MyApp.event.Views"),
            "MyApp.@event.Views"
        );
    }
}
