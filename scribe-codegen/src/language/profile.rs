//! Fixed decoration text per target language.

use scribe_core::TargetLanguage;

/// Text wrapped verbatim around every rendered compilation unit.
///
/// C# output suppresses the missing-XML-comment warning (CS1591) for the
/// generated type; Visual Basic output is left undecorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    pub language: TargetLanguage,
    pub pre_block: &'static str,
    pub post_block: &'static str,
}

impl LanguageProfile {
    pub const CSHARP: Self = Self {
        language: TargetLanguage::CSharp,
        pre_block: "#pragma warning disable 1591",
        post_block: "#pragma warning restore 1591",
    };

    pub const VISUAL_BASIC: Self = Self {
        language: TargetLanguage::VisualBasic,
        pre_block: "",
        post_block: "",
    };

    /// Resolve the profile for a target language.
    pub fn for_language(language: TargetLanguage) -> Self {
        match language {
            TargetLanguage::CSharp => Self::CSHARP,
            TargetLanguage::VisualBasic => Self::VISUAL_BASIC,
        }
    }

    /// Wrap a rendered body: pre-block line, body, then the post-block
    /// as the final text.
    pub fn wrap(&self, body: &str) -> String {
        let mut out =
            String::with_capacity(self.pre_block.len() + body.len() + self.post_block.len() + 1);
        out.push_str(self.pre_block);
        out.push('\n');
        out.push_str(body);
        out.push_str(self.post_block);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_language() {
        assert_eq!(
            LanguageProfile::for_language(TargetLanguage::CSharp),
            LanguageProfile::CSHARP
        );
        assert_eq!(
            LanguageProfile::for_language(TargetLanguage::VisualBasic).pre_block,
            ""
        );
    }

    #[test]
    fn test_wrap_csharp() {
        let text = LanguageProfile::CSHARP.wrap("class A {}\n");
        assert_eq!(
            text,
            "#pragma warning disable 1591\nclass A {}\n#pragma warning restore 1591"
        );
    }

    #[test]
    fn test_wrap_visual_basic() {
        assert_eq!(LanguageProfile::VISUAL_BASIC.wrap("Class A\n"), "\nClass A\n");
    }
}
