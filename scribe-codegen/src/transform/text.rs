//! Output text transformer.

use super::Transformer;

/// Replaces every occurrence of a literal substring in the final text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceText {
    from: String,
    to: String,
}

impl ReplaceText {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl Transformer for ReplaceText {
    fn name(&self) -> &'static str {
        "replace-text"
    }

    fn mutate_text(&self, text: String) -> String {
        if self.from.is_empty() {
            return text;
        }
        text.replace(&self.from, &self.to)
    }
}
