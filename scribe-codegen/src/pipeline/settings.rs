//! Per-pass host settings.

use scribe_manifest::DEFAULT_NAMESPACE;

/// Base type used when no transformer or directive chooses one.
pub const DEFAULT_BASE_TYPE: &str = "Scribe.Web.WebPage";

/// Imports the parser installs on a fresh model.
pub const DEFAULT_IMPORTS: &[&str] = &[
    "System",
    "System.Collections.Generic",
    "System.IO",
    "System.Linq",
    "System.Net",
    "System.Text",
    "System.Web",
    "System.Web.Helpers",
    "System.Web.Security",
    "System.Web.UI",
    "System.Web.WebPages",
];

/// Settings a parser builds the initial code model from.
///
/// The orchestrator clones its base settings at the start of every pass and
/// fills in [`type_name`](Self::type_name) from the request path, so changes
/// made by transformers during initialization never leak into later passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSettings {
    pub namespace: String,
    /// Set per pass from the request path.
    pub type_name: String,
    pub base_type: Option<String>,
    pub imports: Vec<String>,
    /// Emit line-mapping annotations in the rendered entry method.
    pub line_pragmas: bool,
}

impl HostSettings {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    pub fn with_base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = Some(base_type.into());
        self
    }

    pub fn with_line_pragmas(mut self, enabled: bool) -> Self {
        self.line_pragmas = enabled;
        self
    }
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            type_name: String::new(),
            base_type: Some(DEFAULT_BASE_TYPE.to_string()),
            imports: DEFAULT_IMPORTS.iter().map(|s| s.to_string()).collect(),
            line_pragmas: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = HostSettings::default();
        assert_eq!(settings.namespace, "Templates");
        assert_eq!(settings.base_type.as_deref(), Some(DEFAULT_BASE_TYPE));
        assert_eq!(settings.imports.first().map(String::as_str), Some("System"));
        assert!(settings.line_pragmas);
    }

    #[test]
    fn test_builder() {
        let settings = HostSettings::new("MyApp.Views")
            .with_base_type("MyApp.ViewBase")
            .with_line_pragmas(false);
        assert_eq!(settings.namespace, "MyApp.Views");
        assert_eq!(settings.base_type.as_deref(), Some("MyApp.ViewBase"));
        assert!(!settings.line_pragmas);
    }
}
