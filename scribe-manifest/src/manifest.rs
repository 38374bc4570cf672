//! Root manifest types for scribe.toml.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use scribe_core::TargetLanguage;
use serde::Deserialize;

use crate::ProfileConfig;

/// Profile used when neither the manifest nor the command line picks one.
pub const DEFAULT_PROFILE: &str = "template";

/// Namespace of generated types unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "Templates";

/// Root manifest for scribe.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Request defaults
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Custom transformer profiles, keyed by profile name
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

impl Manifest {
    /// Look up a custom profile.
    pub fn profile(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles.get(name)
    }
}

/// The `[generator]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Transformer profile applied to every template
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Namespace of generated types
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Target language; derived from the template extension when unset
    #[serde(default)]
    pub language: Option<TargetLanguage>,

    /// Emit line-mapping annotations back to the template
    #[serde(default = "default_line_pragmas")]
    pub line_pragmas: bool,

    /// Directives applied to every template, before command-line directives
    #[serde(default)]
    pub directives: IndexMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            namespace: default_namespace(),
            language: None,
            line_pragmas: default_line_pragmas(),
            directives: IndexMap::new(),
        }
    }
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_line_pragmas() -> bool {
    true
}
