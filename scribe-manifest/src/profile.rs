//! Transformer profile declarations.

use std::fmt;

use serde::Deserialize;

/// Names of the profiles provided by the generator itself.
pub const BUILTIN_PROFILES: &[&str] = &["template", "page", "none"];

/// A `[profiles.<name>]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Optional description shown by `scribe profiles`
    #[serde(default)]
    pub description: Option<String>,

    /// Transformers in application order
    #[serde(default)]
    pub transformers: Vec<TransformerSpec>,
}

impl ProfileConfig {
    /// Names of the profiles this profile includes, in order.
    pub fn included_profiles(&self) -> impl Iterator<Item = &str> {
        self.transformers.iter().filter_map(|t| match t {
            TransformerSpec::Profile { name } => Some(name.as_str()),
            _ => None,
        })
    }
}

/// Declarative form of one transformer.
///
/// ```toml
/// transformers = [
///   { kind = "set-imports", imports = ["System"], replace = true },
///   { kind = "marker-attribute", name = "Serializable" },
///   { kind = "profile", name = "template" },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TransformerSpec {
    SetImports {
        imports: Vec<String>,
        #[serde(default)]
        replace: bool,
    },
    MarkerAttribute {
        name: String,
    },
    BaseType {
        name: String,
    },
    Namespace {
        name: String,
    },
    /// The standard directive table
    Directives,
    /// Partial type without the default constructor
    Partial,
    GeneratedCode,
    ExcludeFromCodeCoverage,
    ReplaceText {
        from: String,
        to: String,
    },
    LinePragmas {
        enabled: bool,
    },
    /// Splice in another profile
    Profile {
        name: String,
    },
}

impl TransformerSpec {
    /// The `kind` tag used in scribe.toml.
    pub fn kind(&self) -> &'static str {
        match self {
            TransformerSpec::SetImports { .. } => "set-imports",
            TransformerSpec::MarkerAttribute { .. } => "marker-attribute",
            TransformerSpec::BaseType { .. } => "base-type",
            TransformerSpec::Namespace { .. } => "namespace",
            TransformerSpec::Directives => "directives",
            TransformerSpec::Partial => "partial",
            TransformerSpec::GeneratedCode => "generated-code",
            TransformerSpec::ExcludeFromCodeCoverage => "exclude-from-code-coverage",
            TransformerSpec::ReplaceText { .. } => "replace-text",
            TransformerSpec::LinePragmas { .. } => "line-pragmas",
            TransformerSpec::Profile { .. } => "profile",
        }
    }
}

impl fmt::Display for TransformerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformerSpec::SetImports { imports, replace } => {
                let mode = if *replace { "replace" } else { "add" };
                write!(f, "set-imports ({}: {})", mode, imports.join(", "))
            }
            TransformerSpec::MarkerAttribute { name }
            | TransformerSpec::BaseType { name }
            | TransformerSpec::Namespace { name }
            | TransformerSpec::Profile { name } => write!(f, "{} {}", self.kind(), name),
            TransformerSpec::ReplaceText { from, to } => {
                write!(f, "replace-text {:?} -> {:?}", from, to)
            }
            TransformerSpec::LinePragmas { enabled } => write!(f, "line-pragmas {}", enabled),
            _ => write!(f, "{}", self.kind()),
        }
    }
}
