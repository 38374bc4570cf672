//! Named transformer chains.
//!
//! Built-in profiles are a fixed table compiled into the generator. Custom
//! profiles come from the `[profiles]` section of `scribe.toml` and are
//! built from their declarative [`TransformerSpec`]s, splicing in other
//! profiles where a spec says so.

use std::collections::BTreeMap;

use eyre::{Result, bail};
use scribe_manifest::{Manifest, ProfileConfig, TransformerSpec};

use super::{
    AddGeneratedCodeAttribute, AddMarkerAttribute, DirectiveDispatch, ExcludeFromCodeCoverage,
    MakePartialAndStripDefaultConstructor, ReplaceText, SetBaseType, SetImports, SetLinePragmas,
    SetNamespace, TransformChain,
};

/// Base type of classes generated by the `template` profile.
pub const TEMPLATE_BASE_TYPE: &str = "Scribe.Templating.TemplateBase";

/// Imports installed by the `template` profile.
pub const TEMPLATE_IMPORTS: &[&str] = &[
    "System",
    "System.Collections.Generic",
    "System.Linq",
    "System.Text",
];

struct Builtin {
    name: &'static str,
    description: &'static str,
    build: fn() -> TransformChain,
}

const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "template",
        description: "Standalone text template with a minimal import list",
        build: template_profile,
    },
    Builtin {
        name: "page",
        description: "Web page with the host's default imports and base type",
        build: page_profile,
    },
    Builtin {
        name: "none",
        description: "No transformers",
        build: TransformChain::new,
    },
];

fn template_profile() -> TransformChain {
    TransformChain::new()
        .with(SetImports::replacing(TEMPLATE_IMPORTS.iter().copied()))
        .with(AddGeneratedCodeAttribute)
        .with(DirectiveDispatch::standard())
        .with(SetBaseType::new(TEMPLATE_BASE_TYPE))
        .with(MakePartialAndStripDefaultConstructor)
}

fn page_profile() -> TransformChain {
    TransformChain::new()
        .with(AddGeneratedCodeAttribute)
        .with(DirectiveDispatch::standard())
}

/// Where a profile is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    Builtin,
    Manifest,
}

/// Summary of a profile for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileInfo {
    pub name: String,
    pub description: Option<String>,
    pub source: ProfileSource,
    /// One line per transformer, in order.
    pub transformers: Vec<String>,
}

/// Resolves profile names to transformer chains.
///
/// # Example
///
/// ```
/// use scribe_codegen::ProfileRegistry;
///
/// let registry = ProfileRegistry::builtin();
/// let chain = registry.resolve("template").unwrap();
/// assert_eq!(chain.names()[0], "set-imports");
/// assert!(registry.resolve("missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    custom: BTreeMap<String, ProfileConfig>,
}

impl ProfileRegistry {
    /// Only the built-in profiles.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Built-in profiles plus those declared in the manifest.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            custom: manifest.profiles.clone(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        find_builtin(name).is_some() || self.custom.contains_key(name)
    }

    /// Build a fresh chain for the named profile.
    ///
    /// # Errors
    ///
    /// Fails for unknown profiles and for profiles that include themselves.
    pub fn resolve(&self, name: &str) -> Result<TransformChain> {
        let mut stack = Vec::new();
        self.resolve_inner(name, &mut stack)
    }

    /// All profiles, built-ins first, then custom profiles by name.
    pub fn profiles(&self) -> Vec<ProfileInfo> {
        let builtins = BUILTINS.iter().map(|b| ProfileInfo {
            name: b.name.to_string(),
            description: Some(b.description.to_string()),
            source: ProfileSource::Builtin,
            transformers: (b.build)()
                .names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        });
        let custom = self.custom.iter().map(|(name, config)| ProfileInfo {
            name: name.clone(),
            description: config.description.clone(),
            source: ProfileSource::Manifest,
            transformers: config.transformers.iter().map(|t| t.to_string()).collect(),
        });
        builtins.chain(custom).collect()
    }

    fn resolve_inner(&self, name: &str, stack: &mut Vec<String>) -> Result<TransformChain> {
        if let Some(builtin) = find_builtin(name) {
            return Ok((builtin.build)());
        }

        let Some(config) = self.custom.get(name) else {
            bail!(
                "unknown profile '{}' (available: {})",
                name,
                self.names().join(", ")
            );
        };

        if stack.iter().any(|n| n == name) {
            stack.push(name.to_string());
            bail!("profile cycle: {}", stack.join(" -> "));
        }

        stack.push(name.to_string());
        let mut chain = TransformChain::new();
        for spec in &config.transformers {
            match spec {
                TransformerSpec::Profile { name } => {
                    chain.push(self.resolve_inner(name, stack)?);
                }
                other => {
                    chain.push_boxed(build_transformer(other));
                }
            }
        }
        stack.pop();

        tracing::debug!(profile = name, transformers = ?chain.names(), "resolved profile");
        Ok(chain)
    }

    fn names(&self) -> Vec<&str> {
        BUILTINS
            .iter()
            .map(|b| b.name)
            .chain(self.custom.keys().map(String::as_str))
            .collect()
    }
}

fn find_builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}

fn build_transformer(spec: &TransformerSpec) -> Box<dyn super::Transformer> {
    match spec {
        TransformerSpec::SetImports { imports, replace } => {
            Box::new(SetImports::new(imports.iter().cloned(), *replace))
        }
        TransformerSpec::MarkerAttribute { name } => Box::new(AddMarkerAttribute::new(name)),
        TransformerSpec::BaseType { name } => Box::new(SetBaseType::new(name)),
        TransformerSpec::Namespace { name } => Box::new(SetNamespace::new(name)),
        TransformerSpec::Directives => Box::new(DirectiveDispatch::standard()),
        TransformerSpec::Partial => Box::new(MakePartialAndStripDefaultConstructor),
        TransformerSpec::GeneratedCode => Box::new(AddGeneratedCodeAttribute),
        TransformerSpec::ExcludeFromCodeCoverage => Box::new(ExcludeFromCodeCoverage),
        TransformerSpec::ReplaceText { from, to } => Box::new(ReplaceText::new(from, to)),
        TransformerSpec::LinePragmas { enabled } => Box::new(SetLinePragmas::new(*enabled)),
        // spliced by the caller
        TransformerSpec::Profile { .. } => Box::new(TransformChain::new()),
    }
}

#[cfg(test)]
mod tests {
    use scribe_manifest::BUILTIN_PROFILES;

    use super::*;

    fn manifest(toml: &str) -> Manifest {
        toml.parse().unwrap()
    }

    #[test]
    fn test_builtin_table_matches_manifest_names() {
        let names: Vec<&str> = BUILTINS.iter().map(|b| b.name).collect();
        assert_eq!(names, BUILTIN_PROFILES);
    }

    #[test]
    fn test_template_profile_order() {
        let chain = ProfileRegistry::builtin().resolve("template").unwrap();
        assert_eq!(
            chain.names(),
            [
                "set-imports",
                "generated-code",
                "directives",
                "base-type",
                "partial"
            ]
        );
    }

    #[test]
    fn test_none_profile_is_empty() {
        let chain = ProfileRegistry::builtin().resolve("none").unwrap();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_custom_profile_splices_builtin() {
        let manifest = manifest(
            r#"
[profiles.custom]
transformers = [
  { kind = "profile", name = "page" },
  { kind = "marker-attribute", name = "Serializable" },
]
"#,
        );
        let registry = ProfileRegistry::from_manifest(&manifest);
        let chain = registry.resolve("custom").unwrap();

        assert_eq!(chain.len(), 2);
        assert_eq!(
            chain.names(),
            ["generated-code", "directives", "marker-attribute"]
        );
    }

    #[test]
    fn test_unknown_profile() {
        let err = ProfileRegistry::builtin().resolve("ghost").unwrap_err();
        assert!(err.to_string().contains("unknown profile 'ghost'"));
        assert!(err.to_string().contains("template, page, none"));
    }

    #[test]
    fn test_cycle_is_reported() {
        // bypasses manifest validation, which rejects cycles up front
        let mut custom = BTreeMap::new();
        for (name, next) in [("a", "b"), ("b", "a")] {
            custom.insert(
                name.to_string(),
                ProfileConfig {
                    description: None,
                    transformers: vec![TransformerSpec::Profile {
                        name: next.to_string(),
                    }],
                },
            );
        }
        let registry = ProfileRegistry { custom };

        let err = registry.resolve("a").unwrap_err();
        assert_eq!(err.to_string(), "profile cycle: a -> b -> a");
    }

    #[test]
    fn test_profiles_listing() {
        let manifest = manifest(
            r#"
[profiles.strict]
description = "No line pragmas"
transformers = [{ kind = "line-pragmas", enabled = false }]
"#,
        );
        let profiles = ProfileRegistry::from_manifest(&manifest).profiles();

        assert_eq!(profiles.len(), 4);
        let strict = &profiles[3];
        assert_eq!(strict.name, "strict");
        assert_eq!(strict.source, ProfileSource::Manifest);
        assert_eq!(strict.transformers, ["line-pragmas false"]);
        assert!(registry_contains_builtins(&profiles));
    }

    fn registry_contains_builtins(profiles: &[ProfileInfo]) -> bool {
        BUILTIN_PROFILES
            .iter()
            .all(|name| profiles.iter().any(|p| p.name == *name))
    }
}
