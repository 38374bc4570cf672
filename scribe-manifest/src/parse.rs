//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Error, Manifest, Result, validate::ValidateContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "scribe.toml")
    }
}

impl Manifest {
    /// Parse a scribe.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    ValidateContext::new(content, filename).validate(&manifest)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{DEFAULT_NAMESPACE, DEFAULT_PROFILE, TransformerSpec};

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest = Manifest::from_str("").unwrap();
        assert_eq!(manifest.generator.profile, DEFAULT_PROFILE);
        assert_eq!(manifest.generator.namespace, DEFAULT_NAMESPACE);
        assert!(manifest.generator.line_pragmas);
        assert!(manifest.generator.language.is_none());
        assert!(manifest.profiles.is_empty());
    }

    #[test]
    fn test_full_manifest() {
        let manifest = Manifest::from_str(
            r#"
            [generator]
            profile = "custom"
            namespace = "MyApp.Templates"
            language = "csharp"
            line_pragmas = false

            [generator.directives]
            TypeVisibility = "internal"
            ClassName = "Mail"

            [profiles.custom]
            description = "Template with serialization"
            transformers = [
              { kind = "profile", name = "template" },
              { kind = "marker-attribute", name = "System.SerializableAttribute" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(manifest.generator.profile, "custom");
        assert!(!manifest.generator.line_pragmas);
        let keys: Vec<_> = manifest.generator.directives.keys().collect();
        assert_eq!(keys, ["TypeVisibility", "ClassName"]);

        let custom = manifest.profile("custom").unwrap();
        assert_eq!(custom.transformers.len(), 2);
        assert_eq!(
            custom.transformers[0],
            TransformerSpec::Profile {
                name: "template".into()
            }
        );
    }

    #[test]
    fn test_directives_keep_document_order() {
        let manifest = Manifest::from_str(
            r#"
            [generator.directives]
            Namespace = "Site"
            BaseType = "Page"
            ClassName = "Mail"
            "#,
        )
        .unwrap();

        let pairs: Vec<_> = manifest
            .generator
            .directives
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [("Namespace", "Site"), ("BaseType", "Page"), ("ClassName", "Mail")]
        );
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = Manifest::from_str("[generator]\nflavor = \"spicy\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_default_profile() {
        let err = Manifest::from_str("[generator]\nprofile = \"missing\"\n").unwrap_err();
        assert!(matches!(*err, Error::UnknownProfile { ref name, .. } if name == "missing"));
    }

    #[test]
    fn test_unknown_included_profile() {
        let err = Manifest::from_str(
            r#"
            [profiles.a]
            transformers = [{ kind = "profile", name = "ghost" }]
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::UnknownProfile { ref name, .. } if name == "ghost"));
    }

    #[test]
    fn test_builtin_profile_cannot_be_shadowed() {
        let err = Manifest::from_str("[profiles.template]\ntransformers = []\n").unwrap_err();
        assert!(matches!(*err, Error::ShadowedProfile { .. }));
    }

    #[test]
    fn test_profile_cycle() {
        let err = Manifest::from_str(
            r#"
            [profiles.a]
            transformers = [{ kind = "profile", name = "b" }]

            [profiles.b]
            transformers = [{ kind = "profile", name = "a" }]
            "#,
        )
        .unwrap_err();
        match *err {
            Error::ProfileCycle { cycle, .. } => assert_eq!(cycle, "a -> b -> a"),
            other => panic!("expected cycle error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_namespace() {
        let err = Manifest::from_str("[generator]\nnamespace = \"My App\"\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_empty_marker_attribute_name() {
        let err = Manifest::from_str(
            r#"
            [profiles.a]
            transformers = [{ kind = "marker-attribute", name = " " }]
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_from_file_or_default() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("scribe.toml");
        let manifest = Manifest::from_file_or_default(&missing).unwrap();
        assert_eq!(manifest.generator.profile, DEFAULT_PROFILE);

        std::fs::write(&missing, "[generator]\nnamespace = \"Site\"\n").unwrap();
        let manifest = Manifest::from_file_or_default(&missing).unwrap();
        assert_eq!(manifest.generator.namespace, "Site");
    }
}
