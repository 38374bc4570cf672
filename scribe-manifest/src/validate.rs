//! Semantic validation of a parsed manifest.

use std::collections::BTreeMap;

use miette::{NamedSource, SourceSpan};
use scribe_core::{is_identifier_part, is_identifier_start};

use crate::{BUILTIN_PROFILES, Error, Manifest, ProfileConfig, Result, TransformerSpec};

/// Validation context that carries source information for error spans.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ValidateContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> ValidateContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    fn validation_error(&self, message: impl Into<String>, needle: &str) -> Box<Error> {
        Error::validation(message, self.src, self.filename, find_span(self.src, needle))
    }

    fn unknown_profile(&self, name: &str) -> Box<Error> {
        Box::new(Error::UnknownProfile {
            src: self.named_source(),
            span: find_span(self.src, name),
            name: name.to_string(),
            builtin: BUILTIN_PROFILES.join(", "),
        })
    }

    /// Validate the whole manifest.
    pub fn validate(&self, manifest: &Manifest) -> Result<()> {
        validate_namespace(&manifest.generator.namespace)
            .map_err(|reason| self.validation_error(reason, &manifest.generator.namespace))?;

        for (name, profile) in &manifest.profiles {
            if BUILTIN_PROFILES.contains(&name.as_str()) {
                return Err(Box::new(Error::ShadowedProfile {
                    src: self.named_source(),
                    span: find_span(self.src, name),
                    name: name.clone(),
                }));
            }
            self.validate_profile(manifest, profile)?;
        }

        if !is_known_profile(manifest, &manifest.generator.profile) {
            return Err(self.unknown_profile(&manifest.generator.profile));
        }

        if let Some(cycle) = find_cycle(&manifest.profiles) {
            let start = cycle.first().cloned().unwrap_or_default();
            return Err(Box::new(Error::ProfileCycle {
                src: self.named_source(),
                span: find_span(self.src, &start),
                cycle: cycle.join(" -> "),
            }));
        }

        Ok(())
    }

    fn validate_profile(&self, manifest: &Manifest, profile: &ProfileConfig) -> Result<()> {
        for spec in &profile.transformers {
            match spec {
                TransformerSpec::Profile { name } if !is_known_profile(manifest, name) => {
                    return Err(self.unknown_profile(name));
                }
                TransformerSpec::MarkerAttribute { name } | TransformerSpec::BaseType { name }
                    if name.trim().is_empty() =>
                {
                    return Err(self.validation_error(
                        format!("'{}' requires a non-empty name", spec.kind()),
                        spec.kind(),
                    ));
                }
                TransformerSpec::Namespace { name } => {
                    validate_namespace(name).map_err(|reason| self.validation_error(reason, name))?;
                }
                TransformerSpec::ReplaceText { from, .. } if from.is_empty() => {
                    return Err(self.validation_error(
                        "'replace-text' requires a non-empty 'from' pattern",
                        "replace-text",
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn is_known_profile(manifest: &Manifest, name: &str) -> bool {
    BUILTIN_PROFILES.contains(&name) || manifest.profiles.contains_key(name)
}

/// Validate a dotted namespace such as `MyApp.Views`.
/// Returns a reason when invalid.
fn validate_namespace(namespace: &str) -> std::result::Result<(), String> {
    if namespace.is_empty() {
        return Err("namespace cannot be empty".to_string());
    }
    for segment in namespace.split('.') {
        let mut chars = segment.chars();
        let valid = chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_part);
        if !valid {
            return Err(format!(
                "invalid namespace '{}': segment '{}' is not an identifier",
                namespace, segment
            ));
        }
    }
    Ok(())
}

/// Find a profile inclusion cycle, returned as the path of profile names
/// with the first name repeated at the end.
fn find_cycle(profiles: &BTreeMap<String, ProfileConfig>) -> Option<Vec<String>> {
    fn visit<'a>(
        name: &'a str,
        profiles: &'a BTreeMap<String, ProfileConfig>,
        stack: &mut Vec<&'a str>,
        done: &mut Vec<&'a str>,
    ) -> Option<Vec<String>> {
        if let Some(pos) = stack.iter().position(|n| *n == name) {
            let mut cycle: Vec<String> = stack[pos..].iter().map(|s| s.to_string()).collect();
            cycle.push(name.to_string());
            return Some(cycle);
        }
        if done.contains(&name) {
            return None;
        }
        let profile = profiles.get(name)?;
        stack.push(name);
        for included in profile.included_profiles() {
            if let Some(cycle) = visit(included, profiles, stack, done) {
                return Some(cycle);
            }
        }
        stack.pop();
        done.push(name);
        None
    }

    let mut done = Vec::new();
    for name in profiles.keys() {
        if let Some(cycle) = visit(name, profiles, &mut Vec::new(), &mut done) {
            return Some(cycle);
        }
    }
    None
}

/// Find the span of a name in the TOML source.
/// Prefers a `[profiles.name]` header, then a quoted occurrence.
pub(crate) fn find_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("[profiles.{}]", name),
        format!("\"{}\"", name),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            let start = pos + pattern.find(name).unwrap_or(0);
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    // Fallback: just find the name anywhere (less precise)
    src.find(name)
        .map(|pos| SourceSpan::from((pos, name.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_namespace() {
        assert!(validate_namespace("MyApp.Views").is_ok());
        assert!(validate_namespace("_Internal").is_ok());
        assert!(validate_namespace("").is_err());
        assert!(validate_namespace("MyApp..Views").is_err());
        assert!(validate_namespace("1App").is_err());
        assert!(validate_namespace("My-App").is_err());
    }

    #[test]
    fn test_find_span_prefers_header() {
        let src = "x = \"extra\"\n[profiles.extra]\n";
        let span = find_span(src, "extra").unwrap();
        assert_eq!(span.offset(), src.find("[profiles.").unwrap() + "[profiles.".len());
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_find_cycle() {
        let a = ProfileConfig {
            description: None,
            transformers: vec![TransformerSpec::Profile { name: "b".into() }],
        };
        let b = ProfileConfig {
            description: None,
            transformers: vec![TransformerSpec::Profile { name: "a".into() }],
        };
        let profiles = BTreeMap::from([("a".to_string(), a), ("b".to_string(), b)]);

        assert_eq!(find_cycle(&profiles), Some(vec!["a".into(), "b".into(), "a".into()]));
    }

    #[test]
    fn test_no_cycle_for_shared_include() {
        let leaf = ProfileConfig::default();
        let a = ProfileConfig {
            description: None,
            transformers: vec![
                TransformerSpec::Profile { name: "leaf".into() },
                TransformerSpec::Profile { name: "leaf".into() },
            ],
        };
        let profiles = BTreeMap::from([("a".to_string(), a), ("leaf".to_string(), leaf)]);

        assert_eq!(find_cycle(&profiles), None);
    }
}
