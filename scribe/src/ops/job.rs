//! Job preparation - turn manifest defaults and command-line options into a
//! ready-to-run orchestrator.

use std::path::{Component, Path, PathBuf};

use eyre::{Context, Result, bail, eyre};
use scribe_codegen::{EventLog, GenerationRequest, HostSettings, Orchestrator, ProfileRegistry};
use scribe_core::TargetLanguage;
use scribe_manifest::Manifest;
use scribe_model::Directives;

use crate::language::LanguageSupport;

/// Command-line overrides for a generation job.
#[derive(Debug, Clone, Default)]
pub struct JobOptions {
    pub template: PathBuf,
    pub profile: Option<String>,
    pub namespace: Option<String>,
    pub language: Option<TargetLanguage>,
    /// Applied after the manifest's directives.
    pub directives: Vec<(String, String)>,
    pub project_root: Option<PathBuf>,
}

/// A configured generation pass for one template.
pub struct Job {
    pub template: PathBuf,
    pub language: LanguageSupport,
    pub profile: String,
    pub orchestrator: Orchestrator,
    /// Notifications recorded by the orchestrator.
    pub log: EventLog,
}

/// Resolve language, profile, settings and directives for a template.
pub fn prepare(manifest: &Manifest, options: JobOptions) -> Result<Job> {
    let generator = &manifest.generator;

    let language = options
        .language
        .or(generator.language)
        .or_else(|| TargetLanguage::from_template_path(&options.template))
        .ok_or_else(|| {
            eyre!(
                "cannot infer the target language of '{}'; pass --language",
                options.template.display()
            )
        })?;

    let profile = options
        .profile
        .unwrap_or_else(|| generator.profile.clone());
    let chain = ProfileRegistry::from_manifest(manifest)
        .resolve(&profile)
        .wrap_err("Failed to resolve transformer profile")?;

    let settings = HostSettings::new(
        options
            .namespace
            .unwrap_or_else(|| generator.namespace.clone()),
    )
    .with_line_pragmas(generator.line_pragmas);

    let directives = merge_directives(
        generator
            .directives
            .iter()
            .map(|(k, v)| (k.clone(), v.clone())),
        options.directives,
    );

    let relative = project_relative_path(&options.template, options.project_root.as_deref())?;
    tracing::debug!(
        template = %options.template.display(),
        relative = %relative,
        language = %language,
        profile = %profile,
        "prepared generation job"
    );

    let request = GenerationRequest::new(&options.template, relative, language)
        .with_directives(directives);
    let support = LanguageSupport::get(language);
    let log = EventLog::new();
    let orchestrator = support
        .orchestrator(request)
        .chain(chain)
        .settings(settings)
        .reporter(log.clone());

    Ok(Job {
        template: options.template,
        language: support,
        profile,
        orchestrator,
        log,
    })
}

/// Merge base directives with overrides. An override whose name matches a
/// base directive ignoring case replaces that directive in place.
fn merge_directives(
    base: impl IntoIterator<Item = (String, String)>,
    overrides: Vec<(String, String)>,
) -> Directives {
    base.into_iter().chain(overrides).collect()
}

/// Path of the template relative to the project root, with `/` separators.
///
/// Without an explicit root, relative templates are used as given and
/// absolute ones are made relative to the working directory when possible.
fn project_relative_path(template: &Path, root: Option<&Path>) -> Result<String> {
    let relative = match root {
        Some(root) => match template.strip_prefix(root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => bail!(
                "template '{}' is outside the project root '{}'",
                template.display(),
                root.display()
            ),
        },
        None if template.is_absolute() => std::env::current_dir()
            .ok()
            .and_then(|cwd| template.strip_prefix(cwd).ok().map(Path::to_path_buf))
            .unwrap_or_else(|| template.to_path_buf()),
        None => template.to_path_buf(),
    };

    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(template: &str) -> JobOptions {
        JobOptions {
            template: PathBuf::from(template),
            ..JobOptions::default()
        }
    }

    #[test]
    fn test_project_relative_path() {
        assert_eq!(
            project_relative_path(Path::new("./Views/Index.cshtml"), None).unwrap(),
            "Views/Index.cshtml"
        );
        assert_eq!(
            project_relative_path(
                Path::new("site/Views/Index.cshtml"),
                Some(Path::new("site"))
            )
            .unwrap(),
            "Views/Index.cshtml"
        );
        let err =
            project_relative_path(Path::new("other/Index.cshtml"), Some(Path::new("site")))
                .unwrap_err();
        assert!(err.to_string().contains("outside the project root"));
    }

    #[test]
    fn test_merge_directives_overrides_ignoring_case() {
        let directives = merge_directives(
            [
                ("ClassName".to_string(), "Base".to_string()),
                ("TypeVisibility".to_string(), "internal".to_string()),
            ],
            vec![
                ("classname".to_string(), "Mail".to_string()),
                ("Namespace".to_string(), "Site".to_string()),
            ],
        );
        let pairs: Vec<_> = directives.iter().collect();
        assert_eq!(
            pairs,
            [
                ("ClassName", "Mail"),
                ("TypeVisibility", "internal"),
                ("Namespace", "Site")
            ]
        );
    }

    #[test]
    fn test_language_from_extension() {
        let job = prepare(&Manifest::default(), options("Views/Index.vbhtml")).unwrap();
        assert_eq!(job.language.extension(), "vb");
        assert_eq!(job.profile, "template");
        assert_eq!(job.orchestrator.request().project_relative_path(), "Views/Index.vbhtml");
    }

    #[test]
    fn test_language_override() {
        let mut opts = options("Views/Index.txt");
        opts.language = Some(TargetLanguage::CSharp);
        let job = prepare(&Manifest::default(), opts).unwrap();
        assert_eq!(job.language.extension(), "cs");
    }

    #[test]
    fn test_unknown_language() {
        let err = prepare(&Manifest::default(), options("Views/Index.txt"))
            .err()
            .unwrap();
        assert!(err.to_string().contains("cannot infer the target language"));
    }

    #[test]
    fn test_unknown_profile() {
        let mut opts = options("Index.cshtml");
        opts.profile = Some("ghost".into());
        let err = prepare(&Manifest::default(), opts).err().unwrap();
        assert_eq!(err.to_string(), "Failed to resolve transformer profile");
        assert!(
            err.chain()
                .any(|cause| cause.to_string().contains("unknown profile 'ghost'"))
        );
    }
}
