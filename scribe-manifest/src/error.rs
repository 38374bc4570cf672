use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass --config to point at an existing scribe.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scribe.toml")]
    #[diagnostic(code(scribe::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown profile '{name}'")]
    #[diagnostic(
        code(scribe::unknown_profile),
        help("built-in profiles are: {builtin}; custom profiles are declared as [profiles.<name>]")
    )]
    UnknownProfile {
        #[source_code]
        src: NamedSource<String>,
        #[label("referenced here")]
        span: Option<SourceSpan>,
        name: String,
        builtin: String,
    },

    #[error("profile '{name}' shadows a built-in profile")]
    #[diagnostic(code(scribe::builtin_profile), help("rename the profile, e.g. '{name}-custom'"))]
    ShadowedProfile {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("profile cycle: {cycle}")]
    #[diagnostic(
        code(scribe::profile_cycle),
        help("a profile cannot include itself, directly or through other profiles")
    )]
    ProfileCycle {
        #[source_code]
        src: NamedSource<String>,
        #[label("cycle starts here")]
        span: Option<SourceSpan>,
        cycle: String,
    },

    #[error("{message}")]
    #[diagnostic(code(scribe::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }
}
