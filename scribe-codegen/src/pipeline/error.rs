//! Fatal generation failures.

use thiserror::Error;

use super::PassState;

/// Why a pass produced no output.
///
/// The message carries the full error chain of the underlying cause; the
/// same text is reported as the fatal diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationFailure {
    #[error("failed to parse template '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("failed to render '{path}': {message}")]
    Render { path: String, message: String },
}

impl GenerationFailure {
    /// The underlying error chain.
    pub fn message(&self) -> &str {
        match self {
            GenerationFailure::Parse { message, .. } | GenerationFailure::Render { message, .. } => {
                message
            }
        }
    }

    /// The terminal state of the failed pass.
    pub fn state(&self) -> PassState {
        match self {
            GenerationFailure::Parse { .. } => PassState::ParseFailed,
            GenerationFailure::Render { .. } => PassState::RenderFailed,
        }
    }
}

/// Join an error and its sources with `": "`.
pub(crate) fn chain_message(err: &eyre::Report) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}

#[cfg(test)]
mod tests {
    use eyre::WrapErr;

    use super::*;

    #[test]
    fn test_chain_message() {
        let err: eyre::Result<()> = Err(eyre::eyre!("disk on fire"));
        let err = err.wrap_err("failed to read 'a.cshtml'").unwrap_err();
        assert_eq!(chain_message(&err), "failed to read 'a.cshtml': disk on fire");
    }

    #[test]
    fn test_failure_state() {
        let failure = GenerationFailure::Render {
            path: "a.cshtml".into(),
            message: "boom".into(),
        };
        assert_eq!(failure.state(), PassState::RenderFailed);
        assert_eq!(failure.message(), "boom");
        assert_eq!(failure.to_string(), "failed to render 'a.cshtml': boom");
    }
}
