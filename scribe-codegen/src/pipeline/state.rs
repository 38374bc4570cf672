//! Generation pass state machine.

use std::fmt;

/// Where a pass is, or where it stopped.
///
/// ```text
/// Idle -> Parsing -> ParseFailed
///                 -> Parsed -> Mutating -> Rendering -> RenderFailed
///                                                    -> OutputReady
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassState {
    #[default]
    Idle,
    Parsing,
    ParseFailed,
    Parsed,
    Mutating,
    Rendering,
    RenderFailed,
    OutputReady,
}

impl PassState {
    /// Returns true if the pass has stopped.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PassState::ParseFailed | PassState::RenderFailed | PassState::OutputReady
        )
    }

    /// Returns true if `next` directly follows `self`.
    pub fn can_transition_to(&self, next: PassState) -> bool {
        use PassState::*;
        matches!(
            (self, next),
            (_, Idle)
                | (Idle, Parsing)
                | (Parsing, ParseFailed)
                | (Parsing, Parsed)
                | (Parsed, Mutating)
                | (Mutating, Rendering)
                | (Rendering, RenderFailed)
                | (Rendering, OutputReady)
        )
    }
}

impl fmt::Display for PassState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PassState::Idle => "idle",
            PassState::Parsing => "parsing",
            PassState::ParseFailed => "parse-failed",
            PassState::Parsed => "parsed",
            PassState::Mutating => "mutating",
            PassState::Rendering => "rendering",
            PassState::RenderFailed => "render-failed",
            PassState::OutputReady => "output-ready",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        let path = [
            PassState::Idle,
            PassState::Parsing,
            PassState::Parsed,
            PassState::Mutating,
            PassState::Rendering,
            PassState::OutputReady,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
        assert!(PassState::OutputReady.is_terminal());
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!PassState::Idle.can_transition_to(PassState::Rendering));
        assert!(!PassState::ParseFailed.can_transition_to(PassState::Mutating));
        assert!(PassState::RenderFailed.can_transition_to(PassState::Idle));
    }
}
