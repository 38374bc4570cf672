//! Check command report data structures.

use scribe_codegen::GenerationEvent;
use serde::Serialize;

use super::output::{Output, Report};

/// Notifications from a pass whose output was discarded.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub template: String,
    /// Whether the pass produced output.
    pub valid: bool,
    /// Diagnostics and progress in the order they were reported.
    pub events: Vec<GenerationEvent>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let mut diagnostics = 0;
        for event in &self.events {
            if let GenerationEvent::Diagnostic(diagnostic) = event {
                diagnostics += 1;
                let msg = format!("{}:{}", self.template, diagnostic);
                if diagnostic.is_fatal() {
                    out.error(&msg);
                } else {
                    out.warning(&msg);
                }
            }
        }

        if diagnostics > 0 {
            out.newline();
        }

        if self.valid {
            out.preformatted(&format!("✓ {} is valid", self.template));
        }
    }
}

#[cfg(test)]
mod tests {
    use scribe_codegen::{Diagnostic, Progress};

    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            template: "Index.cshtml".into(),
            valid: true,
            events: vec![
                GenerationEvent::Diagnostic(Diagnostic::new(105, "unsupported keyword", 2, 4)),
                GenerationEvent::Progress(Progress::MIDPOINT),
                GenerationEvent::Progress(Progress::COMPLETE),
            ],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            [
                "warning: Index.cshtml:2:4: [SC0105] unsupported keyword",
                "",
                "✓ Index.cshtml is valid",
            ]
        );
    }
}
