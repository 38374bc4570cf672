//! Generate command report data structures.

use std::path::PathBuf;

use scribe_codegen::Diagnostic;

use super::output::{Output, Report};

/// What happened to the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Written,
    /// Existing file already had the generated content.
    Unchanged,
    /// Dry run; the generated text.
    Preview(String),
    /// The pass failed; see the fatal diagnostic.
    Failed,
}

/// Report data from a generation pass.
#[derive(Debug)]
pub struct GenerateReport {
    pub template: PathBuf,
    pub output: PathBuf,
    pub profile: String,
    /// Diagnostics in the order they were reported.
    pub diagnostics: Vec<Diagnostic>,
    pub outcome: GenerateOutcome,
}

impl GenerateReport {
    pub fn succeeded(&self) -> bool {
        self.outcome != GenerateOutcome::Failed
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        let template = self.template.display();
        for diagnostic in &self.diagnostics {
            let msg = format!("{}:{}", template, diagnostic);
            if diagnostic.is_fatal() {
                out.error(&msg);
            } else {
                out.warning(&msg);
            }
        }

        let output = self.output.display();
        match &self.outcome {
            GenerateOutcome::Written => {
                out.added_item(&format!("{} (profile: {})", output, self.profile));
            }
            GenerateOutcome::Unchanged => {
                out.list_item(&format!("{} is up to date", output));
            }
            GenerateOutcome::Preview(text) => {
                out.divider(&output.to_string());
                out.preformatted(text);
                out.divider("Summary");
                out.key_value("Profile", &self.profile);
                out.preformatted(&format!("{} would be generated", output));
            }
            GenerateOutcome::Failed => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(outcome: GenerateOutcome, diagnostics: Vec<Diagnostic>) -> Vec<String> {
        let report = GenerateReport {
            template: "Index.cshtml".into(),
            output: "Index.generated.cs".into(),
            profile: "template".into(),
            diagnostics,
            outcome,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        out.lines
    }

    #[test]
    fn test_written_with_warning() {
        let lines = report(
            GenerateOutcome::Written,
            vec![Diagnostic::new(104, "empty expression '@()'", 3, 7)],
        );
        assert_eq!(
            lines,
            [
                "warning: Index.cshtml:3:7: [SC0104] empty expression '@()'",
                "  + Index.generated.cs (profile: template)",
            ]
        );
    }

    #[test]
    fn test_failed_reports_error_only() {
        let lines = report(
            GenerateOutcome::Failed,
            vec![Diagnostic::fatal("failed to read 'Index.cshtml'")],
        );
        assert_eq!(
            lines,
            ["error: Index.cshtml:1:1: [SC0004] failed to read 'Index.cshtml'"]
        );
    }
}
