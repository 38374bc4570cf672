//! Check operation - run a pass and collect its notifications.

use crate::{ops::Job, reports::CheckReport};

/// Execute the check operation.
///
/// The generated text is discarded.
pub fn check(mut job: Job) -> CheckReport {
    let valid = job.orchestrator.generate().is_ok();
    CheckReport {
        template: job.template.display().to_string(),
        valid,
        events: job.log.events(),
    }
}
