//! Diagnostic and progress notification channels.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use super::Diagnostic;

/// Progress of a generation pass as `completed` out of `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: u32,
    pub total: u32,
}

impl Progress {
    /// Reported once the template has been parsed.
    pub const MIDPOINT: Self = Self {
        completed: 50,
        total: 100,
    };

    /// Reported once the code model has been rendered.
    pub const COMPLETE: Self = Self {
        completed: 100,
        total: 100,
    };
}

/// A notification emitted during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum GenerationEvent {
    Diagnostic(Diagnostic),
    Progress(Progress),
}

/// Receives notifications from an [`Orchestrator`](super::Orchestrator).
///
/// Calls are synchronous and happen in pipeline order, so the sequence of
/// notifications tells the caller how far a pass got. Implementations must
/// not panic; the orchestrator ignores what they do with the data.
pub trait Reporter: Send {
    /// A recoverable parser diagnostic, or the single fatal diagnostic of an
    /// aborted pass.
    #[allow(unused_variables)]
    fn on_diagnostic(&mut self, diagnostic: &Diagnostic) {}

    /// A progress checkpoint.
    #[allow(unused_variables)]
    fn on_progress(&mut self, progress: Progress) {}
}

/// Discards all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Records notifications in order.
///
/// Clones share the same log, so a caller can keep one handle and give the
/// other to the orchestrator.
///
/// # Example
///
/// ```
/// use scribe_codegen::pipeline::{Diagnostic, EventLog, GenerationEvent, Progress, Reporter};
///
/// let log = EventLog::new();
/// let mut handle = log.clone();
/// handle.on_progress(Progress::MIDPOINT);
///
/// assert_eq!(log.events(), vec![GenerationEvent::Progress(Progress::MIDPOINT)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<GenerationEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events.
    pub fn events(&self) -> Vec<GenerationEvent> {
        self.lock().clone()
    }

    /// Recorded diagnostics, in order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                GenerationEvent::Diagnostic(d) => Some(d.clone()),
                GenerationEvent::Progress(_) => None,
            })
            .collect()
    }

    /// Recorded progress checkpoints, in order.
    pub fn progress(&self) -> Vec<Progress> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                GenerationEvent::Progress(p) => Some(*p),
                GenerationEvent::Diagnostic(_) => None,
            })
            .collect()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<GenerationEvent>> {
        // a panicking writer leaves the vector intact
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, event: GenerationEvent) {
        self.lock().push(event);
    }
}

impl Reporter for EventLog {
    fn on_diagnostic(&mut self, diagnostic: &Diagnostic) {
        self.record(GenerationEvent::Diagnostic(diagnostic.clone()));
    }

    fn on_progress(&mut self, progress: Progress) {
        self.record(GenerationEvent::Progress(progress));
    }
}

/// Forwards notifications to `tracing`.
#[derive(Debug, Clone, Default)]
pub struct TracingReporter {
    /// Template name attached to every event.
    pub template: String,
}

impl TracingReporter {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl Reporter for TracingReporter {
    fn on_diagnostic(&mut self, diagnostic: &Diagnostic) {
        if diagnostic.is_fatal() {
            tracing::error!(
                template = %self.template,
                code = diagnostic.code,
                "{}",
                diagnostic.message
            );
        } else {
            tracing::warn!(
                template = %self.template,
                code = diagnostic.code,
                line = diagnostic.line,
                column = diagnostic.column,
                "{}",
                diagnostic.message
            );
        }
    }

    fn on_progress(&mut self, progress: Progress) {
        tracing::debug!(
            template = %self.template,
            completed = progress.completed,
            total = progress.total,
            "generation progress"
        );
    }
}
