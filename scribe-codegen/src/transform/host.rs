//! Transformers that adjust host settings before parsing.

use scribe_model::Directives;

use super::Transformer;
use crate::pipeline::HostSettings;

/// Places the generated type in a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNamespace {
    namespace: String,
}

impl SetNamespace {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Transformer for SetNamespace {
    fn name(&self) -> &'static str {
        "set-namespace"
    }

    fn initialize(&mut self, settings: &mut HostSettings, _directives: &Directives) {
        settings.namespace.clone_from(&self.namespace);
    }
}

/// Turns line-mapping annotations on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetLinePragmas {
    enabled: bool,
}

impl SetLinePragmas {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Transformer for SetLinePragmas {
    fn name(&self) -> &'static str {
        "line-pragmas"
    }

    fn initialize(&mut self, settings: &mut HostSettings, _directives: &Directives) {
        settings.line_pragmas = self.enabled;
    }
}
