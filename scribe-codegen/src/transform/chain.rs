//! Ordered transformer composite.

use scribe_model::{CodeModel, Directives};

use super::Transformer;
use crate::pipeline::HostSettings;

/// Transformers applied in order.
///
/// Order is significant: two chains with the same members in a different
/// order are different chains. Each hook fans out to every member; text
/// mutation threads the output of one member into the next.
#[derive(Default)]
pub struct TransformChain {
    members: Vec<Box<dyn Transformer>>,
}

impl TransformChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transformer.
    pub fn push(&mut self, transformer: impl Transformer + 'static) -> &mut Self {
        self.members.push(Box::new(transformer));
        self
    }

    /// Append an already boxed transformer.
    pub fn push_boxed(&mut self, transformer: Box<dyn Transformer>) -> &mut Self {
        self.members.push(transformer);
        self
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, transformer: impl Transformer + 'static) -> Self {
        self.push(transformer);
        self
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Leaf transformer names in execution order, nested chains flattened.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }
}

impl Transformer for TransformChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn initialize(&mut self, settings: &mut HostSettings, directives: &Directives) {
        for member in &mut self.members {
            member.initialize(settings, directives);
        }
    }

    fn mutate_model(&self, model: &mut CodeModel) {
        for member in &self.members {
            tracing::trace!(transformer = member.name(), "mutate model");
            member.mutate_model(model);
        }
    }

    fn mutate_text(&self, text: String) -> String {
        self.members
            .iter()
            .fold(text, |text, member| member.mutate_text(text))
    }

    fn collect_names(&self, names: &mut Vec<&'static str>) {
        for member in &self.members {
            member.collect_names(names);
        }
    }
}

impl std::fmt::Debug for TransformChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
