//! Type declaration transformers.

use scribe_model::CodeModel;

use super::Transformer;

/// Overwrites the base type of the generated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBaseType {
    base_type: String,
}

impl SetBaseType {
    pub fn new(base_type: impl Into<String>) -> Self {
        Self {
            base_type: base_type.into(),
        }
    }
}

impl Transformer for SetBaseType {
    fn name(&self) -> &'static str {
        "base-type"
    }

    fn mutate_model(&self, model: &mut CodeModel) {
        model.type_decl_mut().base_type = Some(self.base_type.clone());
    }
}

/// Makes the generated type partial and removes its parameterless
/// constructor, so a hand-written part of the type can declare one.
///
/// Only the first parameterless constructor is removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakePartialAndStripDefaultConstructor;

impl Transformer for MakePartialAndStripDefaultConstructor {
    fn name(&self) -> &'static str {
        "partial"
    }

    fn mutate_model(&self, model: &mut CodeModel) {
        let type_decl = model.type_decl_mut();
        type_decl.is_partial = true;

        let defaults = type_decl.default_constructor_indices();
        if let Some(&first) = defaults.first() {
            type_decl.members.remove(first);
        }
        if defaults.len() > 1 {
            tracing::warn!(
                type_name = %type_decl.name,
                remaining = defaults.len() - 1,
                "multiple parameterless constructors; only the first was removed"
            );
        }
    }
}
