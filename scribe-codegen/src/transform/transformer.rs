//! Transformer trait.

use scribe_model::{CodeModel, Directives};

use crate::pipeline::HostSettings;

/// A unit that adjusts a generation pass.
///
/// All hooks default to no-ops, so a transformer implements only the hooks
/// it needs. Hooks run in chain order:
///
/// 1. [`initialize`](Self::initialize) before parsing, with the per-pass
///    settings and the request's directives
/// 2. [`mutate_model`](Self::mutate_model) after parsing
/// 3. [`mutate_text`](Self::mutate_text) on the final decorated text
///
/// # Example
///
/// ```
/// use scribe_codegen::Transformer;
/// use scribe_model::CodeModel;
///
/// struct Sealed;
///
/// impl Transformer for Sealed {
///     fn name(&self) -> &'static str {
///         "sealed"
///     }
///
///     fn mutate_model(&self, model: &mut CodeModel) {
///         model.type_decl_mut().is_partial = false;
///     }
/// }
/// ```
pub trait Transformer: Send {
    /// The name of this transformer (for logging and listings).
    fn name(&self) -> &'static str;

    /// Adjust the settings the parser builds the model from. Directives
    /// needed later must be copied here.
    #[allow(unused_variables)]
    fn initialize(&mut self, settings: &mut HostSettings, directives: &Directives) {}

    /// Adjust the parsed code model.
    #[allow(unused_variables)]
    fn mutate_model(&self, model: &mut CodeModel) {}

    /// Adjust the final text.
    fn mutate_text(&self, text: String) -> String {
        text
    }

    /// Append the names of the leaf transformers this one is made of.
    fn collect_names(&self, names: &mut Vec<&'static str>) {
        names.push(self.name());
    }
}
