//! Directive-driven model changes.

use scribe_model::{Attribute, CodeModel, Directives, Visibility};

use super::{EXCLUDE_FROM_CODE_COVERAGE, Transformer};
use crate::pipeline::HostSettings;

/// Applies one directive value to the model.
pub type DirectiveAction = fn(&mut CodeModel, &str);

/// Maps directive names to model changes.
///
/// The request's directives are captured during initialization and applied
/// in request order during model mutation. Names match ignoring ASCII case;
/// directives without a table entry are skipped.
///
/// # Example
///
/// ```
/// use scribe_codegen::transform::DirectiveDispatch;
/// use scribe_model::CodeModel;
///
/// fn set_sealed(model: &mut CodeModel, value: &str) {
///     model.type_decl_mut().is_partial = value != "true";
/// }
///
/// let dispatch = DirectiveDispatch::standard().on("Sealed", set_sealed);
/// assert!(dispatch.handles("sealed"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectiveDispatch {
    table: Vec<(&'static str, DirectiveAction)>,
    captured: Directives,
}

impl DirectiveDispatch {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The directives templates may set:
    ///
    /// | Directive | Effect |
    /// |---|---|
    /// | `ClassName` | rename the type |
    /// | `Namespace` | rename the namespace |
    /// | `TypeVisibility` | `public` or `internal` |
    /// | `ExcludeFromCodeCoverage` | `true` adds the coverage exclusion attribute |
    /// | `Imports` | comma-separated imports to add |
    /// | `BaseType` | replace the base type |
    pub fn standard() -> Self {
        Self::new()
            .on("ClassName", set_class_name)
            .on("Namespace", set_namespace)
            .on("TypeVisibility", set_type_visibility)
            .on("ExcludeFromCodeCoverage", set_exclude_from_code_coverage)
            .on("Imports", add_imports)
            .on("BaseType", set_base_type)
    }

    /// Add or replace the action for a directive.
    pub fn on(mut self, directive: &'static str, action: DirectiveAction) -> Self {
        match self
            .table
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(directive))
        {
            Some(entry) => entry.1 = action,
            None => self.table.push((directive, action)),
        }
        self
    }

    pub fn handles(&self, directive: &str) -> bool {
        self.action(directive).is_some()
    }

    fn action(&self, directive: &str) -> Option<DirectiveAction> {
        self.table
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(directive))
            .map(|(_, action)| *action)
    }
}

impl Transformer for DirectiveDispatch {
    fn name(&self) -> &'static str {
        "directives"
    }

    fn initialize(&mut self, _settings: &mut HostSettings, directives: &Directives) {
        self.captured = directives.clone();
    }

    fn mutate_model(&self, model: &mut CodeModel) {
        for (name, value) in self.captured.iter() {
            match self.action(name) {
                Some(action) => action(model, value),
                None => tracing::debug!(directive = name, "no handler for directive"),
            }
        }
    }
}

fn set_class_name(model: &mut CodeModel, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        model.type_decl_mut().name = value.to_string();
    }
}

fn set_namespace(model: &mut CodeModel, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        model.namespace.name = value.to_string();
    }
}

fn set_type_visibility(model: &mut CodeModel, value: &str) {
    match Visibility::parse(value) {
        Some(visibility @ (Visibility::Public | Visibility::Internal)) => {
            model.type_decl_mut().visibility = visibility;
        }
        _ => tracing::warn!(value, "unsupported TypeVisibility; expected public or internal"),
    }
}

fn set_exclude_from_code_coverage(model: &mut CodeModel, value: &str) {
    if value.trim().eq_ignore_ascii_case("true") {
        model
            .type_decl_mut()
            .attributes
            .insert(Attribute::marker(EXCLUDE_FROM_CODE_COVERAGE));
    }
}

fn add_imports(model: &mut CodeModel, value: &str) {
    model.imports_mut().extend(
        value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty()),
    );
}

fn set_base_type(model: &mut CodeModel, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        model.type_decl_mut().base_type = Some(value.to_string());
    }
}
