//! Attribute transformers.

use scribe_model::{Attribute, AttributeArg, CodeModel};

use super::Transformer;

/// Tool name recorded in the generated-code attribute.
pub const GENERATOR_NAME: &str = "Scribe";

/// Tool version recorded in the generated-code attribute.
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const GENERATED_CODE_ATTRIBUTE: &str = "System.CodeDom.Compiler.GeneratedCodeAttribute";

pub const EXCLUDE_FROM_CODE_COVERAGE: &str =
    "System.Diagnostics.CodeAnalysis.ExcludeFromCodeCoverageAttribute";

/// Applies a zero-argument attribute to the generated type. Idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMarkerAttribute {
    name: String,
}

impl AddMarkerAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Transformer for AddMarkerAttribute {
    fn name(&self) -> &'static str {
        "marker-attribute"
    }

    fn mutate_model(&self, model: &mut CodeModel) {
        model
            .type_decl_mut()
            .attributes
            .insert(Attribute::marker(&self.name));
    }
}

/// Marks the generated type as tool output: `GeneratedCode("Scribe", version)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddGeneratedCodeAttribute;

impl AddGeneratedCodeAttribute {
    pub fn attribute() -> Attribute {
        Attribute::marker(GENERATED_CODE_ATTRIBUTE)
            .with_arg(AttributeArg::Str(GENERATOR_NAME.to_string()))
            .with_arg(AttributeArg::Str(GENERATOR_VERSION.to_string()))
    }
}

impl Transformer for AddGeneratedCodeAttribute {
    fn name(&self) -> &'static str {
        "generated-code"
    }

    fn mutate_model(&self, model: &mut CodeModel) {
        model.type_decl_mut().attributes.insert(Self::attribute());
    }
}

/// Excludes the generated type from code coverage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcludeFromCodeCoverage;

impl Transformer for ExcludeFromCodeCoverage {
    fn name(&self) -> &'static str {
        "exclude-from-code-coverage"
    }

    fn mutate_model(&self, model: &mut CodeModel) {
        model
            .type_decl_mut()
            .attributes
            .insert(Attribute::marker(EXCLUDE_FROM_CODE_COVERAGE));
    }
}
