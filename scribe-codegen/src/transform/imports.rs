//! Import list transformer.

use scribe_model::CodeModel;

use super::Transformer;

/// Installs a list of imports on the model.
///
/// In replace mode the model ends up with exactly the given imports, in the
/// given order. Otherwise they are added after the existing ones; names
/// already present keep their position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetImports {
    imports: Vec<String>,
    replace: bool,
}

impl SetImports {
    pub fn new<I, S>(imports: I, replace: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            imports: imports.into_iter().map(Into::into).collect(),
            replace,
        }
    }

    /// Install exactly `imports`.
    pub fn replacing<I, S>(imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(imports, true)
    }

    /// Add `imports` to the existing ones.
    pub fn adding<I, S>(imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(imports, false)
    }
}

impl Transformer for SetImports {
    fn name(&self) -> &'static str {
        "set-imports"
    }

    fn mutate_model(&self, model: &mut CodeModel) {
        let imports = model.imports_mut();
        if self.replace {
            imports.replace(self.imports.iter().cloned());
        } else {
            imports.extend(self.imports.iter().cloned());
        }
    }
}
