//! The compilation unit: one namespace containing one type declaration.

use std::fmt;

use crate::{AttributeSet, ImportSet, Member, Method};

/// Code model for a single generated compilation unit.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeModel {
    /// The single namespace of the unit.
    pub namespace: Namespace,
    /// Template path used in line-mapping annotations.
    pub source_path: Option<String>,
}

impl CodeModel {
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            source_path: None,
        }
    }

    /// Set the template path referenced by line-mapping annotations.
    pub fn with_source_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// The generated type.
    pub fn type_decl(&self) -> &TypeDecl {
        &self.namespace.type_decl
    }

    /// Mutable access to the generated type.
    pub fn type_decl_mut(&mut self) -> &mut TypeDecl {
        &mut self.namespace.type_decl
    }

    /// The namespace imports.
    pub fn imports(&self) -> &ImportSet {
        &self.namespace.imports
    }

    /// Mutable access to the namespace imports.
    pub fn imports_mut(&mut self) -> &mut ImportSet {
        &mut self.namespace.imports
    }
}

/// A namespace with its imports and its single type.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    pub name: String,
    pub imports: ImportSet,
    pub type_decl: TypeDecl,
}

impl Namespace {
    pub fn new(name: impl Into<String>, type_decl: TypeDecl) -> Self {
        Self {
            name: name.into(),
            imports: ImportSet::new(),
            type_decl,
        }
    }

    pub fn with_imports(mut self, imports: ImportSet) -> Self {
        self.imports = imports;
        self
    }
}

/// Accessibility of a generated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    /// Parse a visibility keyword, ignoring case (`"internal"`, `"Friend"`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Some(Visibility::Public),
            "internal" | "friend" => Some(Visibility::Internal),
            "protected" => Some(Visibility::Protected),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        };
        write!(f, "{}", s)
    }
}

/// The generated type declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub name: String,
    pub base_type: Option<String>,
    pub attributes: AttributeSet,
    pub visibility: Visibility,
    pub is_partial: bool,
    /// Members in declaration order, excluding the entry method.
    pub members: Vec<Member>,
    /// The method holding the template body.
    pub entry_method: Method,
}

impl TypeDecl {
    /// Create a public, non-partial type with an empty `Execute` entry method.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type: None,
            attributes: AttributeSet::new(),
            visibility: Visibility::Public,
            is_partial: false,
            members: Vec::new(),
            entry_method: Method::entry_point(),
        }
    }

    pub fn with_base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = Some(base_type.into());
        self
    }

    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Indices of constructors that take no parameters, in declaration order.
    pub fn default_constructor_indices(&self) -> Vec<usize> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_default_constructor())
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Constructor, Param};

    #[test]
    fn test_type_decl_defaults() {
        let decl = TypeDecl::new("Index");
        assert_eq!(decl.name, "Index");
        assert!(decl.base_type.is_none());
        assert!(!decl.is_partial);
        assert_eq!(decl.visibility, Visibility::Public);
        assert_eq!(decl.entry_method.name, "Execute");
    }

    #[test]
    fn test_default_constructor_indices() {
        let decl = TypeDecl::new("Index")
            .with_member(Constructor::new(vec![Param::new("string", "name")]))
            .with_member(Constructor::default())
            .with_member(Constructor::default());

        assert_eq!(decl.default_constructor_indices(), vec![1, 2]);
    }

    #[test]
    fn test_model_accessors() {
        let mut model = CodeModel::new(Namespace::new("Templates", TypeDecl::new("Index")));
        model.type_decl_mut().name = "Home".to_string();
        model.imports_mut().insert("System");

        assert_eq!(model.type_decl().name, "Home");
        assert!(model.imports().contains("System"));
    }

    #[test]
    fn test_visibility_parse() {
        assert_eq!(Visibility::parse("Internal"), Some(Visibility::Internal));
        assert_eq!(Visibility::parse("Friend"), Some(Visibility::Internal));
        assert_eq!(Visibility::parse(" public "), Some(Visibility::Public));
        assert_eq!(Visibility::parse("sealed"), None);
    }
}
