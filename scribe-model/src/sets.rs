//! Ordered, deduplicated collections used by the code model.

use indexmap::IndexSet;

/// Namespace imports.
///
/// Maintains insertion order for deterministic output; inserting a name
/// that is already present keeps its original position.
///
/// # Example
///
/// ```
/// use scribe_model::ImportSet;
///
/// let mut imports = ImportSet::new();
/// imports.insert("System");
/// imports.insert("System.Linq");
/// imports.insert("System");
///
/// let names: Vec<&str> = imports.iter().collect();
/// assert_eq!(names, ["System", "System.Linq"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    names: IndexSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Discard all imports and install exactly `names` (duplicates collapse).
    pub fn replace<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.clear();
        self.extend(names);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate over imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> Extend<S> for ImportSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.names.insert(name.into());
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ImportSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// An attribute argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeArg {
    /// A string literal, quoted by the renderer.
    Str(String),
    /// An expression emitted verbatim.
    Raw(String),
}

/// An attribute applied to the generated type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Fully qualified attribute type name.
    pub name: String,
    pub args: Vec<AttributeArg>,
}

impl Attribute {
    /// A zero-argument marker attribute.
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: AttributeArg) -> Self {
        self.args.push(arg);
        self
    }

    pub fn is_marker(&self) -> bool {
        self.args.is_empty()
    }
}

/// Attributes of the generated type, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    attributes: IndexSet<Attribute>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an attribute. Returns false if an identical one is present.
    pub fn insert(&mut self, attribute: Attribute) -> bool {
        self.attributes.insert(attribute)
    }

    /// Returns true if any attribute with this name is applied.
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
