//! Type members and entry method statements.

use crate::Visibility;

/// A member of the generated type other than the entry method.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Constructor(Constructor),
    Method(Method),
}

impl Member {
    /// Returns true for a constructor without parameters.
    pub fn is_default_constructor(&self) -> bool {
        matches!(self, Member::Constructor(ctor) if ctor.params.is_empty())
    }
}

impl From<Constructor> for Member {
    fn from(ctor: Constructor) -> Self {
        Member::Constructor(ctor)
    }
}

impl From<Method> for Member {
    fn from(method: Method) -> Self {
        Member::Method(method)
    }
}

/// A constructor parameter or method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// A constructor. The body is always empty in generated code.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Constructor {
    pub visibility: Visibility,
    pub params: Vec<Param>,
}

impl Constructor {
    pub fn new(params: Vec<Param>) -> Self {
        Self {
            visibility: Visibility::Public,
            params,
        }
    }
}

/// A statement of the entry method body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Emit markup verbatim.
    WriteLiteral(String),
    /// Emit the value of an expression.
    Write(String),
    /// Embedded code copied into the body as-is.
    Code(String),
}

/// A value paired with the 1-based template line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Located<T> {
    pub value: T,
    pub line: Option<u32>,
}

impl<T> Located<T> {
    pub fn new(value: T, line: u32) -> Self {
        Self {
            value,
            line: Some(line),
        }
    }

    pub fn unlocated(value: T) -> Self {
        Self { value, line: None }
    }
}

/// A method of the generated type.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: String,
    pub visibility: Visibility,
    pub is_override: bool,
    /// `None` for methods without a return value.
    pub return_type: Option<String>,
    pub params: Vec<Param>,
    pub body: Vec<Located<Statement>>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_override: false,
            return_type: None,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    /// The `public override void Execute()` method templates render into.
    pub fn entry_point() -> Self {
        Self {
            is_override: true,
            ..Self::new("Execute")
        }
    }

    pub fn push(&mut self, statement: Statement, line: Option<u32>) {
        self.body.push(Located {
            value: statement,
            line,
        });
    }
}
