//! Visual Basic rendering of the code model.

use eyre::{Result, ensure};
use scribe_codegen::{
    CodeBuilder, CodeFragment, CodeRenderer, Indent, RenderOptions, Renderable, code_lines,
};
use scribe_core::TargetLanguage;
use scribe_model::{
    Attribute, AttributeArg, CodeModel, Constructor, Located, Member, Method, Param, Statement,
    TypeDecl, Visibility,
};

use crate::{VB_NAMING, string_literal};

const AUTO_GENERATED_HEADER: &[&str] = &[
    "'------------------------------------------------------------------------------",
    "' <auto-generated>",
    "'     This code was generated by a tool.",
    "'",
    "'     Changes to this file may cause incorrect behavior and will be lost if",
    "'     the code is regenerated.",
    "' </auto-generated>",
    "'------------------------------------------------------------------------------",
];

/// Renders a code model as a Visual Basic compilation unit.
///
/// Imports sit at file level ahead of the namespace. Mapped entry method
/// statements are wrapped in `#ExternalSource` regions.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualBasicRenderer {
    indent: Indent,
}

impl VisualBasicRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(indent: Indent) -> Self {
        Self { indent }
    }
}

impl CodeRenderer for VisualBasicRenderer {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::VisualBasic
    }

    fn render(&self, model: &CodeModel, options: &RenderOptions) -> Result<String> {
        ensure!(
            !model.type_decl().name.is_empty(),
            "generated type has no name"
        );

        let pragmas = options
            .line_pragmas
            .then_some(model.source_path.as_deref())
            .flatten();

        let mut builder = CodeBuilder::new(self.indent);
        for line in AUTO_GENERATED_HEADER {
            builder.push_line(line);
        }
        builder
            .push_blank()
            .push_line("Option Strict Off")
            .push_line("Option Explicit On")
            .push_blank();
        builder.emit(&CompilationUnit { model, pragmas });
        Ok(builder.build())
    }
}

struct CompilationUnit<'a> {
    model: &'a CodeModel,
    pragmas: Option<&'a str>,
}

impl Renderable for CompilationUnit<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let namespace = &self.model.namespace;

        let mut fragments: Vec<CodeFragment> = namespace
            .imports
            .iter()
            .map(|name| CodeFragment::line(format!("Imports {}", name)))
            .collect();
        if !fragments.is_empty() {
            fragments.push(CodeFragment::Blank);
        }

        let type_fragment = self.type_fragment(&namespace.type_decl);
        if namespace.name.is_empty() {
            fragments.push(type_fragment);
        } else {
            fragments.push(CodeFragment::terminated(
                format!("Namespace {}", VB_NAMING.safe_qualified_name(&namespace.name)),
                vec![type_fragment],
                "End Namespace",
            ));
        }
        fragments
    }
}

impl CompilationUnit<'_> {
    fn type_fragment(&self, ty: &TypeDecl) -> CodeFragment {
        let mut header = String::new();
        if ty.is_partial {
            header.push_str("Partial ");
        }
        header.push_str(visibility(ty.visibility));
        header.push_str(" Class ");
        header.push_str(&VB_NAMING.safe_name(&ty.name));

        let mut members = Vec::new();
        if let Some(base) = &ty.base_type {
            members.push(CodeFragment::line(format!("Inherits {}", base)));
            members.push(CodeFragment::Blank);
        }
        for member in &ty.members {
            let fragment = match member {
                Member::Constructor(ctor) => constructor(ctor, ty.base_type.is_some()),
                Member::Method(method) => self.method(method),
            };
            members.push(fragment);
            members.push(CodeFragment::Blank);
        }
        members.push(self.method(&ty.entry_method));

        let mut fragments: Vec<CodeFragment> = ty.attributes.iter().map(attribute).collect();
        fragments.push(CodeFragment::terminated(header, members, "End Class"));
        CodeFragment::sequence(fragments)
    }

    fn method(&self, method: &Method) -> CodeFragment {
        let mut header = format!("{} ", visibility(method.visibility));
        if method.is_override {
            header.push_str("Overrides ");
        }
        let name = VB_NAMING.safe_name(&method.name);
        let body = self.statements(&method.body);

        match &method.return_type {
            Some(ty) => {
                header.push_str(&format!("Function {}{} As {}", name, params(&method.params), ty));
                CodeFragment::terminated(header, body, "End Function")
            }
            None => {
                header.push_str(&format!("Sub {}{}", name, params(&method.params)));
                CodeFragment::terminated(header, body, "End Sub")
            }
        }
    }

    fn statements(&self, body: &[Located<Statement>]) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        for stmt in body {
            let lines = statement_lines(&stmt.value);
            match (&stmt.value, stmt.line, self.pragmas) {
                (Statement::WriteLiteral(_), _, _) | (_, None, _) | (_, _, None) => {
                    fragments.extend(lines);
                }
                (_, Some(line), Some(path)) => {
                    fragments.push(CodeFragment::unindented(format!(
                        "#ExternalSource(\"{}\", {})",
                        path, line
                    )));
                    fragments.extend(lines);
                    fragments.push(CodeFragment::unindented("#End ExternalSource"));
                }
            }
        }
        fragments
    }
}

fn visibility(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "Public",
        Visibility::Internal => "Friend",
        Visibility::Protected => "Protected",
        Visibility::Private => "Private",
    }
}

fn constructor(ctor: &Constructor, has_base: bool) -> CodeFragment {
    let body = if has_base {
        vec![CodeFragment::line("MyBase.New()")]
    } else {
        Vec::new()
    };
    CodeFragment::terminated(
        format!("{} Sub New{}", visibility(ctor.visibility), params(&ctor.params)),
        body,
        "End Sub",
    )
}

fn params(params: &[Param]) -> String {
    let params: Vec<String> = params
        .iter()
        .map(|p| format!("ByVal {} As {}", VB_NAMING.safe_name(&p.name), p.ty))
        .collect();
    format!("({})", params.join(", "))
}

fn attribute(attr: &Attribute) -> CodeFragment {
    if attr.is_marker() {
        return CodeFragment::line(format!("<{}>", attr.name));
    }
    let args: Vec<String> = attr
        .args
        .iter()
        .map(|arg| match arg {
            AttributeArg::Str(s) => string_literal(s),
            AttributeArg::Raw(s) => s.clone(),
        })
        .collect();
    CodeFragment::line(format!("<{}({})>", attr.name, args.join(", ")))
}

fn statement_lines(stmt: &Statement) -> Vec<CodeFragment> {
    match stmt {
        Statement::WriteLiteral(text) => {
            vec![CodeFragment::line(format!("WriteLiteral({})", string_literal(text)))]
        }
        Statement::Write(expr) => vec![CodeFragment::line(format!("Write({})", expr))],
        Statement::Code(code) => code_lines(code).into_iter().map(CodeFragment::line).collect(),
    }
}
