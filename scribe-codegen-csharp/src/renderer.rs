//! C# rendering of the code model.

use eyre::{Result, ensure};
use scribe_codegen::{
    CodeBuilder, CodeFragment, CodeRenderer, Indent, RenderOptions, Renderable, code_lines,
};
use scribe_core::TargetLanguage;
use scribe_model::{
    Attribute, AttributeArg, CodeModel, Constructor, Located, Member, Method, Param, Statement,
    TypeDecl,
};

use crate::{CSHARP_NAMING, string_literal};

const AUTO_GENERATED_HEADER: &[&str] = &[
    "//------------------------------------------------------------------------------",
    "// <auto-generated>",
    "//     This code was generated by a tool.",
    "//",
    "//     Changes to this file may cause incorrect behavior and will be lost if",
    "//     the code is regenerated.",
    "// </auto-generated>",
    "//------------------------------------------------------------------------------",
];

/// Renders a code model as a C# compilation unit.
///
/// Usings are placed inside the namespace. When line pragmas are enabled and
/// the model knows its template path, expressions and code blocks in the
/// entry method are wrapped in `#line` directives pointing back at the
/// template; everything else is `#line hidden`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpRenderer {
    indent: Indent,
}

impl CSharpRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(indent: Indent) -> Self {
        Self { indent }
    }
}

impl CodeRenderer for CSharpRenderer {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::CSharp
    }

    fn render(&self, model: &CodeModel, options: &RenderOptions) -> Result<String> {
        let type_decl = model.type_decl();
        ensure!(!type_decl.name.is_empty(), "generated type has no name");

        let pragmas = options
            .line_pragmas
            .then_some(model.source_path.as_deref())
            .flatten();

        let unit = CompilationUnit { model, pragmas };
        let mut builder = CodeBuilder::new(self.indent);
        for line in AUTO_GENERATED_HEADER {
            builder.push_line(line);
        }
        builder.push_blank();
        builder.emit(&unit);
        Ok(builder.build())
    }
}

struct CompilationUnit<'a> {
    model: &'a CodeModel,
    /// Template path for `#line` directives, if enabled.
    pragmas: Option<&'a str>,
}

impl Renderable for CompilationUnit<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let namespace = &self.model.namespace;

        let mut body: Vec<CodeFragment> = namespace
            .imports
            .iter()
            .map(|name| CodeFragment::line(format!("using {};", name)))
            .collect();
        if !body.is_empty() {
            body.push(CodeFragment::Blank);
        }
        body.push(self.type_fragment(&namespace.type_decl));

        if namespace.name.is_empty() {
            body
        } else {
            vec![CodeFragment::braced(
                format!("namespace {}", CSHARP_NAMING.safe_qualified_name(&namespace.name)),
                body,
            )]
        }
    }
}

impl CompilationUnit<'_> {
    fn type_fragment(&self, ty: &TypeDecl) -> CodeFragment {
        let name = CSHARP_NAMING.safe_name(&ty.name);

        let mut header = format!("{} ", ty.visibility);
        if ty.is_partial {
            header.push_str("partial ");
        }
        header.push_str("class ");
        header.push_str(&name);
        if let Some(base) = &ty.base_type {
            header.push_str(" : ");
            header.push_str(base);
        }

        let mut members = Vec::new();
        for member in &ty.members {
            let fragment = match member {
                Member::Constructor(ctor) => constructor(&name, ctor),
                Member::Method(method) => self.method(method),
            };
            members.push(fragment);
            members.push(CodeFragment::Blank);
        }
        members.push(self.method(&ty.entry_method));

        let mut fragments: Vec<CodeFragment> = ty.attributes.iter().map(attribute).collect();
        fragments.push(CodeFragment::braced(header, members));
        CodeFragment::sequence(fragments)
    }

    fn method(&self, method: &Method) -> CodeFragment {
        let mut header = format!("{} ", method.visibility);
        if method.is_override {
            header.push_str("override ");
        }
        header.push_str(method.return_type.as_deref().unwrap_or("void"));
        header.push(' ');
        header.push_str(&CSHARP_NAMING.safe_name(&method.name));
        header.push_str(&params(&method.params));

        CodeFragment::braced(header, self.statements(&method.body))
    }

    fn statements(&self, body: &[Located<Statement>]) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if self.pragmas.is_some() && !body.is_empty() {
            fragments.push(CodeFragment::unindented("#line hidden"));
        }

        for stmt in body {
            let lines = statement_lines(&stmt.value);
            let mapped = match (&stmt.value, stmt.line, self.pragmas) {
                (Statement::WriteLiteral(_), _, _) => None,
                (_, Some(line), Some(path)) => Some((line, path)),
                _ => None,
            };

            match mapped {
                Some((line, path)) => {
                    fragments.push(CodeFragment::unindented(format!(
                        "#line {} \"{}\"",
                        line, path
                    )));
                    fragments.extend(lines);
                    fragments.push(CodeFragment::unindented("#line default"));
                    fragments.push(CodeFragment::unindented("#line hidden"));
                }
                None => fragments.extend(lines),
            }
        }
        fragments
    }
}

fn constructor(type_name: &str, ctor: &Constructor) -> CodeFragment {
    CodeFragment::braced(
        format!("{} {}{}", ctor.visibility, type_name, params(&ctor.params)),
        Vec::new(),
    )
}

fn params(params: &[Param]) -> String {
    let params: Vec<String> = params
        .iter()
        .map(|p| format!("{} {}", p.ty, CSHARP_NAMING.safe_name(&p.name)))
        .collect();
    format!("({})", params.join(", "))
}

fn attribute(attr: &Attribute) -> CodeFragment {
    if attr.is_marker() {
        return CodeFragment::line(format!("[{}]", attr.name));
    }
    let args: Vec<String> = attr
        .args
        .iter()
        .map(|arg| match arg {
            AttributeArg::Str(s) => string_literal(s),
            AttributeArg::Raw(s) => s.clone(),
        })
        .collect();
    CodeFragment::line(format!("[{}({})]", attr.name, args.join(", ")))
}

fn statement_lines(stmt: &Statement) -> Vec<CodeFragment> {
    match stmt {
        Statement::WriteLiteral(text) => {
            vec![CodeFragment::line(format!("WriteLiteral({});", string_literal(text)))]
        }
        Statement::Write(expr) => vec![CodeFragment::line(format!("Write({});", expr))],
        Statement::Code(code) => code_lines(code).into_iter().map(CodeFragment::line).collect(),
    }
}

#[cfg(test)]
mod tests {
    use scribe_model::{Namespace, Visibility};

    use super::*;

    fn render(model: &CodeModel, line_pragmas: bool) -> String {
        CSharpRenderer::new()
            .render(model, &RenderOptions { line_pragmas })
            .unwrap()
    }

    fn model(type_decl: TypeDecl) -> CodeModel {
        CodeModel::new(Namespace::new("Templates", type_decl)).with_source_path("Index.cshtml")
    }

    #[test]
    fn test_reserved_type_name_is_escaped() {
        let output = render(&model(TypeDecl::new("class")), false);
        assert!(output.contains("public class @class\n"));
    }

    #[test]
    fn test_internal_partial_class() {
        let mut ty = TypeDecl::new("Index").with_base_type("Base<Model>");
        ty.visibility = Visibility::Internal;
        ty.is_partial = true;

        let output = render(&model(ty), false);
        assert!(output.contains("    internal partial class Index : Base<Model>\n"));
    }

    #[test]
    fn test_global_namespace() {
        let model = CodeModel::new(Namespace::new("", TypeDecl::new("Index")));
        let output = render(&model, true);
        assert!(output.contains("\npublic class Index\n{\n"));
        assert!(!output.contains("namespace"));
    }

    #[test]
    fn test_line_pragmas() {
        let mut ty = TypeDecl::new("Index");
        ty.entry_method.push(Statement::WriteLiteral("<b>".into()), Some(1));
        ty.entry_method.push(Statement::Write("Model.Name".into()), Some(2));

        let output = render(&model(ty.clone()), true);
        assert!(output.contains(
            "#line hidden\n            WriteLiteral(\"<b>\");\n#line 2 \"Index.cshtml\"\n            Write(Model.Name);\n#line default\n#line hidden\n"
        ));

        let output = render(&model(ty), false);
        assert!(!output.contains("#line"));
    }

    #[test]
    fn test_multiline_code_block() {
        let mut ty = TypeDecl::new("Index");
        ty.entry_method.push(
            Statement::Code("var a = 1;\n    var b = 2;\n".into()),
            Some(4),
        );

        let output = render(&model(ty), false);
        assert!(output.contains("            var a = 1;\n            var b = 2;\n        }"));
    }

    #[test]
    fn test_code_block_keeps_nesting() {
        let mut ty = TypeDecl::new("Index");
        ty.entry_method.push(
            Statement::Code(
                "\n    foreach (var item in Model.Items)\n    {\n        Write(item);\n    }\n".into(),
            ),
            Some(1),
        );

        let output = render(&model(ty), false);
        assert!(output.contains(
            "            foreach (var item in Model.Items)\n            {\n                Write(item);\n            }\n        }"
        ));
    }

    #[test]
    fn test_custom_indent() {
        let output = CSharpRenderer::with_indent(Indent::spaces(2))
            .render(&model(TypeDecl::new("Index")), &RenderOptions::default())
            .unwrap();
        assert!(output.contains(
            "namespace Templates\n{\n  public class Index\n  {\n    public override void Execute()\n"
        ));
    }

    #[test]
    fn test_constructor_with_params() {
        let ty = TypeDecl::new("Index").with_member(Constructor::new(vec![
            Param::new("int", "count"),
            Param::new("string", "params"),
        ]));
        let output = render(&model(ty), false);
        assert!(output.contains("public Index(int count, string @params)"));
    }

    #[test]
    fn test_unnamed_type_is_an_error() {
        let err = CSharpRenderer::new()
            .render(&model(TypeDecl::new("")), &RenderOptions::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "generated type has no name");
    }
}
