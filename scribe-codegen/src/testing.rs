//! Test utilities for generation passes.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr, eyre};
use scribe_core::TargetLanguage;
use scribe_model::{
    AttributeArg, CodeModel, Constructor, ImportSet, Member, Namespace, Statement, TypeDecl,
};

use crate::{
    language::{CodeRenderer, RenderOptions},
    pipeline::{Diagnostic, HostSettings, ParseOutput, TemplateParser},
};

/// Builds the initial model from host settings, one literal per source line.
///
/// The type gets a public parameterless constructor, like a freshly parsed
/// template.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubParser;

impl TemplateParser for StubParser {
    fn parse(&self, source: &str, settings: &HostSettings) -> Result<ParseOutput> {
        Ok(ParseOutput::new(model_from_settings(source, settings)))
    }
}

/// Like [`StubParser`], but also returns fixed diagnostics.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticParser {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticParser {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}

impl TemplateParser for DiagnosticParser {
    fn parse(&self, source: &str, settings: &HostSettings) -> Result<ParseOutput> {
        Ok(ParseOutput::new(model_from_settings(source, settings))
            .with_diagnostics(self.diagnostics.clone()))
    }
}

/// Always fails with the given message.
#[derive(Debug, Clone)]
pub struct FailingParser(pub &'static str);

impl TemplateParser for FailingParser {
    fn parse(&self, _source: &str, _settings: &HostSettings) -> Result<ParseOutput> {
        Err(eyre!(self.0))
    }
}

/// Renders a flat, line-oriented dump of the model.
///
/// ```text
/// namespace Templates
/// import System
/// [Marker]
/// public partial class Index : Base
/// ctor()
/// 1: literal <p>
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StubRenderer {
    pub language: TargetLanguage,
}

impl StubRenderer {
    pub fn csharp() -> Self {
        Self {
            language: TargetLanguage::CSharp,
        }
    }

    pub fn visual_basic() -> Self {
        Self {
            language: TargetLanguage::VisualBasic,
        }
    }
}

impl CodeRenderer for StubRenderer {
    fn language(&self) -> TargetLanguage {
        self.language
    }

    fn render(&self, model: &CodeModel, options: &RenderOptions) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("namespace {}\n", model.namespace.name));
        for import in model.imports().iter() {
            out.push_str(&format!("import {}\n", import));
        }

        let ty = model.type_decl();
        for attr in ty.attributes.iter() {
            let args: Vec<String> = attr
                .args
                .iter()
                .map(|arg| match arg {
                    AttributeArg::Str(s) => format!("{:?}", s),
                    AttributeArg::Raw(s) => s.clone(),
                })
                .collect();
            if args.is_empty() {
                out.push_str(&format!("[{}]\n", attr.name));
            } else {
                out.push_str(&format!("[{}({})]\n", attr.name, args.join(", ")));
            }
        }

        let partial = if ty.is_partial { "partial " } else { "" };
        let base = ty
            .base_type
            .as_deref()
            .map(|b| format!(" : {}", b))
            .unwrap_or_default();
        out.push_str(&format!(
            "{} {}class {}{}\n",
            ty.visibility, partial, ty.name, base
        ));

        for member in &ty.members {
            match member {
                Member::Constructor(ctor) => {
                    out.push_str(&format!("ctor({})\n", ctor.params.len()));
                }
                Member::Method(method) => {
                    out.push_str(&format!("method {}\n", method.name));
                }
            }
        }

        for stmt in &ty.entry_method.body {
            let line = match (options.line_pragmas, stmt.line) {
                (true, Some(line)) => format!("{}: ", line),
                _ => String::new(),
            };
            let text = match &stmt.value {
                Statement::WriteLiteral(s) => format!("literal {}", s),
                Statement::Write(s) => format!("write {}", s),
                Statement::Code(s) => format!("code {}", s),
            };
            out.push_str(&format!("{}{}\n", line, text));
        }

        Ok(out)
    }
}

/// Always fails with the given message.
#[derive(Debug, Clone, Copy)]
pub struct FailingRenderer(pub &'static str);

impl CodeRenderer for FailingRenderer {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::CSharp
    }

    fn render(&self, _model: &CodeModel, _options: &RenderOptions) -> Result<String> {
        Err(eyre!(self.0))
    }
}

/// Build the model a parser would produce for `source` under `settings`.
pub fn model_from_settings(source: &str, settings: &HostSettings) -> CodeModel {
    let mut type_decl = TypeDecl::new(&settings.type_name).with_member(Constructor::default());
    type_decl.base_type = settings.base_type.clone();
    for (index, line) in source.lines().enumerate() {
        type_decl
            .entry_method
            .push(Statement::WriteLiteral(line.to_string()), Some(index as u32 + 1));
    }

    let imports: ImportSet = settings.imports.iter().cloned().collect();
    CodeModel::new(Namespace::new(&settings.namespace, type_decl).with_imports(imports))
}

/// A temporary directory of template files, removed on drop.
pub struct TemplateDir {
    dir: tempfile::TempDir,
}

impl TemplateDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::TempDir::new().wrap_err("failed to create temp dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a template relative to the directory root, creating parents.
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
