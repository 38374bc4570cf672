//! Generation passes with the template parser and the Visual Basic renderer.

use scribe_codegen::{
    EventLog, GenerationRequest, Orchestrator, Progress, ProfileRegistry, testing::TemplateDir,
};
use scribe_codegen_vb::VisualBasicRenderer;
use scribe_core::TargetLanguage;
use scribe_model::Directives;
use scribe_template::TemplateSyntax;

fn orchestrator(dir: &TemplateDir, profile: &str, directives: &[(&str, &str)]) -> Orchestrator {
    let directives: Directives = directives.iter().copied().collect();
    let request = GenerationRequest::new(
        dir.path().join("Views/Index.vbhtml"),
        "Views/Index.vbhtml",
        TargetLanguage::VisualBasic,
    )
    .with_directives(directives);

    Orchestrator::new(request, TemplateSyntax::new(), VisualBasicRenderer::new())
        .chain(ProfileRegistry::builtin().resolve(profile).unwrap())
}

#[test]
fn test_output_is_undecorated() {
    let dir = TemplateDir::new().unwrap();
    dir.write("Views/Index.vbhtml", "<p>@Model.Name</p>").unwrap();

    let text = orchestrator(&dir, "page", &[]).generate().unwrap();

    assert!(text.starts_with("\n'----"));
    assert!(text.ends_with("End Namespace\n"));
    assert!(!text.contains("#pragma"));
    assert!(text.contains("    Public Class Views_Index_vbhtml\n"));
    assert!(text.contains("        Inherits Scribe.Web.WebPage\n"));
}

#[test]
fn test_template_profile() {
    let dir = TemplateDir::new().unwrap();
    dir.write("Views/Index.vbhtml", "Hi @Model.Name").unwrap();
    let log = EventLog::new();

    let text = orchestrator(&dir, "template", &[("Namespace", "Mail")])
        .reporter(log.clone())
        .generate()
        .unwrap();

    assert!(text.contains("Imports System.Linq\n"));
    assert!(text.contains("Namespace Mail\n"));
    assert!(text.contains("    Partial Public Class Views_Index_vbhtml\n"));
    assert!(text.contains("        Inherits Scribe.Templating.TemplateBase\n"));
    assert!(!text.contains("Sub New"));
    assert!(text.contains("<System.CodeDom.Compiler.GeneratedCodeAttribute(\"Scribe\", "));
    assert_eq!(log.progress(), [Progress::MIDPOINT, Progress::COMPLETE]);
}

#[test]
fn test_expressions_are_mapped_to_the_template() {
    let dir = TemplateDir::new().unwrap();
    dir.write("Views/Index.vbhtml", "<b>\n@Model.Name</b>").unwrap();

    let text = orchestrator(&dir, "none", &[]).generate().unwrap();

    let path = dir.path().join("Views/Index.vbhtml");
    let region = format!(
        "#ExternalSource(\"{}\", 2)\n            Write(Model.Name)\n#End ExternalSource\n",
        path.display()
    );
    assert!(text.contains(&region), "{}", text);
}

#[test]
fn test_reserved_class_name_is_bracketed() {
    let dir = TemplateDir::new().unwrap();
    dir.write("Views/Index.vbhtml", "").unwrap();

    let text = orchestrator(&dir, "page", &[("ClassName", "Error")])
        .generate()
        .unwrap();
    assert!(text.contains("Public Class [Error]\n"));
}
