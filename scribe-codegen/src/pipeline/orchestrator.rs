//! Generation pass orchestrator.

use eyre::{Result, WrapErr, bail};
use scribe_core::{read_source, sanitize_type_name};
use scribe_model::CodeModel;

use super::{
    Diagnostic, GenerationFailure, GenerationRequest, HostSettings, NullReporter, ParseOutput,
    PassState, Progress, Reporter, TemplateParser, error::chain_message,
};
use crate::{
    language::{CodeRenderer, LanguageProfile, RenderOptions},
    transform::{TransformChain, Transformer},
};

/// Runs generation passes for a single template.
///
/// Parser, renderer, language profile, transformers and reporter are
/// injected at construction. Each call to [`generate`](Self::generate) is an
/// independent pass; nothing but the derived default type name is carried
/// from one pass to the next.
///
/// # Example
///
/// ```ignore
/// let mut orchestrator = Orchestrator::new(request, parser, renderer)
///     .transformer(SetNamespace::new("MyApp.Views"))
///     .reporter(log.clone());
///
/// let text = orchestrator.generate()?;
/// ```
pub struct Orchestrator {
    request: GenerationRequest,
    settings: HostSettings,
    chain: TransformChain,
    parser: Box<dyn TemplateParser>,
    renderer: Box<dyn CodeRenderer>,
    profile: LanguageProfile,
    reporter: Box<dyn Reporter>,
    default_type_name: Option<String>,
    state: PassState,
}

impl Orchestrator {
    /// Create an orchestrator with default settings, an empty chain and no
    /// reporter. The language profile follows the request's language.
    pub fn new(
        request: GenerationRequest,
        parser: impl TemplateParser + 'static,
        renderer: impl CodeRenderer + 'static,
    ) -> Self {
        let profile = LanguageProfile::for_language(request.language());
        Self {
            request,
            settings: HostSettings::default(),
            chain: TransformChain::new(),
            parser: Box::new(parser),
            renderer: Box::new(renderer),
            profile,
            reporter: Box::new(NullReporter),
            default_type_name: None,
            state: PassState::Idle,
        }
    }

    /// Append a transformer to the chain.
    pub fn transformer(mut self, transformer: impl Transformer + 'static) -> Self {
        self.chain.push(transformer);
        self
    }

    /// Replace the whole chain.
    pub fn chain(mut self, chain: TransformChain) -> Self {
        self.chain = chain;
        self
    }

    pub fn reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Base settings cloned at the start of every pass. The type name is
    /// always derived from the request.
    pub fn settings(mut self, settings: HostSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Override the language profile resolved from the request.
    pub fn profile(mut self, profile: LanguageProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// State of the current or most recent pass.
    pub fn state(&self) -> PassState {
        self.state
    }

    /// Type name derived from the project-relative path, computed once.
    pub fn default_type_name(&mut self) -> &str {
        let path = self.request.project_relative_path();
        self.default_type_name
            .get_or_insert_with(|| sanitize_type_name(path))
    }

    /// Run one generation pass and return the final text.
    ///
    /// Parser diagnostics are reported and do not stop the pass. A read,
    /// parse or render error is reported once as a fatal diagnostic and
    /// returned as [`GenerationFailure`]; no progress is reported after it.
    pub fn generate(&mut self) -> std::result::Result<String, GenerationFailure> {
        let _span = tracing::debug_span!(
            "generate",
            template = %self.request.project_relative_path()
        )
        .entered();

        self.transition(PassState::Idle);

        let mut settings = self.settings.clone();
        settings.type_name = self.default_type_name().to_string();
        self.chain
            .initialize(&mut settings, self.request.directives());
        tracing::debug!(transformers = ?self.chain.names(), "initialized transform chain");

        self.transition(PassState::Parsing);
        let ParseOutput {
            mut model,
            diagnostics,
        } = match self.parse(&settings) {
            Ok(output) => output,
            Err(err) => {
                self.transition(PassState::ParseFailed);
                return Err(self.fail(GenerationFailure::Parse {
                    path: self.request.project_relative_path().to_string(),
                    message: chain_message(&err),
                }));
            }
        };
        self.transition(PassState::Parsed);

        for diagnostic in &diagnostics {
            self.reporter.on_diagnostic(diagnostic);
        }
        self.reporter.on_progress(Progress::MIDPOINT);

        self.transition(PassState::Mutating);
        if model.source_path.is_none() {
            model.source_path = Some(self.request.source_path().display().to_string());
        }
        self.chain.mutate_model(&mut model);

        self.transition(PassState::Rendering);
        let options = RenderOptions {
            line_pragmas: settings.line_pragmas,
        };
        let body = match self.render(&model, &options) {
            Ok(body) => body,
            Err(err) => {
                self.transition(PassState::RenderFailed);
                return Err(self.fail(GenerationFailure::Render {
                    path: self.request.project_relative_path().to_string(),
                    message: chain_message(&err),
                }));
            }
        };
        drop(model);

        let text = self.profile.wrap(&body);
        self.reporter.on_progress(Progress::COMPLETE);

        let text = self.chain.mutate_text(text);
        self.transition(PassState::OutputReady);
        Ok(text)
    }

    fn parse(&self, settings: &HostSettings) -> Result<ParseOutput> {
        let source = read_source(self.request.source_path())?;
        tracing::debug!(encoding = %source.encoding, "read template");
        self.parser
            .parse(&source.text, settings)
            .wrap_err("template parser failed")
    }

    fn render(&self, model: &CodeModel, options: &RenderOptions) -> Result<String> {
        let language = self.renderer.language();
        if language != self.profile.language {
            bail!(
                "renderer produces {} but the language profile is for {}",
                language,
                self.profile.language
            );
        }
        self.renderer
            .render(model, options)
            .wrap_err_with(|| format!("{} renderer failed", language))
    }

    fn fail(&mut self, failure: GenerationFailure) -> GenerationFailure {
        self.reporter
            .on_diagnostic(&Diagnostic::fatal(failure.message()));
        failure
    }

    fn transition(&mut self, next: PassState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid pass transition {} -> {}",
            self.state,
            next
        );
        tracing::debug!(from = %self.state, to = %next, "pass state");
        self.state = next;
    }
}
