// web_app/generation.rs - Content generation request lifecycle
//
// The form state machine behind the `ContentGenerator` component. It has
// no Leptos dependency so it can be driven directly from tests:
//
//   Idle --submit (non-blank prompt)--> Submitting --result--> Idle
//
// A blank prompt never leaves Idle. Every outcome is reported through the
// injected `Notifier`; nothing propagates past the component.

use std::future::Future;

use crate::web_app::model::*;
use crate::web_app::notify::Notifier;

pub const IDLE_LABEL: &str = "Generate";
pub const SUBMITTING_LABEL: &str = "Generating...";

pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a prompt";
pub const SUCCESS_MESSAGE: &str = "Content generated successfully";
pub const FAILURE_MESSAGE: &str = "Failed to generate content. Please try again.";

/// Errors on the generation path
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("generation service failed: {0}")]
    Remote(String),
}

/// Remote generation capability (`generate-content`)
pub trait GenerationService {
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<GenerationResponse, GenerationError>>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenerationPhase {
    #[default]
    Idle,
    Submitting,
}

impl GenerationPhase {
    pub fn is_submitting(self) -> bool {
        self == GenerationPhase::Submitting
    }

    /// Label of the submit control in this phase
    pub fn button_label(self) -> &'static str {
        match self {
            GenerationPhase::Idle => IDLE_LABEL,
            GenerationPhase::Submitting => SUBMITTING_LABEL,
        }
    }
}

/// Checks the prompt and builds the request body
pub fn validate_prompt(prompt: &str, kind: ContentKind) -> Result<GenerationRequest, GenerationError> {
    if prompt.trim().is_empty() {
        return Err(GenerationError::EmptyPrompt);
    }
    Ok(GenerationRequest {
        prompt: prompt.to_string(),
        kind,
    })
}

/// Form state: the prompt text, the configured kind and the request phase
#[derive(Clone, Debug, Default)]
pub struct GenerationForm {
    prompt: String,
    kind: ContentKind,
    phase: GenerationPhase,
}

impl GenerationForm {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            prompt: config.default_prompt,
            kind: config.kind,
            phase: GenerationPhase::Idle,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    /// The submit control is disabled while this is true
    pub fn is_submitting(&self) -> bool {
        self.phase.is_submitting()
    }

    pub fn button_label(&self) -> &'static str {
        self.phase.button_label()
    }

    /// Handles the submit action.
    ///
    /// Returns the request to send, or `None` when nothing should be sent:
    /// either a request is already in flight (the control is disabled) or
    /// the prompt is blank, in which case an error toast is emitted.
    pub fn begin(&mut self, notifier: &impl Notifier) -> Option<GenerationRequest> {
        if self.is_submitting() {
            tracing::debug!("Submit ignored: a generation request is already in flight");
            return None;
        }

        match validate_prompt(&self.prompt, self.kind) {
            Ok(request) => {
                self.phase = GenerationPhase::Submitting;
                Some(request)
            }
            Err(_) => {
                notifier.notify(Toast::destructive("Error", EMPTY_PROMPT_MESSAGE));
                None
            }
        }
    }

    /// Applies the outcome of the remote call and returns to Idle.
    ///
    /// A response without text emits nothing at all.
    pub fn complete<F>(
        &mut self,
        result: Result<GenerationResponse, GenerationError>,
        notifier: &impl Notifier,
        on_generated: Option<F>,
    ) where
        F: FnOnce(String),
    {
        self.phase = GenerationPhase::Idle;

        match result {
            Ok(response) => {
                let Some(text) = response.text() else {
                    tracing::warn!("Generation succeeded without generated text");
                    return;
                };
                if let Some(sink) = on_generated {
                    sink(text.to_string());
                }
                notifier.notify(Toast::success("Success", SUCCESS_MESSAGE));
            }
            Err(e) => {
                tracing::error!("Error generating content: {}", e);
                notifier.notify(Toast::destructive("Error", FAILURE_MESSAGE));
            }
        }
    }

    /// Runs one full submit cycle against `service`
    pub async fn submit<S, N, F>(&mut self, service: &S, notifier: &N, on_generated: Option<F>)
    where
        S: GenerationService,
        N: Notifier,
        F: FnOnce(String),
    {
        let Some(request) = self.begin(notifier) else {
            return;
        };

        tracing::info!("Generate request: type={}, prompt_len={}", request.kind.as_str(), request.prompt.len());
        let result = service.generate(request).await;
        self.complete(result, notifier, on_generated);
    }
}
