// web_app/components/generator.rs - AI content generator form
//
// A prompt box and a Generate button. The request lifecycle lives in
// `generation::GenerationForm`; `GeneratorState` mirrors its phase into a
// signal the button reads, and the call runs on the local task queue.

use leptos::prelude::*;

use crate::web_app::components::common::{Button, Card, TextArea};
use crate::web_app::components::toast::use_toast;
use crate::web_app::generation::*;
use crate::web_app::model::*;
use crate::web_app::notify::Notifier;
use crate::web_app::server_fns::generate_content;

/// Calls `generate-content` through the server function
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerFnGenerationService;

impl GenerationService for ServerFnGenerationService {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, GenerationError> {
        generate_content(request.prompt, request.kind)
            .await
            .map_err(|e| GenerationError::Remote(e.to_string()))
    }
}

/// Form state owned by one mounted generator.
///
/// `phase` is written only from the form after `begin` and `complete`,
/// so the button never disagrees with the state machine.
#[derive(Clone, Copy)]
pub struct GeneratorState {
    form: StoredValue<GenerationForm>,
    phase: RwSignal<GenerationPhase>,
}

impl GeneratorState {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            form: StoredValue::new(GenerationForm::new(config)),
            phase: RwSignal::new(GenerationPhase::Idle),
        }
    }

    pub fn phase(&self) -> Signal<GenerationPhase> {
        self.phase.into()
    }

    pub fn initial_prompt(&self) -> String {
        self.form.with_value(|f| f.prompt().to_string())
    }

    /// Submits `prompt`; `None` when nothing should be sent
    pub fn start(&self, prompt: String, notifier: &impl Notifier) -> Option<GenerationRequest> {
        let phase = self.phase;
        self.form
            .try_update_value(|f| {
                f.set_prompt(prompt);
                let request = f.begin(notifier);
                phase.set(f.phase());
                request
            })
            .flatten()
    }

    /// Applies the call's outcome. Returns `false` without reporting
    /// anything when the generator was unmounted while the call ran.
    pub fn finish<F>(
        &self,
        result: Result<GenerationResponse, GenerationError>,
        notifier: &impl Notifier,
        on_generated: Option<F>,
    ) -> bool
    where
        F: FnOnce(String),
    {
        let phase = self.phase;
        let applied = self.form.try_update_value(|f| {
            f.complete(result, notifier, on_generated);
            phase.set(f.phase());
        });

        if applied.is_none() {
            tracing::debug!("Generator unmounted before the call finished; result dropped");
        }
        applied.is_some()
    }
}

/// Content generator card
#[component]
pub fn ContentGenerator(
    /// Receives the generated text on success
    #[prop(optional)]
    on_generated: Option<Callback<String>>,
    /// Content-kind tag sent with the prompt
    #[prop(optional)]
    kind: ContentKind,
    /// Initial prompt text
    #[prop(optional, into)]
    default_prompt: String,
) -> impl IntoView {
    let toast = use_toast();
    let state = GeneratorState::new(GeneratorConfig { kind, default_prompt });
    let prompt = RwSignal::new(state.initial_prompt());
    let phase = state.phase();

    let on_generate = Callback::new(move |()| {
        let Some(request) = state.start(prompt.get_untracked(), &toast) else {
            return;
        };

        leptos::task::spawn_local(async move {
            let result = ServerFnGenerationService.generate(request).await;
            let sink = on_generated.map(|callback| move |text: String| callback.run(text));
            state.finish(result, &toast, sink);
        });
    });

    view! {
        <Card title="Content Generator" description="Generate content using AI">
            <TextArea
                value=prompt
                placeholder="Enter your prompt here..."
                class="min-h-[100px]"
            />
            <div class="flex justify-end">
                <Button on_click=on_generate disabled=Signal::derive(move || phase.get().is_submitting())>
                    {move || phase.get().button_label()}
                </Button>
            </div>
        </Card>
    }
}
