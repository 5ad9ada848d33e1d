// web_app/pages/generator.rs - Content generation tool page
//
// Lets an editor pick a content kind, run the generator and copy the
// result. Switching kinds remounts the generator with the new tag.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::web_app::components::*;
use crate::web_app::model::ContentKind;

/// (value, label) pairs for the kind selector
pub fn kind_options() -> Vec<(String, String)> {
    ContentKind::ALL
        .into_iter()
        .map(|kind| (kind.as_str().to_string(), kind.to_string()))
        .collect()
}

#[component]
pub fn GeneratorPage() -> impl IntoView {
    let selected_kind = RwSignal::new(ContentKind::default().as_str().to_string());
    let kind = Memo::new(move |_| selected_kind.get().parse::<ContentKind>().unwrap_or_default());
    let output = RwSignal::new(None::<String>);

    let on_generated = Callback::new(move |text: String| output.set(Some(text)));

    view! {
        <Title text="Content Tools" />
        <div class="min-h-screen flex flex-col bg-gray-50">
            <Header />
            <main class="flex-grow container mx-auto px-4 py-8 max-w-3xl space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold">"Content Tools"</h1>
                    <Select value=selected_kind options=kind_options() />
                </div>

                {move || {
                    let kind = kind.get();
                    view! { <ContentGenerator kind=kind on_generated=on_generated /> }
                }}

                {move || output.get().map(|text| view! {
                    <Card title="Generated Content">
                        <pre class="whitespace-pre-wrap text-gray-800 bg-gray-50 rounded-lg p-4">{text}</pre>
                    </Card>
                })}
            </main>
            <Footer />
        </div>
    }
}
