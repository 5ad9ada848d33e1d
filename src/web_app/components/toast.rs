// web_app/components/toast.rs - Toast notifications
//
// `provide_toaster` puts a `ToastContext` into the reactive context at the
// app root; `<Toaster/>` renders the live toasts. Components get the
// context with `use_toast` and hand it to logic as a `Notifier`.

use leptos::prelude::*;

use crate::web_app::model::{Toast, ToastVariant};
use crate::web_app::notify::Notifier;

/// Toasts shown at once; older ones are dropped first
pub const TOAST_LIMIT: usize = 3;
pub const TOAST_DURATION_MS: u64 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<ToastEntry>> {
        self.toasts.read_only()
    }

    pub fn push(&self, toast: Toast) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(ToastEntry { id, toast });
            if toasts.len() > TOAST_LIMIT {
                let overflow = toasts.len() - TOAST_LIMIT;
                toasts.drain(..overflow);
            }
        });

        #[cfg(feature = "hydrate")]
        {
            let ctx = *self;
            set_timeout(
                move || ctx.dismiss(id),
                std::time::Duration::from_millis(TOAST_DURATION_MS),
            );
        }

        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|entry| entry.id != id));
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastContext {
    fn notify(&self, toast: Toast) {
        self.push(toast);
    }
}

/// Creates the app-wide toast context
pub fn provide_toaster() -> ToastContext {
    let ctx = ToastContext::new();
    provide_context(ctx);
    ctx
}

/// The nearest toast context, or a detached one if none was provided
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(|| {
        tracing::warn!("No ToastContext provided; notifications will not be shown");
        ToastContext::new()
    })
}

fn toast_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Default => "bg-white border border-gray-200 text-gray-900",
        ToastVariant::Destructive => "bg-red-600 border border-red-700 text-white",
    }
}

/// Renders the live toasts in the bottom-right corner
#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_toast();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80" role="status" aria-live="polite">
            <For
                each=move || ctx.toasts().get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div class=format!("rounded-lg shadow-lg p-4 {}", toast_class(entry.toast.variant))>
                            <div class="flex justify-between items-start gap-2">
                                <div>
                                    <p class="font-semibold">{entry.toast.title}</p>
                                    <p class="text-sm opacity-90">{entry.toast.description}</p>
                                </div>
                                <button
                                    class="opacity-70 hover:opacity-100"
                                    title="Dismiss"
                                    on:click=move |_| ctx.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
