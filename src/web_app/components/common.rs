// web_app/components/common.rs - Reusable UI components
//
// Stateless building blocks shared by the pages: buttons, cards, badges
// and form controls bound to signals.

use leptos::prelude::*;

pub const BUTTON_CLASS: &str = "inline-flex items-center justify-center gap-2 rounded-md px-4 py-2 \
                                text-sm font-medium bg-slate-900 text-white hover:bg-slate-800 \
                                disabled:opacity-50 disabled:pointer-events-none";

const FIELD_CLASS: &str = "w-full rounded-md border border-slate-300 bg-white px-3 py-2 text-sm \
                           placeholder:text-slate-400 focus:outline-none focus:ring-2 focus:ring-slate-400";

/// Action button. `disabled` is reactive so in-flight work can lock it.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let click = move |_| {
        if let Some(on_click) = on_click {
            on_click.run(());
        }
    };

    view! {
        <button type="button" class=BUTTON_CLASS disabled=move || disabled.get() on:click=click>
            {children()}
        </button>
    }
}

/// Bordered panel with a heading and optional subheading
#[component]
pub fn Card(
    children: Children,
    title: &'static str,
    #[prop(optional)]
    description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <section class="rounded-lg border border-slate-200 bg-white shadow-sm">
            <header class="flex flex-col gap-1.5 p-6">
                <h3 class="text-2xl font-semibold leading-none tracking-tight">{title}</h3>
                {description.map(|text| view! { <p class="text-sm text-slate-500">{text}</p> })}
            </header>
            <div class="p-6 pt-0 space-y-4">{children()}</div>
        </section>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Location,
    Industry,
}

pub fn badge_class(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Neutral => "rounded-full px-3 py-1 text-xs font-semibold bg-slate-100 text-slate-700",
        BadgeTone::Location => "rounded-full px-3 py-1 text-xs font-semibold bg-sky-100 text-sky-800",
        BadgeTone::Industry => "rounded-full px-3 py-1 text-xs font-semibold bg-emerald-100 text-emerald-800",
    }
}

/// Small pill label
#[component]
pub fn Badge(children: Children, #[prop(optional)] tone: BadgeTone) -> impl IntoView {
    view! { <span class=badge_class(tone)>{children()}</span> }
}

/// Multi-line input kept in sync with `value`
#[component]
pub fn TextArea(
    value: RwSignal<String>,
    #[prop(optional)]
    placeholder: &'static str,
    /// Extra classes appended to the field style
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <textarea
            class=format!("{FIELD_CLASS} {class}")
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        ></textarea>
    }
}

/// Drop-down over `(value, label)` pairs, writing the chosen value back
#[component]
pub fn Select(value: RwSignal<String>, options: Vec<(String, String)>) -> impl IntoView {
    let entries = options
        .into_iter()
        .map(|(option, label)| {
            let is_selected = {
                let option = option.clone();
                move || value.with(|current| *current == option)
            };
            view! { <option value=option selected=is_selected>{label}</option> }
        })
        .collect_view();

    view! {
        <select class="rounded-md border border-slate-300 bg-white px-3 py-2 text-sm" on:change=move |ev| value.set(event_target_value(&ev))>
            {entries}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_tones_are_distinct() {
        assert!(badge_class(BadgeTone::Location).contains("bg-sky-100"));
        assert!(badge_class(BadgeTone::Industry).contains("bg-emerald-100"));
        assert_ne!(badge_class(BadgeTone::Neutral), badge_class(BadgeTone::Location));
        assert_eq!(BadgeTone::default(), BadgeTone::Neutral);
    }

    #[test]
    fn test_button_class_dims_when_disabled() {
        assert!(BUTTON_CLASS.contains("disabled:opacity-50"));
        assert!(BUTTON_CLASS.contains("disabled:pointer-events-none"));
    }
}
