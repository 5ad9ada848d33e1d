// web_app/app.rs - Root component: head defaults, toasts and routes

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::web_app::components::{provide_toaster, Footer, Header, Toaster};
use crate::web_app::pages::{GeneratorPage, HomePage, ServicePage};

pub const SITE_TITLE: &str = "Local Services";
pub const SITE_DESCRIPTION: &str = "Trusted local service professionals near you";

/// Service pages resolve at three depths; all render `ServicePage`
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster();

    view! {
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Stylesheet id="leptos" href="/pkg/service_site.css" />

        <Router>
            <Routes fallback=PageMissing>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/services/:service") view=ServicePage />
                <Route path=path!("/services/:service/:city") view=ServicePage />
                <Route path=path!("/services/:service/:city/:industry") view=ServicePage />
                <Route path=path!("/tools/generator") view=GeneratorPage />
            </Routes>
        </Router>

        <Toaster />
    }
}

#[component]
fn PageMissing() -> impl IntoView {
    view! {
        <Title text="Page not found" />
        <div class="min-h-screen flex flex-col">
            <Header />
            <main class="flex-grow flex flex-col items-center justify-center gap-4 px-4">
                <p class="text-sm font-semibold tracking-widest text-slate-400">"404"</p>
                <h1 class="text-3xl font-bold">"We couldn't find that page"</h1>
                <A href="/" attr:class="text-sky-700 underline">"Back to Home"</A>
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_meta_lengths() {
        assert!(!SITE_TITLE.is_empty());
        // Search engines truncate descriptions past ~160 chars
        assert!(SITE_DESCRIPTION.len() < 160);
    }
}
