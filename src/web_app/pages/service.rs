// web_app/pages/service.rs - Service page component
//
// Renders one of three views (loading, not found, found) from the content
// hook, and keeps the page's JSON-LD registration in step with what is on
// screen: acquired when content resolves, released on any change of
// content or route and on unmount.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;
use leptos_router::params::ParamsMap;

use crate::web_app::components::*;
use crate::web_app::hooks::use_service_content;
use crate::web_app::model::*;
use crate::web_app::schema_markup::{PageSchemaInjector, SchemaLifecycle};
use crate::web_app::service_view::*;

fn route_params(map: &ParamsMap) -> ServiceRouteParams {
    ServiceRouteParams::new(
        map.get("service").unwrap_or_default(),
        map.get("city"),
        map.get("industry"),
    )
}

#[component]
pub fn ServicePage() -> impl IntoView {
    let params_map = use_params_map();
    let params = Memo::new(move |_| params_map.with(route_params));
    let state = use_service_content(params.into());

    let page_view = move || ServicePageView::resolve(state.loading.get(), state.content.get());

    let schema = StoredValue::new_local(SchemaLifecycle::new());
    Effect::new(move || {
        let target = params.with(|p| page_view().schema_target(p));
        schema.update_value(|lifecycle| lifecycle.sync(&PageSchemaInjector::default(), target));
    });
    on_cleanup(move || schema.update_value(|lifecycle| lifecycle.teardown()));

    view! {
        <Suspense fallback=|| view! { <ServiceSkeleton /> }>
            {move || match page_view() {
                ServicePageView::Loading => view! { <ServiceSkeleton /> }.into_any(),
                ServicePageView::NotFound => {
                    let p = params.get();
                    view! { <ServiceNotFound service=p.service city=p.city /> }.into_any()
                }
                ServicePageView::Found(content) => {
                    let p = params.get();
                    view! {
                        <div class="min-h-screen flex flex-col">
                            <Header />
                            <main class="flex-grow">
                                <Title text=content.meta_title.clone() />
                                <Meta name="description" content=content.meta_description.clone() />

                                <div class="container mx-auto px-4 py-8">
                                    <ServiceContentView
                                        service=p.service
                                        city=p.city
                                        industry=p.industry
                                        content=content
                                    />
                                </div>

                                <ContactSection />
                            </main>
                            <Footer />
                        </div>
                    }.into_any()
                }
            }}
        </Suspense>
    }
}

#[component]
fn ServiceNotFound(service: String, city: Option<String>) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Header />
            <div class="container mx-auto px-4 py-8">
                <div class="max-w-4xl mx-auto text-center">
                    <h1 class="text-2xl font-bold mb-4">{NOT_FOUND_HEADING}</h1>
                    <p class="text-gray-600">{not_found_message(&service, city.as_deref())}</p>
                </div>
            </div>
            <Footer />
        </div>
    }
}
