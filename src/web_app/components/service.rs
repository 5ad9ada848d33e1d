// web_app/components/service.rs - Service page body components
//
// - ServiceSkeleton: placeholder shown while content loads
// - ServiceContentView: hero, body, benefits and FAQs of a service page

use leptos::prelude::*;

use crate::web_app::components::common::{Badge, BadgeTone};
use crate::web_app::components::layout::{Footer, Header};
use crate::web_app::model::{Faq, ServiceContent};
use crate::web_app::schema_markup::humanize_slug;

/// Fallback hero heading when content has none
pub fn hero_heading(service: &str, city: Option<&str>) -> String {
    match city {
        Some(city) => format!("{} in {}", humanize_slug(service), humanize_slug(city)),
        None => humanize_slug(service),
    }
}

/// Structural placeholder with the page chrome and pulsing blocks
#[component]
pub fn ServiceSkeleton() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Header />
            <div class="container mx-auto px-4 py-8 animate-pulse">
                <div class="max-w-4xl mx-auto space-y-6">
                    <div class="h-10 bg-gray-200 rounded w-2/3"></div>
                    <div class="h-4 bg-gray-200 rounded w-full"></div>
                    <div class="h-4 bg-gray-200 rounded w-5/6"></div>
                    <div class="h-64 bg-gray-100 rounded-xl"></div>
                </div>
            </div>
            <Footer />
        </div>
    }
}

#[component]
pub fn ServiceContentView(
    service: String,
    city: Option<String>,
    industry: Option<String>,
    content: ServiceContent,
) -> impl IntoView {
    let heading = content
        .hero_title
        .clone()
        .unwrap_or_else(|| hero_heading(&service, city.as_deref()));

    let ServiceContent {
        hero_description,
        body,
        benefits,
        faqs,
        updated_at,
        ..
    } = content;

    view! {
        <article class="max-w-4xl mx-auto space-y-10">
            <section class="space-y-4">
                <div class="flex gap-2">
                    {city.map(|c| view! { <Badge tone=BadgeTone::Location>{humanize_slug(&c)}</Badge> })}
                    {industry.map(|i| view! { <Badge tone=BadgeTone::Industry>{humanize_slug(&i)}</Badge> })}
                </div>
                <h1 class="text-4xl font-bold text-gray-900">{heading}</h1>
                {hero_description.map(|d| view! { <p class="text-lg text-gray-600">{d}</p> })}
            </section>

            {body.map(|b| view! {
                <section class="prose max-w-none text-gray-700">
                    {b.split("\n\n").map(|p| view! { <p>{p.to_string()}</p> }).collect_view()}
                </section>
            })}

            {(!benefits.is_empty()).then(|| view! {
                <section>
                    <h2 class="text-2xl font-semibold mb-4">"Why Choose Us"</h2>
                    <ul class="grid sm:grid-cols-2 gap-3">
                        {benefits.into_iter().map(|b| view! {
                            <li class="flex gap-2 items-start">
                                <span class="text-green-600">"✓"</span>
                                <span>{b}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </section>
            })}

            <FaqList faqs=faqs />

            {updated_at.map(|at| view! {
                <p class="text-xs text-gray-400">{format!("Last updated {}", at.format("%B %-d, %Y"))}</p>
            })}
        </article>
    }
}

#[component]
fn FaqList(faqs: Vec<Faq>) -> impl IntoView {
    if faqs.is_empty() {
        return None;
    }

    Some(view! {
        <section>
            <h2 class="text-2xl font-semibold mb-4">"Frequently Asked Questions"</h2>
            <div class="divide-y divide-gray-200 border border-gray-200 rounded-xl">
                {faqs.into_iter().map(|faq| view! {
                    <details class="p-4">
                        <summary class="font-medium cursor-pointer">{faq.question}</summary>
                        <p class="mt-2 text-gray-600">{faq.answer}</p>
                    </details>
                }).collect_view()}
            </div>
        </section>
    })
}
