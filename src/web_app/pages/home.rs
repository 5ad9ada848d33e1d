// web_app/pages/home.rs - Landing page listing the featured services

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::schema_markup::humanize_slug;

pub const FEATURED_SERVICES: [&str; 4] = ["plumbing", "electrical", "hvac", "roofing"];

/// Short category tag shown on a featured service card
pub fn featured_tag(service: &str) -> &'static str {
    match service {
        "plumbing" => "Leaks & drains",
        "electrical" => "Wiring & panels",
        "hvac" => "Heating & cooling",
        "roofing" => "Repairs & replacement",
        _ => "Home services",
    }
}

pub fn service_href(service: &str, city: Option<&str>) -> String {
    match city {
        Some(city) => format!("/services/{}/{}", service, city),
        None => format!("/services/{}", service),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Header />
            <main class="flex-grow container mx-auto px-4 py-12 max-w-5xl">
                <h1 class="text-4xl font-bold mb-4">"Local Services You Can Trust"</h1>
                <p class="text-lg text-gray-600 mb-10">"Licensed professionals, upfront pricing, and same-week scheduling."</p>
                <div class="grid sm:grid-cols-2 gap-6">
                    {FEATURED_SERVICES.into_iter().map(|service| view! {
                        <a
                            href=service_href(service, None)
                            class="block bg-white rounded-2xl border border-gray-100 shadow-sm p-6 hover:shadow-md transition-shadow"
                        >
                            <h2 class="text-xl font-semibold mb-3">{humanize_slug(service)}</h2>
                            <Badge tone=BadgeTone::Neutral>{featured_tag(service)}</Badge>
                        </a>
                    }).collect_view()}
                </div>
            </main>
            <ContactSection />
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_href() {
        assert_eq!(service_href("plumbing", None), "/services/plumbing");
        assert_eq!(service_href("plumbing", Some("austin")), "/services/plumbing/austin");
    }

    #[test]
    fn test_featured_services_have_own_tags() {
        let tags: Vec<_> = FEATURED_SERVICES.iter().map(|s| featured_tag(s)).collect();
        assert!(!tags.contains(&featured_tag("unknown")));

        let mut unique = tags.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), tags.len());
    }
}
