// web_app/schema_markup.rs - JSON-LD structured data for service pages
//
// Registration is an explicit acquire/release pair. `SchemaInjector::inject`
// returns a `SchemaRegistration` whose `release` detaches the markup;
// `SchemaLifecycle` makes sure every registration is released before the
// next one is made and when the page is torn down.

use serde_json::{json, Value};

use crate::web_app::model::{Faq, ServiceContent};

pub const SCRIPT_ID_PREFIX: &str = "service-schema";

/// Turns a route slug ("water-heater-repair") into a display name
pub fn humanize_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the schema.org graph for a service page
pub fn build_json_ld(service: &str, city: Option<&str>, meta_description: &str, faqs: &[Faq]) -> Value {
    let mut service_node = json!({
        "@type": "Service",
        "name": humanize_slug(service),
        "serviceType": service,
        "description": meta_description,
    });

    if let Some(city) = city {
        service_node["areaServed"] = json!({
            "@type": "City",
            "name": humanize_slug(city),
        });
    }

    let mut graph = vec![service_node];

    if !faqs.is_empty() {
        let questions: Vec<Value> = faqs
            .iter()
            .map(|faq| {
                json!({
                    "@type": "Question",
                    "name": faq.question,
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": faq.answer,
                    },
                })
            })
            .collect();

        graph.push(json!({
            "@type": "FAQPage",
            "mainEntity": questions,
        }));
    }

    json!({
        "@context": "https://schema.org",
        "@graph": graph,
    })
}

/// Element id used for a page's JSON-LD script
pub fn script_id(service: &str, city: Option<&str>) -> String {
    match city {
        Some(city) => format!("{}-{}-{}", SCRIPT_ID_PREFIX, service, city),
        None => format!("{}-{}", SCRIPT_ID_PREFIX, service),
    }
}

/// Handle to injected markup. Must be released explicitly.
pub struct SchemaRegistration {
    detach: Option<Box<dyn FnOnce()>>,
}

impl SchemaRegistration {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// A registration with nothing to detach
    pub fn empty() -> Self {
        Self { detach: None }
    }

    pub fn release(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl std::fmt::Debug for SchemaRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRegistration")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

/// Document-level structured-data registration
pub trait SchemaInjector {
    fn inject(
        &self,
        service: &str,
        city: Option<&str>,
        meta_description: &str,
        faqs: &[Faq],
    ) -> SchemaRegistration;
}

/// Injector used where there is no document (server rendering)
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSchemaInjector;

impl SchemaInjector for NoopSchemaInjector {
    fn inject(&self, service: &str, city: Option<&str>, _meta_description: &str, _faqs: &[Faq]) -> SchemaRegistration {
        tracing::debug!("Skipping schema markup for service={} city={:?}: no document", service, city);
        SchemaRegistration::empty()
    }
}

/// Appends a `<script type="application/ld+json">` to `<head>`
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSchemaInjector;

#[cfg(feature = "hydrate")]
impl SchemaInjector for DomSchemaInjector {
    fn inject(&self, service: &str, city: Option<&str>, meta_description: &str, faqs: &[Faq]) -> SchemaRegistration {
        let markup = build_json_ld(service, city, meta_description, faqs);

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            tracing::warn!("No document available for schema markup");
            return SchemaRegistration::empty();
        };
        let Some(head) = document.head() else {
            tracing::warn!("Document has no <head> for schema markup");
            return SchemaRegistration::empty();
        };

        let script = match document.create_element("script") {
            Ok(script) => script,
            Err(e) => {
                tracing::error!("Failed to create schema script: {:?}", e);
                return SchemaRegistration::empty();
            }
        };
        // Attribute failures only lose the id/type hint; the element is still usable.
        let _ = script.set_attribute("type", "application/ld+json");
        let _ = script.set_attribute("id", &script_id(service, city));
        script.set_text_content(Some(&markup.to_string()));

        if let Err(e) = head.append_child(&script) {
            tracing::error!("Failed to attach schema script: {:?}", e);
            return SchemaRegistration::empty();
        }

        SchemaRegistration::new(move || script.remove())
    }
}

/// What the page wants registered right now
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaTarget {
    pub service: String,
    pub city: Option<String>,
    pub content: ServiceContent,
}

/// Owns at most one live registration for a page
#[derive(Debug, Default)]
pub struct SchemaLifecycle {
    current: Option<(SchemaTarget, SchemaRegistration)>,
}

impl SchemaLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self) -> bool {
        self.current.is_some()
    }

    /// Brings the registration in line with `target`.
    ///
    /// Re-syncing the same target does nothing. Any other change releases
    /// the live registration before a new one is made; targets without a
    /// meta description are not registered.
    pub fn sync(&mut self, injector: &impl SchemaInjector, target: Option<SchemaTarget>) {
        if let (Some((live, _)), Some(next)) = (&self.current, &target) {
            if live == next {
                return;
            }
        }

        self.teardown();

        let Some(target) = target else {
            return;
        };
        if !target.content.has_meta_description() {
            return;
        }

        let registration = injector.inject(
            &target.service,
            target.city.as_deref(),
            &target.content.meta_description,
            &target.content.faqs,
        );
        self.current = Some((target, registration));
    }

    /// Releases the live registration, if any
    pub fn teardown(&mut self) {
        if let Some((target, registration)) = self.current.take() {
            tracing::debug!("Detaching schema markup for service={}", target.service);
            registration.release();
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        pub type PageSchemaInjector = DomSchemaInjector;
    } else {
        pub type PageSchemaInjector = NoopSchemaInjector;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_humanize_slug() {
        assert_eq!(humanize_slug("plumbing"), "Plumbing");
        assert_eq!(humanize_slug("water-heater-repair"), "Water Heater Repair");
        assert_eq!(humanize_slug("new_york"), "New York");
        assert_eq!(humanize_slug("--a--b"), "A B");
        assert_eq!(humanize_slug(""), "");
    }

    #[test]
    fn test_script_id() {
        assert_eq!(script_id("plumbing", None), "service-schema-plumbing");
        assert_eq!(script_id("plumbing", Some("austin")), "service-schema-plumbing-austin");
    }

    #[test]
    fn test_registration_release_runs_once() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let registration = SchemaRegistration::new(move || c.set(c.get() + 1));
        registration.release();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_registration_drop_does_not_detach() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let registration = SchemaRegistration::new(move || c.set(c.get() + 1));
        drop(registration);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_noop_injector_registration() {
        let mut lifecycle = SchemaLifecycle::new();
        let target = SchemaTarget {
            service: "plumbing".to_string(),
            city: None,
            content: ServiceContent {
                meta_description: "desc".to_string(),
                ..Default::default()
            },
        };
        lifecycle.sync(&NoopSchemaInjector, Some(target));
        assert!(lifecycle.is_registered());
        lifecycle.teardown();
        assert!(!lifecycle.is_registered());
    }
}
