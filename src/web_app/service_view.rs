// web_app/service_view.rs - Which view a service page shows
//
// The page has three mutually exclusive states, decided only by the
// fetch state of the content hook.

use crate::web_app::model::{ServiceContent, ServiceRouteParams};
use crate::web_app::schema_markup::SchemaTarget;

pub const NOT_FOUND_HEADING: &str = "Service Not Found";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServicePageView {
    Loading,
    NotFound,
    Found(ServiceContent),
}

impl ServicePageView {
    /// Loading wins over any stale content still held by the hook
    pub fn resolve(loading: bool, content: Option<ServiceContent>) -> Self {
        match (loading, content) {
            (true, _) => ServicePageView::Loading,
            (false, None) => ServicePageView::NotFound,
            (false, Some(content)) => ServicePageView::Found(content),
        }
    }

    /// Structured data the page should hold in this state
    pub fn schema_target(&self, params: &ServiceRouteParams) -> Option<SchemaTarget> {
        match self {
            ServicePageView::Found(content) if content.has_meta_description() => Some(SchemaTarget {
                service: params.service.clone(),
                city: params.city.clone(),
                content: content.clone(),
            }),
            _ => None,
        }
    }
}

pub fn not_found_message(service: &str, city: Option<&str>) -> String {
    match city {
        Some(city) => format!("The requested service content for {} in {} could not be found.", service, city),
        None => format!("The requested service content for {} could not be found.", service),
    }
}
