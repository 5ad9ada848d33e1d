// web_app/hooks.rs - Data hooks over server functions

use leptos::prelude::*;

use crate::web_app::model::*;
use crate::web_app::server_fns::get_service_content;

/// Fetch state of a service page's content
#[derive(Clone, Copy)]
pub struct ServiceContentState {
    pub content: Signal<Option<ServiceContent>>,
    pub loading: Signal<bool>,
}

/// Fetches content for the current route params, refetching when they change.
///
/// The resource remembers which params it answered for, so stale content
/// from the previous route reads as still loading rather than as a match.
/// Fetch errors are logged and surface as "no content".
pub fn use_service_content(params: Signal<ServiceRouteParams>) -> ServiceContentState {
    let resource = Resource::new(
        move || params.get(),
        |p| async move {
            let fetched = get_service_content(p.service.clone(), p.city.clone(), p.industry.clone()).await;
            let content = match fetched {
                Ok(content) => content,
                Err(e) => {
                    tracing::error!("Failed to load content for '{}': {}", p.service, e);
                    None
                }
            };
            (p, content)
        },
    );

    let loading = Signal::derive(move || match resource.get() {
        None => true,
        Some((answered, _)) => params.with(|current| &answered != current),
    });

    let content = Signal::derive(move || {
        resource
            .get()
            .filter(|(answered, _)| params.with(|current| answered == current))
            .and_then(|(_, content)| content)
    });

    ServiceContentState { content, loading }
}
