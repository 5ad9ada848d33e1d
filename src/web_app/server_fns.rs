// web_app/server_fns.rs - Server functions under /api
//
// Compiled for both targets: with `ssr` the bodies run against PostgreSQL
// and the edge-function client, with `hydrate` the macro turns each one
// into an HTTP call to the server.

use leptos::prelude::*;
use crate::web_app::model::*;

/// Pool for the current call: reactive context, then the process-wide
/// pool, then the actix app data of the request.
#[cfg(feature = "ssr")]
async fn pool() -> Result<sqlx::PgPool, ServerFnError> {
    use crate::web_app::api::db;
    use actix_web::{web::Data, HttpRequest};
    use sqlx::PgPool;

    if let Some(pool) = use_context::<PgPool>().or_else(db::get_db) {
        return Ok(pool);
    }

    let request: HttpRequest = leptos_actix::extract().await.map_err(|e| {
        tracing::error!("No request to read the pool from: {}", e);
        ServerFnError::new("Database pool not available")
    })?;

    request
        .app_data::<Data<PgPool>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| ServerFnError::new("Database pool not available"))
}

/// Content for a service page
///
/// `Ok(None)` means no content exists for this combination; the page
/// renders its not-found view for it.
#[server(GetServiceContent, "/api")]
pub async fn get_service_content(
    service: String,
    city: Option<String>,
    industry: Option<String>,
) -> Result<Option<ServiceContent>, ServerFnError> {
    use crate::web_app::api::queries;

    let params = ServiceRouteParams::new(service, city, industry);
    tracing::info!(
        "Service content request: service='{}', city={:?}, industry={:?}",
        params.service, params.city, params.industry
    );

    let pool = pool().await?;
    let content = queries::fetch_service_content(&pool, &params).await;

    match &content {
        Ok(Some(_)) => tracing::info!("Service content found for '{}'", params.service),
        Ok(None) => tracing::info!("No service content for '{}'", params.service),
        Err(e) => tracing::error!("Service content query failed: {}", e),
    }

    content.map_err(|e| ServerFnError::new(format!("Content lookup failed: {}", e)))
}

/// Forwards a prompt to the `generate-content` edge function
#[server(name = GenerateContent, prefix = "/api", endpoint = "generate-content")]
pub async fn generate_content(
    prompt: String,
    kind: ContentKind,
) -> Result<GenerationResponse, ServerFnError> {
    use crate::web_app::api::functions::{shared_client, GENERATE_CONTENT};
    use crate::web_app::generation::validate_prompt;

    let request = validate_prompt(&prompt, kind).map_err(|e| ServerFnError::new(e.to_string()))?;
    tracing::info!("Generate request: type={}, prompt_len={}", request.kind.as_str(), request.prompt.len());

    let client = shared_client().map_err(|e| {
        tracing::error!("Edge function client unavailable: {}", e);
        ServerFnError::new(e.to_string())
    })?;

    let response: GenerationResponse = client
        .invoke(GENERATE_CONTENT, &request)
        .await
        .map_err(|e| {
            tracing::error!("generate-content failed: {}", e);
            ServerFnError::new(e.to_string())
        })?;

    if response.text().is_none() {
        tracing::warn!("generate-content returned no generatedText");
    }

    Ok(response)
}
