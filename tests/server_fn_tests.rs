// tests/server_fn_tests.rs
// Test suite for Leptos server functions

mod common;

use common::create_test_pool;
use mockito::{Matcher, Server};
use service_site::fixtures::tables::ServicePagesTable;
use service_site::fixtures::TestTable;
use service_site::web_app::api::{db, queries};
use service_site::web_app::model::*;
use service_site::web_app::server_fns::*;

#[tokio::test]
async fn test_get_service_content() -> anyhow::Result<()> {
    let Some(pool) = create_test_pool().await? else {
        return Ok(());
    };

    // Server functions read the live `content` schema
    for sql in ServicePagesTable::setup_sql() {
        sqlx::raw_sql(sql).execute(&pool).await?;
    }
    for page in ServicePagesTable::seed()? {
        queries::upsert_service_content(&pool, &page.params(), &page.content).await?;
    }
    db::set_test_pool(pool.clone());

    println!("Testing get_service_content for plumbing/austin...");
    let content = get_service_content("plumbing".to_string(), Some("austin".to_string()), None)
        .await
        .map_err(|e| anyhow::anyhow!("get_service_content failed: {}", e))?
        .expect("plumbing/austin exists");
    assert_eq!(content.meta_description, "Top plumbing services in Austin");

    println!("Testing get_service_content with blank city...");
    let general = get_service_content("plumbing".to_string(), Some(String::new()), None)
        .await
        .map_err(|e| anyhow::anyhow!("get_service_content failed: {}", e))?;
    assert!(general.is_some());

    println!("Testing get_service_content for an unknown service...");
    let missing = get_service_content("nonexistent-service".to_string(), None, None)
        .await
        .map_err(|e| anyhow::anyhow!("get_service_content failed: {}", e))?;
    assert!(missing.is_none());

    Ok(())
}

#[tokio::test]
async fn test_generate_content_rejects_blank_prompt() {
    let result = generate_content("   ".to_string(), ContentKind::Description).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_generate_content_forwards_to_edge_function() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/generate-content")
        .match_body(Matcher::Json(serde_json::json!({ "prompt": "Write a tagline", "type": "meta-title" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"generatedText":"Build Better, Faster"}"#)
        .create_async()
        .await;

    // Only test in this binary that builds the shared client
    std::env::set_var("FUNCTIONS_URL", server.url());
    std::env::remove_var("FUNCTIONS_API_KEY");

    let response = generate_content("Write a tagline".to_string(), ContentKind::MetaTitle)
        .await
        .map_err(|e| anyhow::anyhow!("generate_content failed: {}", e))?;

    assert_eq!(response.text(), Some("Build Better, Faster"));
    mock.assert_async().await;
    Ok(())
}
