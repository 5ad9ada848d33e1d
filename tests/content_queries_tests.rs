// tests/content_queries_tests.rs
// Service content lookups against an isolated schema

mod common;

use common::with_test_db;
use service_site::fixtures::tables::ServicePagesTable;
use service_site::web_app::api::queries::*;
use service_site::web_app::model::*;

async fn seed(pool: &sqlx::PgPool, schema: &str) -> anyhow::Result<usize> {
    let pages = ServicePagesTable::seed()?;
    for page in &pages {
        upsert_service_content_with_schema(pool, &page.params(), &page.content, schema).await?;
    }
    Ok(pages.len())
}

fn params(service: &str, city: Option<&str>, industry: Option<&str>) -> ServiceRouteParams {
    ServiceRouteParams::new(service, city.map(str::to_string), industry.map(str::to_string))
}

#[tokio::test]
async fn test_lookup_by_service_city_industry() -> anyhow::Result<()> {
    with_test_db("queries_lookup", |pool, schema| async move {
        seed(&pool, &schema).await?;

        let austin = fetch_service_content_with_schema(&pool, &params("plumbing", Some("austin"), None), &schema)
            .await?
            .expect("austin plumbing");
        assert_eq!(austin.meta_description, "Top plumbing services in Austin");
        assert_eq!(austin.faqs.len(), 1);
        assert!(austin.updated_at.is_some(), "updated_at defaults to insert time");

        let general = fetch_service_content_with_schema(&pool, &params("plumbing", None, None), &schema)
            .await?
            .expect("general plumbing");
        assert_ne!(general.meta_description, austin.meta_description);

        let restaurants =
            fetch_service_content_with_schema(&pool, &params("plumbing", Some("austin"), Some("restaurants")), &schema)
                .await?
                .expect("restaurant plumbing");
        assert!(restaurants.body.is_none());
        assert!(restaurants.faqs.is_empty());

        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_lookup_is_case_insensitive() -> anyhow::Result<()> {
    with_test_db("queries_case", |pool, schema| async move {
        seed(&pool, &schema).await?;

        let content = fetch_service_content_with_schema(&pool, &params("Plumbing", Some("AUSTIN"), None), &schema).await?;
        assert!(content.is_some());

        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_missing_rows_return_none() -> anyhow::Result<()> {
    with_test_db("queries_missing", |pool, schema| async move {
        seed(&pool, &schema).await?;

        for p in [
            params("nonexistent-service", None, None),
            params("plumbing", Some("nowhere"), None),
            params("electrical", Some("austin"), Some("restaurants")),
        ] {
            let content = fetch_service_content_with_schema(&pool, &p, &schema).await?;
            assert!(content.is_none(), "{:?}", p);
        }

        Ok(())
    })
    .await
}

#[tokio::test]
async fn test_upsert_replaces_existing_row() -> anyhow::Result<()> {
    with_test_db("queries_upsert", |pool, schema| async move {
        let route = params("roofing", Some("dallas"), None);
        let mut content = ServiceContent {
            meta_title: "Roofing in Dallas".to_string(),
            meta_description: "Storm damage repair".to_string(),
            benefits: vec!["Free inspections".to_string()],
            ..Default::default()
        };

        upsert_service_content_with_schema(&pool, &route, &content, &schema).await?;
        content.meta_description = "Roof replacement and repair".to_string();
        upsert_service_content_with_schema(&pool, &params("Roofing", Some("Dallas"), None), &content, &schema).await?;

        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}.service_pages", schema))
            .fetch_one(&pool)
            .await?;
        assert_eq!(count.0, 1);

        let stored = fetch_service_content_with_schema(&pool, &route, &schema)
            .await?
            .expect("roofing");
        assert_eq!(stored.meta_description, "Roof replacement and repair");
        assert_eq!(stored.benefits, vec!["Free inspections"]);

        Ok(())
    })
    .await
}
