// web_app/api/queries.rs - Service page content queries
//
// Service page content lives in `<schema>.service_pages`, one row per
// (service, city, industry) combination. City and industry are nullable;
// a NULL city is the generic page for the service.
// The `_with_schema` variants let tests work in an isolated schema.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::web_app::model::*;

pub const CONTENT_SCHEMA: &str = "content";

/// Row shape of `service_pages`; FAQs are stored as JSONB
#[derive(Clone, sqlx::FromRow)]
struct ServiceContentRow {
    meta_title: String,
    meta_description: String,
    hero_title: Option<String>,
    hero_description: Option<String>,
    body: Option<String>,
    benefits: Vec<String>,
    faqs: Json<Vec<Faq>>,
    updated_at: Option<chrono::NaiveDateTime>,
}

impl From<ServiceContentRow> for ServiceContent {
    fn from(row: ServiceContentRow) -> Self {
        ServiceContent {
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            hero_title: row.hero_title,
            hero_description: row.hero_description,
            body: row.body,
            benefits: row.benefits,
            faqs: row.faqs.0,
            updated_at: row.updated_at,
        }
    }
}

/// Content for a service page, or `None` when no row matches
pub async fn fetch_service_content(
    pool: &PgPool,
    params: &ServiceRouteParams,
) -> Result<Option<ServiceContent>, sqlx::Error> {
    fetch_service_content_with_schema(pool, params, CONTENT_SCHEMA).await
}

pub async fn fetch_service_content_with_schema(
    pool: &PgPool,
    params: &ServiceRouteParams,
    schema: &str,
) -> Result<Option<ServiceContent>, sqlx::Error> {
    let sql = format!(r#"
        SELECT
            meta_title, meta_description, hero_title, hero_description,
            body, COALESCE(benefits, '{{}}') as benefits,
            COALESCE(faqs, '[]'::jsonb) as faqs, updated_at
        FROM {}.service_pages
        WHERE lower(service) = lower($1)
          AND lower(city) IS NOT DISTINCT FROM lower($2)
          AND lower(industry) IS NOT DISTINCT FROM lower($3)
        LIMIT 1
    "#, schema);

    let row = sqlx::query_as::<_, ServiceContentRow>(&sql)
        .bind(&params.service)
        .bind(params.city.as_deref())
        .bind(params.industry.as_deref())
        .fetch_optional(pool)
        .await?;

    Ok(row.map(ServiceContent::from))
}

/// Inserts or replaces the content for one (service, city, industry)
pub async fn upsert_service_content(
    pool: &PgPool,
    params: &ServiceRouteParams,
    content: &ServiceContent,
) -> Result<(), sqlx::Error> {
    upsert_service_content_with_schema(pool, params, content, CONTENT_SCHEMA).await
}

pub async fn upsert_service_content_with_schema(
    pool: &PgPool,
    params: &ServiceRouteParams,
    content: &ServiceContent,
    schema: &str,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let delete_sql = format!(r#"
        DELETE FROM {}.service_pages
        WHERE lower(service) = lower($1)
          AND lower(city) IS NOT DISTINCT FROM lower($2)
          AND lower(industry) IS NOT DISTINCT FROM lower($3)
    "#, schema);

    sqlx::query(&delete_sql)
        .bind(&params.service)
        .bind(params.city.as_deref())
        .bind(params.industry.as_deref())
        .execute(&mut *tx)
        .await?;

    let insert_sql = format!(r#"
        INSERT INTO {}.service_pages (
            service, city, industry, meta_title, meta_description,
            hero_title, hero_description, body, benefits, faqs, updated_at
        ) VALUES (
            $1, $2, $3, $4, $5,
            $6, $7, $8, $9, $10, COALESCE($11, NOW())
        )
    "#, schema);

    sqlx::query(&insert_sql)
        .bind(&params.service)
        .bind(params.city.as_deref())
        .bind(params.industry.as_deref())
        .bind(&content.meta_title)
        .bind(&content.meta_description)
        .bind(content.hero_title.as_deref())
        .bind(content.hero_description.as_deref())
        .bind(content.body.as_deref())
        .bind(&content.benefits)
        .bind(Json(&content.faqs))
        .bind(content.updated_at)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Number of stored service pages
pub async fn count_service_pages(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {}.service_pages", CONTENT_SCHEMA);
    let count: (i64,) = sqlx::query_as(&sql).fetch_one(pool).await?;
    Ok(count.0)
}
