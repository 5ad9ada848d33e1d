// fixtures/tables/service_pages.rs
//
// The `content.service_pages` table: one row of page content per
// (service, city, industry). Seed rows ship in data/service_pages.json.

use crate::fixtures::TestTable;
use crate::web_app::model::{ServiceContent, ServiceRouteParams};
use serde::{Deserialize, Serialize};

/// Bundled seed data
pub const SEED_JSON: &str = include_str!("../../../data/service_pages.json");

/// One seed row: route identifiers plus the page content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicePageSeed {
    pub service: String,
    pub city: Option<String>,
    pub industry: Option<String>,
    #[serde(flatten)]
    pub content: ServiceContent,
}

impl ServicePageSeed {
    pub fn params(&self) -> ServiceRouteParams {
        ServiceRouteParams::new(self.service.clone(), self.city.clone(), self.industry.clone())
    }
}

#[derive(Deserialize)]
struct SeedFile {
    pages: Vec<ServicePageSeed>,
}

pub struct ServicePagesTable;

impl ServicePagesTable {
    /// Parses a seed file of the form `{ "pages": [...] }`
    pub fn parse_seed(json: &str) -> serde_json::Result<Vec<ServicePageSeed>> {
        serde_json::from_str::<SeedFile>(json).map(|file| file.pages)
    }

    pub fn seed() -> serde_json::Result<Vec<ServicePageSeed>> {
        Self::parse_seed(SEED_JSON)
    }

    /// Setup statements with the schema name swapped for `schema`
    pub fn setup_sql_for_schema(schema: &str) -> Vec<String> {
        Self::setup_sql()
            .iter()
            .map(|sql| sql.replace("content.", &format!("{}.", schema)).replace("SCHEMA IF NOT EXISTS content", &format!("SCHEMA IF NOT EXISTS {}", schema)))
            .collect()
    }
}

impl TestTable for ServicePagesTable {
    fn setup_sql() -> &'static [&'static str] {
        &[
            // 1. Schema
            "CREATE SCHEMA IF NOT EXISTS content",

            // 2. Table
            r#"
            CREATE TABLE IF NOT EXISTS content.service_pages (
                id SERIAL PRIMARY KEY,
                service VARCHAR(100) NOT NULL,
                city VARCHAR(100),
                industry VARCHAR(100),
                meta_title TEXT NOT NULL,
                meta_description TEXT NOT NULL DEFAULT '',
                hero_title TEXT,
                hero_description TEXT,
                body TEXT,
                benefits TEXT[] NOT NULL DEFAULT '{}',
                faqs JSONB NOT NULL DEFAULT '[]'::jsonb,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,

            // 3. One row per route; NULL city/industry compare equal here
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS service_pages_route_idx ON content.service_pages
                (lower(service), lower(COALESCE(city, '')), lower(COALESCE(industry, '')))
            "#,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parses() {
        let pages = ServicePagesTable::seed().unwrap();
        assert!(pages.len() >= 4);

        let austin = pages
            .iter()
            .find(|p| p.service == "plumbing" && p.city.as_deref() == Some("austin") && p.industry.is_none())
            .expect("austin plumbing seed row");
        assert_eq!(austin.content.meta_description, "Top plumbing services in Austin");
        assert_eq!(austin.content.faqs.len(), 1);
    }

    #[test]
    fn test_seed_params_normalize() {
        let seed = ServicePageSeed {
            service: "hvac".to_string(),
            city: Some(String::new()),
            industry: None,
            content: ServiceContent::default(),
        };
        assert!(seed.params().city.is_none());
    }

    #[test]
    fn test_setup_sql_for_schema() {
        let sql = ServicePagesTable::setup_sql_for_schema("test_pages");
        assert_eq!(sql.len(), 3);
        assert_eq!(sql[0], "CREATE SCHEMA IF NOT EXISTS test_pages");
        assert!(sql[1].contains("test_pages.service_pages"));
        assert!(!sql[1].contains("content.service_pages"));
        assert!(sql[2].contains("ON test_pages.service_pages"));
    }
}
