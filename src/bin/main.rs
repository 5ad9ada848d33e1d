#![recursion_limit = "256"]

// service_site server: SSR for the marketing pages plus the /api server
// functions. Content comes from PostgreSQL, generation is forwarded to the
// edge function configured by FUNCTIONS_URL.

#[cfg(feature = "ssr")]
mod server {
    use actix_files::Files;
    use actix_web::{web, App as ActixApp, HttpServer};
    use leptos::config::LeptosOptions;
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, handle_server_fns, LeptosRoutes};
    use leptos_meta::MetaTags;
    use service_site::fixtures::tables::ServicePagesTable;
    use service_site::fixtures::TestTable;
    use service_site::web_app::api::{db, functions, queries};
    use service_site::web_app::App;
    use sqlx::PgPool;
    use tracing_subscriber::EnvFilter;

    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));
        tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
    }

    pub async fn connect() -> anyhow::Result<PgPool> {
        let pool = db::create_pool().await?;
        tracing::info!("Connected to database");
        Ok(pool)
    }

    /// Creates the content table and loads the bundled pages into an empty one
    pub async fn seed(pool: &PgPool) -> anyhow::Result<()> {
        for statement in ServicePagesTable::setup_sql() {
            sqlx::raw_sql(statement).execute(pool).await?;
        }

        let existing = queries::count_service_pages(pool).await?;
        if existing > 0 {
            tracing::info!("{} service pages present, seed skipped", existing);
            return Ok(());
        }

        let pages = ServicePagesTable::seed()?;
        for page in &pages {
            queries::upsert_service_content(pool, &page.params(), &page.content).await?;
        }
        tracing::info!("Seeded {} service pages", pages.len());
        Ok(())
    }

    fn shell(options: LeptosOptions) -> impl IntoView {
        view! {
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        }
    }

    pub async fn run() -> anyhow::Result<()> {
        dotenv::dotenv().ok();
        init_tracing();

        let pool = connect().await?;
        db::init_db(pool.clone());

        if let Err(e) = seed(&pool).await {
            tracing::error!("Seeding service pages failed: {}", e);
        }

        // Generation stays unavailable until FUNCTIONS_URL is set; pages still serve
        if let Err(e) = functions::shared_client() {
            tracing::warn!("Content generation disabled: {}", e);
        }

        let options = leptos_config::get_configuration(None)?.leptos_options;
        let addr = options.site_addr;
        tracing::info!("Listening on http://{}", addr);

        HttpServer::new(move || {
            let routes = generate_route_list(App);
            let pkg_dir = format!("{}/pkg", options.site_root);

            ActixApp::new()
                .app_data(web::Data::new(pool.clone()))
                .app_data(web::Data::new(options.clone()))
                .route("/api/{tail:.*}", handle_server_fns())
                .service(Files::new("/pkg", pkg_dir))
                .leptos_routes(routes, {
                    let options = options.clone();
                    move || shell(options.clone())
                })
        })
        .bind(&addr)?
        .run()
        .await?;

        Ok(())
    }
}

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    server::run().await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
