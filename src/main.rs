mod catalog;
mod config;
mod db;
mod enrichment;
mod entities;
mod error;
mod models;
mod routes;
mod templates;
mod tmdb;

use std::{sync::Arc, time::Duration};

use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{catalog::CatalogStore, config::Config, enrichment::Enrichment, tmdb::TmdbClient};

pub struct AppState {
    pub catalog: CatalogStore,
    pub enrichment: Arc<dyn Enrichment>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,moviequeue=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let http = reqwest::Client::builder()
        .user_agent("moviequeue/0.1")
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;

    let enrichment: Arc<dyn Enrichment> = Arc::new(TmdbClient::new(
        http,
        config.tmdb_api_key.clone(),
        config.tmdb_base_url.clone(),
        config.tmdb_image_base_url.clone(),
        config.tmdb_region.clone(),
        config.tmdb_rps,
    ));

    let catalog = CatalogStore::new(db, enrichment.clone());
    let state = Arc::new(AppState { catalog, enrichment });

    let app = routes::router(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, region = %config.tmdb_region, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
