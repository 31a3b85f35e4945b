mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use state::AppState;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut builder = nutriscan_sdk::AsyncNutriscanSdk::builder();
    if let Ok(path) = std::env::var("NUTRISCAN_CATALOG") {
        tracing::info!(%path, "loading catalog from file");
        builder = builder.catalog_path(path);
    }
    let sdk = builder
        .build()
        .await
        .expect("Failed to load Nutriscan catalog");
    tracing::info!(sdk = %sdk.sdk(), "SDK ready");

    let state = Arc::new(AppState { sdk });

    let app = Router::new()
        .route("/api/catalog", get(routes::catalog::quick_access))
        .route("/api/catalog/search", get(routes::catalog::search))
        .route("/api/catalog/{barcode}", get(routes::catalog::get_product))
        .route("/api/score", post(routes::score::score))
        .route("/api/scan", post(routes::scan::scan))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::env::var("NUTRISCAN_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    tracing::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
