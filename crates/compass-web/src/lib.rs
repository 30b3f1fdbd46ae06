//! Niche Compass Web Server
//!
//! Axum-based REST API for niche research plus the bundled static frontend.
//! All handlers are stateless; the only shared state is the optional
//! database handle and the static directory path.

pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use compass_db::DbPool;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/", get(routes::meta::api_info))
        .route("/sales-estimator", post(routes::products::sales_estimator))
        .route("/keyword-explorer", post(routes::keywords::keyword_explorer))
        .route("/niche-analysis", post(routes::niches::niche_analysis))
        .route("/trending-niches", get(routes::niches::trending_niches))
        .route(
            "/profitability-calculator",
            post(routes::profit::profitability_calculator),
        )
        .route("/health", get(routes::meta::health))
        .with_state(state.clone());

    Router::new()
        .nest("/api", api_routes)
        .fallback(routes::frontend::serve_frontend)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(
    db: Option<DbPool>,
    static_dir: PathBuf,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let state = AppState::new(db, static_dir);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("API server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
