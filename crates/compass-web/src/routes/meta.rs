//! Health check and service descriptor handlers.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health - Service liveness plus database connectivity.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let database = match &state.db {
        Some(pool) => match compass_db::ping(pool).await {
            Ok(()) => "connected".to_string(),
            Err(e) => format!("error: {e}"),
        },
        None => "disconnected".to_string(),
    };

    Json(json!({
        "status": "healthy",
        "database": database,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api - Static service descriptor.
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "name": "Niche Compass API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "API for e-commerce niche research and product analysis",
        "endpoints": {
            "sales_estimator": "/api/sales-estimator",
            "keyword_explorer": "/api/keyword-explorer",
            "niche_analysis": "/api/niche-analysis",
            "profitability_calculator": "/api/profitability-calculator",
            "trending_niches": "/api/trending-niches",
            "health": "/api/health",
        },
    }))
}
