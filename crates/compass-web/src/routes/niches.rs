//! Niche analysis route handlers.

use axum::Json;
use chrono::Utc;
use rand::thread_rng;
use serde::{Deserialize, Serialize};

use compass_core::market::model::{NicheProfile, TrendingNiche};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct NicheAnalysisRequest {
    pub keyword: Option<String>,
}

#[derive(Serialize)]
pub struct NicheAnalysisResponse {
    pub success: bool,
    pub niche_analysis: NicheProfile,
    pub analysis_date: String,
    pub data_freshness: String,
}

#[derive(Serialize)]
pub struct TrendingNichesResponse {
    pub success: bool,
    pub trending_niches: Vec<TrendingNiche>,
    pub last_updated: String,
    pub data_source: String,
}

/// POST /api/niche-analysis - Deep-dive profile for a niche keyword.
pub async fn niche_analysis(
    Json(req): Json<NicheAnalysisRequest>,
) -> Result<Json<NicheAnalysisResponse>, ApiError> {
    let keyword = req
        .keyword
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ApiError::bad_request("Keyword is required"))?;

    let profile = compass_core::market::find_niche(keyword, &mut thread_rng());

    Ok(Json(NicheAnalysisResponse {
        success: true,
        niche_analysis: profile,
        analysis_date: Utc::now().to_rfc3339(),
        data_freshness: "Last updated 24 hours ago".to_string(),
    }))
}

/// GET /api/trending-niches - The fixed list of currently trending niches.
pub async fn trending_niches() -> Json<TrendingNichesResponse> {
    Json(TrendingNichesResponse {
        success: true,
        trending_niches: compass_core::market::trending_niches().to_vec(),
        last_updated: Utc::now().to_rfc3339(),
        data_source: "Market analysis and trend monitoring".to_string(),
    })
}
