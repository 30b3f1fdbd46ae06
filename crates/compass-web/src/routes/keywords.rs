//! Keyword explorer route handler.

use axum::Json;
use rand::thread_rng;
use serde::{Deserialize, Serialize};

use compass_core::market::model::KeywordEntry;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct KeywordExplorerRequest {
    pub keyword: Option<String>,
}

#[derive(Serialize)]
pub struct KeywordExplorerResponse {
    pub success: bool,
    pub base_keyword: String,
    pub related_keywords: Vec<KeywordEntry>,
    pub total_found: usize,
}

/// POST /api/keyword-explorer - Score keywords related to a base query.
pub async fn keyword_explorer(
    Json(req): Json<KeywordExplorerRequest>,
) -> Result<Json<KeywordExplorerResponse>, ApiError> {
    let keyword = req
        .keyword
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ApiError::bad_request("Keyword is required"))?;

    let base_keyword = keyword.to_lowercase();
    let search = compass_core::market::explore_keywords(&base_keyword, &mut thread_rng());

    Ok(Json(KeywordExplorerResponse {
        success: true,
        base_keyword,
        related_keywords: search.related_keywords,
        total_found: search.total_found,
    }))
}
