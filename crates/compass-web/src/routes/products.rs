//! Sales estimator route handler.

use axum::Json;
use rand::thread_rng;
use serde::{Deserialize, Serialize};

use compass_core::estimate::model::{Recommendation, SalesEstimate};
use compass_core::product::model::ProductAnalysis;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct SalesEstimatorRequest {
    pub product_url: Option<String>,
}

#[derive(Serialize)]
pub struct SalesEstimatorResponse {
    pub success: bool,
    pub product_analysis: ProductAnalysis,
    pub sales_estimate: SalesEstimate,
    pub recommendations: Vec<Recommendation>,
}

/// POST /api/sales-estimator - Estimate monthly sales for a product URL.
pub async fn sales_estimator(
    Json(req): Json<SalesEstimatorRequest>,
) -> Result<Json<SalesEstimatorResponse>, ApiError> {
    let product_url = req
        .product_url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::bad_request("Product URL is required"))?;

    if !compass_core::product::is_valid_product_url(product_url) {
        return Err(ApiError::bad_request(
            "URL must be a valid storefront product URL",
        ));
    }

    let analysis = compass_core::product::analyze_product_url(product_url, &mut thread_rng());
    let estimate = compass_core::estimate::estimate_sales(&analysis)?;
    let recommendations = compass_core::estimate::generate_recommendations(&analysis, &estimate);

    Ok(Json(SalesEstimatorResponse {
        success: true,
        product_analysis: analysis,
        sales_estimate: estimate,
        recommendations,
    }))
}
