//! Profitability calculator route handler.

use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use compass_core::profit::model::ProfitabilityResult;
use compass_core::profit::{DEFAULT_FEE_PERCENTAGE, DEFAULT_MARGIN_PERCENTAGE};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct ProfitabilityRequest {
    pub material_cost: Option<f64>,
    pub shipping_cost: Option<f64>,
    pub shopify_fees: Option<f64>,
    pub desired_margin: Option<f64>,
}

#[derive(Serialize)]
pub struct ProfitabilityResponse {
    pub success: bool,
    pub calculation: ProfitabilityResult,
    pub calculation_date: String,
}

/// POST /api/profitability-calculator - Recommended selling price from costs.
pub async fn profitability_calculator(
    Json(req): Json<ProfitabilityRequest>,
) -> Result<Json<ProfitabilityResponse>, ApiError> {
    let material_cost = req
        .material_cost
        .ok_or_else(|| ApiError::bad_request("material_cost is required"))?;
    let shipping_cost = req
        .shipping_cost
        .ok_or_else(|| ApiError::bad_request("shipping_cost is required"))?;

    let calculation = compass_core::profit::calculate_profitability(
        material_cost,
        shipping_cost,
        req.shopify_fees.unwrap_or(DEFAULT_FEE_PERCENTAGE),
        req.desired_margin.unwrap_or(DEFAULT_MARGIN_PERCENTAGE),
    )?;

    Ok(Json(ProfitabilityResponse {
        success: true,
        calculation,
        calculation_date: Utc::now().to_rfc3339(),
    }))
}
