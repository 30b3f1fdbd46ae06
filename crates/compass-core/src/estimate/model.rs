//! Sales estimate domain models.

use serde::{Deserialize, Serialize};

/// Monthly sales estimate derived from a product analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesEstimate {
    pub estimated_monthly_sales: i64,
    pub estimated_monthly_revenue: f64,
    /// Percentage of initiated checkouts that do not complete.
    pub abandoned_cart_rate: i64,
    pub potential_sales_with_cart_recovery: i64,
    pub potential_additional_revenue: f64,
    /// Heuristic trust score, always within [50, 95].
    pub confidence_level: i64,
}

/// An actionable recommendation tied to an analysis result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub action: String,
}
