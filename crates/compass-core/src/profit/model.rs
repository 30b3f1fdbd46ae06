//! Profitability calculation domain models.

use serde::{Deserialize, Serialize};

/// Full result of a profitability calculation.
///
/// Currency fields are rounded to 2 decimal places at construction; the
/// calculation itself runs at full precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitabilityResult {
    pub recommended_selling_price: f64,
    pub cost_breakdown: CostBreakdown,
    pub profit_analysis: ProfitAnalysis,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub material_cost: f64,
    pub shipping_cost: f64,
    pub shopify_fees: f64,
    pub total_costs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitAnalysis {
    pub gross_profit: f64,
    pub profit_margin_percentage: f64,
    pub break_even_units: i64,
}
