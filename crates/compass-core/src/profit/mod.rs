//! Profitability calculator.
//!
//! Solves the pricing formula `price = total_cost / (1 - fee% - margin%)`
//! for a recommended selling price given per-unit costs.

pub mod model;

use crate::error::{CompassError, CompassResult};
use model::{CostBreakdown, ProfitAnalysis, ProfitabilityResult};

/// Default marketplace transaction fee percentage.
pub const DEFAULT_FEE_PERCENTAGE: f64 = 2.9;

/// Default desired profit margin percentage.
pub const DEFAULT_MARGIN_PERCENTAGE: f64 = 30.0;

/// Calculate a recommended selling price and its cost/profit breakdown.
///
/// All inputs must be non-negative. Fee and margin percentages that sum to
/// 100% or more make the denominator non-positive and are rejected as a
/// caller error rather than producing an infinite or negative price.
pub fn calculate_profitability(
    material_cost: f64,
    shipping_cost: f64,
    fee_percentage: f64,
    desired_margin_percentage: f64,
) -> CompassResult<ProfitabilityResult> {
    if material_cost < 0.0
        || shipping_cost < 0.0
        || fee_percentage < 0.0
        || desired_margin_percentage < 0.0
    {
        return Err(CompassError::validation(
            "cost and percentage inputs must be non-negative",
        ));
    }

    let total_cost = material_cost + shipping_cost;
    let fee_fraction = fee_percentage / 100.0;
    let margin_fraction = desired_margin_percentage / 100.0;

    let denominator = 1.0 - fee_fraction - margin_fraction;
    if denominator <= 0.0 {
        return Err(CompassError::DegenerateMargin {
            fee_pct: fee_percentage,
            margin_pct: desired_margin_percentage,
        });
    }

    let recommended_price = total_cost / denominator;
    let fee_amount = recommended_price * fee_fraction;
    let profit_amount = recommended_price * margin_fraction;

    Ok(ProfitabilityResult {
        recommended_selling_price: round2(recommended_price),
        cost_breakdown: CostBreakdown {
            material_cost,
            shipping_cost,
            shopify_fees: round2(fee_amount),
            total_costs: round2(total_cost + fee_amount),
        },
        profit_analysis: ProfitAnalysis {
            gross_profit: round2(profit_amount),
            profit_margin_percentage: desired_margin_percentage,
            // Unit economics only; fixed costs are out of scope.
            break_even_units: 1,
        },
        recommendations: vec![
            format!(
                "Set selling price at ${recommended_price:.2} to achieve a {desired_margin_percentage}% margin"
            ),
            "Consider bulk purchasing to reduce material costs".to_string(),
            "Optimize shipping to reduce per-unit shipping costs".to_string(),
        ],
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_calculation() {
        let result = calculate_profitability(10.0, 5.0, 2.9, 30.0).unwrap();

        // 15 / (1 - 0.029 - 0.30) = 15 / 0.671
        assert_eq!(result.recommended_selling_price, 22.35);
        assert_eq!(result.cost_breakdown.material_cost, 10.0);
        assert_eq!(result.cost_breakdown.shipping_cost, 5.0);
        assert_eq!(result.cost_breakdown.shopify_fees, 0.65);
        assert_eq!(result.cost_breakdown.total_costs, 15.65);
        assert_eq!(result.profit_analysis.gross_profit, 6.71);
        assert_eq!(result.profit_analysis.profit_margin_percentage, 30.0);
        assert_eq!(result.profit_analysis.break_even_units, 1);
    }

    #[test]
    fn test_degenerate_denominator_is_rejected() {
        let err = calculate_profitability(10.0, 5.0, 50.0, 50.0).unwrap_err();
        assert!(matches!(err, CompassError::DegenerateMargin { .. }));

        let err = calculate_profitability(10.0, 5.0, 60.0, 50.0).unwrap_err();
        assert!(matches!(err, CompassError::DegenerateMargin { .. }));
    }

    #[test]
    fn test_negative_inputs_are_rejected() {
        let err = calculate_profitability(-1.0, 5.0, 2.9, 30.0).unwrap_err();
        assert!(matches!(err, CompassError::ValidationError(_)));
    }

    #[test]
    fn test_zero_costs_are_allowed() {
        let result = calculate_profitability(0.0, 0.0, 2.9, 30.0).unwrap();
        assert_eq!(result.recommended_selling_price, 0.0);
        assert_eq!(result.profit_analysis.gross_profit, 0.0);
    }

    #[test]
    fn test_price_recommendation_interpolates_values() {
        let result = calculate_profitability(10.0, 5.0, 2.9, 30.0).unwrap();
        assert!(result.recommendations[0].contains("$22.35"));
        assert!(result.recommendations[0].contains("30% margin"));
    }
}
