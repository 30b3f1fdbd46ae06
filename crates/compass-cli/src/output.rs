//! Terminal output formatting.

use colored::Colorize;
use compass_core::estimate::model::{Recommendation, SalesEstimate};
use compass_core::product::model::ProductAnalysis;
use compass_core::profit::model::ProfitabilityResult;

/// Print a product analysis.
pub fn print_analysis(analysis: &ProductAnalysis) {
    println!();
    println!("{}", analysis.product_name.cyan().bold());
    println!();
    println!("{}:           ${:.2}", "Price".bold(), analysis.estimated_price);
    println!("{}:        {}", "Category".bold(), analysis.category);
    println!("{}:     {}", "Competition".bold(), analysis.competition_level);
    println!("{}:   {}/100", "Market demand".bold(), analysis.market_demand);
    println!("{}:     {}", "Seasonality".bold(), analysis.seasonality);
    println!("{}:        {}", "Audience".bold(), analysis.target_audience);
}

/// Print a sales estimate.
pub fn print_estimate(estimate: &SalesEstimate) {
    println!();
    println!("{}", "Sales Estimate".bold());
    println!(
        "  {} {} units/month",
        "Estimated sales".dimmed(),
        estimate.estimated_monthly_sales.to_string().green().bold()
    );
    println!(
        "  {} ${:.2}/month",
        "Estimated revenue".dimmed(),
        estimate.estimated_monthly_revenue
    );
    println!(
        "  {} {}%",
        "Abandoned cart rate".dimmed(),
        estimate.abandoned_cart_rate
    );
    println!(
        "  {} {} units (+${:.2})",
        "With cart recovery".dimmed(),
        estimate.potential_sales_with_cart_recovery,
        estimate.potential_additional_revenue
    );
    println!(
        "  {} {}%",
        "Confidence".dimmed(),
        estimate.confidence_level.to_string().yellow()
    );
}

/// Print recommendations.
pub fn print_recommendations(recommendations: &[Recommendation]) {
    println!();
    if recommendations.is_empty() {
        println!("{}", "No recommendations - looks solid.".dimmed());
        return;
    }

    println!("{}", "Recommendations".bold());
    for recommendation in recommendations {
        println!(
            "  {} {} {}",
            "●".cyan(),
            recommendation.title.bold(),
            format!("({})", recommendation.kind).dimmed()
        );
        println!("    {}", recommendation.description);
        println!("    {} {}", "→".dimmed(), recommendation.action.dimmed());
    }
}

/// Print a profitability calculation.
pub fn print_profitability(result: &ProfitabilityResult) {
    println!();
    println!(
        "{}: {}",
        "Recommended selling price".bold(),
        format!("${:.2}", result.recommended_selling_price)
            .green()
            .bold()
    );
    println!();
    println!("{}", "Cost Breakdown".bold());
    println!("  Material   ${:.2}", result.cost_breakdown.material_cost);
    println!("  Shipping   ${:.2}", result.cost_breakdown.shipping_cost);
    println!("  Fees       ${:.2}", result.cost_breakdown.shopify_fees);
    println!("  Total      ${:.2}", result.cost_breakdown.total_costs);
    println!();
    println!("{}", "Profit Analysis".bold());
    println!("  Gross profit   ${:.2}", result.profit_analysis.gross_profit);
    println!(
        "  Margin         {}%",
        result.profit_analysis.profit_margin_percentage
    );
    println!(
        "  Break-even     {} unit(s)",
        result.profit_analysis.break_even_units
    );

    if !result.recommendations.is_empty() {
        println!();
        for line in &result.recommendations {
            println!("  {} {}", "·".dimmed(), line.dimmed());
        }
    }
}
