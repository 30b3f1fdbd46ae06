//! Sales estimation and recommendation generation.
//!
//! The scoring model is a weighted multiplicative heuristic over the
//! categorical factors of a [`ProductAnalysis`]. It is fully deterministic
//! given the analysis; all randomness lives in the extractor.

pub mod model;

use crate::error::{CompassError, CompassResult};
use crate::product::model::{Level, ProductAnalysis, Quality};
use model::{Recommendation, SalesEstimate};

const BASE_MONTHLY_SALES: f64 = 100.0;

/// Price bands are strict less-than, evaluated in ascending order.
fn price_factor(price: f64) -> f64 {
    if price < 25.0 {
        1.3
    } else if price < 50.0 {
        1.1
    } else if price < 100.0 {
        1.0
    } else {
        0.8
    }
}

fn competition_factor(level: Level) -> f64 {
    match level {
        Level::Low => 1.4,
        Level::Medium => 1.0,
        Level::High => 0.7,
    }
}

fn seasonality_factor(level: Level) -> f64 {
    match level {
        Level::High => 1.3,
        Level::Medium => 1.0,
        Level::Low => 0.8,
    }
}

/// Estimate monthly sales for an analyzed product.
///
/// Fails only when the category's abandoned cart rate would make the
/// cart-recovery projection divide by zero.
pub fn estimate_sales(analysis: &ProductAnalysis) -> CompassResult<SalesEstimate> {
    let price = analysis.estimated_price;
    let demand_factor = analysis.market_demand as f64 / 100.0;

    let estimated_monthly_sales = (BASE_MONTHLY_SALES
        * price_factor(price)
        * competition_factor(analysis.competition_level)
        * demand_factor
        * seasonality_factor(analysis.seasonality))
    .floor() as i64;
    let estimated_monthly_revenue = estimated_monthly_sales as f64 * price;

    let abandoned_cart_rate = analysis.category.abandoned_cart_rate();
    if abandoned_cart_rate >= 100 {
        return Err(CompassError::Computation(format!(
            "abandoned cart rate {abandoned_cart_rate}% leaves no completed checkouts"
        )));
    }
    let completion_rate = 1.0 - abandoned_cart_rate as f64 / 100.0;
    let potential_sales_with_cart_recovery =
        (estimated_monthly_sales as f64 / completion_rate).floor() as i64;
    let potential_additional_revenue =
        (potential_sales_with_cart_recovery - estimated_monthly_sales) as f64 * price;

    Ok(SalesEstimate {
        estimated_monthly_sales,
        estimated_monthly_revenue,
        abandoned_cart_rate,
        potential_sales_with_cart_recovery,
        potential_additional_revenue,
        confidence_level: confidence_level(analysis),
    })
}

/// Heuristic confidence in the estimate, clamped to [50, 95].
fn confidence_level(analysis: &ProductAnalysis) -> i64 {
    let mut confidence: i64 = 70;

    match analysis.competition_level {
        Level::Low => confidence += 10,
        Level::High => confidence -= 10,
        Level::Medium => {}
    }

    if analysis.market_demand > 85 {
        confidence += 10;
    } else if analysis.market_demand < 65 {
        confidence -= 10;
    }

    if analysis.conversion_factors.url_quality == Quality::Good {
        confidence += 5;
    }
    if analysis.conversion_factors.product_name_clarity == Quality::Good {
        confidence += 5;
    }

    confidence.clamp(50, 95)
}

/// Build actionable recommendations from an analysis and its estimate.
///
/// Gates are evaluated independently and in a fixed order; the result may be
/// empty and is never deduplicated.
pub fn generate_recommendations(
    analysis: &ProductAnalysis,
    estimate: &SalesEstimate,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if analysis.competition_level == Level::High {
        recommendations.push(Recommendation {
            kind: "Competition".to_string(),
            title: "High Competition Level".to_string(),
            description: "Focus on product differentiation and a strong unique selling proposition."
                .to_string(),
            action: "Analyze competitors and look for market gaps that are not yet filled."
                .to_string(),
        });
    }

    if estimate.abandoned_cart_rate > 70 {
        recommendations.push(Recommendation {
            kind: "Conversion".to_string(),
            title: "High Abandoned Cart Rate".to_string(),
            description: format!(
                "The {} category has an abandoned cart rate of {}%.",
                analysis.category, estimate.abandoned_cart_rate
            ),
            action: "Implement recovery emails, simplify checkout, and add trust signals."
                .to_string(),
        });
    }

    if analysis.estimated_price > 100.0 {
        recommendations.push(Recommendation {
            kind: "Pricing".to_string(),
            title: "High-Ticket Product".to_string(),
            description: "High-priced products require a different marketing strategy.".to_string(),
            action: "Focus on content quality, testimonials, and guarantees to build trust."
                .to_string(),
        });
    }

    if analysis.seasonality == Level::High {
        recommendations.push(Recommendation {
            kind: "Seasonality".to_string(),
            title: "Seasonal Product".to_string(),
            description: "This product sees strong demand swings across the year.".to_string(),
            action: "Plan inventory and marketing campaigns around the seasonal pattern."
                .to_string(),
        });
    }

    if estimate.confidence_level < 75 {
        recommendations.push(Recommendation {
            kind: "Data Quality".to_string(),
            title: "Improve Estimate Accuracy".to_string(),
            description: "The estimate can be improved with more complete data.".to_string(),
            action: "Run deeper market research and detailed competitor analysis.".to_string(),
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::model::{Category, ConversionFactors};

    fn analysis(
        price: f64,
        category: Category,
        competition: Level,
        demand: i64,
        seasonality: Level,
        url_quality: Quality,
        name_clarity: Quality,
    ) -> ProductAnalysis {
        ProductAnalysis {
            product_name: "Test Product".to_string(),
            estimated_price: price,
            category,
            competition_level: competition,
            market_demand: demand,
            seasonality,
            target_audience: "General Audience".to_string(),
            conversion_factors: ConversionFactors {
                url_quality,
                product_name_clarity: name_clarity,
            },
        }
    }

    #[test]
    fn test_price_factor_boundaries_are_strict() {
        assert_eq!(price_factor(24.99), 1.3);
        assert_eq!(price_factor(25.0), 1.1);
        assert_eq!(price_factor(49.99), 1.1);
        assert_eq!(price_factor(50.0), 1.0);
        assert_eq!(price_factor(99.99), 1.0);
        assert_eq!(price_factor(100.0), 0.8);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let a = analysis(
            20.0,
            Category::Jewelry,
            Level::Low,
            80,
            Level::High,
            Quality::Good,
            Quality::Good,
        );
        let estimate = estimate_sales(&a).unwrap();

        // 100 * 1.3 * 1.4 * 0.8 * 1.3 = 189.28 -> 189
        assert_eq!(estimate.estimated_monthly_sales, 189);
        assert_eq!(estimate.estimated_monthly_revenue, 3780.0);
        assert_eq!(estimate.abandoned_cart_rate, 68);
        // 189 / 0.32 = 590.625 -> 590
        assert_eq!(estimate.potential_sales_with_cart_recovery, 590);
        assert_eq!(estimate.potential_additional_revenue, 8020.0);
        // 70 + 10 (low competition) + 5 + 5 (good factors)
        assert_eq!(estimate.confidence_level, 90);
    }

    #[test]
    fn test_general_category_cart_rate_is_70() {
        let a = analysis(
            50.0,
            Category::General,
            Level::Medium,
            75,
            Level::Medium,
            Quality::Medium,
            Quality::Medium,
        );
        let estimate = estimate_sales(&a).unwrap();
        assert_eq!(estimate.abandoned_cart_rate, 70);
    }

    #[test]
    fn test_confidence_is_always_clamped() {
        for competition in [Level::Low, Level::Medium, Level::High] {
            for demand in [0, 60, 64, 65, 85, 86, 100] {
                for quality in [Quality::Poor, Quality::Medium, Quality::Good] {
                    let a = analysis(
                        50.0,
                        Category::General,
                        competition,
                        demand,
                        Level::Medium,
                        quality,
                        quality,
                    );
                    let confidence = confidence_level(&a);
                    assert!(
                        (50..=95).contains(&confidence),
                        "confidence {confidence} out of range"
                    );
                }
            }
        }
    }

    #[test]
    fn test_all_five_recommendations_fire_in_order() {
        let a = analysis(
            120.0,
            Category::Clothing,
            Level::High,
            75,
            Level::High,
            Quality::Medium,
            Quality::Medium,
        );
        let estimate = estimate_sales(&a).unwrap();
        assert!(estimate.abandoned_cart_rate > 70);
        assert!(estimate.confidence_level < 75);

        let recommendations = generate_recommendations(&a, &estimate);
        let kinds: Vec<&str> = recommendations.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(
            kinds,
            vec![
                "Competition",
                "Conversion",
                "Pricing",
                "Seasonality",
                "Data Quality"
            ]
        );
    }

    #[test]
    fn test_conversion_description_interpolates_category_and_rate() {
        let a = analysis(
            50.0,
            Category::Clothing,
            Level::Medium,
            75,
            Level::Medium,
            Quality::Medium,
            Quality::Medium,
        );
        let estimate = estimate_sales(&a).unwrap();
        let recommendations = generate_recommendations(&a, &estimate);
        let conversion = recommendations
            .iter()
            .find(|r| r.kind == "Conversion")
            .unwrap();
        assert!(conversion.description.contains("Clothing"));
        assert!(conversion.description.contains("72%"));
    }

    #[test]
    fn test_no_recommendations_when_nothing_fires() {
        let a = analysis(
            30.0,
            Category::Beauty,
            Level::Low,
            90,
            Level::Medium,
            Quality::Good,
            Quality::Good,
        );
        let estimate = estimate_sales(&a).unwrap();
        let recommendations = generate_recommendations(&a, &estimate);
        assert!(recommendations.is_empty());
    }
}
