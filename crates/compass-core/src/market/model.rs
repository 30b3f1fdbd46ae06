//! Market research domain models.

use serde::{Deserialize, Serialize};

use crate::product::model::Level;

/// A keyword with demand/competition scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub demand_score: i64,
    pub competition_score: i64,
    pub difficulty: Level,
}

/// Result of a keyword exploration: the capped entry list plus the count
/// of matches before capping.
#[derive(Debug, Clone)]
pub struct KeywordSearch {
    pub related_keywords: Vec<KeywordEntry>,
    pub total_found: usize,
}

/// Letter grade for niche difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

/// Share of listings in each of the four fixed price bands.
///
/// Percentages are not normalized; they need not sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceDistribution {
    pub under_20: i64,
    #[serde(rename = "20_50")]
    pub from_20_to_50: i64,
    #[serde(rename = "50_100")]
    pub from_50_to_100: i64,
    pub over_100: i64,
}

/// Full profile for a niche.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NicheProfile {
    pub niche_name: String,
    pub average_price: f64,
    pub price_distribution: PriceDistribution,
    pub estimated_monthly_sales: i64,
    pub popular_tags: Vec<String>,
    pub difficulty_score: Grade,
    pub market_size: String,
    pub seasonal_trends: String,
}

/// A trending niche summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingNiche {
    pub niche: String,
    pub growth_rate: String,
    pub demand_score: i64,
    pub competition_level: Level,
    pub opportunity_score: String,
}
