//! Product analysis domain models.

use serde::{Deserialize, Serialize};

/// Product category inferred from the product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Jewelry,
    Clothing,
    #[serde(rename = "Home Decor")]
    HomeDecor,
    Electronics,
    Beauty,
    Fitness,
    General,
}

impl Category {
    /// Convert to display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jewelry => "Jewelry",
            Self::Clothing => "Clothing",
            Self::HomeDecor => "Home Decor",
            Self::Electronics => "Electronics",
            Self::Beauty => "Beauty",
            Self::Fitness => "Fitness",
            Self::General => "General",
        }
    }

    /// Typical abandoned cart rate (percent) observed for this category.
    pub fn abandoned_cart_rate(&self) -> i64 {
        match self {
            Self::Jewelry => 68,
            Self::Clothing => 72,
            Self::HomeDecor => 65,
            Self::Electronics => 70,
            Self::Beauty => 66,
            Self::Fitness => 69,
            Self::General => 70,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-step scale used for competition, seasonality and keyword difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-step quality scale for conversion factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    Poor,
    Medium,
    Good,
}

/// Signals extracted from the URL that affect conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionFactors {
    pub url_quality: Quality,
    pub product_name_clarity: Quality,
}

/// Everything the extractor could derive (or synthesize) for a product URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAnalysis {
    pub product_name: String,
    pub estimated_price: f64,
    pub category: Category,
    pub competition_level: Level,
    pub market_demand: i64,
    pub seasonality: Level,
    pub target_audience: String,
    pub conversion_factors: ConversionFactors,
}

impl ProductAnalysis {
    /// Fixed default analysis substituted when extraction fails.
    pub fn fallback() -> Self {
        Self {
            product_name: "Unknown Product".to_string(),
            estimated_price: 50.0,
            category: Category::General,
            competition_level: Level::Medium,
            market_demand: 75,
            seasonality: Level::Medium,
            target_audience: "General".to_string(),
            conversion_factors: ConversionFactors {
                url_quality: Quality::Medium,
                product_name_clarity: Quality::Medium,
            },
        }
    }
}
