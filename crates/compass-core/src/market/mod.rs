//! Mock market data provider.
//!
//! Static keyword and niche tables initialized once at process start,
//! plus randomized fallback generators for queries the tables miss.
//! The tables are read-only, so concurrent requests share them without
//! synchronization.

pub mod model;

use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::product::model::Level;
use model::{Grade, KeywordEntry, KeywordSearch, NicheProfile, PriceDistribution, TrendingNiche};

const RELATED_PREFIXES: &[&str] = &[
    "best",
    "cheap",
    "premium",
    "custom",
    "handmade",
    "eco-friendly",
    "sustainable",
];

const RELATED_SUFFIXES: &[&str] = &[
    "online",
    "store",
    "shop",
    "collection",
    "set",
    "kit",
    "bundle",
];

static KEYWORD_TABLE: LazyLock<Vec<KeywordEntry>> = LazyLock::new(|| {
    let seed: &[(&str, i64, i64, Level)] = &[
        ("sustainable jewelry", 85, 45, Level::Medium),
        ("minimalist home decor", 92, 78, Level::High),
        ("eco-friendly phone cases", 76, 32, Level::Low),
        ("handmade ceramic mugs", 68, 55, Level::Medium),
        ("vintage style watches", 89, 82, Level::High),
        ("organic skincare products", 94, 88, Level::High),
        ("custom pet portraits", 72, 28, Level::Low),
        ("yoga accessories", 81, 65, Level::Medium),
        ("artisan coffee beans", 77, 71, Level::Medium),
        ("smart home gadgets", 96, 91, Level::High),
    ];

    seed.iter()
        .map(|(keyword, demand, competition, difficulty)| KeywordEntry {
            keyword: (*keyword).to_string(),
            demand_score: *demand,
            competition_score: *competition,
            difficulty: *difficulty,
        })
        .collect()
});

static NICHE_TABLE: LazyLock<Vec<NicheProfile>> = LazyLock::new(|| {
    vec![
        NicheProfile {
            niche_name: "sustainable jewelry".to_string(),
            average_price: 45.99,
            price_distribution: PriceDistribution {
                under_20: 15,
                from_20_to_50: 45,
                from_50_to_100: 30,
                over_100: 10,
            },
            estimated_monthly_sales: 1250,
            popular_tags: to_tags(&["sustainable", "eco-friendly", "handmade", "recycled", "ethical"]),
            difficulty_score: Grade::B,
            market_size: "Growing".to_string(),
            seasonal_trends: "Stable year-round with peaks during holidays".to_string(),
        },
        NicheProfile {
            niche_name: "minimalist home decor".to_string(),
            average_price: 32.50,
            price_distribution: PriceDistribution {
                under_20: 25,
                from_20_to_50: 50,
                from_50_to_100: 20,
                over_100: 5,
            },
            estimated_monthly_sales: 2100,
            popular_tags: to_tags(&["minimalist", "modern", "clean", "simple", "scandinavian"]),
            difficulty_score: Grade::A,
            market_size: "Large and growing".to_string(),
            seasonal_trends: "Peak in spring and fall (home renovation seasons)".to_string(),
        },
        NicheProfile {
            niche_name: "eco-friendly phone cases".to_string(),
            average_price: 24.99,
            price_distribution: PriceDistribution {
                under_20: 35,
                from_20_to_50: 55,
                from_50_to_100: 10,
                over_100: 0,
            },
            estimated_monthly_sales: 890,
            popular_tags: to_tags(&[
                "eco-friendly",
                "biodegradable",
                "sustainable",
                "protective",
                "durable",
            ]),
            difficulty_score: Grade::C,
            market_size: "Medium but growing rapidly".to_string(),
            seasonal_trends: "Peaks during new phone releases".to_string(),
        },
    ]
});

static TRENDING_TABLE: LazyLock<Vec<TrendingNiche>> = LazyLock::new(|| {
    let seed: &[(&str, &str, i64, Level, &str)] = &[
        ("Sustainable Fashion", "+45%", 92, Level::Medium, "High"),
        ("Smart Home Accessories", "+38%", 89, Level::High, "Medium"),
        ("Pet Wellness Products", "+52%", 85, Level::Low, "Very High"),
        ("Minimalist Office Supplies", "+29%", 78, Level::Medium, "High"),
        ("Artisan Food Products", "+33%", 82, Level::Medium, "High"),
    ];

    seed.iter()
        .map(|(niche, growth, demand, competition, opportunity)| TrendingNiche {
            niche: (*niche).to_string(),
            growth_rate: (*growth).to_string(),
            demand_score: *demand,
            competition_level: *competition,
            opportunity_score: (*opportunity).to_string(),
        })
        .collect()
});

fn to_tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| (*t).to_string()).collect()
}

/// The static keyword table.
pub fn keyword_table() -> &'static [KeywordEntry] {
    &KEYWORD_TABLE
}

/// The fixed list of trending niches.
pub fn trending_niches() -> &'static [TrendingNiche] {
    &TRENDING_TABLE
}

/// Explore keywords related to a base query.
///
/// Table entries sharing a whitespace token with the query come first; when
/// nothing overlaps, a random sample of the table stands in. Three generated
/// related keywords are always appended, and the result is capped at 10 with
/// `total_found` counting matches before the cap.
pub fn explore_keywords(base_keyword: &str, rng: &mut impl Rng) -> KeywordSearch {
    let base = base_keyword.to_lowercase();
    let tokens: Vec<&str> = base.split_whitespace().collect();

    let mut relevant: Vec<KeywordEntry> = keyword_table()
        .iter()
        .filter(|entry| tokens.iter().any(|t| entry.keyword.contains(t)))
        .cloned()
        .collect();

    if relevant.is_empty() {
        relevant = keyword_table()
            .choose_multiple(rng, 5.min(keyword_table().len()))
            .cloned()
            .collect();
    }

    relevant.extend(generate_related_keywords(&base, rng));

    let total_found = relevant.len();
    relevant.truncate(10);

    KeywordSearch {
        related_keywords: relevant,
        total_found,
    }
}

/// Find the niche profile best matching a keyword.
///
/// Returns the first table entry whose name contains the query or shares a
/// whitespace token with it; misses fall back to a generated profile.
pub fn find_niche(keyword: &str, rng: &mut impl Rng) -> NicheProfile {
    let query = keyword.to_lowercase();
    let tokens: Vec<&str> = query.split_whitespace().collect();

    for profile in NICHE_TABLE.iter() {
        let key = profile.niche_name.as_str();
        if key.contains(query.as_str()) || tokens.iter().any(|t| key.contains(t)) {
            return profile.clone();
        }
    }

    tracing::debug!(keyword, "No static niche profile matched, generating mock data");
    generate_mock_niche_data(&query, rng)
}

/// Generate exactly 3 synthetic related keywords with randomized scores.
pub fn generate_related_keywords(base_keyword: &str, rng: &mut impl Rng) -> Vec<KeywordEntry> {
    (0..3)
        .map(|_| {
            let prefix = RELATED_PREFIXES.choose(rng).unwrap_or(&"best");
            let suffix = RELATED_SUFFIXES.choose(rng).unwrap_or(&"online");

            KeywordEntry {
                keyword: format!("{prefix} {base_keyword} {suffix}"),
                demand_score: rng.gen_range(60..=95),
                competition_score: rng.gen_range(20..=80),
                difficulty: *[Level::Low, Level::Medium, Level::High]
                    .choose(rng)
                    .unwrap_or(&Level::Medium),
            }
        })
        .collect()
}

/// Generate a fully populated niche profile for keywords the table misses.
pub fn generate_mock_niche_data(keyword: &str, rng: &mut impl Rng) -> NicheProfile {
    let first_token = keyword
        .split_whitespace()
        .next()
        .unwrap_or(keyword)
        .to_string();

    NicheProfile {
        niche_name: keyword.to_string(),
        average_price: round2(rng.gen_range(15.99..=89.99)),
        price_distribution: PriceDistribution {
            under_20: rng.gen_range(10..=40),
            from_20_to_50: rng.gen_range(30..=60),
            from_50_to_100: rng.gen_range(10..=30),
            over_100: rng.gen_range(0..=15),
        },
        estimated_monthly_sales: rng.gen_range(200..=3000),
        popular_tags: vec![
            first_token,
            "quality".to_string(),
            "affordable".to_string(),
            "trending".to_string(),
            "popular".to_string(),
        ],
        difficulty_score: *[Grade::A, Grade::B, Grade::C, Grade::D]
            .choose(rng)
            .unwrap_or(&Grade::B),
        market_size: (*["Small but growing", "Medium", "Large", "Very large"]
            .choose(rng)
            .unwrap_or(&"Medium"))
        .to_string(),
        seasonal_trends: "Data being analyzed - check back soon".to_string(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_jewelry_query_surfaces_static_entry() {
        let mut rng = StdRng::seed_from_u64(1);
        let search = explore_keywords("jewelry", &mut rng);

        assert!(search
            .related_keywords
            .iter()
            .any(|e| e.keyword == "sustainable jewelry"));
        assert!(search.related_keywords.len() <= 10);
        // one table match plus three generated
        assert_eq!(search.total_found, 4);
    }

    #[test]
    fn test_unmatched_query_falls_back_to_sample() {
        let mut rng = StdRng::seed_from_u64(1);
        let search = explore_keywords("xyzzy", &mut rng);

        // five sampled plus three generated
        assert_eq!(search.total_found, 8);
        assert!(search.related_keywords.len() <= 10);
    }

    #[test]
    fn test_static_niche_profile_is_exact() {
        let mut rng = StdRng::seed_from_u64(1);
        let profile = find_niche("minimalist home decor", &mut rng);

        assert_eq!(profile.niche_name, "minimalist home decor");
        assert_eq!(profile.average_price, 32.50);
        assert_eq!(profile.difficulty_score, Grade::A);
        assert_eq!(profile.estimated_monthly_sales, 2100);
    }

    #[test]
    fn test_token_overlap_matches_niche() {
        let mut rng = StdRng::seed_from_u64(1);
        let profile = find_niche("jewelry", &mut rng);
        assert_eq!(profile.niche_name, "sustainable jewelry");
    }

    #[test]
    fn test_niche_miss_generates_profile() {
        let mut rng = StdRng::seed_from_u64(2);
        let profile = find_niche("gaming chairs", &mut rng);

        assert_eq!(profile.niche_name, "gaming chairs");
        assert_eq!(profile.popular_tags[0], "gaming");
        assert!((15.99..=89.99).contains(&profile.average_price));
        assert!((200..=3000).contains(&profile.estimated_monthly_sales));
    }

    #[test]
    fn test_generated_keywords_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let related = generate_related_keywords("ceramic mugs", &mut rng);

        assert_eq!(related.len(), 3);
        for entry in &related {
            assert!(entry.keyword.contains("ceramic mugs"));
            assert!((60..=95).contains(&entry.demand_score));
            assert!((20..=80).contains(&entry.competition_score));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_related_keywords("candles", &mut StdRng::seed_from_u64(9));
        let b = generate_related_keywords("candles", &mut StdRng::seed_from_u64(9));
        assert_eq!(a[0].keyword, b[0].keyword);
        assert_eq!(a[0].demand_score, b[0].demand_score);
    }

    #[test]
    fn test_price_distribution_serde_keys() {
        let distribution = PriceDistribution {
            under_20: 15,
            from_20_to_50: 45,
            from_50_to_100: 30,
            over_100: 10,
        };
        let value = serde_json::to_value(&distribution).unwrap();
        assert_eq!(value["under_20"], 15);
        assert_eq!(value["20_50"], 45);
        assert_eq!(value["50_100"], 30);
        assert_eq!(value["over_100"], 10);
    }

    #[test]
    fn test_trending_list_is_fixed() {
        let trending = trending_niches();
        assert_eq!(trending.len(), 5);
        assert_eq!(trending[0].niche, "Sustainable Fashion");
        assert_eq!(trending[2].opportunity_score, "Very High");
    }
}
