//! Offline sales estimator command.

use anyhow::{bail, Result};
use clap::Args;
use rand::thread_rng;

use crate::output;

#[derive(Args)]
pub struct EstimateArgs {
    /// Storefront product URL to analyze
    pub url: String,
}

pub async fn execute(args: EstimateArgs) -> Result<()> {
    if !compass_core::product::is_valid_product_url(&args.url) {
        bail!("'{}' does not look like a storefront product URL", args.url);
    }

    let analysis = compass_core::product::analyze_product_url(&args.url, &mut thread_rng());
    let estimate = compass_core::estimate::estimate_sales(&analysis)?;
    let recommendations = compass_core::estimate::generate_recommendations(&analysis, &estimate);

    output::print_analysis(&analysis);
    output::print_estimate(&estimate);
    output::print_recommendations(&recommendations);

    Ok(())
}
