//! Offline profitability calculator command.

use anyhow::Result;
use clap::Args;

use compass_core::profit::{DEFAULT_FEE_PERCENTAGE, DEFAULT_MARGIN_PERCENTAGE};

use crate::output;

#[derive(Args)]
pub struct ProfitArgs {
    /// Material cost per unit
    #[arg(long)]
    pub material_cost: f64,

    /// Shipping cost per unit
    #[arg(long)]
    pub shipping_cost: f64,

    /// Marketplace fee percentage
    #[arg(long, default_value_t = DEFAULT_FEE_PERCENTAGE)]
    pub fees: f64,

    /// Desired profit margin percentage
    #[arg(long, default_value_t = DEFAULT_MARGIN_PERCENTAGE)]
    pub margin: f64,
}

pub async fn execute(args: ProfitArgs) -> Result<()> {
    let result = compass_core::profit::calculate_profitability(
        args.material_cost,
        args.shipping_cost,
        args.fees,
        args.margin,
    )?;

    output::print_profitability(&result);

    Ok(())
}
