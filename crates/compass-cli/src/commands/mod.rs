//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod estimate;
pub mod profit;
pub mod serve;

/// Niche Compass - E-commerce Market Research
#[derive(Parser)]
#[command(name = "compass")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the API and frontend server
    Serve(serve::ServeArgs),

    /// Estimate monthly sales for a product URL
    Estimate(estimate::EstimateArgs),

    /// Calculate a recommended selling price from cost inputs
    Profit(profit::ProfitArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Estimate(args) => estimate::execute(args).await,
            Commands::Profit(args) => profit::execute(args).await,
        }
    }
}
