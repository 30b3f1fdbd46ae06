//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Directory holding the bundled frontend
    #[arg(long, default_value = "static")]
    pub static_dir: PathBuf,

    /// Redis URL for the health-checked database handle
    #[arg(long, env = "REDIS_URL", default_value = "redis://127.0.0.1:6379")]
    pub redis_url: String,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let db = match compass_db::init_pool(&args.redis_url).await {
        Ok(pool) => {
            tracing::info!("Database connection initialized");
            Some(pool)
        }
        Err(e) => {
            tracing::warn!("Failed to initialize database: {e}");
            tracing::info!("Running in development mode without database");
            None
        }
    };

    println!();
    println!("  {} {}", "Niche Compass".cyan().bold(), "API Server".bold());
    println!();
    println!("  {}       http://{}:{}/api", "API".green(), args.host, args.port);
    println!(
        "  {}  {}",
        "Frontend".green(),
        args.static_dir.display()
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    compass_web::run_server(db, args.static_dir, &args.host, args.port).await?;

    Ok(())
}
