use std::path::PathBuf;
use std::process;

use agency_seed::config::{SeedConfig, DEFAULT_ENV_FILE};
use agency_seed::content::SeedPlan;
use agency_seed::seed;
use agency_seed::store::RestStore;
use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("Seeding failed: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let env_file = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE));

    // Config errors end the run here, before any client is built
    let config = SeedConfig::load(&env_file)
        .with_context(|| format!("invalid seed configuration in {}", env_file.display()))?;
    info!(host = config.database_url.host_str().unwrap_or_default(), "Seeding content store");

    let plan = SeedPlan::standard().context("failed to serialize seed rows")?;
    let store = RestStore::new(&config);
    let report = seed::run(&store, &plan).await?;

    info!("Upserted {} rows across {} tables", report.rows, report.tables.len());
    Ok(())
}
