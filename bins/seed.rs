//! Populate an empty singer collection with the example records.
//! Running it against a non-empty collection changes nothing.

use dotenvy::dotenv;
use tracing::{error, info};

use configs::AppConfig;
use service::seed::{default_singers, seed_if_empty, SeedOutcome};
use service::singers::repo::mongo::MongoSingerRepository;

async fn run(cfg: AppConfig) -> anyhow::Result<SeedOutcome> {
    let store = models::db::connect_with_config(&cfg.database).await?;
    let repo = MongoSingerRepository::new(&store);
    let outcome = seed_if_empty(&repo, default_singers()).await;
    store.shutdown().await;
    Ok(outcome?)
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    let cfg = match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(service = "seed", event = "config_invalid", error = %e, "invalid configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    common::utils::logging::init_logging_named(&cfg.log.format);

    match run(cfg).await {
        Ok(SeedOutcome::Seeded(n)) => {
            info!(service = "seed", inserted = n, "Database initialized successfully with singers and songs.");
            std::process::ExitCode::SUCCESS
        }
        Ok(SeedOutcome::AlreadyInitialized(n)) => {
            info!(service = "seed", existing = n, "Database already initialized.");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "seed", event = "seed_failed", error = %e, "seeding failed");
            std::process::ExitCode::FAILURE
        }
    }
}
