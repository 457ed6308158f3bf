pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::cache::SnapshotCache;
use crate::core::config::AppConfig;

/// Commands the library can run; `main` maps clap subcommands onto this.
#[derive(Debug)]
pub enum AppCommand {
    Rates,
    Convert {
        amount: f64,
        from: String,
        to: String,
    },
    Forecast {
        days: Option<u32>,
        base_growth: Option<f64>,
        target_growth: Option<f64>,
        seed: Option<u64>,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Rate tracker starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    // One shared cache so every step in a command sees the same snapshot
    let cache = SnapshotCache::new();

    let base_url = config
        .providers
        .exchange_rate_api
        .as_ref()
        .map_or("https://api.exchangerate-api.com", |p| &p.base_url);
    let provider = providers::exchange_rate_api::ExchangeRateApiProvider::new(base_url, cache);

    match command {
        AppCommand::Rates => cli::rates::run(&provider, &config).await,
        AppCommand::Convert { amount, from, to } => {
            cli::convert::run(&provider, &config, amount, &from, &to).await
        }
        AppCommand::Forecast {
            days,
            base_growth,
            target_growth,
            seed,
        } => cli::forecast::run(&provider, &config, days, base_growth, target_growth, seed).await,
    }
}
