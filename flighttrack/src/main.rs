use anyhow::{Context, Result};

use flighttrack::config::AppConfig;
use flighttrack::flights::{FlightFetcher, map_flights};
use flighttrack::logging;

fn main() -> Result<()> {
    // Load configuration (path may be given as the first argument)
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path))?;

    logging::init_logging(&config.log_level);

    tracing::info!(
        "Fetching flights from {} (limit={}, offset={})",
        config.endpoint,
        config.limit,
        config.offset
    );

    let fetcher = FlightFetcher::with_endpoint(&config.endpoint)
        .context("Failed to build flights client")?;
    let raw_records = fetcher
        .fetch(&config.api_key, config.limit, config.offset)
        .context("Failed to fetch flights")?;

    tracing::info!("Fetched {} airborne records", raw_records.len());

    let flights = map_flights(&raw_records);
    tracing::info!("Mapped {} flights", flights.len());

    for flight in &flights {
        println!("{}", flight);
    }

    Ok(())
}
