/// Main entry point for the crossover reconciler
use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use tracing::{info, warn};

use emacross::{
    config::load_config,
    data::PriceSeries,
    market::MarketClient,
    report,
    strategy::reconcile,
    utils::{floor_to_hour, lookback_start},
    Config, Resolution,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path))?;

    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.clone())
        .init();

    info!("Starting crossover reconciliation for {}", config.symbol);

    run(&config).await
}

async fn run(config: &Config) -> anyhow::Result<()> {
    let now = Utc::now();
    let window_start = resolve_window_start(config, now)?;
    let fetch_start = lookback_start(window_start, config.lookback_hours());

    info!(
        window_start = %window_start,
        fetch_start = %fetch_start,
        "Analysis window resolved"
    );

    // Both series must be fully materialized before the core runs
    let client = MarketClient::new(config.api_base_url.clone());

    let coarse_bars = client
        .get_candles(&config.symbol, &config.coarse_resolution, fetch_start, now)
        .await?;
    info!("Fetched {} coarse bars", coarse_bars.len());

    let fine_bars = client
        .get_candles(&config.symbol, &config.fine_resolution, fetch_start, now)
        .await?;
    info!("Fetched {} fine bars", fine_bars.len());

    let coarse = PriceSeries::new(&config.symbol, Resolution::Coarse, coarse_bars);
    let fine = PriceSeries::new(&config.symbol, Resolution::Fine, fine_bars);

    let start_index = match coarse.first_at_or_after(window_start) {
        Some(idx) => idx,
        None => {
            warn!("No coarse bars at or after window start - nothing to reconcile");
            return Ok(());
        }
    };

    let result = reconcile(
        &coarse,
        &fine,
        start_index,
        config.fast_period,
        config.slow_period,
    )?;
    info!("Reconciled {} coarse intervals", result.rows.len());

    let tz: Tz = config
        .display_timezone
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid display timezone: {}", e))?;

    print!("{}", report::render(&result.rows, tz));
    println!("✅ Done.");

    Ok(())
}

/// Explicit RFC3339 start from config, or `window_hours` back from now;
/// either way truncated down to the hour so rows align with coarse bars.
fn resolve_window_start(config: &Config, now: DateTime<Utc>) -> anyhow::Result<DateTime<Utc>> {
    let start = match &config.window_start {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("Invalid window_start: {}", raw))?
            .with_timezone(&Utc),
        None => now - Duration::hours(config.window_hours),
    };
    Ok(floor_to_hour(start))
}
