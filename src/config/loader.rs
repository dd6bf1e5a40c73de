/// Configuration loading from TOML file
use std::path::Path;

use crate::error::{Result, SignalError};
use crate::types::Config;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SignalError::Config(format!("Failed to read config file: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| SignalError::Config(format!("Failed to parse config: {}", e)))?;

    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    if config.symbol.is_empty() {
        return Err(SignalError::Config("symbol is empty".to_string()));
    }

    if config.coarse_resolution.is_empty() || config.fine_resolution.is_empty() {
        return Err(SignalError::Config(
            "resolution codes must not be empty".to_string(),
        ));
    }

    // Validate EMA periods
    if config.fast_period < 1 || config.slow_period < 1 {
        return Err(SignalError::Config("EMA periods must be >= 1".to_string()));
    }

    if config.fast_period >= config.slow_period {
        return Err(SignalError::Config(format!(
            "fast_period ({}) must be < slow_period ({})",
            config.fast_period, config.slow_period
        )));
    }

    // The seed lookback must cover the slow EMA seed
    if config.seed_lookback < config.slow_period {
        return Err(SignalError::Config(format!(
            "seed_lookback ({}) must be >= slow_period ({})",
            config.seed_lookback, config.slow_period
        )));
    }

    if config.window_hours <= 0 && config.window_start.is_none() {
        return Err(SignalError::Config(
            "window_hours must be > 0 when window_start is not set".to_string(),
        ));
    }

    // Validate display timezone
    if config.display_timezone.parse::<chrono_tz::Tz>().is_err() {
        return Err(SignalError::Config(format!(
            "Unknown display_timezone: {}",
            config.display_timezone
        )));
    }

    Ok(())
}
