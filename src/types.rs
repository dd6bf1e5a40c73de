/// Core type definitions for the crossover reconciler
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single close-price bar at some resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// Crossover signal classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    None,
}

impl Signal {
    pub fn as_str(&self) -> &str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::None => "NONE",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Signal::None)
    }
}

/// Sampling granularity of a price series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Coarse,
    Fine,
}

impl Resolution {
    pub fn as_str(&self) -> &str {
        match self {
            Resolution::Coarse => "coarse",
            Resolution::Fine => "fine",
        }
    }
}

/// Configuration for a reconciliation run
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Instrument
    pub symbol: String,

    // Resolution codes as the upstream API expects them
    pub coarse_resolution: String,
    pub fine_resolution: String,

    // EMA Parameters
    pub fast_period: usize,
    pub slow_period: usize,
    pub seed_lookback: usize,

    // Analysis Window
    pub window_start: Option<String>,
    pub window_hours: i64,

    // Data Source
    pub api_base_url: String,

    // Display
    pub display_timezone: String,

    // Logging
    pub log_level: String,
}

impl Config {
    /// Hours of coarse history to fetch before the analysis window so the
    /// slow EMA is fully seeded by the time the window opens.
    pub fn lookback_hours(&self) -> i64 {
        self.seed_lookback as i64
    }
}
