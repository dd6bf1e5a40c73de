/// Centralized error types for the crossover reconciler
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalError {
    // Data Errors
    #[error("Insufficient data: need at least {required} closes to seed EMA, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Data source error: {0}")]
    DataSource(String),

    // Network Errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),

    // Configuration Errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, SignalError>;

impl SignalError {
    /// True when the failure came from the upstream market-data source rather
    /// than from this process's own inputs.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            SignalError::DataSource(_) | SignalError::Http(_) | SignalError::Deserialization(_)
        )
    }

    /// Short code for logging/monitoring
    pub fn error_code(&self) -> &str {
        match self {
            SignalError::InsufficientData { .. } => "DATA_001",
            SignalError::DataSource(_) => "DATA_002",
            SignalError::Http(_) => "NET_001",
            SignalError::Deserialization(_) => "NET_002",
            SignalError::Config(_) => "CFG_001",
            SignalError::InvalidParameter(_) => "CFG_002",
        }
    }
}
