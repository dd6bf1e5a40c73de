pub mod types;
pub mod error;
pub mod config;
pub mod data;
pub mod market;
pub mod strategy;
pub mod report;
pub mod utils;

pub use error::{Result, SignalError};
pub use types::*;
