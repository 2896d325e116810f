//! Error types for PropEngine

use defense_ranker::RankerError;
use stat_table::StatTableError;
use thiserror::Error;

/// Errors that can occur while projecting and evaluating a prop
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropError {
    #[error("Insufficient data: {available} games available, {required} required")]
    InsufficientData { available: usize, required: usize },

    #[error("No ranking data for statistic {statistic}")]
    NoDataForStatistic { statistic: String },

    #[error("Standard deviation is degenerate ({std_dev}) over {sample_size} games")]
    DegenerateVariance { std_dev: f64, sample_size: usize },

    #[error("Window must cover at least one game, got {0}")]
    InvalidWindow(usize),

    #[error("Projection line must be a finite number, got {0}")]
    InvalidLine(f64),

    #[error("Table error: {0}")]
    Table(#[from] StatTableError),

    #[error("Ranking error: {0}")]
    Ranker(#[from] RankerError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while loading or validating configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
