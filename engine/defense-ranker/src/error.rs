//! Error types for DefenseRanker

use thiserror::Error;

/// Errors that can occur while building composite rankings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankerError {
    #[error("Weight for {statistic} must be a non-negative number, got {weight}")]
    InvalidWeight { statistic: String, weight: f64 },

    #[error("Composite weight spec has no positive weights")]
    EmptyWeightSpec,
}
