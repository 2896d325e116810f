//! Prop Engine
//!
//! Projects a player's statistic from their game log, turns the projection
//! and a sportsbook line into a hit probability with a normal approximation,
//! and grades the opponent's defense for the same statistic.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod probability;
pub mod projector;
pub mod recommendation;

#[cfg(test)]
mod tests;

pub use config::PropConfig;
pub use engine::PropEngine;
pub use error::{ConfigError, PropError};
pub use models::*;
pub use probability::ProbabilityModel;
pub use recommendation::RecommendationThresholds;
