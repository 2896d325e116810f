//! # DefenseRanker
//!
//! Turns per-team "allowed per game" values into defense rankings.
//!
//! Rank 1 is always the worst defense: the team that allows the most of a
//! statistic. Two composite variants combine several statistics:
//!
//! * [`additive_composite`] averages raw values over the components a team
//!   has data for, highest average first.
//! * [`weighted_composite`] averages normalized ranks by statistic weight,
//!   lowest score first.

pub mod composite;
pub mod error;
pub mod ranker;
pub mod types;

#[cfg(test)]
mod tests;

pub use composite::{additive_composite, weighted_composite};
pub use error::RankerError;
pub use ranker::{rank, rank_entries};
pub use types::{
    CompositeEntry, CompositeMethod, CompositeRanking, CompositeWeightSpec, RankedEntry, Ranking,
};
