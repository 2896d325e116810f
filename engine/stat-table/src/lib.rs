//! Stat Table - Normalized game logs and team statistic snapshots
//!
//! This crate holds the tabular inputs the analytics core works on: a
//! player's game log (header row plus one record per game) and the
//! per-team "allowed per game" values fetched for a single statistic.

pub mod error;
pub mod game_log;
pub mod selector;
pub mod types;

pub use error::StatTableError;
pub use game_log::{GameLog, GameRecord, StatSeries};
pub use selector::{
    CombinedCatalog, Sport, StatSelector, BASKETBALL_COMBINED_STATS, FOOTBALL_COMBINED_STATS, HOCKEY_COMBINED_STATS,
};
pub use types::{MissingComponent, TeamSnapshot, TeamStatEntry};

/// Column holding the game date (`%m/%d/%Y`)
pub const DATE_COLUMN: &str = "DATE";

/// Column holding the player's team code
pub const TEAM_COLUMN: &str = "TM";

/// Column holding the opponent identifier
pub const OPPONENT_COLUMN: &str = "OPP";

/// Date format used by the game log source
pub const DATE_FORMAT: &str = "%m/%d/%Y";
