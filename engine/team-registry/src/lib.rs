//! Team Registry - Maps opponent identifiers to ranked teams
//!
//! Game logs name opponents by abbreviation ("UTA"), nickname ("Jazz") or
//! full name ("Utah Jazz"), while defense tables use whatever the source
//! printed. This crate resolves one against the other and grades the
//! resulting matchup.

pub mod abbreviations;
pub mod names;
pub mod resolver;
pub mod types;

pub use names::{canonical_nickname, clean_team_name};
pub use resolver::TeamResolver;
pub use types::{DefenseAnalysis, DefenseOutlook, Difficulty, MatchKind};

/// Number of franchises in the league
pub const LEAGUE_SIZE: u32 = 30;
