use serde::{Deserialize, Serialize};
use std::fmt;

/// One team's allowed-per-game value for a single statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStatEntry {
    /// Team identity as scraped (e.g., "Jazz", "Utah Jazz")
    pub team: String,
    /// Value allowed per game (e.g., 121.2 opponent points)
    pub value: f64,
}

impl TeamStatEntry {
    pub fn new(team: impl Into<String>, value: f64) -> Self {
        Self { team: team.into(), value }
    }
}

/// All team entries fetched for one statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    /// Statistic code (e.g., "PTS", "REB")
    pub statistic: String,
    /// Entries in the order the source listed them
    pub entries: Vec<TeamStatEntry>,
}

impl TeamSnapshot {
    /// Create a snapshot; the statistic code is upper-cased
    pub fn new(statistic: impl Into<String>, entries: Vec<TeamStatEntry>) -> Self {
        Self { statistic: statistic.into().to_uppercase(), entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Soft warning: a component of a combined statistic had no usable value
///
/// Attached to results rather than raised as an error. `subject` is the game
/// date for game-log series and the team name for composite rankings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingComponent {
    pub subject: String,
    pub components: Vec<String>,
}

impl fmt::Display for MissingComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Missing: {}", self.subject, self.components.join(", "))
    }
}
