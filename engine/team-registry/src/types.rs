use crate::LEAGUE_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an opponent identifier was matched to a ranked team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchKind {
    /// One name contains the other
    Substring,
    /// Identifier is a known team code for the candidate
    Abbreviation,
    /// A word of one name appears in the other
    TokenOverlap,
}

/// Matchup difficulty for the player, from the opponent's defensive rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Opponent could not be resolved
    Unknown,
}

impl Difficulty {
    /// Grade a rank percentage (rank / total * 100)
    pub fn from_rank_percentage(percentage: f64) -> Self {
        if percentage <= 33.0 {
            Difficulty::Easy
        } else if percentage <= 66.0 {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }

    /// Display color used by the dashboards
    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::Easy => "green",
            Difficulty::Medium => "orange",
            Difficulty::Hard => "red",
            Difficulty::Unknown => "white",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

/// Coarse description of where a defense sits in the league
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefenseOutlook {
    /// Top five in allowing the statistic
    AmongWorst,
    /// Ranks 6 through 10
    BottomTen,
    Average,
    /// Rank 25 or later
    AmongBest,
}

impl DefenseOutlook {
    pub fn from_rank(rank: u32) -> Self {
        match rank {
            0..=5 => DefenseOutlook::AmongWorst,
            6..=10 => DefenseOutlook::BottomTen,
            25.. => DefenseOutlook::AmongBest,
            _ => DefenseOutlook::Average,
        }
    }

    /// Human readable sentence for a team and statistic
    pub fn describe(&self, team: &str, statistic: &str) -> String {
        match self {
            DefenseOutlook::AmongWorst => format!("{team} is among the WORST {statistic} defenses"),
            DefenseOutlook::BottomTen => format!("{team} is in the bottom 10 for {statistic} defense"),
            DefenseOutlook::Average => format!("{team} has average {statistic} defense"),
            DefenseOutlook::AmongBest => format!("{team} is among the BEST {statistic} defenses"),
        }
    }
}

/// Defensive profile of one opponent for one statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenseAnalysis {
    /// Resolved team name, or the raw identifier when unresolved
    pub opponent: String,
    pub statistic: String,
    /// 1 = allows the most
    pub rank: u32,
    pub total_teams: u32,
    /// Per-game value the opponent allows (0 when unresolved)
    pub value_allowed: f64,
    pub difficulty: Difficulty,
    pub difficulty_color: String,
    pub rank_percentage: f64,
    /// False when the fallback mid-table record was produced
    pub resolved: bool,
    pub matched_by: Option<MatchKind>,
    pub outlook: Option<DefenseOutlook>,
}

impl DefenseAnalysis {
    /// Analysis for a matched team
    pub fn resolved(
        opponent: String,
        statistic: String,
        rank: u32,
        total_teams: u32,
        value_allowed: f64,
        matched_by: MatchKind,
    ) -> Self {
        let rank_percentage =
            if total_teams > 0 { rank as f64 / total_teams as f64 * 100.0 } else { 0.0 };
        let difficulty = Difficulty::from_rank_percentage(rank_percentage);

        Self {
            opponent,
            statistic,
            rank,
            total_teams,
            value_allowed,
            difficulty,
            difficulty_color: difficulty.color().to_string(),
            rank_percentage,
            resolved: true,
            matched_by: Some(matched_by),
            outlook: Some(DefenseOutlook::from_rank(rank)),
        }
    }

    /// Fallback when no team matched: middle rank, unknown difficulty
    pub fn unresolved(identifier: String, statistic: String, total_teams: u32) -> Self {
        Self {
            opponent: identifier,
            statistic,
            rank: total_teams.div_ceil(2).max(1),
            total_teams,
            value_allowed: 0.0,
            difficulty: Difficulty::Unknown,
            difficulty_color: Difficulty::Unknown.color().to_string(),
            rank_percentage: 50.0,
            resolved: false,
            matched_by: None,
            outlook: None,
        }
    }

    /// Note shown when the ranking covered fewer teams than the league has
    pub fn coverage_note(&self) -> Option<String> {
        (self.total_teams < LEAGUE_SIZE)
            .then(|| format!("{}/{} teams found", self.total_teams, LEAGUE_SIZE))
    }

    pub fn outlook_text(&self) -> Option<String> {
        self.outlook.map(|outlook| outlook.describe(&self.opponent, &self.statistic))
    }
}
