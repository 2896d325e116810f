//! Statistic selectors and the per-league combined-statistic catalogs

use crate::error::StatTableError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Combined-statistic catalog: name and component columns
pub type CombinedCatalog = &'static [(&'static str, &'static [&'static str])];

/// Basketball combined statistics (NBA and WNBA)
pub const BASKETBALL_COMBINED_STATS: CombinedCatalog = &[
    ("PRA", &["PTS", "REB", "AST"]),
    ("PR", &["PTS", "REB"]),
    ("PA", &["PTS", "AST"]),
    ("RA", &["REB", "AST"]),
    ("PRA+", &["PTS", "REB", "AST", "FGM"]),
    ("SHOOTING", &["FGM", "3PM", "FTM"]),
];

/// Football combined statistics (yardage totals)
pub const FOOTBALL_COMBINED_STATS: CombinedCatalog = &[
    ("PRA", &["PASS_YDS", "RUSH_YDS", "REC_YDS"]),
    ("PR", &["PASS_YDS", "RUSH_YDS"]),
    ("PA", &["PASS_YDS", "REC_YDS"]),
];

/// Hockey combined statistics
pub const HOCKEY_COMBINED_STATS: CombinedCatalog = &[
    ("PRA", &["GOALS", "ASSISTS", "POINTS"]),
    ("PA", &["GOALS", "ASSISTS"]),
];

/// League whose column names and combined statistics apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sport {
    #[default]
    Nba,
    Wnba,
    Nfl,
    Nhl,
}

impl Sport {
    pub fn combined_stats(self) -> CombinedCatalog {
        match self {
            Sport::Nba | Sport::Wnba => BASKETBALL_COMBINED_STATS,
            Sport::Nfl => FOOTBALL_COMBINED_STATS,
            Sport::Nhl => HOCKEY_COMBINED_STATS,
        }
    }

    /// Names in this league's combined catalog
    pub fn combined_names(self) -> Vec<&'static str> {
        self.combined_stats().iter().map(|(name, _)| *name).collect()
    }
}

impl FromStr for Sport {
    type Err = StatTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NBA" => Ok(Sport::Nba),
            "WNBA" => Ok(Sport::Wnba),
            "NFL" => Ok(Sport::Nfl),
            "NHL" => Ok(Sport::Nhl),
            _ => Err(StatTableError::UnknownSport(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sport::Nba => "NBA",
            Sport::Wnba => "WNBA",
            Sport::Nfl => "NFL",
            Sport::Nhl => "NHL",
        };
        f.write_str(name)
    }
}

/// Which statistic a projection or ranking is about
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatSelector {
    /// A single game-log column (e.g., "PTS")
    Single(String),
    /// Sum of several columns (e.g., "PRA" = PTS + REB + AST)
    Combined { name: String, components: Vec<String> },
}

impl StatSelector {
    /// Parse a statistic name against the basketball catalog
    pub fn parse(input: &str) -> Self {
        Self::parse_for(input, Sport::default())
    }

    /// Parse a statistic name against a league's catalog
    ///
    /// Catalog names (`PRA`, `PR`, ...) and `+`-joined lists (`PTS+REB`)
    /// become [`StatSelector::Combined`]; anything else is a single column.
    pub fn parse_for(input: &str, sport: Sport) -> Self {
        let name = input.trim().to_uppercase();

        if let Some((_, components)) = sport.combined_stats().iter().find(|(n, _)| *n == name) {
            return StatSelector::Combined {
                name,
                components: components.iter().map(|c| c.to_string()).collect(),
            };
        }

        let parts: Vec<String> = name
            .split('+')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();
        if parts.len() >= 2 {
            return StatSelector::Combined { name: parts.join("+"), components: parts };
        }

        StatSelector::Single(name)
    }

    /// Display name of the statistic
    pub fn name(&self) -> &str {
        match self {
            StatSelector::Single(name) => name,
            StatSelector::Combined { name, .. } => name,
        }
    }

    /// Columns this statistic is built from (a single stat is its own component)
    pub fn components(&self) -> Vec<&str> {
        match self {
            StatSelector::Single(name) => vec![name.as_str()],
            StatSelector::Combined { components, .. } => {
                components.iter().map(String::as_str).collect()
            }
        }
    }

    pub fn is_combined(&self) -> bool {
        matches!(self, StatSelector::Combined { .. })
    }
}

impl FromStr for StatSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StatSelector::parse(s))
    }
}

impl fmt::Display for StatSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatSelector::Single(name) => write!(f, "{name}"),
            StatSelector::Combined { name, components } => {
                write!(f, "{name} ({})", components.join(" + "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup_is_case_insensitive() {
        let selector = StatSelector::parse("pra");
        assert!(selector.is_combined());
        assert_eq!(selector.name(), "PRA");
        assert_eq!(selector.components(), vec!["PTS", "REB", "AST"]);

        let plus = StatSelector::parse("PRA+");
        assert_eq!(plus.components(), vec!["PTS", "REB", "AST", "FGM"]);
    }

    #[test]
    fn test_plus_joined_combination() {
        let selector = StatSelector::parse("pts + reb");
        assert_eq!(
            selector,
            StatSelector::Combined {
                name: "PTS+REB".to_string(),
                components: vec!["PTS".to_string(), "REB".to_string()],
            }
        );
    }

    #[test]
    fn test_single_statistic() {
        let selector: StatSelector = " 3pm ".parse().unwrap();
        assert_eq!(selector, StatSelector::Single("3PM".to_string()));
        assert_eq!(selector.components(), vec!["3PM"]);
        assert_eq!(selector.to_string(), "3PM");
    }

    #[test]
    fn test_combined_names_follow_sport() {
        let nfl = StatSelector::parse_for("pra", Sport::Nfl);
        assert_eq!(nfl.components(), vec!["PASS_YDS", "RUSH_YDS", "REC_YDS"]);

        let nhl = StatSelector::parse_for("PRA", Sport::Nhl);
        assert_eq!(nhl.components(), vec!["GOALS", "ASSISTS", "POINTS"]);

        let wnba = StatSelector::parse_for("RA", Sport::Wnba);
        assert_eq!(wnba.components(), vec!["REB", "AST"]);

        // RA is not a hockey combination
        assert_eq!(StatSelector::parse_for("RA", Sport::Nhl), StatSelector::Single("RA".to_string()));
        assert!(StatSelector::parse_for("SHOTS+HITS", Sport::Nhl).is_combined());
    }

    #[test]
    fn test_sport_parsing() {
        assert_eq!("nfl".parse::<Sport>().unwrap(), Sport::Nfl);
        assert_eq!(Sport::Wnba.to_string(), "WNBA");
        assert_eq!(Sport::default(), Sport::Nba);
        assert!(matches!("MLB".parse::<Sport>(), Err(StatTableError::UnknownSport(_))));
        assert_eq!(Sport::Nhl.combined_names(), vec!["PRA", "PA"]);
    }
}
