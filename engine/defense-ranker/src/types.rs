use crate::error::RankerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One team's position in a defense ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Team identity as it appeared in the snapshot
    pub team: String,
    /// Value allowed per game
    pub value: f64,
    /// 1 = allows the most (worst defense)
    pub rank: u32,
}

/// Ranked teams for one statistic, worst defense first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub statistic: String,
    pub entries: Vec<RankedEntry>,
}

impl Ranking {
    pub fn new(statistic: impl Into<String>, entries: Vec<RankedEntry>) -> Self {
        Self { statistic: statistic.into(), entries }
    }

    /// Number of ranked teams
    pub fn total_teams(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a team by exact name (case-insensitive)
    pub fn get(&self, team: &str) -> Option<&RankedEntry> {
        self.entries.iter().find(|entry| entry.team.eq_ignore_ascii_case(team))
    }

    /// Worst `limit` defenses
    pub fn top(&self, limit: usize) -> &[RankedEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }
}

/// How a composite ranking was built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompositeMethod {
    /// Average of raw values over available components, sorted descending
    AdditiveAverage,
    /// Weighted average of normalized ranks, sorted ascending
    WeightedNormalized,
}

/// One team's composite result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeEntry {
    pub team: String,
    pub score: f64,
    pub rank: u32,
    /// Requested statistics the team had no data for
    pub missing: Vec<String>,
}

impl CompositeEntry {
    /// "Missing: REB, AST" note for partially covered teams
    pub fn missing_note(&self) -> Option<String> {
        if self.missing.is_empty() {
            None
        } else {
            Some(format!("Missing: {}", self.missing.join(", ")))
        }
    }
}

/// Teams ranked on several statistics at once, worst defense first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeRanking {
    /// Name of the combination (e.g., "PRA" or "COMPREHENSIVE")
    pub statistic: String,
    pub method: CompositeMethod,
    /// Statistics that went into the composite, in canonical order
    pub components: Vec<String>,
    pub entries: Vec<CompositeEntry>,
}

impl CompositeRanking {
    pub fn total_teams(&self) -> u32 {
        self.entries.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// View the composite as a plain ranking, score standing in for value
    pub fn to_ranking(&self) -> Ranking {
        let entries = self
            .entries
            .iter()
            .map(|entry| RankedEntry { team: entry.team.clone(), value: entry.score, rank: entry.rank })
            .collect();
        Ranking::new(self.statistic.clone(), entries)
    }
}

/// Importance weight per statistic for the weighted composite
///
/// There is no built-in default: callers supply the weights explicitly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct CompositeWeightSpec {
    weights: BTreeMap<String, f64>,
}

impl CompositeWeightSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; statistic codes are upper-cased
    pub fn with(mut self, statistic: &str, weight: f64) -> Self {
        self.insert(statistic, weight);
        self
    }

    pub fn insert(&mut self, statistic: &str, weight: f64) {
        self.weights.insert(statistic.trim().to_uppercase(), weight);
    }

    pub fn weight(&self, statistic: &str) -> Option<f64> {
        self.weights.get(&statistic.trim().to_uppercase()).copied()
    }

    /// Statistics with their weights, in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(stat, weight)| (stat.as_str(), *weight))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Reject negative or non-finite weights and specs without any positive weight
    pub fn validate(&self) -> Result<(), RankerError> {
        for (statistic, weight) in &self.weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(RankerError::InvalidWeight {
                    statistic: statistic.clone(),
                    weight: *weight,
                });
            }
        }
        if !self.weights.values().any(|w| *w > 0.0) {
            return Err(RankerError::EmptyWeightSpec);
        }
        Ok(())
    }
}

impl From<BTreeMap<String, f64>> for CompositeWeightSpec {
    fn from(weights: BTreeMap<String, f64>) -> Self {
        weights.into_iter().collect()
    }
}

impl From<CompositeWeightSpec> for BTreeMap<String, f64> {
    fn from(spec: CompositeWeightSpec) -> Self {
        spec.weights
    }
}

impl FromIterator<(String, f64)> for CompositeWeightSpec {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut spec = Self::new();
        for (statistic, weight) in iter {
            spec.insert(&statistic, weight);
        }
        spec
    }
}
