use serde::{Deserialize, Serialize};
use stat_table::{MissingComponent, StatSelector};
use std::fmt;
use std::str::FromStr;
use team_registry::DefenseAnalysis;

/// How the central estimate is computed from recent games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectionMethod {
    /// Arithmetic mean over the window
    #[default]
    #[serde(rename = "mean")]
    Mean,
    /// Linearly decaying weights, most recent game heaviest
    #[serde(rename = "wma", alias = "weighted_moving_average")]
    WeightedMovingAverage,
}

impl FromStr for ProjectionMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mean" | "average" => Ok(ProjectionMethod::Mean),
            "wma" | "weighted" | "weighted_moving_average" => Ok(ProjectionMethod::WeightedMovingAverage),
            other => Err(format!("unknown projection method '{other}' (expected mean or wma)")),
        }
    }
}

impl fmt::Display for ProjectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionMethod::Mean => write!(f, "mean"),
            ProjectionMethod::WeightedMovingAverage => write!(f, "wma"),
        }
    }
}

/// Central estimate of a player's statistic
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub estimate: f64,
    pub method: ProjectionMethod,
    /// Number of most recent games the estimate used
    pub games_used: usize,
    /// Games where a combined statistic lacked a component (counted as 0)
    pub missing: Vec<MissingComponent>,
}

/// Sample standard deviation together with the sample it came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleSpread {
    pub std_dev: f64,
    pub sample_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub low: f64,
    pub high: f64,
}

/// Discrete betting recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Strong,
    Moderate,
    Avoid,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Strong => "STRONG BET",
            Recommendation::Moderate => "MODERATE BET",
            Recommendation::Avoid => "AVOID BET",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Recommendation::Strong => "green",
            Recommendation::Moderate => "orange",
            Recommendation::Avoid => "red",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Normal-approximation outcome for one projection line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitProbabilityResult {
    pub z_score: f64,
    /// P(value < line) under the fitted normal
    pub cdf_at_line: f64,
    /// P(value >= line), in percent
    pub hit_probability_percent: f64,
    /// 95% interval for the estimate
    pub confidence_interval: ConfidenceInterval,
    /// Normal density at the line
    pub density_at_line: f64,
    pub recommendation: Recommendation,
}

/// One prop to analyze
#[derive(Debug, Clone, PartialEq)]
pub struct PropRequest {
    pub statistic: StatSelector,
    pub line: f64,
    /// Falls back to the configured method
    pub method: Option<ProjectionMethod>,
    /// Falls back to the configured window, then to the whole log
    pub window: Option<usize>,
    /// Falls back to the opponent of the most recent game
    pub opponent: Option<String>,
}

impl PropRequest {
    pub fn new(statistic: StatSelector, line: f64) -> Self {
        Self { statistic, line, method: None, window: None, opponent: None }
    }

    pub fn with_method(mut self, method: ProjectionMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_opponent(mut self, opponent: impl Into<String>) -> Self {
        self.opponent = Some(opponent.into());
        self
    }
}

/// Defensive context for a prop
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenseOutcome {
    Analysis(DefenseAnalysis),
    /// No snapshot covered the statistic
    NoData { statistic: String },
}

/// Everything computed for one prop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropReport {
    pub statistic: String,
    pub line: f64,
    pub projection: ProjectionResult,
    pub spread: SampleSpread,
    pub probability: HitProbabilityResult,
    /// Share of games in the window at or above the line, in percent
    pub historical_hit_rate: f64,
    pub defense: DefenseOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_method_parsing() {
        assert_eq!("mean".parse::<ProjectionMethod>().unwrap(), ProjectionMethod::Mean);
        assert_eq!("WMA".parse::<ProjectionMethod>().unwrap(), ProjectionMethod::WeightedMovingAverage);
        assert!("median".parse::<ProjectionMethod>().is_err());
        assert_eq!(ProjectionMethod::WeightedMovingAverage.to_string(), "wma");
    }

    #[test]
    fn test_recommendation_labels() {
        assert_eq!(Recommendation::Strong.label(), "STRONG BET");
        assert_eq!(Recommendation::Moderate.color(), "orange");
        assert_eq!(Recommendation::Avoid.to_string(), "AVOID BET");
    }

    #[test]
    fn test_defense_outcome_serializes() {
        let outcome = DefenseOutcome::NoData { statistic: "PRA".to_string() };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["no_data"]["statistic"], "PRA");
    }
}
