//! Configuration for PropEngine

use crate::error::ConfigError;
use crate::models::ProjectionMethod;
use defense_ranker::CompositeWeightSpec;
use serde::{Deserialize, Serialize};
use stat_table::Sport;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// Two-tailed t value for a 95% interval
pub const DEFAULT_T_CRITICAL: f64 = 2.571;

/// Hit probability (percent) above which a prop is a strong bet
pub const DEFAULT_STRONG_ABOVE: f64 = 60.0;

/// Hit probability (percent) above which a prop is a moderate bet
pub const DEFAULT_MODERATE_ABOVE: f64 = 40.0;

/// Configuration for the PropEngine
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropConfig {
    pub stats: StatsConfig,
    pub projection: ProjectionConfig,
    pub probability: ProbabilityConfig,
    pub recommendation: RecommendationConfig,
    pub resolver: ResolverConfig,
    pub composite: CompositeConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// League whose combined-statistic catalog names like PRA resolve against
    pub sport: Sport,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Default projection method
    pub method: ProjectionMethod,

    /// Most recent games to use (None = whole log)
    pub window: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbabilityConfig {
    /// Critical value for the confidence interval
    pub t_critical: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Strictly above this percentage -> Strong
    pub strong_above: f64,

    /// Strictly above this percentage -> Moderate
    pub moderate_above: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Extra team code -> nickname aliases
    pub aliases: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeConfig {
    /// Weights for the comprehensive composite; no built-in default
    pub weights: Option<CompositeWeightSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive for tracing (e.g., "info", "prop_engine=debug")
    pub level: String,
}

impl Default for ProbabilityConfig {
    fn default() -> Self {
        Self { t_critical: DEFAULT_T_CRITICAL }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self { strong_above: DEFAULT_STRONG_ABOVE, moderate_above: DEFAULT_MODERATE_ABOVE }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl PropConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: PropConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Default configuration with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Apply environment overrides; unparsable values are ignored with a warning
    pub fn apply_env(&mut self) {
        self.apply_log_env();

        if let Ok(sport) = std::env::var("PROP_SPORT") {
            match sport.parse() {
                Ok(sport) => self.stats.sport = sport,
                Err(e) => warn!("Ignoring PROP_SPORT: {}", e),
            }
        }

        if let Ok(method) = std::env::var("PROP_METHOD") {
            match method.parse() {
                Ok(method) => self.projection.method = method,
                Err(e) => warn!("Ignoring PROP_METHOD: {}", e),
            }
        }

        if let Ok(window) = std::env::var("PROP_WINDOW") {
            match window.trim().parse::<usize>() {
                Ok(window) => self.projection.window = Some(window),
                Err(_) => warn!("Ignoring PROP_WINDOW='{}'", window),
            }
        }

        if let Ok(t_critical) = std::env::var("PROP_T_CRITICAL") {
            match t_critical.trim().parse::<f64>() {
                Ok(t_critical) => self.probability.t_critical = t_critical,
                Err(_) => warn!("Ignoring PROP_T_CRITICAL='{}'", t_critical),
            }
        }

    }

    /// Apply only the `PROP_LOG_LEVEL` override, which can be read before logging is set up
    pub fn apply_log_env(&mut self) {
        if let Ok(level) = std::env::var("PROP_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.projection.window == Some(0) {
            return Err(ConfigError::Invalid("projection.window must be at least 1".to_string()));
        }

        let t = self.probability.t_critical;
        if !t.is_finite() || t <= 0.0 {
            return Err(ConfigError::Invalid(format!("probability.t_critical must be positive, got {t}")));
        }

        let RecommendationConfig { strong_above, moderate_above } = self.recommendation;
        if !(0.0..=100.0).contains(&moderate_above) || !(0.0..=100.0).contains(&strong_above) {
            return Err(ConfigError::Invalid("recommendation thresholds must be within 0..=100".to_string()));
        }
        if moderate_above > strong_above {
            return Err(ConfigError::Invalid(format!(
                "recommendation.moderate_above ({moderate_above}) exceeds strong_above ({strong_above})"
            )));
        }

        if let Some(weights) = &self.composite.weights {
            weights.validate().map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = PropConfig::default();
        assert_eq!(config.projection.method, ProjectionMethod::Mean);
        assert_eq!(config.projection.window, None);
        assert_eq!(config.probability.t_critical, 2.571);
        assert_eq!(config.recommendation.strong_above, 60.0);
        assert_eq!(config.recommendation.moderate_above, 40.0);
        assert!(config.composite.weights.is_none());
        assert_eq!(config.stats.sport, Sport::Nba);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = PropConfig::default();
        config.projection.method = ProjectionMethod::WeightedMovingAverage;
        config.projection.window = Some(10);
        config.stats.sport = Sport::Nhl;
        config.resolver.aliases.insert("SLC".to_string(), "Jazz".to_string());
        config.composite.weights = Some(CompositeWeightSpec::new().with("PTS", 0.3).with("AST", 0.2));

        let file = NamedTempFile::new().unwrap();
        config.to_file(file.path()).unwrap();
        let loaded = PropConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: PropConfig = toml::from_str(
            r#"
            [stats]
            sport = "NFL"

            [projection]
            method = "wma"

            [composite.weights]
            PTS = 0.30
            reb = 0.15
            "#,
        )
        .unwrap();

        assert_eq!(config.stats.sport, Sport::Nfl);
        assert_eq!(config.projection.method, ProjectionMethod::WeightedMovingAverage);
        assert_eq!(config.probability.t_critical, DEFAULT_T_CRITICAL);
        assert_eq!(config.composite.weights.unwrap().weight("REB"), Some(0.15));
    }

    #[test]
    fn test_validation() {
        let mut config = PropConfig::default();
        config.recommendation.moderate_above = 70.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = PropConfig::default();
        config.probability.t_critical = 0.0;
        assert!(config.validate().is_err());

        let mut config = PropConfig::default();
        config.projection.window = Some(0);
        assert!(config.validate().is_err());

        let mut config = PropConfig::default();
        config.composite.weights = Some(CompositeWeightSpec::new().with("PTS", -1.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = PropConfig::from_file("/nonexistent/prop-engine.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("PROP_METHOD", "wma");
        std::env::set_var("PROP_WINDOW", "not-a-number");
        std::env::set_var("PROP_SPORT", "wnba");
        let config = PropConfig::from_env();
        std::env::remove_var("PROP_METHOD");
        std::env::remove_var("PROP_WINDOW");
        std::env::remove_var("PROP_SPORT");

        assert_eq!(config.projection.method, ProjectionMethod::WeightedMovingAverage);
        assert_eq!(config.projection.window, None);
        assert_eq!(config.stats.sport, Sport::Wnba);
    }
}
