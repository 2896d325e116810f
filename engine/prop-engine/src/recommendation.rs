use crate::config::{RecommendationConfig, DEFAULT_MODERATE_ABOVE, DEFAULT_STRONG_ABOVE};
use crate::models::Recommendation;

/// Hit-probability cut-offs, both exclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationThresholds {
    pub strong_above: f64,
    pub moderate_above: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self { strong_above: DEFAULT_STRONG_ABOVE, moderate_above: DEFAULT_MODERATE_ABOVE }
    }
}

impl From<&RecommendationConfig> for RecommendationThresholds {
    fn from(config: &RecommendationConfig) -> Self {
        Self { strong_above: config.strong_above, moderate_above: config.moderate_above }
    }
}

impl RecommendationThresholds {
    /// Map a hit probability in percent to a recommendation
    pub fn recommend(&self, hit_probability_percent: f64) -> Recommendation {
        if hit_probability_percent > self.strong_above {
            Recommendation::Strong
        } else if hit_probability_percent > self.moderate_above {
            Recommendation::Moderate
        } else {
            Recommendation::Avoid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = RecommendationThresholds::default();
        assert_eq!(thresholds.recommend(61.0), Recommendation::Strong);
        assert_eq!(thresholds.recommend(60.0), Recommendation::Moderate);
        assert_eq!(thresholds.recommend(40.5), Recommendation::Moderate);
        assert_eq!(thresholds.recommend(40.0), Recommendation::Avoid);
        assert_eq!(thresholds.recommend(25.0), Recommendation::Avoid);
        assert_eq!(thresholds.recommend(f64::NAN), Recommendation::Avoid);
    }

    #[test]
    fn test_configured_thresholds() {
        let config = RecommendationConfig { strong_above: 70.0, moderate_above: 55.0 };
        let thresholds = RecommendationThresholds::from(&config);
        assert_eq!(thresholds.recommend(65.0), Recommendation::Moderate);
        assert_eq!(thresholds.recommend(50.0), Recommendation::Avoid);
    }
}
