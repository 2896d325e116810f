//! Normal-approximation hit probability
//!
//! The player's outcome is modelled as normal with the projected estimate as
//! mean and the sample standard deviation of the window as spread. The CDF
//! uses a fixed-coefficient error function approximation so results match
//! the dashboards the numbers are compared against.

use crate::error::PropError;
use crate::models::{ConfidenceInterval, HitProbabilityResult, SampleSpread};
use crate::recommendation::RecommendationThresholds;
use std::f64::consts::PI;
use tracing::debug;

/// Error function, fractional error below 1.2e-7
pub fn erf(x: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.5 * x.abs());
    let tau = t
        * (-x * x - 1.26551223
            + 1.00002368 * t
            + 0.37409196 * t.powi(2)
            + 0.09678418 * t.powi(3)
            - 0.18628806 * t.powi(4)
            + 0.27886807 * t.powi(5)
            - 1.13520398 * t.powi(6)
            + 1.48851587 * t.powi(7)
            - 0.82215223 * t.powi(8)
            + 0.17087277 * t.powi(9))
        .exp();

    if x >= 0.0 {
        1.0 - tau
    } else {
        tau - 1.0
    }
}

/// Standard normal CDF at `z`
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / 2.0_f64.sqrt()))
}

/// Normal density at `x`
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
}

/// Sample standard deviation (n - 1 denominator)
///
/// None for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt())
}

/// Spread of a sample, rejecting degenerate ones
pub fn sample_spread(values: &[f64]) -> Result<SampleSpread, PropError> {
    let sample_size = values.len();
    match sample_std_dev(values) {
        Some(std_dev) if std_dev > 0.0 && std_dev.is_finite() => Ok(SampleSpread { std_dev, sample_size }),
        other => Err(PropError::DegenerateVariance { std_dev: other.unwrap_or(0.0), sample_size }),
    }
}

/// Percentage of games at or above the line
pub fn historical_hit_rate(values: &[f64], line: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let hits = values.iter().filter(|v| **v >= line).count();
    hits as f64 / values.len() as f64 * 100.0
}

/// Hit probability model with a fixed critical value for the interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityModel {
    t_critical: f64,
    thresholds: RecommendationThresholds,
}

impl ProbabilityModel {
    pub fn new(t_critical: f64, thresholds: RecommendationThresholds) -> Self {
        Self { t_critical, thresholds }
    }

    pub fn t_critical(&self) -> f64 {
        self.t_critical
    }

    /// Evaluate a projection line against an estimate and its spread
    pub fn evaluate(
        &self,
        estimate: f64,
        spread: SampleSpread,
        line: f64,
    ) -> Result<HitProbabilityResult, PropError> {
        if !line.is_finite() {
            return Err(PropError::InvalidLine(line));
        }
        let SampleSpread { std_dev, sample_size } = spread;
        if !(std_dev.is_finite() && std_dev > 0.0) || sample_size < 2 {
            return Err(PropError::DegenerateVariance { std_dev, sample_size });
        }

        let z_score = (line - estimate) / std_dev;
        let cdf_at_line = normal_cdf(z_score);
        let hit_probability_percent = (1.0 - cdf_at_line) * 100.0;

        let margin = self.t_critical * std_dev / (sample_size as f64).sqrt();
        let confidence_interval = ConfidenceInterval { low: estimate - margin, high: estimate + margin };
        let recommendation = self.thresholds.recommend(hit_probability_percent);

        debug!(
            "Line {:.1} vs estimate {:.2} (sd {:.2}, n {}): z={:.3}, hit {:.1}%",
            line, estimate, std_dev, sample_size, z_score, hit_probability_percent
        );

        Ok(HitProbabilityResult {
            z_score,
            cdf_at_line,
            hit_probability_percent,
            confidence_interval,
            density_at_line: normal_pdf(line, estimate, std_dev),
            recommendation,
        })
    }
}
