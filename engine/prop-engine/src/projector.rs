//! Central-tendency estimates from a player's recent games

use crate::error::PropError;
use crate::models::{ProjectionMethod, ProjectionResult};
use stat_table::{GameLog, StatSelector, StatSeries};
use tracing::{debug, warn};

/// Project a statistic from a game log
///
/// The log is sorted newest first and the `window` most recent games are
/// used (the whole log when `window` is None). A window larger than the log,
/// or an empty log, is `InsufficientData`; a zero window is `InvalidWindow`.
pub fn project(
    log: &GameLog,
    statistic: &StatSelector,
    method: ProjectionMethod,
    window: Option<usize>,
) -> Result<ProjectionResult, PropError> {
    let series = windowed_series(log, statistic, window)?;
    project_series(&series, method)
}

/// Series for the requested window, most recent game first
pub fn windowed_series(
    log: &GameLog,
    statistic: &StatSelector,
    window: Option<usize>,
) -> Result<StatSeries, PropError> {
    if window == Some(0) {
        return Err(PropError::InvalidWindow(0));
    }

    let available = log.len();
    let required = window.unwrap_or(available).max(1);
    if available < required {
        return Err(PropError::InsufficientData { available, required });
    }

    let series = log.series(statistic)?.most_recent(required);
    for warning in &series.missing {
        warn!("{} for {}", warning, statistic);
    }
    Ok(series)
}

/// Estimate over an already windowed series
pub fn project_series(series: &StatSeries, method: ProjectionMethod) -> Result<ProjectionResult, PropError> {
    let estimate = match method {
        ProjectionMethod::Mean => mean(&series.values),
        ProjectionMethod::WeightedMovingAverage => weighted_moving_average(&series.values),
    }
    .ok_or(PropError::InsufficientData { available: 0, required: 1 })?;

    debug!("Projected {:.2} ({}) over {} games", estimate, method, series.len());

    Ok(ProjectionResult {
        estimate,
        method,
        games_used: series.len(),
        missing: series.missing.clone(),
    })
}

/// Arithmetic mean
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Linearly decaying weighted average, most recent value first
///
/// The i-th value (0 = most recent) of n gets weight `n - 0.5 * i`.
pub fn weighted_moving_average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let (weighted, total) = values.iter().enumerate().fold((0.0, 0.0), |(weighted, total), (i, value)| {
        let weight = n - 0.5 * i as f64;
        (weighted + value * weight, total + weight)
    });
    Some(weighted / total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn create_test_log() -> GameLog {
        GameLog::from_rows(vec![
            row(&["DATE", "TM", "OPP", "PTS", "REB", "AST"]),
            row(&["01/01/2025", "DEN", "PHX", "10", "8", "7"]),
            row(&["01/07/2025", "DEN", "UTA", "30", "12", ""]),
            row(&["01/03/2025", "DEN", "LAL", "20", "10", "5"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_mean_projection() {
        let result = project(&create_test_log(), &StatSelector::parse("PTS"), ProjectionMethod::Mean, None).unwrap();
        assert!((result.estimate - 20.0).abs() < 1e-9);
        assert_eq!(result.games_used, 3);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_wma_projection() {
        let log = create_test_log();
        let result = project(&log, &StatSelector::parse("PTS"), ProjectionMethod::WeightedMovingAverage, None).unwrap();
        // (30*3 + 20*2.5 + 10*2) / 7.5
        assert!((result.estimate - 21.333).abs() < 0.01);
        assert_eq!(result.method, ProjectionMethod::WeightedMovingAverage);
    }

    #[test]
    fn test_wma_helper() {
        let estimate = weighted_moving_average(&[30.0, 20.0, 10.0]).unwrap();
        assert!((estimate - 160.0 / 7.5).abs() < 1e-9);
        assert_eq!(weighted_moving_average(&[]), None);
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_window_uses_most_recent_games() {
        let log = create_test_log();
        let result = project(&log, &StatSelector::parse("PTS"), ProjectionMethod::Mean, Some(2)).unwrap();
        assert!((result.estimate - 25.0).abs() < 1e-9);
        assert_eq!(result.games_used, 2);
    }

    #[test]
    fn test_insufficient_data() {
        let log = create_test_log();
        let err = project(&log, &StatSelector::parse("PTS"), ProjectionMethod::Mean, Some(5)).unwrap_err();
        assert_eq!(err, PropError::InsufficientData { available: 3, required: 5 });

        let empty = GameLog::from_rows(vec![row(&["DATE", "TM", "OPP", "PTS"])]).unwrap();
        let err = project(&empty, &StatSelector::parse("PTS"), ProjectionMethod::Mean, None).unwrap_err();
        assert_eq!(err, PropError::InsufficientData { available: 0, required: 1 });
    }

    #[test]
    fn test_zero_window_is_rejected() {
        let log = create_test_log();
        let err = project(&log, &StatSelector::parse("PTS"), ProjectionMethod::Mean, Some(0)).unwrap_err();
        assert_eq!(err, PropError::InvalidWindow(0));

        let err = windowed_series(&log, &StatSelector::parse("PTS"), Some(0)).unwrap_err();
        assert_eq!(err.to_string(), "Window must cover at least one game, got 0");
    }

    #[test]
    fn test_combined_projection_reports_missing() {
        let log = create_test_log();
        let result = project(&log, &StatSelector::parse("PRA"), ProjectionMethod::Mean, None).unwrap();
        // 42 (AST missing), 35, 25
        assert!((result.estimate - 34.0).abs() < 1e-9);
        assert_eq!(result.missing.len(), 1);
        assert_eq!(result.missing[0].components, vec!["AST".to_string()]);
    }

    #[test]
    fn test_unknown_column() {
        let log = create_test_log();
        let err = project(&log, &StatSelector::parse("STL"), ProjectionMethod::Mean, None).unwrap_err();
        assert!(matches!(err, PropError::Table(_)));
    }
}
