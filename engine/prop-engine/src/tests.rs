//! End-to-end checks across the engine, configuration and input formats

use crate::cli::{apply_overrides, load_config, read_config, Cli, Commands};
use crate::{DefenseOutcome, PropConfig, PropEngine, PropRequest, Recommendation};
use clap::Parser;
use stat_table::{GameLog, Sport, StatSelector, TeamSnapshot};
use std::io::Write;
use tempfile::NamedTempFile;

const GAME_LOG_JSON: &str = r#"[
    ["DATE", "TM", "OPP", "PTS", "REB", "AST", "FGM"],
    ["11/02/2024", "DEN", "MIN", "24", "12", "9", "10"],
    ["11/04/2024", "DEN", "OKC", "31", "14", "11", "12"],
    ["11/06/2024", "DEN", "MIA", "18", "9", "13", "7"],
    ["11/08/2024", "DEN", "DAL", "27", "11", "8", "11"],
    ["11/10/2024", "DEN", "UTA", "35", "16", "12", "14"]
]"#;

const SNAPSHOT_JSON: &str = r#"{
    "statistic": "pts",
    "entries": [
        {"team": "Boston Celtics (3)", "value": 107.2},
        {"team": "Utah Jazz", "value": 121.2},
        {"team": "Washington Wizards", "value": 120.4},
        {"team": "Miami Heat", "value": 110.1}
    ]
}"#;

fn sample_config_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("prop-engine.toml")
}

#[test]
fn test_report_from_json_inputs() {
    let log: GameLog = serde_json::from_str(GAME_LOG_JSON).unwrap();
    let snapshot: TeamSnapshot = serde_json::from_str(SNAPSHOT_JSON).unwrap();
    let snapshot = TeamSnapshot::new(snapshot.statistic, snapshot.entries);

    let engine = PropEngine::new(PropConfig::default()).unwrap();
    let request = PropRequest::new(StatSelector::parse("PTS"), 22.5);
    let report = engine.analyze(&request, &log, &[snapshot]).unwrap();

    // mean of 35, 27, 18, 31, 24
    assert!((report.projection.estimate - 27.0).abs() < 1e-9);
    assert_eq!(report.historical_hit_rate, 80.0);
    assert_eq!(report.probability.recommendation, Recommendation::Strong);

    let DefenseOutcome::Analysis(analysis) = &report.defense else {
        panic!("expected a defense analysis");
    };
    assert_eq!(analysis.opponent, "Utah Jazz");
    assert_eq!(analysis.rank, 1);
    assert_eq!(analysis.coverage_note().unwrap(), "4/30 teams found");

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["projection"]["method"], "mean");
    assert_eq!(json["probability"]["recommendation"], "Strong");
    assert_eq!(json["defense"]["analysis"]["difficulty"], "Easy");
}

#[test]
fn test_sample_config_loads() {
    let config = PropConfig::from_file(sample_config_path()).unwrap();
    assert_eq!(config.projection.window, Some(10));
    assert_eq!(config.stats.sport, Sport::Nba);

    let weights = config.composite.weights.unwrap();
    assert_eq!(weights.len(), 9);
    assert_eq!(weights.weight("3PM"), Some(0.10));
    assert_eq!(config.resolver.aliases.get("UTH").map(String::as_str), Some("Jazz"));
}

#[test]
fn test_load_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[recommendation]\nstrong_above = 75.0\nmoderate_above = 50.0").unwrap();

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.recommendation.strong_above, 75.0);

    let engine = PropEngine::new(config).unwrap();
    assert_eq!(engine.recommend(70.0), Recommendation::Moderate);
    assert_eq!(engine.recommend(50.0), Recommendation::Avoid);
}

#[test]
fn test_load_config_rejects_bad_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[probability]\nt_critical = -2.0").unwrap();
    assert!(load_config(Some(file.path())).is_err());

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[projection\nmethod = ").unwrap();
    assert!(load_config(Some(file.path())).is_err());
}

#[test]
fn test_ragged_game_log_is_rejected() {
    let ragged = r#"[["DATE", "TM", "OPP", "PTS"], ["11/02/2024", "DEN", "MIN"]]"#;
    assert!(serde_json::from_str::<GameLog>(ragged).is_err());
}

#[test]
fn test_composite_prop_with_window() {
    let log: GameLog = serde_json::from_str(GAME_LOG_JSON).unwrap();
    let engine = PropEngine::new(PropConfig::default()).unwrap();
    let request = PropRequest::new(StatSelector::parse("PRA"), 45.5).with_window(3);

    let report = engine.analyze(&request, &log, &[]).unwrap();
    // 63, 46, 40 over the three most recent games
    assert!((report.projection.estimate - 49.666_666).abs() < 1e-4);
    assert_eq!(report.projection.games_used, 3);
    assert!(report.projection.missing.is_empty());
    assert_eq!(report.defense, DefenseOutcome::NoData { statistic: "PRA".to_string() });
}

#[test]
fn test_read_config_defers_env_overrides() {
    std::env::set_var("PROP_LOG_LEVEL", "prop_engine=trace");
    let config = read_config(None).unwrap();
    assert_eq!(config.logging.level, "info");

    let mut early = config.clone();
    early.apply_log_env();
    let config = apply_overrides(config).unwrap();
    std::env::remove_var("PROP_LOG_LEVEL");

    assert_eq!(early.logging.level, "prop_engine=trace");
    assert_eq!(config.logging.level, "prop_engine=trace");
}

#[test]
fn test_cli_parses_sport() {
    let cli = Cli::try_parse_from([
        "prop-engine", "--sport", "nfl", "analyze", "--game-log", "log.json", "--stat", "PRA", "--line", "250.5",
    ])
    .unwrap();
    assert_eq!(cli.sport, Some(Sport::Nfl));
    assert!(matches!(cli.command, Commands::Analyze { window: None, .. }));

    assert!(Cli::try_parse_from(["prop-engine", "--sport", "mlb", "rank", "--snapshot", "s.json"]).is_err());
}

#[test]
fn test_football_prop_from_json_log() {
    let log: GameLog = serde_json::from_str(
        r#"[
            ["DATE", "TM", "OPP", "PASS_YDS", "RUSH_YDS", "REC_YDS"],
            ["09/08/2024", "KC", "BAL", "291", "12", "0"],
            ["09/15/2024", "KC", "CIN", "151", "20", "0"],
            ["09/22/2024", "KC", "ATL", "217", "6", "0"]
        ]"#,
    )
    .unwrap();

    let mut config = PropConfig::default();
    config.stats.sport = Sport::Nfl;
    let engine = PropEngine::new(config).unwrap();

    let request = PropRequest::new(engine.statistic("PRA"), 220.5);
    let report = engine.analyze(&request, &log, &[]).unwrap();
    // 223, 171, 303
    assert!((report.projection.estimate - 232.333_333).abs() < 1e-4);
    assert!(report.projection.missing.is_empty());
}
