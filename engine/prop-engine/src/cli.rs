//! # Command Line Interface
//!
//! Reads already-fetched game logs and team snapshots from JSON files and
//! prints rankings, matchup analyses and prop reports.

use crate::config::PropConfig;
use crate::engine::PropEngine;
use crate::models::{DefenseOutcome, ProjectionMethod, PropReport, PropRequest};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use defense_ranker::{CompositeRanking, Ranking};
use serde::Serialize;
use stat_table::{GameLog, Sport, TeamSnapshot};
use std::path::{Path, PathBuf};
use team_registry::DefenseAnalysis;
use tracing::info;

/// Player prop analytics
#[derive(Parser)]
#[command(name = "prop-engine")]
#[command(about = "Defense rankings, projections and hit probabilities for player props")]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// League for combined statistics such as PRA (NBA, WNBA, NFL, NHL)
    #[arg(long, global = true)]
    pub sport: Option<Sport>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank teams by one statistic, worst defense first
    Rank {
        /// Snapshot JSON file
        #[arg(long)]
        snapshot: PathBuf,
        /// Only show the first N teams
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Rank teams by a combined statistic (average of components)
    Composite {
        /// Snapshot JSON files, one per component
        #[arg(long, required = true, num_args = 1..)]
        snapshot: Vec<PathBuf>,
        /// Combined statistic, e.g. PRA or PTS+REB
        #[arg(long)]
        stat: String,
    },
    /// Rank teams by the configured weighted composite
    Comprehensive {
        /// Snapshot JSON files, one per weighted statistic
        #[arg(long, required = true, num_args = 1..)]
        snapshot: Vec<PathBuf>,
    },
    /// Resolve an opponent and grade the matchup
    Resolve {
        /// Opponent identifier (code, nickname or full name)
        #[arg(long)]
        opponent: String,
        /// Snapshot JSON file
        #[arg(long)]
        snapshot: PathBuf,
    },
    /// Project a statistic and evaluate a line
    Analyze {
        /// Game log JSON file (array of rows, header first)
        #[arg(long)]
        game_log: PathBuf,
        /// Statistic, e.g. PTS or PRA
        #[arg(long)]
        stat: String,
        /// Projection line
        #[arg(long, allow_negative_numbers = true)]
        line: f64,
        /// Projection method (mean or wma)
        #[arg(long)]
        method: Option<ProjectionMethod>,
        /// Most recent games to use
        #[arg(long)]
        window: Option<usize>,
        /// Opponent override (defaults to the most recent game's opponent)
        #[arg(long)]
        opponent: Option<String>,
        /// Defense snapshot JSON files
        #[arg(long, num_args = 1..)]
        snapshot: Vec<PathBuf>,
    },
}

/// Load the configuration for a run: file (if any), then environment overrides
pub fn load_config(path: Option<&Path>) -> Result<PropConfig> {
    apply_overrides(read_config(path)?)
}

/// Configuration file (if any) without environment overrides
pub fn read_config(path: Option<&Path>) -> Result<PropConfig> {
    match path {
        Some(path) => PropConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(PropConfig::default()),
    }
}

/// Apply environment overrides and re-validate
pub fn apply_overrides(mut config: PropConfig) -> Result<PropConfig> {
    config.apply_env();
    config.validate().context("Invalid configuration after environment overrides")?;
    Ok(config)
}

/// CLI handler
pub struct CliHandler {
    engine: PropEngine,
    json: bool,
}

impl CliHandler {
    pub fn new(config: PropConfig, json: bool) -> Result<Self> {
        let engine = PropEngine::new(config).context("Failed to create prop engine")?;
        Ok(Self { engine, json })
    }

    /// Handle CLI commands
    pub fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Rank { snapshot, limit } => self.show_ranking(&snapshot, limit),
            Commands::Composite { snapshot, stat } => self.show_composite(&snapshot, &stat),
            Commands::Comprehensive { snapshot } => self.show_comprehensive(&snapshot),
            Commands::Resolve { opponent, snapshot } => self.show_resolution(&opponent, &snapshot),
            Commands::Analyze { game_log, stat, line, method, window, opponent, snapshot } => {
                let mut request = PropRequest::new(self.engine.statistic(&stat), line);
                request.method = method;
                request.window = window;
                request.opponent = opponent;
                self.show_analysis(&game_log, &request, &snapshot)
            }
        }
    }

    fn show_ranking(&self, path: &Path, limit: Option<usize>) -> Result<()> {
        let ranking = self.engine.rank(&read_snapshot(path)?);
        if self.json {
            return print_json(&ranking);
        }

        println!("🛡️ {} Defense Rankings ({} teams)", ranking.statistic, ranking.total_teams());
        println!("{}", "=".repeat(50));
        print_ranking(&ranking, limit);
        Ok(())
    }

    fn show_composite(&self, paths: &[PathBuf], stat: &str) -> Result<()> {
        let selector = self.engine.statistic(stat);
        if !selector.is_combined() {
            let sport = self.engine.config().stats.sport;
            bail!(
                "{} is not a combined {} statistic (try {} or A+B)",
                stat,
                sport,
                sport.combined_names().join(", ")
            );
        }

        let rankings = self.read_rankings(paths)?;
        let composite = self.engine.composite_rank(&selector, &rankings);
        if self.json {
            return print_json(&composite);
        }

        println!("📊 {} Composite Defense Rankings ({})", composite.statistic, composite.components.join(" + "));
        println!("{}", "=".repeat(50));
        print_composite(&composite);
        Ok(())
    }

    fn show_comprehensive(&self, paths: &[PathBuf]) -> Result<()> {
        let Some(weights) = &self.engine.config().composite.weights else {
            bail!("No [composite.weights] table in configuration");
        };

        let rankings = self.read_rankings(paths)?;
        let composite = self.engine.comprehensive_rank(weights, &rankings)?;
        if self.json {
            return print_json(&composite);
        }

        println!("🏀 Comprehensive Defense Rankings ({} statistics)", composite.components.len());
        println!("{}", "=".repeat(50));
        print_composite(&composite);
        Ok(())
    }

    fn show_resolution(&self, opponent: &str, path: &Path) -> Result<()> {
        let ranking = self.engine.rank(&read_snapshot(path)?);
        let analysis = self.engine.resolve_opponent(opponent, &ranking);
        if self.json {
            return print_json(&analysis);
        }

        println!("🔍 Matchup: {} vs {} defense", opponent, ranking.statistic);
        println!("{}", "=".repeat(50));
        print_analysis(&analysis);
        Ok(())
    }

    fn show_analysis(&self, log_path: &Path, request: &PropRequest, snapshot_paths: &[PathBuf]) -> Result<()> {
        let log = read_game_log(log_path)?;
        let snapshots = snapshot_paths.iter().map(|p| read_snapshot(p)).collect::<Result<Vec<_>>>()?;

        let report = self.engine.analyze(request, &log, &snapshots).context("Failed to analyze prop")?;
        if self.json {
            return print_json(&report);
        }

        print_report(&report);
        Ok(())
    }

    fn read_rankings(&self, paths: &[PathBuf]) -> Result<Vec<Ranking>> {
        paths.iter().map(|path| read_snapshot(path).map(|snapshot| self.engine.rank(&snapshot))).collect()
    }
}

fn read_snapshot(path: &Path) -> Result<TeamSnapshot> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let snapshot: TeamSnapshot =
        serde_json::from_str(&content).with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
    info!("Loaded {} snapshot with {} teams from {}", snapshot.statistic, snapshot.len(), path.display());
    Ok(TeamSnapshot::new(snapshot.statistic, snapshot.entries))
}

fn read_game_log(path: &Path) -> Result<GameLog> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read game log {}", path.display()))?;
    let log: GameLog =
        serde_json::from_str(&content).with_context(|| format!("Failed to parse game log {}", path.display()))?;
    info!("Loaded game log with {} games from {}", log.len(), path.display());
    Ok(log)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_ranking(ranking: &Ranking, limit: Option<usize>) {
    let entries = limit.map_or(&ranking.entries[..], |limit| ranking.top(limit));
    for entry in entries {
        println!("{:>3}. {:<24} {:>8.1}", entry.rank, entry.team, entry.value);
    }
}

fn print_composite(composite: &CompositeRanking) {
    for entry in &composite.entries {
        match entry.missing_note() {
            Some(note) => println!("{:>3}. {:<24} {:>8.3}  ({})", entry.rank, entry.team, entry.score, note),
            None => println!("{:>3}. {:<24} {:>8.3}", entry.rank, entry.team, entry.score),
        }
    }
}

fn print_analysis(analysis: &DefenseAnalysis) {
    if !analysis.resolved {
        println!("⚠️ Could not find '{}' in the rankings", analysis.opponent);
    }
    println!("Opponent:       {}", analysis.opponent);
    println!("Rank:           {}/{}", analysis.rank, analysis.total_teams);
    println!("Allowed:        {:.1} {}", analysis.value_allowed, analysis.statistic);
    println!("Difficulty:     {} ({})", analysis.difficulty, analysis.difficulty_color);
    if let Some(outlook) = analysis.outlook_text() {
        println!("Outlook:        {}", outlook);
    }
    if let Some(note) = analysis.coverage_note() {
        println!("Coverage:       {}", note);
    }
}

fn print_report(report: &PropReport) {
    let projection = &report.projection;
    let probability = &report.probability;

    println!("🎯 {} line {:.1}", report.statistic, report.line);
    println!("{}", "=".repeat(50));
    println!(
        "Projection:     {:.2} ({}, {} games)",
        projection.estimate, projection.method, projection.games_used
    );
    for warning in &projection.missing {
        println!("  ⚠️ {}", warning);
    }
    println!("Std deviation:  {:.2}", report.spread.std_dev);
    println!(
        "95% interval:   {:.2} to {:.2}",
        probability.confidence_interval.low, probability.confidence_interval.high
    );
    println!("Hit chance:     {:.1}%", probability.hit_probability_percent);
    println!("Historical:     {:.1}% of games at or above the line", report.historical_hit_rate);
    println!("Recommendation: {} ({})", probability.recommendation, probability.recommendation.color());
    println!();

    match &report.defense {
        DefenseOutcome::Analysis(analysis) => {
            println!("🛡️ Opponent defense ({})", analysis.statistic);
            print_analysis(analysis);
        }
        DefenseOutcome::NoData { statistic } => {
            println!("🛡️ No defense data for {}", statistic);
        }
    }
}
