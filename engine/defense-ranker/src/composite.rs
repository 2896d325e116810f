//! Composite rankings over several statistics
//!
//! The two variants have opposite polarity. The additive average is an
//! "allowed" amount, so higher is worse and it sorts descending. The weighted
//! score is built from normalized ranks where rank 1 maps toward 0, so lower
//! is worse and it sorts ascending. Both put the worst defense at rank 1.

use crate::error::RankerError;
use crate::types::{CompositeEntry, CompositeMethod, CompositeRanking, CompositeWeightSpec, Ranking};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Per-team scores before ranking
struct Scored {
    team: String,
    score: f64,
    missing: Vec<String>,
}

/// Rank teams by the average of raw values over the components they have
///
/// Components are deduplicated and put in name order first, and teams are
/// visited in name order, so the result does not depend on how the
/// combination was listed. A missing component is skipped rather than
/// counted as zero; a team with no components at all scores 0 and is listed
/// with every component missing.
pub fn additive_composite<S: AsRef<str>>(
    statistic: &str,
    components: &[S],
    rankings: &[Ranking],
) -> CompositeRanking {
    let components: Vec<String> = components
        .iter()
        .map(|c| c.as_ref().trim().to_uppercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let sources: Vec<(&str, Option<&Ranking>)> =
        components.iter().map(|c| (c.as_str(), find_ranking(rankings, c))).collect();

    let mut teams: BTreeMap<&str, Vec<Option<f64>>> = BTreeMap::new();
    for (slot, (_, ranking)) in sources.iter().enumerate() {
        let Some(ranking) = ranking else { continue };
        for entry in &ranking.entries {
            let values = teams.entry(entry.team.as_str()).or_insert_with(|| vec![None; sources.len()]);
            values[slot] = Some(entry.value);
        }
    }

    let scored: Vec<Scored> = teams
        .into_iter()
        .map(|(team, values)| {
            let mut total = 0.0;
            let mut present = 0usize;
            let mut missing = Vec::new();
            for ((component, _), value) in sources.iter().zip(values) {
                match value {
                    Some(v) => {
                        total += v;
                        present += 1;
                    }
                    None => missing.push(component.to_string()),
                }
            }
            let score = if present > 0 { total / present as f64 } else { 0.0 };
            Scored { team: team.to_string(), score, missing }
        })
        .collect();

    let ranking = finish(statistic, CompositeMethod::AdditiveAverage, components, scored, true);
    info!(
        "Built additive composite {} over {} teams ({})",
        ranking.statistic,
        ranking.total_teams(),
        ranking.components.join(" + ")
    );
    ranking
}

/// Rank teams by the weighted average of their normalized per-statistic ranks
///
/// A team's normalized score for one statistic is `rank / total_teams`, so
/// the team allowing the most (rank 1) sits closest to 0. Only statistics
/// with a positive weight and a ranking are used, and each team is averaged
/// over the statistics it appears in.
pub fn weighted_composite(
    statistic: &str,
    weights: &CompositeWeightSpec,
    rankings: &[Ranking],
) -> Result<CompositeRanking, RankerError> {
    weights.validate()?;

    let sources: Vec<(&str, f64, &Ranking)> = weights
        .iter()
        .filter(|(_, weight)| *weight > 0.0)
        .filter_map(|(stat, weight)| match find_ranking(rankings, stat) {
            Some(ranking) if !ranking.is_empty() => Some((stat, weight, ranking)),
            _ => {
                debug!("No ranking data for weighted statistic {}", stat);
                None
            }
        })
        .collect();

    // team -> (weighted sum, weight total, statistics present)
    let mut teams: BTreeMap<&str, (f64, f64, BTreeSet<&str>)> = BTreeMap::new();
    for &(stat, weight, ranking) in &sources {
        let total = ranking.total_teams() as f64;
        for entry in &ranking.entries {
            let normalized = entry.rank as f64 / total;
            let acc = teams.entry(entry.team.as_str()).or_default();
            acc.0 += normalized * weight;
            acc.1 += weight;
            acc.2.insert(stat);
        }
    }

    let components: Vec<String> = weights
        .iter()
        .filter(|(_, weight)| *weight > 0.0)
        .map(|(stat, _)| stat.to_string())
        .collect();

    let scored: Vec<Scored> = teams
        .into_iter()
        .map(|(team, (sum, weight_total, present))| {
            let score = if weight_total > 0.0 { sum / weight_total } else { 0.0 };
            let missing = components
                .iter()
                .filter(|c| !present.contains(c.as_str()))
                .cloned()
                .collect();
            Scored { team: team.to_string(), score, missing }
        })
        .collect();

    let ranking = finish(statistic, CompositeMethod::WeightedNormalized, components, scored, false);
    info!(
        "Built weighted composite {} over {} teams from {} statistics",
        ranking.statistic,
        ranking.total_teams(),
        sources.len()
    );
    Ok(ranking)
}

fn find_ranking<'a>(rankings: &'a [Ranking], statistic: &str) -> Option<&'a Ranking> {
    rankings.iter().find(|r| r.statistic.trim().eq_ignore_ascii_case(statistic))
}

fn finish(
    statistic: &str,
    method: CompositeMethod,
    components: Vec<String>,
    mut scored: Vec<Scored>,
    descending: bool,
) -> CompositeRanking {
    if descending {
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    } else {
        scored.sort_by(|a, b| a.score.total_cmp(&b.score));
    }

    let entries = scored
        .into_iter()
        .enumerate()
        .map(|(i, s)| CompositeEntry { team: s.team, score: s.score, rank: i as u32 + 1, missing: s.missing })
        .collect();

    CompositeRanking { statistic: statistic.to_uppercase(), method, components, entries }
}
