use crate::types::{RankedEntry, Ranking};
use stat_table::{TeamSnapshot, TeamStatEntry};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Rank a snapshot, worst defense (largest value) first
pub fn rank(snapshot: &TeamSnapshot) -> Ranking {
    rank_entries(&snapshot.statistic, &snapshot.entries)
}

/// Rank team entries for one statistic
///
/// Entries are stable-sorted by descending value, so ties keep encounter
/// order. Only the first entry per team name is ranked, and non-finite values
/// are dropped. Ranks are exactly 1..=N over what remains; an empty input
/// yields an empty ranking.
pub fn rank_entries(statistic: &str, entries: &[TeamStatEntry]) -> Ranking {
    let mut seen = HashSet::with_capacity(entries.len());
    let mut kept: Vec<&TeamStatEntry> = Vec::with_capacity(entries.len());

    for entry in entries {
        if !entry.value.is_finite() {
            warn!("Skipping non-finite {} value for '{}'", statistic, entry.team);
            continue;
        }
        if !seen.insert(entry.team.as_str()) {
            warn!("Duplicate {} entry for '{}' ignored", statistic, entry.team);
            continue;
        }
        kept.push(entry);
    }

    kept.sort_by(|a, b| b.value.total_cmp(&a.value));

    let ranked: Vec<RankedEntry> = kept
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry {
            team: entry.team.clone(),
            value: entry.value,
            rank: i as u32 + 1,
        })
        .collect();

    debug!("Ranked {} teams for {}", ranked.len(), statistic);
    Ranking::new(statistic.to_string(), ranked)
}
