//! Property tests for rankings

use crate::{additive_composite, rank_entries, weighted_composite, CompositeWeightSpec, Ranking};
use proptest::prelude::*;
use stat_table::TeamStatEntry;
use std::collections::HashSet;

fn entries_strategy() -> impl Strategy<Value = Vec<TeamStatEntry>> {
    prop::collection::vec(("[A-Z][a-z]{2,6}", 80.0f64..140.0), 1..35).prop_map(|pairs| {
        pairs.into_iter().map(|(team, value)| TeamStatEntry::new(team, value)).collect()
    })
}

fn re_rank(ranking: &Ranking) -> Ranking {
    let entries: Vec<TeamStatEntry> =
        ranking.entries.iter().map(|e| TeamStatEntry::new(e.team.clone(), e.value)).collect();
    rank_entries(&ranking.statistic, &entries)
}

proptest! {
    #[test]
    fn prop_ranks_are_a_permutation(entries in entries_strategy()) {
        let ranking = rank_entries("PTS", &entries);
        let distinct: HashSet<&str> = entries.iter().map(|e| e.team.as_str()).collect();
        prop_assert_eq!(ranking.entries.len(), distinct.len());

        let ranks: Vec<u32> = ranking.entries.iter().map(|e| e.rank).collect();
        let expected: Vec<u32> = (1..=ranking.total_teams()).collect();
        prop_assert_eq!(ranks, expected);
    }

    #[test]
    fn prop_values_non_increasing(entries in entries_strategy()) {
        let ranking = rank_entries("REB", &entries);
        for pair in ranking.entries.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
        }
    }

    #[test]
    fn prop_re_ranking_is_idempotent(entries in entries_strategy()) {
        let once = rank_entries("AST", &entries);
        let twice = re_rank(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_additive_ignores_component_order(
        pts in entries_strategy(),
        reb in entries_strategy(),
        ast in entries_strategy(),
    ) {
        let rankings = vec![
            rank_entries("PTS", &pts),
            rank_entries("REB", &reb),
            rank_entries("AST", &ast),
        ];
        let forward = additive_composite("PRA", &["PTS", "REB", "AST"], &rankings);
        let backward = additive_composite("PRA", &["AST", "REB", "PTS"], &rankings);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_weighted_ranks_are_a_permutation(
        pts in entries_strategy(),
        ast in entries_strategy(),
    ) {
        let rankings = vec![rank_entries("PTS", &pts), rank_entries("AST", &ast)];
        let weights = CompositeWeightSpec::new().with("PTS", 0.3).with("AST", 0.2);
        let composite = weighted_composite("COMPREHENSIVE", &weights, &rankings).unwrap();

        let ranks: Vec<u32> = composite.entries.iter().map(|e| e.rank).collect();
        let expected: Vec<u32> = (1..=composite.total_teams()).collect();
        prop_assert_eq!(ranks, expected);
        for pair in composite.entries.windows(2) {
            prop_assert!(pair[0].score <= pair[1].score);
        }
    }
}

#[test]
fn test_uniformly_worst_team_leads_weighted_composite() {
    let teams = ["Jazz", "Wizards", "Hornets", "Celtics", "Thunder"];
    let stats = ["PTS", "REB", "AST", "FGM"];
    let rankings: Vec<Ranking> = stats
        .iter()
        .enumerate()
        .map(|(s, stat)| {
            let entries: Vec<TeamStatEntry> = teams
                .iter()
                .enumerate()
                .map(|(t, team)| {
                    // Jazz allows the most everywhere; the others shuffle per statistic
                    let value = if t == 0 { 200.0 } else { 100.0 + ((t + s) % 4) as f64 };
                    TeamStatEntry::new(*team, value)
                })
                .collect();
            rank_entries(stat, &entries)
        })
        .collect();

    let weights = CompositeWeightSpec::new()
        .with("PTS", 0.30)
        .with("AST", 0.20)
        .with("REB", 0.15)
        .with("FGM", 0.15);
    let composite = weighted_composite("COMPREHENSIVE", &weights, &rankings).unwrap();

    assert_eq!(composite.entries[0].team, "Jazz");
    assert_eq!(composite.entries[0].rank, 1);
    assert!(composite.entries[0].missing.is_empty());
}

#[test]
fn test_composite_serializes() {
    let rankings = vec![rank_entries("PTS", &[TeamStatEntry::new("Jazz", 121.0)])];
    let composite = additive_composite("PR", &["PTS", "REB"], &rankings);
    let json = serde_json::to_value(&composite).unwrap();
    assert_eq!(json["method"], "AdditiveAverage");
    assert_eq!(json["entries"][0]["missing"][0], "REB");
}
