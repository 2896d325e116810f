use crate::abbreviations;
use crate::names::{canonical_nickname, clean_team_name};
use crate::types::{DefenseAnalysis, MatchKind};
use defense_ranker::{RankedEntry, Ranking};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Resolves opponent identifiers against a defense ranking
///
/// Three rules are tried in order, each over the whole ranking before the
/// next one: substring, abbreviation, token overlap. The first candidate in
/// ranking order that satisfies the current rule wins.
#[derive(Debug, Clone, Default)]
pub struct TeamResolver {
    /// Extra code -> nickname entries, upper-cased codes
    aliases: HashMap<String, String>,
}

impl TeamResolver {
    /// Resolver backed by the static abbreviation table only
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with additional aliases, consulted before the static table
    pub fn with_aliases<I, K, V>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let aliases = aliases
            .into_iter()
            .map(|(code, nickname)| (code.as_ref().trim().to_uppercase(), nickname.into()))
            .collect();
        Self { aliases }
    }

    /// Canonical nickname for a team code
    pub fn nickname_for_code(&self, code: &str) -> Option<&str> {
        let code = code.trim().to_uppercase();
        self.aliases
            .get(&code)
            .map(String::as_str)
            .or_else(|| abbreviations::lookup(&code))
    }

    /// Find the ranked entry an identifier refers to
    pub fn find<'a>(
        &self,
        identifier: &str,
        ranking: &'a Ranking,
    ) -> Option<(&'a RankedEntry, MatchKind)> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return None;
        }
        let needle = identifier.to_lowercase();

        let candidates = || ranking.entries.iter().filter(|entry| !entry.team.trim().is_empty());

        if let Some(entry) = candidates().find(|entry| {
            let team = entry.team.trim().to_lowercase();
            let hit = team.contains(&needle) || needle.contains(&team);
            debug!("Substring check '{}' vs '{}': {}", identifier, entry.team, hit);
            hit
        }) {
            return Some((entry, MatchKind::Substring));
        }

        if let Some(nickname) = self.nickname_for_code(identifier) {
            if let Some(entry) = candidates().find(|entry| {
                let hit = matches_nickname(&entry.team, nickname);
                debug!("Abbreviation check '{}' ({}) vs '{}': {}", identifier, nickname, entry.team, hit);
                hit
            }) {
                return Some((entry, MatchKind::Abbreviation));
            }
        }

        let needle_tokens: Vec<&str> = needle.split_whitespace().collect();
        candidates()
            .find(|entry| {
                let team = entry.team.to_lowercase();
                let hit = team.split_whitespace().any(|token| needle.contains(token))
                    || needle_tokens.iter().any(|token| team.contains(token));
                debug!("Token check '{}' vs '{}': {}", identifier, entry.team, hit);
                hit
            })
            .map(|entry| (entry, MatchKind::TokenOverlap))
    }

    /// Resolve an opponent to its defense analysis
    ///
    /// An identifier that matches nothing (including a blank one) produces
    /// the unresolved mid-table record rather than an error.
    pub fn resolve(&self, identifier: &str, ranking: &Ranking) -> DefenseAnalysis {
        let total = ranking.total_teams();

        match self.find(identifier, ranking) {
            Some((entry, kind)) => {
                info!(
                    "Resolved opponent '{}' to '{}' ({:?}): rank {}/{} in {}",
                    identifier, entry.team, kind, entry.rank, total, ranking.statistic
                );
                DefenseAnalysis::resolved(
                    entry.team.clone(),
                    ranking.statistic.clone(),
                    entry.rank,
                    total,
                    entry.value,
                    kind,
                )
            }
            None => {
                warn!(
                    "Could not resolve opponent '{}' among {} {} teams",
                    identifier, total, ranking.statistic
                );
                DefenseAnalysis::unresolved(identifier.trim().to_string(), ranking.statistic.clone(), total)
            }
        }
    }
}

fn matches_nickname(team: &str, nickname: &str) -> bool {
    if team.trim().eq_ignore_ascii_case(nickname) {
        return true;
    }
    let cleaned = clean_team_name(team);
    cleaned.eq_ignore_ascii_case(nickname)
        || canonical_nickname(&cleaned).is_some_and(|canonical| canonical.eq_ignore_ascii_case(nickname))
}
