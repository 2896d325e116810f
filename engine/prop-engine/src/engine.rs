use crate::config::PropConfig;
use crate::error::PropError;
use crate::models::{
    DefenseOutcome, HitProbabilityResult, ProjectionMethod, ProjectionResult, PropReport, PropRequest,
    Recommendation, SampleSpread,
};
use crate::probability::{historical_hit_rate, sample_spread, ProbabilityModel};
use crate::projector;
use crate::recommendation::RecommendationThresholds;
use defense_ranker::{CompositeRanking, CompositeWeightSpec, Ranking};
use stat_table::{GameLog, StatSelector, TeamSnapshot};
use team_registry::{DefenseAnalysis, TeamResolver};
use tracing::{debug, info, warn};

/// Facade wiring the projector, probability model, thresholds and resolver
pub struct PropEngine {
    config: PropConfig,
    model: ProbabilityModel,
    thresholds: RecommendationThresholds,
    resolver: TeamResolver,
}

impl PropEngine {
    pub fn new(config: PropConfig) -> Result<Self, PropError> {
        config.validate()?;

        let thresholds = RecommendationThresholds::from(&config.recommendation);
        let model = ProbabilityModel::new(config.probability.t_critical, thresholds);
        let resolver = TeamResolver::with_aliases(&config.resolver.aliases);

        info!(
            "Created PropEngine (sport: {}, method: {}, window: {:?}, t: {})",
            config.stats.sport, config.projection.method, config.projection.window, config.probability.t_critical
        );

        Ok(Self { config, model, thresholds, resolver })
    }

    pub fn config(&self) -> &PropConfig {
        &self.config
    }

    /// Parse a statistic name with the configured sport's combined catalog
    pub fn statistic(&self, name: &str) -> StatSelector {
        StatSelector::parse_for(name, self.config.stats.sport)
    }

    /// Rank one statistic snapshot
    pub fn rank(&self, snapshot: &TeamSnapshot) -> Ranking {
        defense_ranker::rank(snapshot)
    }

    /// Additive composite for a combined selector, over already ranked components
    pub fn composite_rank(&self, statistic: &StatSelector, rankings: &[Ranking]) -> CompositeRanking {
        defense_ranker::additive_composite(statistic.name(), &statistic.components(), rankings)
    }

    /// Weighted composite over normalized ranks
    pub fn comprehensive_rank(
        &self,
        weights: &CompositeWeightSpec,
        rankings: &[Ranking],
    ) -> Result<CompositeRanking, PropError> {
        Ok(defense_ranker::weighted_composite("COMPREHENSIVE", weights, rankings)?)
    }

    pub fn resolve_opponent(&self, identifier: &str, ranking: &Ranking) -> DefenseAnalysis {
        self.resolver.resolve(identifier, ranking)
    }

    /// Project with explicit method and window
    pub fn project(
        &self,
        log: &GameLog,
        statistic: &StatSelector,
        method: ProjectionMethod,
        window: Option<usize>,
    ) -> Result<ProjectionResult, PropError> {
        projector::project(log, statistic, method, window)
    }

    pub fn evaluate_probability(
        &self,
        estimate: f64,
        spread: SampleSpread,
        line: f64,
    ) -> Result<HitProbabilityResult, PropError> {
        self.model.evaluate(estimate, spread, line)
    }

    pub fn recommend(&self, hit_probability_percent: f64) -> Recommendation {
        self.thresholds.recommend(hit_probability_percent)
    }

    /// Full analysis of one prop
    ///
    /// The defense side uses the snapshot for the statistic, or for a
    /// combined statistic the additive composite of its component snapshots.
    /// Without any matching snapshot the defense outcome is `NoData`.
    pub fn analyze(
        &self,
        request: &PropRequest,
        log: &GameLog,
        snapshots: &[TeamSnapshot],
    ) -> Result<PropReport, PropError> {
        if !request.line.is_finite() {
            return Err(PropError::InvalidLine(request.line));
        }

        let method = request.method.unwrap_or(self.config.projection.method);
        let window = request.window.or(self.config.projection.window);
        let statistic = &request.statistic;

        let series = projector::windowed_series(log, statistic, window)?;
        let projection = projector::project_series(&series, method)?;
        let spread = sample_spread(&series.values)?;
        let probability = self.model.evaluate(projection.estimate, spread, request.line)?;
        let hit_rate = historical_hit_rate(&series.values, request.line);

        let opponent = match &request.opponent {
            Some(opponent) => Some(opponent.clone()),
            None => log.most_recent_opponent()?.map(str::to_string),
        };
        let defense = match self.defense_ranking(statistic, snapshots) {
            Ok(ranking) => {
                let opponent = opponent.as_deref().unwrap_or_default();
                debug!("Resolving opponent '{}' against {} teams", opponent, ranking.total_teams());
                DefenseOutcome::Analysis(self.resolver.resolve(opponent, &ranking))
            }
            Err(PropError::NoDataForStatistic { statistic }) => {
                warn!("No defense data for {}", statistic);
                DefenseOutcome::NoData { statistic }
            }
            Err(e) => return Err(e),
        };

        info!(
            "{} line {:.1}: estimate {:.2} ({}), hit {:.1}%, {}",
            statistic,
            request.line,
            projection.estimate,
            method,
            probability.hit_probability_percent,
            probability.recommendation
        );

        Ok(PropReport {
            statistic: statistic.name().to_string(),
            line: request.line,
            projection,
            spread,
            probability,
            historical_hit_rate: hit_rate,
            defense,
        })
    }

    /// Defense ranking for a statistic
    ///
    /// A snapshot published under the statistic's name is ranked directly.
    /// A combined statistic otherwise uses the additive composite of its
    /// component snapshots. `NoDataForStatistic` when neither exists.
    pub fn defense_ranking(
        &self,
        statistic: &StatSelector,
        snapshots: &[TeamSnapshot],
    ) -> Result<Ranking, PropError> {
        let find = |name: &str| {
            snapshots
                .iter()
                .find(|snapshot| snapshot.statistic.eq_ignore_ascii_case(name) && !snapshot.is_empty())
        };
        let no_data = || PropError::NoDataForStatistic { statistic: statistic.name().to_string() };

        if let Some(snapshot) = find(statistic.name()) {
            return Ok(self.rank(snapshot));
        }
        if !statistic.is_combined() {
            return Err(no_data());
        }

        let rankings: Vec<Ranking> =
            statistic.components().into_iter().filter_map(find).map(|s| self.rank(s)).collect();
        if rankings.is_empty() {
            return Err(no_data());
        }
        let composite = self.composite_rank(statistic, &rankings);
        Ok(composite.to_ranking())
    }
}
