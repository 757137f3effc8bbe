//! The aggregation entry point.
//!
//! [`aggregate`] turns one [`AnalysisResult`] into every derived view in a
//! single synchronous pass. It is pure: equal inputs give equal outputs,
//! and the only side effects are `tracing` events. [`AggregationMemo`]
//! caches the last pass for callers that re-render often.

use replay_types::{AnalysisResult, DerivedViews, MatchOverview, PlayerSummary};

use crate::bucket::{BucketedLog, bucket_events};
use crate::config::EngineConfig;
use crate::cumulative::{TimeAxis, build_cumulative_view};
use crate::paginate::BuildLog;
use crate::palette::ColorResolver;
use crate::resources::replay_ledgers;
use crate::tally::tally_production;

/// Aggregate with the palette from `config`.
pub fn aggregate(result: &AnalysisResult, config: &EngineConfig) -> DerivedViews {
    aggregate_with(result, config, &config.palette)
}

/// Aggregate with an injected color resolver.
///
/// The build log in the output is its first page; callers wanting other
/// pages build a [`BuildLog`] over the same events and roster.
pub fn aggregate_with<R>(
    result: &AnalysisResult,
    config: &EngineConfig,
    resolver: &R,
) -> DerivedViews
where
    R: ColorResolver + ?Sized,
{
    let log = bucket_events(&result.players, &result.events);
    let axis = TimeAxis::bounded(log.max_time(), config.cumulative.max_axis_seconds);
    let build_log = BuildLog::new(&result.events, &result.players, config.pagination.page_size);

    if axis.max() < log.max_time() {
        tracing::warn!(
            max_time = log.max_time(),
            cap = config.cumulative.max_axis_seconds,
            "time axis cut off at configured maximum"
        );
    }

    tracing::debug!(
        map = %result.map_name,
        players = log.players().len(),
        kept = log.kept(),
        dropped_unaggregated = log.dropped_unaggregated(),
        dropped_unknown_player = log.dropped_unknown_player(),
        max_time = log.max_time(),
        build_log_len = build_log.len(),
        "aggregated replay events"
    );

    DerivedViews {
        overview: match_overview(result, &log, resolver),
        cumulative: build_cumulative_view(
            &log,
            &axis,
            config.cumulative.include_empty_series,
            resolver,
        ),
        resources: replay_ledgers(&log, &config.ledger.cost_table(), &config.ledger.settings()),
        production: tally_production(&log, resolver),
        build_log: build_log.page(1),
    }
}

fn match_overview<R>(result: &AnalysisResult, log: &BucketedLog<'_>, resolver: &R) -> MatchOverview
where
    R: ColorResolver + ?Sized,
{
    let players = log
        .players()
        .iter()
        .map(|buckets| {
            let player = buckets.player();
            PlayerSummary {
                name: player.name.clone(),
                race: player.race.name.clone(),
                team: player.team,
                controller: player.player_type.name.clone(),
                color_name: player.color.name.clone(),
                color_hex: resolver.resolve_or_fallback(&player.color.name).to_owned(),
                observer: player.observer,
            }
        })
        .collect();

    MatchOverview {
        game_version: result.game_version.clone(),
        map_name: result.map_name.clone(),
        players,
    }
}

// ---------------------------------------------------------------------------
// Memoization
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct MemoEntry {
    input: AnalysisResult,
    config: EngineConfig,
    views: DerivedViews,
}

impl MemoEntry {
    fn matches(&self, input: &AnalysisResult, config: &EngineConfig) -> bool {
        self.input == *input && self.config == *config
    }
}

/// Cache of the most recent aggregation, keyed by structural equality.
#[derive(Debug, Clone, Default)]
pub struct AggregationMemo {
    entry: Option<MemoEntry>,
    computations: usize,
}

impl AggregationMemo {
    /// An empty cache.
    pub const fn new() -> Self {
        Self {
            entry: None,
            computations: 0,
        }
    }

    /// Views for `(input, config)`, recomputed only when either differs
    /// from the cached pair.
    pub fn get_or_compute(
        &mut self,
        input: &AnalysisResult,
        config: &EngineConfig,
    ) -> &DerivedViews {
        let entry = match self.entry.take() {
            Some(cached) if cached.matches(input, config) => cached,
            _ => {
                self.computations = self.computations.saturating_add(1);
                MemoEntry {
                    input: input.clone(),
                    config: config.clone(),
                    views: aggregate(input, config),
                }
            }
        };
        &self.entry.insert(entry).views
    }

    /// How many passes actually ran.
    pub const fn computations(&self) -> usize {
        self.computations
    }

    /// Drop the cached entry.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}
