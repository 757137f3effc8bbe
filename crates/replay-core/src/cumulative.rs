//! Cumulative occurrence counts on a shared time axis.
//!
//! Each series becomes a step function: at axis point `t` it holds the
//! number of entries with `time <= t`. The counter only ever increments,
//! so every output is non-decreasing and exactly as long as the axis.

use replay_types::{BucketKind, CumulativeSeries, CumulativeView};

use crate::bucket::{BucketedLog, Occurrence};
use crate::palette::ColorResolver;
use crate::time::axis_label;

// ---------------------------------------------------------------------------
// TimeAxis
// ---------------------------------------------------------------------------

/// Contiguous integer seconds `0..=max`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeAxis {
    points: Vec<u32>,
}

impl TimeAxis {
    /// Axis from 0 through `max_time` inclusive.
    ///
    /// A match with no relevant events passes `0` and gets the single
    /// point `[0]`.
    pub fn from_max(max_time: u32) -> Self {
        Self {
            points: (0..=max_time).collect(),
        }
    }

    /// Axis from 0 through `max_time`, cut off at `cap`.
    ///
    /// Entries later than `cap` fall past the last point and are not
    /// counted by [`cumulative_counts`].
    pub fn bounded(max_time: u32, cap: u32) -> Self {
        Self::from_max(max_time.min(cap))
    }

    /// The axis points, ascending.
    pub fn points(&self) -> &[u32] {
        &self.points
    }

    /// Number of points. Never zero.
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: the axis holds at least second 0.
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last point on the axis.
    pub fn max(&self) -> u32 {
        self.points.last().copied().unwrap_or(0)
    }

    /// Tick label for every point.
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|&t| axis_label(t)).collect()
    }
}

// ---------------------------------------------------------------------------
// Counting
// ---------------------------------------------------------------------------

/// Count of entries with `time <= t` for every point `t` of `axis`.
///
/// Single forward sweep, O(axis + series). Input that is not time-ordered
/// is sorted on a copy first, so the result is correct either way.
pub fn cumulative_counts(series: &[Occurrence<'_>], axis: &TimeAxis) -> Vec<u32> {
    let mut times: Vec<u32> = series.iter().map(|o| o.time).collect();
    if !times.is_sorted() {
        times.sort_unstable();
    }

    let mut pending = times.into_iter().peekable();
    let mut count: u32 = 0;

    axis.points()
        .iter()
        .map(|&t| {
            while pending.next_if(|&time| time <= t).is_some() {
                count = count.saturating_add(1);
            }
            count
        })
        .collect()
}

/// Build the cumulative view of every rostered player.
///
/// Units and buildings are always emitted. Upgrades, techs, and cancels are
/// emitted only when non-empty unless `include_empty` is set. Every series
/// of a player shares the player's resolved color.
pub fn build_cumulative_view<R>(
    log: &BucketedLog<'_>,
    axis: &TimeAxis,
    include_empty: bool,
    resolver: &R,
) -> CumulativeView
where
    R: ColorResolver + ?Sized,
{
    let mut series = Vec::new();

    for buckets in log.players() {
        let color = resolver.resolve_or_fallback(&buckets.player().color.name);
        for kind in BucketKind::ALL {
            let entries = buckets.series(kind);
            if entries.is_empty() && !include_empty && !kind.always_shown() {
                continue;
            }
            series.push(CumulativeSeries {
                player: buckets.name().to_owned(),
                kind,
                label: format!("{} {}", buckets.name(), kind.label()),
                color: color.to_owned(),
                counts: cumulative_counts(entries, axis),
            });
        }
    }

    CumulativeView {
        axis: axis.points().to_vec(),
        labels: axis.labels(),
        series,
    }
}
