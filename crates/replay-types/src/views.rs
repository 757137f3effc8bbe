//! Derived views handed to the rendering layer.
//!
//! Every view is plain data: one struct per chart, `camelCase` on the wire,
//! with TypeScript bindings generated by `ts-rs`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::BucketKind;
use crate::structs::Event;

// ---------------------------------------------------------------------------
// Cumulative view
// ---------------------------------------------------------------------------

/// Cumulative occurrence counts for one (player, bucket) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct CumulativeSeries {
    /// Owning player.
    pub player: String,
    /// Which bucket the counts come from.
    pub kind: BucketKind,
    /// Legend label, e.g. `"A Units Trained"`.
    pub label: String,
    /// Hex color of the owning player.
    pub color: String,
    /// One count per axis point, non-decreasing.
    pub counts: Vec<u32>,
}

/// Cumulative counts of every player's buckets on a shared time axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct CumulativeView {
    /// Contiguous seconds `0..=max_time`.
    pub axis: Vec<u32>,
    /// Tick label for each axis point.
    pub labels: Vec<String>,
    /// Series in roster order, then bucket order.
    pub series: Vec<CumulativeSeries>,
}

// ---------------------------------------------------------------------------
// Resource view
// ---------------------------------------------------------------------------

/// A player's resource balance at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct ResourceSnapshot {
    /// Game time in seconds.
    pub time: u32,
    /// Mineral balance. May be negative.
    #[ts(type = "number")]
    pub minerals: i64,
    /// Gas balance. May be negative.
    #[ts(type = "number")]
    pub gas: i64,
}

/// A player's balance curve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct PlayerResources {
    /// Owning player.
    pub player: String,
    /// Seeded snapshot first, then one per processed event.
    pub snapshots: Vec<ResourceSnapshot>,
}

// ---------------------------------------------------------------------------
// Production view
// ---------------------------------------------------------------------------

/// A player's trained-unit proportions, ready for a pie chart.
///
/// `labels`, `counts`, and `colors` are parallel lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct PlayerProduction {
    /// Owning player.
    pub player: String,
    /// Distinct trained-unit labels in first-appearance order.
    pub labels: Vec<String>,
    /// Occurrences of each label.
    pub counts: Vec<u32>,
    /// Hex color of each label, stable across players.
    pub colors: Vec<String>,
}

impl PlayerProduction {
    /// Whether the player trained nothing.
    pub const fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Build log
// ---------------------------------------------------------------------------

/// One page of the build-related event log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct BuildLogPage {
    /// 1-indexed page number that was requested.
    pub page: usize,
    /// Total number of pages.
    pub page_count: usize,
    /// Events on this page, in log order.
    pub items: Vec<Event>,
}

impl BuildLogPage {
    /// Events on this page that belong to `player`.
    pub fn items_for<'a>(&'a self, player: &'a str) -> impl Iterator<Item = &'a Event> + 'a {
        self.items.iter().filter(move |e| e.player == player)
    }
}

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

/// Roster entry with its display color resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    /// Player name.
    pub name: String,
    /// Race name.
    pub race: String,
    /// Team number.
    pub team: u32,
    /// Controller type name.
    pub controller: String,
    /// Color name as reported upstream.
    pub color_name: String,
    /// Resolved hex color.
    pub color_hex: String,
    /// Whether the slot is an observer.
    pub observer: bool,
}

/// Match-level metadata and roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct MatchOverview {
    /// Game client version string.
    pub game_version: String,
    /// Map title.
    pub map_name: String,
    /// Roster in upstream order, duplicates removed.
    pub players: Vec<PlayerSummary>,
}

// ---------------------------------------------------------------------------
// DerivedViews
// ---------------------------------------------------------------------------

/// Everything one aggregation pass produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct DerivedViews {
    /// Match metadata and roster.
    pub overview: MatchOverview,
    /// Cumulative counts over time.
    pub cumulative: CumulativeView,
    /// Resource balance curves, one per roster player.
    pub resources: Vec<PlayerResources>,
    /// Trained-unit proportions, one per roster player.
    pub production: Vec<PlayerProduction>,
    /// First page of the build log.
    pub build_log: BuildLogPage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_log_page_uses_page_count_key() {
        let page = BuildLogPage {
            page: 1,
            page_count: 0,
            items: Vec::new(),
        };
        let value = serde_json::to_value(&page).unwrap_or_default();
        let page_count = value.get("pageCount").and_then(serde_json::Value::as_u64);
        assert_eq!(page_count, Some(0));
    }

    #[test]
    fn items_for_filters_by_player() {
        let page = BuildLogPage {
            page: 1,
            page_count: 1,
            items: vec![
                Event::new("0:10", "A", "Marine", "Train"),
                Event::new("0:12", "B", "Zergling", "Train"),
                Event::new("0:20", "A", "Barracks", "Build"),
            ],
        };
        let actions: Vec<&str> = page.items_for("A").map(|e| e.action.as_str()).collect();
        assert_eq!(actions, vec!["Marine", "Barracks"]);
    }

    #[test]
    fn snapshot_serializes_signed_balances() {
        let snapshot = ResourceSnapshot {
            time: 12,
            minerals: -50,
            gas: 0,
        };
        let value = serde_json::to_value(snapshot).unwrap_or_default();
        let minerals = value.get("minerals").and_then(serde_json::Value::as_i64);
        assert_eq!(minerals, Some(-50));
    }
}
