//! Event aggregation and time-series synthesis for replay analysis.
//!
//! Takes the flat, time-ordered event log of one match and produces the
//! derived views a dashboard renders: cumulative counts over time, resource
//! balance curves, trained-unit proportions, and a paginated build log.
//!
//! # Modules
//!
//! - [`time`] -- `MM:SS` text to seconds and back.
//! - [`classify`] -- Raw kind tags to a closed classification.
//! - [`bucket`] -- Per-player grouping of the log into five sequences.
//! - [`cumulative`] -- The shared time axis and cumulative counts.
//! - [`resources`] -- Ledger replay per player.
//! - [`tally`] -- Trained-unit proportions with stable colors.
//! - [`palette`] -- Color resolution behind the [`ColorResolver`] trait.
//! - [`paginate`] -- The build log, split into fixed-size pages.
//! - [`config`] -- `replay-config.yaml` loading and validation.
//! - [`aggregate`] -- The pure entry point and its memo cache.
//!
//! # Usage
//!
//! ```
//! use replay_core::{EngineConfig, aggregate};
//! use replay_types::{AnalysisResult, Event, Player};
//!
//! let result = AnalysisResult {
//!     players: vec![Player::named("A")],
//!     events: vec![Event::new("0:10", "A", "Marine", "Train")],
//!     ..AnalysisResult::default()
//! };
//! let views = aggregate(&result, &EngineConfig::default());
//!
//! assert_eq!(views.cumulative.axis.len(), 11);
//! assert_eq!(views.production.len(), 1);
//! ```

pub mod aggregate;
pub mod bucket;
pub mod classify;
pub mod config;
pub mod cumulative;
pub mod paginate;
pub mod palette;
pub mod resources;
pub mod tally;
pub mod time;

pub use aggregate::{AggregationMemo, aggregate, aggregate_with};
pub use bucket::{BucketedLog, PlayerBuckets, bucket_events};
pub use classify::{classify, is_build_related};
pub use config::{ConfigError, EngineConfig};
pub use cumulative::{TimeAxis, build_cumulative_view, cumulative_counts};
pub use paginate::{BuildLog, DEFAULT_PAGE_SIZE};
pub use palette::{ColorResolver, FALLBACK_HEX, NamedPalette, PaletteEntry};
pub use resources::replay_ledgers;
pub use tally::tally_production;
pub use time::{axis_label, to_clock, to_display, to_seconds};
