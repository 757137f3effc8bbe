//! Step resampling of a balance curve onto a time axis.
//!
//! Ledgers emit one snapshot per event, not per axis point. Consumers that
//! want axis-aligned data hold the last snapshot at or before each point
//! until the next one arrives.

use replay_types::ResourceSnapshot;

/// Resample `snapshots` onto `axis` by carrying the last value forward.
///
/// Both inputs must be time-ascending. Several snapshots sharing a second
/// collapse to the last of them. Axis points before the first snapshot
/// read as a zero balance.
pub fn resample(snapshots: &[ResourceSnapshot], axis: &[u32]) -> Vec<ResourceSnapshot> {
    let mut pending = snapshots.iter().peekable();
    let mut held = ResourceSnapshot::default();

    axis.iter()
        .map(|&t| {
            while let Some(next) = pending.next_if(|s| s.time <= t) {
                held = *next;
            }
            ResourceSnapshot { time: t, ..held }
        })
        .collect()
}
