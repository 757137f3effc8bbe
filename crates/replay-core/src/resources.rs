//! Balance curves for every rostered player.

use replay_ledger::{CostTable, LedgerBook, LedgerSettings};
use replay_types::PlayerResources;

use crate::bucket::{BucketedLog, PlayerBuckets};

/// Replay each player's canonical timeline through a seeded ledger.
///
/// Players are processed in roster order and events in log order. Every
/// player gets the seeded snapshot at time 0 even with an empty timeline.
pub fn replay_ledgers(
    log: &BucketedLog<'_>,
    costs: &CostTable,
    settings: &LedgerSettings,
) -> Vec<PlayerResources> {
    let mut book = LedgerBook::new(log.players().iter().map(PlayerBuckets::name), settings);

    for buckets in log.players() {
        for entry in &buckets.timeline {
            book.record(buckets.name(), entry.time, entry.kind, entry.action, costs);
        }
    }

    book.into_resources()
}
