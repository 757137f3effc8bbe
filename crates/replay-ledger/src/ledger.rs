//! The per-player resource ledger.
//!
//! A [`ResourceLedger`] is a sequential state machine: it starts from a
//! seeded balance at time 0 and appends one [`ResourceSnapshot`] for every
//! event it is fed. A [`LedgerBook`] holds one ledger per roster player.
//!
//! # Design
//!
//! - **Append-only**: snapshots are never modified or removed.
//! - **Ordered**: events are applied in the order received; nothing is
//!   re-sorted.
//! - **Permissive**: balances may go negative unless clamping is enabled.
//! - **Saturating**: arithmetic never wraps.

use std::collections::BTreeMap;

use replay_types::{CanonicalKind, PlayerResources, ResourceSnapshot};

use crate::cost::CostTable;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Seed balance and clamping policy shared by every ledger in a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSettings {
    /// Minerals at time 0.
    pub initial_minerals: i64,
    /// Gas at time 0.
    pub initial_gas: i64,
    /// Floor balances at zero instead of letting them go negative.
    pub clamp_at_zero: bool,
}

impl LedgerSettings {
    /// The seeded snapshot every ledger starts from.
    pub const fn seed(&self) -> ResourceSnapshot {
        ResourceSnapshot {
            time: 0,
            minerals: self.initial_minerals,
            gas: self.initial_gas,
        }
    }
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            initial_minerals: 50,
            initial_gas: 0,
            clamp_at_zero: false,
        }
    }
}

// ---------------------------------------------------------------------------
// ResourceLedger
// ---------------------------------------------------------------------------

/// Balance history of one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLedger {
    player: String,
    clamp_at_zero: bool,
    current: ResourceSnapshot,
    snapshots: Vec<ResourceSnapshot>,
}

impl ResourceLedger {
    /// Create a ledger holding only the seeded snapshot.
    pub fn new(player: impl Into<String>, settings: &LedgerSettings) -> Self {
        let seed = settings.seed();
        Self {
            player: player.into(),
            clamp_at_zero: settings.clamp_at_zero,
            current: seed,
            snapshots: vec![seed],
        }
    }

    /// The player this ledger belongs to.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// The latest balance.
    pub const fn balance(&self) -> ResourceSnapshot {
        self.current
    }

    /// Every snapshot, seeded one first.
    pub fn snapshots(&self) -> &[ResourceSnapshot] {
        &self.snapshots
    }

    /// Number of snapshots, including the seeded one.
    pub const fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: a ledger holds at least its seeded snapshot.
    pub const fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Apply one event and append the resulting snapshot.
    ///
    /// Unmodeled actions cost nothing; the snapshot still records the
    /// event's time with the balance carried forward.
    pub fn apply(
        &mut self,
        time: u32,
        kind: CanonicalKind,
        action: &str,
        costs: &CostTable,
    ) -> ResourceSnapshot {
        let cost = costs.lookup(kind, action).unwrap_or_else(|| {
            tracing::trace!(
                player = %self.player,
                kind = %kind,
                action,
                "unmodeled action, balance carried forward"
            );
            crate::Cost::default()
        });

        let mut minerals = self.current.minerals.saturating_sub(cost.minerals);
        let mut gas = self.current.gas.saturating_sub(cost.gas);
        if self.clamp_at_zero {
            minerals = minerals.max(0);
            gas = gas.max(0);
        }

        let snapshot = ResourceSnapshot {
            time,
            minerals,
            gas,
        };
        self.current = snapshot;
        self.snapshots.push(snapshot);
        snapshot
    }

    /// Convert into the view the rendering layer consumes.
    pub fn into_resources(self) -> PlayerResources {
        PlayerResources {
            player: self.player,
            snapshots: self.snapshots,
        }
    }
}

// ---------------------------------------------------------------------------
// LedgerBook
// ---------------------------------------------------------------------------

/// One ledger per roster player, in roster order.
///
/// Events naming a player outside the roster are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerBook {
    ledgers: Vec<ResourceLedger>,
    index: BTreeMap<String, usize>,
}

impl LedgerBook {
    /// Open a seeded ledger for each distinct player name.
    ///
    /// When a name repeats, the first occurrence keeps its position.
    pub fn new<'a>(players: impl IntoIterator<Item = &'a str>, settings: &LedgerSettings) -> Self {
        let mut book = Self::default();
        for name in players {
            if book.index.contains_key(name) {
                continue;
            }
            book.index.insert(name.to_owned(), book.ledgers.len());
            book.ledgers.push(ResourceLedger::new(name, settings));
        }
        book
    }

    /// The ledger of `player`, if rostered.
    pub fn get(&self, player: &str) -> Option<&ResourceLedger> {
        let idx = *self.index.get(player)?;
        self.ledgers.get(idx)
    }

    /// Apply one event to `player`'s ledger.
    ///
    /// Returns `None` when the player is not on the roster.
    pub fn record(
        &mut self,
        player: &str,
        time: u32,
        kind: CanonicalKind,
        action: &str,
        costs: &CostTable,
    ) -> Option<ResourceSnapshot> {
        let idx = *self.index.get(player)?;
        let ledger = self.ledgers.get_mut(idx)?;
        Some(ledger.apply(time, kind, action, costs))
    }

    /// Number of ledgers.
    pub const fn len(&self) -> usize {
        self.ledgers.len()
    }

    /// Whether the roster was empty.
    pub const fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }

    /// Convert into per-player views, in roster order.
    pub fn into_resources(self) -> Vec<PlayerResources> {
        self.ledgers
            .into_iter()
            .map(ResourceLedger::into_resources)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::Cost;

    fn settings() -> LedgerSettings {
        LedgerSettings::default()
    }

    #[test]
    fn new_ledger_holds_seed_only() {
        let ledger = ResourceLedger::new("A", &settings());
        assert_eq!(ledger.len(), 1);
        assert!(!ledger.is_empty());
        assert_eq!(
            ledger.balance(),
            ResourceSnapshot {
                time: 0,
                minerals: 50,
                gas: 0
            }
        );
    }

    #[test]
    fn modeled_action_debits_balance() {
        let mut ledger = ResourceLedger::new("A", &settings());
        let snap = ledger.apply(10, CanonicalKind::Train, "Marine", &CostTable::default());
        assert_eq!(snap.time, 10);
        assert_eq!(snap.minerals, 0);
        assert_eq!(snap.gas, 0);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn unmodeled_action_carries_balance_forward() {
        let mut ledger = ResourceLedger::new("A", &settings());
        let snap = ledger.apply(7, CanonicalKind::Build, "Barracks", &CostTable::default());
        assert_eq!(
            snap,
            ResourceSnapshot {
                time: 7,
                minerals: 50,
                gas: 0
            }
        );
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn balance_goes_negative_by_default() {
        let mut ledger = ResourceLedger::new("A", &settings());
        let costs = CostTable::default();
        ledger.apply(10, CanonicalKind::Train, "Marine", &costs);
        let snap = ledger.apply(20, CanonicalKind::Train, "Marine", &costs);
        assert_eq!(snap.minerals, -50);
    }

    #[test]
    fn clamping_floors_at_zero() {
        let clamped = LedgerSettings {
            clamp_at_zero: true,
            ..LedgerSettings::default()
        };
        let mut ledger = ResourceLedger::new("A", &clamped);
        let mut costs = CostTable::empty();
        costs.insert(CanonicalKind::Tech, "Lurker Aspect", Cost::new(200, 200));
        let snap = ledger.apply(30, CanonicalKind::Tech, "Lurker Aspect", &costs);
        assert_eq!(snap.minerals, 0);
        assert_eq!(snap.gas, 0);
    }

    #[test]
    fn saturating_arithmetic_never_wraps() {
        let mut ledger = ResourceLedger::new("A", &settings());
        let mut costs = CostTable::empty();
        let carrier = Cost::new(i64::MAX, i64::MAX);
        costs.insert(CanonicalKind::Train, "Carrier", carrier);
        ledger.apply(1, CanonicalKind::Train, "Carrier", &costs);
        let snap = ledger.apply(2, CanonicalKind::Train, "Carrier", &costs);
        assert_eq!(snap.minerals, i64::MIN);
    }

    #[test]
    fn seed_survives_any_history() {
        let mut ledger = ResourceLedger::new("A", &settings());
        let costs = CostTable::default();
        for t in 1..20 {
            ledger.apply(t, CanonicalKind::Train, "Marine", &costs);
        }
        assert_eq!(ledger.snapshots().first().copied(), Some(settings().seed()));
    }

    #[test]
    fn book_ignores_unknown_players() {
        let mut book = LedgerBook::new(["A", "B"], &settings());
        let costs = CostTable::default();
        let unknown = book.record("C", 5, CanonicalKind::Train, "Marine", &costs);
        assert!(unknown.is_none());
        let known = book.record("A", 5, CanonicalKind::Train, "Marine", &costs);
        assert!(known.is_some());
        assert_eq!(book.get("A").map(ResourceLedger::len), Some(2));
        assert_eq!(book.get("B").map(ResourceLedger::len), Some(1));
    }

    #[test]
    fn book_deduplicates_roster_keeping_first_position() {
        let book = LedgerBook::new(["A", "B", "A"], &settings());
        assert_eq!(book.len(), 2);
        let players: Vec<String> = book
            .into_resources()
            .into_iter()
            .map(|r| r.player)
            .collect();
        assert_eq!(players, vec!["A".to_owned(), "B".to_owned()]);
    }

    #[test]
    fn empty_roster_yields_empty_book() {
        let book = LedgerBook::new(std::iter::empty(), &settings());
        assert!(book.is_empty());
        assert!(book.into_resources().is_empty());
    }
}
