//! Grouping of the event log by player, then by bucket.
//!
//! A single pass over the log classifies each event, drops the ones that
//! are unaggregated or name a player outside the roster, and appends the
//! rest to the owning player's sequences in log order. Nothing is
//! re-sorted. The pass also records the largest timestamp it kept, which
//! defines the shared time axis.

use std::collections::BTreeMap;

use replay_types::{BucketKind, CanonicalKind, Event, Player};

use crate::classify::classify;
use crate::time::to_seconds;

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

/// One `(time, action)` occurrence inside a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence<'a> {
    /// Game time in seconds.
    pub time: u32,
    /// Action label.
    pub action: &'a str,
}

/// One canonical event in a player's log-ordered timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimelineEntry<'a> {
    /// Game time in seconds.
    pub time: u32,
    /// Canonical kind.
    pub kind: CanonicalKind,
    /// Action label.
    pub action: &'a str,
}

/// The bucket a canonical kind is grouped into.
pub const fn bucket_for(kind: CanonicalKind) -> BucketKind {
    match kind {
        CanonicalKind::Train => BucketKind::Units,
        CanonicalKind::Build | CanonicalKind::BuildingMorph => BucketKind::Buildings,
        CanonicalKind::Upgrade => BucketKind::Upgrades,
        CanonicalKind::Tech => BucketKind::Techs,
        CanonicalKind::CancelTrain => BucketKind::Cancels,
    }
}

/// The five sequences of one rostered player, plus their merged timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerBuckets<'a> {
    player: &'a Player,
    /// Trainings.
    pub units: Vec<Occurrence<'a>>,
    /// Builds and building morphs.
    pub buildings: Vec<Occurrence<'a>>,
    /// Upgrades.
    pub upgrades: Vec<Occurrence<'a>>,
    /// Techs.
    pub techs: Vec<Occurrence<'a>>,
    /// Training cancellations.
    pub cancels: Vec<Occurrence<'a>>,
    /// Every canonical event of the player, in log order.
    pub timeline: Vec<TimelineEntry<'a>>,
}

impl<'a> PlayerBuckets<'a> {
    /// Empty buckets for `player`.
    pub const fn new(player: &'a Player) -> Self {
        Self {
            player,
            units: Vec::new(),
            buildings: Vec::new(),
            upgrades: Vec::new(),
            techs: Vec::new(),
            cancels: Vec::new(),
            timeline: Vec::new(),
        }
    }

    /// The roster entry these buckets belong to.
    pub const fn player(&self) -> &'a Player {
        self.player
    }

    /// The player's name.
    pub fn name(&self) -> &'a str {
        self.player.name.as_str()
    }

    /// The sequence backing `kind`.
    pub fn series(&self, kind: BucketKind) -> &[Occurrence<'a>] {
        match kind {
            BucketKind::Units => &self.units,
            BucketKind::Buildings => &self.buildings,
            BucketKind::Upgrades => &self.upgrades,
            BucketKind::Techs => &self.techs,
            BucketKind::Cancels => &self.cancels,
        }
    }

    fn series_mut(&mut self, kind: BucketKind) -> &mut Vec<Occurrence<'a>> {
        match kind {
            BucketKind::Units => &mut self.units,
            BucketKind::Buildings => &mut self.buildings,
            BucketKind::Upgrades => &mut self.upgrades,
            BucketKind::Techs => &mut self.techs,
            BucketKind::Cancels => &mut self.cancels,
        }
    }

    /// Append one canonical event.
    pub fn push(&mut self, time: u32, kind: CanonicalKind, action: &'a str) {
        self.series_mut(bucket_for(kind))
            .push(Occurrence { time, action });
        self.timeline.push(TimelineEntry { time, kind, action });
    }

    /// Whether the player has no canonical events.
    pub const fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }
}

// ---------------------------------------------------------------------------
// BucketedLog
// ---------------------------------------------------------------------------

/// The bucketed event log of one match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketedLog<'a> {
    players: Vec<PlayerBuckets<'a>>,
    index: BTreeMap<&'a str, usize>,
    max_time: u32,
    dropped_unaggregated: usize,
    dropped_unknown_player: usize,
}

impl<'a> BucketedLog<'a> {
    /// Empty buckets for every distinct roster name.
    ///
    /// When a name repeats, the first roster entry wins.
    pub fn with_roster(players: &'a [Player]) -> Self {
        let mut log = Self::default();
        for player in players {
            if log.index.contains_key(player.name.as_str()) {
                tracing::debug!(player = %player.name, "duplicate roster name ignored");
                continue;
            }
            log.index.insert(player.name.as_str(), log.players.len());
            log.players.push(PlayerBuckets::new(player));
        }
        log
    }

    /// Classify and append one event.
    ///
    /// Returns `false` when the event was dropped.
    pub fn ingest(&mut self, event: &'a Event) -> bool {
        let Some(kind) = classify(&event.kind).aggregated() else {
            self.dropped_unaggregated = self.dropped_unaggregated.saturating_add(1);
            return false;
        };
        let Some(buckets) = self
            .index
            .get(event.player.as_str())
            .copied()
            .and_then(|idx| self.players.get_mut(idx))
        else {
            tracing::trace!(
                player = %event.player,
                action = %event.action,
                "event for unknown player dropped"
            );
            self.dropped_unknown_player = self.dropped_unknown_player.saturating_add(1);
            return false;
        };

        let time = to_seconds(&event.time);
        buckets.push(time, kind, &event.action);
        self.max_time = self.max_time.max(time);
        true
    }

    /// Buckets in roster order.
    pub fn players(&self) -> &[PlayerBuckets<'a>] {
        &self.players
    }

    /// Buckets of `name`, if rostered.
    pub fn get(&self, name: &str) -> Option<&PlayerBuckets<'a>> {
        let idx = *self.index.get(name)?;
        self.players.get(idx)
    }

    /// Largest kept timestamp, or 0 when nothing was kept.
    pub const fn max_time(&self) -> u32 {
        self.max_time
    }

    /// Number of kept events across all players.
    pub fn kept(&self) -> usize {
        self.players.iter().map(|p| p.timeline.len()).sum()
    }

    /// Events dropped because their kind is not aggregated.
    pub const fn dropped_unaggregated(&self) -> usize {
        self.dropped_unaggregated
    }

    /// Canonical events dropped because their player is not rostered.
    pub const fn dropped_unknown_player(&self) -> usize {
        self.dropped_unknown_player
    }
}

/// Bucket `events` for the players in `roster`. O(events).
pub fn bucket_events<'a>(roster: &'a [Player], events: &'a [Event]) -> BucketedLog<'a> {
    let mut log = BucketedLog::with_roster(roster);
    for event in events {
        log.ingest(event);
    }
    log
}
