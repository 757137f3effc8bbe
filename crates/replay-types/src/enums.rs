//! Enumeration types for replay analysis.
//!
//! The upstream parser tags every event with a free-text kind. The engine
//! recognizes a closed set of canonical kinds for aggregation and a second
//! set of interaction-only kinds that are known but never aggregated.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Canonical kinds
// ---------------------------------------------------------------------------

/// An event kind that participates in aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum CanonicalKind {
    /// A structure was placed.
    Build,
    /// A unit was queued for training.
    Train,
    /// An existing structure morphed into another.
    BuildingMorph,
    /// A queued training was cancelled.
    CancelTrain,
    /// An upgrade level was started.
    Upgrade,
    /// A tech was researched.
    Tech,
}

impl CanonicalKind {
    /// Every canonical kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Build,
        Self::Train,
        Self::BuildingMorph,
        Self::CancelTrain,
        Self::Upgrade,
        Self::Tech,
    ];

    /// The exact tag the upstream parser uses for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Build => "Build",
            Self::Train => "Train",
            Self::BuildingMorph => "BuildingMorph",
            Self::CancelTrain => "CancelTrain",
            Self::Upgrade => "Upgrade",
            Self::Tech => "Tech",
        }
    }
}

impl core::fmt::Display for CanonicalKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Interaction kinds
// ---------------------------------------------------------------------------

/// A recognized event kind that only reflects player interaction.
///
/// These survive in the raw log but never feed a numeric view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum InteractionKind {
    /// A unit order (move, attack, ...).
    Order,
    /// A control group assignment or recall.
    Hotkey,
    /// A selection change.
    Select,
    /// A flying structure landed.
    Land,
    /// A structure lifted off.
    LiftOff,
    /// An in-game chat message.
    Chat,
}

impl InteractionKind {
    /// Every interaction kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Order,
        Self::Hotkey,
        Self::Select,
        Self::Land,
        Self::LiftOff,
        Self::Chat,
    ];

    /// The exact tag the upstream parser uses for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Order => "Order",
            Self::Hotkey => "Hotkey",
            Self::Select => "Select",
            Self::Land => "Land",
            Self::LiftOff => "LiftOff",
            Self::Chat => "Chat",
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// The total classification of a raw event kind tag.
///
/// Only [`EventClass::Canonical`] is aggregated. The other two variants are
/// the explicit "ignored" outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventClass {
    /// A kind the engine aggregates over.
    Canonical(CanonicalKind),
    /// A known interaction-only kind.
    Interaction(InteractionKind),
    /// A tag the engine does not know.
    Unrecognized,
}

impl EventClass {
    /// Return the canonical kind if this class is aggregated.
    pub const fn aggregated(self) -> Option<CanonicalKind> {
        match self {
            Self::Canonical(kind) => Some(kind),
            Self::Interaction(_) | Self::Unrecognized => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

/// One of the five per-player sequences the bucketer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum BucketKind {
    /// Trained units.
    Units,
    /// Placed or morphed structures.
    Buildings,
    /// Upgrades started.
    Upgrades,
    /// Techs researched.
    Techs,
    /// Cancelled trainings.
    Cancels,
}

impl BucketKind {
    /// Every bucket, in the order views emit them.
    pub const ALL: [Self; 5] = [
        Self::Units,
        Self::Buildings,
        Self::Upgrades,
        Self::Techs,
        Self::Cancels,
    ];

    /// Legend suffix shown next to the player name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Units => "Units Trained",
            Self::Buildings => "Buildings Constructed",
            Self::Upgrades => "Upgrades",
            Self::Techs => "Techs Researched",
            Self::Cancels => "Train Cancels",
        }
    }

    /// Whether the cumulative view always emits this bucket, even when empty.
    pub const fn always_shown(self) -> bool {
        matches!(self, Self::Units | Self::Buildings)
    }
}
