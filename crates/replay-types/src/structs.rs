//! Input contract received from the remote replay parser.
//!
//! Field names follow the upstream JSON exactly: the top-level result is
//! `camelCase` while player records keep the parser's `PascalCase` keys.
//! Every field except the player name defaults when absent so a partial
//! payload still deserializes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// The display color assigned to a player slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlayerColor {
    /// Color name, resolved to hex by a palette.
    #[serde(rename = "Name")]
    #[serde(default)]
    pub name: String,
    /// Parser-assigned color identifier.
    #[serde(rename = "ID")]
    #[serde(default)]
    pub id: u32,
    /// Packed RGB value as reported by the parser.
    #[serde(rename = "RGB")]
    #[serde(default)]
    pub rgb: u32,
}

/// The race a player picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlayerRace {
    /// Full race name.
    #[serde(rename = "Name")]
    #[serde(default)]
    pub name: String,
    /// Parser-assigned race identifier.
    #[serde(rename = "ID")]
    #[serde(default)]
    pub id: u32,
    /// Abbreviated race name.
    #[serde(rename = "ShortName")]
    #[serde(default)]
    pub short_name: String,
    /// Character code of the race letter.
    #[serde(rename = "Letter")]
    #[serde(default)]
    pub letter: u32,
}

/// The controller type of a slot (human, computer, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlayerType {
    /// Controller type name.
    #[serde(rename = "Name")]
    #[serde(default)]
    pub name: String,
    /// Parser-assigned type identifier.
    #[serde(rename = "ID")]
    #[serde(default)]
    pub id: u32,
}

/// A participant in the match.
///
/// `name` is the identity every event refers to and is unique within a
/// match. Players are immutable once received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Player {
    /// Lobby slot index.
    #[serde(rename = "SlotID")]
    #[serde(default)]
    pub slot_id: i32,
    /// Parser-assigned player identifier.
    #[serde(rename = "ID")]
    #[serde(default)]
    pub id: i32,
    /// Controller type.
    #[serde(rename = "Type")]
    #[serde(default)]
    pub player_type: PlayerType,
    /// Picked race.
    #[serde(rename = "Race")]
    #[serde(default)]
    pub race: PlayerRace,
    /// Team number.
    #[serde(rename = "Team")]
    #[serde(default)]
    pub team: u32,
    /// Display name and identity.
    #[serde(rename = "Name")]
    pub name: String,
    /// Display color.
    #[serde(rename = "Color")]
    #[serde(default)]
    pub color: PlayerColor,
    /// Whether the slot is an observer.
    #[serde(rename = "Observer")]
    #[serde(default)]
    pub observer: bool,
}

impl Player {
    /// Create a player with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// One entry in the chronologically ordered action log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// Game time as `MM:SS` text. May be empty.
    #[serde(default)]
    pub time: String,
    /// Name of the acting player.
    #[serde(default)]
    pub player: String,
    /// Free-text action label (unit, building, or tech name).
    #[serde(default)]
    pub action: String,
    /// Raw kind tag. Kept as text so unknown tags still deserialize.
    #[serde(rename = "type")]
    #[serde(default)]
    pub kind: String,
}

impl Event {
    /// Create an event from its four textual fields.
    pub fn new(
        time: impl Into<String>,
        player: impl Into<String>,
        action: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            player: player.into(),
            action: action.into(),
            kind: kind.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AnalysisResult
// ---------------------------------------------------------------------------

/// The full payload returned by the remote parser for one replay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Game client version string.
    #[serde(default)]
    pub game_version: String,
    /// Map title.
    #[serde(default)]
    pub map_name: String,
    /// Match roster.
    #[serde(default)]
    pub players: Vec<Player>,
    /// Action log, already sorted by time.
    #[serde(default)]
    #[serde(alias = "buildOrders")]
    pub events: Vec<Event>,
}
