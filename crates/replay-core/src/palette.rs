//! Color resolution for players and trained-unit labels.
//!
//! Player colors arrive upstream as names ("Red", "Teal", ...). A
//! [`ColorResolver`] turns a name into hex and also serves a cyclic palette
//! for label coloring. [`NamedPalette`] is the versioned, configurable
//! implementation; callers may inject their own resolver instead.

use serde::{Deserialize, Serialize};

/// Hex returned for names no palette knows.
pub const FALLBACK_HEX: &str = "#000000";

/// Version tag of [`NamedPalette::builtin`].
pub const BUILTIN_PALETTE_VERSION: &str = "v1";

/// Built-in slot colors, in palette order.
const BUILTIN_COLORS: &[(&str, &str)] = &[
    ("Red", "#f40404"),
    ("Blue", "#0c48cc"),
    ("Teal", "#2cb494"),
    ("Purple", "#88409c"),
    ("Orange", "#f88c14"),
    ("Brown", "#703014"),
    ("White", "#cce0d0"),
    ("Yellow", "#fcfc38"),
    ("Green", "#088008"),
    ("Pale Yellow", "#fcfc7c"),
    ("Tan", "#ecc4b0"),
    ("Azure", "#4068d4"),
    ("Pale Green", "#74a47c"),
    ("Bluish Grey", "#9090b8"),
    ("Cyan", "#00e4fc"),
    ("Pink", "#ff80c0"),
    ("Olive", "#787800"),
    ("Lime", "#d2f53c"),
    ("Navy", "#000080"),
    ("Magenta", "#f032e6"),
    ("Grey", "#808080"),
    ("Black", "#3c3c3c"),
];

// ---------------------------------------------------------------------------
// ColorResolver
// ---------------------------------------------------------------------------

/// Pure mapping from color names and palette positions to hex strings.
pub trait ColorResolver {
    /// Hex for `name`, or `None` when unknown.
    fn resolve(&self, name: &str) -> Option<&str>;

    /// Hex at palette position `index`, wrapping when the palette is
    /// shorter than `index`.
    fn nth(&self, index: usize) -> &str;

    /// Hex for `name`, or [`FALLBACK_HEX`] when unknown.
    fn resolve_or_fallback(&self, name: &str) -> &str {
        self.resolve(name).unwrap_or(FALLBACK_HEX)
    }
}

// ---------------------------------------------------------------------------
// NamedPalette
// ---------------------------------------------------------------------------

/// One named color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Color name, matched case-insensitively.
    pub name: String,
    /// `#rrggbb` hex value.
    pub hex: String,
}

/// An ordered, versioned list of named colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedPalette {
    /// Version tag, bumped whenever entries change.
    #[serde(default = "default_version")]
    pub version: String,
    /// Colors in palette order.
    #[serde(default = "builtin_entries")]
    pub colors: Vec<PaletteEntry>,
}

impl NamedPalette {
    /// The built-in palette.
    pub fn builtin() -> Self {
        Self {
            version: default_version(),
            colors: builtin_entries(),
        }
    }

    /// Number of colors.
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors.
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for NamedPalette {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ColorResolver for NamedPalette {
    fn resolve(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.colors
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.hex.as_str())
    }

    fn nth(&self, index: usize) -> &str {
        index
            .checked_rem(self.colors.len())
            .and_then(|i| self.colors.get(i))
            .map_or(FALLBACK_HEX, |c| c.hex.as_str())
    }
}

/// Whether `hex` looks like `#rrggbb`.
pub fn is_hex_color(hex: &str) -> bool {
    hex.strip_prefix('#').is_some_and(|digits| {
        digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}

fn default_version() -> String {
    BUILTIN_PALETTE_VERSION.to_owned()
}

fn builtin_entries() -> Vec<PaletteEntry> {
    BUILTIN_COLORS
        .iter()
        .map(|(name, hex)| PaletteEntry {
            name: (*name).to_owned(),
            hex: (*hex).to_owned(),
        })
        .collect()
}
