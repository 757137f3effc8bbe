//! The pluggable, explicitly partial cost model.
//!
//! A [`CostTable`] maps `(kind, action)` to a mineral/gas price. Lookups
//! that miss are cost-neutral: the ledger carries the balance forward.
//! The shipped default prices a single unit and nothing else.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use replay_types::CanonicalKind;

/// Mineral and gas price of one action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cost {
    /// Minerals spent.
    pub minerals: i64,
    /// Gas spent.
    pub gas: i64,
}

impl Cost {
    /// Create a cost.
    pub const fn new(minerals: i64, gas: i64) -> Self {
        Self { minerals, gas }
    }
}

/// One configured price, as it appears in `replay-config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostEntry {
    /// Kind the price applies to.
    pub kind: CanonicalKind,
    /// Exact action label the price applies to.
    pub action: String,
    /// Minerals spent.
    #[serde(default)]
    pub minerals: i64,
    /// Gas spent.
    #[serde(default)]
    pub gas: i64,
}

impl CostEntry {
    /// The price of the entry.
    pub const fn cost(&self) -> Cost {
        Cost::new(self.minerals, self.gas)
    }
}

/// Lookup table from `(kind, action)` to [`Cost`].
///
/// Action labels match exactly and case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    prices: BTreeMap<CanonicalKind, BTreeMap<String, Cost>>,
}

impl CostTable {
    /// A table with no prices: every action is cost-neutral.
    pub const fn empty() -> Self {
        Self {
            prices: BTreeMap::new(),
        }
    }

    /// The shipped default entries.
    pub fn default_entries() -> Vec<CostEntry> {
        vec![CostEntry {
            kind: CanonicalKind::Train,
            action: "Marine".to_owned(),
            minerals: 50,
            gas: 0,
        }]
    }

    /// Build a table from configured entries.
    ///
    /// When two entries share a key the later one wins.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a CostEntry>) -> Self {
        let mut table = Self::empty();
        for entry in entries {
            table.insert(entry.kind, entry.action.clone(), entry.cost());
        }
        table
    }

    /// Set the price of `(kind, action)`, replacing any previous price.
    pub fn insert(&mut self, kind: CanonicalKind, action: impl Into<String>, cost: Cost) {
        self.prices
            .entry(kind)
            .or_default()
            .insert(action.into(), cost);
    }

    /// Price of `(kind, action)`, or `None` when the action is unmodeled.
    pub fn lookup(&self, kind: CanonicalKind, action: &str) -> Option<Cost> {
        self.prices.get(&kind)?.get(action).copied()
    }

    /// Number of priced actions.
    pub fn len(&self) -> usize {
        self.prices.values().map(BTreeMap::len).sum()
    }

    /// Whether no action is priced.
    pub fn is_empty(&self) -> bool {
        self.prices.values().all(BTreeMap::is_empty)
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::from_entries(&Self::default_entries())
    }
}
