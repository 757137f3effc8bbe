//! Per-player resource ledger for replay analysis.
//!
//! Every player starts a match with a seeded balance. Replaying the action
//! log through a cost model produces a balance curve per player. The cost
//! model is deliberately partial: anything it does not price is free.
//!
//! # Architecture
//!
//! The ledger crate provides three modules:
//!
//! - [`cost`] -- The [`CostTable`]: `(kind, action)` to mineral/gas price.
//! - [`ledger`] -- The [`ResourceLedger`] state machine and the roster-wide
//!   [`LedgerBook`].
//! - [`resample`] -- Step interpolation of a curve onto a time axis.
//!
//! # Balance rule
//!
//! For every event applied at time T:
//!
//! ```text
//! balance(T) = balance(previous) - cost(kind, action)
//! ```
//!
//! with `cost = 0` when the table has no entry. Balances may go negative
//! unless [`LedgerSettings::clamp_at_zero`] is set. The ledger never fails.
//!
//! # Usage
//!
//! ```
//! use replay_ledger::{CostTable, LedgerSettings, ResourceLedger};
//! use replay_types::CanonicalKind;
//!
//! let costs = CostTable::default();
//! let mut ledger = ResourceLedger::new("A", &LedgerSettings::default());
//!
//! // Seeded at 50 minerals; a Marine costs 50.
//! let after = ledger.apply(10, CanonicalKind::Train, "Marine", &costs);
//! assert_eq!(after.minerals, 0);
//!
//! // Unpriced actions carry the balance forward.
//! let after = ledger.apply(12, CanonicalKind::Build, "Barracks", &costs);
//! assert_eq!(after.minerals, 0);
//! assert_eq!(ledger.snapshots().len(), 3);
//! ```

pub mod cost;
pub mod ledger;
pub mod resample;

// Re-export primary types at crate root.
pub use cost::{Cost, CostEntry, CostTable};
pub use ledger::{LedgerBook, LedgerSettings, ResourceLedger};
pub use resample::resample;
