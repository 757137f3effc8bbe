//! Shared type definitions for replay analysis.
//!
//! This crate is the single source of truth for the data that crosses the
//! engine's boundaries: the payload the remote parser returns and the views
//! the rendering layer consumes. View types flow downstream to `TypeScript`
//! via `ts-rs`.
//!
//! # Modules
//!
//! - [`enums`] -- Canonical and interaction kinds, classification, buckets
//! - [`structs`] -- `AnalysisResult`, `Player`, and `Event` (input contract)
//! - [`views`] -- Cumulative, resource, production, build log, and overview
//!   views (output contract)

pub mod enums;
pub mod structs;
pub mod views;

// Re-export all public types at crate root for convenience.
pub use enums::{BucketKind, CanonicalKind, EventClass, InteractionKind};
pub use structs::{AnalysisResult, Event, Player, PlayerColor, PlayerRace, PlayerType};
pub use views::{
    BuildLogPage, CumulativeSeries, CumulativeView, DerivedViews, MatchOverview,
    PlayerProduction, PlayerResources, PlayerSummary, ResourceSnapshot,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // The files are written to the `bindings/` directory relative to
        // the crate root.
        use ts_rs::TS;

        // Enums
        let _ = crate::enums::CanonicalKind::export_all();
        let _ = crate::enums::InteractionKind::export_all();
        let _ = crate::enums::BucketKind::export_all();

        // Input contract
        let _ = crate::structs::PlayerColor::export_all();
        let _ = crate::structs::PlayerRace::export_all();
        let _ = crate::structs::PlayerType::export_all();
        let _ = crate::structs::Player::export_all();
        let _ = crate::structs::Event::export_all();
        let _ = crate::structs::AnalysisResult::export_all();

        // Views
        let _ = crate::views::CumulativeSeries::export_all();
        let _ = crate::views::CumulativeView::export_all();
        let _ = crate::views::ResourceSnapshot::export_all();
        let _ = crate::views::PlayerResources::export_all();
        let _ = crate::views::PlayerProduction::export_all();
        let _ = crate::views::BuildLogPage::export_all();
        let _ = crate::views::PlayerSummary::export_all();
        let _ = crate::views::MatchOverview::export_all();
        let _ = crate::views::DerivedViews::export_all();
    }
}
