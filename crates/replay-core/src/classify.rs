//! Raw kind tag to [`EventClass`].
//!
//! Matching is exact and case-sensitive. The result is total: every tag is
//! either canonical, a known interaction, or unrecognized.

use replay_types::{CanonicalKind, EventClass, InteractionKind};

/// Classify a raw kind tag.
pub fn classify(tag: &str) -> EventClass {
    if let Some(kind) = CanonicalKind::ALL.into_iter().find(|k| k.as_str() == tag) {
        return EventClass::Canonical(kind);
    }
    if let Some(kind) = InteractionKind::ALL.into_iter().find(|k| k.as_str() == tag) {
        return EventClass::Interaction(kind);
    }
    EventClass::Unrecognized
}

/// Whether a canonical kind belongs in the paginated build log.
///
/// Cancellations and morphs are left out of that view.
pub const fn is_build_related(kind: CanonicalKind) -> bool {
    match kind {
        CanonicalKind::Build
        | CanonicalKind::Train
        | CanonicalKind::Upgrade
        | CanonicalKind::Tech => true,
        CanonicalKind::BuildingMorph | CanonicalKind::CancelTrain => false,
    }
}
