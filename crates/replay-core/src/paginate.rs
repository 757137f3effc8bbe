//! Fixed-size pages over the build-related slice of the event log.

use std::collections::BTreeSet;

use replay_types::{BuildLogPage, Event, Player};

use crate::classify::{classify, is_build_related};

/// Page size used when the configuration does not set one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Build, train, upgrade, and tech events of rostered players, in log
/// order, split into pages.
///
/// [`BuildLogPage::items_for`] groups a page by player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLog<'a> {
    items: Vec<&'a Event>,
    page_size: usize,
}

impl<'a> BuildLog<'a> {
    /// Filter `events` to `roster` and page them by `page_size`. A size of
    /// 0 is read as 1.
    pub fn new(events: &'a [Event], roster: &[Player], page_size: usize) -> Self {
        let rostered: BTreeSet<&str> = roster.iter().map(|p| p.name.as_str()).collect();
        let items = events
            .iter()
            .filter(|e| rostered.contains(e.player.as_str()))
            .filter(|e| classify(&e.kind).aggregated().is_some_and(is_build_related))
            .collect();
        Self {
            items,
            page_size: page_size.max(1),
        }
    }

    /// Number of filtered events.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no event passed the filter.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Effective page size.
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages; 0 exactly when the log is empty.
    pub const fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// The 1-indexed page `n`. Pages outside `1..=page_count` are empty.
    pub fn page(&self, n: usize) -> BuildLogPage {
        let start = n
            .checked_sub(1)
            .and_then(|i| i.checked_mul(self.page_size))
            .unwrap_or(usize::MAX);
        let items = self
            .items
            .iter()
            .skip(start)
            .take(self.page_size)
            .copied()
            .cloned()
            .collect();
        BuildLogPage {
            page: n,
            page_count: self.page_count(),
            items,
        }
    }

    /// Every page in order.
    pub fn pages(&self) -> impl Iterator<Item = BuildLogPage> + '_ {
        (1..=self.page_count()).map(|n| self.page(n))
    }
}
