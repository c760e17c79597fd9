// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use leadscope_domain::{PageSize, RecordId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Sort direction for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The other direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orients an ascending comparison result.
    #[must_use]
    pub const fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// The active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// The column key being sorted.
    pub key: String,
    /// The sort direction.
    pub direction: SortDirection,
}

/// A grid's own UI state layered over its records.
///
/// Only [`crate::TabularGrid`] mutates this; it is exposed read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridViewState {
    pub(crate) sort: Option<SortState>,
    pub(crate) column_filters: BTreeMap<String, String>,
    pub(crate) search: String,
    pub(crate) current_page: usize,
    pub(crate) page_size: PageSize,
    pub(crate) selected: BTreeSet<RecordId>,
}

impl GridViewState {
    /// Unsorted, unfiltered, first page, nothing selected.
    #[must_use]
    pub fn new(page_size: PageSize) -> Self {
        Self {
            sort: None,
            column_filters: BTreeMap::new(),
            search: String::new(),
            current_page: 1,
            page_size,
            selected: BTreeSet::new(),
        }
    }

    /// The active sort, if any.
    #[must_use]
    pub const fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// The key of the sort column, if any.
    #[must_use]
    pub fn sort_key(&self) -> Option<&str> {
        self.sort.as_ref().map(|s| s.key.as_str())
    }

    /// The direction of the active sort, if any.
    #[must_use]
    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort.as_ref().map(|s| s.direction)
    }

    /// The filter text for a column, if one is set.
    #[must_use]
    pub fn column_filter(&self, column: &str) -> Option<&str> {
        self.column_filters.get(column).map(String::as_str)
    }

    /// All active column filters.
    #[must_use]
    pub const fn column_filters(&self) -> &BTreeMap<String, String> {
        &self.column_filters
    }

    /// The global search text (empty when inactive).
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The 1-based current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// The page size.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Every selected identity, including ones the current filters hide.
    #[must_use]
    pub const fn selected_ids(&self) -> &BTreeSet<RecordId> {
        &self.selected
    }

    /// Number of active column filters plus one for an active search.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.column_filters.len() + usize::from(!self.search.is_empty())
    }
}

impl Default for GridViewState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
