// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use leadscope_domain::{FilterKey, FilterPatch, PageSize, RecordId};

/// A requested change to the report filters, as data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCommand {
    /// Set one field, clearing its hierarchy descendants.
    Update {
        /// The field to set.
        key: FilterKey,
        /// The new value; empty clears the field.
        value: String,
    },
    /// Set several fields verbatim, without cascade-clearing.
    UpdateMany(FilterPatch),
    /// Restore the session defaults for the current date.
    Reset,
}

impl FilterCommand {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Update { .. } => "UpdateFilter",
            Self::UpdateMany(_) => "UpdateFilters",
            Self::Reset => "ResetFilters",
        }
    }
}

/// A requested change to a grid's view state, as data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCommand {
    /// Set the substring filter of one column; empty text removes it.
    SetFilter {
        /// The column key.
        column: String,
        /// The text to match.
        text: String,
    },
    /// Remove every column filter and the search text.
    ClearFilters,
    /// Set the global search text; empty disables it.
    SetSearch(String),
    /// Sort by a column, or flip direction if it is already the sort key.
    SetSort(String),
    /// Jump to a 1-based page.
    SetPage(usize),
    /// Change the page size.
    SetPageSize(PageSize),
    /// Flip selection of one record.
    ToggleRow(RecordId),
    /// Select every filtered record, or clear if all are already selected.
    ToggleSelectAll,
    /// Deselect everything.
    ClearSelection,
}
