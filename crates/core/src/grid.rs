// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The tabular grid: records, columns, view state and the derived view.
//!
//! ## Invariants
//!
//! - Source records are never modified or reordered.
//! - `current_page` is clamped into `1..=total_pages` after every change.
//! - Changing a column filter, the search text or the page size returns to
//!   page 1. Changing the sort keeps the page.
//! - The filtered and sorted index lists are memoized separately and only
//!   recomputed when their inputs change.
//!
//! ## Selection
//!
//! Selected identities are retained when filters later hide them. Hidden
//! selections are ignored by [`TabularGrid::is_all_selected`] and
//! [`TabularGrid::selected_in_view`], and dropped when select-all replaces
//! the selection.

use crate::command::GridCommand;
use crate::pipeline::{PageWindow, filter_indices, paginate, sort_indices};
use crate::view_state::{GridViewState, SortDirection, SortState};
use leadscope_domain::{
    ColumnSpec, DEFAULT_IDENTITY_FIELD, GridRecord, PageSize, RecordId, ValueKind,
};
use std::collections::BTreeSet;
use tracing::debug;

/// One row on the current page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRow<'a> {
    /// The record's identity.
    pub id: &'a RecordId,
    /// The record.
    pub record: &'a GridRecord,
    /// Whether the record is selected.
    pub selected: bool,
}

/// The rows to render plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPage<'a> {
    /// Rows on the current page, in display order.
    pub rows: Vec<PageRow<'a>>,
    /// The 1-based current page.
    pub current_page: usize,
    /// Total number of pages (at least one).
    pub total_pages: usize,
    /// Number of records passing the filters.
    pub filtered_count: usize,
    /// Number of source records.
    pub total_count: usize,
}

/// How often each memoized stage has been recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Recomputations {
    /// Filter stage runs.
    pub filter: usize,
    /// Sort stage runs.
    pub sort: usize,
}

/// A generic filter / sort / paginate grid over in-memory records.
#[derive(Debug, Clone)]
pub struct TabularGrid {
    records: Vec<GridRecord>,
    ids: Vec<RecordId>,
    columns: Vec<ColumnSpec>,
    identity_field: String,
    state: GridViewState,
    filtered: Vec<usize>,
    sorted: Vec<usize>,
    window: PageWindow,
    filter_dirty: bool,
    sort_dirty: bool,
    recomputations: Recomputations,
}

impl TabularGrid {
    /// Creates a grid identifying records by their `id` field.
    #[must_use]
    pub fn new(columns: Vec<ColumnSpec>, records: Vec<GridRecord>) -> Self {
        Self::with_identity_field(columns, records, DEFAULT_IDENTITY_FIELD)
    }

    /// Creates a grid identifying records by `identity_field`.
    #[must_use]
    pub fn with_identity_field(
        columns: Vec<ColumnSpec>,
        records: Vec<GridRecord>,
        identity_field: impl Into<String>,
    ) -> Self {
        let identity_field: String = identity_field.into();
        let ids: Vec<RecordId> = resolve_ids(&records, &identity_field);
        let mut grid: Self = Self {
            records,
            ids,
            columns,
            identity_field,
            state: GridViewState::default(),
            filtered: Vec::new(),
            sorted: Vec::new(),
            window: paginate(0, 1, PageSize::default()),
            filter_dirty: true,
            sort_dirty: true,
            recomputations: Recomputations::default(),
        };
        grid.refresh();
        grid
    }

    /// Builder-style initial page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.set_page_size(page_size);
        self
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    /// The source records, in their original order.
    #[must_use]
    pub fn records(&self) -> &[GridRecord] {
        &self.records
    }

    /// The column schema.
    #[must_use]
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// The column with `key`, if the schema has one.
    #[must_use]
    pub fn column(&self, key: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.key() == key)
    }

    /// The field records are identified by.
    #[must_use]
    pub fn identity_field(&self) -> &str {
        &self.identity_field
    }

    /// The current view state.
    #[must_use]
    pub const fn state(&self) -> &GridViewState {
        &self.state
    }

    /// The 1-based current page (always valid).
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.window.current_page
    }

    /// Total number of pages (at least one).
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.window.total_pages
    }

    /// Number of records passing the filters.
    #[must_use]
    pub const fn filtered_count(&self) -> usize {
        self.sorted.len()
    }

    /// Filtered records in display order, across all pages.
    pub fn filtered_records(&self) -> impl Iterator<Item = (&RecordId, &GridRecord)> + '_ {
        self.sorted.iter().map(|&i| (&self.ids[i], &self.records[i]))
    }

    /// Identities of the filtered records in display order.
    pub fn filtered_ids(&self) -> impl Iterator<Item = &RecordId> + '_ {
        self.sorted.iter().map(|&i| &self.ids[i])
    }

    /// Records on the current page, in display order.
    pub fn page_records(&self) -> impl Iterator<Item = (&RecordId, &GridRecord)> + '_ {
        self.sorted[self.window.range.clone()]
            .iter()
            .map(|&i| (&self.ids[i], &self.records[i]))
    }

    /// The current page with pagination metadata.
    #[must_use]
    pub fn page(&self) -> GridPage<'_> {
        GridPage {
            rows: self
                .page_records()
                .map(|(id, record)| PageRow {
                    id,
                    record,
                    selected: self.state.selected.contains(id),
                })
                .collect(),
            current_page: self.window.current_page,
            total_pages: self.window.total_pages,
            filtered_count: self.sorted.len(),
            total_count: self.records.len(),
        }
    }

    /// Memoization counters.
    #[must_use]
    pub const fn recomputations(&self) -> Recomputations {
        self.recomputations
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Applies a view command.
    pub fn apply(&mut self, command: GridCommand) {
        match command {
            GridCommand::SetFilter { column, text } => self.set_filter(&column, text),
            GridCommand::ClearFilters => self.clear_filters(),
            GridCommand::SetSearch(text) => self.set_search(text),
            GridCommand::SetSort(column) => self.set_sort(&column),
            GridCommand::SetPage(page) => self.set_page(page),
            GridCommand::SetPageSize(page_size) => self.set_page_size(page_size),
            GridCommand::ToggleRow(id) => self.toggle_row(id),
            GridCommand::ToggleSelectAll => self.toggle_select_all(),
            GridCommand::ClearSelection => self.clear_selection(),
        }
    }

    /// Replaces the source records, keeping view state and selection.
    pub fn set_records(&mut self, records: Vec<GridRecord>) {
        self.ids = resolve_ids(&records, &self.identity_field);
        self.records = records;
        self.filter_dirty = true;
        self.refresh();
    }

    /// Sets a column's substring filter and returns to page 1.
    ///
    /// Empty text removes the filter. Unknown or non-filterable columns are
    /// ignored.
    pub fn set_filter(&mut self, column: &str, text: impl Into<String>) {
        let Some(spec) = self.column(column) else {
            debug!(column, "Ignoring filter on unknown column");
            return;
        };
        if !spec.is_filterable() {
            debug!(column, "Ignoring filter on non-filterable column");
            return;
        }

        let text: String = text.into();
        let changed: bool = if text.is_empty() {
            self.state.column_filters.remove(column).is_some()
        } else {
            self.state.column_filters.insert(column.to_string(), text.clone())
                != Some(text)
        };

        self.state.current_page = 1;
        if changed {
            self.filter_dirty = true;
        }
        self.refresh();
    }

    /// Removes every column filter and the search text, returning to page 1.
    ///
    /// Sort and selection are left alone.
    pub fn clear_filters(&mut self) {
        if !self.state.column_filters.is_empty() || !self.state.search.is_empty() {
            self.state.column_filters.clear();
            self.state.search.clear();
            self.filter_dirty = true;
        }
        self.state.current_page = 1;
        self.refresh();
    }

    /// Sets the global search text and returns to page 1.
    pub fn set_search(&mut self, text: impl Into<String>) {
        let text: String = text.into();
        if text != self.state.search {
            self.state.search = text;
            self.filter_dirty = true;
        }
        self.state.current_page = 1;
        self.refresh();
    }

    /// Sorts ascending by `column`, or flips the direction if it is already
    /// the sort column. The current page is kept.
    ///
    /// Unknown or non-sortable columns are ignored.
    pub fn set_sort(&mut self, column: &str) {
        let Some(spec) = self.column(column) else {
            debug!(column, "Ignoring sort on unknown column");
            return;
        };
        if !spec.is_sortable() {
            debug!(column, "Ignoring sort on non-sortable column");
            return;
        }

        self.state.sort = Some(match self.state.sort.take() {
            Some(current) if current.key == column => SortState {
                direction: current.direction.flipped(),
                ..current
            },
            _ => SortState {
                key: column.to_string(),
                direction: SortDirection::Ascending,
            },
        });
        self.sort_dirty = true;
        self.refresh();
    }

    /// Removes the sort, restoring source order.
    pub fn clear_sort(&mut self) {
        if self.state.sort.take().is_some() {
            self.sort_dirty = true;
        }
        self.refresh();
    }

    /// Moves to a 1-based page, clamped into range.
    pub fn set_page(&mut self, page: usize) {
        self.state.current_page = page;
        self.refresh();
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.state.page_size = page_size;
        self.state.current_page = 1;
        self.refresh();
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Flips selection of one record.
    pub fn toggle_row(&mut self, id: RecordId) {
        if !self.state.selected.remove(&id) {
            self.state.selected.insert(id);
        }
    }

    /// Clears the selection if every filtered record is selected; otherwise
    /// selects exactly the filtered records, including those on other pages.
    pub fn toggle_select_all(&mut self) {
        if self.is_all_selected() {
            self.state.selected.clear();
        } else {
            self.state.selected = self.filtered_ids().cloned().collect();
        }
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) {
        self.state.selected.clear();
    }

    /// Returns true if the record is selected.
    #[must_use]
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.state.selected.contains(id)
    }

    /// Returns true if there is at least one filtered record and every
    /// filtered record is selected.
    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        !self.sorted.is_empty() && self.filtered_ids().all(|id| self.state.selected.contains(id))
    }

    /// Selected identities among the filtered records.
    #[must_use]
    pub fn selected_in_view(&self) -> BTreeSet<&RecordId> {
        self.filtered_ids()
            .filter(|id| self.state.selected.contains(*id))
            .collect()
    }

    /// Selected records among the filtered ones, in display order.
    pub fn selected_records(&self) -> impl Iterator<Item = &GridRecord> + '_ {
        self.filtered_records()
            .filter(|(id, _)| self.state.selected.contains(*id))
            .map(|(_, record)| record)
    }

    // ------------------------------------------------------------------
    // Derivation
    // ------------------------------------------------------------------

    fn sort_kind(&self, key: &str) -> Option<ValueKind> {
        self.column(key).and_then(ColumnSpec::value_kind)
    }

    /// Recomputes dirty stages and re-clamps the page.
    fn refresh(&mut self) {
        if self.filter_dirty {
            self.filtered = filter_indices(
                &self.records,
                &self.columns,
                &self.state.column_filters,
                &self.state.search,
            );
            self.recomputations.filter += 1;
            self.filter_dirty = false;
            self.sort_dirty = true;
            debug!(
                filtered = self.filtered.len(),
                total = self.records.len(),
                "Grid filter stage recomputed"
            );
        }

        if self.sort_dirty {
            let mut sorted: Vec<usize> = self.filtered.clone();
            if let Some(sort) = &self.state.sort {
                let kind: Option<ValueKind> = self.sort_kind(&sort.key);
                sort_indices(&self.records, &mut sorted, &sort.key, kind, sort.direction);
            }
            self.sorted = sorted;
            self.recomputations.sort += 1;
            self.sort_dirty = false;
        }

        self.window = paginate(
            self.sorted.len(),
            self.state.current_page,
            self.state.page_size,
        );
        self.state.current_page = self.window.current_page;
    }
}

fn resolve_ids(records: &[GridRecord], identity_field: &str) -> Vec<RecordId> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| record.identity(identity_field, position))
        .collect()
}
