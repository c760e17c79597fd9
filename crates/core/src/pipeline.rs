// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The grid's filter → sort → paginate stages.
//!
//! Every stage is a pure function over record indices; the records
//! themselves are never reordered or modified.
//!
//! ## Sort rules
//!
//! 1. Missing values sort last in both directions
//! 2. Declared `numeric` / `date` columns compare parsed values; values that
//!    do not parse count as missing
//! 3. Declared `text` columns use locale-aware comparison
//! 4. Undeclared columns compare numerically when both values parse cleanly
//!    as numbers, otherwise as locale-aware text. Numeric values rank ahead
//!    of non-numeric ones so the ordering stays total on mixed columns
//! 5. Ties keep their incoming order (stable sort)

use crate::view_state::SortDirection;
use leadscope_domain::{
    CellValue, ColumnSpec, GridRecord, PageSize, ValueKind, contains_ignore_case, locale_compare,
};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Range;

/// Returns true if `record` passes every column filter.
///
/// A missing value fails any active filter on its field.
#[must_use]
pub fn matches_column_filters(record: &GridRecord, filters: &BTreeMap<String, String>) -> bool {
    filters.iter().all(|(field, text)| {
        text.is_empty()
            || record
                .value(field)
                .display_string()
                .is_some_and(|value| contains_ignore_case(&value, text))
    })
}

/// Returns true if any searchable column of `record` contains `search`.
///
/// An empty search matches every record.
#[must_use]
pub fn matches_search(record: &GridRecord, columns: &[ColumnSpec], search: &str) -> bool {
    search.is_empty()
        || columns
            .iter()
            .filter(|column| column.is_searchable())
            .any(|column| {
                record
                    .value(column.key())
                    .display_string()
                    .is_some_and(|value| contains_ignore_case(&value, search))
            })
}

/// Indices of the records passing the column filters and the search, in
/// source order.
#[must_use]
pub fn filter_indices(
    records: &[GridRecord],
    columns: &[ColumnSpec],
    filters: &BTreeMap<String, String>,
    search: &str,
) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            matches_column_filters(record, filters) && matches_search(record, columns, search)
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// A present cell in a column with no declared kind.
enum Loose {
    Number(f64),
    Text(String),
}

impl Loose {
    fn of(value: &CellValue) -> Option<Self> {
        value
            .as_number()
            .map(Self::Number)
            .or_else(|| value.display_string().map(Self::Text))
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(x), Self::Number(y)) => x.total_cmp(y),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
            (Self::Text(x), Self::Text(y)) => locale_compare(x, y),
        }
    }
}

fn missing_last<T>(
    a: Option<T>,
    b: Option<T>,
    direction: SortDirection,
    compare: impl FnOnce(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => direction.orient(compare(&x, &y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compares two cells for sorting.
///
/// `direction` only orients comparisons between two present values; a
/// missing value is always greater.
#[must_use]
pub fn compare_cells(
    a: &CellValue,
    b: &CellValue,
    kind: Option<ValueKind>,
    direction: SortDirection,
) -> Ordering {
    match kind {
        Some(ValueKind::Numeric) => {
            missing_last(a.as_number(), b.as_number(), direction, |x, y| {
                x.total_cmp(y)
            })
        }
        Some(ValueKind::Date) => missing_last(a.as_date(), b.as_date(), direction, Ord::cmp),
        Some(ValueKind::Text) => {
            missing_last(a.display_string(), b.display_string(), direction, |x, y| {
                locale_compare(x, y)
            })
        }
        None => missing_last(Loose::of(a), Loose::of(b), direction, Loose::compare),
    }
}

/// Stable-sorts `indices` by the `field` of the records they point at.
pub fn sort_indices(
    records: &[GridRecord],
    indices: &mut [usize],
    field: &str,
    kind: Option<ValueKind>,
    direction: SortDirection,
) {
    indices.sort_by(|&i, &j| {
        compare_cells(
            records[i].value(field),
            records[j].value(field),
            kind,
            direction,
        )
    });
}

/// The slice of a sorted result shown on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// The 1-based page, clamped into `1..=total_pages`.
    pub current_page: usize,
    /// Number of pages; at least one, even for an empty result.
    pub total_pages: usize,
    /// Positions within the sorted result shown on this page.
    pub range: Range<usize>,
}

/// Computes the page window for `count` rows, clamping `requested_page`.
#[must_use]
pub fn paginate(count: usize, requested_page: usize, page_size: PageSize) -> PageWindow {
    let total_pages: usize = page_size.total_pages(count);
    let current_page: usize = requested_page.clamp(1, total_pages);
    PageWindow {
        current_page,
        total_pages,
        range: page_size.page_range(current_page, count),
    }
}
