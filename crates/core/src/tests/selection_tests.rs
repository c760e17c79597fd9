// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::TabularGrid;
use crate::tests::helpers::{key, numbered_grid};
use leadscope_domain::RecordId;
use std::collections::BTreeSet;

#[test]
fn test_toggle_row_flips_membership() {
    let mut grid: TabularGrid = numbered_grid(3);

    grid.toggle_row(key("L002"));
    assert!(grid.is_selected(&key("L002")));
    assert!(grid.page().rows[1].selected);

    grid.toggle_row(key("L002"));
    assert!(!grid.is_selected(&key("L002")));
}

#[test]
fn test_select_all_covers_off_page_rows() {
    let mut grid: TabularGrid = numbered_grid(45);

    grid.toggle_select_all();

    assert_eq!(grid.state().selected_ids().len(), 45);
    assert!(grid.is_all_selected());
    assert!(grid.is_selected(&key("L045")));
}

#[test]
fn test_select_all_takes_only_filtered_rows() {
    let mut grid: TabularGrid = numbered_grid(45);
    grid.set_filter("dealer", "even");

    grid.toggle_select_all();

    let expected: BTreeSet<RecordId> = grid.filtered_ids().cloned().collect();
    assert_eq!(grid.state().selected_ids(), &expected);
    assert_eq!(expected.len(), 22);
}

#[test]
fn test_select_all_twice_clears() {
    let mut grid: TabularGrid = numbered_grid(12);

    grid.toggle_select_all();
    grid.toggle_select_all();

    assert!(grid.state().selected_ids().is_empty());
    assert!(!grid.is_all_selected());
}

#[test]
fn test_partial_selection_becomes_full() {
    let mut grid: TabularGrid = numbered_grid(5);
    grid.toggle_row(key("L001"));

    grid.toggle_select_all();

    assert!(grid.is_all_selected());
    assert_eq!(grid.state().selected_ids().len(), 5);
}

#[test]
fn test_selection_survives_filter_change_but_is_ignored_off_view() {
    let mut grid: TabularGrid = numbered_grid(6);
    grid.toggle_row(key("L001"));
    grid.toggle_row(key("L002"));

    grid.set_filter("dealer", "even");

    assert!(grid.is_selected(&key("L001")));
    assert_eq!(grid.state().selected_ids().len(), 2);
    let in_view: Vec<&RecordId> = grid.selected_in_view().into_iter().collect();
    assert_eq!(in_view, vec![&key("L002")]);
    let ids: Vec<String> = grid
        .selected_records()
        .map(|r| r.value("id").display_string().unwrap())
        .collect();
    assert_eq!(ids, vec!["L002"]);
}

#[test]
fn test_all_selected_ignores_hidden_selections() {
    let mut grid: TabularGrid = numbered_grid(6);
    grid.toggle_row(key("L001"));
    grid.set_filter("dealer", "even");

    assert!(!grid.is_all_selected());

    grid.toggle_select_all();

    // Replaces the selection with the filtered ids, dropping hidden L001
    assert!(grid.is_all_selected());
    assert!(!grid.is_selected(&key("L001")));
    assert_eq!(grid.state().selected_ids().len(), 3);
}

#[test]
fn test_select_all_with_empty_view_selects_nothing() {
    let mut grid: TabularGrid = numbered_grid(6);
    grid.toggle_row(key("L001"));
    grid.set_filter("dealer", "nobody");

    assert!(!grid.is_all_selected());
    grid.toggle_select_all();

    assert!(grid.state().selected_ids().is_empty());
}

#[test]
fn test_selection_survives_sort_and_page_changes() {
    let mut grid: TabularGrid = numbered_grid(45);
    grid.toggle_row(key("L044"));

    grid.set_sort("kva");
    grid.set_page(3);
    grid.set_sort("kva");

    assert!(grid.is_selected(&key("L044")));
    assert_eq!(grid.selected_in_view().len(), 1);
}

#[test]
fn test_clear_selection_drops_hidden_ids_too() {
    let mut grid: TabularGrid = numbered_grid(6);
    grid.toggle_row(key("L001"));
    grid.set_filter("dealer", "even");

    grid.clear_selection();

    assert!(grid.state().selected_ids().is_empty());
}
