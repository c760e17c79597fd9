// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FilterState, FilterTransition, FixedClock, SubscriptionId};
use leadscope_domain::{FilterKey, FilterPatch, FilterSet};
use std::cell::RefCell;
use std::rc::Rc;
use time::macros::date;

fn state_on_2026_10_19() -> FilterState<FixedClock> {
    FilterState::with_clock(FixedClock::new(date!(2026 - 10 - 19)))
}

#[test]
fn test_new_state_starts_with_fiscal_year_defaults() {
    let state: FilterState<FixedClock> = state_on_2026_10_19();

    assert_eq!(state.get(FilterKey::StartDate), "2026-04-01");
    assert_eq!(state.get(FilterKey::EndDate), "2026-10-19");
    assert_eq!(state.get(FilterKey::Zone), "");
}

#[test]
fn test_update_state_clears_lower_hierarchy() {
    let mut state: FilterState<FixedClock> = state_on_2026_10_19();
    state.update_filter(FilterKey::Zone, "West");
    state.update_filter(FilterKey::State, "Gujarat");
    state.update_filter(FilterKey::Area, "Surat");
    state.update_filter(FilterKey::Dealer, "Tapi Power");
    state.update_filter(FilterKey::Employee, "Kiran");

    state.update_filter(FilterKey::State, "Maharashtra");

    assert_eq!(state.get(FilterKey::Zone), "West");
    assert_eq!(state.get(FilterKey::State), "Maharashtra");
    assert_eq!(state.get(FilterKey::Area), "");
    assert_eq!(state.get(FilterKey::Dealer), "");
    assert_eq!(state.get(FilterKey::Employee), "");
}

#[test]
fn test_update_filters_does_not_cascade() {
    let mut state: FilterState<FixedClock> = state_on_2026_10_19();
    state.update_filter(FilterKey::Dealer, "Tapi Power");

    state.update_filters(FilterPatch::new().with(FilterKey::State, "Goa"));

    assert_eq!(state.get(FilterKey::Dealer), "Tapi Power");
}

#[test]
fn test_reset_recomputes_defaults_at_call_time() {
    let mut state: FilterState<FixedClock> = state_on_2026_10_19();
    state.update_filter(FilterKey::Segment, "Telecom");
    state.clock().set(date!(2027 - 04 - 03));

    state.reset_filters();

    assert_eq!(state.filters(), &FilterSet::with_defaults(date!(2027 - 04 - 03)));
    assert_eq!(state.get(FilterKey::StartDate), "2027-04-01");
    assert_eq!(state.get(FilterKey::Segment), "");
}

#[test]
fn test_build_query_params_never_emits_zone_area_type() {
    let mut state: FilterState<FixedClock> = state_on_2026_10_19();
    state.update_filter(FilterKey::Zone, "East");
    state.update_filter(FilterKey::State, "Odisha");
    state.update_filter(FilterKey::Area, "Cuttack");
    state.update_filter(FilterKey::EnquiryType, "Hot");

    let params = state.build_query_params();

    assert!(!params.contains("zone"));
    assert!(!params.contains("area"));
    assert!(!params.contains("enquiry_type"));
    assert_eq!(params.get("state"), Some("Odisha"));
    assert_eq!(
        params.to_query_string(),
        "state=Odisha&start_date=2026-04-01&end_date=2026-10-19"
    );
}

#[test]
fn test_active_filters_include_zone_for_display() {
    let mut state: FilterState<FixedClock> = state_on_2026_10_19();
    state.update_filter(FilterKey::Zone, "East");

    let active = state.active_filters();

    assert_eq!(active.get(FilterKey::Zone), Some("East"));
    assert_eq!(active.len(), 3);
}

// ============================================================================
// Subscribers
// ============================================================================

#[test]
fn test_subscribers_see_whole_transition_in_order() {
    let mut state: FilterState<FixedClock> = state_on_2026_10_19();
    state.update_filter(FilterKey::State, "Kerala");
    state.update_filter(FilterKey::Area, "Kochi");
    let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let first = Rc::clone(&log);
    state.subscribe(move |t: &FilterTransition| {
        first
            .borrow_mut()
            .push(format!("first:{}", t.new_filters.get(FilterKey::Area)));
    });
    let second = Rc::clone(&log);
    state.subscribe(move |t: &FilterTransition| {
        second
            .borrow_mut()
            .push(format!("second:{}", t.previous.get(FilterKey::Area)));
    });

    state.update_filter(FilterKey::State, "Goa");

    assert_eq!(
        *log.borrow(),
        vec![String::from("first:"), String::from("second:Kochi")]
    );
}

#[test]
fn test_noop_update_does_not_notify() {
    let mut state: FilterState<FixedClock> = state_on_2026_10_19();
    let calls: Rc<RefCell<usize>> = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    state.subscribe(move |_| *counter.borrow_mut() += 1);

    let transition: FilterTransition = state.update_filter(FilterKey::Zone, "");

    assert!(transition.is_noop());
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let mut state: FilterState<FixedClock> = state_on_2026_10_19();
    let calls: Rc<RefCell<usize>> = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let id: SubscriptionId = state.subscribe(move |_| *counter.borrow_mut() += 1);

    state.update_filter(FilterKey::Segment, "Retail");
    assert!(state.unsubscribe(id));
    state.update_filter(FilterKey::Segment, "Telecom");

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(state.subscriber_count(), 0);
    assert!(!state.unsubscribe(id));
}
