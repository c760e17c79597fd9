// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, FilterKey, FilterPatch, FilterSet};
use time::macros::date;

fn fully_populated() -> FilterSet {
    let patch: FilterPatch = FilterKey::ALL
        .into_iter()
        .map(|key| (key, format!("{key}-value")))
        .collect();
    FilterSet::empty().merged(&patch)
}

// ============================================================================
// Hierarchy cascade
// ============================================================================

#[test]
fn test_setting_state_clears_area_dealer_employee() {
    let filters: FilterSet = fully_populated().with_filter(FilterKey::State, "Kerala");

    assert_eq!(filters.get(FilterKey::State), "Kerala");
    assert_eq!(filters.get(FilterKey::Area), "");
    assert_eq!(filters.get(FilterKey::Dealer), "");
    assert_eq!(filters.get(FilterKey::Employee), "");
    assert_eq!(filters.get(FilterKey::Zone), "zone-value");
}

#[test]
fn test_setting_zone_clears_whole_hierarchy_below() {
    let filters: FilterSet = fully_populated().with_filter(FilterKey::Zone, "South");

    for key in &FilterKey::HIERARCHY[1..] {
        assert_eq!(filters.get(*key), "", "{key} should be cleared");
    }
}

#[test]
fn test_setting_employee_clears_nothing_else() {
    let before: FilterSet = fully_populated();
    let after: FilterSet = before.with_filter(FilterKey::Employee, "Ravi");

    assert_eq!(before.changed_keys(&after), vec![FilterKey::Employee]);
}

#[test]
fn test_non_hierarchy_fields_never_cascade() {
    let before: FilterSet = fully_populated();
    for key in [
        FilterKey::Segment,
        FilterKey::EnquiryStatus,
        FilterKey::EnquiryStage,
        FilterKey::EnquiryType,
        FilterKey::KvaMin,
        FilterKey::KvaMax,
        FilterKey::StartDate,
        FilterKey::EndDate,
    ] {
        let after: FilterSet = before.with_filter(key, "changed");
        assert_eq!(before.changed_keys(&after), vec![key]);
    }
}

#[test]
fn test_clearing_an_ancestor_also_clears_descendants() {
    let filters: FilterSet = fully_populated().with_filter(FilterKey::Area, "");

    assert_eq!(filters.get(FilterKey::Area), "");
    assert_eq!(filters.get(FilterKey::Dealer), "");
    assert_eq!(filters.get(FilterKey::State), "state-value");
}

#[test]
fn test_with_filter_does_not_mutate_original() {
    let original: FilterSet = fully_populated();
    let _next: FilterSet = original.with_filter(FilterKey::Zone, "North");

    assert_eq!(original.get(FilterKey::Dealer), "dealer-value");
}

#[test]
fn test_descendants() {
    assert_eq!(
        FilterKey::Area.descendants(),
        &[FilterKey::Dealer, FilterKey::Employee]
    );
    assert!(FilterKey::Employee.descendants().is_empty());
    assert!(FilterKey::Segment.descendants().is_empty());
}

// ============================================================================
// Bulk merge
// ============================================================================

#[test]
fn test_merged_does_not_cascade() {
    let patch: FilterPatch = FilterPatch::new()
        .with(FilterKey::Zone, "West")
        .with(FilterKey::KvaMin, "10");
    let filters: FilterSet = fully_populated().merged(&patch);

    assert_eq!(filters.get(FilterKey::Zone), "West");
    assert_eq!(filters.get(FilterKey::KvaMin), "10");
    assert_eq!(filters.get(FilterKey::State), "state-value");
    assert_eq!(filters.get(FilterKey::Employee), "employee-value");
}

#[test]
fn test_merged_can_break_hierarchy_consistency() {
    let patch: FilterPatch = FilterPatch::new().with(FilterKey::Dealer, "Acme Motors");
    let filters: FilterSet = FilterSet::empty().merged(&patch);

    assert!(!filters.hierarchy_is_consistent());
    assert!(
        FilterSet::empty()
            .with_filter(FilterKey::Zone, "North")
            .with_filter(FilterKey::State, "Punjab")
            .hierarchy_is_consistent()
    );
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_defaults_span_fiscal_year_start_to_today() {
    let filters: FilterSet = FilterSet::with_defaults(date!(2026 - 10 - 19));

    assert_eq!(filters.get(FilterKey::StartDate), "2026-04-01");
    assert_eq!(filters.get(FilterKey::EndDate), "2026-10-19");
    assert_eq!(filters.active_filters().len(), 2);
}

#[test]
fn test_defaults_before_april_use_previous_year() {
    let filters: FilterSet = FilterSet::with_defaults(date!(2027 - 02 - 03));

    assert_eq!(filters.get(FilterKey::StartDate), "2026-04-01");
    assert_eq!(filters.get(FilterKey::EndDate), "2027-02-03");
}

// ============================================================================
// Active filters and query parameters
// ============================================================================

#[test]
fn test_active_filters_skip_empty_values() {
    let filters: FilterSet = FilterSet::empty()
        .with_filter(FilterKey::Segment, "Telecom")
        .with_filter(FilterKey::KvaMax, "250");
    let active = filters.active_filters();

    assert_eq!(active.len(), 2);
    assert_eq!(active.get(FilterKey::Segment), Some("Telecom"));
    assert!(!active.contains(FilterKey::Zone));
    assert_eq!(
        active.iter().map(|(k, _)| k).collect::<Vec<_>>(),
        vec![FilterKey::Segment, FilterKey::KvaMax]
    );
}

#[test]
fn test_query_params_exclude_zone_area_and_type() {
    let params = fully_populated().query_params();

    assert!(!params.contains("zone"));
    assert!(!params.contains("area"));
    assert!(!params.contains("enquiry_type"));
    assert!(!params.contains("enquiryType"));
    assert_eq!(params.len(), 10);
}

#[test]
fn test_query_params_names_and_order() {
    let names: Vec<&str> = fully_populated()
        .query_params()
        .iter()
        .map(|(name, _)| name)
        .collect();

    assert_eq!(
        names,
        vec![
            "state",
            "dealer",
            "employee_name",
            "segment",
            "enquiry_status",
            "enquiry_stage",
            "kva_min",
            "kva_max",
            "start_date",
            "end_date",
        ]
    );
}

#[test]
fn test_query_params_pass_invalid_numbers_through() {
    let params = FilterSet::empty()
        .with_filter(FilterKey::KvaMin, "ten")
        .query_params();

    assert_eq!(params.get("kva_min"), Some("ten"));
}

#[test]
fn test_query_params_only_zone_set_is_empty() {
    let params = FilterSet::empty()
        .with_filter(FilterKey::Zone, "North")
        .query_params();

    assert!(params.is_empty());
    assert_eq!(params.to_query_string(), "");
}

#[test]
fn test_query_string_percent_encodes_values() {
    let query: String = FilterSet::empty()
        .with_filter(FilterKey::Dealer, "Sharma & Sons")
        .with_filter(FilterKey::Employee, "A K")
        .query_params()
        .to_query_string();

    assert_eq!(query, "dealer=Sharma%20%26%20Sons&employee_name=A%20K");
}

// ============================================================================
// Key parsing and URL restore
// ============================================================================

#[test]
fn test_filter_key_parses_both_naming_styles() {
    assert_eq!("enquiryStatus".parse::<FilterKey>().unwrap(), FilterKey::EnquiryStatus);
    assert_eq!("enquiry_status".parse::<FilterKey>().unwrap(), FilterKey::EnquiryStatus);
    assert_eq!("employee_name".parse::<FilterKey>().unwrap(), FilterKey::Employee);
    assert_eq!(
        "region".parse::<FilterKey>(),
        Err(DomainError::UnknownFilterKey(String::from("region")))
    );
}

#[test]
fn test_patch_from_query_pairs_round_trips_outbound_params() {
    let original: FilterSet = FilterSet::with_defaults(date!(2026 - 06 - 01))
        .with_filter(FilterKey::State, "Goa")
        .with_filter(FilterKey::Employee, "Meera")
        .with_filter(FilterKey::KvaMax, "500");
    let params = original.query_params();

    let (patch, unknown) = FilterSet::patch_from_query_pairs(params.iter());
    let restored: FilterSet = FilterSet::empty().merged(&patch);

    assert!(unknown.is_empty());
    assert_eq!(restored, original);
}

#[test]
fn test_patch_from_query_pairs_reports_unknown_names() {
    let (patch, unknown) =
        FilterSet::patch_from_query_pairs([("page", "2"), ("segment", "Retail")]);

    assert_eq!(patch.len(), 1);
    assert_eq!(unknown, vec![String::from("page")]);
}

#[test]
fn test_filter_set_serializes_camel_case() {
    let json = serde_json::to_value(FilterSet::empty().with_filter(FilterKey::KvaMin, "5")).unwrap();

    assert_eq!(json["kvaMin"], "5");
    assert_eq!(json["enquiryType"], "");
}

#[test]
fn test_patch_and_active_map_sizes() {
    let patch: FilterPatch = FilterPatch::new();
    assert!(patch.is_empty());
    assert_eq!(patch.with(FilterKey::Segment, "Retail").len(), 1);

    let active = FilterSet::empty().active_filters();
    assert!(active.is_empty());
    assert_eq!(active.len(), 0);
}
