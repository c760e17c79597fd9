// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Choices offered by the filter selectors.
//!
//! Each hierarchy selector only lists values reachable under the
//! ancestors currently chosen:
//!
//! | Selector  | Narrowed by        |
//! |-----------|--------------------|
//! | zones     | nothing            |
//! | states    | zone               |
//! | areas     | state              |
//! | dealers   | state, area        |
//! | employees | dealer             |
//! | segments  | nothing            |
//!
//! Status, stage and type have fixed vocabularies.

use crate::filter::{FilterKey, FilterSet};
use crate::record::GridRecord;
use std::collections::BTreeSet;

/// Enquiry status vocabulary.
pub const ENQUIRY_STATUSES: [&str; 2] = ["Open", "Closed"];

/// Enquiry stage vocabulary, in pipeline order.
pub const ENQUIRY_STAGES: [&str; 6] = [
    "Prospecting",
    "Qualified",
    "Proposal",
    "Negotiation",
    "Closed-Won",
    "Closed-Lost",
];

/// Enquiry type vocabulary.
pub const ENQUIRY_TYPES: [&str; 3] = ["Hot", "Warm", "Cold"];

/// The record field a selector reads.
///
/// Records name the employee column `employee_name`; every other selector
/// reads the field of the same name.
#[must_use]
pub const fn record_field(key: FilterKey) -> &'static str {
    match key {
        FilterKey::Employee => "employee_name",
        FilterKey::Zone => "zone",
        FilterKey::State => "state",
        FilterKey::Area => "area",
        FilterKey::Dealer => "dealer",
        FilterKey::Segment => "segment",
        FilterKey::EnquiryStatus => "enquiry_status",
        FilterKey::EnquiryStage => "enquiry_stage",
        FilterKey::EnquiryType => "enquiry_type",
        FilterKey::KvaMin | FilterKey::KvaMax => "kva",
        FilterKey::StartDate | FilterKey::EndDate => "enquiry_date",
    }
}

/// Distinct option lists for every selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    /// All zones.
    pub zones: Vec<String>,
    /// States in the chosen zone.
    pub states: Vec<String>,
    /// Areas in the chosen state.
    pub areas: Vec<String>,
    /// Dealers in the chosen state and area.
    pub dealers: Vec<String>,
    /// Employees of the chosen dealer.
    pub employees: Vec<String>,
    /// All segments.
    pub segments: Vec<String>,
    /// Fixed status vocabulary.
    pub enquiry_statuses: Vec<String>,
    /// Fixed stage vocabulary.
    pub enquiry_stages: Vec<String>,
    /// Fixed type vocabulary.
    pub enquiry_types: Vec<String>,
}

impl FilterOptions {
    /// Derives option lists from `records` under the current `filters`.
    #[must_use]
    pub fn from_records(records: &[GridRecord], filters: &FilterSet) -> Self {
        Self {
            zones: distinct_values(records, FilterKey::Zone, filters, &[]),
            states: distinct_values(records, FilterKey::State, filters, &[FilterKey::Zone]),
            areas: distinct_values(records, FilterKey::Area, filters, &[FilterKey::State]),
            dealers: distinct_values(
                records,
                FilterKey::Dealer,
                filters,
                &[FilterKey::State, FilterKey::Area],
            ),
            employees: distinct_values(records, FilterKey::Employee, filters, &[FilterKey::Dealer]),
            segments: distinct_values(records, FilterKey::Segment, filters, &[]),
            enquiry_statuses: to_owned(&ENQUIRY_STATUSES),
            enquiry_stages: to_owned(&ENQUIRY_STAGES),
            enquiry_types: to_owned(&ENQUIRY_TYPES),
        }
    }

    /// The options for one selector. Free-form fields (kVA bounds, dates)
    /// have none.
    #[must_use]
    pub fn for_key(&self, key: FilterKey) -> &[String] {
        match key {
            FilterKey::Zone => &self.zones,
            FilterKey::State => &self.states,
            FilterKey::Area => &self.areas,
            FilterKey::Dealer => &self.dealers,
            FilterKey::Employee => &self.employees,
            FilterKey::Segment => &self.segments,
            FilterKey::EnquiryStatus => &self.enquiry_statuses,
            FilterKey::EnquiryStage => &self.enquiry_stages,
            FilterKey::EnquiryType => &self.enquiry_types,
            FilterKey::KvaMin | FilterKey::KvaMax | FilterKey::StartDate | FilterKey::EndDate => {
                &[]
            }
        }
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Placeholder strings left behind by spreadsheet imports.
fn is_blank(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("nan")
}

fn distinct_values(
    records: &[GridRecord],
    key: FilterKey,
    filters: &FilterSet,
    narrowed_by: &[FilterKey],
) -> Vec<String> {
    let field: &str = record_field(key);
    let values: BTreeSet<String> = records
        .iter()
        .filter(|record| {
            narrowed_by.iter().all(|parent| {
                let wanted: &str = filters.get(*parent);
                wanted.is_empty()
                    || record
                        .value(record_field(*parent))
                        .display_string()
                        .is_some_and(|v| v == wanted)
            })
        })
        .filter_map(|record| record.value(field).display_string())
        .filter(|value| !is_blank(value))
        .collect();
    values.into_iter().collect()
}
