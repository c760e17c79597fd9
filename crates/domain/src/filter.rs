// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report filter fields and their derived views.
//!
//! ## Invariants
//!
//! - The organizational hierarchy `zone → state → area → dealer → employee`
//!   is strictly nested: changing an ancestor through [`FilterSet::with_filter`]
//!   clears every descendant in the same update.
//! - Fields outside the hierarchy are never cleared by other field changes.
//! - An empty string means "no constraint".
//! - The outbound query only carries the allow-list described on
//!   [`FilterKey::query_param`]; `zone`, `area`, and `enquiryType` are never sent.

use crate::error::DomainError;
use crate::fiscal_year::{FiscalYear, format_iso_date};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use time::Date;

/// One field of the report filter set.
///
/// Declaration order is the canonical order for iteration and display.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FilterKey {
    /// Sales zone (hierarchy root).
    Zone,
    /// State within a zone.
    State,
    /// Area within a state.
    Area,
    /// Dealer within an area.
    Dealer,
    /// Employee within a dealer.
    Employee,
    /// Customer segment.
    Segment,
    /// Enquiry status (`Open`, `Closed`).
    EnquiryStatus,
    /// Enquiry pipeline stage.
    EnquiryStage,
    /// Enquiry temperature (`Hot`, `Warm`, `Cold`).
    EnquiryType,
    /// Lower kVA bound, kept as the raw string the user typed.
    KvaMin,
    /// Upper kVA bound, kept as the raw string the user typed.
    KvaMax,
    /// Report start date (ISO).
    StartDate,
    /// Report end date (ISO).
    EndDate,
}

impl FilterKey {
    /// Every filter key in canonical order.
    pub const ALL: [Self; 13] = [
        Self::Zone,
        Self::State,
        Self::Area,
        Self::Dealer,
        Self::Employee,
        Self::Segment,
        Self::EnquiryStatus,
        Self::EnquiryStage,
        Self::EnquiryType,
        Self::KvaMin,
        Self::KvaMax,
        Self::StartDate,
        Self::EndDate,
    ];

    /// The organizational hierarchy, root first.
    pub const HIERARCHY: [Self; 5] = [
        Self::Zone,
        Self::State,
        Self::Area,
        Self::Dealer,
        Self::Employee,
    ];

    /// The field name as used by the dashboard (camelCase).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Zone => "zone",
            Self::State => "state",
            Self::Area => "area",
            Self::Dealer => "dealer",
            Self::Employee => "employee",
            Self::Segment => "segment",
            Self::EnquiryStatus => "enquiryStatus",
            Self::EnquiryStage => "enquiryStage",
            Self::EnquiryType => "enquiryType",
            Self::KvaMin => "kvaMin",
            Self::KvaMax => "kvaMax",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
        }
    }

    /// The backend query parameter this key is sent as, if any.
    ///
    /// Only `state, dealer, employee, segment, enquiryStatus, enquiryStage,
    /// kvaMin, kvaMax, startDate, endDate` are forwarded. `zone`, `area`, and
    /// `enquiryType` return `None` and never leave the client.
    #[must_use]
    pub const fn query_param(&self) -> Option<&'static str> {
        match self {
            Self::State => Some("state"),
            Self::Dealer => Some("dealer"),
            Self::Employee => Some("employee_name"),
            Self::Segment => Some("segment"),
            Self::EnquiryStatus => Some("enquiry_status"),
            Self::EnquiryStage => Some("enquiry_stage"),
            Self::KvaMin => Some("kva_min"),
            Self::KvaMax => Some("kva_max"),
            Self::StartDate => Some("start_date"),
            Self::EndDate => Some("end_date"),
            Self::Zone | Self::Area | Self::EnquiryType => None,
        }
    }

    /// Resolves a backend query parameter name (e.g. `employee_name`).
    #[must_use]
    pub fn from_query_param(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.query_param() == Some(name))
    }

    /// Position within [`Self::HIERARCHY`], or `None` for independent fields.
    #[must_use]
    pub fn hierarchy_level(&self) -> Option<usize> {
        Self::HIERARCHY.iter().position(|k| k == self)
    }

    /// The hierarchy fields below this one, nearest first.
    ///
    /// Empty for `employee` and for every field outside the hierarchy.
    #[must_use]
    pub fn descendants(&self) -> &'static [Self] {
        match self.hierarchy_level() {
            Some(level) => &Self::HIERARCHY[level + 1..],
            None => &[],
        }
    }
}

impl FromStr for FilterKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .or_else(|| Self::from_query_param(s))
            .ok_or_else(|| DomainError::UnknownFilterKey(s.to_string()))
    }
}

impl std::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The complete set of report-scoping fields.
///
/// Values are owned strings; the empty string means "no constraint".
/// Numeric bounds are kept exactly as typed and only interpreted by the
/// endpoint that receives them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSet {
    zone: String,
    state: String,
    area: String,
    dealer: String,
    employee: String,
    segment: String,
    enquiry_status: String,
    enquiry_stage: String,
    enquiry_type: String,
    kva_min: String,
    kva_max: String,
    start_date: String,
    end_date: String,
}

impl FilterSet {
    /// Creates a filter set with every field unconstrained, dates included.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the session default: current fiscal year start through `today`,
    /// every other field unconstrained.
    ///
    /// If the fiscal year start cannot be represented, the range collapses
    /// to `today..=today`.
    #[must_use]
    pub fn with_defaults(today: Date) -> Self {
        let start: Date = FiscalYear::containing(today).map_or(today, |fy| fy.start());
        Self {
            start_date: format_iso_date(start),
            end_date: format_iso_date(today),
            ..Self::default()
        }
    }

    /// Reads one field.
    #[must_use]
    pub fn get(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Zone => &self.zone,
            FilterKey::State => &self.state,
            FilterKey::Area => &self.area,
            FilterKey::Dealer => &self.dealer,
            FilterKey::Employee => &self.employee,
            FilterKey::Segment => &self.segment,
            FilterKey::EnquiryStatus => &self.enquiry_status,
            FilterKey::EnquiryStage => &self.enquiry_stage,
            FilterKey::EnquiryType => &self.enquiry_type,
            FilterKey::KvaMin => &self.kva_min,
            FilterKey::KvaMax => &self.kva_max,
            FilterKey::StartDate => &self.start_date,
            FilterKey::EndDate => &self.end_date,
        }
    }

    fn slot_mut(&mut self, key: FilterKey) -> &mut String {
        match key {
            FilterKey::Zone => &mut self.zone,
            FilterKey::State => &mut self.state,
            FilterKey::Area => &mut self.area,
            FilterKey::Dealer => &mut self.dealer,
            FilterKey::Employee => &mut self.employee,
            FilterKey::Segment => &mut self.segment,
            FilterKey::EnquiryStatus => &mut self.enquiry_status,
            FilterKey::EnquiryStage => &mut self.enquiry_stage,
            FilterKey::EnquiryType => &mut self.enquiry_type,
            FilterKey::KvaMin => &mut self.kva_min,
            FilterKey::KvaMax => &mut self.kva_max,
            FilterKey::StartDate => &mut self.start_date,
            FilterKey::EndDate => &mut self.end_date,
        }
    }

    /// Returns a copy with `key` set to `value` and every hierarchy
    /// descendant of `key` cleared.
    #[must_use]
    pub fn with_filter(&self, key: FilterKey, value: impl Into<String>) -> Self {
        let mut next: Self = self.clone();
        *next.slot_mut(key) = value.into();
        for descendant in key.descendants() {
            next.slot_mut(*descendant).clear();
        }
        next
    }

    /// Returns a copy with every field in `patch` applied verbatim.
    ///
    /// No cascade-clearing happens here: the caller is responsible for
    /// supplying a consistent hierarchy.
    #[must_use]
    pub fn merged(&self, patch: &FilterPatch) -> Self {
        let mut next: Self = self.clone();
        for (key, value) in patch.iter() {
            *next.slot_mut(key) = value.to_string();
        }
        next
    }

    /// Returns true if no hierarchy field is set below an unset ancestor.
    ///
    /// Always holds for sets built only through [`Self::with_filter`];
    /// [`Self::merged`] may break it.
    #[must_use]
    pub fn hierarchy_is_consistent(&self) -> bool {
        let mut gap: bool = false;
        for key in FilterKey::HIERARCHY {
            let set: bool = !self.get(key).is_empty();
            if set && gap {
                return false;
            }
            gap |= !set;
        }
        true
    }

    /// Keys whose value differs between `self` and `other`, in canonical order.
    #[must_use]
    pub fn changed_keys(&self, other: &Self) -> Vec<FilterKey> {
        FilterKey::ALL
            .into_iter()
            .filter(|key| self.get(*key) != other.get(*key))
            .collect()
    }

    /// The fields that currently constrain the report.
    #[must_use]
    pub fn active_filters(&self) -> ActiveFilterMap {
        ActiveFilterMap(
            FilterKey::ALL
                .into_iter()
                .filter(|key| !self.get(*key).is_empty())
                .map(|key| (key, self.get(key).to_string()))
                .collect(),
        )
    }

    /// Serializes the active, allow-listed fields into backend query parameters.
    #[must_use]
    pub fn query_params(&self) -> QueryParams {
        self.active_filters().query_params()
    }

    /// Builds a patch from backend query parameters (URL restore).
    ///
    /// Accepts both the backend names (`employee_name`, `start_date`) and the
    /// dashboard field names (`employee`, `startDate`). Returns the patch and
    /// the names that matched no filter field.
    pub fn patch_from_query_pairs<I, K, V>(pairs: I) -> (FilterPatch, Vec<String>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut patch: FilterPatch = FilterPatch::new();
        let mut unknown: Vec<String> = Vec::new();
        for (name, value) in pairs {
            match FilterKey::from_str(name.as_ref()) {
                Ok(key) => patch.set(key, value.as_ref()),
                Err(_) => unknown.push(name.as_ref().to_string()),
            }
        }
        (patch, unknown)
    }
}

/// A partial filter set for bulk updates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterPatch(BTreeMap<FilterKey, String>);

impl FilterPatch {
    /// Creates an empty patch.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets a field in the patch, replacing any earlier value for it.
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    /// Builder-style [`Self::set`].
    #[must_use]
    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Iterates the patched fields in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Number of fields in the patch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the patch sets nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(FilterKey, String)> for FilterPatch {
    fn from_iter<T: IntoIterator<Item = (FilterKey, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The non-empty subset of a [`FilterSet`], in canonical key order.
///
/// Always derived on demand from the current set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ActiveFilterMap(BTreeMap<FilterKey, String>);

impl ActiveFilterMap {
    /// The value of an active field.
    #[must_use]
    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    /// Returns true if `key` is active.
    #[must_use]
    pub fn contains(&self, key: FilterKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Number of active fields, as shown on filter badges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the active fields in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Projects the allow-listed fields into backend query parameters.
    #[must_use]
    pub fn query_params(&self) -> QueryParams {
        QueryParams(
            self.iter()
                .filter_map(|(key, value)| key.query_param().map(|name| (name, value.to_string())))
                .collect(),
        )
    }
}

/// Flat, ordered backend query parameters.
///
/// The transport is the caller's business; this only fixes names and values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    /// The value of a parameter by its backend name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the parameter is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates `(name, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// Number of parameters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copies the parameters into a name-keyed map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    /// Renders `name=value&...` with percent-encoded values.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
            .collect::<Vec<String>>()
            .join("&")
    }
}
