// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::record::{CellValue, GridRecord};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// How a column's values compare when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Compare as numbers; values that do not parse sort with the missing ones.
    Numeric,
    /// Locale-aware string comparison.
    Text,
    /// Compare as ISO dates; values that do not parse sort with the missing ones.
    Date,
}

impl ValueKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Text => "text",
            Self::Date => "date",
        }
    }
}

impl FromStr for ValueKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "numeric" | "number" => Ok(Self::Numeric),
            "text" | "string" => Ok(Self::Text),
            "date" => Ok(Self::Date),
            _ => Err(DomainError::InvalidValueKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Text shown for a cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayValue(String);

impl DisplayValue {
    /// Wraps display text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for DisplayValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Turns a cell into display text.
///
/// Formatting only affects presentation and export; filtering and sorting
/// always read the raw value.
pub trait Formatter: Send + Sync {
    /// Formats `value`, which was read from `record`.
    fn format(&self, value: &CellValue, record: &GridRecord) -> DisplayValue;
}

impl<F> Formatter for F
where
    F: Fn(&CellValue, &GridRecord) -> DisplayValue + Send + Sync,
{
    fn format(&self, value: &CellValue, record: &GridRecord) -> DisplayValue {
        self(value, record)
    }
}

/// Renders numbers with a fixed number of decimals.
///
/// Non-numeric values fall through unchanged; missing values render empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDecimals(pub usize);

impl Formatter for FixedDecimals {
    fn format(&self, value: &CellValue, _record: &GridRecord) -> DisplayValue {
        match value.as_number() {
            Some(n) => DisplayValue(format!("{n:.prec$}", prec = self.0)),
            None => DisplayValue(value.display_string().unwrap_or_default()),
        }
    }
}

/// Renders missing or empty values as a placeholder (e.g. `-`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder(pub String);

impl Formatter for Placeholder {
    fn format(&self, value: &CellValue, _record: &GridRecord) -> DisplayValue {
        match value.display_string() {
            Some(s) if !s.is_empty() => DisplayValue(s),
            _ => DisplayValue(self.0.clone()),
        }
    }
}

/// Static configuration for one grid column.
#[derive(Clone)]
pub struct ColumnSpec {
    key: String,
    label: String,
    sortable: bool,
    filterable: bool,
    searchable: bool,
    value_kind: Option<ValueKind>,
    formatter: Option<Arc<dyn Formatter>>,
}

impl ColumnSpec {
    /// Creates a sortable, filterable, searchable column with no declared kind.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
            filterable: true,
            searchable: true,
            value_kind: None,
            formatter: None,
        }
    }

    /// Disables sorting on this column.
    #[must_use]
    pub const fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Disables the per-column filter on this column.
    #[must_use]
    pub const fn not_filterable(mut self) -> Self {
        self.filterable = false;
        self
    }

    /// Excludes this column from the global search.
    #[must_use]
    pub const fn not_searchable(mut self) -> Self {
        self.searchable = false;
        self
    }

    /// Declares how values compare when sorting.
    #[must_use]
    pub const fn with_kind(mut self, kind: ValueKind) -> Self {
        self.value_kind = Some(kind);
        self
    }

    /// Attaches a display formatter.
    #[must_use]
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// The record field this column reads.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The header text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the column can be sorted.
    #[must_use]
    pub const fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Whether the column accepts a filter.
    #[must_use]
    pub const fn is_filterable(&self) -> bool {
        self.filterable
    }

    /// Whether the column participates in the global search.
    #[must_use]
    pub const fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// The declared value kind, if any.
    #[must_use]
    pub const fn value_kind(&self) -> Option<ValueKind> {
        self.value_kind
    }

    /// Display text for this column's cell in `record`.
    #[must_use]
    pub fn display(&self, record: &GridRecord) -> DisplayValue {
        let value: &CellValue = record.value(&self.key);
        match &self.formatter {
            Some(formatter) => formatter.format(value, record),
            None => DisplayValue(value.display_string().unwrap_or_default()),
        }
    }
}

impl std::fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("searchable", &self.searchable)
            .field("value_kind", &self.value_kind)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

/// Serializable column description, as found in grid config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// The record field.
    pub key: String,
    /// Header text; defaults to the key.
    #[serde(default)]
    pub label: Option<String>,
    /// Defaults to true.
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Defaults to true.
    #[serde(default = "default_true")]
    pub filterable: bool,
    /// Defaults to true.
    #[serde(default = "default_true")]
    pub searchable: bool,
    /// Declared comparison kind.
    #[serde(default)]
    pub kind: Option<ValueKind>,
    /// Render numbers with this many decimals.
    #[serde(default)]
    pub decimals: Option<usize>,
    /// Render missing values as this text.
    #[serde(default)]
    pub placeholder: Option<String>,
}

const fn default_true() -> bool {
    true
}

impl ColumnConfig {
    /// A config for `key` with every default applied.
    #[must_use]
    pub fn for_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            sortable: true,
            filterable: true,
            searchable: true,
            kind: None,
            decimals: None,
            placeholder: None,
        }
    }

    /// Builds the runtime column.
    ///
    /// When both `decimals` and `placeholder` are given, decimals apply to
    /// numbers and the placeholder to missing values.
    #[must_use]
    pub fn into_spec(self) -> ColumnSpec {
        let label: String = self.label.unwrap_or_else(|| self.key.clone());
        let mut spec: ColumnSpec = ColumnSpec::new(self.key, label);
        spec.sortable = self.sortable;
        spec.filterable = self.filterable;
        spec.searchable = self.searchable;
        spec.value_kind = self.kind;

        match (self.decimals, self.placeholder) {
            (Some(decimals), Some(placeholder)) => {
                let numbers: FixedDecimals = FixedDecimals(decimals);
                let missing: Placeholder = Placeholder(placeholder);
                spec.with_formatter(move |value: &CellValue, record: &GridRecord| {
                    if value.is_missing() {
                        missing.format(value, record)
                    } else {
                        numbers.format(value, record)
                    }
                })
            }
            (Some(decimals), None) => spec.with_formatter(FixedDecimals(decimals)),
            (None, Some(placeholder)) => spec.with_formatter(Placeholder(placeholder)),
            (None, None) => spec,
        }
    }
}
