// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::fiscal_year::parse_iso_date;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// Field name used for record identity unless a grid is told otherwise.
pub const DEFAULT_IDENTITY_FIELD: &str = "id";

static MISSING: CellValue = CellValue::Null;

/// A single scalar value in a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    /// No value (absent field or explicit null).
    #[default]
    Null,
    /// A boolean flag.
    Bool(bool),
    /// A number.
    Number(f64),
    /// Free text, including dates kept in their ISO form.
    Text(String),
}

impl CellValue {
    /// Returns true for the "no value" case.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The string form used for filtering, searching and text sorting.
    ///
    /// Integral numbers print without a fractional part (`50`, not `50.0`).
    /// Returns `None` for a missing value.
    #[must_use]
    pub fn display_string(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) if n.is_infinite() => Some(if n.is_sign_positive() {
                String::from("Infinity")
            } else {
                String::from("-Infinity")
            }),
            Self::Number(n) => Some(n.to_string()),
            Self::Text(s) => Some(s.clone()),
        }
    }

    /// The value as a finite number, if it is one or is text that parses
    /// cleanly as one.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Self::Null | Self::Bool(_) | Self::Number(_) => None,
        }
    }

    /// The value as a calendar date.
    ///
    /// Accepts `YYYY-MM-DD`, optionally followed by a `T` or space and a time
    /// component, which is ignored.
    #[must_use]
    pub fn as_date(&self) -> Option<Date> {
        let Self::Text(s) = self else {
            return None;
        };
        let trimmed: &str = s.trim();
        let date_part: &str = match trimmed.char_indices().nth(10) {
            Some((idx, 'T' | ' ')) => &trimmed[..idx],
            _ => trimmed,
        };
        parse_iso_date(date_part).ok()
    }

    /// Converts a JSON value into a cell.
    ///
    /// Arrays and objects are kept as their JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if a JSON number cannot be represented as `f64`.
    pub fn from_json(field: &str, value: &serde_json::Value) -> Result<Self, DomainError> {
        match value {
            serde_json::Value::Null => Ok(Self::Null),
            serde_json::Value::Bool(b) => Ok(Self::Bool(*b)),
            serde_json::Value::Number(n) => {
                n.as_f64()
                    .map(Self::Number)
                    .ok_or_else(|| DomainError::UnsupportedCellValue {
                        field: field.to_string(),
                        reason: format!("number {n} is not representable"),
                    })
            }
            serde_json::Value::String(s) => Ok(Self::Text(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                Ok(Self::Text(value.to_string()))
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Identity of a record within a grid.
///
/// Records carrying a value in the identity field are identified by that
/// value; the rest fall back to their position in the source collection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecordId {
    /// Value of the identity field.
    Key(String),
    /// Zero-based position in the source collection.
    Position(usize),
}

impl RecordId {
    /// Shorthand for a keyed identity.
    #[must_use]
    pub fn key(value: impl Into<String>) -> Self {
        Self::Key(value.into())
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{key}"),
            Self::Position(idx) => write!(f, "#{idx}"),
        }
    }
}

/// One row of tabular data: field name to scalar value.
///
/// Records are treated as immutable once handed to a grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridRecord {
    fields: BTreeMap<String, CellValue>,
}

impl GridRecord {
    /// Creates a record with no fields.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field assignment.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// The value of `field`; absent fields read as [`CellValue::Null`].
    #[must_use]
    pub fn value(&self, field: &str) -> &CellValue {
        self.fields.get(field).unwrap_or(&MISSING)
    }

    /// Returns true if the field is present (even when null).
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Resolves the record identity.
    ///
    /// # Arguments
    ///
    /// * `identity_field` - The field holding the record key
    /// * `position` - The record's position in the source collection
    #[must_use]
    pub fn identity(&self, identity_field: &str, position: usize) -> RecordId {
        self.value(identity_field)
            .display_string()
            .map_or(RecordId::Position(position), RecordId::Key)
    }

    /// Builds a record from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not an object or holds an
    /// unrepresentable number.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, DomainError> {
        let serde_json::Value::Object(map) = value else {
            return Err(DomainError::UnsupportedCellValue {
                field: String::from("<record>"),
                reason: String::from("expected a JSON object"),
            });
        };
        let mut fields: BTreeMap<String, CellValue> = BTreeMap::new();
        for (field, raw) in map {
            fields.insert(field.clone(), CellValue::from_json(field, raw)?);
        }
        Ok(Self { fields })
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for GridRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
