// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grid configuration and record loading from JSON.

use crate::error::CoreError;
use crate::grid::TabularGrid;
use leadscope_domain::{ColumnConfig, ColumnSpec, DEFAULT_IDENTITY_FIELD, GridRecord, PageSize};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// How a grid is laid out over a record collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// The field records are identified by.
    #[serde(default = "default_identity_field")]
    pub identity_field: String,
    /// Initial page size.
    #[serde(default)]
    pub page_size: PageSize,
    /// Column schema. Inferred from the records when empty.
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

fn default_identity_field() -> String {
    String::from(DEFAULT_IDENTITY_FIELD)
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            identity_field: default_identity_field(),
            page_size: PageSize::default(),
            columns: Vec::new(),
        }
    }
}

impl GridConfig {
    /// Parses a config document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// One default column per field of the first record, in field order.
    #[must_use]
    pub fn infer_columns(records: &[GridRecord]) -> Vec<ColumnConfig> {
        records
            .first()
            .map(|record| record.field_names().map(ColumnConfig::for_key).collect())
            .unwrap_or_default()
    }

    /// Builds a grid over `records`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if two columns share a key.
    pub fn build(self, records: Vec<GridRecord>) -> Result<TabularGrid, CoreError> {
        let columns: Vec<ColumnConfig> = if self.columns.is_empty() {
            let inferred: Vec<ColumnConfig> = Self::infer_columns(&records);
            debug!(columns = inferred.len(), "Inferred grid columns from first record");
            inferred
        } else {
            self.columns
        };

        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(CoreError::InvalidInput(format!(
                    "Duplicate column key '{}'",
                    column.key
                )));
            }
        }

        let specs: Vec<ColumnSpec> = columns.into_iter().map(ColumnConfig::into_spec).collect();
        Ok(
            TabularGrid::with_identity_field(specs, records, self.identity_field)
                .with_page_size(self.page_size),
        )
    }
}

/// Parses a JSON array of record objects.
///
/// # Errors
///
/// Returns an error if the document is not an array of objects or holds a
/// value that cannot be represented.
pub fn load_records_json(json: &str) -> Result<Vec<GridRecord>, CoreError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Array(items) = value else {
        return Err(CoreError::InvalidInput(String::from(
            "Expected a JSON array of records",
        )));
    };
    items
        .iter()
        .map(|item| GridRecord::from_json(item).map_err(CoreError::from))
        .collect()
}
