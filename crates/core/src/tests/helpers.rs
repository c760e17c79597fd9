// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::TabularGrid;
use leadscope_domain::{CellValue, ColumnSpec, GridRecord, RecordId, ValueKind};

pub fn lead(id: &str, dealer: &str, kva: impl Into<CellValue>) -> GridRecord {
    GridRecord::new()
        .with("id", id)
        .with("dealer", dealer)
        .with("kva", kva)
}

pub fn lead_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("id", "ID").not_searchable(),
        ColumnSpec::new("dealer", "Dealer").with_kind(ValueKind::Text),
        ColumnSpec::new("kva", "kVA"),
    ]
}

/// `count` leads with ids `L001..`, dealers alternating between two names.
pub fn numbered_leads(count: usize) -> Vec<GridRecord> {
    (1..=count)
        .map(|n| {
            let dealer: &str = if n % 2 == 0 { "Even Motors" } else { "Odd Power" };
            lead(&format!("L{n:03}"), dealer, i64::try_from(n).unwrap())
        })
        .collect()
}

pub fn numbered_grid(count: usize) -> TabularGrid {
    TabularGrid::new(lead_columns(), numbered_leads(count))
}

pub fn page_keys(grid: &TabularGrid) -> Vec<String> {
    grid.page_records().map(|(id, _)| id.to_string()).collect()
}

pub fn filtered_dealers(grid: &TabularGrid) -> Vec<String> {
    grid.filtered_records()
        .map(|(_, record)| record.value("dealer").display_string().unwrap_or_default())
        .collect()
}

pub fn key(id: &str) -> RecordId {
    RecordId::key(id)
}
