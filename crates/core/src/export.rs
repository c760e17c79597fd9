// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::grid::TabularGrid;
use leadscope_domain::{ColumnSpec, GridRecord, RecordId};
use std::io;
use std::str::FromStr;
use tracing::info;

/// Which rows of a grid an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportScope {
    /// Every filtered record in display order, across all pages.
    #[default]
    Filtered,
    /// Only the rows on the current page.
    CurrentPage,
}

impl FromStr for ExportScope {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "filtered" | "all" => Ok(Self::Filtered),
            "page" | "current-page" => Ok(Self::CurrentPage),
            _ => Err(CoreError::InvalidInput(format!(
                "Unknown export scope '{s}'. Must be 'filtered' or 'page'"
            ))),
        }
    }
}

/// Writes the grid's rows as CSV.
///
/// The header holds column labels; each cell is the column's formatted
/// display value.
///
/// # Arguments
///
/// * `grid` - The grid to export
/// * `writer` - Destination for the CSV text
/// * `scope` - Which rows to include
///
/// # Returns
///
/// The number of data rows written.
///
/// # Errors
///
/// Returns [`CoreError::Export`] if writing fails.
pub fn export_csv<W: io::Write>(
    grid: &TabularGrid,
    writer: W,
    scope: ExportScope,
) -> Result<usize, CoreError> {
    let mut out: csv::Writer<W> = csv::Writer::from_writer(writer);
    out.write_record(grid.columns().iter().map(ColumnSpec::label))?;

    let rows: Box<dyn Iterator<Item = (&RecordId, &GridRecord)>> = match scope {
        ExportScope::Filtered => Box::new(grid.filtered_records()),
        ExportScope::CurrentPage => Box::new(grid.page_records()),
    };

    let mut written: usize = 0;
    for (_, record) in rows {
        out.write_record(
            grid.columns()
                .iter()
                .map(|column| column.display(record).into_string()),
        )?;
        written += 1;
    }

    out.flush().map_err(|e| CoreError::Export(e.to_string()))?;
    info!(rows = written, scope = ?scope, "Exported grid as CSV");
    Ok(written)
}
