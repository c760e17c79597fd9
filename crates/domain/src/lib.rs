// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod collation;
mod column;
mod error;
mod filter;
mod filter_options;
mod fiscal_year;
mod page_size;
mod record;

#[cfg(test)]
mod tests;

pub use collation::{contains_ignore_case, locale_compare};
pub use column::{
    ColumnConfig, ColumnSpec, DisplayValue, FixedDecimals, Formatter, Placeholder, ValueKind,
};
pub use error::DomainError;
pub use filter::{ActiveFilterMap, FilterKey, FilterPatch, FilterSet, QueryParams};
pub use filter_options::{
    ENQUIRY_STAGES, ENQUIRY_STATUSES, ENQUIRY_TYPES, FilterOptions, record_field,
};
pub use fiscal_year::{FISCAL_YEAR_START_MONTH, FiscalYear, format_iso_date, parse_iso_date};
pub use page_size::{DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES, PageSize};
pub use record::{CellValue, DEFAULT_IDENTITY_FIELD, GridRecord, RecordId};
