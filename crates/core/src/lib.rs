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

mod apply;
mod clock;
mod command;
mod config;
mod error;
mod export;
mod grid;
mod pipeline;
mod state;
mod view_state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply_filter_command;
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::{FilterCommand, GridCommand};
pub use config::{GridConfig, load_records_json};
pub use error::CoreError;
pub use export::{ExportScope, export_csv};
pub use grid::{GridPage, PageRow, Recomputations, TabularGrid};
pub use pipeline::{
    PageWindow, compare_cells, filter_indices, matches_column_filters, matches_search, paginate,
    sort_indices,
};
pub use state::{FilterState, FilterTransition, SubscriptionId};
pub use view_state::{GridViewState, SortDirection, SortState};
