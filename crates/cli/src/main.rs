// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # leadscope
//!
//! Loads a JSON array of lead records, drives the report filters and the
//! tabular grid from flags, and prints the resulting page along with the
//! query string the report filters would send to the backend.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod table;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use leadscope::{
    Clock, ExportScope, FilterState, FixedClock, GridConfig, SystemClock, TabularGrid, export_csv,
    load_records_json,
};
use leadscope_domain::{
    FilterKey, FilterOptions, FilterSet, GridRecord, PageSize, parse_iso_date,
};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use time::Date;
use tracing::level_filters::LevelFilter;
use tracing::{error, info, warn};
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            error!("{err:?}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Leadscope - filter, sort and page through lead records
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file holding an array of record objects
    #[arg(short, long)]
    records: PathBuf,

    /// JSON grid config (identity field, page size, columns)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report filter as `key=value`; repeatable, applied in order
    #[arg(short, long = "filter", value_parser = parse_filter)]
    filters: Vec<(FilterKey, String)>,

    /// Restore report filters from a query string such as `state=Goa&kva_min=10`
    #[arg(long)]
    query: Option<String>,

    /// Column filter as `column=text`; repeatable
    #[arg(long = "column-filter", value_parser = parse_column_filter)]
    column_filters: Vec<(String, String)>,

    /// Search text matched against every searchable column
    #[arg(short, long)]
    search: Option<String>,

    /// Column to sort by
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    desc: bool,

    /// 1-based page to show
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Rows per page, or `all`
    #[arg(long)]
    page_size: Option<PageSize>,

    /// Date used for the fiscal-year defaults (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_iso_date)]
    today: Option<Date>,

    /// Print the choices each filter selector would offer
    #[arg(long)]
    options: bool,

    /// Write the rows as CSV to this file
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Which rows to export: `filtered` or `page`
    #[arg(long, default_value = "filtered", requires = "export")]
    scope: ExportScope,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn run(self) -> Result<()> {
        let records: Vec<GridRecord> = load_records_json(
            &fs::read_to_string(&self.records)
                .wrap_err_with(|| format!("Failed to read {}", self.records.display()))?,
        )
        .wrap_err("Failed to parse records")?;

        let config: GridConfig = match &self.config {
            Some(path) => GridConfig::from_json_str(
                &fs::read_to_string(path)
                    .wrap_err_with(|| format!("Failed to read {}", path.display()))?,
            )
            .wrap_err("Failed to parse grid config")?,
            None => GridConfig::default(),
        };

        let today: Date = self.today.unwrap_or_else(|| SystemClock.today());
        let filters: FilterState<FixedClock> = self.report_filters(today)?;
        let active: Vec<String> = filters
            .active_filters()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        println!("Report filters: {}", active.join(", "));
        println!("Backend query: ?{}", filters.build_query_params().to_query_string());
        if self.options {
            print!(
                "{}",
                table::render_options(&FilterOptions::from_records(&records, filters.filters()))
            );
        }

        let grid: TabularGrid = self.grid(config, records)?;
        print!("{}", table::render_page(&grid));

        if let Some(path) = &self.export {
            let file: File = File::create(path)
                .wrap_err_with(|| format!("Failed to create {}", path.display()))?;
            let rows: usize = export_csv(&grid, BufWriter::new(file), self.scope)
                .wrap_err_with(|| format!("Failed to export to {}", path.display()))?;
            info!(rows, path = %path.display(), "Export written");
        }
        Ok(())
    }

    fn report_filters(&self, today: Date) -> Result<FilterState<FixedClock>> {
        let mut state: FilterState<FixedClock> = FilterState::with_clock(FixedClock::new(today));

        if let Some(query) = &self.query {
            let pairs: Vec<(String, String)> = decode_query(query)?;
            let (patch, unknown) = FilterSet::patch_from_query_pairs(pairs);
            for name in unknown {
                warn!(%name, "Ignoring unknown query parameter");
            }
            state.update_filters(patch);
        }

        for (key, value) in &self.filters {
            state.update_filter(*key, value.clone());
        }
        Ok(state)
    }

    fn grid(&self, config: GridConfig, records: Vec<GridRecord>) -> Result<TabularGrid> {
        let mut grid: TabularGrid = config.build(records).wrap_err("Failed to build grid")?;

        if let Some(page_size) = self.page_size {
            grid.set_page_size(page_size);
        }
        for (column, text) in &self.column_filters {
            grid.set_filter(column, text.clone());
        }
        if let Some(search) = &self.search {
            grid.set_search(search.clone());
        }
        if let Some(column) = &self.sort {
            grid.set_sort(column);
            if self.desc {
                grid.set_sort(column);
            }
        }
        grid.set_page(self.page);
        Ok(grid)
    }
}

fn decode_query(query: &str) -> Result<Vec<(String, String)>> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| -> Result<(String, String)> {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = urlencoding::decode(&value.replace('+', " "))
                .wrap_err_with(|| format!("Query value for '{name}' is not valid UTF-8"))?
                .into_owned();
            Ok((name.to_string(), value))
        })
        .collect()
}

fn parse_filter(raw: &str) -> Result<(FilterKey, String), String> {
    let (key, value) = split_assignment(raw)?;
    let key: FilterKey = key.parse().map_err(|e| format!("{e}"))?;
    Ok((key, value))
}

fn parse_column_filter(raw: &str) -> Result<(String, String), String> {
    split_assignment(raw).map(|(column, text)| (column.to_string(), text))
}

fn split_assignment(raw: &str) -> Result<(&str, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim(), value.to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("Expected 'key=value', got '{raw}'"))
}
