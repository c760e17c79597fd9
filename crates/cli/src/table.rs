// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of a grid page and the filter panel.

use leadscope::{GridPage, TabularGrid};
use leadscope_domain::{FilterKey, FilterOptions};

/// Renders the current page as an aligned text table with a summary line.
pub fn render_page(grid: &TabularGrid) -> String {
    let page: GridPage<'_> = grid.page();
    let header: Vec<String> = grid
        .columns()
        .iter()
        .map(|c| c.label().to_string())
        .collect();
    let rows: Vec<Vec<String>> = page
        .rows
        .iter()
        .map(|row| {
            grid.columns()
                .iter()
                .map(|c| c.display(row.record).into_string())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out: String = String::new();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out.push_str(&format!(
        "Page {} of {} ({} of {} records)\n",
        page.current_page, page.total_pages, page.filtered_count, page.total_count
    ));
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

/// Renders the choices each filter control would offer.
pub fn render_options(options: &FilterOptions) -> String {
    let mut out: String = String::new();
    for key in FilterKey::ALL {
        let choices: &[String] = options.for_key(key);
        if !choices.is_empty() {
            out.push_str(&format!("{key}: {}\n", choices.join(", ")));
        }
    }
    out
}
