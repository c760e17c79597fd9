// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Rows per page, or every row on a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PageSizeRepr", into = "PageSizeRepr")]
pub enum PageSize {
    /// A fixed number of rows per page.
    Rows(NonZeroUsize),
    /// Every row on one page.
    All,
}

/// Rows per page when a grid is created.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// The page sizes offered by the page-size selector.
pub const PAGE_SIZE_CHOICES: [usize; 4] = [10, 20, 50, 100];

impl PageSize {
    /// A fixed page size.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPageSize`] for zero.
    pub fn rows(rows: usize) -> Result<Self, DomainError> {
        NonZeroUsize::new(rows)
            .map(Self::Rows)
            .ok_or_else(|| DomainError::InvalidPageSize(rows.to_string()))
    }

    /// Number of pages needed for `count` rows. Never less than one.
    #[must_use]
    pub fn total_pages(&self, count: usize) -> usize {
        match self {
            Self::All => 1,
            Self::Rows(rows) => count.div_ceil(rows.get()).max(1),
        }
    }

    /// The half-open row range shown on 1-based `page` out of `count` rows.
    ///
    /// The range is clipped to `count`, so an out-of-range page yields an
    /// empty range rather than panicking.
    #[must_use]
    pub fn page_range(&self, page: usize, count: usize) -> std::ops::Range<usize> {
        match self {
            Self::All => 0..count,
            Self::Rows(rows) => {
                let size: usize = rows.get();
                let start: usize = page.saturating_sub(1).saturating_mul(size).min(count);
                let end: usize = start.saturating_add(size).min(count);
                start..end
            }
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        NonZeroUsize::new(DEFAULT_PAGE_SIZE).map_or(Self::All, Self::Rows)
    }
}

impl FromStr for PageSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed
            .parse::<usize>()
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self::Rows)
            .ok_or_else(|| DomainError::InvalidPageSize(s.to_string()))
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rows(rows) => write!(f, "{rows}"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Wire form: a positive integer or the string `"all"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum PageSizeRepr {
    Rows(usize),
    Word(String),
}

impl TryFrom<PageSizeRepr> for PageSize {
    type Error = DomainError;

    fn try_from(value: PageSizeRepr) -> Result<Self, Self::Error> {
        match value {
            PageSizeRepr::Rows(rows) => Self::rows(rows),
            PageSizeRepr::Word(word) => word.parse(),
        }
    }
}

impl From<PageSize> for PageSizeRepr {
    fn from(value: PageSize) -> Self {
        match value {
            PageSize::Rows(rows) => Self::Rows(rows.get()),
            PageSize::All => Self::Word(String::from("all")),
        }
    }
}
