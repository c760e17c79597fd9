// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fiscal year arithmetic.
//!
//! Reports are scoped to an April-to-March fiscal calendar: the fiscal year
//! labelled `FY2026-27` runs from 2026-04-01 through 2027-03-31.

use crate::error::DomainError;
use time::{Date, Month};

/// The month in which every fiscal year begins.
pub const FISCAL_YEAR_START_MONTH: Month = Month::April;

/// An April-to-March fiscal year, identified by the calendar year it starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalYear {
    start: Date,
}

impl FiscalYear {
    /// Returns the fiscal year that contains `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fiscal year start falls outside the range
    /// representable by [`Date`].
    pub fn containing(date: Date) -> Result<Self, DomainError> {
        let start_year: i32 = if date.month() as u8 >= FISCAL_YEAR_START_MONTH as u8 {
            date.year()
        } else {
            date.year() - 1
        };

        let start: Date = Date::from_calendar_date(start_year, FISCAL_YEAR_START_MONTH, 1)
            .map_err(|_| DomainError::DateArithmeticOverflow {
                operation: format!("computing the fiscal year start for {date}"),
            })?;

        Ok(Self { start })
    }

    /// The calendar year this fiscal year starts in.
    #[must_use]
    pub const fn start_year(&self) -> i32 {
        self.start.year()
    }

    /// The first day of the fiscal year (1 April).
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// The last day of the fiscal year (31 March of the following year).
    ///
    /// # Errors
    ///
    /// Returns an error if the following year is not representable.
    pub fn end(&self) -> Result<Date, DomainError> {
        Date::from_calendar_date(self.start.year() + 1, Month::March, 31).map_err(|_| {
            DomainError::DateArithmeticOverflow {
                operation: format!("computing the end of {}", self.label()),
            }
        })
    }

    /// Returns true if `date` falls within this fiscal year.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        Self::containing(date).is_ok_and(|fy| fy == *self)
    }

    /// Short display label, e.g. `FY2026-27`.
    #[must_use]
    pub fn label(&self) -> String {
        let year: i32 = self.start.year();
        format!("FY{year}-{:02}", (year + 1).rem_euclid(100))
    }
}

impl std::fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`DomainError::InvalidDate`] if the string is not a valid ISO date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    let format = time::macros::format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), &format).map_err(|e| DomainError::InvalidDate {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as ISO `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_april_starts_new_fiscal_year() {
        let fy = FiscalYear::containing(date!(2026 - 04 - 01)).unwrap();
        assert_eq!(fy.start(), date!(2026 - 04 - 01));
        assert_eq!(fy.end().unwrap(), date!(2027 - 03 - 31));
    }

    #[test]
    fn test_march_belongs_to_previous_fiscal_year() {
        let fy = FiscalYear::containing(date!(2026 - 03 - 31)).unwrap();
        assert_eq!(fy.start_year(), 2025);
        assert_eq!(fy.label(), "FY2025-26");
    }

    #[test]
    fn test_january_belongs_to_previous_fiscal_year() {
        let fy = FiscalYear::containing(date!(2027 - 01 - 15)).unwrap();
        assert_eq!(fy.start(), date!(2026 - 04 - 01));
        assert!(fy.contains(date!(2026 - 12 - 31)));
        assert!(!fy.contains(date!(2027 - 04 - 01)));
    }

    #[test]
    fn test_label_wraps_century() {
        let fy = FiscalYear::containing(date!(2099 - 06 - 01)).unwrap();
        assert_eq!(fy.label(), "FY2099-00");
    }

    #[test]
    fn test_parse_and_format_iso_date() {
        let parsed = parse_iso_date("2026-10-19").unwrap();
        assert_eq!(parsed, date!(2026 - 10 - 19));
        assert_eq!(format_iso_date(parsed), "2026-10-19");
    }

    #[test]
    fn test_parse_iso_date_rejects_garbage() {
        assert!(matches!(
            parse_iso_date("19/10/2026"),
            Err(DomainError::InvalidDate { .. })
        ));
    }
}
