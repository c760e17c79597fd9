// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::cell::Cell;
use time::{Date, OffsetDateTime};

/// Source of the current calendar date for date-relative defaults.
pub trait Clock {
    /// Today's date.
    fn today(&self) -> Date;
}

/// Reads the system clock in the local timezone.
///
/// Falls back to UTC when the local offset cannot be determined.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .date()
    }
}

/// A clock pinned to a date that can be moved by hand.
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Cell<Date>,
}

impl FixedClock {
    /// Creates a clock reading `date`.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self {
            date: Cell::new(date),
        }
    }

    /// Moves the clock to `date`.
    pub fn set(&self, date: Date) {
        self.date.set(date);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.date.get()
    }
}
