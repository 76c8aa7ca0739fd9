// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The injected time source.
//!
//! Every time-driven rule (twelve-month rest, suspension expiry) receives a
//! `Clock` rather than reading the system time, so tests pin "today" and
//! sweeps can capture a single consistent snapshot for multi-step
//! operations.

use jurado_domain::calendar;
use time::Date;

/// Supplies "today" and the current calendar year.
pub trait Clock {
    /// Returns today's calendar date.
    fn today(&self) -> Date;

    /// Returns the current calendar year.
    fn current_year(&self) -> i32 {
        self.today().year()
    }

    /// Returns today as an ISO `YYYY-MM-DD` string.
    fn today_iso(&self) -> String {
        calendar::format_date(self.today())
    }
}

/// The wall clock, read in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        time::OffsetDateTime::now_utc().date()
    }
}

/// A clock frozen at a fixed date, for tests and reproducible sweeps.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: Date,
}

impl FixedClock {
    /// Creates a clock frozen at the given date.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.date
    }
}
