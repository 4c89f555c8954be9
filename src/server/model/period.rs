//! Calendar month arithmetic.
//!
//! All periods are UTC calendar months. The cron trigger, the counter label, and the
//! marker expiry all derive from the same `Period`, so they agree on where a month ends.

use std::{cmp::Ordering, fmt};

use chrono::{DateTime, Datelike, Month, TimeDelta, TimeZone, Utc};

/// Months indexed by `Datelike::month0`.
const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// A single UTC calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    year: i32,
    month: Month,
}

impl Period {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The calendar month `instant` falls in.
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self {
            year: instant.year(),
            month: MONTHS[instant.month0() as usize],
        }
    }

    /// Parses a stored English month name ("March", case-insensitive) for `year`.
    ///
    /// # Returns
    /// - `Some(Period)` - Name recognised
    /// - `None` - Name is not a month
    pub fn parse(year: i32, month_name: &str) -> Option<Self> {
        month_name
            .parse::<Month>()
            .ok()
            .map(|month| Self::new(year, month))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Full English month name, e.g. "March".
    pub fn name(&self) -> &'static str {
        self.month.name()
    }

    /// The month immediately before this one; January rolls back into December of the prior year.
    pub fn previous(&self) -> Self {
        let year = match self.month {
            Month::January => self.year - 1,
            _ => self.year,
        };

        Self {
            year,
            month: self.month.pred(),
        }
    }

    /// The month immediately after this one; December rolls into January of the next year.
    pub fn next(&self) -> Self {
        let year = match self.month {
            Month::December => self.year + 1,
            _ => self.year,
        };

        Self {
            year,
            month: self.month.succ(),
        }
    }

    /// 00:00:00.000 on day 1 of this month.
    ///
    /// Only `None` for years outside chrono's representable range.
    pub fn start(&self) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(self.year, self.month.number_from_month(), 1, 0, 0, 0)
            .single()
    }

    /// 23:59:59.999 on the last day of this month.
    pub fn last_instant(&self) -> Option<DateTime<Utc>> {
        self.next()
            .start()
            .map(|start| start - TimeDelta::milliseconds(1))
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month.number_from_month())
            .cmp(&(other.year, other.month.number_from_month()))
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}
