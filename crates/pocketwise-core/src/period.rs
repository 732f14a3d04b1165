//! Calendar month windows
//!
//! All month math is driven by an injected reference instant. The calendar
//! month is evaluated in the offset of that instant, so a caller passing a
//! local `DateTime` gets local month boundaries.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc};

use crate::models::{FixedExpense, Transaction};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Records that carry a creation timestamp
pub trait Dated {
    fn created_at(&self) -> DateTime<Utc>;
}

impl Dated for Transaction {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Dated for FixedExpense {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl<T: Dated> Dated for &T {
    fn created_at(&self) -> DateTime<Utc> {
        (**self).created_at()
    }
}

/// A calendar month pinned to the offset of a reference instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
    offset: FixedOffset,
}

impl CalendarMonth {
    /// The month that contains `now`
    pub fn containing<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let now = now.fixed_offset();
        Self {
            year: now.year(),
            month: now.month(),
            offset: *now.offset(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Whether `at` falls inside this month (same month and year)
    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        let local = at.with_timezone(&self.offset);
        local.year() == self.year && local.month() == self.month
    }

    /// Keep only the records created in this month, preserving order
    pub fn filter<'a, T: Dated>(&self, records: &'a [T]) -> Vec<&'a T> {
        records
            .iter()
            .filter(|r| self.contains(&r.created_at()))
            .collect()
    }

    /// Day of the month (1-based) on which `at` falls, in this month's offset
    pub fn day_of(&self, at: &DateTime<Utc>) -> u32 {
        at.with_timezone(&self.offset).day()
    }

    pub fn previous(&self) -> Self {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self {
            year,
            month,
            offset: self.offset,
        }
    }

    /// The `count` months ending with this one, oldest first
    pub fn trailing(&self, count: u32) -> Vec<Self> {
        let mut months = Vec::with_capacity(count as usize);
        let mut cursor = *self;
        for _ in 0..count {
            months.push(cursor);
            cursor = cursor.previous();
        }
        months.reverse();
        months
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ if is_leap_year(self.year) => 29,
            _ => 28,
        }
    }

    /// Short month name, e.g. "Mar"
    pub fn label(&self) -> &'static str {
        MONTH_ABBREVIATIONS[(self.month as usize - 1) % 12]
    }

    /// `YYYY-MM`
    pub fn period(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Records created in the same calendar month and year as `now`
pub fn current_month<'a, T: Dated, Tz: TimeZone>(
    records: &'a [T],
    now: &DateTime<Tz>,
) -> Vec<&'a T> {
    CalendarMonth::containing(now).filter(records)
}
