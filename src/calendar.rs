// src/calendar.rs

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};

/// A fixed (month, day) pair approximating when a recurring event lands.
/// `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub month: u32,
    pub day: u32,
}

impl Anchor {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// This anchor in `year`, clamped to the last day of the month.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        ymd_clamped(year, self.month, self.day)
    }

    /// Nearest occurrence not before `now`.
    ///
    /// The candidate is midnight UTC of the anchor in `now`'s year; when that
    /// instant is strictly earlier than `now` the following year is used.
    pub fn next_occurrence(&self, now: DateTime<Utc>) -> NaiveDate {
        let candidate = self.in_year(now.year());
        if midnight_utc(candidate) < now {
            self.in_year(now.year() + 1)
        } else {
            candidate
        }
    }
}

/// The forward-looking interval used to filter events, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    /// `[now, now + 12 months]`.
    pub fn twelve_months_from(now: DateTime<Utc>) -> Self {
        Self {
            start: now,
            end: add_months_clamped(now, 12),
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }

    /// A calendar day is inside when its midday UTC instant is.
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.contains(midday_utc(day))
    }
}

/// Adds calendar months keeping the day-of-month, clamping to the last day
/// of the target month when it is shorter (2024-02-29 + 12 → 2025-02-28).
pub fn add_months_clamped(at: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    at.checked_add_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// `year-month-day`, walking the day back until it exists in that month.
pub fn ymd_clamped(year: i32, month: u32, day: u32) -> NaiveDate {
    (1..=day.min(31))
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
        .unwrap_or(NaiveDate::MAX)
}

pub fn midnight_utc(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

pub fn midday_utc(day: NaiveDate) -> DateTime<Utc> {
    midnight_utc(day) + Duration::hours(12)
}
