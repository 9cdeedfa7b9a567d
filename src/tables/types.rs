// src/tables/types.rs

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::calendar::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sport {
    Football,
    Basketball,
    Baseball,
    Hockey,
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sport::Football => "Football",
            Sport::Basketball => "Basketball",
            Sport::Baseball => "Baseball",
            Sport::Hockey => "Hockey",
        };
        f.write_str(name)
    }
}

/// ASCII-only; `\d` would also accept other Unicode digits.
static LITERAL_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("literal date pattern"));

/// How a row's dates take part in window filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTag {
    /// Nothing to filter on; always shown.
    Open,
    /// Shown only when this day falls in the window.
    On(NaiveDate),
    /// A `YYYY-MM-DD`-shaped token that is not a real day; never shown.
    Malformed,
}

/// When an event happens, kept structured so filtering never has to
/// re-read the display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDates {
    Day(NaiveDate),
    Span { start: NaiveDate, end: NaiveDate },
    Label(String),
}

impl EventDates {
    pub fn span(start: NaiveDate, end: NaiveDate) -> Self {
        EventDates::Span { start, end }
    }

    /// A span is filtered on its first day only.
    pub fn tag(&self) -> DateTag {
        match self {
            EventDates::Day(day) => DateTag::On(*day),
            EventDates::Span { start, .. } => DateTag::On(*start),
            EventDates::Label(text) => match LITERAL_DATE.find(text) {
                None => DateTag::Open,
                Some(m) => NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d")
                    .map(DateTag::On)
                    .unwrap_or(DateTag::Malformed),
            },
        }
    }
}

impl fmt::Display for EventDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventDates::Day(day) => write!(f, "{}", day.format("%Y-%m-%d")),
            EventDates::Span { start, end } => write!(
                f,
                "{} to {}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ),
            EventDates::Label(text) => f.write_str(text),
        }
    }
}

impl Serialize for EventDates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One advertiser-facing event line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRow {
    pub sport: Sport,
    pub event_name: String,
    pub why_it_matters: String,
    pub projected_views_millions: f64,
    pub dates: EventDates,
}

impl EventRow {
    pub fn is_date_filterable(&self) -> bool {
        self.dates.tag() != DateTag::Open
    }

    pub fn in_window(&self, window: &Window) -> bool {
        match self.dates.tag() {
            DateTag::Open => true,
            DateTag::On(day) => window.contains_day(day),
            DateTag::Malformed => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SportsTable {
    pub title: String,
    pub rows: Vec<EventRow>,
}

/// Window bounds as calendar dates; serialized `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl From<&Window> for ReportWindow {
    fn from(w: &Window) -> Self {
        Self {
            start: w.start.date_naive(),
            end: w.end.date_naive(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SportsTablesResponse {
    pub generated_at: String,
    pub window: ReportWindow,
    pub tables: [SportsTable; 3],
}

impl SportsTablesResponse {
    pub fn row_count(&self) -> usize {
        self.tables.iter().map(|t| t.rows.len()).sum()
    }
}
