// src/tables/mod.rs

pub mod catalog;
pub mod types;

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::debug;

use crate::calendar::Window;
pub use catalog::AnchorDates;
pub use types::{DateTag, EventDates, EventRow, ReportWindow, Sport, SportsTable, SportsTablesResponse};

pub const TENTPOLE_TITLE: &str = "Must-buy tentpoles for big-brand advertisers";
pub const CULTURAL_TITLE: &str =
    "Cultural moments for brand building, social buzz, and trend alignment";
pub const NICHE_TITLE: &str = "Local advertisers, niche & unique buys";

/// Build the three event tables as seen from `now`.
///
/// Rows are filtered to `[now, now + 12 months]`; `generated_at` comes from
/// the local wall clock at call time and is the only part that is not a
/// function of `now`.
pub fn generate(now: DateTime<Utc>) -> SportsTablesResponse {
    let window = Window::twelve_months_from(now);
    let dates = AnchorDates::from_reference(now);

    let tables = [
        titled(TENTPOLE_TITLE, catalog::tentpoles(&dates), &window),
        titled(CULTURAL_TITLE, catalog::cultural(&dates), &window),
        titled(NICHE_TITLE, catalog::niche(&dates), &window),
    ];

    SportsTablesResponse {
        generated_at: format_generated_at(&Local::now()),
        window: ReportWindow::from(&window),
        tables,
    }
}

/// [`generate`] against the system clock.
pub fn generate_now() -> SportsTablesResponse {
    generate(Utc::now())
}

fn titled(title: &str, rows: Vec<EventRow>, window: &Window) -> SportsTable {
    let total = rows.len();
    let rows = retain_in_window(rows, window);
    debug!(table = title, kept = rows.len(), dropped = total - rows.len(), "filtered rows to window");
    SportsTable {
        title: title.to_string(),
        rows,
    }
}

pub fn retain_in_window(rows: Vec<EventRow>, window: &Window) -> Vec<EventRow> {
    rows.into_iter().filter(|r| r.in_window(window)).collect()
}

/// Medium date + short time, e.g. `Jan 5, 2025, 3:04 PM`.
pub fn format_generated_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%b %-d, %Y, %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{add_months_clamped, midday_utc};
    use chrono::{Duration, NaiveDate};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn names(table: &SportsTable) -> Vec<&str> {
        table.rows.iter().map(|r| r.event_name.as_str()).collect()
    }

    #[test]
    fn test_window_for_early_january() {
        let resp = generate(at(2025, 1, 5, 0));
        assert_eq!(resp.window.start, day(2025, 1, 5));
        assert_eq!(resp.window.end, day(2026, 1, 5));
    }

    #[test]
    fn test_titles_are_fixed() {
        for now in [at(2025, 1, 5, 0), at(2025, 7, 19, 18), at(2028, 2, 29, 6)] {
            let resp = generate(now);
            let titles: Vec<&str> = resp.tables.iter().map(|t| t.title.as_str()).collect();
            assert_eq!(titles, vec![TENTPOLE_TITLE, CULTURAL_TITLE, NICHE_TITLE]);
        }
    }

    #[test]
    fn test_early_january_keeps_everything() {
        let resp = generate(at(2025, 1, 5, 0));
        assert_eq!(resp.tables[0].rows.len(), 8);
        assert_eq!(resp.tables[1].rows.len(), 6);
        assert_eq!(resp.tables[2].rows.len(), 6);

        let opening = resp.tables[2]
            .rows
            .iter()
            .find(|r| r.event_name == "MLB Opening Week")
            .unwrap();
        assert_eq!(opening.dates.to_string(), "2025-03-25 to 2025-04-05");
    }

    #[test]
    fn test_range_governed_by_first_date_only() {
        // 2025-03-25 is already behind us even though the week runs to 2025-04-05
        let resp = generate(at(2025, 3, 30, 0));
        assert!(!names(&resp.tables[2]).contains(&"MLB Opening Week"));
        // Calder Cup starts 2025-04-20 and stays
        assert!(names(&resp.tables[2]).contains(&"AHL Calder Cup Playoffs"));
    }

    #[test]
    fn test_mid_year_drops_past_reference_year_spans() {
        let resp = generate(at(2025, 7, 1, 0));
        let niche = names(&resp.tables[2]);
        assert_eq!(
            niche,
            vec!["Little League World Series", "NCAA Bowl Season (select marquee bowls)"]
        );
        // playoffs track the next super bowl, so they roll forward
        assert!(names(&resp.tables[0]).contains(&"NFL Playoffs (Divisional → Conference Championships)"));
        assert!(names(&resp.tables[1]).contains(&"Major College Rivalry Weekends"));
    }

    #[test]
    fn test_late_december_drops_cultural_rivalries() {
        let resp = generate(at(2025, 12, 20, 0));
        assert!(!names(&resp.tables[1]).contains(&"Major College Rivalry Weekends"));
        // bowl season started 2025-12-15, before the window
        assert!(!names(&resp.tables[2]).contains(&"NCAA Bowl Season (select marquee bowls)"));
    }

    #[test]
    fn test_anchor_day_late_in_the_day_drops_next_years_occurrence() {
        // rolled to 2026-02-09, whose midday lies after the 08:00 window end
        let resp = generate(at(2025, 2, 9, 8));
        assert!(resp.tables[0].rows.iter().all(|r| !r.event_name.starts_with("Super Bowl")));
        // afternoon keeps it
        let resp = generate(at(2025, 2, 9, 15));
        assert_eq!(resp.tables[0].rows[0].event_name, "Super Bowl (2026)");
    }

    #[test]
    fn test_generate_is_idempotent_for_fixed_now() {
        let now = at(2025, 9, 14, 10);
        let a = generate(now);
        let b = generate(now);
        assert_eq!(a.window, b.window);
        assert_eq!(a.tables, b.tables);
    }

    #[test]
    fn test_surviving_rows_respect_window() {
        let mut now = at(2024, 1, 1, 3);
        let stop = at(2027, 1, 1, 0);
        while now < stop {
            let resp = generate(now);
            let window = Window::twelve_months_from(now);
            assert_eq!(window.end, add_months_clamped(now, 12));
            for table in &resp.tables {
                for row in &table.rows {
                    match row.dates.tag() {
                        DateTag::Open => {}
                        DateTag::On(d) => {
                            let noon = midday_utc(d);
                            assert!(window.start <= noon && noon <= window.end, "{} at {now}", row.event_name);
                        }
                        DateTag::Malformed => panic!("malformed dates in {}", row.event_name),
                    }
                }
            }
            now += Duration::hours(53);
        }
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(generate(at(2025, 1, 5, 0))).unwrap();
        assert!(json["generatedAt"].is_string());
        assert_eq!(json["window"]["start"], "2025-01-05");
        assert_eq!(json["window"]["end"], "2026-01-05");
        assert_eq!(json["tables"].as_array().unwrap().len(), 3);
        assert_eq!(json["tables"][0]["rows"][0]["dates"], "2025-02-09");
        assert_eq!(json["tables"][0]["rows"][0]["eventName"], "Super Bowl (2025)");
    }

    #[test]
    fn test_format_generated_at() {
        assert_eq!(format_generated_at(&at(2025, 1, 5, 15)), "Jan 5, 2025, 3:00 PM");
        assert_eq!(format_generated_at(&at(2025, 11, 20, 0)), "Nov 20, 2025, 12:00 AM");
    }
}
