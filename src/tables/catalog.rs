// src/tables/catalog.rs

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use super::types::{EventDates, EventRow, Sport};
use crate::calendar::{ymd_clamped, Anchor};

/// Approximate annual dates; close enough for planning, not for scheduling.
pub mod anchors {
    use crate::calendar::Anchor;

    pub const SUPER_BOWL: Anchor = Anchor::new(2, 9);
    pub const MARCH_MADNESS_FINAL: Anchor = Anchor::new(4, 6);
    pub const NCAA_WOMEN_FINAL: Anchor = Anchor::new(4, 5);
    pub const NBA_FINALS: Anchor = Anchor::new(6, 15);
    pub const STANLEY_CUP: Anchor = Anchor::new(6, 10);
    pub const WORLD_SERIES: Anchor = Anchor::new(10, 25);
    pub const NFL_KICKOFF: Anchor = Anchor::new(9, 8);
    pub const CFP_TITLE: Anchor = Anchor::new(1, 12);
    pub const WINTER_CLASSIC: Anchor = Anchor::new(1, 1);
    pub const MLB_ALL_STAR: Anchor = Anchor::new(7, 15);
    pub const NBA_ALL_STAR: Anchor = Anchor::new(2, 15);
    pub const WNBA_FINALS: Anchor = Anchor::new(10, 10);
    pub const LITTLE_LEAGUE: Anchor = Anchor::new(8, 20);

    pub const ALL: [Anchor; 13] = [
        SUPER_BOWL,
        MARCH_MADNESS_FINAL,
        NCAA_WOMEN_FINAL,
        NBA_FINALS,
        STANLEY_CUP,
        WORLD_SERIES,
        NFL_KICKOFF,
        CFP_TITLE,
        WINTER_CLASSIC,
        MLB_ALL_STAR,
        NBA_ALL_STAR,
        WNBA_FINALS,
        LITTLE_LEAGUE,
    ];
}

/// Every anchor resolved to its next occurrence from one reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorDates {
    pub reference_year: i32,
    pub super_bowl: NaiveDate,
    pub march_madness_final: NaiveDate,
    pub ncaa_women_final: NaiveDate,
    pub nba_finals: NaiveDate,
    pub stanley_cup: NaiveDate,
    pub world_series: NaiveDate,
    pub nfl_kickoff: NaiveDate,
    pub cfp_title: NaiveDate,
    pub winter_classic: NaiveDate,
    pub mlb_all_star: NaiveDate,
    pub nba_all_star: NaiveDate,
    pub wnba_finals: NaiveDate,
    pub little_league: NaiveDate,
}

impl AnchorDates {
    pub fn from_reference(now: DateTime<Utc>) -> Self {
        let next = |a: Anchor| a.next_occurrence(now);
        Self {
            reference_year: now.year(),
            super_bowl: next(anchors::SUPER_BOWL),
            march_madness_final: next(anchors::MARCH_MADNESS_FINAL),
            ncaa_women_final: next(anchors::NCAA_WOMEN_FINAL),
            nba_finals: next(anchors::NBA_FINALS),
            stanley_cup: next(anchors::STANLEY_CUP),
            world_series: next(anchors::WORLD_SERIES),
            nfl_kickoff: next(anchors::NFL_KICKOFF),
            cfp_title: next(anchors::CFP_TITLE),
            winter_classic: next(anchors::WINTER_CLASSIC),
            mlb_all_star: next(anchors::MLB_ALL_STAR),
            nba_all_star: next(anchors::NBA_ALL_STAR),
            wnba_finals: next(anchors::WNBA_FINALS),
            little_league: next(anchors::LITTLE_LEAGUE),
        }
    }
}

fn row(
    sport: Sport,
    event_name: impl Into<String>,
    why_it_matters: &str,
    projected_views_millions: f64,
    dates: EventDates,
) -> EventRow {
    EventRow {
        sport,
        event_name: event_name.into(),
        why_it_matters: why_it_matters.to_string(),
        projected_views_millions,
        dates,
    }
}

/// `(m1, d1)` to `(m2, d2)`, both in `year`.
fn span_in(year: i32, (m1, d1): (u32, u32), (m2, d2): (u32, u32)) -> EventDates {
    EventDates::span(ymd_clamped(year, m1, d1), ymd_clamped(year, m2, d2))
}

/// Must-buy tentpoles for big-brand advertisers.
pub fn tentpoles(dates: &AnchorDates) -> Vec<EventRow> {
    let bowl_year = dates.super_bowl.year();
    vec![
        row(
            Sport::Football,
            format!("Super Bowl ({})", bowl_year),
            "The biggest U.S. advertising stage: mass reach, multi-generational co-viewing, and premium cultural attention that drives broad brand recall.",
            115.0,
            EventDates::Day(dates.super_bowl),
        ),
        row(
            Sport::Football,
            "NFL Playoffs (Divisional → Conference Championships)",
            "Peak-intensity weeks where fan attention concentrates; ideal for high-impact storytelling, seasonal positioning, and premium share-of-voice.",
            35.0,
            span_in(bowl_year, (1, 10), (1, 26)),
        ),
        row(
            Sport::Football,
            "College Football Playoff National Championship",
            "A national, appointment-viewing moment with passionate fanbases and strong co-viewing—great for broad reach with high engagement.",
            22.0,
            EventDates::Day(dates.cfp_title),
        ),
        row(
            Sport::Basketball,
            "NCAA Men’s Final Four & Championship",
            "A cultural tentpole with office-pool energy and strong social chatter—brands can tap into ritual viewing and spring-season momentum.",
            18.0,
            EventDates::Day(dates.march_madness_final),
        ),
        row(
            Sport::Basketball,
            "NBA Finals",
            "Premium late-season drama with star-driven narratives—strong for brand salience, lifestyle alignment, and high-impact creative moments.",
            12.0,
            EventDates::Day(dates.nba_finals),
        ),
        row(
            Sport::Baseball,
            "MLB World Series",
            "Heritage sports + regional passion at national scale—great for consistent frequency, trust-building, and fall ritual brand association.",
            11.0,
            EventDates::Day(dates.world_series),
        ),
        row(
            Sport::Hockey,
            "Stanley Cup Final",
            "High-intensity playoff storytelling and loyal audiences; strong for brands seeking emotional resonance and premium sports adjacency.",
            5.0,
            EventDates::Day(dates.stanley_cup),
        ),
        row(
            Sport::Football,
            "NFL Kickoff Weekend",
            "A ‘back-to-routine’ cultural reset with massive tune-in—great for seasonal launches, product reveals, and broad awareness.",
            24.0,
            EventDates::Day(dates.nfl_kickoff),
        ),
    ]
}

/// Cultural moments for brand building, social buzz, and trend alignment.
pub fn cultural(dates: &AnchorDates) -> Vec<EventRow> {
    let year = dates.reference_year;
    vec![
        row(
            Sport::Basketball,
            "NBA All-Star Weekend",
            "A culture-forward weekend blending sports, music, and fashion—ideal for brands chasing social buzz, creators, and lifestyle relevance.",
            7.0,
            EventDates::Day(dates.nba_all_star),
        ),
        row(
            Sport::Basketball,
            "NCAA Women’s Final Four & Championship",
            "A fast-growing cultural moment with strong storytelling—great for brands aligning with momentum in women’s sports and modern fandom.",
            9.0,
            EventDates::Day(dates.ncaa_women_final),
        ),
        row(
            Sport::Hockey,
            "NHL Winter Classic",
            "A visually iconic outdoor event that feels holiday-adjacent—great for seasonal brand imagery and premium moment marketing.",
            2.5,
            EventDates::Day(dates.winter_classic),
        ),
        row(
            Sport::Baseball,
            "MLB All-Star Week",
            "Summer culture + leisure energy; strong for brands tied to travel, retail seasons, lifestyle storytelling, and community moments.",
            7.0,
            EventDates::Day(dates.mlb_all_star),
        ),
        row(
            Sport::Basketball,
            "WNBA Playoffs / Finals",
            "High-growth audience with strong cultural alignment—smart for brands investing in modern sports narratives and engaged communities.",
            1.4,
            EventDates::Day(dates.wnba_finals),
        ),
        row(
            Sport::Football,
            "Major College Rivalry Weekends",
            "Rivalries drive ritual viewing and local pride—ideal for brands seeking authenticity, regional resonance, and high emotional engagement.",
            8.0,
            span_in(year, (11, 20), (11, 30)),
        ),
    ]
}

/// Local advertisers, niche & unique buys.
pub fn niche(dates: &AnchorDates) -> Vec<EventRow> {
    let year = dates.reference_year;
    vec![
        row(
            Sport::Baseball,
            "Little League World Series",
            "Community-first storytelling and family co-viewing; a strong fit for local advertisers and brands leaning into summer traditions.",
            1.1,
            EventDates::Day(dates.little_league),
        ),
        row(
            Sport::Hockey,
            "IIHF World Championship",
            "International competition with passionate hockey audiences—ideal for distinctive sports adjacency and global flavor in creative.",
            0.6,
            span_in(year, (5, 10), (5, 26)),
        ),
        row(
            Sport::Hockey,
            "AHL Calder Cup Playoffs",
            "A strong local-market activation with arena communities; solid for regional brands targeting engaged fans with repeat exposure.",
            0.3,
            span_in(year, (4, 20), (6, 20)),
        ),
        row(
            Sport::Baseball,
            "MLB Opening Week",
            "Seasonal reset energy and local passion—reliable window for geo-targeted messaging and springtime brand momentum.",
            1.8,
            span_in(year, (3, 25), (4, 5)),
        ),
        row(
            Sport::Basketball,
            "WNBA Opening Month",
            "A growing audience with strong community connection—great for brands emphasizing modern sports culture and positive momentum.",
            0.7,
            span_in(year, (5, 15), (6, 15)),
        ),
        row(
            Sport::Football,
            "NCAA Bowl Season (select marquee bowls)",
            "Holiday-season co-viewing plus regional pride—smart for brands wanting seasonal warmth with targeted reach by market and fanbase.",
            6.0,
            EventDates::span(ymd_clamped(year, 12, 15), ymd_clamped(year + 1, 1, 5)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dates_from(y: i32, m: u32, d: u32) -> AnchorDates {
        AnchorDates::from_reference(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_anchor_dates_from_early_january() {
        let dates = dates_from(2025, 1, 5);
        assert_eq!(dates.reference_year, 2025);
        assert_eq!(dates.super_bowl, day(2025, 2, 9));
        assert_eq!(dates.winter_classic, day(2026, 1, 1));
        assert_eq!(dates.cfp_title, day(2025, 1, 12));
        assert_eq!(dates.world_series, day(2025, 10, 25));
    }

    #[test]
    fn test_all_lists_every_anchor_once() {
        let mut seen = anchors::ALL.to_vec();
        seen.sort_by_key(|a| (a.month, a.day));
        seen.dedup();
        assert_eq!(seen.len(), 13);
    }

    #[test]
    fn test_catalog_sizes() {
        let dates = dates_from(2025, 1, 5);
        assert_eq!(tentpoles(&dates).len(), 8);
        assert_eq!(cultural(&dates).len(), 6);
        assert_eq!(niche(&dates).len(), 6);
    }

    #[test]
    fn test_super_bowl_names_its_year() {
        let rows = tentpoles(&dates_from(2025, 3, 1));
        assert_eq!(rows[0].event_name, "Super Bowl (2026)");
        assert_eq!(rows[0].dates.to_string(), "2026-02-09");
        // playoffs follow the super bowl year, not the reference year
        assert_eq!(rows[1].dates.to_string(), "2026-01-10 to 2026-01-26");
    }

    #[test]
    fn test_niche_spans_use_reference_year() {
        let rows = niche(&dates_from(2025, 1, 5));
        let labels: Vec<String> = rows.iter().map(|r| r.dates.to_string()).collect();
        assert_eq!(labels[1], "2025-05-10 to 2025-05-26");
        assert_eq!(labels[3], "2025-03-25 to 2025-04-05");
        assert_eq!(labels[5], "2025-12-15 to 2026-01-05");
    }
}
