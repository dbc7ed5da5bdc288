//! Client-side filter engine for shared-summary notes.
//!
//! Applies caller-supplied criteria to a fetched window of engagement
//! records. All supplied predicates must hold (logical AND); absent criteria
//! impose no constraint. Calendar dates are derived in UTC, while weekday
//! and time-of-day use the local zone.

use crate::domain::DayOfWeek;
use crate::error::{HubSpotApiError, HubSpotResult};
use crate::models::Engagement;
use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An inclusive time-of-day range of zero-padded `HH:MM` strings.
///
/// Comparison is a plain string comparison on both ends, so a range that
/// crosses midnight (start > end) never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TimeRange {
    /// Inclusive start, e.g. "09:00"
    pub start: String,

    /// Inclusive end, e.g. "17:30"
    pub end: String,
}

/// Optional predicates narrowing a result set.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Calendar date (YYYY-MM-DD), compared against the UTC date
    pub date: Option<String>,

    /// English day name, compared against the local weekday
    pub day_of_week: Option<String>,

    /// Local time-of-day range
    pub time_range: Option<TimeRange>,

    /// Case-insensitive substring matched against the body plain text
    pub query: Option<String>,

    /// Cap on result count, applied after sorting when positive
    pub limit: Option<usize>,
}

impl FilterCriteria {
    /// Reject criteria that can never be evaluated.
    ///
    /// Run before fetching anything: an unrecognized day name fails the
    /// whole operation without a remote call.
    pub fn validate(&self) -> HubSpotResult<()> {
        if let Some(name) = &self.day_of_week {
            parse_day(name)?;
        }
        Ok(())
    }
}

fn parse_day(name: &str) -> HubSpotResult<DayOfWeek> {
    DayOfWeek::parse(name).ok_or_else(|| {
        HubSpotApiError::InvalidRequest(format!("Unrecognized day of week: {}", name))
    })
}

/// Apply all supplied predicates to `notes`, preserving input order.
///
/// An unrecognized day name fails the whole operation before any record is
/// examined.
pub fn filter_notes(
    notes: Vec<Engagement>,
    criteria: &FilterCriteria,
) -> HubSpotResult<Vec<Engagement>> {
    let day = criteria.day_of_week.as_deref().map(parse_day).transpose()?;

    let query = criteria.query.as_ref().map(|q| q.to_lowercase());

    let filtered = notes
        .into_iter()
        .filter(|note| {
            matches_date(note, criteria.date.as_deref())
                && matches_day(note, day)
                && matches_time_range(note, criteria.time_range.as_ref())
                && matches_query(note, query.as_deref())
        })
        .collect();

    Ok(filtered)
}

/// Sort newest first, then truncate to `limit` when positive.
pub fn sort_and_limit(mut notes: Vec<Engagement>, limit: Option<usize>) -> Vec<Engagement> {
    notes.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    if let Some(limit) = limit {
        if limit > 0 {
            notes.truncate(limit);
        }
    }
    notes
}

fn matches_date(note: &Engagement, date: Option<&str>) -> bool {
    let Some(date) = date else {
        return true;
    };
    DateTime::<Utc>::from_timestamp_millis(note.timestamp())
        .map(|dt| dt.format("%Y-%m-%d").to_string() == date)
        .unwrap_or(false)
}

fn matches_day(note: &Engagement, day: Option<DayOfWeek>) -> bool {
    let Some(day) = day else {
        return true;
    };
    local_time(note)
        .map(|dt| day.matches(dt.weekday()))
        .unwrap_or(false)
}

fn matches_time_range(note: &Engagement, range: Option<&TimeRange>) -> bool {
    let Some(range) = range else {
        return true;
    };
    local_time(note)
        .map(|dt| {
            let time = dt.format("%H:%M").to_string();
            range.start <= time && time <= range.end
        })
        .unwrap_or(false)
}

fn matches_query(note: &Engagement, query: Option<&str>) -> bool {
    let Some(query) = query else {
        return true;
    };
    note.plain_text_body().to_lowercase().contains(query)
}

fn local_time(note: &Engagement) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(note.timestamp()).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone, Utc};

    fn local_millis(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> i64 {
        Local
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .timestamp_millis()
    }

    fn utc_millis(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> i64 {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn test_no_criteria_returns_all_in_order() {
        let notes = vec![
            Engagement::note(1, 100, "a"),
            Engagement::note(2, 300, "b"),
            Engagement::note(3, 200, "c"),
        ];
        let result = filter_notes(notes.clone(), &FilterCriteria::default()).unwrap();
        assert_eq!(result, notes);
    }

    #[test]
    fn test_date_predicate_uses_utc_calendar_date() {
        let on_date = Engagement::note(1, utc_millis(2024, 5, 15, 12, 0), "a");
        let off_date = Engagement::note(2, utc_millis(2024, 5, 16, 0, 30), "b");

        let criteria = FilterCriteria {
            date: Some("2024-05-15".to_string()),
            ..Default::default()
        };
        let result = filter_notes(vec![on_date, off_date], &criteria).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id(), 1);
    }

    #[test]
    fn test_day_of_week_predicate_local_weekday() {
        // 2024-05-15 was a Wednesday; building from local components keeps
        // the assertion independent of the zone the tests run in.
        let wednesday = Engagement::note(1, local_millis(2024, 5, 15, 14, 30), "a");
        let thursday = Engagement::note(2, local_millis(2024, 5, 16, 14, 30), "b");

        let criteria = FilterCriteria {
            day_of_week: Some("Wednesday".to_string()),
            ..Default::default()
        };
        let result = filter_notes(vec![wednesday, thursday], &criteria).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id(), 1);
    }

    #[test]
    fn test_validate_rejects_unknown_day_without_records() {
        let criteria = FilterCriteria {
            day_of_week: Some("someday".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            criteria.validate(),
            Err(HubSpotApiError::InvalidRequest(_))
        ));

        let criteria = FilterCriteria {
            day_of_week: Some("saturday".to_string()),
            ..Default::default()
        };
        assert!(criteria.validate().is_ok());
    }

    #[test]
    fn test_unrecognized_day_fails_whole_operation() {
        let notes = vec![Engagement::note(1, 100, "a")];
        let criteria = FilterCriteria {
            day_of_week: Some("funday".to_string()),
            ..Default::default()
        };
        let err = filter_notes(notes, &criteria).unwrap_err();
        match err {
            HubSpotApiError::InvalidRequest(msg) => assert!(msg.contains("funday")),
            other => panic!("Expected InvalidRequest, got: {:?}", other),
        }
    }

    #[test]
    fn test_time_range_inclusive_bounds() {
        let note = Engagement::note(1, local_millis(2024, 5, 15, 14, 30), "a");

        let exact = FilterCriteria {
            time_range: Some(TimeRange {
                start: "14:30".to_string(),
                end: "14:30".to_string(),
            }),
            ..Default::default()
        };
        assert_eq!(filter_notes(vec![note.clone()], &exact).unwrap().len(), 1);

        let around = FilterCriteria {
            time_range: Some(TimeRange {
                start: "09:00".to_string(),
                end: "17:00".to_string(),
            }),
            ..Default::default()
        };
        assert_eq!(filter_notes(vec![note.clone()], &around).unwrap().len(), 1);

        let after = FilterCriteria {
            time_range: Some(TimeRange {
                start: "15:00".to_string(),
                end: "17:00".to_string(),
            }),
            ..Default::default()
        };
        assert!(filter_notes(vec![note], &after).unwrap().is_empty());
    }

    #[test]
    fn test_time_range_crossing_midnight_matches_nothing() {
        let late = Engagement::note(1, local_millis(2024, 5, 15, 23, 0), "a");
        let early = Engagement::note(2, local_millis(2024, 5, 15, 1, 0), "b");

        let criteria = FilterCriteria {
            time_range: Some(TimeRange {
                start: "22:00".to_string(),
                end: "02:00".to_string(),
            }),
            ..Default::default()
        };
        assert!(filter_notes(vec![late, early], &criteria).unwrap().is_empty());
    }

    #[test]
    fn test_query_predicate_case_insensitive() {
        let notes = vec![
            Engagement::note(1, 100, "Title: Launch Plan\nSummary: ship it\nAuthor: Ana"),
            Engagement::note(2, 200, "Title: Retro\nSummary: went fine\nAuthor: Ben"),
        ];
        let criteria = FilterCriteria {
            query: Some("LAUNCH".to_string()),
            ..Default::default()
        };
        let result = filter_notes(notes, &criteria).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id(), 1);
    }

    #[test]
    fn test_query_matches_plain_text_of_html_body() {
        let notes = vec![Engagement::note(
            1,
            100,
            "<p>Title: <b>Launch</b> Plan</p>",
        )];
        let criteria = FilterCriteria {
            query: Some("launch plan".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_notes(notes, &criteria).unwrap().len(), 1);
    }

    #[test]
    fn test_conjunction_of_predicates() {
        let ts = local_millis(2024, 5, 15, 14, 30);
        let match_both = Engagement::note(1, ts, "Title: standup\nSummary: \nAuthor: ");
        let wrong_body = Engagement::note(2, ts, "Title: retro\nSummary: \nAuthor: ");
        let wrong_day = Engagement::note(
            3,
            local_millis(2024, 5, 16, 14, 30),
            "Title: standup\nSummary: \nAuthor: ",
        );

        let criteria = FilterCriteria {
            day_of_week: Some("wednesday".to_string()),
            query: Some("standup".to_string()),
            ..Default::default()
        };
        let result = filter_notes(vec![match_both, wrong_body, wrong_day], &criteria).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id(), 1);
    }

    #[test]
    fn test_sort_and_limit_order() {
        let notes = vec![
            Engagement::note(1, 100, "a"),
            Engagement::note(2, 300, "b"),
            Engagement::note(3, 200, "c"),
        ];
        let result = sort_and_limit(notes, Some(2));
        let timestamps: Vec<i64> = result.iter().map(|n| n.timestamp()).collect();
        assert_eq!(timestamps, vec![300, 200]);
    }

    #[test]
    fn test_sort_without_limit_keeps_all() {
        let notes = vec![
            Engagement::note(1, 100, "a"),
            Engagement::note(2, 300, "b"),
            Engagement::note(3, 200, "c"),
        ];
        let result = sort_and_limit(notes, None);
        let timestamps: Vec<i64> = result.iter().map(|n| n.timestamp()).collect();
        assert_eq!(timestamps, vec![300, 200, 100]);
    }

    #[test]
    fn test_zero_limit_imposes_no_cap() {
        let notes = vec![Engagement::note(1, 100, "a"), Engagement::note(2, 200, "b")];
        let result = sort_and_limit(notes, Some(0));
        assert_eq!(result.len(), 2);
    }
}
