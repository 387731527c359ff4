//! Lookahead-window filtering on naive event start times.
//!
//! Event starts are region-local wall-clock strings while "now" is the UTC
//! wall-clock with its timezone dropped. The two are compared as-is, so an
//! event near either edge of the window can be kept or dropped a few hours
//! early or late.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use vetevents_core::NormalizedEvent;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 start string into a naive timestamp.
///
/// A trailing UTC offset is accepted and discarded, keeping the wall-clock
/// part. A bare date means midnight.
pub(crate) fn parse_start(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Keeps events starting within `days` days from the current UTC wall-clock.
pub(crate) fn filter_upcoming(events: Vec<NormalizedEvent>, days: i64) -> Vec<NormalizedEvent> {
    filter_upcoming_at(events, Utc::now().naive_utc(), days)
}

/// Keeps events whose start `t` satisfies `now <= t <= now + days`.
///
/// Events with no start, or a start that does not parse, are dropped
/// silently. Order is preserved.
pub(crate) fn filter_upcoming_at(
    events: Vec<NormalizedEvent>,
    now: NaiveDateTime,
    days: i64,
) -> Vec<NormalizedEvent> {
    let cutoff = TimeDelta::try_days(days)
        .and_then(|window| now.checked_add_signed(window))
        .unwrap_or(if days >= 0 {
            NaiveDateTime::MAX
        } else {
            NaiveDateTime::MIN
        });

    events
        .into_iter()
        .filter(|event| {
            event
                .start
                .as_deref()
                .and_then(parse_start)
                .is_some_and(|t| now <= t && t <= cutoff)
        })
        .collect()
}
