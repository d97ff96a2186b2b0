//! Calendar helpers used by the timeline: display dates, day offsets and labels.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::time::Clock;

/// Default number of days ahead that counts as "soon".
pub const DEFAULT_SOON_HORIZON_DAYS: i64 = 7;

const DISPLAY_DATE_FORMAT: &str = "%a %-d %b";
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Renders `date` as abbreviated weekday, day of month and abbreviated month (`Fri 16 Oct`).
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Signed number of calendar days from the clock's local today to `date`.
///
/// Both sides are compared at local midnight, so any part of a day counts as
/// a whole day. Negative values lie in the past. The result is only valid for
/// the instant the clock was read.
pub fn days_until(date: NaiveDate, clock: &dyn Clock) -> i64 {
    date.signed_duration_since(clock.today()).num_days()
}

/// Maps a day offset to its timeline label.
pub fn days_label(days: i64) -> String {
    match days {
        d if d < 0 => format!("{}d overdue", d.unsigned_abs()),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        d => format!("{d}d"),
    }
}

/// How close an entry is to today, used to emphasise timeline rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Proximity {
    Past,
    Today,
    Soon,
    Later,
}

impl Proximity {
    /// `Soon` covers 1..=`soon_horizon` days ahead.
    pub fn classify(days: i64, soon_horizon: i64) -> Self {
        match days {
            d if d < 0 => Proximity::Past,
            0 => Proximity::Today,
            d if d <= soon_horizon => Proximity::Soon,
            _ => Proximity::Later,
        }
    }
}

/// Parses an entry date as a local calendar day.
///
/// Accepts `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM[:SS]` timestamp (time
/// discarded) or an RFC 3339 timestamp converted into local time.
pub fn parse_entry_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(stamp.date());
        }
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|stamp| stamp.with_timezone(&Local).date_naive())
}
