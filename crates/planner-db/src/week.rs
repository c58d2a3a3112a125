//! Week keys for planning records.
//!
//! A plan is keyed by the Monday that starts its week. Any date a user
//! submits is folded onto that Monday; input that does not parse as
//! `YYYY-MM-DD` falls back to the current week instead of erroring.

use chrono::{Datelike, Days, Local, NaiveDate};

/// Date format accepted from forms and query strings, and used in links.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The Monday on or before `date`, or `None` if that Monday precedes the
/// earliest representable date.
pub fn monday_of(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(date.weekday().num_days_from_monday().into()))
}

/// Map optional user input onto a week key, relative to `today`.
///
/// Input that does not parse, or whose week cannot be represented, yields
/// the week containing `today`.
pub fn normalize(input: Option<&str>, today: NaiveDate) -> NaiveDate {
    input
        .and_then(|value| NaiveDate::parse_from_str(value, DATE_FORMAT).ok())
        .and_then(monday_of)
        .or_else(|| monday_of(today))
        .unwrap_or(today)
}

/// Today's local date on the server.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The week key for the current server-local date.
pub fn this_week() -> NaiveDate {
    normalize(None, today())
}

/// The week keys before and after `week_start`, where representable.
pub fn adjacent(week_start: NaiveDate) -> (Option<NaiveDate>, Option<NaiveDate>) {
    (
        week_start.checked_sub_days(Days::new(7)),
        week_start.checked_add_days(Days::new(7)),
    )
}

/// Format a week key the way it appears in URLs and forms.
pub fn format(week_start: NaiveDate) -> String {
    week_start.format(DATE_FORMAT).to_string()
}
