//! Small helpers shared by the client and the CLI.

use chrono::{DateTime, Duration, TimeZone};

/// Date string used as the `from` bound by
/// [`NewsClient::get_latest_news_by_source`](crate::NewsClient::get_latest_news_by_source).
///
/// One hour before `now`, formatted as `YYYY-MM-DD`. Day precision means the
/// window reaches back to midnight of that day, not one hour.
pub fn lookback_date<Tz>(now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    (now - Duration::hours(1)).format("%Y-%m-%d").to_string()
}

/// Truncate a string for logging purposes.
///
/// Strings longer than `max` bytes are cut at the nearest char boundary at or
/// below `max` and get `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}
