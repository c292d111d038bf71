//! Format - Formatting Utilities

use chrono::{DateTime, Days, NaiveDate, TimeZone};

/// Event time as shown on the timeline (24h, minutes precision)
pub fn format_event_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M").to_string()
}

/// Day label placed after the last event of a day: "Today", "Yesterday", or a
/// short date such as "Sat, Oct 17".
pub fn format_timeline_date(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }
    if today.checked_sub_days(Days::new(1)) == Some(date) {
        return "Yesterday".to_string();
    }
    date.format("%a, %b %-d").to_string()
}

/// Subtitle under the card title
pub fn format_window(hours_back: u32) -> String {
    format!("Latest {hours_back} hours")
}

/// Message shown when history loaded but holds no events
pub fn format_empty_state(hours_back: u32) -> String {
    format!("No Events occurred in the last {hours_back} hours")
}
