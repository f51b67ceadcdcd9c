use chrono::{DateTime, NaiveDate, Utc};

/// Per-turn stamp: "January 15, 2024, 10:30" (UTC)
pub fn format_long(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y, %H:%M").to_string()
}

/// Header date: "January 15, 2024" (UTC)
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    format_naive_date(&timestamp.date_naive())
}

pub fn format_naive_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
