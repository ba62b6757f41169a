use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, TimeZone};

/// How often the clock value is refreshed. Independent of weather refresh.
pub const CLOCK_CADENCE: Duration = Duration::from_secs(60);

/// `"October 17, 2026"`
pub fn format_date<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%B %-d, %Y").to_string()
}

/// Two-digit 12-hour clock, e.g. `"03:07 PM"`.
pub fn format_time<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%I:%M %p").to_string()
}
