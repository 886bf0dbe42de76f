//! Elapsed-time conversion to milliseconds

const SECOND_IN_MILLIS: i64 = 1000;
const MINUTE_IN_MILLIS: i64 = 60 * SECOND_IN_MILLIS;
const HOUR_IN_MILLIS: i64 = 60 * MINUTE_IN_MILLIS;
const DAY_IN_MILLIS: i64 = 24 * HOUR_IN_MILLIS;
const WEEK_IN_MILLIS: i64 = 7 * DAY_IN_MILLIS;

/// Convert seconds to milliseconds
pub fn seconds_to_millis(seconds: i32) -> i64 {
    SECOND_IN_MILLIS * i64::from(seconds)
}

/// Convert minutes to milliseconds
pub fn minutes_to_millis(minutes: i32) -> i64 {
    MINUTE_IN_MILLIS * i64::from(minutes)
}

/// Convert hours to milliseconds
pub fn hours_to_millis(hours: i32) -> i64 {
    HOUR_IN_MILLIS * i64::from(hours)
}

/// Convert days to milliseconds
pub fn days_to_millis(days: i32) -> i64 {
    DAY_IN_MILLIS * i64::from(days)
}

/// Convert weeks to milliseconds
pub fn weeks_to_millis(weeks: i32) -> i64 {
    WEEK_IN_MILLIS * i64::from(weeks)
}
