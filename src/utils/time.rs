/// Time helpers for the analysis window
use chrono::{DateTime, Duration, Timelike, Utc};

/// Truncate a timestamp down to the start of its hour.
pub fn floor_to_hour(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

/// Start of the fetch window: `lookback_hours` of extra history ahead of the
/// analysis start so the slow EMA seed is complete before the first row.
pub fn lookback_start(window_start: DateTime<Utc>, lookback_hours: i64) -> DateTime<Utc> {
    window_start - Duration::hours(lookback_hours)
}
