//! Day-granularity date utilities shared by every analyzer.
//!
//! All calendar arithmetic in the engine goes through this module so the
//! day-boundary rules live in one place. Timezone is always explicit: a
//! timestamp is truncated in its own zone, never in the host locale.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Timelike};

use crate::error::{EngineError, Result};

/// Truncate a timestamp to its calendar day in the timestamp's own zone.
pub fn day_floor<Tz: TimeZone>(t: &DateTime<Tz>) -> NaiveDate {
    t.date_naive()
}

/// Whole calendar days between the day floors of `a` and `b`.
///
/// Positive when `b` is after `a`; may be negative.
pub fn days_between<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> i64 {
    days_between_dates(day_floor(a), day_floor(b))
}

/// Whole calendar days between two dates. Positive when `b` is after `a`.
pub fn days_between_dates(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// A local wall-clock time at minute precision, parsed from `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Parse a `"HH:MM"` string. Out-of-range or malformed input fails.
    pub fn parse(s: &str) -> Result<Self> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| bad_time_of_day(s))?;
        let hour: u32 = h.parse().map_err(|_| bad_time_of_day(s))?;
        let minute: u32 = m.parse().map_err(|_| bad_time_of_day(s))?;
        if hour > 23 || minute > 59 {
            return Err(bad_time_of_day(s));
        }
        Ok(TimeOfDay(hour * 60 + minute))
    }

    /// Minute-of-day resolution of a [`NaiveTime`] (seconds discarded).
    pub fn from_naive(t: NaiveTime) -> Self {
        TimeOfDay(t.hour() * 60 + t.minute())
    }

    /// Minutes since midnight (0..=1439).
    pub fn minute_of_day(self) -> u32 {
        self.0
    }
}

fn bad_time_of_day(s: &str) -> EngineError {
    EngineError::invalid_input("time_of_day", format!("expected HH:MM, got '{s}'"))
}

/// Whether `now` falls inside the `[start, end]` window, inclusive on
/// both bounds. When `start > end` the window wraps past midnight
/// (e.g. 22:00-08:00 covers 23:30 and 07:59 but not 09:00).
pub fn in_overnight_window(now: TimeOfDay, start: TimeOfDay, end: TimeOfDay) -> bool {
    if start <= end {
        now >= start && now <= end
    } else {
        now >= start || now <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn day_floor_drops_time_of_day() {
        let t = Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 59).unwrap();
        assert_eq!(
            day_floor(&t),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn days_between_is_signed() {
        let a = Utc.with_ymd_and_hms(2024, 3, 15, 23, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 3, 18, 1, 0, 0).unwrap();
        assert_eq!(days_between(&a, &b), 3);
        assert_eq!(days_between(&b, &a), -3);
    }

    #[test]
    fn days_between_ignores_time_of_day() {
        // 23:00 to 01:00 next day is two hours but one calendar day
        let a = Utc.with_ymd_and_hms(2024, 3, 15, 23, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 3, 16, 1, 0, 0).unwrap();
        assert_eq!(days_between(&a, &b), 1);
    }

    #[test]
    fn time_of_day_parses_valid_input() {
        assert_eq!(TimeOfDay::parse("00:00").unwrap().minute_of_day(), 0);
        assert_eq!(TimeOfDay::parse("22:00").unwrap().minute_of_day(), 22 * 60);
        assert_eq!(TimeOfDay::parse("23:59").unwrap().minute_of_day(), 1439);
    }

    #[test]
    fn time_of_day_rejects_malformed_input() {
        for bad in ["24:00", "12:60", "12", "ab:cd", "", "7:0:0"] {
            assert!(TimeOfDay::parse(bad).is_err(), "accepted '{bad}'");
        }
    }

    #[test]
    fn same_day_window_is_inclusive() {
        let start = TimeOfDay::parse("09:00").unwrap();
        let end = TimeOfDay::parse("17:00").unwrap();
        assert!(in_overnight_window(start, start, end));
        assert!(in_overnight_window(end, start, end));
        assert!(in_overnight_window(TimeOfDay::parse("12:30").unwrap(), start, end));
        assert!(!in_overnight_window(TimeOfDay::parse("08:59").unwrap(), start, end));
        assert!(!in_overnight_window(TimeOfDay::parse("17:01").unwrap(), start, end));
    }

    #[test]
    fn overnight_window_wraps_past_midnight() {
        let start = TimeOfDay::parse("22:00").unwrap();
        let end = TimeOfDay::parse("08:00").unwrap();
        assert!(in_overnight_window(TimeOfDay::parse("23:30").unwrap(), start, end));
        assert!(in_overnight_window(TimeOfDay::parse("07:59").unwrap(), start, end));
        assert!(in_overnight_window(TimeOfDay::parse("00:00").unwrap(), start, end));
        assert!(!in_overnight_window(TimeOfDay::parse("09:00").unwrap(), start, end));
        assert!(!in_overnight_window(TimeOfDay::parse("21:59").unwrap(), start, end));
    }
}
