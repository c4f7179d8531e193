//! Consecutive-day streak detection over timestamped records.
//!
//! A streak counts calendar days with at least one qualifying record.
//! The current streak tolerates "today not yet logged": a user whose
//! most recent record is from yesterday still shows an active streak.

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::timewindow::{day_floor, days_between_dates};

/// Result of a current-streak computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    pub consecutive_days: u32,
}

/// Detector for consecutive-day runs.
#[derive(Debug, Clone)]
pub struct StreakTracker {
    /// Maximum days the most recent record may lag behind today before
    /// the streak is considered broken. 1 keeps yesterday's streak alive.
    pub max_lag_days: i64,
}

impl Default for StreakTracker {
    fn default() -> Self {
        StreakTracker { max_lag_days: 1 }
    }
}

impl StreakTracker {
    /// Create a tracker with the default one-day lag tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the streak of consecutive calendar days ending at (or one
    /// lag-tolerated day before) `today`. Input order is irrelevant;
    /// multiple records on the same day count once.
    pub fn current_streak<Tz, I>(&self, timestamps: I, today: NaiveDate) -> StreakResult
    where
        Tz: TimeZone,
        I: IntoIterator<Item = DateTime<Tz>>,
    {
        let days = distinct_days_descending(timestamps);
        let Some(&most_recent) = days.first() else {
            return StreakResult { consecutive_days: 0 };
        };
        if days_between_dates(most_recent, today) > self.max_lag_days {
            return StreakResult { consecutive_days: 0 };
        }

        let mut streak = 1u32;
        let mut anchor = most_recent;
        for &day in &days[1..] {
            if days_between_dates(day, anchor) == 1 {
                streak += 1;
                anchor = day;
            } else {
                break;
            }
        }
        StreakResult {
            consecutive_days: streak,
        }
    }

    /// Longest run of consecutive calendar days anywhere in the history.
    pub fn longest_streak<Tz, I>(&self, timestamps: I) -> u32
    where
        Tz: TimeZone,
        I: IntoIterator<Item = DateTime<Tz>>,
    {
        let days = distinct_days_descending(timestamps);
        let mut longest = 0u32;
        let mut run = 0u32;
        let mut previous: Option<NaiveDate> = None;
        for &day in &days {
            run = match previous {
                Some(prev) if days_between_dates(day, prev) == 1 => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            previous = Some(day);
        }
        longest
    }
}

fn distinct_days_descending<Tz, I>(timestamps: I) -> Vec<NaiveDate>
where
    Tz: TimeZone,
    I: IntoIterator<Item = DateTime<Tz>>,
{
    let mut days: Vec<NaiveDate> = timestamps.into_iter().map(|t| day_floor(&t)).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();
    days
}
