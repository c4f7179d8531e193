//! Do-not-disturb gating for notification dispatch.
//!
//! The gate is advisory: it answers "does this local wall-clock time fall
//! inside the user's quiet hours", nothing more. Suppressing or queueing
//! the notification is the caller's job, as is resolving the user's
//! timezone to a local wall clock.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::timewindow::{in_overnight_window, TimeOfDay};

/// Per-user notification preferences.
///
/// Both quiet-hour bounds must be present for the window to apply; a
/// single bound is meaningless and is treated as "no quiet hours".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPreference {
    /// Start of the quiet window, "HH:MM" local time.
    pub quiet_hours_start: Option<String>,
    /// End of the quiet window, "HH:MM" local time.
    pub quiet_hours_end: Option<String>,
    /// IANA timezone name the bounds are expressed in.
    pub timezone: String,
}

/// Decides whether a local wall-clock time falls inside quiet hours.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuietHoursGate;

impl QuietHoursGate {
    /// Whether `now_local` (the user's wall clock) is inside the
    /// configured quiet window. `Ok(false)` when either bound is absent;
    /// malformed bounds are an error rather than a silent "not quiet".
    pub fn is_quiet(now_local: NaiveTime, prefs: &NotificationPreference) -> Result<bool> {
        let (Some(start), Some(end)) = (&prefs.quiet_hours_start, &prefs.quiet_hours_end)
        else {
            return Ok(false);
        };
        let start = TimeOfDay::parse(start)?;
        let end = TimeOfDay::parse(end)?;
        Ok(in_overnight_window(
            TimeOfDay::from_naive(now_local),
            start,
            end,
        ))
    }
}
