use std::path::PathBuf;

use cadence_core::{NotificationPreference, QuietHoursGate};
use chrono::NaiveTime;
use clap::Subcommand;
use serde_json::json;

use crate::common::{print_json, read_json};

#[derive(Subcommand)]
pub enum NotifyAction {
    /// Check whether a local wall-clock time falls inside quiet hours
    Check {
        /// JSON file with the user's notification preferences
        #[arg(long)]
        prefs: PathBuf,
        /// Local time to test, "HH:MM"
        #[arg(long)]
        time: String,
    },
}

pub fn run(action: NotifyAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        NotifyAction::Check { prefs, time } => {
            let prefs: NotificationPreference = read_json(&prefs)?;
            let local = NaiveTime::parse_from_str(&time, "%H:%M")
                .map_err(|e| format!("invalid --time '{time}': {e}"))?;
            let quiet = QuietHoursGate::is_quiet(local, &prefs)?;
            print_json(&json!({ "quiet": quiet }))
        }
    }
}
