use std::path::PathBuf;

use cadence_core::{DiaryEntry, StreakTracker};
use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use serde_json::json;

use crate::common::{print_json, read_json};

#[derive(Subcommand)]
pub enum StreakAction {
    /// Current consecutive-day streak
    Current {
        /// JSON file with diary entries
        #[arg(long)]
        records: PathBuf,
        /// Evaluation date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Longest streak anywhere in the history
    Longest {
        #[arg(long)]
        records: PathBuf,
    },
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = StreakTracker::new();
    match action {
        StreakAction::Current { records, today } => {
            let entries: Vec<DiaryEntry> = read_json(&records)?;
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            let result = tracker.current_streak(entries.iter().map(|e| e.created_at), today);
            print_json(&result)
        }
        StreakAction::Longest { records } => {
            let entries: Vec<DiaryEntry> = read_json(&records)?;
            let longest = tracker.longest_streak(entries.iter().map(|e| e.created_at));
            print_json(&json!({ "longest_streak_days": longest }))
        }
    }
}
