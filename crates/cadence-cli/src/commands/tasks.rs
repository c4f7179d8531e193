use std::path::PathBuf;

use cadence_core::{ProductivityAnalyzer, TaskRecord};
use chrono::{DateTime, Utc};
use clap::Subcommand;

use crate::common::{print_json, read_json};

#[derive(Subcommand)]
pub enum TasksAction {
    /// Productivity report over the rolling window
    Report {
        /// JSON file with task records
        #[arg(long)]
        records: PathBuf,
        /// Rolling window in days
        #[arg(long, default_value_t = cadence_core::productivity::DEFAULT_WINDOW_DAYS)]
        window_days: i64,
        /// Evaluation instant (RFC 3339); defaults to now
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
}

pub fn run(action: TasksAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TasksAction::Report {
            records,
            window_days,
            now,
        } => {
            let tasks: Vec<TaskRecord> = read_json(&records)?;
            let now = now.unwrap_or_else(Utc::now);
            let report = ProductivityAnalyzer::with_window(window_days).analyze(&tasks, now)?;
            print_json(&report)
        }
    }
}
