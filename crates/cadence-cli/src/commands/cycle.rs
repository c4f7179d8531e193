use std::path::PathBuf;

use cadence_core::{CyclePredictor, CycleRecord};
use chrono::{NaiveDate, Utc};
use clap::Subcommand;

use crate::common::{print_json, read_json};

#[derive(Subcommand)]
pub enum CycleAction {
    /// Predict the next period, fertile window and current phase
    Predict {
        /// JSON file with cycle records, most recent first
        #[arg(long)]
        records: PathBuf,
        /// Evaluation date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Prediction plus symptom, mood and regularity insights
    Insights {
        #[arg(long)]
        records: PathBuf,
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

pub fn run(action: CycleAction) -> Result<(), Box<dyn std::error::Error>> {
    let predictor = CyclePredictor::new();
    match action {
        CycleAction::Predict { records, today } => {
            let cycles: Vec<CycleRecord> = read_json(&records)?;
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            print_json(&predictor.predict(&cycles, today)?)
        }
        CycleAction::Insights { records, today } => {
            let cycles: Vec<CycleRecord> = read_json(&records)?;
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            print_json(&predictor.insights(&cycles, today)?)
        }
    }
}
