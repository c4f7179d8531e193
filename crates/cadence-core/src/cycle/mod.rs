//! Menstrual-cycle prediction and insights.
//!
//! [`CyclePredictor`] derives average cycle and period lengths, the next
//! period date, the fertile window and the current phase from historical
//! cycle records; [`CyclePredictor::insights`] layers symptom, mood and
//! regularity heuristics on top for the predictions view.
//!
//! Every numeric threshold lives in [`CycleConfig`] so it can be tested
//! and tuned without touching control flow.

mod insights;
mod predictor;

pub use insights::CycleInsights;
pub use predictor::{CyclePrediction, FertileWindow};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::diary::Mood;

/// Reported bleeding intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    Light,
    Medium,
    Heavy,
}

/// Phase of the cycle at the evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulation,
    Luteal,
    NoData,
}

/// Conception-probability band for the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FertilityLevel {
    VeryLow,
    Low,
    Medium,
    High,
    NoData,
}

/// Regularity classification of the observed history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleRegularity {
    Regular,
    Irregular,
    InsufficientData,
}

/// One menstrual cycle as recorded by the user.
///
/// `cycle_length` is derived when the cycle is closed with an end date;
/// a record missing either is still open and excluded from averages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleRecord {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Days from this start to the next start, derived at close time.
    pub cycle_length: Option<u32>,
    /// Days of bleeding in this cycle.
    pub period_length: Option<u32>,
    pub flow: Option<Flow>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub mood: Option<Mood>,
}

impl CycleRecord {
    /// Whether the cycle is closed and usable for averaging.
    pub fn is_completed(&self) -> bool {
        self.end_date.is_some() && self.cycle_length.is_some()
    }
}

/// Named constants for the prediction heuristics.
#[derive(Debug, Clone)]
pub struct CycleConfig {
    /// Average cycle length assumed when no completed cycles exist.
    pub default_cycle_length_days: u32,
    /// Average period length assumed when none is recorded.
    pub default_period_length_days: u32,
    /// Ovulation is predicted this many days after the last start,
    /// independent of the computed average cycle length. Known to be
    /// implausible for long cycles; kept until product decides otherwise.
    pub ovulation_offset_days: i64,
    /// Fertile window opens this many days before ovulation.
    pub fertile_window_lead_days: i64,
    /// Fertile window closes this many days after ovulation.
    pub fertile_window_tail_days: i64,
    /// Last day (since start) of the follicular phase.
    pub follicular_end_day: i64,
    /// Last day (since start) of the ovulation phase.
    pub ovulation_end_day: i64,
    /// A history is "regular" when the average cycle length is within
    /// this many days of the default.
    pub regularity_tolerance_days: u32,
    /// Minimum observed cycles before regularity is classified at all.
    pub min_cycles_for_regularity: usize,
    /// Observed-cycle counts gating the accuracy tiers.
    pub high_accuracy_min_cycles: usize,
    pub medium_accuracy_min_cycles: usize,
    /// Accuracy percentages reported per tier.
    pub high_accuracy_percent: u32,
    pub medium_accuracy_percent: u32,
    pub low_accuracy_percent: u32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        CycleConfig {
            default_cycle_length_days: 28,
            default_period_length_days: 5,
            ovulation_offset_days: 14,
            fertile_window_lead_days: 5,
            fertile_window_tail_days: 1,
            follicular_end_day: 13,
            ovulation_end_day: 16,
            regularity_tolerance_days: 3,
            min_cycles_for_regularity: 3,
            high_accuracy_min_cycles: 6,
            medium_accuracy_min_cycles: 3,
            high_accuracy_percent: 95,
            medium_accuracy_percent: 80,
            low_accuracy_percent: 60,
        }
    }
}

/// Predictor over an ordered (most recent first) cycle history.
#[derive(Debug, Clone, Default)]
pub struct CyclePredictor {
    pub config: CycleConfig,
}

impl CyclePredictor {
    /// Create a predictor with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a predictor with custom thresholds.
    pub fn with_config(config: CycleConfig) -> Self {
        CyclePredictor { config }
    }
}
