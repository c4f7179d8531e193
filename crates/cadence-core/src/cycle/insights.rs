//! Insight augmentation for the predictions view.
//!
//! Symptom frequency, mood distribution, regularity and the accuracy
//! figure are presentation heuristics layered on top of the prediction,
//! not statistically derived confidence measures.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::{CyclePrediction, CyclePredictor, CycleRecord, CycleRegularity};

/// Prediction plus historical pattern summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleInsights {
    pub prediction: CyclePrediction,
    /// Percentage of cycles in which each symptom was recorded.
    pub symptom_frequency: BTreeMap<String, u32>,
    /// Percentage distribution of recorded moods.
    pub mood_distribution: BTreeMap<String, u32>,
    pub cycle_regularity: CycleRegularity,
    /// Tiered heuristic, not a statistical confidence interval.
    pub prediction_accuracy: u32,
}

impl CyclePredictor {
    /// Prediction plus symptom/mood/regularity summaries over the whole
    /// history. Same ordering contract as [`CyclePredictor::predict`].
    pub fn insights(&self, cycles: &[CycleRecord], today: NaiveDate) -> Result<CycleInsights> {
        let prediction = self.predict(cycles, today)?;

        Ok(CycleInsights {
            symptom_frequency: symptom_frequency(cycles),
            mood_distribution: mood_distribution(cycles),
            cycle_regularity: self.regularity(cycles),
            prediction_accuracy: self.accuracy(cycles),
            prediction,
        })
    }

    /// Regular means the average sits near the textbook 28 days and no
    /// completed cycle strays far from that average. A wildly-spread
    /// history whose mean happens to land on 28 is still irregular.
    fn regularity(&self, cycles: &[CycleRecord]) -> CycleRegularity {
        let cfg = &self.config;
        if cycles.len() < cfg.min_cycles_for_regularity {
            return CycleRegularity::InsufficientData;
        }
        let average = self.average_cycle_length(cycles);
        let near_default =
            average.abs_diff(cfg.default_cycle_length_days) <= cfg.regularity_tolerance_days;
        let spread_ok = cycles
            .iter()
            .filter_map(|c| c.cycle_length.filter(|_| c.is_completed()))
            .all(|length| length.abs_diff(average) <= cfg.regularity_tolerance_days);
        if near_default && spread_ok {
            CycleRegularity::Regular
        } else {
            CycleRegularity::Irregular
        }
    }

    fn accuracy(&self, cycles: &[CycleRecord]) -> u32 {
        let cfg = &self.config;
        if cycles.len() >= cfg.high_accuracy_min_cycles {
            cfg.high_accuracy_percent
        } else if cycles.len() >= cfg.medium_accuracy_min_cycles {
            cfg.medium_accuracy_percent
        } else {
            cfg.low_accuracy_percent
        }
    }
}

fn symptom_frequency(cycles: &[CycleRecord]) -> BTreeMap<String, u32> {
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for cycle in cycles {
        // A symptom logged twice in one cycle still counts that cycle once
        let mut seen: Vec<&str> = Vec::new();
        for symptom in &cycle.symptoms {
            if !seen.contains(&symptom.as_str()) {
                seen.push(symptom);
                *counts.entry(symptom.clone()).or_insert(0) += 1;
            }
        }
    }
    percentages(counts, cycles.len())
}

fn mood_distribution(cycles: &[CycleRecord]) -> BTreeMap<String, u32> {
    let moods: Vec<&str> = cycles
        .iter()
        .filter_map(|c| c.mood.map(|m| m.as_str()))
        .collect();
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for mood in &moods {
        *counts.entry(mood.to_string()).or_insert(0) += 1;
    }
    percentages(counts, moods.len())
}

fn percentages(counts: BTreeMap<String, u32>, total: usize) -> BTreeMap<String, u32> {
    if total == 0 {
        return BTreeMap::new();
    }
    counts
        .into_iter()
        .map(|(key, count)| {
            let percent = (count as f64 / total as f64 * 100.0).round() as u32;
            (key, percent)
        })
        .collect()
}
