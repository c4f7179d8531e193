//! Next-period and phase prediction.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::timewindow::days_between_dates;

use super::{CycleConfig, CyclePhase, CyclePredictor, CycleRecord, FertilityLevel};

/// Date range flagged as high conception probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertileWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub ovulation: NaiveDate,
}

/// Derived prediction for one cycle history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePrediction {
    /// Rounded mean of completed cycle lengths; the default when none.
    pub average_cycle_length: u32,
    /// Rounded mean of recorded period lengths; the default when none.
    pub average_period_length: u32,
    /// Last recorded start plus the average cycle length.
    pub next_period_date: Option<NaiveDate>,
    pub fertile_window: Option<FertileWindow>,
    pub current_phase: CyclePhase,
    pub fertility_level: FertilityLevel,
    /// Signed days from the evaluation date to the predicted next period.
    pub days_until_next_period: Option<i64>,
}

impl CyclePrediction {
    pub(super) fn no_data(config: &CycleConfig) -> Self {
        CyclePrediction {
            average_cycle_length: config.default_cycle_length_days,
            average_period_length: config.default_period_length_days,
            next_period_date: None,
            fertile_window: None,
            current_phase: CyclePhase::NoData,
            fertility_level: FertilityLevel::NoData,
            days_until_next_period: None,
        }
    }
}

impl CyclePredictor {
    /// Predict the next period, fertile window and current phase.
    ///
    /// `cycles` must be ordered by `start_date` descending (most recent
    /// first); an unsorted history is a caller bug and fails fast. An
    /// empty history yields the documented defaults instead of an error.
    pub fn predict(&self, cycles: &[CycleRecord], today: NaiveDate) -> Result<CyclePrediction> {
        ensure_descending(cycles)?;
        let Some(latest) = cycles.first() else {
            return Ok(CyclePrediction::no_data(&self.config));
        };

        let average_cycle_length = self.average_cycle_length(cycles);
        let average_period_length = self.average_period_length(cycles);

        let last_start = latest.start_date;
        let next_period_date = last_start + Duration::days(average_cycle_length as i64);
        let ovulation = last_start + Duration::days(self.config.ovulation_offset_days);
        let fertile_window = FertileWindow {
            start: ovulation - Duration::days(self.config.fertile_window_lead_days),
            end: ovulation + Duration::days(self.config.fertile_window_tail_days),
            ovulation,
        };

        let days_since_start = days_between_dates(last_start, today);
        let (current_phase, fertility_level) =
            self.classify_phase(days_since_start, average_period_length);

        Ok(CyclePrediction {
            average_cycle_length,
            average_period_length,
            next_period_date: Some(next_period_date),
            fertile_window: Some(fertile_window),
            current_phase,
            fertility_level,
            days_until_next_period: Some(days_between_dates(today, next_period_date)),
        })
    }

    pub(super) fn average_cycle_length(&self, cycles: &[CycleRecord]) -> u32 {
        let lengths: Vec<u32> = cycles
            .iter()
            .filter(|c| c.is_completed())
            .filter_map(|c| c.cycle_length)
            .collect();
        if lengths.is_empty() {
            return self.config.default_cycle_length_days;
        }
        rounded_mean(&lengths)
    }

    pub(super) fn average_period_length(&self, cycles: &[CycleRecord]) -> u32 {
        let lengths: Vec<u32> = cycles
            .iter()
            .filter(|c| c.is_completed())
            .map(|c| {
                c.period_length
                    .unwrap_or(self.config.default_period_length_days)
            })
            .collect();
        if lengths.is_empty() {
            return self.config.default_period_length_days;
        }
        rounded_mean(&lengths)
    }

    /// Phase state machine over days since the last start, evaluated in
    /// order. The ovulation band's lower bound overlaps the follicular
    /// band at `follicular_end_day`; evaluation order keeps that day
    /// follicular, matching the behavior users already see.
    fn classify_phase(
        &self,
        days_since_start: i64,
        average_period_length: u32,
    ) -> (CyclePhase, FertilityLevel) {
        let cfg = &self.config;
        if days_since_start <= average_period_length as i64 {
            (CyclePhase::Menstrual, FertilityLevel::VeryLow)
        } else if days_since_start <= cfg.follicular_end_day {
            (CyclePhase::Follicular, FertilityLevel::Low)
        } else if days_since_start >= cfg.follicular_end_day
            && days_since_start <= cfg.ovulation_end_day
        {
            (CyclePhase::Ovulation, FertilityLevel::High)
        } else {
            (CyclePhase::Luteal, FertilityLevel::Medium)
        }
    }
}

fn ensure_descending(cycles: &[CycleRecord]) -> Result<()> {
    let sorted = cycles
        .windows(2)
        .all(|pair| pair[0].start_date >= pair[1].start_date);
    if !sorted {
        return Err(EngineError::invalid_input(
            "cycles",
            "records must be ordered by start_date descending",
        ));
    }
    Ok(())
}

fn rounded_mean(values: &[u32]) -> u32 {
    let sum: u64 = values.iter().map(|&v| v as u64).sum();
    (sum as f64 / values.len() as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::test_support::{cycle, date};

    #[test]
    fn empty_history_yields_documented_defaults() {
        let prediction = CyclePredictor::new().predict(&[], date(2024, 3, 15)).unwrap();
        assert_eq!(prediction.average_cycle_length, 28);
        assert_eq!(prediction.average_period_length, 5);
        assert_eq!(prediction.current_phase, CyclePhase::NoData);
        assert_eq!(prediction.fertility_level, FertilityLevel::NoData);
        assert_eq!(prediction.next_period_date, None);
        assert_eq!(prediction.fertile_window, None);
        assert_eq!(prediction.days_until_next_period, None);
    }

    #[test]
    fn averages_use_completed_cycles_only() {
        let cycles = vec![
            cycle(date(2024, 3, 1), None, None), // open cycle, excluded
            cycle(date(2024, 2, 2), Some(28), Some(5)),
            cycle(date(2024, 1, 4), Some(29), Some(6)),
            cycle(date(2023, 12, 8), Some(27), Some(4)),
        ];
        let prediction = CyclePredictor::new().predict(&cycles, date(2024, 3, 5)).unwrap();
        assert_eq!(prediction.average_cycle_length, 28);
        assert_eq!(prediction.average_period_length, 5);
    }

    #[test]
    fn missing_period_length_defaults_inside_the_mean() {
        let cycles = vec![
            cycle(date(2024, 2, 2), Some(28), Some(7)),
            cycle(date(2024, 1, 4), Some(28), None), // contributes 5
        ];
        let prediction = CyclePredictor::new().predict(&cycles, date(2024, 2, 5)).unwrap();
        assert_eq!(prediction.average_period_length, 6);
    }

    #[test]
    fn next_period_is_last_start_plus_average() {
        let cycles = vec![cycle(date(2024, 3, 1), Some(30), Some(5))];
        let prediction = CyclePredictor::new().predict(&cycles, date(2024, 3, 10)).unwrap();
        assert_eq!(prediction.next_period_date, Some(date(2024, 3, 31)));
        assert_eq!(prediction.days_until_next_period, Some(21));
    }

    #[test]
    fn ovulation_is_fixed_fourteen_days_after_start() {
        // Even with a 35-day average, ovulation stays at start + 14
        let cycles = vec![
            cycle(date(2024, 3, 1), Some(35), Some(5)),
            cycle(date(2024, 1, 26), Some(35), Some(5)),
        ];
        let prediction = CyclePredictor::new().predict(&cycles, date(2024, 3, 10)).unwrap();
        let window = prediction.fertile_window.unwrap();
        assert_eq!(window.ovulation, date(2024, 3, 15));
        assert_eq!(window.start, date(2024, 3, 10));
        assert_eq!(window.end, date(2024, 3, 16));
    }

    #[test]
    fn phase_boundaries_follow_the_state_machine() {
        let predictor = CyclePredictor::new();
        let cycles = vec![cycle(date(2024, 3, 1), Some(28), Some(5))];
        let phase_on = |day: u32| {
            let prediction = predictor.predict(&cycles, date(2024, 3, day)).unwrap();
            (prediction.current_phase, prediction.fertility_level)
        };

        // Day 0..=5 since start: menstrual
        assert_eq!(phase_on(1), (CyclePhase::Menstrual, FertilityLevel::VeryLow));
        assert_eq!(phase_on(6), (CyclePhase::Menstrual, FertilityLevel::VeryLow));
        // Day 6..=13: follicular; day 13 stays follicular despite the
        // overlapping ovulation lower bound
        assert_eq!(phase_on(7), (CyclePhase::Follicular, FertilityLevel::Low));
        assert_eq!(phase_on(14), (CyclePhase::Follicular, FertilityLevel::Low));
        // Day 14..=16: ovulation
        assert_eq!(phase_on(15), (CyclePhase::Ovulation, FertilityLevel::High));
        assert_eq!(phase_on(17), (CyclePhase::Ovulation, FertilityLevel::High));
        // Day 17+: luteal
        assert_eq!(phase_on(18), (CyclePhase::Luteal, FertilityLevel::Medium));
    }

    #[test]
    fn evaluation_date_before_last_start_reads_as_menstrual() {
        let cycles = vec![cycle(date(2024, 3, 10), Some(28), Some(5))];
        let prediction = CyclePredictor::new().predict(&cycles, date(2024, 3, 8)).unwrap();
        assert_eq!(prediction.current_phase, CyclePhase::Menstrual);
        assert_eq!(prediction.days_until_next_period, Some(30));
    }

    #[test]
    fn unsorted_history_fails_fast() {
        let cycles = vec![
            cycle(date(2024, 1, 4), Some(28), Some(5)),
            cycle(date(2024, 2, 2), Some(28), Some(5)),
        ];
        let err = CyclePredictor::new().predict(&cycles, date(2024, 3, 5)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { .. }));
    }

    #[test]
    fn open_cycles_only_still_predicts_from_defaults() {
        let cycles = vec![cycle(date(2024, 3, 1), None, None)];
        let prediction = CyclePredictor::new().predict(&cycles, date(2024, 3, 3)).unwrap();
        assert_eq!(prediction.average_cycle_length, 28);
        assert_eq!(prediction.next_period_date, Some(date(2024, 3, 29)));
    }

    #[test]
    fn prediction_is_idempotent() {
        let cycles = vec![
            cycle(date(2024, 3, 1), Some(28), Some(5)),
            cycle(date(2024, 2, 2), Some(29), Some(4)),
        ];
        let a = CyclePredictor::new().predict(&cycles, date(2024, 3, 10)).unwrap();
        let b = CyclePredictor::new().predict(&cycles, date(2024, 3, 10)).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
