//! Integration tests for cycle prediction over a realistic history.

use cadence_core::{
    CyclePhase, CyclePredictor, CycleRecord, CycleRegularity, FertilityLevel, Flow, Mood,
};
use chrono::{Duration, NaiveDate};
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Six closed cycles plus the current open one, newest first.
fn realistic_history() -> Vec<CycleRecord> {
    let lengths = [29u32, 28, 27, 28, 30, 28];
    let mut start = date(2024, 6, 3);
    let mut cycles = vec![CycleRecord {
        id: Uuid::new_v4(),
        start_date: start,
        end_date: None,
        cycle_length: None,
        period_length: None,
        flow: Some(Flow::Medium),
        symptoms: vec!["cramps".to_string()],
        mood: Some(Mood::Tired),
    }];
    for length in lengths {
        start -= Duration::days(length as i64);
        cycles.push(CycleRecord {
            id: Uuid::new_v4(),
            start_date: start,
            end_date: Some(start + Duration::days(length as i64)),
            cycle_length: Some(length),
            period_length: Some(5),
            flow: Some(Flow::Medium),
            symptoms: vec!["cramps".to_string(), "headache".to_string()],
            mood: Some(Mood::Irritable),
        });
    }
    cycles
}

#[test]
fn full_prediction_over_realistic_history() {
    let cycles = realistic_history();
    let today = date(2024, 6, 10);
    let prediction = CyclePredictor::new().predict(&cycles, today).unwrap();

    // Mean of [29, 28, 27, 28, 30, 28] = 28.33 -> 28
    assert_eq!(prediction.average_cycle_length, 28);
    assert_eq!(prediction.average_period_length, 5);
    assert_eq!(
        prediction.next_period_date,
        Some(date(2024, 6, 3) + Duration::days(28))
    );
    // Day 7 since start: follicular
    assert_eq!(prediction.current_phase, CyclePhase::Follicular);
    assert_eq!(prediction.fertility_level, FertilityLevel::Low);

    let window = prediction.fertile_window.unwrap();
    assert_eq!(window.ovulation, date(2024, 6, 17));
    assert_eq!(window.start, date(2024, 6, 12));
    assert_eq!(window.end, date(2024, 6, 18));
}

#[test]
fn insights_over_realistic_history() {
    let cycles = realistic_history();
    let insights = CyclePredictor::new()
        .insights(&cycles, date(2024, 6, 10))
        .unwrap();

    assert_eq!(insights.cycle_regularity, CycleRegularity::Regular);
    // 7 observed cycles >= 6 -> top accuracy tier
    assert_eq!(insights.prediction_accuracy, 95);
    // Every cycle logged cramps; only the closed ones logged headache
    assert_eq!(insights.symptom_frequency["cramps"], 100);
    assert_eq!(insights.symptom_frequency["headache"], 86);
    // 6 of 7 moods irritable, 1 tired
    assert_eq!(insights.mood_distribution["irritable"], 86);
    assert_eq!(insights.mood_distribution["tired"], 14);
}

#[test]
fn phase_walk_through_one_cycle() {
    let cycles = realistic_history();
    let predictor = CyclePredictor::new();
    let start = date(2024, 6, 3);

    let phase_at = |offset: i64| {
        predictor
            .predict(&cycles, start + Duration::days(offset))
            .unwrap()
            .current_phase
    };

    assert_eq!(phase_at(0), CyclePhase::Menstrual);
    assert_eq!(phase_at(5), CyclePhase::Menstrual);
    assert_eq!(phase_at(6), CyclePhase::Follicular);
    assert_eq!(phase_at(13), CyclePhase::Follicular);
    assert_eq!(phase_at(14), CyclePhase::Ovulation);
    assert_eq!(phase_at(16), CyclePhase::Ovulation);
    assert_eq!(phase_at(17), CyclePhase::Luteal);
    assert_eq!(phase_at(27), CyclePhase::Luteal);
}
