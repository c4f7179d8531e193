//! Task completion analytics over a rolling window.
//!
//! Aggregates task records created within the window into completion
//! rate, overdue count, peak completion hour, average cycle time and a
//! per-category breakdown. Pure function of the supplied records and
//! the caller's "now".

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, Result};

/// Default rolling window, in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

/// Caller-assigned task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// A task-like record as supplied by the persistence layer.
///
/// Invariant: `completed_at` is set if and only if `status` is
/// [`TaskStatus::Done`]. The analyzer validates this and fails fast on
/// violations rather than producing silently wrong rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub category: String,
    pub due_date: Option<DateTime<Utc>>,
}

/// Per-category totals in a productivity report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub total: u32,
    pub completed: u32,
}

/// Aggregated productivity metrics for one user and window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductivityReport {
    /// Tasks created inside the window.
    pub total_tasks: u32,
    /// Of those, tasks in `done` status.
    pub completed_tasks: u32,
    /// Rounded percentage of completed tasks; 0 when the window is empty.
    pub completion_rate: u32,
    /// Not-done tasks whose due date has passed.
    pub overdue_count: u32,
    /// Hour of day (0-23) with the most completions. Ties go to the
    /// lowest hour; `None` when nothing was completed.
    pub peak_hour: Option<u32>,
    /// Mean hours from creation to completion, one decimal; 0.0 when
    /// nothing was completed.
    pub avg_completion_time_hours: f64,
    /// Per-category totals, keyed by category name.
    pub by_category: BTreeMap<String, CategoryStats>,
}

/// Analyzer for task-like records.
#[derive(Debug, Clone)]
pub struct ProductivityAnalyzer {
    /// Only tasks created at most this many days before "now" are counted.
    pub window_days: i64,
}

impl Default for ProductivityAnalyzer {
    fn default() -> Self {
        ProductivityAnalyzer {
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl ProductivityAnalyzer {
    /// Create an analyzer with the default 30-day window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with a custom window.
    pub fn with_window(window_days: i64) -> Self {
        ProductivityAnalyzer { window_days }
    }

    /// Aggregate tasks created within the window into a report.
    pub fn analyze(&self, tasks: &[TaskRecord], now: DateTime<Utc>) -> Result<ProductivityReport> {
        for task in tasks {
            validate_completion_invariant(task)?;
        }

        let cutoff = now - Duration::days(self.window_days);
        let windowed: Vec<&TaskRecord> =
            tasks.iter().filter(|t| t.created_at >= cutoff).collect();

        let total_tasks = windowed.len() as u32;
        let completed: Vec<&&TaskRecord> = windowed
            .iter()
            .filter(|t| t.status == TaskStatus::Done)
            .collect();
        let completed_tasks = completed.len() as u32;

        let completion_rate = if total_tasks > 0 {
            (completed_tasks as f64 / total_tasks as f64 * 100.0).round() as u32
        } else {
            0
        };

        let overdue_count = windowed
            .iter()
            .filter(|t| t.status != TaskStatus::Done)
            .filter(|t| t.due_date.is_some_and(|due| due < now))
            .count() as u32;

        let peak_hour = peak_completion_hour(
            completed.iter().filter_map(|t| t.completed_at),
        );

        let completion_hours: Vec<f64> = completed
            .iter()
            .filter_map(|t| {
                t.completed_at
                    .map(|done| (done - t.created_at).num_minutes() as f64 / 60.0)
            })
            .collect();
        let avg_completion_time_hours = if completion_hours.is_empty() {
            0.0
        } else {
            let mean = completion_hours.iter().sum::<f64>() / completion_hours.len() as f64;
            (mean * 10.0).round() / 10.0
        };

        let mut by_category: BTreeMap<String, CategoryStats> = BTreeMap::new();
        for task in &windowed {
            let stats = by_category.entry(task.category.clone()).or_default();
            stats.total += 1;
            if task.status == TaskStatus::Done {
                stats.completed += 1;
            }
        }

        Ok(ProductivityReport {
            total_tasks,
            completed_tasks,
            completion_rate,
            overdue_count,
            peak_hour,
            avg_completion_time_hours,
            by_category,
        })
    }
}

fn validate_completion_invariant(task: &TaskRecord) -> Result<()> {
    let done = task.status == TaskStatus::Done;
    if done != task.completed_at.is_some() {
        return Err(EngineError::invalid_input(
            "tasks",
            format!(
                "task {} violates completed_at/status invariant (status {:?}, completed_at {})",
                task.id,
                task.status,
                if task.completed_at.is_some() { "set" } else { "unset" },
            ),
        ));
    }
    Ok(())
}

/// Histogram over completion hours with a deterministic tie-break:
/// highest count first, then lowest hour.
fn peak_completion_hour<I>(completions: I) -> Option<u32>
where
    I: Iterator<Item = DateTime<Utc>>,
{
    let mut histogram: HashMap<u32, u32> = HashMap::new();
    for completed_at in completions {
        *histogram.entry(completed_at.hour()).or_insert(0) += 1;
    }
    let mut counts: Vec<(u32, u32)> = histogram.into_iter().collect();
    counts.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    counts.first().map(|&(hour, _)| hour)
}
