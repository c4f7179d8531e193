//! # Cadence Core Library
//!
//! Deterministic temporal analytics over a user's timestamped records.
//! Every analyzer is a pure function of a caller-supplied, already-fetched
//! in-memory collection: no internal state, no locks, no I/O. The host
//! (CRUD layer, CLI, prompt builder) loads the records, calls the relevant
//! analyzer and forwards the returned summary or prediction.
//!
//! ## Components
//!
//! - [`timewindow`]: day-granularity date utilities used by everything else
//! - [`SentimentScorer`]: keyword-lexicon classifier over diary text
//! - [`StreakTracker`]: consecutive-day run detection
//! - [`QuietHoursGate`]: do-not-disturb window test for notifications
//! - [`ProductivityAnalyzer`]: task completion metrics over a rolling window
//! - [`CyclePredictor`]: menstrual-cycle phase and fertile-window prediction
//!
//! Missing history is never an error: each analyzer has a documented
//! zero-element default so the UI is never blocked on an empty account.

pub mod cycle;
pub mod diary;
pub mod error;
pub mod productivity;
pub mod quiet_hours;
pub mod sentiment;
pub mod streak;
pub mod timewindow;

pub use cycle::{
    CycleConfig, CycleInsights, CyclePhase, CyclePrediction, CyclePredictor, CycleRecord,
    CycleRegularity, FertileWindow, FertilityLevel, Flow,
};
pub use diary::{DiaryEntry, Mood};
pub use error::{EngineError, Result};
pub use productivity::{
    CategoryStats, ProductivityAnalyzer, ProductivityReport, TaskPriority, TaskRecord, TaskStatus,
};
pub use quiet_hours::{NotificationPreference, QuietHoursGate};
pub use sentiment::{SentimentLabel, SentimentLexicon, SentimentResult, SentimentScorer};
pub use streak::{StreakResult, StreakTracker};
