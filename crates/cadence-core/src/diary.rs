//! Diary entry records.
//!
//! Entries are the input to sentiment scoring and streak tracking. The
//! `sentiment` fields are computed outputs persisted alongside the entry,
//! never authored by the user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sentiment::{SentimentLabel, SentimentResult};

/// Self-reported mood, shared between diary entries and cycle records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Calm,
    Neutral,
    Sad,
    Anxious,
    Irritable,
    Energetic,
    Tired,
}

impl Mood {
    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Irritable => "irritable",
            Mood::Energetic => "energetic",
            Mood::Tired => "tired",
        }
    }
}

/// A free-text diary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub mood: Option<Mood>,
    /// Computed by the sentiment scorer, not authored.
    #[serde(default)]
    pub sentiment: Option<SentimentLabel>,
    /// Computed by the sentiment scorer, not authored.
    #[serde(default)]
    pub sentiment_score: Option<i32>,
}

impl DiaryEntry {
    /// Record a scorer result on the entry.
    pub fn apply_sentiment(&mut self, result: SentimentResult) {
        self.sentiment = Some(result.label);
        self.sentiment_score = Some(result.score);
    }
}
