//! Keyword-lexicon sentiment scoring for free-text diary entries.
//!
//! The scorer counts lower-cased substring occurrences of positive and
//! negative lexicon terms and maps the balance to a score in [-100, 100].
//! It never fails at scoring time: a lexicon problem surfaces once, at
//! construction.

mod lexicon;

pub use lexicon::SentimentLexicon;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Score above which text is classified as very positive.
pub const VERY_POSITIVE_THRESHOLD: i32 = 30;
/// Score above which text is classified as positive.
pub const POSITIVE_THRESHOLD: i32 = 10;
/// Score below which text is classified as negative.
pub const NEGATIVE_THRESHOLD: i32 = -10;
/// Score below which text is classified as very negative.
pub const VERY_NEGATIVE_THRESHOLD: i32 = -30;

/// Classification label for a scored text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

/// Result of scoring one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Balance of positive vs negative matches, in [-100, 100].
    pub score: i32,
}

impl SentimentResult {
    fn neutral() -> Self {
        SentimentResult {
            label: SentimentLabel::Neutral,
            score: 0,
        }
    }
}

/// Lexicon-based sentiment classifier.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: SentimentLexicon,
}

impl SentimentScorer {
    /// Build a scorer from a caller-supplied lexicon. Fails if either
    /// side of the lexicon is empty.
    pub fn new(lexicon: SentimentLexicon) -> Result<Self> {
        lexicon.validate()?;
        Ok(SentimentScorer {
            lexicon: lexicon.lowercased(),
        })
    }

    /// Build a scorer over the built-in English lexicon.
    pub fn english() -> Self {
        // The built-in lexicon is known non-empty and lower-case.
        SentimentScorer {
            lexicon: SentimentLexicon::english(),
        }
    }

    /// Score a text. Empty text and text with no lexicon matches both
    /// yield a neutral zero score.
    pub fn score(&self, text: &str) -> SentimentResult {
        let haystack = text.to_lowercase();
        let positive = count_matches(&haystack, &self.lexicon.positive);
        let negative = count_matches(&haystack, &self.lexicon.negative);
        let total = positive + negative;
        if total == 0 {
            return SentimentResult::neutral();
        }
        let score =
            ((positive as f64 - negative as f64) / total as f64 * 100.0).round() as i32;
        SentimentResult {
            label: label_for_score(score),
            score,
        }
    }
}

/// Map a score to its label band.
pub fn label_for_score(score: i32) -> SentimentLabel {
    if score > VERY_POSITIVE_THRESHOLD {
        SentimentLabel::VeryPositive
    } else if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < VERY_NEGATIVE_THRESHOLD {
        SentimentLabel::VeryNegative
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

fn count_matches(haystack: &str, terms: &[String]) -> usize {
    terms
        .iter()
        .filter(|term| !term.is_empty())
        .map(|term| haystack.matches(term.as_str()).count())
        .sum()
}
