//! Sentiment word lists.
//!
//! Lexicons are injectable configuration rather than hard-coded tables so
//! other locales can be supplied. The built-in list covers the English
//! diary vocabulary the engine ships with; custom lists load from TOML
//! files shaped like:
//!
//! ```toml
//! positive = ["happy", "great"]
//! negative = ["sad", "awful"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Word lists used by the sentiment scorer. Terms are matched as
/// lower-cased substrings, so entries should be lower-case stems.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentLexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl SentimentLexicon {
    /// The built-in English lexicon.
    pub fn english() -> Self {
        let positive = [
            "happy", "joy", "excited", "amazing", "wonderful", "great", "love",
            "grateful", "blessed", "peaceful", "calm", "proud", "accomplished",
            "hopeful", "optimistic", "fantastic", "excellent", "delighted",
        ];
        let negative = [
            "sad", "angry", "frustrated", "anxious", "worried", "stressed",
            "depressed", "terrible", "awful", "horrible", "exhausted", "lonely",
            "afraid", "upset", "miserable", "annoyed", "overwhelmed", "hopeless",
        ];
        SentimentLexicon {
            positive: positive.iter().map(|s| s.to_string()).collect(),
            negative: negative.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parse a lexicon from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a lexicon from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| EngineError::LexiconRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Reject lexicons that would make every score degenerate.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.positive.iter().all(|w| w.trim().is_empty()) {
            return Err(EngineError::EmptyLexicon { side: "positive" });
        }
        if self.negative.iter().all(|w| w.trim().is_empty()) {
            return Err(EngineError::EmptyLexicon { side: "negative" });
        }
        Ok(())
    }

    /// Normalize all terms to lower case for substring matching.
    pub(crate) fn lowercased(self) -> Self {
        SentimentLexicon {
            positive: self.positive.iter().map(|w| w.to_lowercase()).collect(),
            negative: self.negative.iter().map(|w| w.to_lowercase()).collect(),
        }
    }
}
