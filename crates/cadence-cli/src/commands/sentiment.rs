use std::fs;
use std::path::PathBuf;

use cadence_core::{SentimentLexicon, SentimentScorer};
use clap::Subcommand;

use crate::common::print_json;

#[derive(Subcommand)]
pub enum SentimentAction {
    /// Score a text against the sentiment lexicon
    Score {
        /// Text to score
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// File whose contents are scored
        #[arg(long)]
        file: Option<PathBuf>,
        /// TOML lexicon to use instead of the built-in English one
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
}

pub fn run(action: SentimentAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SentimentAction::Score {
            text,
            file,
            lexicon,
        } => {
            let scorer = match lexicon {
                Some(path) => SentimentScorer::new(SentimentLexicon::load(&path)?)?,
                None => SentimentScorer::english(),
            };
            let content = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => fs::read_to_string(path)?,
                (None, None) => return Err("either --text or --file is required".into()),
            };
            print_json(&scorer.score(&content))
        }
    }
}
