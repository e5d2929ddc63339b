//! # emotion_analysis
//!
//! Lexicon-based emotion analysis. Text is case-folded, stripped of
//! punctuation, tokenized and lightly stemmed; every token (and its stem) is
//! looked up in an NRC-style word/emotion table, and the matches are reduced
//! to per-emotion counts and percentages.
//!
//! ## Example
//! ```
//! use emotion_analysis::{Emotion, LexiconStore, analyze_text};
//!
//! let lexicon = LexiconStore::parse("love\tjoy\t1\nhate\tanger\t1\n");
//! let result = analyze_text("I love dogs but I hate cats!", &lexicon).unwrap();
//! assert_eq!(result.total_emotion_tags, 2);
//! assert_eq!(result.emotion_percentages[&Emotion::Joy], "50.00");
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};

pub mod aggregate;
pub mod emotion;
pub mod export;
pub mod lexicon;
pub mod matcher;
pub mod normalize;
pub mod session;

pub use aggregate::{Aggregate, aggregate, format_percentage, rank_by_count, rank_by_percentage};
pub use emotion::{Emotion, EmotionSet};
pub use export::{ExportError, ExportFormat, render, save_result};
pub use lexicon::{DEFAULT_LEXICON_FILE, LexiconLoad, LexiconStore, LoadError};
pub use matcher::{WordDetail, match_emotions, word_details};
pub use normalize::{NormalizedText, SUFFIX_RULES, is_separator, normalize, stem};
pub use session::{AnalysisSession, HISTORY_CAPACITY, History, LexiconStatus};

/// Everything one analysis produced. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub source_text: String,
    pub normalization: NormalizedText,
    /// One entry per token, aligned by index.
    pub word_details: Vec<WordDetail>,
    pub emotion_counts: BTreeMap<Emotion, usize>,
    pub emotion_percentages: BTreeMap<Emotion, String>,
    pub total_emotion_tags: usize,
    pub created_at: DateTime<Local>,
}

impl AnalysisResult {
    /// Percentages, highest first.
    pub fn ranked_by_percentage(&self) -> Vec<(Emotion, String)> {
        rank_by_percentage(&self.aggregate())
    }

    /// Emotions that occurred, most frequent first.
    pub fn ranked_by_count(&self) -> Vec<(Emotion, usize)> {
        rank_by_count(&self.aggregate())
    }

    fn aggregate(&self) -> Aggregate {
        Aggregate {
            emotion_counts: self.emotion_counts.clone(),
            emotion_percentages: self.emotion_percentages.clone(),
            total_emotion_tags: self.total_emotion_tags,
        }
    }
}

/// Normalizes `text`, matches each token against `lexicon` and aggregates.
///
/// Empty or whitespace-only input is a no-op and yields `None`.
pub fn analyze_text(text: &str, lexicon: &LexiconStore) -> Option<AnalysisResult> {
    if text.trim_matches(normalize::is_separator).is_empty() {
        debug!("Ignoring blank input");
        return None;
    }

    let normalization = normalize(text);
    let details = word_details(&normalization, lexicon);
    let Aggregate {
        emotion_counts,
        emotion_percentages,
        total_emotion_tags,
    } = aggregate(&details);

    debug!(
        "Analyzed {} token(s), {} emotion tag(s)",
        normalization.tokens.len(),
        total_emotion_tags
    );

    Some(AnalysisResult {
        source_text: text.to_string(),
        normalization,
        word_details: details,
        emotion_counts,
        emotion_percentages,
        total_emotion_tags,
        created_at: Local::now(),
    })
}
