use serde::{Deserialize, Serialize};

use crate::emotion::EmotionSet;
use crate::lexicon::LexiconStore;
use crate::normalize::NormalizedText;

/// Emotions attributed to one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDetail {
    pub original: String,
    pub stem: String,
    /// Token matches first, then stem-only additions.
    pub emotions: EmotionSet,
}

/// Looks up `token`, then `stem` if it differs, and unions the two results.
/// Emotions found for the token keep precedence in the ordering.
/// # Example
/// ```
/// use emotion_analysis::{Emotion, LexiconStore, match_emotions};
/// let lexicon = LexiconStore::parse("run\tanticipation\t1");
/// let found = match_emotions("running", "runn", &lexicon);
/// assert!(found.is_empty());
/// let found = match_emotions("runs", "run", &lexicon);
/// assert_eq!(found.as_slice(), &[Emotion::Anticipation]);
/// ```
pub fn match_emotions(token: &str, stem: &str, lexicon: &LexiconStore) -> EmotionSet {
    let mut emotions = lexicon.lookup(token);
    if stem != token {
        emotions.union_with(&lexicon.lookup(stem));
    }
    emotions
}

/// One [`WordDetail`] per token, aligned by index.
pub fn word_details(normalized: &NormalizedText, lexicon: &LexiconStore) -> Vec<WordDetail> {
    normalized
        .tokens
        .iter()
        .zip(&normalized.stems)
        .map(|(token, stem)| WordDetail {
            original: token.clone(),
            stem: stem.clone(),
            emotions: match_emotions(token, stem, lexicon),
        })
        .collect()
}
