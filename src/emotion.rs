use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed emotion vocabulary of the NRC word-level lexicon.
///
/// Declaration order is the vocabulary order; `Ord` follows it, so a
/// `BTreeMap<Emotion, _>` iterates in the same order the labels are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Anticipation,
    Disgust,
    Fear,
    Joy,
    Sadness,
    Surprise,
    Trust,
    Positive,
    Negative,
}

impl Emotion {
    /// All labels in vocabulary order.
    pub const ALL: [Emotion; 10] = [
        Emotion::Anger,
        Emotion::Anticipation,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Surprise,
        Emotion::Trust,
        Emotion::Positive,
        Emotion::Negative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Anticipation => "anticipation",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
            Emotion::Trust => "trust",
            Emotion::Positive => "positive",
            Emotion::Negative => "negative",
        }
    }

    /// Exact, case-sensitive match against the lexicon's labels.
    /// Anything outside the vocabulary yields `None`.
    pub fn from_label(label: &str) -> Option<Emotion> {
        Emotion::ALL.into_iter().find(|e| e.label() == label)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::from_label(s).ok_or_else(|| format!("Unknown emotion label: {s}"))
    }
}

/// Insertion-ordered set of emotions without duplicates.
///
/// Iteration yields emotions in the order they were first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionSet(Vec<Emotion>);

impl EmotionSet {
    pub fn new() -> Self {
        EmotionSet(Vec::new())
    }

    /// Adds `emotion` if absent. Returns true when it was newly added.
    pub fn insert(&mut self, emotion: Emotion) -> bool {
        if self.0.contains(&emotion) {
            return false;
        }
        self.0.push(emotion);
        true
    }

    /// Appends every emotion of `other` not already present, keeping `other`'s order.
    pub fn union_with(&mut self, other: &EmotionSet) {
        for emotion in other.iter() {
            self.insert(emotion);
        }
    }

    pub fn contains(&self, emotion: Emotion) -> bool {
        self.0.contains(&emotion)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Emotion> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Emotion] {
        &self.0
    }
}

impl FromIterator<Emotion> for EmotionSet {
    fn from_iter<I: IntoIterator<Item = Emotion>>(iter: I) -> Self {
        let mut set = EmotionSet::new();
        for emotion in iter {
            set.insert(emotion);
        }
        set
    }
}
