//! Word → emotion association table.
//!
//! The resource is the NRC word-level format: one record per line,
//! `<word>\t<emotion>\t<0|1>`. Lines with any other shape are skipped.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use crate::emotion::{Emotion, EmotionSet};

/// File name of the NRC Emotion Lexicon as distributed.
pub const DEFAULT_LEXICON_FILE: &str = "NRC-Emotion-Lexicon-Wordlevel-v0.92.txt";

/// Built-in seed used when the lexicon resource cannot be read.
const FALLBACK_ENTRIES: &[(&str, &[Emotion])] = &[
    ("love", &[Emotion::Joy, Emotion::Trust, Emotion::Positive]),
    ("hate", &[Emotion::Anger, Emotion::Disgust, Emotion::Negative]),
    ("happy", &[Emotion::Joy, Emotion::Positive]),
    ("sad", &[Emotion::Sadness, Emotion::Negative]),
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Read lexicon {path:?} failed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable mapping from word to its emotion flags.
///
/// Flags per word keep the order in which each emotion first appeared in
/// the resource; a repeated (word, emotion) pair overwrites the flag in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconStore {
    entries: HashMap<String, Vec<(Emotion, bool)>>,
}

impl LexiconStore {
    /// Parses the tab-separated lexicon format. Never fails: malformed
    /// lines and labels outside the vocabulary are skipped.
    pub fn parse(raw: &str) -> Self {
        let mut entries: HashMap<String, Vec<(Emotion, bool)>> = HashMap::new();
        let mut skipped = 0usize;

        for line in raw.split('\n') {
            let fields: Vec<&str> = line.trim().split('\t').collect();
            let [word, emotion, flag] = fields.as_slice() else {
                if !line.trim().is_empty() {
                    skipped += 1;
                }
                continue;
            };

            // the word is known even if none of its labels are
            let flags = entries.entry(word.to_string()).or_default();
            let Ok(emotion) = emotion.parse::<Emotion>() else {
                continue;
            };
            let value = parse_flag(flag);
            match flags.iter_mut().find(|(e, _)| *e == emotion) {
                Some(slot) => slot.1 = value,
                None => flags.push((emotion, value)),
            }
        }

        if skipped > 0 {
            debug!("Skipped {skipped} malformed lexicon line(s)");
        }
        LexiconStore { entries }
    }

    /// Reads the whole resource and parses it. Invalid UTF-8 is replaced,
    /// not rejected.
    pub fn from_reader<R: Read>(mut reader: R, path: &Path) -> Result<Self, LoadError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path)
    }

    /// Loads `path`, substituting the built-in seed lexicon when the
    /// resource is unavailable. Both outcomes are ready to analyze with.
    pub fn load_or_fallback<P: AsRef<Path>>(path: P) -> LexiconLoad {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(store) => {
                info!(
                    "Lexicon loaded from {}: {} words",
                    path.display(),
                    store.word_count()
                );
                LexiconLoad::Loaded {
                    store,
                    source: path.to_path_buf(),
                }
            }
            Err(reason) => {
                warn!("{reason}; using built-in fallback lexicon");
                LexiconLoad::Fallback {
                    store: Self::fallback(),
                    reason,
                }
            }
        }
    }

    /// The fixed seed table used when loading fails.
    pub fn fallback() -> Self {
        let entries = FALLBACK_ENTRIES
            .iter()
            .map(|(word, emotions)| {
                let flags = emotions.iter().map(|e| (*e, true)).collect();
                (word.to_string(), flags)
            })
            .collect();
        LexiconStore { entries }
    }

    /// Emotions flagged true for `word`, in first-seen order. Exact,
    /// case-sensitive match; unknown words yield an empty set.
    pub fn lookup(&self, word: &str) -> EmotionSet {
        self.entries
            .get(word)
            .map(|flags| {
                flags
                    .iter()
                    .filter(|(_, flagged)| *flagged)
                    .map(|(e, _)| *e)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of distinct words in the table, flagged or not.
    pub fn word_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lenient integer parse: optional leading whitespace and sign, then the
/// leading run of digits. Trailing garbage is ignored; no digits means false.
fn parse_flag(raw: &str) -> bool {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = digits[..end].trim_start_matches('0');
    !negative && digits == "1"
}

/// Outcome of the startup load. Either variant holds a usable store.
#[derive(Debug)]
pub enum LexiconLoad {
    Loaded { store: LexiconStore, source: PathBuf },
    Fallback { store: LexiconStore, reason: LoadError },
}

impl LexiconLoad {
    pub fn store(&self) -> &LexiconStore {
        match self {
            LexiconLoad::Loaded { store, .. } | LexiconLoad::Fallback { store, .. } => store,
        }
    }

    pub fn into_store(self) -> LexiconStore {
        match self {
            LexiconLoad::Loaded { store, .. } | LexiconLoad::Fallback { store, .. } => store,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LexiconLoad::Fallback { .. })
    }
}
