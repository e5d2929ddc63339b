//! Orchestration of analyses and the bounded history of past results.

use std::collections::VecDeque;

use log::debug;

use crate::lexicon::{LexiconLoad, LexiconStore};
use crate::{AnalysisResult, analyze_text};

/// How many past results the history keeps.
pub const HISTORY_CAPACITY: usize = 5;

/// Most-recent-first list of results that drops the oldest entry once full.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<AnalysisResult>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        History::with_capacity(HISTORY_CAPACITY)
    }
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        History {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Puts `result` at the front and truncates to capacity.
    pub fn push(&mut self, result: AnalysisResult) {
        self.entries.push_front(result);
        self.entries.truncate(self.capacity);
    }

    pub fn get(&self, index: usize) -> Option<&AnalysisResult> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// What the caller may show about the active lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconStatus {
    pub word_count: usize,
    pub fallback: bool,
}

/// One user session: the lexicon once it is loaded, plus recent results.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    lexicon: Option<LexiconLoad>,
    history: History,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that is ready to analyze with `lexicon`.
    pub fn with_lexicon(lexicon: LexiconLoad) -> Self {
        let mut session = Self::new();
        session.install_lexicon(lexicon);
        session
    }

    pub fn install_lexicon(&mut self, lexicon: LexiconLoad) {
        self.lexicon = Some(lexicon);
    }

    /// True once a lexicon (primary or fallback) is installed.
    pub fn is_ready(&self) -> bool {
        self.lexicon.is_some()
    }

    pub fn lexicon(&self) -> Option<&LexiconStore> {
        self.lexicon.as_ref().map(LexiconLoad::store)
    }

    pub fn lexicon_status(&self) -> Option<LexiconStatus> {
        self.lexicon.as_ref().map(|load| LexiconStatus {
            word_count: load.store().word_count(),
            fallback: load.is_fallback(),
        })
    }

    /// Analyzes `text` with the installed lexicon and records the result.
    ///
    /// Returns `None` without touching the history when the text is blank
    /// or no lexicon is installed yet.
    pub fn analyze(&mut self, text: &str) -> Option<AnalysisResult> {
        let Some(lexicon) = self.lexicon() else {
            debug!("No lexicon available; analysis skipped");
            return None;
        };
        let result = analyze_text(text, lexicon)?;
        self.record_history(result.clone());
        Some(result)
    }

    /// Like [`AnalysisSession::analyze`] with an explicitly supplied lexicon.
    pub fn analyze_with(
        &mut self,
        text: &str,
        lexicon: Option<&LexiconStore>,
    ) -> Option<AnalysisResult> {
        let Some(lexicon) = lexicon else {
            debug!("No lexicon available; analysis skipped");
            return None;
        };
        let result = analyze_text(text, lexicon)?;
        self.record_history(result.clone());
        Some(result)
    }

    pub fn record_history(&mut self, result: AnalysisResult) {
        self.history.push(result);
    }

    /// Past results, most recent first.
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn load_from_history(&self, index: usize) -> Option<&AnalysisResult> {
        self.history.get(index)
    }
}
