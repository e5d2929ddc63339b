//! Text preprocessing: case folding, punctuation removal, tokenizing and
//! a small suffix-stripping stemmer.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Anything that is neither a (Unicode) word character nor a separator.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s\x{FEFF}]").expect("static punctuation pattern"));

/// Suffix rules in priority order; the first suffix the token ends with is
/// stripped and no other rule is tried.
///
/// "es" sits behind "s" and therefore never fires. The order is kept as is.
pub const SUFFIX_RULES: &[&str] = &["ing", "ed", "s", "es", "ly"];

/// Every stage of preprocessing for one input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedText {
    pub original: String,
    pub folded: String,
    pub depunctuated: String,
    pub tokens: Vec<String>,
    /// Aligned with `tokens` by index.
    pub stems: Vec<String>,
}

pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

pub fn remove_punctuation(text: &str) -> String {
    NON_WORD.replace_all(text, "").into_owned()
}

/// Token separator: Unicode whitespace plus the zero-width no-break space
/// (U+FEFF), which pasted text often carries as a stray byte order mark.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Splits on runs of separators; never yields empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_separator)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Applies the first matching rule of [`SUFFIX_RULES`].
/// # Example
/// ```
/// use emotion_analysis::stem;
/// assert_eq!(stem("running"), "runn");
/// assert_eq!(stem("dresses"), "dresse");
/// assert_eq!(stem("quickly"), "quick");
/// assert_eq!(stem("joy"), "joy");
/// ```
pub fn stem(token: &str) -> String {
    SUFFIX_RULES
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
        .unwrap_or(token)
        .to_string()
}

/// Runs the whole pipeline. Total: empty input gives empty tokens and stems.
pub fn normalize(text: &str) -> NormalizedText {
    let folded = fold_case(text);
    let depunctuated = remove_punctuation(&folded);
    let tokens = tokenize(&depunctuated);
    let stems = tokens.iter().map(|t| stem(t)).collect();
    NormalizedText {
        original: text.to_string(),
        folded,
        depunctuated,
        tokens,
        stems,
    }
}
