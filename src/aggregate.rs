use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;
use crate::matcher::WordDetail;

/// Per-emotion totals over a sequence of word details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Every vocabulary emotion is present, zero or not.
    pub emotion_counts: BTreeMap<Emotion, usize>,
    /// Share of all emotion tags, two decimals ("16.67").
    pub emotion_percentages: BTreeMap<Emotion, String>,
    pub total_emotion_tags: usize,
}

/// Counts, for each emotion, how many words carry it. A word tagged with
/// several emotions adds one to each, so the total can exceed the token count.
pub fn aggregate(details: &[WordDetail]) -> Aggregate {
    let mut emotion_counts: BTreeMap<Emotion, usize> =
        Emotion::ALL.into_iter().map(|e| (e, 0)).collect();
    for detail in details {
        for emotion in detail.emotions.iter() {
            *emotion_counts.entry(emotion).or_insert(0) += 1;
        }
    }

    let total_emotion_tags: usize = emotion_counts.values().sum();
    let emotion_percentages = emotion_counts
        .iter()
        .map(|(e, count)| (*e, format_percentage(*count, total_emotion_tags)))
        .collect();

    Aggregate {
        emotion_counts,
        emotion_percentages,
        total_emotion_tags,
    }
}

/// `count / total * 100` with two decimals; "0.00" when `total` is zero.
///
/// Each share is rounded on its own, so a full set may sum to slightly
/// more or less than 100.00.
/// # Example
/// ```
/// use emotion_analysis::format_percentage;
/// assert_eq!(format_percentage(1, 6), "16.67");
/// assert_eq!(format_percentage(2, 3), "66.67");
/// assert_eq!(format_percentage(0, 0), "0.00");
/// ```
pub fn format_percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.00".to_string();
    }
    let share = count as f64 / total as f64 * 100.0;
    format!("{:.2}", (share * 100.0).round() / 100.0)
}

/// All emotions by percentage, highest first; ties keep vocabulary order.
pub fn rank_by_percentage(aggregate: &Aggregate) -> Vec<(Emotion, String)> {
    let mut ranked: Vec<(Emotion, String)> = aggregate
        .emotion_percentages
        .iter()
        .map(|(e, p)| (*e, p.clone()))
        .collect();
    ranked.sort_by(|a, b| {
        let pa: f64 = a.1.parse().unwrap_or(0.0);
        let pb: f64 = b.1.parse().unwrap_or(0.0);
        pb.total_cmp(&pa)
    });
    ranked
}

/// Emotions that occurred at least once, by count, highest first.
pub fn rank_by_count(aggregate: &Aggregate) -> Vec<(Emotion, usize)> {
    let mut ranked: Vec<(Emotion, usize)> = aggregate
        .emotion_counts
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(e, count)| (*e, *count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
