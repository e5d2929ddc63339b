//! Integration tests for the `emotion_analysis` library.
//
// This suite verifies:
// - Lexicon loading from disk, including the fallback path
// - The normalization trace carried in each result
// - Stem fallback and per-word attribution
// - Aggregation properties (counts sum to total, percentages near 100)
// - Session history bounds and no-op handling

use std::path::PathBuf;

use assert_fs::prelude::*;

use emotion_analysis::{
    AnalysisSession, Emotion, HISTORY_CAPACITY, LexiconLoad, LexiconStore, analyze_text,
    normalize,
};

// --------------------- helpers ---------------------

const EXAMPLE_LEXICON: &str = "love\tjoy\t1\nlove\ttrust\t1\nlove\tpositive\t1\n\
hate\tanger\t1\nhate\tdisgust\t1\nhate\tnegative\t1\n";

/// Write a lexicon file into a temp dir.
fn write_lexicon(dir: &assert_fs::TempDir, content: &str) -> PathBuf {
    let f = dir.child("lexicon.txt");
    f.write_str(content).unwrap();
    f.path().to_path_buf()
}

fn percentage_sum(pcts: impl Iterator<Item = String>) -> f64 {
    pcts.map(|p| p.parse::<f64>().unwrap()).sum()
}

// --------------------- lexicon ---------------------

#[test]
fn lexicon_loads_from_file() {
    let td = assert_fs::TempDir::new().unwrap();
    let path = write_lexicon(&td, EXAMPLE_LEXICON);

    let load = LexiconStore::load_or_fallback(&path);
    assert!(!load.is_fallback());
    match &load {
        LexiconLoad::Loaded { source, .. } => assert_eq!(source, &path),
        LexiconLoad::Fallback { .. } => panic!("expected primary lexicon"),
    }
    assert_eq!(load.store().word_count(), 2);
    assert_eq!(
        load.store().lookup("hate").as_slice(),
        &[Emotion::Anger, Emotion::Disgust, Emotion::Negative]
    );
}

#[test]
fn lexicon_empty_file_is_not_fallback() {
    let td = assert_fs::TempDir::new().unwrap();
    let path = write_lexicon(&td, "");
    let load = LexiconStore::load_or_fallback(&path);
    assert!(!load.is_fallback());
    assert!(load.store().is_empty());
}

#[test]
fn lexicon_missing_file_uses_seed() {
    let td = assert_fs::TempDir::new().unwrap();
    let load = LexiconStore::load_or_fallback(td.path().join("missing.txt"));
    assert!(load.is_fallback());
    let store = load.into_store();
    for word in ["love", "hate", "happy", "sad"] {
        assert!(store.contains(word), "fallback should know {word}");
    }
    assert!(LexiconStore::load(td.path().join("missing.txt")).is_err());
}

#[test]
fn lexicon_windows_line_endings() {
    let lex = LexiconStore::parse("fear\tfear\t1\r\nfear\tnegative\t1\r\n");
    assert_eq!(
        lex.lookup("fear").as_slice(),
        &[Emotion::Fear, Emotion::Negative]
    );
}

// --------------------- analysis ---------------------

#[test]
fn analysis_example_sentence() {
    let lex = LexiconStore::parse(EXAMPLE_LEXICON);
    let r = analyze_text("I love dogs but I hate cats!", &lex).unwrap();

    assert_eq!(r.source_text, "I love dogs but I hate cats!");
    assert_eq!(r.normalization.folded, "i love dogs but i hate cats!");
    assert_eq!(r.normalization.depunctuated, "i love dogs but i hate cats");
    assert_eq!(
        r.normalization.tokens,
        vec!["i", "love", "dogs", "but", "i", "hate", "cats"]
    );
    assert_eq!(r.total_emotion_tags, 6);
    assert_eq!(r.emotion_counts[&Emotion::Joy], 1);
    assert_eq!(r.emotion_counts[&Emotion::Sadness], 0);
    assert_eq!(r.emotion_percentages[&Emotion::Negative], "16.67");
    assert_eq!(r.emotion_percentages[&Emotion::Surprise], "0.00");

    assert_eq!(
        r.word_details[1].emotions.as_slice(),
        &[Emotion::Joy, Emotion::Trust, Emotion::Positive]
    );
    assert!(r.word_details[2].emotions.is_empty());
}

#[test]
fn analysis_stem_fallback() {
    let lex = LexiconStore::parse("run\tanticipation\t1\nworri\tfear\t1\n");
    let r = analyze_text("Runs; worried.", &lex).unwrap();
    assert_eq!(r.normalization.stems, vec!["run", "worri"]);
    assert_eq!(
        r.word_details[0].emotions.as_slice(),
        &[Emotion::Anticipation]
    );
    assert_eq!(r.word_details[1].emotions.as_slice(), &[Emotion::Fear]);
    assert_eq!(r.emotion_percentages[&Emotion::Fear], "50.00");
}

#[test]
fn analysis_is_idempotent() {
    let lex = LexiconStore::fallback();
    let text = "Happy happy joy; sad sad love. Hate!";
    let a = analyze_text(text, &lex).unwrap();
    let b = analyze_text(text, &lex).unwrap();
    assert_eq!(a.emotion_counts, b.emotion_counts);
    assert_eq!(a.emotion_percentages, b.emotion_percentages);
    assert_eq!(a.word_details, b.word_details);
}

#[test]
fn analysis_percentages_sum_near_hundred() {
    let lex = LexiconStore::parse(
        "a\tanger\t1\nb\tfear\t1\nb\tjoy\t1\nc\ttrust\t1\nc\tsurprise\t1\nc\tsadness\t1\n",
    );
    for text in ["a b c", "a a b", "c c c a", "b"] {
        let r = analyze_text(text, &lex).unwrap();
        let counted: usize = r.emotion_counts.values().sum();
        assert_eq!(counted, r.total_emotion_tags);
        let sum = percentage_sum(r.emotion_percentages.values().cloned());
        assert!((sum - 100.0).abs() <= 0.1, "{text:?} summed to {sum}");
    }
}

#[test]
fn analysis_without_matches_reports_zeroes() {
    let r = analyze_text("nothing to see here", &LexiconStore::fallback()).unwrap();
    assert_eq!(r.total_emotion_tags, 0);
    assert!(r.emotion_percentages.values().all(|p| p == "0.00"));
    assert!(r.ranked_by_count().is_empty());
    assert_eq!(r.ranked_by_percentage().len(), 10);
}

#[test]
fn normalization_keeps_tokens_and_stems_aligned() {
    for text in [
        "",
        "   ",
        "Running, jumped; boxes... quickly!!",
        "ünïcödé wörds and_underscores 123",
        "ing ed s es ly",
    ] {
        let n = normalize(text);
        assert_eq!(n.tokens.len(), n.stems.len());
    }
}

// --------------------- session ---------------------

#[test]
fn session_history_keeps_five_most_recent() {
    let mut session = AnalysisSession::with_lexicon(LexiconLoad::Loaded {
        store: LexiconStore::fallback(),
        source: PathBuf::from("seed"),
    });
    let texts = ["one love", "two hate", "three happy", "four sad", "five", "six"];
    for t in texts {
        assert!(session.analyze(t).is_some());
    }
    assert_eq!(session.history().len(), HISTORY_CAPACITY);
    assert_eq!(session.load_from_history(0).unwrap().source_text, "six");
    assert_eq!(session.load_from_history(4).unwrap().source_text, "two hate");
    assert!(
        session
            .history()
            .iter()
            .all(|r| r.source_text != "one love")
    );
}

#[test]
fn session_blank_input_and_missing_lexicon_are_noops() {
    let mut session = AnalysisSession::new();
    assert!(session.analyze("I love it").is_none());
    assert!(session.history().is_empty());

    session.install_lexicon(LexiconStore::load_or_fallback("not/a/real/file.txt"));
    assert!(session.is_ready());
    assert!(session.analyze("").is_none());
    assert!(session.analyze(" \n\t ").is_none());
    assert!(session.history().is_empty());

    let r = session.analyze("I love it").unwrap();
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.load_from_history(0), Some(&r));
    assert!(session.lexicon_status().unwrap().fallback);
}
