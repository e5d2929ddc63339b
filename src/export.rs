//! Turning an [`AnalysisResult`] into text for a terminal or a file.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use clap::ValueEnum;
use csv::WriterBuilder;
use thiserror::Error;

use crate::AnalysisResult;
use crate::emotion::Emotion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Txt,
    Json,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("Write export failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders `result` in the requested format.
///
/// `txt` is the human-readable report; `json` is the full result;
/// `csv`/`tsv` hold one row per emotion in vocabulary order.
pub fn render(result: &AnalysisResult, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Txt => Ok(render_report(result)),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        ExportFormat::Csv => render_table(result, b','),
        ExportFormat::Tsv => render_table(result, b'\t'),
    }
}

fn render_table(result: &AnalysisResult, delimiter: u8) -> Result<String, ExportError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    wtr.write_record(["emotion", "count", "percentage"])?;
    for emotion in Emotion::ALL {
        let count = result.emotion_counts.get(&emotion).copied().unwrap_or(0);
        let pct = result
            .emotion_percentages
            .get(&emotion)
            .map(String::as_str)
            .unwrap_or("0.00");
        let count = count.to_string();
        wtr.write_record([emotion.label(), count.as_str(), pct])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn render_report(result: &AnalysisResult) -> String {
    let n = &result.normalization;
    let mut out = String::new();

    // writing into a String cannot fail
    let _ = writeln!(out, "Text: {}", result.source_text);
    let _ = writeln!(
        out,
        "Analyzed: {}",
        result.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Preprocessing");
    let _ = writeln!(out, "  Case folding:        {}", n.folded);
    let _ = writeln!(out, "  Punctuation removed: {}", n.depunctuated);
    let _ = writeln!(out, "  Tokens: {:?}", n.tokens);
    let _ = writeln!(out, "  Stems:  {:?}", n.stems);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Emotion distribution (total emotion tags: {})",
        result.total_emotion_tags
    );
    for (emotion, pct) in result.ranked_by_percentage() {
        let count = result.emotion_counts.get(&emotion).copied().unwrap_or(0);
        let _ = writeln!(out, "  {:<13} {:>4}  {:>6}%", emotion, count, pct);
    }
    let _ = writeln!(out);

    let ranked = result.ranked_by_count();
    if ranked.is_empty() {
        let _ = writeln!(out, "No emotions detected.");
    } else {
        let _ = writeln!(out, "Dominant emotions");
        for (emotion, count) in ranked {
            let _ = writeln!(out, "  {emotion}: {count}");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Word details");
    for detail in &result.word_details {
        let mut word = detail.original.clone();
        if detail.stem != detail.original {
            let _ = write!(word, " (stem: {})", detail.stem);
        }
        let emotions = if detail.emotions.is_empty() {
            "-".to_string()
        } else {
            detail
                .emotions
                .iter()
                .map(Emotion::label)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(out, "  {word} -> {emotions}");
    }
    out
}

/// Writes the rendered result into `dir` under a timestamped file name and
/// returns the created path.
pub fn save_result(
    result: &AnalysisResult,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let local: DateTime<Local> = Local::now();
    let new_filename = format!(
        "{}_emotion_analysis.{}",
        local.format("%Y_%m_%d_%H_%M_%S"),
        format.extension()
    );
    let mut path = dir.to_path_buf();
    path.push(new_filename);

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;
    file.write_all(render(result, format)?.as_bytes())?;

    Ok(path)
}
