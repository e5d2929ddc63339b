#![forbid(unsafe_code)]
//! # Emotion Analysis CLI
//!
//! This is the command-line interface for the `emotion_analysis` crate.
//! It loads an NRC-style emotion lexicon and reports which emotions a text
//! carries, with every preprocessing step shown along the way.
//!
//! ## Features
//! - Analyze a text given as argument, or everything read from stdin.
//! - Interactive mode keeping the last five analyses (`:history`, `:load N`).
//! - Export results as txt, json, csv or tsv, optionally into a directory.
//! - Falls back to a small built-in lexicon if the lexicon file is missing.
//!
//! ## Example
//! ```bash
//! cargo run --release -- "I love dogs but I hate cats!" --export-format json
//! ```
//!
//! See `--help` for all available options.

use clap::Parser;
use emotion_analysis::{
    AnalysisResult, AnalysisSession, DEFAULT_LEXICON_FILE, ExportFormat, LexiconStore, render,
    save_result,
};
use log::error;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Text to analyze (reads stdin when omitted)
    text: Option<String>,

    /// Path to the word-level emotion lexicon (word<TAB>emotion<TAB>0|1)
    #[arg(long, default_value = DEFAULT_LEXICON_FILE)]
    lexicon: PathBuf,

    /// Output format (txt, json, csv, tsv)
    #[arg(long, default_value = "txt")]
    export_format: ExportFormat,

    /// Also save each result as a timestamped file in this directory
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Analyze line by line, keeping a history of recent results
    #[arg(long, default_value_t = false)]
    interactive: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let load = LexiconStore::load_or_fallback(&cli.lexicon);
    if load.is_fallback() {
        eprintln!(
            "Lexicon {} not available, using built-in fallback ({} words)",
            cli.lexicon.display(),
            load.store().word_count()
        );
    }
    let mut session = AnalysisSession::with_lexicon(load);

    let outcome = if cli.interactive {
        run_interactive(&cli, &mut session)
    } else {
        run_once(&cli, &mut session)
    };
    if let Err(e) = outcome {
        error!("Error: {}", e);
        process::exit(1);
    }
}

fn run_once(cli: &Cli, session: &mut AnalysisSession) -> Result<(), String> {
    let text = match &cli.text {
        Some(t) => t.clone(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Read stdin failed: {e}"))?;
            buf
        }
    };

    // blank input is not an error, there is just nothing to report
    match session.analyze(&text) {
        Some(result) => emit(cli, &result),
        None => Ok(()),
    }
}

fn run_interactive(cli: &Cli, session: &mut AnalysisSession) -> Result<(), String> {
    if let Some(status) = session.lexicon_status() {
        println!("Lexicon loaded: {} words", status.word_count);
    }
    println!("Enter text to analyze. Commands: :history, :load N, :quit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout()
            .flush()
            .map_err(|e| format!("Write stdout failed: {e}"))?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| format!("Read stdin failed: {e}"))?;
        let command = line.trim();

        if command == ":quit" {
            break;
        } else if command == ":history" {
            print_history(session);
        } else if let Some(arg) = load_argument(command) {
            match arg.parse::<usize>() {
                Ok(n) if n >= 1 => match session.load_from_history(n - 1) {
                    Some(result) => emit(cli, result)?,
                    None => println!("No history entry {n}"),
                },
                _ => println!("Usage: :load N (1 = most recent)"),
            }
        } else if let Some(result) = session.analyze(&line) {
            emit(cli, &result)?;
        }
    }
    Ok(())
}

/// The argument of `:load N`. Text that merely starts with ":load" is not a command.
fn load_argument(command: &str) -> Option<&str> {
    if command == ":load" {
        return Some("");
    }
    command.strip_prefix(":load ").map(str::trim)
}

fn print_history(session: &AnalysisSession) {
    if session.history().is_empty() {
        println!("No analyses yet.");
        return;
    }
    for (i, result) in session.history().iter().enumerate() {
        let top = result
            .ranked_by_count()
            .first()
            .map(|(e, c)| format!("{e} ({c})"))
            .unwrap_or_else(|| "no emotions".to_string());
        println!(
            "{}. [{}] {} -> {}",
            i + 1,
            result.created_at.format("%Y-%m-%d %H:%M:%S"),
            preview(&result.source_text),
            top
        );
    }
}

fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > 50 {
        format!("{}...", flat.chars().take(50).collect::<String>())
    } else {
        flat
    }
}

fn emit(cli: &Cli, result: &AnalysisResult) -> Result<(), String> {
    let rendered = render(result, cli.export_format).map_err(|e| e.to_string())?;
    println!("{}", rendered);
    if let Some(dir) = &cli.output_dir {
        let path = save_result(result, cli.export_format, dir).map_err(|e| e.to_string())?;
        eprintln!("Saved {}", path.display());
    }
    Ok(())
}
