//! Subcommand handlers and plain-text rendering.
//!
//! These are thin wrappers: build the pipeline, run it once, print the
//! outcome. Errors are printed and mapped to an exit code, never panicked.

use crate::config::AppConfig;
use crate::history::{HistoryStore, QueryRecord};
use crate::llm::{GeminiClient, ImageInput};
use crate::pipeline_image::ImagePipeline;
use crate::pipeline_text::{TextOutcome, TextPipeline, EMPTY_QUESTION_NOTICE};
use crate::sector::{select_prompt, Classification, Sector, SectorClassifier};
use chrono::Local;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;
use tokio::io::AsyncBufReadExt;

/// Widest question shown in the history table.
const QUESTION_COLUMN_CHARS: usize = 60;

pub async fn ask(config: &AppConfig, text: &str) -> ExitCode {
    let pipeline = TextPipeline::new(config, GeminiClient::new(config));
    let ok = answer_one(&pipeline, text).await;
    print_recent_history(&pipeline);
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Interactive loop: one question per stdin line.
pub async fn chat(config: &AppConfig) -> ExitCode {
    let pipeline = TextPipeline::new(config, GeminiClient::new(config));
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    eprintln!("Ask a question or provide a topic (Ctrl-D to quit).");
    loop {
        eprint!("Input: ");
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            }
        };
        answer_one(&pipeline, &line).await;
        print_recent_history(&pipeline);
    }
    ExitCode::SUCCESS
}

pub async fn image(config: &AppConfig, path: &Path, prompt: Option<&str>) -> ExitCode {
    let image = match ImageInput::from_path(path) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let pipeline = ImagePipeline::new(GeminiClient::new(config));
    let outcome = pipeline.run(&image, prompt).await;
    match outcome.answer {
        Ok(text) => {
            println!("The Response is");
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("An error occurred while describing the image: {e}");
            ExitCode::FAILURE
        }
    }
}

pub fn history(config: &AppConfig, limit: usize, active_only: bool) -> ExitCode {
    let store = HistoryStore::new(&config.history_path, config.malformed_rows);
    let records = match store.recent(limit) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("An error occurred while reading the history: {e}");
            return ExitCode::FAILURE;
        }
    };
    let records = if active_only {
        let now = Local::now().naive_local();
        records.into_iter().filter(|r| !r.is_expired(now)).collect()
    } else {
        records
    };
    print!("{}", render_history(&records));
    ExitCode::SUCCESS
}

/// Machine-readable form of the `classify` output.
#[derive(Debug, Serialize)]
pub struct ClassifyReport<'a> {
    pub sector: Sector,
    pub scores: Vec<SectorScore<'a>>,
    pub prompt: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SectorScore<'a> {
    pub sector: Sector,
    pub score: usize,
    pub keywords: Vec<&'a str>,
}

impl<'a> ClassifyReport<'a> {
    pub fn new(result: &'a Classification) -> Self {
        let scores = result
            .scores
            .iter()
            .map(|(sector, score)| SectorScore {
                sector: *sector,
                score: *score,
                keywords: result
                    .matched
                    .iter()
                    .filter(|(s, _)| s == sector)
                    .map(|(_, kw)| *kw)
                    .collect(),
            })
            .collect();
        Self {
            sector: result.sector,
            scores,
            prompt: select_prompt(result.sector),
        }
    }
}

pub fn classify(config: &AppConfig, text: &str, json: bool) -> ExitCode {
    let classifier = match SectorClassifier::from_config(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("An error occurred while detecting the sector: {e}");
            return ExitCode::FAILURE;
        }
    };
    let result = classifier.classify_detailed(text);
    let report = ClassifyReport::new(&result);

    if json {
        return match serde_json::to_string_pretty(&report) {
            Ok(out) => {
                println!("{out}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to encode the report: {e}");
                ExitCode::FAILURE
            }
        };
    }

    println!("Sector: {}", report.sector);
    for entry in &report.scores {
        println!(
            "  {:<12} {}  {}",
            entry.sector.as_str(),
            entry.score,
            entry.keywords.join(", ")
        );
    }
    println!("Prompt: {}", report.prompt);
    ExitCode::SUCCESS
}

/// Run and print one question. Returns false when no answer was produced.
async fn answer_one(pipeline: &TextPipeline<GeminiClient>, text: &str) -> bool {
    let Some(outcome) = pipeline.run(text).await else {
        eprintln!("{EMPTY_QUESTION_NOTICE}");
        return false;
    };
    print!("{}", render_outcome(&outcome));
    outcome.answer.is_ok()
}

fn print_recent_history(pipeline: &TextPipeline<GeminiClient>) {
    match pipeline.recent_history() {
        Ok(records) => print!("{}", render_history(&records)),
        Err(e) => eprintln!("An error occurred while reading the history: {e}"),
    }
}

/// Notices, answer (or error) and sector, as shown after a question.
pub fn render_outcome(outcome: &TextOutcome) -> String {
    let mut out = String::new();
    for notice in &outcome.notices {
        let _ = writeln!(out, "Warning: {notice}");
    }
    match &outcome.answer {
        Ok(text) => {
            let _ = writeln!(out, "Answer:\n{}\n", text.trim_end());
        }
        Err(e) => {
            let _ = writeln!(out, "Error: {e}\n");
        }
    }
    let _ = writeln!(out, "Sector:\n{}\n", outcome.sector);
    out
}

/// History table with Question / Sector / Timestamp columns.
pub fn render_history(records: &[QueryRecord]) -> String {
    if records.is_empty() {
        return "No question history available.\n".to_string();
    }

    let questions: Vec<String> = records
        .iter()
        .map(|r| single_line(&r.question, QUESTION_COLUMN_CHARS))
        .collect();
    let width = questions
        .iter()
        .map(|q| q.chars().count())
        .max()
        .unwrap_or(0)
        .max("Question".len());

    let mut out = String::from("Recent Search History\n");
    let _ = writeln!(out, "{:<width$}  {:<11}  {}", "Question", "Sector", "Timestamp");
    for (record, question) in records.iter().zip(&questions) {
        let _ = writeln!(
            out,
            "{:<width$}  {:<11}  {}",
            question,
            record.sector.as_str(),
            record.expires_at_display()
        );
    }
    out
}

/// Collapse whitespace and cut to `max` chars with an ellipsis.
fn single_line(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let cut: String = flat.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
