//! Text question pipeline.
//!
//! question → classify → select prompt → record history → complete text.
//!
//! Classification and history failures are non-fatal: they become notices
//! on the outcome and the flow carries on (falling back to `General` when
//! the classifier is unavailable). Only the completion result decides
//! whether the user gets an answer.

use crate::config::AppConfig;
use crate::error::{ApiError, ClassificationError, HistoryError};
use crate::history::{HistoryStore, QueryRecord};
use crate::llm::CompletionClient;
use crate::sector::{select_prompt, Sector, SectorClassifier};

/// Shown when the user submits nothing.
pub const EMPTY_QUESTION_NOTICE: &str = "Please enter a question or topic.";

/// Everything the presentation layer needs to render one answer.
#[derive(Debug)]
pub struct TextOutcome {
    pub question: String,
    pub sector: Sector,
    pub prompt: &'static str,
    /// `None` when the history write failed.
    pub record: Option<QueryRecord>,
    pub answer: Result<String, ApiError>,
    /// Non-fatal problems hit along the way, in order.
    pub notices: Vec<String>,
}

pub struct TextPipeline<C> {
    classifier: Result<SectorClassifier, ClassificationError>,
    history: HistoryStore,
    history_limit: usize,
    client: C,
}

impl<C: CompletionClient> TextPipeline<C> {
    /// Wire the pipeline from startup config.
    ///
    /// A broken stopword source does not fail construction; every run
    /// then reports it and classifies as `General`.
    pub fn new(config: &AppConfig, client: C) -> Self {
        let classifier = SectorClassifier::from_config(config);
        if let Err(e) = &classifier {
            log::error!("[PIPELINE] Sector classifier unavailable: {}", e);
        }
        Self {
            classifier,
            history: HistoryStore::new(&config.history_path, config.malformed_rows),
            history_limit: config.history_limit,
            client,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Run one question through the flow. Blank input yields `None`.
    pub async fn run(&self, question: &str) -> Option<TextOutcome> {
        if question.trim().is_empty() {
            log::warn!("[PIPELINE] Empty question — nothing to do");
            return None;
        }
        let start = std::time::Instant::now();
        let mut notices = Vec::new();

        let sector = match &self.classifier {
            Ok(classifier) => classifier.classify(question),
            Err(e) => {
                notices.push(format!(
                    "An error occurred while detecting the sector: {e}. Using the general sector."
                ));
                Sector::General
            }
        };
        let prompt = select_prompt(sector);
        log::info!("[PIPELINE] Sector: {}", sector);

        let record = match self.history.record(question, sector) {
            Ok(record) => Some(record),
            Err(e) => {
                log::error!("[PIPELINE] History write failed: {}", e);
                notices.push(format!("An error occurred while storing the question: {e}"));
                None
            }
        };

        let answer = self.client.complete_text(prompt, question).await;
        match &answer {
            Ok(text) => log::info!(
                "[PIPELINE] {} answered in {}ms ({} chars)",
                self.client.name(),
                start.elapsed().as_millis(),
                text.len()
            ),
            Err(e) => log::error!("[PIPELINE] Completion failed: {}", e),
        }

        Some(TextOutcome {
            question: question.to_string(),
            sector,
            prompt,
            record,
            answer,
            notices,
        })
    }

    /// The most recent questions for display, newest first.
    pub fn recent_history(&self) -> Result<Vec<QueryRecord>, HistoryError> {
        self.history.recent(self.history_limit)
    }
}
