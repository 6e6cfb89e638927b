//! Error taxonomy shared across domains.
//!
//! Every error here is recoverable: the pipelines convert them into
//! user-visible notices instead of aborting the process.

use std::path::PathBuf;

/// The stopword resource used by the sector classifier is unavailable.
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("failed to read stopword list {path}: {source}")]
    StopwordsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stopword list {0} contains no entries")]
    StopwordsEmpty(PathBuf),
}

/// Failure to append to or read the question history log.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("history CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("corrupt history row at line {line}: {reason}")]
    Corrupt { line: u64, reason: String },
}

/// Remote completion failure, including a missing credential.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no API key configured (set GOOGLE_API_KEY)")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("model returned no text{}", reason_suffix(.reason))]
    EmptyResponse { reason: Option<String> },

    #[error("invalid API response: {0}")]
    InvalidResponse(String),
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|r| format!(" ({r})"))
        .unwrap_or_default()
}

/// Invalid environment configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be one of {expected}, got {value:?}")]
    InvalidChoice {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// The uploaded image cannot be sent to the vision model.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("unsupported image type {0:?} (expected jpg, jpeg or png)")]
    Unsupported(String),

    #[error("failed to read image {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image file {0} is empty")]
    Empty(PathBuf),
}
