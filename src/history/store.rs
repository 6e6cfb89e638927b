//! CSV-backed history store.
//!
//! Rows follow RFC 4180: fields containing a comma, quote or line break
//! are double-quoted, with `"` escaped as `""`. Rows end in CRLF. Missing
//! files read as an empty history.

use super::{MalformedRowPolicy, QueryRecord};
use crate::error::HistoryError;
use crate::sector::Sector;
use chrono::{Local, NaiveDateTime};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    policy: MalformedRowPolicy,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>, policy: MalformedRowPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a question submitted now.
    pub fn record(&self, question: &str, sector: Sector) -> Result<QueryRecord, HistoryError> {
        self.record_at(question, sector, Local::now().naive_local())
    }

    /// Append a question submitted at `now`.
    ///
    /// The row is encoded in memory and written with a single `write_all`
    /// on an append-mode handle. Existing rows are never read or rewritten.
    pub fn record_at(
        &self,
        question: &str,
        sector: Sector,
        now: NaiveDateTime,
    ) -> Result<QueryRecord, HistoryError> {
        let record = QueryRecord::new(question, sector, now);
        let row = encode_row(&record)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(&row).map_err(|e| self.io_error(e))?;

        log::info!(
            "[HISTORY] Recorded {} question ({} chars), expires {}",
            record.sector,
            record.question.len(),
            record.expires_at_display()
        );
        Ok(record)
    }

    /// Every record, in the order it was appended.
    pub fn read_history(&self) -> Result<Vec<QueryRecord>, HistoryError> {
        let file = match std::fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("[HISTORY] {} does not exist yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (index, row) in reader.records().enumerate() {
            let parsed = match row {
                Ok(row) => {
                    let line = row.position().map(|p| p.line()).unwrap_or(index as u64 + 1);
                    let fields: Vec<&str> = row.iter().collect();
                    QueryRecord::from_fields(&fields).map_err(|reason| (line, reason))
                }
                Err(e) if e.is_io_error() => return Err(HistoryError::Csv(e)),
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(index as u64 + 1);
                    Err((line, e.to_string()))
                }
            };

            match parsed {
                Ok(record) => records.push(record),
                Err((line, reason)) => match self.policy {
                    MalformedRowPolicy::Reject => {
                        return Err(HistoryError::Corrupt { line, reason });
                    }
                    MalformedRowPolicy::Skip => {
                        log::warn!(
                            "[HISTORY] Skipping malformed row at {}:{}: {}",
                            self.path.display(),
                            line,
                            reason
                        );
                        skipped += 1;
                    }
                },
            }
        }

        log::debug!(
            "[HISTORY] Read {} records ({} skipped) from {}",
            records.len(),
            skipped,
            self.path.display()
        );
        Ok(records)
    }

    /// The last `n` records, most recent first.
    pub fn recent(&self, n: usize) -> Result<Vec<QueryRecord>, HistoryError> {
        let mut records = self.read_history()?;
        let start = records.len().saturating_sub(n);
        let mut tail = records.split_off(start);
        tail.reverse();
        Ok(tail)
    }

    fn io_error(&self, source: std::io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Encode one record as a CSV row, terminator included.
fn encode_row(record: &QueryRecord) -> Result<Vec<u8>, HistoryError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    let expires_at = record.expires_at_display();
    writer.write_record([
        record.question.as_str(),
        record.sector.as_str(),
        expires_at.as_str(),
    ])?;
    writer
        .into_inner()
        .map_err(|e| HistoryError::Csv(csv::Error::from(e.into_error())))
}
