//! A single persisted question.

use crate::sector::Sector;
use chrono::{Duration, NaiveDateTime, SubsecRound};

/// How long a record is considered current after submission.
pub const RETENTION_DAYS: i64 = 7;

/// On-disk timestamp layout, local wall-clock time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    /// Question text exactly as submitted.
    pub question: String,
    pub sector: Sector,
    pub expires_at: NaiveDateTime,
}

impl QueryRecord {
    /// New record submitted at `now`, truncated to whole seconds.
    pub fn new(question: impl Into<String>, sector: Sector, now: NaiveDateTime) -> Self {
        Self {
            question: question.into(),
            sector,
            expires_at: now.trunc_subsecs(0) + Duration::days(RETENTION_DAYS),
        }
    }

    /// Submission time, derived from the stored expiry.
    pub fn submitted_at(&self) -> NaiveDateTime {
        self.expires_at - Duration::days(RETENTION_DAYS)
    }

    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        now >= self.expires_at
    }

    pub fn expires_at_display(&self) -> String {
        self.expires_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Parse the three CSV fields of a row.
    pub(super) fn from_fields(fields: &[&str]) -> Result<Self, String> {
        let [question, sector, expires_at] = fields else {
            return Err(format!("expected 3 fields, found {}", fields.len()));
        };
        let sector = sector.parse::<Sector>().map_err(|e| e.to_string())?;
        let expires_at = NaiveDateTime::parse_from_str(expires_at.trim(), TIMESTAMP_FORMAT)
            .map_err(|e| format!("bad timestamp {expires_at:?}: {e}"))?;
        Ok(Self {
            question: question.to_string(),
            sector,
            expires_at,
        })
    }
}
