//! Question history — append-only CSV log of submitted questions.
//!
//! Each row is `question,sector,expires_at` with no header. `expires_at`
//! is the submission time plus `RETENTION_DAYS`; it is stored and exposed
//! through `QueryRecord::is_expired`, but nothing prunes the log.
//!
//! Single-writer assumption: rows are appended with one `write_all` on an
//! append-mode handle, with no cross-process locking.

mod record;
mod store;

pub use record::{QueryRecord, RETENTION_DAYS, TIMESTAMP_FORMAT};
pub use store::HistoryStore;

use std::fmt;
use std::str::FromStr;

/// What `read_history` does with a row it cannot parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedRowPolicy {
    /// Log a warning, drop the row, keep reading.
    Skip,
    /// Fail the whole read with `HistoryError::Corrupt`.
    Reject,
}

impl Default for MalformedRowPolicy {
    fn default() -> Self {
        MalformedRowPolicy::Skip
    }
}

impl FromStr for MalformedRowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(MalformedRowPolicy::Skip),
            "reject" => Ok(MalformedRowPolicy::Reject),
            other => Err(format!("unknown malformed-row policy: {other}")),
        }
    }
}

impl fmt::Display for MalformedRowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedRowPolicy::Skip => f.write_str("skip"),
            MalformedRowPolicy::Reject => f.write_str("reject"),
        }
    }
}
