//! Sector domain — routes a free-text question to a response style.
//!
//! Public API:
//!   - classify.rs  — keyword-overlap classifier (`SectorClassifier`)
//!   - prompts.rs   — fixed sector → instruction table
//!
//! Internal:
//!   - tokenize.rs  — word segmentation + suffix normalization
//!   - stopwords.rs — English stopword set
//!   - keywords.rs  — per-sector keyword phrases

mod classify;
mod keywords;
pub mod prompts;
mod stopwords;
mod tokenize;

pub use classify::{classify, Classification, SectorClassifier};
pub use prompts::{select_prompt, DEFAULT_IMAGE_PROMPT};
pub use stopwords::Stopwords;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Domain label used to pick a response-style instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Educational,
    Healthcare,
    Agriculture,
    Hr,
    Ats,
    General,
}

impl Sector {
    /// Every sector, `General` last.
    pub const ALL: [Sector; 6] = [
        Sector::Educational,
        Sector::Healthcare,
        Sector::Agriculture,
        Sector::Hr,
        Sector::Ats,
        Sector::General,
    ];

    /// Classifier evaluation order. Earlier sectors win ties.
    pub const CANDIDATES: [Sector; 5] = [
        Sector::Educational,
        Sector::Healthcare,
        Sector::Agriculture,
        Sector::Hr,
        Sector::Ats,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Sector::Educational => "educational",
            Sector::Healthcare => "healthcare",
            Sector::Agriculture => "agriculture",
            Sector::Hr => "hr",
            Sector::Ats => "ats",
            Sector::General => "general",
        }
    }
}

impl Default for Sector {
    fn default() -> Self {
        Sector::General
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored label is not one of the known sectors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sector {0:?}")]
pub struct UnknownSector(pub String);

impl FromStr for Sector {
    type Err = UnknownSector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Sector::ALL
            .into_iter()
            .find(|sector| sector.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSector(s.to_string()))
    }
}
