//! Per-sector keyword phrases.
//!
//! Keywords may span several words. They are matched as contiguous
//! phrases over the filtered token sequence, not as single tokens.

use super::Sector;

pub const EDUCATIONAL: &[&str] = &[
    "education",
    "school",
    "learning",
    "teaching",
    "academic",
    "curriculum",
];

pub const HEALTHCARE: &[&str] = &[
    "health",
    "medical",
    "doctor",
    "disease",
    "treatment",
    "wellness",
];

pub const AGRICULTURE: &[&str] = &[
    "farming",
    "crop cultivation",
    "livestock",
    "agricultural practices",
    "sustainable farming",
    "agroecology",
];

pub const HR: &[&str] = &[
    "human resources",
    "recruitment",
    "employee management",
    "workplace culture",
    "talent acquisition",
    "hr policies",
];

pub const ATS: &[&str] = &[
    "applicant tracking system",
    "recruitment software",
    "candidate management",
    "hiring automation",
    "resume parsing",
    "job application tracking",
];

/// Keyword phrases for a sector. `General` has none.
pub fn keywords_for(sector: Sector) -> &'static [&'static str] {
    match sector {
        Sector::Educational => EDUCATIONAL,
        Sector::Healthcare => HEALTHCARE,
        Sector::Agriculture => AGRICULTURE,
        Sector::Hr => HR,
        Sector::Ats => ATS,
        Sector::General => &[],
    }
}
