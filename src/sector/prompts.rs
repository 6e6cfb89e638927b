//! Sector prompt table — the instruction prepended to every question.
//!
//! Constant for the process lifetime. Every sector has an entry, so
//! `select_prompt` cannot fail.

use super::Sector;

pub const EDUCATIONAL_PROMPT: &str =
    "As an expert in education, please provide comprehensive information on";

pub const HEALTHCARE_PROMPT: &str = "As a seasoned medical professional, offer accurate and insightful responses regarding health and medical topics.";

pub const AGRICULTURE_PROMPT: &str = "Leveraging your expertise in agriculture, assist with inquiries related to farming, crops, livestock, and sustainable practices.";

pub const HR_PROMPT: &str = "With your proficiency in human resources, share valuable insights and guidance on HR practices, recruitment, employee relations, and workplace management.";

pub const ATS_PROMPT: &str = "As an authority in applicant tracking systems (ATS), elucidate the features and functionalities of ATS, highlighting their applications in recruitment.";

pub const GENERAL_PROMPT: &str = "Positioned as a knowledgeable and informative resource, respond comprehensively and helpfully to the user's query, drawing from various fields of knowledge.";

/// Vision prompt used when the user gives no custom text for an image.
pub const DEFAULT_IMAGE_PROMPT: &str = "Provide details of the image, including things present in it, the situation, and complete image details.";

/// Instruction string for a sector.
pub fn select_prompt(sector: Sector) -> &'static str {
    match sector {
        Sector::Educational => EDUCATIONAL_PROMPT,
        Sector::Healthcare => HEALTHCARE_PROMPT,
        Sector::Agriculture => AGRICULTURE_PROMPT,
        Sector::Hr => HR_PROMPT,
        Sector::Ats => ATS_PROMPT,
        Sector::General => GENERAL_PROMPT,
    }
}

/// Vision prompt for an optional user-supplied description.
///
/// Blank custom text falls back to `DEFAULT_IMAGE_PROMPT`.
pub fn image_prompt(custom: Option<&str>) -> &str {
    match custom.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => DEFAULT_IMAGE_PROMPT,
    }
}
