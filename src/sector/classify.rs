//! Keyword-overlap sector classifier.
//!
//! Pipeline: lowercase → tokenize → drop stopwords → normalize suffixes →
//! count matching keyword phrases per sector → pick the strict maximum.
//!
//! Sectors are scored in `Sector::CANDIDATES` order, starting from
//! `(General, 0)`. A later sector only wins with a strictly higher score,
//! so ties go to the earlier sector and an all-zero result is `General`.

use super::keywords::keywords_for;
use super::stopwords::Stopwords;
use super::tokenize::{normalize, tokenize};
use super::Sector;
use crate::config::AppConfig;
use crate::error::ClassificationError;

/// A keyword phrase reduced to normalized tokens.
#[derive(Debug, Clone)]
struct Phrase {
    text: &'static str,
    tokens: Vec<String>,
}

/// Outcome of a classification, with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub sector: Sector,
    /// Score per candidate sector, in evaluation order.
    pub scores: Vec<(Sector, usize)>,
    /// Keyword phrases that matched, in evaluation order.
    pub matched: Vec<(Sector, &'static str)>,
}

#[derive(Debug, Clone)]
pub struct SectorClassifier {
    stopwords: Stopwords,
    phrases: Vec<(Sector, Vec<Phrase>)>,
}

impl SectorClassifier {
    pub fn new(stopwords: Stopwords) -> Self {
        log::debug!("[SECTOR] Building classifier with {} stopwords", stopwords.len());
        let phrases = Sector::CANDIDATES
            .into_iter()
            .map(|sector| {
                let phrases = keywords_for(sector)
                    .iter()
                    .map(|text| Phrase {
                        text: *text,
                        tokens: filter_tokens(&stopwords, text),
                    })
                    .filter(|p| !p.tokens.is_empty())
                    .collect();
                (sector, phrases)
            })
            .collect();
        Self { stopwords, phrases }
    }

    /// Build a classifier from the configured stopword source.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClassificationError> {
        let stopwords = Stopwords::load(config.stopwords_path.as_deref())?;
        Ok(Self::new(stopwords))
    }

    pub fn classify(&self, text: &str) -> Sector {
        self.classify_detailed(text).sector
    }

    pub fn classify_detailed(&self, text: &str) -> Classification {
        let tokens = filter_tokens(&self.stopwords, text);

        let mut best = (Sector::General, 0usize);
        let mut scores = Vec::with_capacity(self.phrases.len());
        let mut matched = Vec::new();

        for (sector, phrases) in &self.phrases {
            let hits: Vec<&'static str> = phrases
                .iter()
                .filter(|p| contains_phrase(&tokens, &p.tokens))
                .map(|p| p.text)
                .collect();
            let score = hits.len();
            if score > best.1 {
                best = (*sector, score);
            }
            scores.push((*sector, score));
            matched.extend(hits.into_iter().map(|kw| (*sector, kw)));
        }

        log::debug!(
            "[SECTOR] {} tokens after filtering, scores={:?} → {}",
            tokens.len(),
            scores,
            best.0
        );

        Classification {
            sector: best.0,
            scores,
            matched,
        }
    }
}

impl Default for SectorClassifier {
    fn default() -> Self {
        Self::new(Stopwords::english())
    }
}

/// Classify with the stopword source named in `config`.
///
/// Fails only when a configured stopword file cannot be used.
pub fn classify(config: &AppConfig, text: &str) -> Result<Sector, ClassificationError> {
    Ok(SectorClassifier::from_config(config)?.classify(text))
}

fn filter_tokens(stopwords: &Stopwords, text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !stopwords.contains(t))
        .map(|t| normalize(&t))
        .collect()
}

/// True if `phrase` occurs as a contiguous run inside `tokens`.
fn contains_phrase(tokens: &[String], phrase: &[String]) -> bool {
    !phrase.is_empty()
        && phrase.len() <= tokens.len()
        && tokens.windows(phrase.len()).any(|w| w == phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> SectorClassifier {
        SectorClassifier::default()
    }

    #[test]
    fn diabetes_question_is_healthcare() {
        let c = classifier();
        let result = c.classify_detailed("What are the symptoms of diabetes and how is it treated?");
        assert_eq!(result.sector, Sector::Healthcare);
        assert_eq!(result.matched, vec![(Sector::Healthcare, "treatment")]);
    }

    #[test]
    fn greeting_is_general() {
        assert_eq!(classifier().classify("hello there"), Sector::General);
    }

    #[test]
    fn empty_and_stopword_only_input_is_general() {
        let c = classifier();
        assert_eq!(c.classify(""), Sector::General);
        assert_eq!(c.classify("   "), Sector::General);
        assert_eq!(c.classify("Should we have been there?"), Sector::General);
    }

    #[test]
    fn unique_maximum_wins() {
        let c = classifier();
        assert_eq!(
            c.classify("How should a school design its curriculum?"),
            Sector::Educational
        );
        assert_eq!(c.classify("Best livestock feed for winter"), Sector::Agriculture);
        assert_eq!(
            c.classify("Tips for talent acquisition and recruitment"),
            Sector::Hr
        );
    }

    #[test]
    fn higher_score_beats_earlier_sector() {
        // educational: school (1); healthcare: health, doctor (2)
        let result = classifier().classify_detailed("school health doctor");
        assert_eq!(result.sector, Sector::Healthcare);
        assert_eq!(
            result.scores,
            vec![
                (Sector::Educational, 1),
                (Sector::Healthcare, 2),
                (Sector::Agriculture, 0),
                (Sector::Hr, 0),
                (Sector::Ats, 0),
            ]
        );
    }

    #[test]
    fn tie_goes_to_earlier_sector() {
        let c = classifier();
        // educational 1, healthcare 1
        assert_eq!(c.classify("medical school"), Sector::Educational);
        // healthcare 1, agriculture 1, in reverse text order
        assert_eq!(c.classify("livestock disease"), Sector::Healthcare);
        // hr: recruitment (1); ats: resume parsing (1)
        assert_eq!(c.classify("resume parsing for recruitment"), Sector::Hr);
    }

    #[test]
    fn multi_word_keyword_needs_contiguous_phrase() {
        let c = classifier();
        assert_eq!(
            c.classify("Which applicant tracking system should we buy?"),
            Sector::Ats
        );
        assert_eq!(
            c.classify("The applicant said the system keeps tracking"),
            Sector::General
        );
    }

    #[test]
    fn phrase_survives_stopwords_between_sentences() {
        // "the" is removed, so "crop" and "cultivation" become adjacent
        assert_eq!(
            classifier().classify("crop, the cultivation"),
            Sector::Agriculture
        );
    }

    #[test]
    fn uppercase_keyword_matches_after_lowercasing() {
        assert_eq!(classifier().classify("Where are our HR Policies?"), Sector::Hr);
    }

    #[test]
    fn inflected_keywords_match() {
        let c = classifier();
        assert_eq!(c.classify("my doctors recommend treatments"), Sector::Healthcare);
        assert_eq!(c.classify("sustainable farming practice"), Sector::Agriculture);
    }

    // Stem sharing is coarse: the bare verb matches the noun keyword too.
    #[test]
    fn shared_stems_over_match() {
        let c = classifier();
        let result = c.classify_detailed("How do I treat my employees fairly?");
        assert_eq!(result.sector, Sector::Healthcare);
        assert_eq!(result.matched, vec![(Sector::Healthcare, "treatment")]);

        let result = c.classify_detailed("I learned nothing");
        assert_eq!(result.sector, Sector::Educational);
        assert_eq!(result.matched, vec![(Sector::Educational, "learning")]);
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let result = classifier().classify_detailed("school school school doctor doctor");
        assert_eq!(result.scores[0], (Sector::Educational, 1));
        assert_eq!(result.scores[1], (Sector::Healthcare, 1));
        assert_eq!(result.sector, Sector::Educational);
    }

    #[test]
    fn custom_stopwords_change_the_outcome() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"school\n").unwrap();
        let stop = Stopwords::from_file(file.path()).unwrap();
        let c = SectorClassifier::new(stop);
        assert_eq!(c.classify("school"), Sector::General);
    }

    #[test]
    fn classify_with_config_reports_missing_stopword_file() {
        let config = AppConfig {
            stopwords_path: Some("/definitely/not/here/stopwords.txt".into()),
            ..AppConfig::default()
        };
        let err = classify(&config, "hello").unwrap_err();
        assert!(matches!(err, ClassificationError::StopwordsUnreadable { .. }));
    }

    #[test]
    fn classify_with_default_config_uses_builtin_list() {
        let sector = classify(&AppConfig::default(), "teaching academic subjects").unwrap();
        assert_eq!(sector, Sector::Educational);
    }
}
