//! English stopword set used before keyword matching.
//!
//! The built-in list is the standard 179-word English list shipped with
//! NLTK. A newline-separated file can replace it; lines starting with
//! `#` are ignored.

use crate::error::ClassificationError;
use std::collections::HashSet;
use std::path::Path;

const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// The built-in English list.
    pub fn english() -> Self {
        Self {
            words: ENGLISH.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Load a stopword list from disk, one word per line.
    pub fn from_file(path: &Path) -> Result<Self, ClassificationError> {
        let raw = std::fs::read_to_string(path).map_err(|source| {
            ClassificationError::StopwordsUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let words: HashSet<String> = raw
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(|l| l.to_lowercase())
            .collect();
        if words.is_empty() {
            return Err(ClassificationError::StopwordsEmpty(path.to_path_buf()));
        }
        log::info!("[SECTOR] Loaded {} stopwords from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// Built-in list, or the configured file when one is set.
    pub fn load(path: Option<&Path>) -> Result<Self, ClassificationError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::english()),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::english()
    }
}
