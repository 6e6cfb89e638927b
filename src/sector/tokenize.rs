//! Word segmentation and suffix normalization for keyword matching.
//!
//! Tokens are maximal runs of Unicode letters and digits. Apostrophes and
//! hyphens split words (`don't` → `don`, `t`), which keeps contractions
//! aligned with the stopword list.

use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+").expect("word pattern is valid")
});

/// Suffix rewrites, tried in order. First match wins.
const SUFFIXES: &[(&str, &str)] = &[
    ("ments", ""),
    ("ment", ""),
    ("ings", ""),
    ("ing", ""),
    ("ies", "y"),
    ("ed", ""),
    ("s", ""),
];

/// Shortest stem a suffix rewrite may leave behind.
const MIN_STEM_LEN: usize = 3;

/// Lowercase and split text into word tokens, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Reduce an inflected word to a shared stem.
///
/// `treated`, `treatment` and `treatments` all become `treat`; words
/// ending in `ss`, `us` or `is` keep their final `s`.
pub fn normalize(word: &str) -> String {
    for (suffix, replacement) in SUFFIXES {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if *suffix == "s" && (stem.ends_with('s') || stem.ends_with('u') || stem.ends_with('i')) {
            return word.to_string();
        }
        if stem.chars().count() + replacement.chars().count() < MIN_STEM_LEN {
            return word.to_string();
        }
        return format!("{stem}{replacement}");
    }
    word.to_string()
}
