//! Application configuration, read once from the process environment.
//!
//! `AppConfig` is built at startup and passed by reference into every
//! component. Nothing reads the environment after this point.

use crate::error::ConfigError;
use crate::history::MalformedRowPolicy;
use std::path::PathBuf;

pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_VISION_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_HISTORY_PATH: &str = "question_history.csv";
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Env vars checked for the API credential, in priority order.
const API_KEY_VARS: [&str; 2] = ["GOOGLE_API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` when no credential is set. Completion calls then fail with
    /// `ApiError::MissingApiKey` instead of crashing.
    pub api_key: Option<String>,
    pub api_base: String,
    pub text_model: String,
    pub vision_model: String,
    pub history_path: PathBuf,
    /// Rows shown in the "recent history" table.
    pub history_limit: usize,
    pub malformed_rows: MalformedRowPolicy,
    /// Optional newline-separated stopword file replacing the built-in list.
    pub stopwords_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
            history_limit: DEFAULT_HISTORY_LIMIT,
            malformed_rows: MalformedRowPolicy::default(),
            stopwords_path: None,
        }
    }
}

impl AppConfig {
    /// Build the config from the real process environment.
    ///
    /// Invalid values fall back to their defaults and are returned as
    /// warnings for the caller to show.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset. A value that fails to parse
    /// keeps the default for its key and is reported in the warning list.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let api_key = API_KEY_VARS.iter().find_map(|key| get(*key));

        let history_limit = get("SECTOR_CHAT_HISTORY_LIMIT")
            .and_then(|raw| {
                parse_limit("SECTOR_CHAT_HISTORY_LIMIT", &raw)
                    .map_err(|e| warnings.push(e))
                    .ok()
            })
            .unwrap_or(defaults.history_limit);

        let malformed_rows = get("SECTOR_CHAT_MALFORMED_ROWS")
            .and_then(|raw| match raw.parse::<MalformedRowPolicy>() {
                Ok(policy) => Some(policy),
                Err(_) => {
                    warnings.push(ConfigError::InvalidChoice {
                        key: "SECTOR_CHAT_MALFORMED_ROWS",
                        expected: "skip, reject",
                        value: raw,
                    });
                    None
                }
            })
            .unwrap_or(defaults.malformed_rows);

        let config = Self {
            api_key,
            api_base: get("GEMINI_API_BASE")
                .map(|b| b.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            text_model: get("GEMINI_TEXT_MODEL").unwrap_or(defaults.text_model),
            vision_model: get("GEMINI_VISION_MODEL").unwrap_or(defaults.vision_model),
            history_path: get("SECTOR_CHAT_HISTORY")
                .map(PathBuf::from)
                .unwrap_or(defaults.history_path),
            history_limit,
            malformed_rows,
            stopwords_path: get("SECTOR_CHAT_STOPWORDS").map(PathBuf::from),
        };
        (config, warnings)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Parse a strictly positive row count.
pub fn parse_limit(key: &'static str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let (config, warnings) = AppConfig::from_lookup(lookup(&[]));
        assert!(warnings.is_empty());
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(config.history_path, PathBuf::from("question_history.csv"));
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.malformed_rows, MalformedRowPolicy::Skip);
        assert!(config.stopwords_path.is_none());
    }

    #[test]
    fn google_key_wins_over_gemini_key() {
        let config = AppConfig::from_lookup(lookup(&[
            ("GOOGLE_API_KEY", "g-key"),
            ("GEMINI_API_KEY", "other"),
        ]))
        .0;
        assert_eq!(config.api_key.as_deref(), Some("g-key"));
    }

    #[test]
    fn empty_google_key_falls_back_to_gemini_key() {
        let config = AppConfig::from_lookup(lookup(&[
            ("GOOGLE_API_KEY", "  "),
            ("GEMINI_API_KEY", "gm-key"),
        ]))
        .0;
        assert_eq!(config.api_key.as_deref(), Some("gm-key"));
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            ("GEMINI_API_BASE", "http://localhost:8080/"),
            ("GEMINI_TEXT_MODEL", "gemini-pro"),
            ("SECTOR_CHAT_HISTORY", "/tmp/h.csv"),
            ("SECTOR_CHAT_HISTORY_LIMIT", "12"),
            ("SECTOR_CHAT_MALFORMED_ROWS", "Reject"),
            ("SECTOR_CHAT_STOPWORDS", "/tmp/stop.txt"),
        ]))
        .0;
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.text_model, "gemini-pro");
        assert_eq!(config.vision_model, DEFAULT_VISION_MODEL);
        assert_eq!(config.history_path, PathBuf::from("/tmp/h.csv"));
        assert_eq!(config.history_limit, 12);
        assert_eq!(config.malformed_rows, MalformedRowPolicy::Reject);
        assert_eq!(config.stopwords_path, Some(PathBuf::from("/tmp/stop.txt")));
    }

    #[test]
    fn invalid_limit_keeps_default_and_warns() {
        for raw in ["abc", "0", "-3"] {
            let (config, warnings) =
                AppConfig::from_lookup(lookup(&[("SECTOR_CHAT_HISTORY_LIMIT", raw)]));
            assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
            assert_eq!(warnings.len(), 1, "{raw}");
            assert!(matches!(
                &warnings[0],
                ConfigError::InvalidNumber { key: "SECTOR_CHAT_HISTORY_LIMIT", value } if value == raw
            ));
        }
    }

    #[test]
    fn unknown_policy_keeps_default_and_warns() {
        let (config, warnings) =
            AppConfig::from_lookup(lookup(&[("SECTOR_CHAT_MALFORMED_ROWS", "ignore")]));
        assert_eq!(config.malformed_rows, MalformedRowPolicy::Skip);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], ConfigError::InvalidChoice { .. }));
    }

    #[test]
    fn bad_values_do_not_discard_good_ones() {
        let (config, warnings) = AppConfig::from_lookup(lookup(&[
            ("SECTOR_CHAT_HISTORY_LIMIT", "lots"),
            ("SECTOR_CHAT_MALFORMED_ROWS", "maybe"),
            ("SECTOR_CHAT_HISTORY", "/tmp/h.csv"),
        ]));
        assert_eq!(warnings.len(), 2);
        assert_eq!(config.history_path, PathBuf::from("/tmp/h.csv"));
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    }
}
