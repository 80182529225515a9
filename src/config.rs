//! Game configuration loaded from TOML.

use crate::games::hangman::{Difficulty, Mode};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Locations of leaderboards and word lists, plus the phrase difficulty split.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// Leaderboard file for word mode.
    #[serde(default = "default_word_leaderboard")]
    word_leaderboard: PathBuf,

    /// Leaderboard file for phrase mode.
    #[serde(default = "default_phrase_leaderboard")]
    phrase_leaderboard: PathBuf,

    /// Phrase list used at or below the threshold.
    #[serde(default = "default_easy_phrases")]
    easy_phrases: PathBuf,

    /// Phrase list used above the threshold.
    #[serde(default = "default_hard_phrases")]
    hard_phrases: PathBuf,

    /// Difficulties above this level draw from the hard phrase list.
    #[serde(default = "default_hard_threshold")]
    hard_threshold: u8,

    /// Remote dictionary queried as `<url>?difficulty=N`.
    #[serde(default = "default_dictionary_url")]
    dictionary_url: String,

    /// Local word list used instead of the remote dictionary when set.
    #[serde(default)]
    word_list: Option<PathBuf>,
}

#[instrument]
fn default_word_leaderboard() -> PathBuf {
    PathBuf::from("word_LB.json")
}

#[instrument]
fn default_phrase_leaderboard() -> PathBuf {
    PathBuf::from("phrase_LB.json")
}

#[instrument]
fn default_easy_phrases() -> PathBuf {
    PathBuf::from("hangman_phrases_easy.txt")
}

#[instrument]
fn default_hard_phrases() -> PathBuf {
    PathBuf::from("hangman_phrases_difficult.txt")
}

#[instrument]
fn default_hard_threshold() -> u8 {
    6
}

#[instrument]
fn default_dictionary_url() -> String {
    "http://app.linkedin-reach.io/words".to_string()
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            word_leaderboard: default_word_leaderboard(),
            phrase_leaderboard: default_phrase_leaderboard(),
            easy_phrases: default_easy_phrases(),
            hard_phrases: default_hard_phrases(),
            hard_threshold: default_hard_threshold(),
            dictionary_url: default_dictionary_url(),
            word_list: None,
        }
    }
}

impl HangmanConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(threshold = config.hard_threshold, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.hard_threshold > Difficulty::MAX {
            return Err(ConfigError::new(format!(
                "hard_threshold must be at most {}, got {}",
                Difficulty::MAX,
                self.hard_threshold
            )));
        }
        if self.word_leaderboard == self.phrase_leaderboard {
            return Err(ConfigError::new(
                "word and phrase leaderboards must use different files".to_string(),
            ));
        }
        Ok(())
    }

    /// Leaderboard file for the given mode.
    pub fn leaderboard_path(&self, mode: Mode) -> &Path {
        match mode {
            Mode::Words => &self.word_leaderboard,
            Mode::Phrases => &self.phrase_leaderboard,
        }
    }

    /// Phrase list for the given difficulty.
    pub fn phrase_list(&self, difficulty: Difficulty) -> &Path {
        if difficulty.level() > self.hard_threshold {
            &self.hard_phrases
        } else {
            &self.easy_phrases
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = HangmanConfig::from_toml("").unwrap();
        assert_eq!(*config.hard_threshold(), 6);
        assert_eq!(config.leaderboard_path(Mode::Words), Path::new("word_LB.json"));
        assert!(config.word_list().is_none());
    }

    #[test]
    fn test_threshold_selects_phrase_list() {
        let config = HangmanConfig::default();
        let easy = Difficulty::new(6).unwrap();
        let hard = Difficulty::new(7).unwrap();
        assert_eq!(config.phrase_list(easy), Path::new("hangman_phrases_easy.txt"));
        assert_eq!(config.phrase_list(hard), Path::new("hangman_phrases_difficult.txt"));
    }

    #[test]
    fn test_overrides_parsed() {
        let config = HangmanConfig::from_toml(
            r#"
            hard_threshold = 3
            word_list = "words.txt"
            phrase_leaderboard = "p.json"
            "#,
        )
        .unwrap();
        assert_eq!(*config.hard_threshold(), 3);
        assert_eq!(config.word_list().as_deref(), Some(Path::new("words.txt")));
        assert_eq!(config.leaderboard_path(Mode::Phrases), Path::new("p.json"));
    }

    #[test]
    fn test_shared_leaderboard_rejected() {
        let result = HangmanConfig::from_toml(
            r#"
            word_leaderboard = "lb.json"
            phrase_leaderboard = "lb.json"
            "#,
        );
        assert!(result.is_err());
    }
}
