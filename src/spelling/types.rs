//! Persisted data model shared by the engine and its stores.
//!
//! Field names serialize in camelCase so documents written by earlier
//! browser builds of the game (`words.json`, `progress.json`,
//! `settings.json`) load unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::{Result, SpellingError};

/// Lowest and highest accepted value for [`Settings::max_attempts`].
pub const MIN_ATTEMPTS: u32 = 2;
pub const MAX_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "medium" | "m" => Ok(Difficulty::Medium),
            "hard" | "h" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

/// A word the child can be asked to spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: String,
    /// Target spelling, stored lowercase.
    pub word: String,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub is_priority: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a word; id and timestamp are assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWord {
    pub word: String,
    pub difficulty: Difficulty,
    pub category: Option<String>,
    pub is_priority: bool,
}

/// Partial update for an existing word. `None` leaves a field untouched;
/// `category: Some(None)` clears the category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordUpdate {
    pub word: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<Option<String>>,
    pub is_priority: Option<bool>,
}

impl WordUpdate {
    pub fn apply(self, target: &mut Word) {
        if let Some(w) = self.word {
            target.word = w;
        }
        if let Some(d) = self.difficulty {
            target.difficulty = d;
        }
        if let Some(c) = self.category {
            target.category = c;
        }
        if let Some(p) = self.is_priority {
            target.is_priority = p;
        }
    }
}

/// Session configuration, owned by the parent-facing settings surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub max_attempts: u32,
    pub hints_enabled: bool,
    pub audio_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_voice: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            hints_enabled: true,
            audio_enabled: true,
            preferred_voice: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_ATTEMPTS..=MAX_ATTEMPTS).contains(&self.max_attempts) {
            return Err(SpellingError::InvalidSettings(format!(
                "max attempts must be between {} and {} (got {})",
                MIN_ATTEMPTS, MAX_ATTEMPTS, self.max_attempts
            )));
        }
        Ok(())
    }
}

/// Outcome of one finished round. Carries the literal word so history stays
/// readable after the word is edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptResult {
    pub word_id: String,
    pub word: String,
    pub attempts: u32,
    pub correct: bool,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate practice history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProgress {
    #[serde(default)]
    pub total_words_played: u32,
    #[serde(default)]
    pub correct_words: u32,
    #[serde(default)]
    pub total_attempts: u32,
    /// Most recent first.
    #[serde(default)]
    pub recent_results: Vec<AttemptResult>,
    #[serde(default)]
    pub stars: u32,
}
