//! Store contracts consumed by the practice session.
//!
//! The session never reaches for ambient state: it is handed a word
//! repository, a settings snapshot and a progress store at construction.
//! [`crate::storage`] provides JSON-file and in-memory implementations.

use chrono::Utc;
use uuid::Uuid;

use super::errors::Result;
use super::scoring::cumulative_award;
use super::types::{AttemptResult, GameProgress, NewWord, Settings, Word, WordUpdate};
use crate::validation::{validate_category, validate_word};

/// Default cap for [`GameProgress::recent_results`].
pub const RECENT_RESULTS_CAP: usize = 50;

/// CRUD access to the word list.
pub trait WordRepository {
    /// Full word list in stored order.
    fn list(&self) -> Result<Vec<Word>>;

    /// Validate and store a new word, assigning its id and creation time.
    fn create(&mut self, fields: NewWord) -> Result<Word>;

    /// Apply a partial update. Returns `false` when `id` is unknown.
    fn update(&mut self, id: &str, changes: WordUpdate) -> Result<bool>;

    /// Remove a word. Returns `false` when `id` is unknown.
    fn delete(&mut self, id: &str) -> Result<bool>;

    /// Flip the priority flag, returning the new value (`None` when `id` is unknown).
    fn toggle_priority(&mut self, id: &str) -> Result<Option<bool>> {
        let current = match self.list()?.into_iter().find(|w| w.id == id) {
            Some(w) => w.is_priority,
            None => return Ok(None),
        };
        let changes = WordUpdate {
            is_priority: Some(!current),
            ..Default::default()
        };
        self.update(id, changes)?;
        Ok(Some(!current))
    }
}

pub trait SettingsStore {
    fn get(&self) -> Result<Settings>;
    fn save(&mut self, settings: &Settings) -> Result<()>;
}

pub trait ProgressStore {
    fn get(&self) -> Result<GameProgress>;

    /// Append one finished round to the aggregate as a single unit and
    /// return the updated aggregate.
    fn record_attempt(&mut self, result: AttemptResult) -> Result<GameProgress>;

    fn reset(&mut self) -> Result<()>;
}

/// Fold one result into the aggregate: counters, cumulative star award for
/// correct words, and the most-recent-first history capped at `cap`.
pub fn apply_attempt(progress: &mut GameProgress, result: AttemptResult, cap: usize) {
    progress.total_words_played = progress.total_words_played.saturating_add(1);
    progress.total_attempts = progress.total_attempts.saturating_add(result.attempts);
    if result.correct {
        progress.correct_words = progress.correct_words.saturating_add(1);
        progress.stars = progress
            .stars
            .saturating_add(cumulative_award(result.attempts));
    }
    progress.recent_results.insert(0, result);
    progress.recent_results.truncate(cap);
}

/// Validate creation fields and materialize a new [`Word`].
pub fn build_word(fields: NewWord) -> Result<Word> {
    let word = validate_word(&fields.word)?;
    let category = match fields.category {
        Some(c) => Some(validate_category(&c)?),
        None => None,
    };
    Ok(Word {
        id: Uuid::new_v4().to_string(),
        word,
        difficulty: fields.difficulty,
        category,
        is_priority: fields.is_priority,
        created_at: Utc::now(),
    })
}

/// Validate the text fields of a partial update in place.
pub fn validate_update(mut changes: WordUpdate) -> Result<WordUpdate> {
    if let Some(w) = changes.word.take() {
        changes.word = Some(validate_word(&w)?);
    }
    changes.category = match changes.category {
        Some(Some(c)) => Some(Some(validate_category(&c)?)),
        other => other,
    };
    Ok(changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::types::Difficulty;

    fn result(attempts: u32, correct: bool) -> AttemptResult {
        AttemptResult {
            word_id: "w".into(),
            word: "cat".into(),
            attempts,
            correct,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn correct_results_award_stars_by_attempts() {
        let mut p = GameProgress::default();
        apply_attempt(&mut p, result(1, true), RECENT_RESULTS_CAP);
        apply_attempt(&mut p, result(2, true), RECENT_RESULTS_CAP);
        apply_attempt(&mut p, result(4, true), RECENT_RESULTS_CAP);
        assert_eq!(p.stars, 6);
        assert_eq!(p.correct_words, 3);
        assert_eq!(p.total_attempts, 7);
    }

    #[test]
    fn incorrect_results_count_but_award_nothing() {
        let mut p = GameProgress::default();
        apply_attempt(&mut p, result(3, false), RECENT_RESULTS_CAP);
        assert_eq!(p.total_words_played, 1);
        assert_eq!(p.total_attempts, 3);
        assert_eq!(p.correct_words, 0);
        assert_eq!(p.stars, 0);
        assert_eq!(p.recent_results.len(), 1);
    }

    #[test]
    fn history_is_most_recent_first_and_capped() {
        let mut p = GameProgress::default();
        for i in 1..=55 {
            apply_attempt(&mut p, result(i, false), RECENT_RESULTS_CAP);
        }
        assert_eq!(p.recent_results.len(), RECENT_RESULTS_CAP);
        assert_eq!(p.recent_results[0].attempts, 55);
        assert_eq!(p.recent_results[49].attempts, 6);
        assert_eq!(p.total_words_played, 55);
    }

    #[test]
    fn build_word_normalizes_and_assigns_id() {
        let w = build_word(NewWord {
            word: "  Tiger ".into(),
            difficulty: Difficulty::Medium,
            category: Some(" Animals ".into()),
            is_priority: false,
        })
        .unwrap();
        assert_eq!(w.word, "tiger");
        assert_eq!(w.category.as_deref(), Some("Animals"));
        assert!(Uuid::parse_str(&w.id).is_ok());
    }

    #[test]
    fn build_word_rejects_digits() {
        let err = build_word(NewWord {
            word: "c4t".into(),
            difficulty: Difficulty::Easy,
            category: None,
            is_priority: false,
        });
        assert!(err.is_err());
    }
}
