//! In-memory stores. Nothing survives the process; used by tests and by
//! callers that manage persistence themselves.

use crate::spelling::store::{
    apply_attempt, build_word, validate_update, ProgressStore, SettingsStore, WordRepository,
    RECENT_RESULTS_CAP,
};
use crate::spelling::{AttemptResult, GameProgress, NewWord, Result, Settings, Word, WordUpdate};

#[derive(Debug, Clone, Default)]
pub struct MemoryWords {
    words: Vec<Word>,
}

impl MemoryWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing list; entries are taken as-is.
    pub fn with_words(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl WordRepository for MemoryWords {
    fn list(&self) -> Result<Vec<Word>> {
        Ok(self.words.clone())
    }

    fn create(&mut self, fields: NewWord) -> Result<Word> {
        let word = build_word(fields)?;
        self.words.push(word.clone());
        Ok(word)
    }

    fn update(&mut self, id: &str, changes: WordUpdate) -> Result<bool> {
        let changes = validate_update(changes)?;
        match self.words.iter_mut().find(|w| w.id == id) {
            Some(w) => {
                changes.apply(w);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.words.len();
        self.words.retain(|w| w.id != id);
        Ok(self.words.len() != before)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    settings: Settings,
}

impl MemorySettings {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self) -> Result<Settings> {
        Ok(self.settings.clone())
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        settings.validate()?;
        self.settings = settings.clone();
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct MemoryProgress {
    progress: GameProgress,
    cap: usize,
}

impl MemoryProgress {
    pub fn with_cap(cap: usize) -> Self {
        Self {
            progress: GameProgress::default(),
            cap,
        }
    }
}

impl Default for MemoryProgress {
    fn default() -> Self {
        Self::with_cap(RECENT_RESULTS_CAP)
    }
}

impl ProgressStore for MemoryProgress {
    fn get(&self) -> Result<GameProgress> {
        Ok(self.progress.clone())
    }

    fn record_attempt(&mut self, result: AttemptResult) -> Result<GameProgress> {
        apply_attempt(&mut self.progress, result, self.cap);
        Ok(self.progress.clone())
    }

    fn reset(&mut self) -> Result<()> {
        self.progress = GameProgress::default();
        Ok(())
    }
}
