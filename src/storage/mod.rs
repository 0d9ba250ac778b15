//! # Storage Module - Data Persistence Layer
//!
//! File-backed implementations of the spelling stores plus in-memory
//! equivalents for tests and embedding.
//!
//! ## Architecture
//!
//! Each store is one pretty-printed JSON document in the data directory:
//!
//! ```text
//! data/
//! ├── words.json      ← word list (seeded with the built-in list on first use)
//! ├── progress.json   ← aggregate progress and recent results
//! └── settings.json   ← session settings
//! ```
//!
//! ## Concurrency
//!
//! Every document has a sibling `.<name>.lock` file. Reads take a shared
//! fs2 lock, read-modify-write operations take an exclusive lock for the
//! whole cycle, so an attempt result is always folded into progress as one
//! unit. Writes go to a temp file in the same directory and are renamed
//! over the target.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spellbee::spelling::{ProgressStore, WordRepository};
//! use spellbee::storage::JsonStore;
//!
//! fn main() -> spellbee::spelling::Result<()> {
//!     let store = JsonStore::open("./data")?;
//!     store.initialize()?;
//!     println!("{} words", store.list()?.len());
//!     println!("{} stars", store.get()?.stars);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! - A missing document is a first run: words are seeded, settings and
//!   progress start from defaults.
//! - A corrupt settings or progress document is logged and replaced by
//!   defaults on the next write. An out-of-range attempt limit in an
//!   otherwise readable settings document is clamped into range.
//! - A corrupt word list is an error; it is never silently overwritten.

pub mod memory;
pub mod seed;

pub use memory::{MemoryProgress, MemorySettings, MemoryWords};

use fs2::FileExt;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::spelling::store::{
    apply_attempt, build_word, validate_update, ProgressStore, SettingsStore, WordRepository,
    RECENT_RESULTS_CAP,
};
use crate::spelling::types::{MAX_ATTEMPTS, MIN_ATTEMPTS};
use crate::spelling::{AttemptResult, GameProgress, NewWord, Result, Settings, Word, WordUpdate};

const WORDS_FILE: &str = "words.json";
const PROGRESS_FILE: &str = "progress.json";
const SETTINGS_FILE: &str = "settings.json";

/// JSON-file store implementing all three store contracts. Cheap to clone;
/// clones share the same data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
    recent_cap: usize,
}

/// What [`JsonStore::initialize`] found or created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitSummary {
    pub words: usize,
    pub seeded_words: bool,
    pub created_settings: bool,
    pub created_progress: bool,
}

impl JsonStore {
    /// Open (creating if needed) the data directory.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            data_dir,
            recent_cap: RECENT_RESULTS_CAP,
        })
    }

    pub fn with_recent_cap(mut self, cap: usize) -> Self {
        self.recent_cap = cap;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Make sure all three documents exist, seeding defaults where missing.
    pub fn initialize(&self) -> Result<InitSummary> {
        let seeded_words = !self.words_path().exists();
        let words = self.list()?.len();

        let created_settings = {
            let path = self.settings_path();
            let _guard = DocLock::exclusive(&path)?;
            let missing = read_raw(&path)?.is_none();
            if missing {
                write_document(&path, &Settings::default())?;
            }
            missing
        };

        let created_progress = {
            let path = self.progress_path();
            let _guard = DocLock::exclusive(&path)?;
            let missing = read_raw(&path)?.is_none();
            if missing {
                write_document(&path, &GameProgress::default())?;
            }
            missing
        };

        Ok(InitSummary {
            words,
            seeded_words,
            created_settings,
            created_progress,
        })
    }

    fn words_path(&self) -> PathBuf {
        self.data_dir.join(WORDS_FILE)
    }

    fn progress_path(&self) -> PathBuf {
        self.data_dir.join(PROGRESS_FILE)
    }

    fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    /// Read the word list, seeding it when the caller already holds the lock.
    fn load_or_seed_words(&self, path: &Path) -> Result<Vec<Word>> {
        if let Some(raw) = read_raw(path)? {
            return parse_document(&raw);
        }
        let words = seed::default_words();
        write_document(path, &words)?;
        info!("storage: seeded {} default words into {:?}", words.len(), path);
        Ok(words)
    }

    fn modify_words<T>(&self, f: impl FnOnce(&mut Vec<Word>) -> T) -> Result<T> {
        let path = self.words_path();
        let _guard = DocLock::exclusive(&path)?;
        let mut words = self.load_or_seed_words(&path)?;
        let out = f(&mut words);
        write_document(&path, &words)?;
        Ok(out)
    }

    fn modify_progress<T>(&self, f: impl FnOnce(&mut GameProgress) -> T) -> Result<T> {
        let path = self.progress_path();
        let _guard = DocLock::exclusive(&path)?;
        let mut progress = read_or_default(&path, "progress");
        let out = f(&mut progress);
        write_document(&path, &progress)?;
        Ok(out)
    }
}

impl WordRepository for JsonStore {
    fn list(&self) -> Result<Vec<Word>> {
        let path = self.words_path();
        {
            let _guard = DocLock::shared(&path)?;
            if let Some(raw) = read_raw(&path)? {
                return parse_document(&raw);
            }
        }
        let _guard = DocLock::exclusive(&path)?;
        self.load_or_seed_words(&path)
    }

    fn create(&mut self, fields: NewWord) -> Result<Word> {
        let word = build_word(fields)?;
        let stored = word.clone();
        self.modify_words(move |words| words.push(stored))?;
        info!("storage: added word '{}' ({})", word.word, word.id);
        Ok(word)
    }

    fn update(&mut self, id: &str, changes: WordUpdate) -> Result<bool> {
        let changes = validate_update(changes)?;
        self.modify_words(|words| match words.iter_mut().find(|w| w.id == id) {
            Some(w) => {
                changes.apply(w);
                true
            }
            None => false,
        })
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let removed = self.modify_words(|words| {
            let before = words.len();
            words.retain(|w| w.id != id);
            words.len() != before
        })?;
        if removed {
            info!("storage: deleted word {}", id);
        }
        Ok(removed)
    }
}

impl SettingsStore for JsonStore {
    fn get(&self) -> Result<Settings> {
        let path = self.settings_path();
        let _guard = DocLock::shared(&path)?;
        let mut settings: Settings = read_or_default(&path, "settings");
        if let Err(e) = settings.validate() {
            let clamped = settings.max_attempts.clamp(MIN_ATTEMPTS, MAX_ATTEMPTS);
            warn!("storage: {}; using {} instead", e, clamped);
            settings.max_attempts = clamped;
        }
        Ok(settings)
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        settings.validate()?;
        let path = self.settings_path();
        let _guard = DocLock::exclusive(&path)?;
        write_document(&path, settings)
    }
}

impl ProgressStore for JsonStore {
    fn get(&self) -> Result<GameProgress> {
        let path = self.progress_path();
        let _guard = DocLock::shared(&path)?;
        Ok(read_or_default(&path, "progress"))
    }

    fn record_attempt(&mut self, result: AttemptResult) -> Result<GameProgress> {
        let cap = self.recent_cap;
        self.modify_progress(|progress| {
            apply_attempt(progress, result, cap);
            progress.clone()
        })
    }

    fn reset(&mut self) -> Result<()> {
        self.modify_progress(|progress| *progress = GameProgress::default())
    }
}

/// Advisory lock on `.<file>.lock` next to a document; released on drop.
struct DocLock {
    file: File,
}

impl DocLock {
    fn shared(doc: &Path) -> Result<Self> {
        let file = Self::open(doc)?;
        file.lock_shared()?;
        Ok(Self { file })
    }

    fn exclusive(doc: &Path) -> Result<Self> {
        let file = Self::open(doc)?;
        file.lock_exclusive()?;
        Ok(Self { file })
    }

    fn open(doc: &Path) -> std::io::Result<File> {
        let dir = doc.parent().unwrap_or_else(|| Path::new("."));
        let base = doc.file_name().and_then(|s| s.to_str()).unwrap_or("data.json");
        OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(dir.join(format!(".{}.lock", base)))
    }
}

impl Drop for DocLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

fn read_raw(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(data) => Ok(Some(data)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn parse_document<T: DeserializeOwned>(raw: &str) -> Result<T> {
    // Guard against any accidental leading NULs
    let cleaned = raw.trim_start_matches('\0');
    Ok(serde_json::from_str(cleaned)?)
}

fn read_or_default<T: DeserializeOwned + Default>(path: &Path, what: &str) -> T {
    match read_raw(path) {
        Ok(Some(raw)) => parse_document(&raw).unwrap_or_else(|e| {
            warn!("storage: {} document {:?} unreadable ({}); using defaults", what, path, e);
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            warn!("storage: failed reading {:?}: {}", path, e);
            T::default()
        }
    }
}

/// Serialize `value` to a temp file beside `path` and rename it into place.
fn write_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let base = path.file_name().and_then(|s| s.to_str()).unwrap_or("data.json");
    let mut counter = 0u32;
    let tmp_path = loop {
        let candidate = dir.join(format!(".{}.tmp-{}-{}", base, std::process::id(), counter));
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(mut tmp) => {
                tmp.write_all(content.as_bytes())?;
                tmp.flush()?;
                let _ = tmp.sync_all();
                break candidate;
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                counter = counter.saturating_add(1);
            }
            Err(e) => return Err(e.into()),
        }
    };
    fs::rename(&tmp_path, path)?;
    if let Ok(dirf) = File::open(dir) {
        let _ = dirf.sync_all();
    }
    Ok(())
}
