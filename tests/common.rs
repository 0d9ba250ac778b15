//! Test utilities & fixtures.
//! Every test gets its own temp data directory; nothing touches tracked files.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spellbee::spelling::{Difficulty, PracticeSession, SilentAudio, Word};
use spellbee::storage::JsonStore;

/// Build a word with a fixed id.
pub fn word(id: &str, text: &str, difficulty: Difficulty, category: &str) -> Word {
    Word {
        id: id.to_string(),
        word: text.to_string(),
        difficulty,
        category: Some(category.to_string()),
        is_priority: false,
        created_at: Utc::now(),
    }
}

/// Temp data dir whose words.json holds exactly `words` (no default seeding).
pub fn store_with(words: &[Word]) -> (tempfile::TempDir, JsonStore) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let body = serde_json::to_string_pretty(words).expect("serialize words");
    std::fs::write(tmp.path().join("words.json"), body).expect("write words.json");
    let store = JsonStore::open(tmp.path()).expect("open store");
    (tmp, store)
}

/// Session over a JSON store with silent audio and a fixed seed.
#[allow(dead_code)]
pub fn session(store: &JsonStore, seed: u64) -> PracticeSession<StdRng> {
    PracticeSession::new(
        Box::new(store.clone()),
        store,
        Box::new(store.clone()),
        Box::new(SilentAudio),
        StdRng::seed_from_u64(seed),
    )
    .expect("session")
}
