//! # Spelling Practice Engine
//!
//! The rules of the spelling game, independent of any front end.
//!
//! ## Components
//!
//! - [`types`] - persisted data model (words, settings, results, progress)
//! - [`store`] - store contracts the session is handed at construction
//! - [`selection`] - filtered, priority-first, no-repeat word selection
//! - [`compare`] - guess comparison and positional feedback
//! - [`clue`] - one-character clues
//! - [`scoring`] - round star rating and cumulative star award
//! - [`session`] - the round/session state machine
//! - [`audio`] - fire-and-forget speech and voice selection
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────────┐
//! │ PracticeSession │ ← owns round state and the exclusion set
//! └─────────────────┘
//!    │     │      │
//!    │     │      └── compare / clue / scoring (pure)
//!    │     └── selection (pure, injected RNG)
//!    └── WordRepository · ProgressStore · AudioOutput
//! ```

pub mod audio;
pub mod clue;
pub mod compare;
pub mod errors;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod store;
pub mod types;

pub use audio::{AudioOutput, CommandAudio, SilentAudio, Voice};
pub use errors::{Result, SpellingError};
pub use selection::WordFilter;
pub use session::{
    Advance, ClueOutcome, PracticeSession, Round, RoundPhase, SessionStats, SubmitOutcome,
    DEFAULT_MAX_CLUES,
};
pub use store::{ProgressStore, SettingsStore, WordRepository};
pub use types::{AttemptResult, Difficulty, GameProgress, NewWord, Settings, Word, WordUpdate};
