//! # Spellbee - Spelling Practice for Young Learners
//!
//! Spellbee presents words one at a time, checks the child's spelling, hands
//! out letter clues and keeps a running star score. The engine is a plain
//! library; the bundled binary is a line-oriented console front end.
//!
//! ## Features
//!
//! - **Word Selection**: Category and difficulty filters, priority words first, no repeats until the pool is used up.
//! - **Gentle Feedback**: Length hints and correctly placed letters after a wrong guess.
//! - **Clues**: Reveal one random letter at a time, each costing a star.
//! - **Progress**: Cumulative stars, accuracy and a capped history of recent results.
//! - **Word Management**: Add, edit, remove and prioritise words; a default list is seeded on first run.
//! - **Speech**: Optional text-to-speech through an external program with automatic voice choice.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use spellbee::config::Config;
//! use spellbee::console::{ConsoleGame, PlayCommandParser};
//! use spellbee::spelling::PracticeSession;
//! use spellbee::storage::JsonStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("spellbee.toml").await?;
//!     let store = JsonStore::open(&config.storage.data_dir)?;
//!     let session = PracticeSession::new(
//!         Box::new(store.clone()),
//!         &store,
//!         Box::new(store.clone()),
//!         config.audio.build(),
//!         rand::rngs::StdRng::from_entropy(),
//!     )?;
//!     let mut game = ConsoleGame::new(session, PlayCommandParser::default());
//!     println!("{}", game.start()?);
//!     println!("{}", game.handle_line("elephant")?.text);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`spelling`] - The game rules: selection, comparison, clues, scoring, session state
//! - [`storage`] - JSON-file and in-memory stores, default word list
//! - [`console`] - Command parsing and text rendering for the terminal
//! - [`config`] - Configuration management
//! - [`validation`] - Word and category input validation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Console      │ ← Parses lines, renders screens
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │ PracticeSession │ ← Round state machine
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │    Storage      │ ← words.json / progress.json / settings.json
//! └─────────────────┘
//! ```

pub mod config;
pub mod console;
pub mod logutil;
pub mod spelling;
pub mod storage;
pub mod validation;
