//! # Configuration Management Module
//!
//! Application-level settings loaded from a TOML file. These are distinct
//! from the per-child practice [`Settings`](crate::spelling::Settings), which
//! live in the data directory and are edited with `spellbee settings`.
//!
//! ## Configuration Structure
//!
//! - [`StorageConfig`] - where the JSON documents live
//! - [`GameConfig`] - clue budget, history cap, console command prefix
//! - [`AudioConfig`] - speech program and the voices it offers
//! - [`LoggingConfig`] - log level and optional log file
//!
//! Every section and field has a default, so a partial file (or an empty
//! one) is valid.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spellbee::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Config::create_default("spellbee.toml").await?;
//!     let config = Config::load("spellbee.toml").await?;
//!     println!("Data dir: {}", config.storage.data_dir);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [storage]
//! data_dir = "./data"
//!
//! [game]
//! max_clues = 3
//! recent_results_cap = 50
//! command_prefix = "/"
//!
//! [audio]
//! command = "espeak-ng"
//! rate_wpm = 120
//! voices = [{ name = "en-gb", lang = "en-GB" }]
//!
//! [logging]
//! level = "warn"
//! ```

use anyhow::{anyhow, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::spelling::store::RECENT_RESULTS_CAP;
use crate::spelling::{AudioOutput, CommandAudio, SilentAudio, Voice, DEFAULT_MAX_CLUES};

/// Prefixes accepted for console commands. Anything else falls back to `/`.
pub const ALLOWED_COMMAND_PREFIXES: &[&str] = &["/", "!", ":", "^", ">"];
const DEFAULT_COMMAND_PREFIX: &str = "/";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Clues allowed per word.
    pub max_clues: u32,
    /// How many finished rounds progress.json keeps.
    pub recent_results_cap: usize,
    pub command_prefix: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_clues: DEFAULT_MAX_CLUES,
            recent_results_cap: RECENT_RESULTS_CAP,
            command_prefix: DEFAULT_COMMAND_PREFIX.to_string(),
        }
    }
}

impl GameConfig {
    /// The configured prefix if it is one of [`ALLOWED_COMMAND_PREFIXES`].
    pub fn command_prefix(&self) -> &str {
        let p = self.command_prefix.trim();
        match ALLOWED_COMMAND_PREFIXES.iter().find(|allowed| **allowed == p) {
            Some(allowed) => *allowed,
            None => {
                warn!(
                    "Invalid command_prefix '{}', defaulting to '{}'",
                    self.command_prefix, DEFAULT_COMMAND_PREFIX
                );
                DEFAULT_COMMAND_PREFIX
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Speech program; unset or empty disables speech.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    pub rate_wpm: u32,
    /// Voices the program offers, in the order they should be considered.
    pub voices: Vec<Voice>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            command: Some("espeak-ng".to_string()),
            rate_wpm: 120,
            voices: vec![
                Voice::new("en-gb", "en-GB"),
                Voice::new("en-us", "en-US"),
            ],
        }
    }
}

impl AudioConfig {
    /// Build the audio sink this configuration describes.
    pub fn build(&self) -> Box<dyn AudioOutput> {
        match self.command.as_deref().map(str::trim) {
            Some(cmd) if !cmd.is_empty() => {
                Box::new(CommandAudio::new(cmd, self.rate_wpm, self.voices.clone()))
            }
            _ => Box::new(SilentAudio),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        Self::parse(&content).map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))
    }

    /// Load `path` if it exists, otherwise use defaults.
    pub async fn load_or_default(path: &str) -> Result<Self> {
        if fs::metadata(path).await.is_ok() {
            Self::load(path).await
        } else {
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.game.recent_results_cap == 0 {
            return Err(anyhow!("game.recent_results_cap must be at least 1"));
        }
        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
