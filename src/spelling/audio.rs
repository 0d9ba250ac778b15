//! Spoken prompts.
//!
//! Speaking a word is fire-and-forget: the session issues the command and
//! carries on; nothing waits for playback to finish.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::process::{Command, Stdio};
use tokio::runtime::Handle;

/// An installed text-to-speech voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

impl Voice {
    pub fn new(name: &str, lang: &str) -> Self {
        Self {
            name: name.to_string(),
            lang: lang.to_string(),
        }
    }
}

pub trait AudioOutput {
    fn speak(&mut self, word: &str, preferred_voice: Option<&str>);
}

/// Pick a voice for reading words to a child.
///
/// An exact match on `preferred` wins. Otherwise the first voice in each of
/// these tiers: Indian English female, any Indian English, British English,
/// any English.
pub fn select_voice<'a>(voices: &'a [Voice], preferred: Option<&str>) -> Option<&'a Voice> {
    if let Some(name) = preferred {
        if let Some(v) = voices.iter().find(|v| v.name == name) {
            return Some(v);
        }
    }

    let indian_female = |v: &&Voice| {
        let name = v.name.to_lowercase();
        let lang = v.lang.to_lowercase();
        (lang.contains("en-in") && !name.contains("male"))
            || ["veena", "lakshmi", "shruti"].iter().any(|n| name.contains(n))
            || (lang.contains("hi-in") && name.contains("female"))
    };
    let indian = |v: &&Voice| {
        let name = v.name.to_lowercase();
        v.lang.contains("en-IN") || ["indian", "india", "rishi"].iter().any(|n| name.contains(n))
    };
    let british = |v: &&Voice| {
        let name = v.name.to_lowercase();
        v.lang.contains("en-GB") || ["british", "kate", "moira"].iter().any(|n| name.contains(n))
    };
    let english = |v: &&Voice| v.lang.starts_with("en");

    voices
        .iter()
        .find(indian_female)
        .or_else(|| voices.iter().find(indian))
        .or_else(|| voices.iter().find(british))
        .or_else(|| voices.iter().find(english))
}

/// Audio sink for terminals without speech.
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioOutput for SilentAudio {
    fn speak(&mut self, word: &str, _preferred_voice: Option<&str>) {
        debug!("audio: no speech program configured, not speaking {} letters", word.chars().count());
    }
}

/// Speaks through an external program such as `espeak-ng`, invoked as
/// `<program> -s <rate> [-v <voice>] <word>`.
#[derive(Debug, Clone)]
pub struct CommandAudio {
    program: String,
    rate_wpm: u32,
    voices: Vec<Voice>,
}

impl CommandAudio {
    pub fn new(program: &str, rate_wpm: u32, voices: Vec<Voice>) -> Self {
        Self {
            program: program.to_string(),
            rate_wpm,
            voices,
        }
    }

    pub fn args(&self, word: &str, preferred_voice: Option<&str>) -> Vec<String> {
        let mut args = vec!["-s".to_string(), self.rate_wpm.to_string()];
        match select_voice(&self.voices, preferred_voice) {
            Some(v) => {
                args.push("-v".to_string());
                args.push(v.name.clone());
            }
            None => warn!("audio: no suitable voice found, using program default"),
        }
        args.push(word.to_string());
        args
    }
}

impl AudioOutput for CommandAudio {
    fn speak(&mut self, word: &str, preferred_voice: Option<&str>) {
        let args = self.args(word, preferred_voice);
        // Inside a runtime the dropped child is reaped by tokio's orphan
        // queue; outside one it is reaped when this process exits.
        let spawned = match Handle::try_current() {
            Ok(handle) => {
                let _rt = handle.enter();
                tokio::process::Command::new(&self.program)
                    .args(&args)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .map(drop)
            }
            Err(_) => Command::new(&self.program)
                .args(&args)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .map(drop),
        };
        if let Err(e) = spawned {
            warn!("audio: failed to start {}: {}", self.program, e);
        }
    }
}
