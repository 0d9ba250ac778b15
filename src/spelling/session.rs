use chrono::Utc;
use log::{debug, info};
use rand::Rng;
use std::collections::{BTreeSet, HashSet};

use super::audio::AudioOutput;
use super::clue::{next_clue, Clue};
use super::compare::compare;
use super::errors::{Result, SpellingError};
use super::scoring::rate;
use super::selection::{categories, select_next, WordFilter};
use super::store::{ProgressStore, SettingsStore, WordRepository};
use super::types::{AttemptResult, GameProgress, Settings, Word};
use crate::logutil::escape_log;

/// Clues allowed per round unless overridden with [`PracticeSession::with_max_clues`].
pub const DEFAULT_MAX_CLUES: u32 = 3;

/// # Practice Session
///
/// Drives one child's practice: presents words, takes guesses, hands out
/// clues and records finished rounds.
///
/// ## Round Lifecycle
///
/// 1. **Playing** - a word is presented; guesses and clues are accepted
/// 2. **Correct** - spelled within the attempt budget (terminal)
/// 3. **Incorrect** - attempts exhausted, answer revealed (terminal)
///
/// From a terminal phase [`PracticeSession::next_word`] presents a fresh
/// word. [`PracticeSession::skip`] abandons a round in progress without
/// recording anything.
///
/// ## Exclusion Cycle
///
/// Every word that finishes or is skipped joins the exclusion set so it is
/// not drawn again until the filtered pool is used up. Changing filters or
/// resetting progress starts a new cycle.
///
/// ## Usage
///
/// ```rust,no_run
/// use rand::SeedableRng;
/// use spellbee::spelling::{PracticeSession, SilentAudio, SubmitOutcome};
/// use spellbee::storage::JsonStore;
///
/// # fn main() -> spellbee::spelling::Result<()> {
/// let store = JsonStore::open("./data")?;
/// let mut session = PracticeSession::new(
///     Box::new(store.clone()),
///     &store,
///     Box::new(store.clone()),
///     Box::new(SilentAudio),
///     rand::rngs::StdRng::from_entropy(),
/// )?;
/// session.start()?;
/// if let SubmitOutcome::Correct { stars, .. } = session.guess("cat")? {
///     println!("{} stars", stars);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PracticeSession<R: Rng> {
    words: Box<dyn WordRepository>,
    progress: Box<dyn ProgressStore>,
    audio: Box<dyn AudioOutput>,
    settings: Settings,
    rng: R,
    max_clues: u32,
    filter: WordFilter,
    snapshot: Vec<Word>,
    excluded: HashSet<String>,
    round: Option<Round>,
    stats: SessionStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Playing,
    Correct,
    Incorrect,
}

/// State of the word currently on screen.
#[derive(Debug, Clone)]
pub struct Round {
    word: Word,
    attempts: u32,
    revealed: BTreeSet<usize>,
    input: String,
    feedback: Vec<String>,
    phase: RoundPhase,
    stars: u32,
}

impl Round {
    fn new(word: Word) -> Self {
        Self {
            word,
            attempts: 0,
            revealed: BTreeSet::new(),
            input: String::new(),
            feedback: Vec::new(),
            phase: RoundPhase::Playing,
            stars: 0,
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
    pub fn revealed(&self) -> &BTreeSet<usize> {
        &self.revealed
    }
    /// Equal to the number of revealed positions.
    pub fn clues_taken(&self) -> u32 {
        self.revealed.len() as u32
    }
    pub fn input(&self) -> &str {
        &self.input
    }
    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }
    /// Star rating earned; only meaningful once the phase is `Correct`.
    pub fn stars(&self) -> u32 {
        self.stars
    }
}

/// Rounds finished in this session (not persisted).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub correct: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// A new round is in `Playing`.
    Presented,
    /// The active filters match no words; nothing changed.
    NoMatch,
    /// A round is still being played; use skip instead.
    RoundInProgress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No round is in `Playing`.
    NotPlaying,
    /// Blank input; no attempt consumed.
    Ignored,
    TryAgain {
        feedback: Vec<String>,
        attempts_left: u32,
    },
    Correct {
        attempts: u32,
        stars: u32,
    },
    OutOfAttempts {
        answer: String,
        attempts: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClueOutcome {
    Revealed(Clue),
    /// Every remaining position is revealed or already typed correctly.
    NoneLeft,
    CapReached,
    Disabled,
    NotPlaying,
}

impl<R: Rng> PracticeSession<R> {
    /// Build a session. Settings are read once here; later changes made
    /// through the settings store apply to the next session.
    pub fn new(
        words: Box<dyn WordRepository>,
        settings: &dyn SettingsStore,
        progress: Box<dyn ProgressStore>,
        audio: Box<dyn AudioOutput>,
        rng: R,
    ) -> Result<Self> {
        let settings = settings.get()?;
        Ok(Self {
            words,
            progress,
            audio,
            settings,
            rng,
            max_clues: DEFAULT_MAX_CLUES,
            filter: WordFilter::default(),
            snapshot: Vec::new(),
            excluded: HashSet::new(),
            round: None,
            stats: SessionStats::default(),
        })
    }

    pub fn with_max_clues(mut self, max_clues: u32) -> Self {
        self.max_clues = max_clues;
        self
    }

    pub fn with_filter(mut self, filter: WordFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Load the word list and present the first word. Also used to abandon
    /// the current round and draw again (nothing is recorded).
    pub fn start(&mut self) -> Result<Advance> {
        self.refresh_words()?;
        self.present_next()
    }

    /// Re-read the word list, e.g. after words were edited out of band.
    pub fn refresh_words(&mut self) -> Result<()> {
        self.snapshot = self.words.list()?;
        debug!("session: loaded {} words", self.snapshot.len());
        Ok(())
    }

    /// Present the next word after a finished round.
    pub fn next_word(&mut self) -> Result<Advance> {
        if matches!(&self.round, Some(r) if r.phase == RoundPhase::Playing) {
            return Ok(Advance::RoundInProgress);
        }
        self.present_next()
    }

    /// Abandon the round in progress without recording it and present another word.
    pub fn skip(&mut self) -> Result<Advance> {
        if let Some(round) = &self.round {
            if round.phase == RoundPhase::Playing {
                debug!("session: skipped word id {}", round.word.id);
                self.excluded.insert(round.word.id.clone());
            }
        }
        self.present_next()
    }

    /// Replace the typed-but-unsubmitted input.
    pub fn set_input(&mut self, input: &str) {
        if let Some(round) = self.round.as_mut() {
            if round.phase == RoundPhase::Playing {
                round.input = input.to_string();
            }
        }
    }

    /// Set the input and submit it.
    pub fn guess(&mut self, input: &str) -> Result<SubmitOutcome> {
        self.set_input(input);
        self.submit()
    }

    /// Check the current input against the word.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let max_attempts = self.settings.max_attempts;
        let round = match self.round.as_mut() {
            Some(r) if r.phase == RoundPhase::Playing => r,
            _ => return Ok(SubmitOutcome::NotPlaying),
        };
        if round.input.trim().is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        let attempts = round.attempts + 1;
        let verdict = compare(&round.input, &round.word.word);
        debug!(
            "session: attempt {} for word id {}: {} -> {}",
            attempts,
            round.word.id,
            escape_log(&round.input),
            if verdict.is_correct { "correct" } else { "wrong" }
        );

        if !verdict.is_correct && attempts < max_attempts {
            round.attempts = attempts;
            round.feedback = verdict.feedback;
            return Ok(SubmitOutcome::TryAgain {
                feedback: round.feedback.clone(),
                attempts_left: max_attempts - attempts,
            });
        }

        let correct = verdict.is_correct;
        let stars = rate(attempts, max_attempts, round.clues_taken());
        let result = finished(round, attempts, correct);
        // Nothing about the round changes until the result is stored; a
        // failed write leaves the attempt unspent.
        self.finish_round(&result)?;

        if let Some(round) = self.round.as_mut() {
            round.attempts = attempts;
            if correct {
                round.phase = RoundPhase::Correct;
                round.stars = stars;
                round.feedback.clear();
            } else {
                round.phase = RoundPhase::Incorrect;
                round.feedback = vec![format!("The correct spelling is: {}", round.word.word)];
            }
        }
        Ok(if correct {
            SubmitOutcome::Correct { attempts, stars }
        } else {
            SubmitOutcome::OutOfAttempts {
                answer: result.word,
                attempts,
            }
        })
    }

    /// Reveal one more character if hints are on and the clue budget allows.
    pub fn request_clue(&mut self) -> ClueOutcome {
        if !self.settings.hints_enabled {
            return ClueOutcome::Disabled;
        }
        let round = match self.round.as_mut() {
            Some(r) if r.phase == RoundPhase::Playing => r,
            _ => return ClueOutcome::NotPlaying,
        };
        if round.clues_taken() >= self.max_clues {
            return ClueOutcome::CapReached;
        }
        match next_clue(&round.word.word, &round.revealed, &round.input, &mut self.rng) {
            Some(clue) => {
                round.revealed.insert(clue.position);
                debug!(
                    "session: clue {} of {} at position {}",
                    round.clues_taken(),
                    self.max_clues,
                    clue.position
                );
                ClueOutcome::Revealed(clue)
            }
            None => ClueOutcome::NoneLeft,
        }
    }

    /// Ask the audio output to read the current word. Returns whether a
    /// request was issued.
    pub fn speak(&mut self) -> bool {
        if !self.settings.audio_enabled {
            return false;
        }
        match &self.round {
            Some(round) => {
                self.audio
                    .speak(&round.word.word, self.settings.preferred_voice.as_deref());
                true
            }
            None => false,
        }
    }

    /// Change filters. Starts a new exclusion cycle; the round in progress
    /// is left alone and the filter applies from the next draw.
    pub fn set_filter(&mut self, mut filter: WordFilter) -> Result<()> {
        self.refresh_words()?;
        filter.canonicalize(&self.snapshot);
        debug!("session: filter changed to {}", filter);
        self.filter = filter;
        self.excluded.clear();
        Ok(())
    }

    /// Clear persisted progress, the exclusion set and session stats.
    pub fn reset_progress(&mut self) -> Result<()> {
        self.progress.reset()?;
        self.excluded.clear();
        self.stats = SessionStats::default();
        info!("session: progress reset");
        Ok(())
    }

    pub fn progress(&self) -> Result<GameProgress> {
        self.progress.get()
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn filter(&self) -> &WordFilter {
        &self.filter
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn max_clues(&self) -> u32 {
        self.max_clues
    }

    pub fn clues_left(&self) -> u32 {
        self.round
            .as_ref()
            .map(|r| self.max_clues.saturating_sub(r.clues_taken()))
            .unwrap_or(self.max_clues)
    }

    pub fn attempts_left(&self) -> u32 {
        let used = self.round.as_ref().map(|r| r.attempts).unwrap_or(0);
        self.settings.max_attempts.saturating_sub(used)
    }

    pub fn is_excluded(&self, word_id: &str) -> bool {
        self.excluded.contains(word_id)
    }

    /// Categories available for filtering.
    pub fn categories(&self) -> Vec<String> {
        categories(&self.snapshot)
    }

    fn present_next(&mut self) -> Result<Advance> {
        if self.snapshot.is_empty() {
            return Err(SpellingError::EmptyRepository);
        }
        let pool = self.filter.apply(&self.snapshot);
        let selection = match select_next(&pool, &self.excluded, &mut self.rng) {
            Some(s) => s,
            None => {
                info!("session: no words match {}", self.filter);
                return Ok(Advance::NoMatch);
            }
        };
        if selection.cycle_reset {
            self.excluded.clear();
        }
        let word = selection.word.clone();
        debug!("session: presenting word id {} ({})", word.id, word.difficulty);
        self.round = Some(Round::new(word));
        Ok(Advance::Presented)
    }

    fn finish_round(&mut self, result: &AttemptResult) -> Result<()> {
        self.progress.record_attempt(result.clone())?;
        self.excluded.insert(result.word_id.clone());
        self.stats.total += 1;
        if result.correct {
            self.stats.correct += 1;
        }
        info!(
            "session: finished '{}' correct={} attempts={}",
            result.word, result.correct, result.attempts
        );
        Ok(())
    }
}

fn finished(round: &Round, attempts: u32, correct: bool) -> AttemptResult {
    AttemptResult {
        word_id: round.word.id.clone(),
        word: round.word.word.clone(),
        attempts,
        correct,
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::types::Difficulty;
    use crate::storage::{MemoryProgress, MemorySettings, MemoryWords};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn word(id: &str, text: &str, priority: bool) -> Word {
        Word {
            id: id.into(),
            word: text.into(),
            difficulty: Difficulty::Easy,
            category: Some("Animals".into()),
            is_priority: priority,
            created_at: Utc::now(),
        }
    }

    #[derive(Clone, Default)]
    struct SpokenLog(Rc<RefCell<Vec<(String, Option<String>)>>>);

    impl AudioOutput for SpokenLog {
        fn speak(&mut self, word: &str, preferred_voice: Option<&str>) {
            self.0
                .borrow_mut()
                .push((word.to_string(), preferred_voice.map(str::to_string)));
        }
    }

    fn session_with(words: Vec<Word>, settings: Settings) -> PracticeSession<StdRng> {
        PracticeSession::new(
            Box::new(MemoryWords::with_words(words)),
            &MemorySettings::new(settings),
            Box::new(MemoryProgress::default()),
            Box::new(SpokenLog::default()),
            StdRng::seed_from_u64(11),
        )
        .unwrap()
    }

    #[test]
    fn cat_scenario_end_to_end() {
        let mut s = session_with(vec![word("c", "cat", false)], Settings::default());
        assert_eq!(s.start().unwrap(), Advance::Presented);

        let out = s.guess("dog").unwrap();
        assert_eq!(
            out,
            SubmitOutcome::TryAgain {
                feedback: vec![],
                attempts_left: 2
            }
        );
        assert_eq!(s.round().unwrap().attempts(), 1);
        assert_eq!(s.progress().unwrap().total_words_played, 0);

        let clue = match s.request_clue() {
            ClueOutcome::Revealed(c) => c,
            other => panic!("expected a clue, got {:?}", other),
        };
        assert!(clue.position < 3);
        assert_eq!(clue.character, "cat".chars().nth(clue.position).unwrap());
        assert_eq!(s.round().unwrap().clues_taken(), 1);

        let out = s.guess("cat").unwrap();
        assert_eq!(out, SubmitOutcome::Correct { attempts: 2, stars: 1 });
        assert_eq!(s.round().unwrap().phase(), RoundPhase::Correct);

        let p = s.progress().unwrap();
        assert_eq!(p.total_words_played, 1);
        assert_eq!(p.correct_words, 1);
        assert_eq!(p.total_attempts, 2);
        assert_eq!(p.stars, 2);
        assert_eq!(p.recent_results.len(), 1);
        assert!(p.recent_results[0].correct);
        assert!(s.is_excluded("c"));
    }

    #[test]
    fn blank_submit_consumes_nothing() {
        let mut s = session_with(vec![word("c", "cat", false)], Settings::default());
        s.start().unwrap();
        assert_eq!(s.guess("   ").unwrap(), SubmitOutcome::Ignored);
        assert_eq!(s.round().unwrap().attempts(), 0);
        assert_eq!(s.attempts_left(), 3);
    }

    #[test]
    fn exhausting_attempts_reveals_answer_and_records() {
        let settings = Settings {
            max_attempts: 2,
            ..Settings::default()
        };
        let mut s = session_with(vec![word("c", "cat", false)], settings);
        s.start().unwrap();
        assert!(matches!(s.guess("cot").unwrap(), SubmitOutcome::TryAgain { attempts_left: 1, .. }));
        let out = s.guess("cut").unwrap();
        assert_eq!(
            out,
            SubmitOutcome::OutOfAttempts {
                answer: "cat".into(),
                attempts: 2
            }
        );
        let round = s.round().unwrap();
        assert_eq!(round.phase(), RoundPhase::Incorrect);
        assert_eq!(round.feedback(), ["The correct spelling is: cat".to_string()]);

        let p = s.progress().unwrap();
        assert_eq!(p.total_words_played, 1);
        assert_eq!(p.correct_words, 0);
        assert_eq!(p.stars, 0);
        assert!(!p.recent_results[0].correct);
        assert_eq!(s.stats(), SessionStats { correct: 0, total: 1 });

        // Finished rounds refuse further guesses.
        assert_eq!(s.guess("cat").unwrap(), SubmitOutcome::NotPlaying);
    }

    #[test]
    fn skip_records_nothing_but_excludes() {
        let mut s = session_with(
            vec![word("a", "cat", false), word("b", "dog", false)],
            Settings::default(),
        );
        s.start().unwrap();
        let first = s.round().unwrap().word().id.clone();
        s.guess("zzz").unwrap();
        assert_eq!(s.skip().unwrap(), Advance::Presented);

        assert!(s.is_excluded(&first));
        let second = s.round().unwrap().word().id.clone();
        assert_ne!(first, second);
        assert_eq!(s.round().unwrap().attempts(), 0);

        let p = s.progress().unwrap();
        assert_eq!(p, GameProgress::default());
    }

    #[test]
    fn next_word_requires_finished_round() {
        let mut s = session_with(
            vec![word("a", "cat", false), word("b", "dog", false)],
            Settings::default(),
        );
        s.start().unwrap();
        assert_eq!(s.next_word().unwrap(), Advance::RoundInProgress);
        let target = s.round().unwrap().word().word.clone();
        s.guess(&target).unwrap();
        assert_eq!(s.next_word().unwrap(), Advance::Presented);
        assert_ne!(s.round().unwrap().word().word, target);
    }

    #[test]
    fn pool_exhaustion_starts_new_cycle() {
        let mut s = session_with(
            vec![word("a", "cat", false), word("b", "dog", false)],
            Settings::default(),
        );
        s.start().unwrap();
        for _ in 0..2 {
            let target = s.round().unwrap().word().word.clone();
            s.guess(&target).unwrap();
            if s.stats().total < 2 {
                s.next_word().unwrap();
            }
        }
        assert!(s.is_excluded("a") && s.is_excluded("b"));
        assert_eq!(s.next_word().unwrap(), Advance::Presented);
        // Cycle restarted.
        assert!(!(s.is_excluded("a") && s.is_excluded("b")));
    }

    #[test]
    fn priority_words_come_first() {
        let mut s = session_with(
            vec![
                word("a", "cat", false),
                word("b", "dog", true),
                word("c", "sun", false),
            ],
            Settings::default(),
        );
        for _ in 0..50 {
            s.start().unwrap();
            assert_eq!(s.round().unwrap().word().id, "b");
        }
    }

    #[test]
    fn clue_cap_and_disabled_hints() {
        let mut s = session_with(vec![word("e", "elephant", false)], Settings::default())
            .with_max_clues(2);
        s.start().unwrap();
        assert!(matches!(s.request_clue(), ClueOutcome::Revealed(_)));
        assert!(matches!(s.request_clue(), ClueOutcome::Revealed(_)));
        assert_eq!(s.request_clue(), ClueOutcome::CapReached);
        assert_eq!(s.clues_left(), 0);
        assert_eq!(s.round().unwrap().revealed().len(), 2);

        let no_hints = Settings {
            hints_enabled: false,
            ..Settings::default()
        };
        let mut s = session_with(vec![word("e", "elephant", false)], no_hints);
        s.start().unwrap();
        assert_eq!(s.request_clue(), ClueOutcome::Disabled);
    }

    #[test]
    fn clue_none_left_when_everything_typed() {
        let mut s = session_with(vec![word("c", "cat", false)], Settings::default());
        s.start().unwrap();
        s.set_input("CAT");
        assert_eq!(s.request_clue(), ClueOutcome::NoneLeft);
        assert_eq!(s.round().unwrap().clues_taken(), 0);
    }

    #[test]
    fn clues_lower_the_round_rating_only() {
        let mut s = session_with(vec![word("c", "cat", false)], Settings::default());
        s.start().unwrap();
        s.request_clue();
        s.request_clue();
        assert_eq!(
            s.guess("cat").unwrap(),
            SubmitOutcome::Correct { attempts: 1, stars: 1 }
        );
        // Cumulative award ignores clues.
        assert_eq!(s.progress().unwrap().stars, 3);
    }

    #[test]
    fn filter_change_clears_exclusions_and_waits_for_next_draw() {
        let mut words = vec![word("a", "cat", false), word("b", "dog", false)];
        words.push(Word {
            category: Some("Nature".into()),
            ..word("n", "sun", false)
        });
        let mut s = session_with(words, Settings::default());
        s.start().unwrap();
        let current = s.round().unwrap().word().id.clone();
        s.skip().unwrap();
        assert!(s.is_excluded(&current));
        let before = s.round().unwrap().word().id.clone();

        s.set_filter(WordFilter {
            category: Some("Nature".into()),
            difficulty: None,
        })
        .unwrap();
        assert!(!s.is_excluded(&current));
        // Mid-round: still the same word until the next draw.
        assert_eq!(s.round().unwrap().word().id, before);
        s.skip().unwrap();
        assert_eq!(s.round().unwrap().word().id, "n");
    }

    #[test]
    fn filter_without_matches_keeps_state() {
        let mut s = session_with(vec![word("a", "cat", false)], Settings::default());
        s.start().unwrap();
        s.set_filter(WordFilter {
            category: None,
            difficulty: Some(Difficulty::Hard),
        })
        .unwrap();
        assert_eq!(s.skip().unwrap(), Advance::NoMatch);
        assert_eq!(s.round().unwrap().word().id, "a");
        assert_eq!(s.round().unwrap().phase(), RoundPhase::Playing);
    }

    #[test]
    fn empty_repository_cannot_start() {
        let mut s = session_with(Vec::new(), Settings::default());
        assert!(matches!(s.start(), Err(SpellingError::EmptyRepository)));
        assert!(s.round().is_none());
    }

    #[test]
    fn reset_clears_progress_and_exclusions() {
        let mut s = session_with(
            vec![word("a", "cat", false), word("b", "dog", false)],
            Settings::default(),
        );
        s.start().unwrap();
        let target = s.round().unwrap().word().word.clone();
        s.guess(&target).unwrap();
        assert_eq!(s.progress().unwrap().total_words_played, 1);

        s.reset_progress().unwrap();
        assert_eq!(s.progress().unwrap(), GameProgress::default());
        assert_eq!(s.stats(), SessionStats::default());
        assert!(!s.is_excluded("a") && !s.is_excluded("b"));
    }

    #[test]
    fn speak_respects_audio_setting() {
        let log = SpokenLog::default();
        let settings = MemorySettings::new(Settings {
            preferred_voice: Some("Kate".into()),
            ..Settings::default()
        });
        let mut s = PracticeSession::new(
            Box::new(MemoryWords::with_words(vec![word("c", "cat", false)])),
            &settings,
            Box::new(MemoryProgress::default()),
            Box::new(log.clone()),
            StdRng::seed_from_u64(5),
        )
        .unwrap();
        assert!(!s.speak());
        s.start().unwrap();
        assert!(s.speak());
        assert_eq!(
            log.0.borrow().as_slice(),
            [("cat".to_string(), Some("Kate".to_string()))]
        );

        let mut quiet = session_with(
            vec![word("c", "cat", false)],
            Settings {
                audio_enabled: false,
                ..Settings::default()
            },
        );
        quiet.start().unwrap();
        assert!(!quiet.speak());
    }

    /// Progress store whose writes fail while `down` is set.
    #[derive(Clone, Default)]
    struct FlakyProgress {
        down: Rc<RefCell<bool>>,
        inner: Rc<RefCell<MemoryProgress>>,
    }

    impl ProgressStore for FlakyProgress {
        fn get(&self) -> Result<GameProgress> {
            self.inner.borrow().get()
        }

        fn record_attempt(&mut self, result: AttemptResult) -> Result<GameProgress> {
            if *self.down.borrow() {
                return Err(SpellingError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "disk full",
                )));
            }
            self.inner.borrow_mut().record_attempt(result)
        }

        fn reset(&mut self) -> Result<()> {
            self.inner.borrow_mut().reset()
        }
    }

    #[test]
    fn failed_write_leaves_round_playable() {
        let progress = FlakyProgress::default();
        let mut s = PracticeSession::new(
            Box::new(MemoryWords::with_words(vec![word("c", "cat", false)])),
            &MemorySettings::default(),
            Box::new(progress.clone()),
            Box::new(SpokenLog::default()),
            StdRng::seed_from_u64(8),
        )
        .unwrap();
        s.start().unwrap();

        *progress.down.borrow_mut() = true;
        assert!(matches!(s.guess("cat"), Err(SpellingError::Io(_))));
        let round = s.round().unwrap();
        assert_eq!(round.phase(), RoundPhase::Playing);
        assert_eq!(round.attempts(), 0);
        assert_eq!(s.stats().total, 0);
        assert!(!s.is_excluded("c"));

        *progress.down.borrow_mut() = false;
        assert_eq!(
            s.guess("cat").unwrap(),
            SubmitOutcome::Correct {
                attempts: 1,
                stars: 3
            }
        );
        assert_eq!(s.stats().total, 1);
        assert!(s.is_excluded("c"));
        assert_eq!(progress.get().unwrap().total_words_played, 1);
    }
}
