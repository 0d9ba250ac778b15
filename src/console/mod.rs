//! # Console Front End
//!
//! Turns typed lines into [`PracticeSession`] calls and renders the result
//! as plain text. The binary feeds it stdin one line at a time; tests feed
//! it strings directly.
//!
//! ```text
//! Session: 2/3  ⭐ Total Stars: 14
//! [📁 Animals] [easy]  Attempts: ●○○
//! Spell this word! (/say to hear it again)
//! ```

pub mod parser;

pub use parser::{PlayCommand, PlayCommandParser};

use log::{debug, info};
use rand::Rng;

use crate::spelling::clue::mask;
use crate::spelling::scoring::accuracy;
use crate::spelling::{
    Advance, ClueOutcome, PracticeSession, Result, RoundPhase, SubmitOutcome, WordFilter,
};

/// Text to print and whether the player asked to leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn show(text: String) -> Self {
        Self { text, quit: false }
    }
}

const NO_MATCH: &str = "No words match the selected filters. Please choose different options.";

pub struct ConsoleGame<R: Rng> {
    session: PracticeSession<R>,
    parser: PlayCommandParser,
}

impl<R: Rng> ConsoleGame<R> {
    pub fn new(session: PracticeSession<R>, parser: PlayCommandParser) -> Self {
        Self { session, parser }
    }

    pub fn session(&self) -> &PracticeSession<R> {
        &self.session
    }

    /// Present the first word and return the opening screen.
    pub fn start(&mut self) -> Result<String> {
        let advance = self.session.start()?;
        let mut out = format!(
            "Let's practice spelling! Type your answer and press Enter. {}help lists commands.\n",
            self.parser.prefix()
        );
        out.push_str(&self.after_advance(advance));
        Ok(out)
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Reply> {
        let cmd = self.parser.parse(line);
        debug!("console: {:?}", cmd);
        let text = match cmd {
            PlayCommand::Guess(text) => self.guess(&text)?,
            PlayCommand::Continue => match self.phase() {
                Some(RoundPhase::Playing) => self.screen(),
                _ => {
                    let advance = self.session.next_word()?;
                    self.after_advance(advance)
                }
            },
            PlayCommand::Clue => self.clue(),
            PlayCommand::Skip => {
                let advance = self.session.skip()?;
                self.after_advance(advance)
            }
            PlayCommand::Next => match self.session.next_word()? {
                Advance::RoundInProgress => format!(
                    "Finish this word first, or use {}skip for a new one.",
                    self.parser.prefix()
                ),
                advance => self.after_advance(advance),
            },
            PlayCommand::Say => {
                if self.session.speak() {
                    "🔊 Listen...".to_string()
                } else {
                    "Audio is turned off.".to_string()
                }
            }
            PlayCommand::Category(category) => {
                let filter = WordFilter {
                    category,
                    ..self.session.filter().clone()
                };
                self.change_filter(filter)?
            }
            PlayCommand::Difficulty(difficulty) => {
                let filter = WordFilter {
                    difficulty,
                    ..self.session.filter().clone()
                };
                self.change_filter(filter)?
            }
            PlayCommand::Categories => {
                let cats = self.session.categories();
                if cats.is_empty() {
                    "No categories yet.".to_string()
                } else {
                    format!("📁 Categories: all, {}", cats.join(", "))
                }
            }
            PlayCommand::Status => self.status()?,
            PlayCommand::Reset { confirmed: false } => format!(
                "This clears all stars and history and cannot be undone. Type {}reset yes to confirm.",
                self.parser.prefix()
            ),
            PlayCommand::Reset { confirmed: true } => {
                self.session.reset_progress()?;
                format!("Progress reset.\n{}", self.header()?)
            }
            PlayCommand::Help => self.help(),
            PlayCommand::Quit => {
                let stats = self.session.stats();
                info!("console: session ended {}/{}", stats.correct, stats.total);
                return Ok(Reply {
                    text: format!(
                        "Bye! You spelled {} of {} words this session.",
                        stats.correct, stats.total
                    ),
                    quit: true,
                });
            }
            PlayCommand::Unknown(name) => format!(
                "Unknown command '{}'. Type {}help for commands.",
                name,
                self.parser.prefix()
            ),
            PlayCommand::Invalid(msg) => msg,
        };
        Ok(Reply::show(text))
    }

    fn phase(&self) -> Option<RoundPhase> {
        self.session.round().map(|r| r.phase())
    }

    fn guess(&mut self, text: &str) -> Result<String> {
        let out = match self.session.guess(text)? {
            SubmitOutcome::NotPlaying => "Press Enter for the next word.".to_string(),
            SubmitOutcome::Ignored => self.screen(),
            SubmitOutcome::TryAgain {
                feedback,
                attempts_left,
            } => {
                let mut lines = vec!["Not quite!".to_string()];
                lines.extend(feedback);
                lines.push(format!(
                    "{} attempt{} left!",
                    attempts_left,
                    plural(attempts_left)
                ));
                lines.join("\n")
            }
            SubmitOutcome::Correct { attempts, stars } => {
                let word = self
                    .session
                    .round()
                    .map(|r| r.word().word.clone())
                    .unwrap_or_default();
                format!(
                    "🎉 Perfect! {}\nYou got it in {} attempt{}!\n{}\n{}\nPress Enter for the next word.",
                    word,
                    attempts,
                    plural(attempts),
                    star_row(stars),
                    self.header()?
                )
            }
            SubmitOutcome::OutOfAttempts { answer, .. } => {
                // Read the answer out once more.
                self.session.speak();
                format!(
                    "Let's try again!\nThe correct spelling is: {}\n{}\nPress Enter for the next word.",
                    answer,
                    self.header()?
                )
            }
        };
        Ok(out)
    }

    fn clue(&mut self) -> String {
        match self.session.request_clue() {
            ClueOutcome::Revealed(clue) => {
                let taken = self.session.round().map(|r| r.clues_taken()).unwrap_or(0);
                format!(
                    "💡 Letter {} is '{}'\n{}\n💡 {} clue{} taken (reduces stars)",
                    clue.position + 1,
                    clue.character.to_uppercase(),
                    self.mask_line(),
                    taken,
                    plural(taken)
                )
            }
            ClueOutcome::NoneLeft => {
                "Every letter is already shown or typed correctly!".to_string()
            }
            ClueOutcome::CapReached => "No more clues available! You can do it! 💪".to_string(),
            ClueOutcome::Disabled => "Clues are turned off.".to_string(),
            ClueOutcome::NotPlaying => "Press Enter for the next word.".to_string(),
        }
    }

    fn change_filter(&mut self, filter: WordFilter) -> Result<String> {
        self.session.set_filter(filter)?;
        let mut out = format!("Now practicing: {}", self.session.filter());
        if self.phase() == Some(RoundPhase::Playing) {
            out.push_str(&format!(
                "\nFinish this word or use {}skip to start with the new filter.",
                self.parser.prefix()
            ));
        }
        Ok(out)
    }

    fn after_advance(&mut self, advance: Advance) -> String {
        match advance {
            Advance::Presented => {
                self.session.speak();
                self.screen()
            }
            Advance::NoMatch => NO_MATCH.to_string(),
            Advance::RoundInProgress => self.screen(),
        }
    }

    /// The playing screen for the current round.
    fn screen(&self) -> String {
        let round = match self.session.round() {
            Some(r) => r,
            None => return NO_MATCH.to_string(),
        };
        let word = round.word();
        let mut lines = Vec::new();

        let mut tags = String::new();
        if let Some(cat) = &word.category {
            tags.push_str(&format!("[📁 {}] ", cat));
        }
        tags.push_str(&format!("[{}]", word.difficulty));
        let max = self.session.settings().max_attempts;
        let dots: String = (0..max)
            .map(|i| if i < round.attempts() { '●' } else { '○' })
            .collect();
        lines.push(format!("{}  Attempts: {}", tags, dots));

        lines.push(format!(
            "Spell this word! ({}say to hear it again)",
            self.parser.prefix()
        ));
        if !round.revealed().is_empty() {
            lines.push(self.mask_line());
        }
        if self.session.settings().hints_enabled {
            let left = self.session.clues_left();
            if left > 0 {
                lines.push(format!(
                    "💡 {}clue for a clue ({} left)",
                    self.parser.prefix(),
                    left
                ));
            } else {
                lines.push("No more clues available! You can do it! 💪".to_string());
            }
        }
        lines.join("\n")
    }

    fn mask_line(&self) -> String {
        match self.session.round() {
            Some(r) => format!("Clue: {}", mask(&r.word().word, r.revealed())),
            None => String::new(),
        }
    }

    fn header(&self) -> Result<String> {
        let stats = self.session.stats();
        let progress = self.session.progress()?;
        Ok(format!(
            "Session: {}/{}  ⭐ Total Stars: {}",
            stats.correct, stats.total, progress.stars
        ))
    }

    fn status(&self) -> Result<String> {
        let progress = self.session.progress()?;
        Ok(format!(
            "{}\nWords played: {}  Correct: {}  Accuracy: {}%\nFilter: {}",
            self.header()?,
            progress.total_words_played,
            progress.correct_words,
            accuracy(progress.correct_words, progress.total_words_played),
            self.session.filter()
        ))
    }

    fn help(&self) -> String {
        let p = self.parser.prefix();
        [
            "Type the word and press Enter to check it. Empty Enter moves on after a word is done.".to_string(),
            format!("{p}say        hear the word again"),
            format!("{p}clue       reveal one letter (costs a star)"),
            format!("{p}skip       new word, nothing recorded"),
            format!("{p}next       next word after finishing one"),
            format!("{p}category <name|all>    {p}difficulty <easy|medium|hard|all>"),
            format!("{p}categories {p}status {p}reset {p}quit"),
        ]
        .join("\n")
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

fn star_row(stars: u32) -> String {
    if stars == 0 {
        "No stars this time, but you got it!".to_string()
    } else {
        "⭐".repeat(stars as usize)
    }
}
