//! Line parser for the practice console.
//!
//! Anything typed without the command prefix is a spelling guess; an empty
//! line means "continue". Commands are case-insensitive and take at most
//! one argument, e.g. `/clue`, `/category Animals`, `/difficulty all`.
use log::trace;

use crate::spelling::Difficulty;
use crate::validation::parse_filter_arg;

pub struct PlayCommandParser {
    prefix: String,
}

impl PlayCommandParser {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn parse(&self, raw: &str) -> PlayCommand {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return PlayCommand::Continue;
        }
        let body = match trimmed.strip_prefix(self.prefix.as_str()) {
            Some(body) => body.trim_start(),
            None => return PlayCommand::Guess(trimmed.to_string()),
        };
        let (name, arg) = match body.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (body, ""),
        };
        let cmd = match name.to_ascii_lowercase().as_str() {
            "help" | "h" | "?" => PlayCommand::Help,
            "clue" | "hint" | "c" => PlayCommand::Clue,
            "skip" | "new" | "s" => PlayCommand::Skip,
            "next" | "n" => PlayCommand::Next,
            "say" | "listen" | "l" => PlayCommand::Say,
            "categories" | "cats" => PlayCommand::Categories,
            "status" | "stats" => PlayCommand::Status,
            "quit" | "exit" | "q" => PlayCommand::Quit,
            "reset" => PlayCommand::Reset {
                confirmed: arg.eq_ignore_ascii_case("yes"),
            },
            "category" | "cat" => {
                if arg.is_empty() {
                    PlayCommand::Invalid("Category required (or 'all')".into())
                } else {
                    PlayCommand::Category(parse_filter_arg(arg))
                }
            }
            "difficulty" | "level" | "d" => {
                if arg.is_empty() {
                    PlayCommand::Invalid("Difficulty required: easy, medium, hard or all".into())
                } else {
                    match parse_filter_arg(arg).map(|level| level.parse::<Difficulty>()) {
                        None => PlayCommand::Difficulty(None),
                        Some(Ok(d)) => PlayCommand::Difficulty(Some(d)),
                        Some(Err(_)) => PlayCommand::Invalid(
                            "Difficulty must be easy, medium, hard or all".into(),
                        ),
                    }
                }
            }
            other => PlayCommand::Unknown(other.to_string()),
        };
        trace!("Parsed {:?} from '{}'", cmd, raw);
        cmd
    }
}

impl Default for PlayCommandParser {
    fn default() -> Self {
        Self::new("/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Guess(String),
    /// Blank line.
    Continue,
    Clue,
    Skip,
    Next,
    Say,
    Category(Option<String>),
    Difficulty(Option<Difficulty>),
    Categories,
    Status,
    Reset { confirmed: bool },
    Help,
    Quit,
    Unknown(String),
    Invalid(String),
}
