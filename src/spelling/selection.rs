//! Word selection policy.
//!
//! Words are drawn from the filtered pool minus the exclusion set (words
//! already presented during the current exhaustion cycle). Priority words
//! take absolute precedence: while any priority word is available, only
//! priority words are drawn. When every pool word is excluded the cycle
//! restarts and the draw is retried once with an empty exclusion set.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

use super::types::{Difficulty, Word};

/// Active category and difficulty filters. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFilter {
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl WordFilter {
    /// Category names compare case-insensitively.
    pub fn matches(&self, word: &Word) -> bool {
        if let Some(cat) = &self.category {
            match word.category.as_deref() {
                Some(have) if have.eq_ignore_ascii_case(cat) => {}
                _ => return false,
            }
        }
        if let Some(diff) = self.difficulty {
            if word.difficulty != diff {
                return false;
            }
        }
        true
    }

    /// Rewrite the category to the spelling used in `words`, if any word
    /// carries it.
    pub fn canonicalize(&mut self, words: &[Word]) {
        let stored = self.category.as_deref().and_then(|cat| {
            words
                .iter()
                .filter_map(|w| w.category.as_deref())
                .find(|have| have.eq_ignore_ascii_case(cat))
        });
        if let Some(stored) = stored {
            self.category = Some(stored.to_string());
        }
    }

    pub fn apply<'a>(&self, words: &'a [Word]) -> Vec<&'a Word> {
        words.iter().filter(|w| self.matches(w)).collect()
    }
}

impl fmt::Display for WordFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cat = self.category.as_deref().unwrap_or("all categories");
        match self.difficulty {
            Some(d) => write!(f, "{} / {}", cat, d),
            None => write!(f, "{} / all levels", cat),
        }
    }
}

/// A drawn word plus whether the exclusion cycle had to restart to find it.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub word: &'a Word,
    pub cycle_reset: bool,
}

/// Choose the next word from `pool`, skipping ids in `excluded`.
///
/// Ids in `excluded` that are not in `pool` are ignored. Returns `None` only
/// when `pool` itself is empty. When `cycle_reset` is set the caller must
/// clear its exclusion set.
pub fn select_next<'a, R: Rng + ?Sized>(
    pool: &[&'a Word],
    excluded: &HashSet<String>,
    rng: &mut R,
) -> Option<Selection<'a>> {
    if let Some(word) = draw(pool, excluded, rng) {
        return Some(Selection {
            word,
            cycle_reset: false,
        });
    }
    debug!(
        "selection: all {} pool words used this cycle, starting a new cycle",
        pool.len()
    );
    draw(pool, &HashSet::new(), rng).map(|word| Selection {
        word,
        cycle_reset: true,
    })
}

fn draw<'a, R: Rng + ?Sized>(
    pool: &[&'a Word],
    excluded: &HashSet<String>,
    rng: &mut R,
) -> Option<&'a Word> {
    let available: Vec<&'a Word> = pool
        .iter()
        .copied()
        .filter(|w| !excluded.contains(&w.id))
        .collect();
    let priority: Vec<&'a Word> = available.iter().copied().filter(|w| w.is_priority).collect();
    let source = if priority.is_empty() { &available } else { &priority };
    source.choose(rng).copied()
}

/// Distinct categories across `words`, sorted.
pub fn categories(words: &[Word]) -> Vec<String> {
    words
        .iter()
        .filter_map(|w| w.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
