//! Character clues.
//!
//! A clue reveals one character of the target at a random position that is
//! neither already revealed nor already typed correctly by the child. The
//! per-round budget (`max_clues`) is enforced by the session, not here.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clue {
    pub position: usize,
    pub character: char,
}

/// Positions still worth revealing for `target`, in ascending order.
pub fn candidates(target: &str, revealed: &BTreeSet<usize>, current_input: &str) -> Vec<usize> {
    let typed: Vec<char> = current_input.chars().collect();
    target
        .chars()
        .enumerate()
        .filter(|(i, _)| !revealed.contains(i))
        .filter(|(i, ch)| match typed.get(*i) {
            Some(t) => !chars_eq(*t, *ch),
            None => true,
        })
        .map(|(i, _)| i)
        .collect()
}

/// Pick the next clue uniformly among [`candidates`]. `None` once nothing is left to reveal.
pub fn next_clue<R: Rng + ?Sized>(
    target: &str,
    revealed: &BTreeSet<usize>,
    current_input: &str,
    rng: &mut R,
) -> Option<Clue> {
    let open = candidates(target, revealed, current_input);
    let position = *open.choose(rng)?;
    let character = target.chars().nth(position)?;
    Some(Clue {
        position,
        character,
    })
}

/// Render revealed positions as upper-case letters and the rest as `_`, space separated.
pub fn mask(target: &str, revealed: &BTreeSet<usize>) -> String {
    target
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            if revealed.contains(&i) {
                ch.to_uppercase().collect::<String>()
            } else {
                "_".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn chars_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn never_reveals_revealed_or_typed_positions() {
        let revealed: BTreeSet<usize> = [0].into_iter().collect();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let clue = next_clue("apple", &revealed, "ap___", &mut rng).unwrap();
            assert!(clue.position >= 2, "seed {} gave {}", seed, clue.position);
            assert_eq!(clue.character, "apple".chars().nth(clue.position).unwrap());
        }
    }

    #[test]
    fn repeated_clues_run_dry() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut revealed: BTreeSet<usize> = [0].into_iter().collect();
        let mut seen = Vec::new();
        while let Some(clue) = next_clue("apple", &revealed, "ap___", &mut rng) {
            assert!(revealed.insert(clue.position), "position repeated");
            seen.push(clue.position);
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![2, 3, 4]);
    }

    #[test]
    fn typed_match_is_case_insensitive() {
        let open = candidates("cat", &BTreeSet::new(), "CxT");
        assert_eq!(open, vec![1]);
    }

    #[test]
    fn longer_input_is_harmless() {
        let open = candidates("cat", &BTreeSet::new(), "cattle");
        assert!(open.is_empty());
    }

    #[test]
    fn mask_shows_revealed_uppercase() {
        let revealed: BTreeSet<usize> = [1, 4].into_iter().collect();
        assert_eq!(mask("apple", &revealed), "_ P _ _ E");
        assert_eq!(mask("cat", &BTreeSet::new()), "_ _ _");
    }
}
