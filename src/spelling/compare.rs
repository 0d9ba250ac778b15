//! Guess comparison and positional feedback.

/// Verdict for one submitted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub is_correct: bool,
    pub feedback: Vec<String>,
}

/// Compare `input` against `target`.
///
/// The input is trimmed and both sides are lowercased. On a mismatch the
/// feedback holds, in order, a length message when lengths differ and a
/// single message listing the 1-indexed positions (within the overlapping
/// prefix) where the characters already agree.
pub fn compare(input: &str, target: &str) -> Comparison {
    let guess: Vec<char> = input.trim().to_lowercase().chars().collect();
    let answer: Vec<char> = target.to_lowercase().chars().collect();

    if guess == answer {
        return Comparison {
            is_correct: true,
            feedback: Vec::new(),
        };
    }

    let mut feedback = Vec::new();
    if guess.len() != answer.len() {
        feedback.push(format!(
            "Your word has {} letters, but it should have {}",
            guess.len(),
            answer.len()
        ));
    }

    let matched: Vec<String> = guess
        .iter()
        .zip(answer.iter())
        .enumerate()
        .filter(|(_, (g, a))| g == a)
        .map(|(i, _)| (i + 1).to_string())
        .collect();
    if !matched.is_empty() {
        feedback.push(format!(
            "✓ Correct letters at position(s): {}",
            matched.join(", ")
        ));
    }

    Comparison {
        is_correct: false,
        feedback,
    }
}
