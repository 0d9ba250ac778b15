//! Input validation for the word-management surface.
//!
//! Words are what a child will be asked to type, so they are kept to
//! letters with the occasional inner apostrophe or hyphen ("don't",
//! "ice-cream"). Categories are free text shown in filter menus.

/// Longest word or category accepted.
pub const MAX_WORD_CHARS: usize = 32;
pub const MAX_CATEGORY_CHARS: usize = 32;

/// Word/category validation errors with helpful messages
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordInputError {
    #[error("Word cannot be empty")]
    Empty,

    #[error("Word is too long (maximum {max} letters)")]
    TooLong { max: usize },

    #[error("Word contains characters a child cannot be asked to spell: {chars}")]
    InvalidCharacters { chars: String },

    #[error("Word cannot start or end with punctuation")]
    EdgePunctuation,

    #[error("Category cannot be empty")]
    EmptyCategory,

    #[error("Category is too long (maximum {max} characters)")]
    CategoryTooLong { max: usize },

    #[error("Category contains control characters")]
    CategoryControl,
}

/// Trim, lowercase and check a target spelling.
pub fn validate_word(raw: &str) -> Result<String, WordInputError> {
    let word = raw.trim().to_lowercase();
    if word.is_empty() {
        return Err(WordInputError::Empty);
    }
    if word.chars().count() > MAX_WORD_CHARS {
        return Err(WordInputError::TooLong {
            max: MAX_WORD_CHARS,
        });
    }

    let mut invalid: Vec<char> = word
        .chars()
        .filter(|c| !(c.is_alphabetic() || *c == '\'' || *c == '-'))
        .collect();
    if !invalid.is_empty() {
        invalid.sort_unstable();
        invalid.dedup();
        return Err(WordInputError::InvalidCharacters {
            chars: invalid.into_iter().collect(),
        });
    }

    let is_punct = |c: char| c == '\'' || c == '-';
    if word.starts_with(is_punct) || word.ends_with(is_punct) {
        return Err(WordInputError::EdgePunctuation);
    }
    Ok(word)
}

/// Trim and check a category label. Case is preserved.
pub fn validate_category(raw: &str) -> Result<String, WordInputError> {
    let cat = raw.trim();
    if cat.is_empty() {
        return Err(WordInputError::EmptyCategory);
    }
    if cat.chars().count() > MAX_CATEGORY_CHARS {
        return Err(WordInputError::CategoryTooLong {
            max: MAX_CATEGORY_CHARS,
        });
    }
    if cat.chars().any(|c| c.is_control()) {
        return Err(WordInputError::CategoryControl);
    }
    Ok(cat.to_string())
}

/// Parse a filter argument: `all` (any case) or blank means no filter.
pub fn parse_filter_arg(raw: &str) -> Option<String> {
    let t = raw.trim();
    if t.is_empty() || t.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(t.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_normalization() {
        assert_eq!(validate_word("  Apple ").unwrap(), "apple");
        assert_eq!(validate_word("don't").unwrap(), "don't");
        assert_eq!(validate_word("ice-cream").unwrap(), "ice-cream");
        assert_eq!(validate_word("Café").unwrap(), "café");
    }

    #[test]
    fn test_word_rejections() {
        assert_eq!(validate_word("   "), Err(WordInputError::Empty));
        assert!(matches!(
            validate_word("two words"),
            Err(WordInputError::InvalidCharacters { .. })
        ));
        assert!(matches!(
            validate_word("r2d2"),
            Err(WordInputError::InvalidCharacters { chars }) if chars == "2"
        ));
        assert_eq!(validate_word("-ish"), Err(WordInputError::EdgePunctuation));
        assert_eq!(validate_word("dogs'"), Err(WordInputError::EdgePunctuation));
        let long = "a".repeat(MAX_WORD_CHARS + 1);
        assert!(matches!(validate_word(&long), Err(WordInputError::TooLong { .. })));
    }

    #[test]
    fn test_category_validation() {
        assert_eq!(validate_category(" Animals ").unwrap(), "Animals");
        assert_eq!(validate_category(""), Err(WordInputError::EmptyCategory));
        assert_eq!(validate_category("a\tb"), Err(WordInputError::CategoryControl));
        let long = "x".repeat(MAX_CATEGORY_CHARS + 1);
        assert!(matches!(
            validate_category(&long),
            Err(WordInputError::CategoryTooLong { .. })
        ));
    }

    #[test]
    fn test_filter_arg() {
        assert_eq!(parse_filter_arg("ALL"), None);
        assert_eq!(parse_filter_arg(" "), None);
        assert_eq!(parse_filter_arg(" Nature "), Some("Nature".to_string()));
    }
}
