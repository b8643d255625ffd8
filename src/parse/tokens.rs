//! Chord token extraction and validation
//!
//! The editor hands us plain text lines; chords are whitespace/comma
//! separated words that match the chord grammar. Everything else on the
//! line (lyrics, section labels) is ignored.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Root letter, optional accidental, optional suffix from the allow-list
static CHORD_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[A-G](?:#|b|♯|♭)?(?:maj7|maj9|maj|min7|min6|min|m7b5|m7|m6|m9|m|dim7|dim|aug|dom7|7|sus[24]?|add9|6|9|11|13|5)?$",
    )
    .expect("chord grammar pattern is valid")
});

/// Same shape as `CHORD_GRAMMAR` but case-sensitive, so lyric words such as
/// "a" or "am" are not mistaken for chords when scanning free text
static SHEET_CHORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-G](?:#|b|♯|♭)?(?:maj7|maj9|maj|min7|min6|min|m7b5|m7|m6|m9|m|dim7|dim|aug|dom7|7|sus[24]?|add9|6|9|11|13|5)?$",
    )
    .expect("sheet chord pattern is valid")
});

/// A run of characters between whitespace or commas
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\s,]+").expect("word pattern is valid"));

/// Check a single (already trimmed) token against the chord grammar
pub fn is_chord_token(token: &str) -> bool {
    CHORD_GRAMMAR.is_match(token)
}

/// Check a word taken from chord-sheet text; the root must be an uppercase letter
pub fn is_sheet_chord(word: &str) -> bool {
    SHEET_CHORD.is_match(word)
}

/// Chords on one line, in order, without duplicates
pub fn extract_line_tokens(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for word in WORD.find_iter(line) {
        let word = word.as_str();
        if is_sheet_chord(word) && !tokens.iter().any(|t| t == word) {
            tokens.push(word.to_string());
        }
    }
    tokens
}

/// Chords from a block of text, line by line.
///
/// Duplicates are only collapsed within a line; `validate_chords` removes
/// the rest.
pub fn extract_chord_tokens(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .flat_map(extract_line_tokens)
        .collect()
}

/// Result of filtering raw input tokens before analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatedChords {
    pub valid: Vec<String>,
    pub errors: Vec<String>,
}

/// Validate string tokens: trimmed, non-empty, grammar-conforming, unique
pub fn validate_chords<S: AsRef<str>>(tokens: &[S]) -> ValidatedChords {
    validate_raw(tokens.iter().map(|t| Some(t.as_ref())))
}

/// Validate untyped values coming from JS; non-strings are reported by position
pub fn validate_values(values: &[serde_json::Value]) -> ValidatedChords {
    validate_raw(values.iter().map(|v| v.as_str()))
}

fn validate_raw<'a>(tokens: impl Iterator<Item = Option<&'a str>>) -> ValidatedChords {
    let mut result = ValidatedChords::default();

    for (index, token) in tokens.enumerate() {
        let Some(token) = token else {
            result.errors.push(format!("Chord at position {} is not a string", index + 1));
            continue;
        };

        let clean = token.trim();
        if clean.is_empty() {
            continue;
        }

        if !is_chord_token(clean) {
            log::debug!("rejecting chord token {:?}", clean);
            result.errors.push(format!("Invalid chord format: \"{}\"", clean));
            continue;
        }

        if !result.valid.iter().any(|c| c == clean) {
            result.valid.push(clean.to_string());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_accepts_common_chords() {
        for token in ["C", "Am", "F#m7", "Bbmaj7", "Gsus4", "Dsus", "Eadd9", "A♭", "C13", "cmaj7"] {
            assert!(is_chord_token(token), "{}", token);
        }
    }

    #[test]
    fn test_grammar_rejects_non_chords() {
        for token in ["H", "H#m", "C#b", "Verse", "X7", "C7#9", "", "Am7add"] {
            assert!(!is_chord_token(token), "{}", token);
        }
    }

    #[test]
    fn test_extract_line_tokens() {
        let tokens = extract_line_tokens("C  Am, F G   C");
        assert_eq!(tokens, vec!["C", "Am", "F", "G"]);
    }

    #[test]
    fn test_extract_skips_lyrics() {
        let tokens = extract_line_tokens("Verse: C G when I find myself Am");
        assert_eq!(tokens, vec!["C", "G", "Am"]);
    }

    #[test]
    fn test_extract_ignores_lowercase_lyric_words() {
        assert!(extract_chord_tokens("I am a fool").is_empty());
        let tokens = extract_chord_tokens("G D Em C\nI am a fool for you\nbe a friend");
        assert_eq!(tokens, vec!["G", "D", "Em", "C"]);
    }

    #[test]
    fn test_validation_stays_case_insensitive() {
        assert!(is_chord_token("am"));
        assert!(!is_sheet_chord("am"));
        assert!(!is_sheet_chord("cmaj7"));
        assert!(is_sheet_chord("Cmaj7"));
    }

    #[test]
    fn test_extract_multiple_lines() {
        let tokens = extract_chord_tokens("C G Am F\n\nDm G C\n");
        assert_eq!(tokens, vec!["C", "G", "Am", "F", "Dm", "G", "C"]);
    }

    #[test]
    fn test_validate_dedupes_and_reports() {
        let result = validate_chords(&["C", " Am ", "C", "", "Foo", "Db", "C#"]);
        assert_eq!(result.valid, vec!["C", "Am", "Db", "C#"]);
        assert_eq!(result.errors, vec!["Invalid chord format: \"Foo\""]);
    }

    #[test]
    fn test_validate_values_reports_non_strings() {
        let values = vec![
            serde_json::json!("C"),
            serde_json::json!(42),
            serde_json::json!("G"),
        ];
        let result = validate_values(&values);
        assert_eq!(result.valid, vec!["C", "G"]);
        assert_eq!(result.errors, vec!["Chord at position 2 is not a string"]);
    }
}
