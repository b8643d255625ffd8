//! Chord token parsing and spelling normalization
//!
//! A token is a root letter, at most one accidental directly after it, and
//! a free-form quality suffix. Accidentals are only read in the slot right
//! after the root, so the "b5" in "Cm7b5" is part of the suffix.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::{ChordQuality, Letter, ParsedChord};
use crate::models::pitch_class::Accidental;

/// Suffixes that read as minor or diminished: m, min, -, dim, °
static MINOR_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:m|min|-|dim|°)").expect("minor suffix pattern is valid"));

/// "maj"/"may" start with "m" but are major
static MAJOR_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ma[jy]").expect("major suffix pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordParseError {
    #[error("empty chord token")]
    Empty,

    #[error("invalid chord root in \"{0}\"")]
    InvalidRoot(String),

    /// Both a raised and a flat marker on the same root ("C#b")
    #[error("conflicting accidentals in \"{0}\"")]
    ConflictingAccidentals(String),

    /// The same marker twice ("C##"); double accidentals are not chord roots
    #[error("repeated accidental in \"{0}\"")]
    RepeatedAccidental(String),
}

/// Parse a chord token such as "C#m7" or "Bbsus4"
pub fn parse_chord(token: &str) -> Result<ParsedChord, ChordParseError> {
    let original = token.trim();
    let compact: String = original.chars().filter(|c| !c.is_whitespace()).collect();
    let mut chars = compact.chars().peekable();

    let first = chars.next().ok_or(ChordParseError::Empty)?;
    let root = Letter::from_char(first)
        .ok_or_else(|| ChordParseError::InvalidRoot(original.to_string()))?;

    let mut raised = false;
    let mut flat = false;
    while let Some(accidental) = chars.peek().copied().and_then(Accidental::from_char) {
        match accidental {
            Accidental::Sharp if raised => {
                return Err(ChordParseError::RepeatedAccidental(original.to_string()))
            }
            Accidental::Flat if flat => {
                return Err(ChordParseError::RepeatedAccidental(original.to_string()))
            }
            Accidental::Sharp if flat => {
                return Err(ChordParseError::ConflictingAccidentals(original.to_string()))
            }
            Accidental::Flat if raised => {
                return Err(ChordParseError::ConflictingAccidentals(original.to_string()))
            }
            Accidental::Sharp => raised = true,
            Accidental::Flat => flat = true,
            Accidental::Natural => {}
        }
        chars.next();
    }

    let suffix: String = chars.collect();
    let quality = ChordQuality::from_alias(&suffix);

    Ok(ParsedChord {
        original: original.to_string(),
        root,
        accidental_raised: raised,
        accidental_flat: flat,
        suffix,
        quality,
    })
}

/// Normalize chord spelling without changing which chord it names.
///
/// Trims and drops inner whitespace, turns ♯/♭ into #/b and the European
/// "H" root into "B". Enharmonic respelling is a separate lookup
/// (`theory::enharmonic_equivalent`); this function is idempotent.
pub fn normalize_chord(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for (i, c) in token.trim().chars().filter(|c| !c.is_whitespace()).enumerate() {
        match c {
            'H' if i == 0 => out.push('B'),
            'h' if i == 0 => out.push('b'),
            '♯' => out.push('#'),
            '♭' => out.push('b'),
            other => out.push(other),
        }
    }
    out
}

/// Whether an unrecognized suffix still reads as minor/diminished
pub fn suffix_marks_minor(suffix: &str) -> bool {
    MINOR_SUFFIX.is_match(suffix) && !MAJOR_SUFFIX.is_match(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Letter;

    #[test]
    fn test_parse_plain_major() {
        let chord = parse_chord("C").unwrap();
        assert_eq!(chord.root, Letter::C);
        assert!(!chord.accidental_raised);
        assert!(!chord.accidental_flat);
        assert_eq!(chord.suffix, "");
        assert_eq!(chord.quality, Some(ChordQuality::Major));
    }

    #[test]
    fn test_parse_sharp_minor_seventh() {
        let chord = parse_chord(" C#m7 ").unwrap();
        assert_eq!(chord.original, "C#m7");
        assert_eq!(chord.root, Letter::C);
        assert!(chord.accidental_raised);
        assert_eq!(chord.quality, Some(ChordQuality::Minor7));
    }

    #[test]
    fn test_parse_flat_sus() {
        let chord = parse_chord("Bbsus4").unwrap();
        assert_eq!(chord.root, Letter::B);
        assert!(chord.accidental_flat);
        assert_eq!(chord.suffix, "sus4");
        assert_eq!(chord.quality, Some(ChordQuality::Sus4));
    }

    #[test]
    fn test_flat_inside_suffix_is_not_an_accidental() {
        let chord = parse_chord("Cm7b5").unwrap();
        assert!(!chord.accidental_flat);
        assert_eq!(chord.quality, Some(ChordQuality::HalfDiminished7));
    }

    #[test]
    fn test_unicode_accidentals() {
        let chord = parse_chord("F♯m").unwrap();
        assert!(chord.accidental_raised);
        assert_eq!(chord.canonical(), "F#m");
        assert!(parse_chord("E♭").unwrap().accidental_flat);
    }

    #[test]
    fn test_h_is_b() {
        let chord = parse_chord("H").unwrap();
        assert_eq!(chord.root, Letter::B);
        assert_eq!(chord.canonical(), "B");
    }

    #[test]
    fn test_double_markers_rejected() {
        assert_eq!(
            parse_chord("C#b"),
            Err(ChordParseError::ConflictingAccidentals("C#b".to_string()))
        );
        assert_eq!(
            parse_chord("Cb#m"),
            Err(ChordParseError::ConflictingAccidentals("Cb#m".to_string()))
        );
        assert_eq!(
            parse_chord("C##"),
            Err(ChordParseError::RepeatedAccidental("C##".to_string()))
        );
    }

    #[test]
    fn test_invalid_roots() {
        assert_eq!(parse_chord(""), Err(ChordParseError::Empty));
        assert_eq!(parse_chord("   "), Err(ChordParseError::Empty));
        assert!(matches!(parse_chord("X7"), Err(ChordParseError::InvalidRoot(_))));
        assert!(matches!(parse_chord("vi"), Err(ChordParseError::InvalidRoot(_))));
    }

    #[test]
    fn test_opaque_suffix_kept() {
        let chord = parse_chord("C7#9").unwrap();
        assert_eq!(chord.quality, None);
        assert_eq!(chord.suffix, "7#9");
        assert_eq!(chord.canonical(), "C7#9");
    }

    #[test]
    fn test_canonical_is_stable() {
        for token in ["C", "Am", "Dmin7", "Gdom7", "Bbsus4", "F#dim", "Ebmaj7", "Caug", "D-7"] {
            let first = parse_chord(token).unwrap();
            let second = parse_chord(&first.canonical()).unwrap();
            assert_eq!(first.root_name(), second.root_name(), "{}", token);
            assert_eq!(first.quality, second.quality, "{}", token);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for token in ["C♯m", " H7 ", "Bb", "hm", "Am", "E♭ maj7"] {
            let once = normalize_chord(token);
            assert_eq!(normalize_chord(&once), once, "{}", token);
        }
        assert_eq!(normalize_chord("C♯m"), "C#m");
        assert_eq!(normalize_chord("H7"), "B7");
    }

    #[test]
    fn test_minor_suffix_detection() {
        assert!(suffix_marks_minor("m"));
        assert!(suffix_marks_minor("min11"));
        assert!(suffix_marks_minor("dim"));
        assert!(suffix_marks_minor("°"));
        assert!(!suffix_marks_minor("maj13"));
        assert!(!suffix_marks_minor("may"));
        assert!(!suffix_marks_minor("7#9"));
    }

    #[test]
    fn test_minor_like_uses_quality() {
        assert!(parse_chord("Am").unwrap().is_minor_like());
        assert!(parse_chord("Bdim").unwrap().is_minor_like());
        assert!(!parse_chord("Amaj7").unwrap().is_minor_like());
        assert!(!parse_chord("G7").unwrap().is_minor_like());
    }
}
