//! Chord label equivalence used by both matchers
//!
//! Two labels name the same slot when they share a root spelling and a
//! triad family: "Am" fills the "Amin7" slot, "G" fills "Gdom7". Different
//! black-key spellings of the same root ("C#" vs "Db") are an enharmonic
//! match. Labels that are not chords (Roman numerals in progression tables)
//! only match by string equality.

use crate::models::{ParsedChord, TriadFamily};
use crate::parse::parse_chord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Enharmonic,
}

/// A chord label with its parse cached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordLabel {
    pub text: String,
    pub chord: Option<ParsedChord>,
}

/// What a chord sounds like, minus its root
#[derive(Debug, PartialEq, Eq)]
enum Shape<'a> {
    Family(TriadFamily),
    Opaque(&'a str),
}

impl ChordLabel {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let chord = parse_chord(&text).ok();
        Self { text, chord }
    }

    pub fn is_minor_like(&self) -> bool {
        self.chord.as_ref().map_or(false, ParsedChord::is_minor_like)
    }

    pub fn is_diminished(&self) -> bool {
        match &self.chord {
            Some(chord) => chord.is_diminished(),
            None => self.text.contains("dim") || self.text.contains('°'),
        }
    }

    /// Triad family, if the label parsed to a known quality
    pub fn family(&self) -> Option<TriadFamily> {
        self.chord.as_ref().and_then(ParsedChord::family)
    }

    pub fn match_kind(&self, other: &ChordLabel) -> Option<MatchKind> {
        if self.text == other.text {
            return Some(MatchKind::Exact);
        }
        let (a, b) = (self.chord.as_ref()?, other.chord.as_ref()?);
        if shape(a) != shape(b) {
            return None;
        }
        if a.root_name() == b.root_name() {
            Some(MatchKind::Exact)
        } else if a.root_name().enharmonic() == Some(b.root_name()) {
            Some(MatchKind::Enharmonic)
        } else {
            None
        }
    }

    pub fn matches(&self, other: &ChordLabel) -> bool {
        self.match_kind(other).is_some()
    }
}

fn shape(chord: &ParsedChord) -> Shape<'_> {
    match chord.family() {
        Some(family) => Shape::Family(family),
        None => Shape::Opaque(&chord.suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(a: &str, b: &str) -> Option<MatchKind> {
        ChordLabel::new(a).match_kind(&ChordLabel::new(b))
    }

    #[test]
    fn test_identical_strings() {
        assert_eq!(kind("C", "C"), Some(MatchKind::Exact));
        assert_eq!(kind("vi", "vi"), Some(MatchKind::Exact));
    }

    #[test]
    fn test_same_family_is_exact() {
        assert_eq!(kind("Am", "Amin7"), Some(MatchKind::Exact));
        assert_eq!(kind("G", "Gdom7"), Some(MatchKind::Exact));
        assert_eq!(kind("F", "Fmaj7"), Some(MatchKind::Exact));
        assert_eq!(kind("Bdim", "Bm7b5"), Some(MatchKind::Exact));
    }

    #[test]
    fn test_different_family_does_not_match() {
        assert_eq!(kind("D", "Dmin7"), None);
        assert_eq!(kind("Cm", "C"), None);
        assert_eq!(kind("Csus4", "C"), None);
    }

    #[test]
    fn test_enharmonic_roots() {
        assert_eq!(kind("C#", "Db"), Some(MatchKind::Enharmonic));
        assert_eq!(kind("Bbm", "A#m7"), Some(MatchKind::Enharmonic));
        assert_eq!(kind("E#", "F"), None);
    }

    #[test]
    fn test_roman_numerals_only_match_exactly() {
        assert_eq!(kind("V", "v"), None);
        assert_eq!(kind("IV", "IV"), Some(MatchKind::Exact));
    }

    #[test]
    fn test_opaque_suffixes_compare_verbatim() {
        assert_eq!(kind("C7#9", "C7#9"), Some(MatchKind::Exact));
        assert_eq!(kind("C#7#9", "Db7#9"), Some(MatchKind::Enharmonic));
        assert_eq!(kind("C7#9", "C7b9"), None);
    }
}
