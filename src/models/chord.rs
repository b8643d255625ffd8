//! Chord model: quality enumeration and the parsed form of a chord token

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pitch_class::{Accidental, Letter, NoteName, PitchClass};

/// Canonical chord qualities understood by the interval tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChordQuality {
    Major,
    Minor,
    Dominant7,
    Major7,
    Minor7,
    Diminished,
    Diminished7,
    HalfDiminished7,
    Augmented,
    Sus2,
    Sus4,
    Add9,
    Major6,
    Minor6,
    MinorMajor7,
    Dominant9,
    Major9,
    Minor9,
    Dominant11,
    Dominant13,
    Power,
}

/// The triad a chord is built on; two chords with the same root and the
/// same family fill the same slot in a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriadFamily {
    Major,
    Minor,
    Diminished,
    Augmented,
    Suspended,
    Power,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 21] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Dominant7,
        ChordQuality::Major7,
        ChordQuality::Minor7,
        ChordQuality::Diminished,
        ChordQuality::Diminished7,
        ChordQuality::HalfDiminished7,
        ChordQuality::Augmented,
        ChordQuality::Sus2,
        ChordQuality::Sus4,
        ChordQuality::Add9,
        ChordQuality::Major6,
        ChordQuality::Minor6,
        ChordQuality::MinorMajor7,
        ChordQuality::Dominant9,
        ChordQuality::Major9,
        ChordQuality::Minor9,
        ChordQuality::Dominant11,
        ChordQuality::Dominant13,
        ChordQuality::Power,
    ];

    /// Resolve a chord suffix through the alias table.
    ///
    /// Empty suffix is a major triad and a bare "7" is a dominant seventh.
    /// Case-sensitive aliases ("M7" vs "m7") are tried first, then a
    /// lower-cased retry covers spellings like "MAJ7" or "Dim".
    pub fn from_alias(suffix: &str) -> Option<ChordQuality> {
        Self::from_exact_alias(suffix).or_else(|| Self::from_exact_alias(&suffix.to_lowercase()))
    }

    fn from_exact_alias(suffix: &str) -> Option<ChordQuality> {
        match suffix {
            "" | "M" | "maj" | "major" | "Δ" => Some(ChordQuality::Major),
            "m" | "min" | "minor" | "-" => Some(ChordQuality::Minor),
            "7" | "dom" | "dom7" => Some(ChordQuality::Dominant7),
            "maj7" | "M7" | "Δ7" | "ma7" => Some(ChordQuality::Major7),
            "m7" | "min7" | "-7" => Some(ChordQuality::Minor7),
            "dim" | "°" | "o" => Some(ChordQuality::Diminished),
            "dim7" | "°7" | "o7" => Some(ChordQuality::Diminished7),
            "m7b5" | "min7b5" | "ø" | "ø7" => Some(ChordQuality::HalfDiminished7),
            "aug" | "+" => Some(ChordQuality::Augmented),
            "sus2" => Some(ChordQuality::Sus2),
            "sus4" | "sus" => Some(ChordQuality::Sus4),
            "add9" => Some(ChordQuality::Add9),
            "6" | "maj6" => Some(ChordQuality::Major6),
            "m6" | "min6" => Some(ChordQuality::Minor6),
            "mMaj7" | "mM7" | "minmaj7" | "mmaj7" => Some(ChordQuality::MinorMajor7),
            "9" | "dom9" => Some(ChordQuality::Dominant9),
            "maj9" | "M9" => Some(ChordQuality::Major9),
            "m9" | "min9" => Some(ChordQuality::Minor9),
            "11" => Some(ChordQuality::Dominant11),
            "13" => Some(ChordQuality::Dominant13),
            "5" => Some(ChordQuality::Power),
            _ => None,
        }
    }

    /// Canonical suffix used when re-spelling a chord
    pub fn suffix(&self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::Diminished => "dim",
            ChordQuality::Diminished7 => "dim7",
            ChordQuality::HalfDiminished7 => "m7b5",
            ChordQuality::Augmented => "aug",
            ChordQuality::Sus2 => "sus2",
            ChordQuality::Sus4 => "sus4",
            ChordQuality::Add9 => "add9",
            ChordQuality::Major6 => "6",
            ChordQuality::Minor6 => "m6",
            ChordQuality::MinorMajor7 => "mMaj7",
            ChordQuality::Dominant9 => "9",
            ChordQuality::Major9 => "maj9",
            ChordQuality::Minor9 => "m9",
            ChordQuality::Dominant11 => "11",
            ChordQuality::Dominant13 => "13",
            ChordQuality::Power => "5",
        }
    }

    /// Pattern name as listed by `supported_qualities`
    pub fn name(&self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Augmented => "aug",
            other => other.suffix(),
        }
    }

    pub fn family(&self) -> TriadFamily {
        match self {
            ChordQuality::Major
            | ChordQuality::Dominant7
            | ChordQuality::Major7
            | ChordQuality::Add9
            | ChordQuality::Major6
            | ChordQuality::Dominant9
            | ChordQuality::Major9
            | ChordQuality::Dominant11
            | ChordQuality::Dominant13 => TriadFamily::Major,
            ChordQuality::Minor
            | ChordQuality::Minor7
            | ChordQuality::Minor6
            | ChordQuality::MinorMajor7
            | ChordQuality::Minor9 => TriadFamily::Minor,
            ChordQuality::Diminished
            | ChordQuality::Diminished7
            | ChordQuality::HalfDiminished7 => TriadFamily::Diminished,
            ChordQuality::Augmented => TriadFamily::Augmented,
            ChordQuality::Sus2 | ChordQuality::Sus4 => TriadFamily::Suspended,
            ChordQuality::Power => TriadFamily::Power,
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A chord token split into root, accidental flags and quality suffix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedChord {
    /// Token as written (trimmed), kept for display
    pub original: String,
    pub root: Letter,
    pub accidental_raised: bool,
    pub accidental_flat: bool,
    /// Suffix text after the root and accidental, verbatim
    pub suffix: String,
    /// Resolved quality, or `None` when the suffix is not in the alias table
    pub quality: Option<ChordQuality>,
}

impl ParsedChord {
    pub fn accidental(&self) -> Accidental {
        match (self.accidental_raised, self.accidental_flat) {
            (true, _) => Accidental::Sharp,
            (_, true) => Accidental::Flat,
            _ => Accidental::Natural,
        }
    }

    pub fn root_name(&self) -> NoteName {
        NoteName::new(self.root, self.accidental())
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.root_name().pitch_class()
    }

    pub fn family(&self) -> Option<TriadFamily> {
        self.quality.map(|q| q.family())
    }

    /// Minor or diminished sound, which lower-cases the degree label.
    ///
    /// Opaque suffixes fall back to the suffix pattern check so that
    /// "Amaj13" stays major while "Amin11" reads as minor.
    pub fn is_minor_like(&self) -> bool {
        match self.family() {
            Some(family) => matches!(family, TriadFamily::Minor | TriadFamily::Diminished),
            None => crate::parse::chord::suffix_marks_minor(&self.suffix),
        }
    }

    pub fn is_diminished(&self) -> bool {
        match self.family() {
            Some(family) => family == TriadFamily::Diminished,
            None => self.suffix.contains("dim") || self.suffix.contains('°'),
        }
    }

    /// Re-spell with the canonical suffix for the resolved quality
    pub fn canonical(&self) -> String {
        let suffix = match self.quality {
            Some(quality) => quality.suffix(),
            None => self.suffix.as_str(),
        };
        format!("{}{}", self.root_name(), suffix)
    }
}

impl fmt::Display for ParsedChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}
