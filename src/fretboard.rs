//! Guitar fret notation to chord names
//!
//! Notation lists one fret per string from low E to high E: `x32010`, or
//! dash-separated when frets go past 9 (`x-10-12-12-11-x`). `x` (or anything
//! non-numeric) mutes a string. Short notation is padded with muted strings.

use serde::{Deserialize, Serialize};

use crate::models::{ChordQuality, PitchClass};
use crate::theory::interval_pattern;

pub const STRING_COUNT: usize = 6;

/// Standard tuning, string 6 (low E) to string 1 (high E)
pub const STANDARD_TUNING: [PitchClass; STRING_COUNT] = [
    PitchClass::E,
    PitchClass::A,
    PitchClass::D,
    PitchClass::G,
    PitchClass::B,
    PitchClass::E,
];

/// A sounding string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretNote {
    pub note: String,
    /// 1-based, counted from the low E side
    pub string: usize,
    pub fret: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretboardChord {
    pub chord: String,
    pub notes: Vec<String>,
    pub positions: Vec<Option<u8>>,
    pub details: Vec<FretNote>,
}

/// Fret per string; `None` is a muted string
pub fn parse_fretboard(notation: &str) -> Vec<Option<u8>> {
    let notation = notation.trim().to_lowercase();

    let mut positions: Vec<Option<u8>> = if notation.contains('-') {
        notation.split('-').map(|fret| fret.trim().parse().ok()).collect()
    } else {
        notation
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect()
    };

    positions.resize(STRING_COUNT, None);
    positions
}

pub fn sounding_notes(positions: &[Option<u8>]) -> Vec<(PitchClass, FretNote)> {
    positions
        .iter()
        .zip(STANDARD_TUNING.iter())
        .enumerate()
        .filter_map(|(index, (fret, open))| {
            let fret = (*fret)?;
            let pitch = open.transpose(fret as i32);
            Some((
                pitch,
                FretNote {
                    note: pitch.sharp_name().to_string(),
                    string: index + 1,
                    fret,
                },
            ))
        })
        .collect()
}

/// Name the chord over `root`: the largest quality whose intervals all sound.
/// Ties go to the earlier quality; nothing matching leaves the bare root.
pub fn identify_chord(root: PitchClass, pitches: &[PitchClass]) -> String {
    let mut played = [false; 12];
    for pitch in pitches {
        let distance = (pitch.semitone() as i32 - root.semitone() as i32).rem_euclid(12);
        played[distance as usize] = true;
    }

    let mut best: Option<(ChordQuality, usize)> = None;
    for quality in ChordQuality::ALL {
        let pattern = interval_pattern(quality);
        if !pattern.iter().all(|i| played[(*i % 12) as usize]) {
            continue;
        }
        if best.map_or(true, |(_, size)| pattern.len() > size) {
            best = Some((quality, pattern.len()));
        }
    }

    let suffix = best.map_or("", |(quality, _)| quality.suffix());
    format!("{}{}", root.sharp_name(), suffix)
}

/// Detect the chord for a fret shape, taking the lowest sounding string as root
pub fn detect_chord(notation: &str) -> Option<FretboardChord> {
    let positions = parse_fretboard(notation);
    let sounding = sounding_notes(&positions);
    let (root, _) = sounding.first()?;

    let pitches: Vec<PitchClass> = sounding.iter().map(|(pitch, _)| *pitch).collect();
    let chord = identify_chord(*root, &pitches);
    log::debug!("fret shape {:?} reads as {}", notation, chord);

    let (notes, details): (Vec<String>, Vec<FretNote>) = sounding
        .into_iter()
        .map(|(_, note)| (note.note.clone(), note))
        .unzip();

    Some(FretboardChord {
        chord,
        notes,
        positions,
        details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(notation: &str) -> String {
        detect_chord(notation).unwrap().chord
    }

    #[test]
    fn test_parse_compact_and_dashed() {
        assert_eq!(
            parse_fretboard("x32010"),
            vec![None, Some(3), Some(2), Some(0), Some(1), Some(0)]
        );
        assert_eq!(
            parse_fretboard("x-10-12-12-11-x"),
            vec![None, Some(10), Some(12), Some(12), Some(11), None]
        );
    }

    #[test]
    fn test_parse_pads_and_trims() {
        assert_eq!(parse_fretboard("x787"), vec![None, Some(7), Some(8), Some(7), None, None]);
        assert_eq!(parse_fretboard("0221000").len(), STRING_COUNT);
        assert_eq!(parse_fretboard("X32010")[0], None);
    }

    #[test]
    fn test_open_chords() {
        assert_eq!(chord("x32010"), "C");
        assert_eq!(chord("320003"), "G");
        assert_eq!(chord("x02210"), "Am");
        assert_eq!(chord("022000"), "Em");
        assert_eq!(chord("xx0232"), "D");
    }

    #[test]
    fn test_sevenths_prefer_larger_pattern() {
        assert_eq!(chord("x02010"), "Am7");
        assert_eq!(chord("xx0212"), "D7");
        assert_eq!(chord("x32000"), "Cmaj7");
    }

    #[test]
    fn test_barre_chord_above_nine() {
        // A-shape barre at the 11th fret
        let result = detect_chord("x-11-13-13-13-11").unwrap();
        assert_eq!(result.chord, "G#");
        assert_eq!(result.details[0].string, 2);
        assert_eq!(result.details[0].fret, 11);
    }

    #[test]
    fn test_bare_root_when_nothing_matches() {
        assert_eq!(chord("x3xxxx"), "C");
        assert_eq!(chord("x35xxx"), "C5");
    }

    #[test]
    fn test_all_muted() {
        assert!(detect_chord("xxxxxx").is_none());
        assert!(detect_chord("").is_none());
    }

    #[test]
    fn test_notes_follow_strings() {
        let result = detect_chord("x32010").unwrap();
        assert_eq!(result.notes, vec!["C", "E", "G", "C", "E"]);
    }
}
