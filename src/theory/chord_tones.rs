//! Chord tones: note names, intervals and frequencies for a chord symbol

use serde::{Deserialize, Serialize};

use crate::models::{ChordQuality, IntervalPosition, PitchClass};
use crate::parse::{parse_chord, ChordParseError};
use super::tables::interval_pattern;

/// Concert pitch reference
const A4_FREQUENCY: f64 = 440.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordInfo {
    pub chord: String,
    pub root: String,
    pub quality: String,
    pub notes: Vec<String>,
    pub intervals: Vec<u8>,
    pub positions: Vec<IntervalPosition>,
    pub frequencies: Vec<f64>,
}

/// Equal-tempered frequency of a pitch class in a scientific-pitch octave
pub fn note_frequency(pitch: PitchClass, octave: i32) -> f64 {
    let midi = 12 * (octave + 1) + pitch.semitone() as i32;
    A4_FREQUENCY * 2f64.powf((midi - 69) as f64 / 12.0)
}

/// Interval labels of each note relative to a root
pub fn degree_positions(root: PitchClass, notes: &[PitchClass]) -> Vec<IntervalPosition> {
    notes
        .iter()
        .map(|note| {
            let distance = (note.semitone() as i32 - root.semitone() as i32).rem_euclid(12);
            IntervalPosition::from_semitones(distance as u8)
        })
        .collect()
}

/// Spell out a chord symbol.
///
/// Unknown suffixes fall back to the major triad on the same root.
/// Notes above the octave are voiced in the next octave up.
pub fn chord_info(token: &str, octave: i32) -> Result<ChordInfo, ChordParseError> {
    let parsed = parse_chord(token)?;
    let quality = parsed.quality.unwrap_or_else(|| {
        log::warn!("unknown chord quality {:?}, falling back to major", parsed.suffix);
        ChordQuality::Major
    });
    let root = parsed.pitch_class();
    let intervals = interval_pattern(quality);

    let pitches: Vec<PitchClass> = intervals.iter().map(|i| root.transpose(*i as i32)).collect();
    let frequencies = intervals
        .iter()
        .zip(&pitches)
        .map(|(interval, pitch)| note_frequency(*pitch, octave + (*interval / 12) as i32))
        .collect();

    Ok(ChordInfo {
        chord: parsed.original.clone(),
        root: parsed.root_name().to_string(),
        quality: quality.name().to_string(),
        notes: pitches.iter().map(|p| p.sharp_name().to_string()).collect(),
        intervals: intervals.to_vec(),
        positions: degree_positions(root, &pitches),
        frequencies,
    })
}
