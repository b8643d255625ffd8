//! Scale matching: score every key against the input chord set

use crate::data::{KeyEntry, KEY_ROW_LENGTH};
use crate::models::{Degree, KeyName};

use super::config::AnalyzerConfig;
use super::equivalence::{ChordLabel, MatchKind};
use super::result::{ChordPlacement, ScaleMatch};

/// A key row with its chords pre-parsed
#[derive(Debug, Clone)]
pub struct PreparedKey {
    pub name: String,
    pub chords: Vec<ChordLabel>,
    /// Plain major or natural minor; earns the purity bonus
    pub plain: bool,
}

impl PreparedKey {
    pub fn new(entry: &KeyEntry) -> Self {
        Self {
            name: entry.name.clone(),
            chords: entry.chords.iter().map(|c| ChordLabel::new(c.as_str())).collect(),
            plain: KeyName::parse(&entry.name).map_or(false, |key| key.mode.is_plain()),
        }
    }

    /// Degree of `input` in this key: first exact hit, else first enharmonic hit
    pub fn find(&self, input: &ChordLabel) -> Option<(Degree, MatchKind)> {
        let mut enharmonic = None;
        for (degree, chord) in Degree::ALL.into_iter().zip(&self.chords) {
            match input.match_kind(chord) {
                Some(MatchKind::Exact) => return Some((degree, MatchKind::Exact)),
                Some(MatchKind::Enharmonic) if enharmonic.is_none() => enharmonic = Some(degree),
                _ => {}
            }
        }
        enharmonic.map(|degree| (degree, MatchKind::Enharmonic))
    }

    pub fn contains(&self, input: &ChordLabel) -> bool {
        self.chords.iter().any(|chord| input.matches(chord))
    }
}

/// Roman numeral for a matched degree; lowercase when the input chord is minor or diminished
pub fn placement_label(label: &str, input: &ChordLabel) -> String {
    if input.is_minor_like() {
        label.to_lowercase()
    } else {
        label.to_string()
    }
}

/// Score one key; `None` when no input chord belongs to it
pub fn score_key(
    key: &PreparedKey,
    inputs: &[ChordLabel],
    degree_labels: &[String; KEY_ROW_LENGTH],
    config: &AnalyzerConfig,
) -> Option<ScaleMatch> {
    let mut score = 0.0;
    let mut used = Vec::new();
    let mut chord_placements = Vec::with_capacity(inputs.len());

    for input in inputs {
        let placement = match key.find(input) {
            Some((degree, kind)) => {
                score += match kind {
                    MatchKind::Exact => config.exact_match_weight,
                    MatchKind::Enharmonic => config.enharmonic_match_weight,
                };
                used.push(degree);
                placement_label(&degree_labels[degree.index()], input)
            }
            None => String::new(),
        };
        chord_placements.push(ChordPlacement {
            chord: input.text.clone(),
            placement,
        });
    }

    if score <= 0.0 {
        return None;
    }
    if key.plain {
        score += config.purity_bonus;
    }

    let suggestions = Degree::ALL
        .into_iter()
        .zip(&key.chords)
        .filter(|(degree, chord)| {
            !degree.is_tonic()
                && !used.contains(degree)
                && !chord.is_diminished()
                && !inputs.iter().any(|input| input.text == chord.text)
        })
        .map(|(_, chord)| chord.text.clone())
        .take(config.max_suggestions)
        .collect();

    let full_scale_chords = key
        .chords
        .iter()
        .zip(degree_labels.iter())
        .map(|(chord, label)| ChordPlacement {
            chord: chord.text.clone(),
            placement: label.clone(),
        })
        .collect();

    Some(ScaleMatch {
        key: key.name.clone(),
        score,
        chord_placements,
        suggestions,
        full_scale_chords,
    })
}

/// Every key with a positive score, best first; ties keep table order
pub fn match_scales(
    keys: &[PreparedKey],
    inputs: &[ChordLabel],
    degree_labels: &[String; KEY_ROW_LENGTH],
    config: &AnalyzerConfig,
) -> Vec<ScaleMatch> {
    let mut matches: Vec<ScaleMatch> = keys
        .iter()
        .filter_map(|key| score_key(key, inputs, degree_labels, config))
        .collect();
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}
