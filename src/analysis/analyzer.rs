//! The analysis entry point
//!
//! `Analyzer` owns an immutable reference dataset and configuration. Each
//! call validates its input, normalizes the surviving tokens and runs both
//! matchers; it never fails outright, every problem ends up in the result's
//! `errors` list and `status`.

use std::panic::{self, AssertUnwindSafe};

use crate::data::{self, ReferenceData};
use crate::parse::{
    extract_chord_tokens, extract_line_tokens, normalize_chord, validate_chords, validate_values,
    ValidatedChords,
};
use crate::theory::KeyRelationships;

use super::config::{AnalyzerConfig, KeyAnchor};
use super::equivalence::ChordLabel;
use super::error::{AnalysisError, AnalysisStatus};
use super::progression_matcher::{self, PreparedProgression};
use super::result::{AnalysisResult, LineAnalysis, ProgressionMatch, ScaleMatch};
use super::scale_matcher::{self, PreparedKey};

#[derive(Debug, Clone)]
pub struct Analyzer {
    data: ReferenceData,
    keys: Vec<PreparedKey>,
    progressions: Vec<PreparedProgression>,
    relationships: KeyRelationships,
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(data: ReferenceData, config: AnalyzerConfig) -> Self {
        let keys = data.keys.iter().map(PreparedKey::new).collect();
        let progressions = data.progressions.iter().map(PreparedProgression::new).collect();
        Self {
            data,
            keys,
            progressions,
            relationships: KeyRelationships::standard(),
            config,
        }
    }

    /// Built-in tables, default configuration
    pub fn with_defaults() -> data::Result<Self> {
        Ok(Self::new(ReferenceData::builtin()?, AnalyzerConfig::default()))
    }

    /// An analyzer with no data; every analysis reports `DataUnavailable`
    pub fn unloaded(config: AnalyzerConfig) -> Self {
        Self::new(ReferenceData::default(), config)
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Key table present; progressions alone cannot anchor an analysis
    pub fn is_ready(&self) -> bool {
        !self.keys.is_empty()
    }

    /// Analyze a list of chord tokens
    pub fn analyze<S: AsRef<str>>(&self, tokens: &[S]) -> AnalysisResult {
        self.run(validate_chords(tokens))
    }

    /// Analyze untyped JS values; non-strings become errors
    pub fn analyze_values(&self, values: &[serde_json::Value]) -> AnalysisResult {
        self.run(validate_values(values))
    }

    /// Analyze every chord found in a block of text
    pub fn analyze_text(&self, text: &str) -> AnalysisResult {
        self.analyze(&extract_chord_tokens(text))
    }

    /// Analyze each line separately, skipping lines without chords
    pub fn analyze_lines(&self, text: &str) -> Vec<LineAnalysis> {
        text.lines()
            .enumerate()
            .filter_map(|(index, line)| {
                let tokens = extract_line_tokens(line);
                if tokens.is_empty() {
                    return None;
                }
                Some(LineAnalysis {
                    index,
                    line: line.to_string(),
                    analysis: self.analyze(&tokens),
                })
            })
            .collect()
    }

    /// Score every key against already-normalized chords
    pub fn match_scales<S: AsRef<str>>(&self, chords: &[S]) -> Vec<ScaleMatch> {
        let labels = to_labels(chords);
        scale_matcher::match_scales(&self.keys, &labels, &self.data.degree_labels, &self.config)
    }

    /// Score every progression, anchored per the configured key rule
    pub fn match_progressions<S: AsRef<str>>(&self, chords: &[S]) -> Vec<ProgressionMatch> {
        let labels = to_labels(chords);
        let scales = self.anchor_scales(&labels);
        let anchor = self.anchor_key(&labels, &scales);
        progression_matcher::match_progressions(
            &self.progressions,
            &labels,
            anchor,
            &self.relationships,
            &self.config,
        )
    }

    /// How closely a progression's key relates to the key the input sits in
    pub fn key_relevance<S: AsRef<str>>(&self, chords: &[S], progression_key: &str) -> f64 {
        let labels = to_labels(chords);
        let scales = self.anchor_scales(&labels);
        progression_matcher::key_relevance(
            self.anchor_key(&labels, &scales),
            progression_key,
            &self.relationships,
            &self.config,
        )
    }

    /// Scale matches, only when the anchor rule needs them
    fn anchor_scales(&self, labels: &[ChordLabel]) -> Vec<ScaleMatch> {
        match self.config.key_anchor {
            KeyAnchor::BestScale => {
                scale_matcher::match_scales(&self.keys, labels, &self.data.degree_labels, &self.config)
            }
            KeyAnchor::FirstContaining => Vec::new(),
        }
    }

    fn anchor_key<'a>(&'a self, labels: &[ChordLabel], scales: &'a [ScaleMatch]) -> Option<&'a str> {
        match self.config.key_anchor {
            KeyAnchor::BestScale => scales.first().map(|s| s.key.as_str()),
            KeyAnchor::FirstContaining => self
                .keys
                .iter()
                .find(|key| labels.iter().any(|label| key.contains(label)))
                .map(|key| key.name.as_str()),
        }
    }

    fn run(&self, validated: ValidatedChords) -> AnalysisResult {
        let ValidatedChords { valid, errors } = validated;

        if valid.is_empty() && errors.is_empty() {
            return AnalysisResult::empty();
        }

        let input_chords = normalize_all(&valid);

        if !self.is_ready() {
            log::warn!("analysis requested before reference data was loaded");
            return AnalysisResult::failure(AnalysisError::DataUnavailable, input_chords, errors);
        }
        if input_chords.is_empty() {
            return AnalysisResult::failure(AnalysisError::NoValidChords, input_chords, errors);
        }

        let scored = panic::catch_unwind(AssertUnwindSafe(|| self.score(&input_chords)));
        match scored {
            Ok((scales, progressions)) => {
                log::debug!(
                    "analyzed {} chords: {} scales, {} progressions, best {:?}",
                    input_chords.len(),
                    scales.len(),
                    progressions.len(),
                    scales.first().map(|s| s.key.as_str())
                );
                AnalysisResult {
                    scales,
                    progressions,
                    input_chords,
                    errors,
                    status: AnalysisStatus::Ok,
                }
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                log::error!("chord analysis failed: {}", message);
                AnalysisResult::failure(AnalysisError::Failed(message), input_chords, errors)
            }
        }
    }

    fn score(&self, chords: &[String]) -> (Vec<ScaleMatch>, Vec<ProgressionMatch>) {
        let labels = to_labels(chords);
        let scales =
            scale_matcher::match_scales(&self.keys, &labels, &self.data.degree_labels, &self.config);
        let anchor = self.anchor_key(&labels, &scales);
        let progressions = progression_matcher::match_progressions(
            &self.progressions,
            &labels,
            anchor,
            &self.relationships,
            &self.config,
        );
        (scales, progressions)
    }
}

fn to_labels<S: AsRef<str>>(chords: &[S]) -> Vec<ChordLabel> {
    chords.iter().map(|c| ChordLabel::new(c.as_ref())).collect()
}

/// Normalize spelling; tokens that collapse onto an earlier one are dropped
fn normalize_all(chords: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(chords.len());
    for chord in chords {
        let chord = normalize_chord(chord);
        if !normalized.contains(&chord) {
            normalized.push(chord);
        }
    }
    normalized
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown error".to_string()
    }
}
