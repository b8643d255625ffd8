//! Analysis result types, serialized in the shape the editor UI reads

use serde::{Deserialize, Serialize};

use super::error::{AnalysisError, AnalysisStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordPlacement {
    pub chord: String,
    /// Roman numeral, or empty when the chord is not in the key
    pub placement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleMatch {
    pub key: String,
    pub score: f64,
    pub chord_placements: Vec<ChordPlacement>,
    pub suggestions: Vec<String>,
    pub full_scale_chords: Vec<ChordPlacement>,
}

impl ScaleMatch {
    /// One-line summary: `C Major: C (I), Am (vi) | Try: Dm, Em [4.1]`
    pub fn summary(&self) -> String {
        let placements = self
            .chord_placements
            .iter()
            .filter(|p| !p.placement.is_empty())
            .map(|p| format!("{} ({})", p.chord, p.placement))
            .collect::<Vec<_>>()
            .join(", ");

        let mut line = format!("{}: {}", self.key, placements);
        if !self.suggestions.is_empty() {
            line.push_str(&format!(" | Try: {}", self.suggestions.join(", ")));
        }
        line.push_str(&format!(" [{:.1}]", self.score));
        line
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionMatch {
    pub name: String,
    pub chords: Vec<String>,
    pub match_count: usize,
    pub sequence_score: usize,
    pub key_relevance: f64,
}

impl ProgressionMatch {
    /// Ranking key: relevance plus positional bonus
    pub fn rank(&self) -> f64 {
        self.key_relevance + self.sequence_score as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub scales: Vec<ScaleMatch>,
    pub progressions: Vec<ProgressionMatch>,
    pub input_chords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    pub status: AnalysisStatus,
}

impl AnalysisResult {
    pub fn empty() -> Self {
        Self {
            scales: Vec::new(),
            progressions: Vec::new(),
            input_chords: Vec::new(),
            errors: Vec::new(),
            status: AnalysisStatus::Empty,
        }
    }

    /// Empty result carrying a failure; earlier warnings come first
    pub fn failure(error: AnalysisError, input_chords: Vec<String>, mut errors: Vec<String>) -> Self {
        errors.push(error.to_string());
        Self {
            scales: Vec::new(),
            progressions: Vec::new(),
            input_chords,
            errors,
            status: AnalysisStatus::from(&error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == AnalysisStatus::Ok
    }

    pub fn best_scale(&self) -> Option<&ScaleMatch> {
        self.scales.first()
    }
}

/// Analysis of one editor line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAnalysis {
    pub index: usize,
    pub line: String,
    pub analysis: AnalysisResult,
}
