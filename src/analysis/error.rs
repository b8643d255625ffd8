//! Analysis failure modes
//!
//! None of these escape `Analyzer::analyze`; they are rendered into the
//! result's `errors` list next to a status that tells callers which case
//! they are looking at.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Input had tokens, but none survived validation
    #[error("No valid chords found in input")]
    NoValidChords,

    /// Reference tables missing or empty; nothing could be scored
    #[error("Chord analysis data unavailable")]
    DataUnavailable,

    /// Scoring faulted; indicates a bug
    #[error("Analysis failed: {0}")]
    Failed(String),
}

/// Outcome class of an analysis call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    /// Scored normally (results may still be empty: nothing matched)
    Ok,
    /// No input tokens at all
    Empty,
    NoValidChords,
    DataUnavailable,
    Failed,
}

impl From<&AnalysisError> for AnalysisStatus {
    fn from(error: &AnalysisError) -> Self {
        match error {
            AnalysisError::NoValidChords => AnalysisStatus::NoValidChords,
            AnalysisError::DataUnavailable => AnalysisStatus::DataUnavailable,
            AnalysisError::Failed(_) => AnalysisStatus::Failed,
        }
    }
}
