//! Chord analysis: scale and progression matching over reference data

pub mod analyzer;
pub mod config;
pub mod equivalence;
pub mod error;
pub mod progression_matcher;
pub mod result;
pub mod scale_matcher;

pub use analyzer::Analyzer;
pub use config::{AnalyzerConfig, ConfigError, KeyAnchor, RelevanceWeights};
pub use equivalence::{ChordLabel, MatchKind};
pub use error::{AnalysisError, AnalysisStatus};
pub use result::{AnalysisResult, ChordPlacement, LineAnalysis, ProgressionMatch, ScaleMatch};
