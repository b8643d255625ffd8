//! Chord Analyzer WASM Module
//!
//! Works out which keys and common progressions best explain the chords in a
//! chord sheet, with degree placements and suggestions per key.

pub mod models;
pub mod parse;
pub mod theory;
pub mod data;
pub mod analysis;
pub mod fretboard;
pub mod api;

// Re-export commonly used types
pub use analysis::{
    AnalysisError, AnalysisResult, AnalysisStatus, Analyzer, AnalyzerConfig, ChordPlacement,
    LineAnalysis, ProgressionMatch, ScaleMatch,
};
pub use api::ChordAnalyzer;
pub use data::{DataError, ReferenceData};
pub use models::{ChordQuality, ParsedChord, PitchClass};
pub use parse::{extract_chord_tokens, normalize_chord, parse_chord, validate_chords, ChordParseError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        wasm_warn!("logger already initialized");
    }

    log::info!("Chord Analyzer WASM module initialized");
}
