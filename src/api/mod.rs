//! Chord Analyzer WASM API
//!
//! The JavaScript-facing surface: the `ChordAnalyzer` class plus a few free
//! functions for single chords and fret shapes.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `analyzer`: The `ChordAnalyzer` class and free chord functions

pub mod helpers;
pub mod analyzer;

pub use analyzer::{
    chord_info_js, detect_fretboard_chord_js, enharmonic_equivalent_js, extract_chord_tokens_js,
    parse_chord_js, supported_qualities_js, ChordAnalyzer,
};
