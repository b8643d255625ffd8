//! Parsing module for the Chord Analyzer
//!
//! Turns editor text and raw chord tokens into structured chords.

pub mod chord;
pub mod tokens;

// Re-export commonly used items
pub use chord::{normalize_chord, parse_chord, ChordParseError};
pub use tokens::{extract_chord_tokens, extract_line_tokens, is_chord_token, is_sheet_chord, validate_chords, validate_values, ValidatedChords};
