//! Models module for the Chord Analyzer
//!
//! Closed enumerations for the music-theory vocabulary (pitch classes,
//! chord qualities, scale degrees, key names). Strings only appear at the
//! parsing and formatting edges.

pub mod chord;
pub mod degree;
pub mod key_name;
pub mod pitch_class;

// Re-export commonly used types
pub use chord::{ChordQuality, ParsedChord, TriadFamily};
pub use degree::{Degree, IntervalPosition, DEFAULT_DEGREE_LABELS};
pub use key_name::{KeyName, Mode};
pub use pitch_class::{Accidental, Letter, NoteName, PitchClass};
