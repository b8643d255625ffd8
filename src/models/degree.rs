//! Scale degrees (Roman numeral slots of a key) and chromatic interval positions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default Roman numeral labels, index 0 = degree I
pub const DEFAULT_DEGREE_LABELS: [&str; 7] = ["I", "ii", "iii", "IV", "V", "vi", "vii°"];

/// Diatonic degree of a chord inside a key entry.
///
/// A key row lists its chords in degree order, so the row index is the degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Degree {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
}

impl Degree {
    pub const ALL: [Degree; 7] = [
        Degree::I, Degree::II, Degree::III, Degree::IV, Degree::V, Degree::VI, Degree::VII,
    ];

    pub fn from_index(index: usize) -> Option<Degree> {
        Degree::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_tonic(&self) -> bool {
        *self == Degree::I
    }
}

/// Interval of a note above a chord or key root, in the "1, b2, 2, ..." spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalPosition {
    #[serde(rename = "1")]
    Root,
    #[serde(rename = "b2")]
    FlatSecond,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "b3")]
    FlatThird,
    #[serde(rename = "3")]
    Third,
    #[serde(rename = "4")]
    Fourth,
    #[serde(rename = "b5")]
    FlatFifth,
    #[serde(rename = "5")]
    Fifth,
    #[serde(rename = "b6")]
    FlatSixth,
    #[serde(rename = "6")]
    Sixth,
    #[serde(rename = "b7")]
    FlatSeventh,
    #[serde(rename = "7")]
    Seventh,
}

impl IntervalPosition {
    pub const ALL: [IntervalPosition; 12] = [
        IntervalPosition::Root,
        IntervalPosition::FlatSecond,
        IntervalPosition::Second,
        IntervalPosition::FlatThird,
        IntervalPosition::Third,
        IntervalPosition::Fourth,
        IntervalPosition::FlatFifth,
        IntervalPosition::Fifth,
        IntervalPosition::FlatSixth,
        IntervalPosition::Sixth,
        IntervalPosition::FlatSeventh,
        IntervalPosition::Seventh,
    ];

    /// Position for a semitone distance; compound intervals fold into the octave
    pub fn from_semitones(semitones: u8) -> IntervalPosition {
        IntervalPosition::ALL[(semitones % 12) as usize]
    }

    pub fn label(&self) -> &'static str {
        match self {
            IntervalPosition::Root => "1",
            IntervalPosition::FlatSecond => "b2",
            IntervalPosition::Second => "2",
            IntervalPosition::FlatThird => "b3",
            IntervalPosition::Third => "3",
            IntervalPosition::Fourth => "4",
            IntervalPosition::FlatFifth => "b5",
            IntervalPosition::Fifth => "5",
            IntervalPosition::FlatSixth => "b6",
            IntervalPosition::Sixth => "6",
            IntervalPosition::FlatSeventh => "b7",
            IntervalPosition::Seventh => "7",
        }
    }
}

impl fmt::Display for IntervalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
