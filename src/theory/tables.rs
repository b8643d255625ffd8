//! Static music-theory tables
//!
//! Chord interval patterns, black-key respelling and the declared key
//! relationships (relative, enharmonic, dominant/subdominant).
//! Relationship pairs are written once; `KeyRelationships` registers both
//! directions.

use crate::models::ChordQuality;
use crate::parse::parse_chord;

/// Semitone offsets above the root for each quality
pub fn interval_pattern(quality: ChordQuality) -> &'static [u8] {
    match quality {
        // Triads
        ChordQuality::Major => &[0, 4, 7],
        ChordQuality::Minor => &[0, 3, 7],
        ChordQuality::Diminished => &[0, 3, 6],
        ChordQuality::Augmented => &[0, 4, 8],

        // Sevenths
        ChordQuality::Dominant7 => &[0, 4, 7, 10],
        ChordQuality::Major7 => &[0, 4, 7, 11],
        ChordQuality::Minor7 => &[0, 3, 7, 10],
        ChordQuality::HalfDiminished7 => &[0, 3, 6, 10],
        ChordQuality::Diminished7 => &[0, 3, 6, 9],
        ChordQuality::MinorMajor7 => &[0, 3, 7, 11],

        // Extensions
        ChordQuality::Dominant9 => &[0, 4, 7, 10, 14],
        ChordQuality::Major9 => &[0, 4, 7, 11, 14],
        ChordQuality::Minor9 => &[0, 3, 7, 10, 14],
        ChordQuality::Dominant11 => &[0, 4, 7, 10, 14, 17],
        ChordQuality::Dominant13 => &[0, 4, 7, 10, 14, 21],

        // Suspended / added
        ChordQuality::Sus2 => &[0, 2, 7],
        ChordQuality::Sus4 => &[0, 5, 7],
        ChordQuality::Add9 => &[0, 4, 7, 14],
        ChordQuality::Major6 => &[0, 4, 7, 9],
        ChordQuality::Minor6 => &[0, 3, 7, 9],
        ChordQuality::Power => &[0, 7],
    }
}

/// Pattern names for every quality, in table order
pub fn supported_qualities() -> Vec<&'static str> {
    ChordQuality::ALL.iter().map(|q| q.name()).collect()
}

/// Swap the root of a chord to its other black-key spelling.
///
/// "C#m7" -> "Dbm7", "Bb" -> "A#". Chords on white-key roots have no
/// equivalent. The lookup is symmetric: applying it twice returns the input
/// spelling.
pub fn enharmonic_equivalent(chord: &str) -> Option<String> {
    let parsed = parse_chord(chord).ok()?;
    let respelled = parsed.root_name().enharmonic()?;
    Some(format!("{}{}", respelled, parsed.suffix))
}

/// Relative major/minor pairs (shared key signature)
pub const RELATIVE_KEY_PAIRS: [(&str, &str); 14] = [
    ("C Major", "A Minor"),
    ("G Major", "E Minor"),
    ("D Major", "B Minor"),
    ("A Major", "F# Minor"),
    ("E Major", "C# Minor"),
    ("B Major", "G# Minor"),
    ("F# Major", "D# Minor"),
    ("C# Major", "A# Minor"),
    ("F Major", "D Minor"),
    ("Bb Major", "G Minor"),
    ("Eb Major", "C Minor"),
    ("Ab Major", "F Minor"),
    ("Db Major", "Bb Minor"),
    ("Gb Major", "Eb Minor"),
];

/// Same key, spelled two ways
pub const ENHARMONIC_KEY_PAIRS: [(&str, &str); 8] = [
    ("C# Major", "Db Major"),
    ("F# Major", "Gb Major"),
    ("B Major", "Cb Major"),
    ("D# Minor", "Eb Minor"),
    ("G# Minor", "Ab Minor"),
    ("A# Minor", "Bb Minor"),
    ("C# Minor", "Db Minor"),
    ("F# Minor", "Gb Minor"),
];

/// Neighbours on the circle of fifths (dominant/subdominant)
pub const WEAK_KEY_PAIRS: [(&str, &str); 30] = [
    // Major keys
    ("C Major", "G Major"),
    ("G Major", "D Major"),
    ("D Major", "A Major"),
    ("A Major", "E Major"),
    ("E Major", "B Major"),
    ("B Major", "F# Major"),
    ("B Major", "Gb Major"),
    ("F# Major", "C# Major"),
    ("Gb Major", "Db Major"),
    ("Db Major", "Ab Major"),
    ("C# Major", "G# Major"),
    ("Ab Major", "Eb Major"),
    ("Eb Major", "Bb Major"),
    ("Bb Major", "F Major"),
    ("F Major", "C Major"),
    // Minor keys
    ("A Minor", "E Minor"),
    ("E Minor", "B Minor"),
    ("B Minor", "F# Minor"),
    ("F# Minor", "C# Minor"),
    ("C# Minor", "G# Minor"),
    ("G# Minor", "D# Minor"),
    ("G# Minor", "Eb Minor"),
    ("D# Minor", "A# Minor"),
    ("Eb Minor", "Bb Minor"),
    ("Bb Minor", "F Minor"),
    ("A# Minor", "F Minor"),
    ("F Minor", "C Minor"),
    ("C Minor", "G Minor"),
    ("G Minor", "D Minor"),
    ("D Minor", "A Minor"),
];
