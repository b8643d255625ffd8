// Chord token parsing, normalization, extraction and chord tones

use chord_analyzer_wasm::fretboard::detect_chord;
use chord_analyzer_wasm::models::{ChordQuality, PitchClass};
use chord_analyzer_wasm::parse::{
    extract_chord_tokens, normalize_chord, parse_chord, validate_chords, ChordParseError,
};
use chord_analyzer_wasm::theory::{chord_info, enharmonic_equivalent, supported_qualities};

const TOKENS: [&str; 12] = [
    "C", "C#m7", "Bbsus4", "Dmin7", "Gdom7", "F#dim", "Ebmaj7", "A7", "Abm6", "Bm7b5", "E♭", "Gaug",
];

#[test]
fn test_parse_is_idempotent_on_canonical_form() {
    for token in TOKENS {
        let first = parse_chord(token).unwrap();
        let second = parse_chord(&first.canonical()).unwrap();
        assert_eq!(first.pitch_class(), second.pitch_class(), "{}", token);
        assert_eq!(first.root_name(), second.root_name(), "{}", token);
        assert_eq!(first.quality, second.quality, "{}", token);
    }
}

#[test]
fn test_normalize_is_idempotent() {
    for token in TOKENS.iter().chain(["  H7 ", "A♯m", "Hm"].iter()) {
        let once = normalize_chord(token);
        assert_eq!(normalize_chord(&once), once, "{}", token);
    }
    assert_eq!(normalize_chord(" A♯m "), "A#m");
    assert_eq!(normalize_chord("H7"), "B7");
}

#[test]
fn test_enharmonic_map_is_symmetric() {
    for (a, b) in [("C#", "Db"), ("D#", "Eb"), ("F#", "Gb"), ("G#", "Ab"), ("A#", "Bb")] {
        assert_eq!(enharmonic_equivalent(a).as_deref(), Some(b));
        assert_eq!(enharmonic_equivalent(b).as_deref(), Some(a));
    }
    assert_eq!(enharmonic_equivalent("E"), None);
}

#[test]
fn test_bare_seven_and_empty_suffix() {
    assert_eq!(parse_chord("G7").unwrap().quality, Some(ChordQuality::Dominant7));
    assert_eq!(parse_chord("G").unwrap().quality, Some(ChordQuality::Major));
}

#[test]
fn test_minor_detection_excludes_major_spellings() {
    assert!(parse_chord("Am").unwrap().is_minor_like());
    assert!(parse_chord("Amin7").unwrap().is_minor_like());
    assert!(parse_chord("A°").unwrap().is_minor_like());
    assert!(!parse_chord("Amaj7").unwrap().is_minor_like());
    assert!(!parse_chord("Amaj13").unwrap().is_minor_like());
}

#[test]
fn test_rejects_bad_roots_and_accidentals() {
    assert_eq!(parse_chord(""), Err(ChordParseError::Empty));
    assert!(matches!(parse_chord("X7"), Err(ChordParseError::InvalidRoot(_))));
    assert!(matches!(parse_chord("C#b"), Err(ChordParseError::ConflictingAccidentals(_))));
    assert!(matches!(parse_chord("Cbb"), Err(ChordParseError::RepeatedAccidental(_))));
}

#[test]
fn test_extract_tokens_from_chord_sheet() {
    let text = "Intro\nC  G  Am  F\n\nAmazing grace how sweet\nDm7, G7, Cmaj7\n";
    assert_eq!(
        extract_chord_tokens(text),
        vec!["C", "G", "Am", "F", "Dm7", "G7", "Cmaj7"]
    );
}

#[test]
fn test_validation_collects_errors_and_dedupes() {
    let checked = validate_chords(&["C", "", "Verse", "C", "Db", "C#"]);
    assert_eq!(checked.valid, vec!["C", "Db", "C#"]);
    assert_eq!(checked.errors, vec!["Invalid chord format: \"Verse\""]);
}

#[test]
fn test_chord_tones() {
    let info = chord_info("Am7", 3).unwrap();
    assert_eq!(info.notes, vec!["A", "C", "E", "G"]);
    assert_eq!(info.quality, ChordQuality::Minor7.name());
    assert!((info.frequencies[0] - 220.0).abs() < 0.01);
    assert!(supported_qualities().contains(&ChordQuality::Minor7.name()));
}

#[test]
fn test_fretboard_names_parse_back() {
    for (shape, expected, root) in [
        ("x32010", "C", PitchClass::C),
        ("x02210", "Am", PitchClass::A),
        ("xx0212", "D7", PitchClass::D),
    ] {
        let detected = detect_chord(shape).unwrap();
        assert_eq!(detected.chord, expected);
        assert_eq!(parse_chord(&detected.chord).unwrap().pitch_class(), root);
    }
}
