//! Pitch spelling primitives for chord roots
//!
//! A chord root is written as a letter plus at most one accidental
//! (C, C#, Db, ...). Two spellings of the same sounding pitch share a
//! `PitchClass`; the spelling itself is a `NoteName`.
//!
//! Chromatic order is fixed: C, C#/Db, D, D#/Eb, E, F, F#/Gb, G, G#/Ab, A, A#/Bb, B

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Natural note letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Parse a root letter, case-insensitive.
    ///
    /// European "H" is accepted as an alias for B.
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' | 'H' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Semitones above C
    pub fn semitone(&self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }
}

/// Accidental attached to a chord root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Recognize a raised ('#', '♯') or flat ('b', '♭') marker
    pub fn from_char(c: char) -> Option<Accidental> {
        match c {
            '#' | '♯' => Some(Accidental::Sharp),
            'b' | '♭' => Some(Accidental::Flat),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }

    pub fn offset(&self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

/// One of the 12 chromatic pitch classes, spelling-independent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C, PitchClass::Cs, PitchClass::D, PitchClass::Ds,
        PitchClass::E, PitchClass::F, PitchClass::Fs, PitchClass::G,
        PitchClass::Gs, PitchClass::A, PitchClass::As, PitchClass::B,
    ];

    /// Build from a semitone count, wrapping into 0..12
    pub fn from_semitone(semitone: i32) -> PitchClass {
        PitchClass::ALL[semitone.rem_euclid(12) as usize]
    }

    pub fn semitone(&self) -> u8 {
        *self as u8
    }

    pub fn transpose(&self, semitones: i32) -> PitchClass {
        PitchClass::from_semitone(self.semitone() as i32 + semitones)
    }

    /// Black keys are the only pitch classes with two common spellings
    pub fn is_black_key(&self) -> bool {
        matches!(
            self,
            PitchClass::Cs | PitchClass::Ds | PitchClass::Fs | PitchClass::Gs | PitchClass::As
        )
    }

    pub fn sharp_name(&self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }

    pub fn flat_name(&self) -> &'static str {
        match self {
            PitchClass::Cs => "Db",
            PitchClass::Ds => "Eb",
            PitchClass::Fs => "Gb",
            PitchClass::Gs => "Ab",
            PitchClass::As => "Bb",
            other => other.sharp_name(),
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sharp_name())
    }
}

/// A spelled note: letter plus accidental (e.g. "F#", "Gb")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteName {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl NoteName {
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub fn pitch_class(&self) -> PitchClass {
        PitchClass::from_semitone(self.letter.semitone() as i32 + self.accidental.offset() as i32)
    }

    /// The other common spelling of a black-key note (C# <-> Db).
    ///
    /// White-key notes and odd spellings like E# or Cb have none.
    pub fn enharmonic(&self) -> Option<NoteName> {
        let pitch = self.pitch_class();
        if !pitch.is_black_key() {
            return None;
        }
        let spelled = match self.accidental {
            Accidental::Sharp => pitch.flat_name(),
            Accidental::Flat => pitch.sharp_name(),
            Accidental::Natural => return None,
        };
        spelled.parse().ok()
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidental.symbol())
    }
}

impl FromStr for NoteName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| format!("Invalid note name: '{}'", s))?;
        let accidental = match (chars.next(), chars.next()) {
            (None, _) => Accidental::Natural,
            (Some(c), None) => Accidental::from_char(c)
                .ok_or_else(|| format!("Invalid accidental in note name: '{}'", s))?,
            _ => return Err(format!("Invalid note name: '{}'", s)),
        };
        Ok(NoteName::new(letter, accidental))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_from_char() {
        assert_eq!(Letter::from_char('c'), Some(Letter::C));
        assert_eq!(Letter::from_char('G'), Some(Letter::G));
        assert_eq!(Letter::from_char('H'), Some(Letter::B));
        assert_eq!(Letter::from_char('X'), None);
    }

    #[test]
    fn test_pitch_class_wraps() {
        assert_eq!(PitchClass::from_semitone(12), PitchClass::C);
        assert_eq!(PitchClass::from_semitone(-1), PitchClass::B);
        assert_eq!(PitchClass::A.transpose(3), PitchClass::C);
        assert_eq!(PitchClass::C.transpose(-3), PitchClass::A);
    }

    #[test]
    fn test_note_name_pitch_class() {
        assert_eq!("C#".parse::<NoteName>().unwrap().pitch_class(), PitchClass::Cs);
        assert_eq!("Db".parse::<NoteName>().unwrap().pitch_class(), PitchClass::Cs);
        assert_eq!("E#".parse::<NoteName>().unwrap().pitch_class(), PitchClass::F);
        assert_eq!("Cb".parse::<NoteName>().unwrap().pitch_class(), PitchClass::B);
    }

    #[test]
    fn test_enharmonic_is_symmetric_over_black_keys() {
        for pitch in PitchClass::ALL.iter().filter(|p| p.is_black_key()) {
            let sharp: NoteName = pitch.sharp_name().parse().unwrap();
            let flat: NoteName = pitch.flat_name().parse().unwrap();
            assert_eq!(sharp.enharmonic(), Some(flat));
            assert_eq!(flat.enharmonic(), Some(sharp));
        }
    }

    #[test]
    fn test_white_keys_have_no_enharmonic() {
        assert_eq!("C".parse::<NoteName>().unwrap().enharmonic(), None);
        assert_eq!("E#".parse::<NoteName>().unwrap().enharmonic(), None);
    }

    #[test]
    fn test_note_name_display() {
        let name = NoteName::new(Letter::B, Accidental::Flat);
        assert_eq!(name.to_string(), "Bb");
        assert_eq!("F♯".parse::<NoteName>().unwrap().to_string(), "F#");
    }

    #[test]
    fn test_invalid_note_names() {
        assert!("X".parse::<NoteName>().is_err());
        assert!("C##".parse::<NoteName>().is_err());
        assert!("".parse::<NoteName>().is_err());
    }
}
