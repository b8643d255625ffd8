//! Key names as they appear in the reference tables ("C Major", "F# Minor",
//! "A Harmonic Minor")
//!
//! The reference data identifies keys by plain strings; this gives those
//! strings a tonic and a mode so relationship checks don't have to do
//! substring surgery.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pitch_class::NoteName;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Major,
    Minor,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    Other(String),
}

impl Mode {
    fn from_words(words: &str) -> Mode {
        match words.to_lowercase().as_str() {
            "major" => Mode::Major,
            "minor" => Mode::Minor,
            "natural minor" => Mode::NaturalMinor,
            "harmonic minor" => Mode::HarmonicMinor,
            "melodic minor" => Mode::MelodicMinor,
            _ => Mode::Other(words.to_string()),
        }
    }

    pub fn is_major(&self) -> bool {
        *self == Mode::Major
    }

    pub fn is_minor(&self) -> bool {
        matches!(
            self,
            Mode::Minor | Mode::NaturalMinor | Mode::HarmonicMinor | Mode::MelodicMinor
        )
    }

    /// Plain major or natural minor (no harmonic/melodic alteration)
    pub fn is_plain(&self) -> bool {
        matches!(self, Mode::Major | Mode::Minor | Mode::NaturalMinor)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Mode::Major => "Major",
            Mode::Minor => "Minor",
            Mode::NaturalMinor => "Natural Minor",
            Mode::HarmonicMinor => "Harmonic Minor",
            Mode::MelodicMinor => "Melodic Minor",
            Mode::Other(words) => words,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyName {
    pub tonic: NoteName,
    pub mode: Mode,
}

impl KeyName {
    /// Split "<tonic> <mode words>"; `None` if the tonic is not a note name
    pub fn parse(name: &str) -> Option<KeyName> {
        let trimmed = name.trim();
        let (tonic, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((tonic, rest)) => (tonic, rest.trim()),
            None => (trimmed, ""),
        };
        let tonic = tonic.parse::<NoteName>().ok()?;
        Some(KeyName {
            tonic,
            mode: Mode::from_words(rest),
        })
    }

    pub fn is_parallel_to(&self, other: &KeyName) -> bool {
        self.tonic == other.tonic
            && ((self.mode.is_major() && other.mode.is_minor())
                || (self.mode.is_minor() && other.mode.is_major()))
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.mode.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_major_and_minor() {
        let key = KeyName::parse("C Major").unwrap();
        assert_eq!(key.tonic.to_string(), "C");
        assert_eq!(key.mode, Mode::Major);

        let key = KeyName::parse("F# Minor").unwrap();
        assert_eq!(key.tonic.to_string(), "F#");
        assert_eq!(key.mode, Mode::Minor);
    }

    #[test]
    fn test_parse_altered_minors() {
        assert_eq!(KeyName::parse("A Harmonic Minor").unwrap().mode, Mode::HarmonicMinor);
        assert_eq!(KeyName::parse("A Melodic Minor").unwrap().mode, Mode::MelodicMinor);
        assert_eq!(KeyName::parse("A Natural Minor").unwrap().mode, Mode::NaturalMinor);
    }

    #[test]
    fn test_plain_modes() {
        assert!(Mode::Major.is_plain());
        assert!(Mode::NaturalMinor.is_plain());
        assert!(!Mode::HarmonicMinor.is_plain());
        assert!(!Mode::Other("Dorian".to_string()).is_plain());
    }

    #[test]
    fn test_parallel() {
        let c_major = KeyName::parse("C Major").unwrap();
        let c_minor = KeyName::parse("C Minor").unwrap();
        let d_minor = KeyName::parse("D Minor").unwrap();
        assert!(c_major.is_parallel_to(&c_minor));
        assert!(c_minor.is_parallel_to(&c_major));
        assert!(!c_major.is_parallel_to(&d_minor));
        assert!(!c_major.is_parallel_to(&c_major));
    }

    #[test]
    fn test_unparseable_tonic() {
        assert!(KeyName::parse("test").is_none());
        assert!(KeyName::parse("").is_none());
    }
}
