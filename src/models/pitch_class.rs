//! The twelve chromatic pitch classes
//!
//! A pitch class has one identity and two spellings: sharp (the canonical
//! form used everywhere in the engine) and flat. The spelling is a rendering
//! choice made with `Spelling`, never a different type.
//!
//! Index 0 is C; arithmetic wraps modulo 12.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;

const SHARP_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
const FLAT_NAMES: [&str; 12] = ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];

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

/// Which accidental to use when rendering a black-key pitch class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spelling {
    #[default]
    Sharps,
    Flats,
}

impl Spelling {
    /// Map the `preferFlats` flag used by JavaScript callers
    pub fn from_prefer_flats(prefer_flats: bool) -> Self {
        if prefer_flats {
            Spelling::Flats
        } else {
            Spelling::Sharps
        }
    }
}

impl PitchClass {
    /// All pitch classes in chromatic order starting at C
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Chromatic index, 0 = C
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class for any integer index, wrapping modulo 12 (negatives included)
    pub fn from_index(index: i32) -> PitchClass {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    /// Look up a note by its canonical sharp name only
    ///
    /// Flat names ("Db", "Bb") are not recognised here; the engine treats them
    /// as unknown notes and passes them through unchanged.
    pub fn from_sharp_name(name: &str) -> Option<PitchClass> {
        SHARP_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| Self::ALL[i])
    }

    /// Move by a number of semitones, wrapping around the octave
    pub fn transpose(self, semitones: i32) -> PitchClass {
        Self::from_index(self.index() as i32 + semitones.rem_euclid(12))
    }

    pub fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharps => SHARP_NAMES[self.index()],
            Spelling::Flats => FLAT_NAMES[self.index()],
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.name(Spelling::Sharps)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    /// Accepts either spelling ("Db" and "C#" are the same class)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SHARP_NAMES
            .iter()
            .position(|n| *n == s)
            .or_else(|| FLAT_NAMES.iter().position(|n| *n == s))
            .map(|i| Self::ALL[i])
            .ok_or_else(|| TheoryError::UnknownNote(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_twelve_distinct_classes() {
        let mut names: Vec<&str> = PitchClass::ALL.iter().map(|p| p.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, pc) in PitchClass::ALL.iter().enumerate() {
            assert_eq!(pc.index(), i);
            assert_eq!(PitchClass::from_index(i as i32), *pc);
        }
    }

    #[test]
    fn test_from_index_wraps_negative() {
        assert_eq!(PitchClass::from_index(-1), PitchClass::B);
        assert_eq!(PitchClass::from_index(-12), PitchClass::C);
        assert_eq!(PitchClass::from_index(25), PitchClass::Cs);
    }

    #[test]
    fn test_from_sharp_name_rejects_flats() {
        assert_eq!(PitchClass::from_sharp_name("F#"), Some(PitchClass::Fs));
        assert_eq!(PitchClass::from_sharp_name("Gb"), None);
        assert_eq!(PitchClass::from_sharp_name("c"), None);
    }

    #[test]
    fn test_spellings() {
        assert_eq!(PitchClass::As.name(Spelling::Sharps), "A#");
        assert_eq!(PitchClass::As.name(Spelling::Flats), "Bb");
        assert_eq!(PitchClass::E.name(Spelling::Flats), "E");
        assert_eq!(Spelling::from_prefer_flats(true), Spelling::Flats);
        assert_eq!(Spelling::default(), Spelling::Sharps);
    }

    #[test]
    fn test_from_str_accepts_both_spellings() {
        assert_eq!("Db".parse::<PitchClass>().unwrap(), PitchClass::Cs);
        assert_eq!("C#".parse::<PitchClass>().unwrap(), PitchClass::Cs);
        assert!("H".parse::<PitchClass>().is_err());
        assert!("".parse::<PitchClass>().is_err());
    }

    #[test]
    fn test_transpose() {
        assert_eq!(PitchClass::A.transpose(3), PitchClass::C);
        assert_eq!(PitchClass::C.transpose(-2), PitchClass::As);
        assert_eq!(PitchClass::G.transpose(21), PitchClass::E);
    }

    #[test]
    fn test_transpose_extreme_offsets() {
        for pc in PitchClass::ALL {
            assert_eq!(pc.transpose(i32::MAX), pc.transpose(i32::MAX - 12));
            assert_eq!(pc.transpose(i32::MIN), pc.transpose(i32::MIN + 12));
        }
        // i32::MAX = 12 * 178956970 + 7
        assert_eq!(PitchClass::B.transpose(i32::MAX), PitchClass::Fs);
        assert_eq!(PitchClass::C.transpose(i32::MIN), PitchClass::E);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&PitchClass::Fs).unwrap();
        assert_eq!(json, "\"F#\"");

        let parsed: PitchClass = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, PitchClass::Fs);
    }
}
