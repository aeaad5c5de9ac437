//! Supported scales and modes
//!
//! Scales are identified by their exact lowercase display names, including
//! the parenthetical aliases ("ionian (major)", "aeolian (natural minor)").
//! Those strings are what the front end sends, so lookup is a plain string
//! comparison: no trimming, no case folding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScaleKind {
    #[default]
    #[serde(rename = "ionian (major)")]
    Ionian,
    #[serde(rename = "dorian")]
    Dorian,
    #[serde(rename = "phrygian")]
    Phrygian,
    #[serde(rename = "lydian")]
    Lydian,
    #[serde(rename = "mixolydian")]
    Mixolydian,
    #[serde(rename = "aeolian (natural minor)")]
    Aeolian,
    #[serde(rename = "locrian")]
    Locrian,
    #[serde(rename = "harmonic minor")]
    HarmonicMinor,
    #[serde(rename = "melodic minor")]
    MelodicMinor,
    #[serde(rename = "pentatonic major")]
    PentatonicMajor,
    #[serde(rename = "pentatonic minor")]
    PentatonicMinor,
    #[serde(rename = "blues")]
    Blues,
    #[serde(rename = "whole tone")]
    WholeTone,
    #[serde(rename = "chromatic")]
    Chromatic,
}

impl ScaleKind {
    /// Every supported scale, in selector order
    pub const ALL: [ScaleKind; 14] = [
        ScaleKind::Ionian,
        ScaleKind::Dorian,
        ScaleKind::Phrygian,
        ScaleKind::Lydian,
        ScaleKind::Mixolydian,
        ScaleKind::Aeolian,
        ScaleKind::Locrian,
        ScaleKind::HarmonicMinor,
        ScaleKind::MelodicMinor,
        ScaleKind::PentatonicMajor,
        ScaleKind::PentatonicMinor,
        ScaleKind::Blues,
        ScaleKind::WholeTone,
        ScaleKind::Chromatic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleKind::Ionian => "ionian (major)",
            ScaleKind::Dorian => "dorian",
            ScaleKind::Phrygian => "phrygian",
            ScaleKind::Lydian => "lydian",
            ScaleKind::Mixolydian => "mixolydian",
            ScaleKind::Aeolian => "aeolian (natural minor)",
            ScaleKind::Locrian => "locrian",
            ScaleKind::HarmonicMinor => "harmonic minor",
            ScaleKind::MelodicMinor => "melodic minor",
            ScaleKind::PentatonicMajor => "pentatonic major",
            ScaleKind::PentatonicMinor => "pentatonic minor",
            ScaleKind::Blues => "blues",
            ScaleKind::WholeTone => "whole tone",
            ScaleKind::Chromatic => "chromatic",
        }
    }

    /// Exact-name lookup; `None` for anything not in `ALL`
    pub fn from_name(name: &str) -> Option<ScaleKind> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScaleKind {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TheoryError::UnknownScale(s.to_string()))
    }
}

/// Which chord-quality table a degree's chord is read from
///
/// `Seventh` holds the plain seventh chords, `Augmented` the extended
/// (9th/11th/13th) voicings shown as "Extended chords" in the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChordLevel {
    #[default]
    Seventh,
    Augmented,
}

impl ChordLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChordLevel::Seventh => "seventh",
            ChordLevel::Augmented => "augmented",
        }
    }
}

impl FromStr for ChordLevel {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seventh" => Ok(ChordLevel::Seventh),
            "augmented" => Ok(ChordLevel::Augmented),
            _ => Err(TheoryError::InvalidChordLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fourteen_scales_have_distinct_names() {
        let mut names: Vec<&str> = ScaleKind::ALL.iter().map(|k| k.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(ScaleKind::from_name("ionian (major)"), Some(ScaleKind::Ionian));
        assert_eq!(ScaleKind::from_name("aeolian (natural minor)"), Some(ScaleKind::Aeolian));
        assert_eq!(ScaleKind::from_name("ionian"), None);
        assert_eq!(ScaleKind::from_name("Dorian"), None);
        assert_eq!(ScaleKind::from_name(" dorian"), None);
        assert_eq!(ScaleKind::from_name("major"), None);
    }

    #[test]
    fn test_from_str_error_names_the_input() {
        let err = "lydian dominant".parse::<ScaleKind>().unwrap_err();
        assert_eq!(err, TheoryError::UnknownScale("lydian dominant".to_string()));
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&ScaleKind::WholeTone).unwrap();
        assert_eq!(json, "\"whole tone\"");
        let parsed: ScaleKind = serde_json::from_str("\"harmonic minor\"").unwrap();
        assert_eq!(parsed, ScaleKind::HarmonicMinor);
    }

    #[test]
    fn test_chord_level_parse() {
        assert_eq!("seventh".parse::<ChordLevel>().unwrap(), ChordLevel::Seventh);
        assert_eq!("augmented".parse::<ChordLevel>().unwrap(), ChordLevel::Augmented);
        assert!("extended".parse::<ChordLevel>().is_err());
        assert_eq!(ChordLevel::Augmented.as_str(), "augmented");
    }
}
