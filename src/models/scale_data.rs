//! Result structures returned by the theory engine
//!
//! These are plain value objects: built fresh for every query and handed to
//! JavaScript as-is. Field names serialize in camelCase because the front end
//! reads them directly (`scaleData.keySignature`, `scaleData.blueNotes`).

use serde::{Deserialize, Serialize};

/// One note of a built scale together with the harmony built on it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScaleDegree {
    /// 1-based position ("1", "2", ...)
    pub label: String,
    /// Note name followed by the seventh quality, e.g. "Dm7"
    pub chord: String,
    /// Tones of the seventh chord
    pub notes: Vec<String>,
    /// Interval from the scale root, e.g. "Perfect 5th"
    pub interval: String,
    pub quality: String,
    pub roman: String,
    pub note: String,
    /// Tones of the 9th/11th/13th extensions, kept apart from the chord tones
    pub extensions: Vec<String>,
}

/// Per-degree chord-quality tables for one scale
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ChordQualities {
    pub seventh: Vec<String>,
    pub augmented: Vec<String>,
    /// Extension names per degree ("9", "#11", "b13", ...)
    pub extensions: Vec<Vec<String>>,
}

/// Fully elaborated description of a scale on a given root
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScaleData {
    /// "<root> <scale name>", exactly as requested
    pub name: String,
    pub notes: Vec<String>,
    pub key_signature: String,
    pub degrees: Vec<ScaleDegree>,
    pub intervals: Vec<String>,
    pub blue_notes: Vec<String>,
    pub chord_progressions: Vec<Vec<String>>,
    pub characteristics: Vec<String>,
    pub related_scales: Vec<String>,
    pub qualities: ChordQualities,
}

impl ScaleData {
    /// Root note (first note of the scale)
    pub fn root(&self) -> Option<&str> {
        self.notes.first().map(String::as_str)
    }

    /// Scale name recovered from `name`: everything after the first space
    pub fn scale_name(&self) -> String {
        self.name.split(' ').skip(1).collect::<Vec<_>>().join(" ")
    }
}

/// A degree's chord read at a chosen `ChordLevel`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DegreeChord {
    pub label: String,
    pub roman: String,
    pub quality: String,
    /// Note name followed by the quality, e.g. "Cmaj9"
    pub chord: String,
    pub notes: Vec<String>,
}
