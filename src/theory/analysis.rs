//! Scale analysis: the engine's main entry points
//!
//! `get_scale_data` never fails. An unknown scale name is analysed with the
//! ionian tables (and gets no characteristics, progressions, related scales
//! or blue notes); an unknown root passes through every note computation
//! unchanged.

use crate::error::Result;
use crate::models::{
    ChordLevel, ChordQualities, DegreeChord, PitchClass, ScaleData, ScaleDegree, ScaleKind,
    Spelling,
};

use super::chord::{extension_notes, get_chord};
use super::interval::{interval_names, note_at_interval};
use super::key_signature::key_signature;
use super::scale_builder::build_scale;

const FALLBACK_QUALITY: &str = "maj7";
const FALLBACK_ROMAN: &str = "I";
const FALLBACK_INTERVAL: &str = "Unknown";

fn owned(row: &[&str]) -> Vec<String> {
    row.iter().map(|s| s.to_string()).collect()
}

/// Analyse `scale_name` built on `root`
pub fn get_scale_data(root: &str, scale_name: &str) -> ScaleData {
    let kind = ScaleKind::from_name(scale_name);
    if kind.is_none() {
        log::debug!("get_scale_data: unknown scale '{}', using ionian tables", scale_name);
    }
    // Pattern, qualities and numerals fall back to ionian; descriptive tables stay empty
    let tables = kind.unwrap_or_default();

    let pattern = tables.pattern();
    let notes = build_scale(root, pattern);
    let intervals = interval_names(pattern);

    let seventh = tables.seventh_qualities();
    let romans = tables.roman_numerals();
    let extensions = tables.extensions();

    let degrees = notes
        .iter()
        .enumerate()
        .map(|(index, note)| {
            let quality = seventh.get(index).copied().unwrap_or(FALLBACK_QUALITY);
            let degree_extensions = extensions.get(index).copied().unwrap_or(&[]);

            ScaleDegree {
                label: (index + 1).to_string(),
                chord: format!("{}{}", note, quality),
                notes: get_chord(root, notes.as_slice(), index, quality),
                interval: intervals
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| FALLBACK_INTERVAL.to_string()),
                quality: quality.to_string(),
                roman: romans.get(index).copied().unwrap_or(FALLBACK_ROMAN).to_string(),
                note: note.clone(),
                extensions: extension_notes(note, degree_extensions),
            }
        })
        .collect();

    let blue_notes = kind
        .map(ScaleKind::blue_note_intervals)
        .unwrap_or(&[])
        .iter()
        .map(|&semitones| note_at_interval(root, semitones, Spelling::Sharps))
        .collect();

    let chord_progressions = kind
        .map(ScaleKind::chord_progressions)
        .unwrap_or(&[])
        .iter()
        .map(|progression| owned(progression))
        .collect();

    ScaleData {
        name: format!("{} {}", root, scale_name),
        key_signature: key_signature(root, scale_name),
        notes,
        degrees,
        intervals,
        blue_notes,
        chord_progressions,
        characteristics: owned(kind.map(ScaleKind::characteristics).unwrap_or(&[])),
        related_scales: owned(kind.map(ScaleKind::related_scales).unwrap_or(&[])),
        qualities: ChordQualities {
            seventh: owned(seventh),
            augmented: owned(tables.augmented_qualities()),
            extensions: extensions.iter().map(|row| owned(row)).collect(),
        },
    }
}

/// Re-derive `scale_data` on a root `semitones` away
///
/// The new root comes from the first note and the scale name from `name`,
/// so the result goes through exactly the same fallbacks as a fresh query.
pub fn transpose_scale(scale_data: &ScaleData, semitones: i32) -> ScaleData {
    let current_root = scale_data
        .root()
        .map(str::to_string)
        .unwrap_or_else(|| scale_data.name.split(' ').next().unwrap_or_default().to_string());
    let new_root = note_at_interval(&current_root, semitones, Spelling::Sharps);

    get_scale_data(&new_root, &scale_data.scale_name())
}

/// Chords of every degree read from the chosen quality table
pub fn degree_chords(scale_data: &ScaleData, level: ChordLevel) -> Vec<DegreeChord> {
    let qualities = match level {
        ChordLevel::Seventh => &scale_data.qualities.seventh,
        ChordLevel::Augmented => &scale_data.qualities.augmented,
    };

    scale_data
        .degrees
        .iter()
        .enumerate()
        .map(|(index, degree)| {
            let quality = qualities
                .get(index)
                .map(String::as_str)
                .unwrap_or(FALLBACK_QUALITY);

            DegreeChord {
                label: degree.label.clone(),
                roman: degree.roman.clone(),
                quality: quality.to_string(),
                chord: format!("{}{}", degree.note, quality),
                notes: get_chord(&degree.note, scale_data.notes.as_slice(), index, quality),
            }
        })
        .collect()
}

/// Like `get_scale_data`, but rejects roots and scales outside the supported sets
///
/// Flat roots are accepted and analysed under their sharp name.
pub fn scale_data_strict(root: &str, scale_name: &str) -> Result<ScaleData> {
    let root: PitchClass = root.parse()?;
    let kind: ScaleKind = scale_name.parse()?;

    Ok(get_scale_data(root.as_str(), kind.as_str()))
}

/// Pretty-printed JSON of a scale analysis
pub fn scale_data_json(root: &str, scale_name: &str) -> Result<String> {
    let data = get_scale_data(root, scale_name);
    Ok(serde_json::to_string_pretty(&data)?)
}

/// Names of every supported scale, in selector order
pub fn available_scales() -> Vec<String> {
    ScaleKind::ALL.iter().map(|kind| kind.as_str().to_string()).collect()
}

/// Root notes the selector offers, in chromatic order
pub fn available_notes() -> Vec<String> {
    PitchClass::ALL.iter().map(|pc| pc.as_str().to_string()).collect()
}
