//! Semitone arithmetic over note names
//!
//! Notes travel through the engine as strings so that an unrecognised input
//! can be handed back untouched instead of failing the whole query.

use crate::models::{PitchClass, Spelling};

use super::tables::INTERVAL_NAMES;

/// Note `semitones` above `root` (below, if negative)
///
/// Only canonical sharp names are recognised as roots. Anything else is
/// returned unchanged. Offsets larger than an octave are fine: a 13th is +21.
pub fn note_at_interval(root: &str, semitones: i32, spelling: Spelling) -> String {
    match PitchClass::from_sharp_name(root) {
        Some(pc) => pc.transpose(semitones).name(spelling).to_string(),
        None => {
            log::debug!("note_at_interval: unrecognised note '{}', passing through", root);
            root.to_string()
        }
    }
}

/// Name of each cumulative position in a step pattern, starting with "Root"
///
/// Distances past the octave are labelled "<n> semitones".
pub fn interval_names(pattern: &[i32]) -> Vec<String> {
    let mut names = Vec::with_capacity(pattern.len() + 1);
    names.push(INTERVAL_NAMES[0].to_string());

    let mut distance: i64 = 0;
    for &step in pattern {
        distance += i64::from(step);
        let name = usize::try_from(distance)
            .ok()
            .and_then(|d| INTERVAL_NAMES.get(d))
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("{} semitones", distance));
        names.push(name);
    }

    names
}
