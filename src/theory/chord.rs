//! Chord construction on scale degrees
//!
//! A chord is a quality template (semitones above the chord root) mapped
//! through `note_at_interval`. Extensions (9ths, 11ths, 13ths and their
//! altered forms) are resolved separately and never merged into the base
//! chord tones.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::Spelling;

use super::interval::note_at_interval;

/// Template used for any quality not in `CHORD_TEMPLATES`
pub const DOMINANT_SEVENTH: &[i32] = &[0, 4, 7, 10];

lazy_static! {
    static ref CHORD_TEMPLATES: HashMap<&'static str, &'static [i32]> = {
        let mut m: HashMap<&'static str, &'static [i32]> = HashMap::new();
        // Seventh chords
        m.insert("maj7", &[0, 4, 7, 11]);
        m.insert("m7", &[0, 3, 7, 10]);
        m.insert("7", DOMINANT_SEVENTH);
        m.insert("m7b5", &[0, 3, 6, 10]);
        m.insert("m(maj7)", &[0, 3, 7, 11]);
        m.insert("maj7#5", &[0, 4, 8, 11]);
        m.insert("dim7", &[0, 3, 6, 9]);
        m.insert("7#5", &[0, 4, 8, 10]);
        m.insert("m7#5", &[0, 3, 8, 10]);
        // Extended chords
        m.insert("maj9", &[0, 4, 7, 11, 14]);
        m.insert("m9", &[0, 3, 7, 10, 14]);
        m.insert("9", &[0, 4, 7, 10, 14]);
        m.insert("m11", &[0, 3, 7, 10, 14, 17]);
        m.insert("11", &[0, 4, 7, 10, 14, 17]);
        m.insert("m13", &[0, 3, 7, 10, 14, 17, 21]);
        m.insert("13", &[0, 4, 7, 10, 14, 17, 21]);
        m
    };

    static ref EXTENSION_SEMITONES: HashMap<&'static str, i32> = {
        let mut m = HashMap::new();
        m.insert("9", 14);
        m.insert("b9", 13);
        m.insert("#9", 15);
        m.insert("11", 17);
        m.insert("#11", 18);
        m.insert("b11", 16);
        m.insert("13", 21);
        m.insert("b13", 20);
        m.insert("#13", 22);
        m
    };
}

/// Semitone template for a chord quality, dominant seventh when unknown
pub fn chord_intervals(quality: &str) -> &'static [i32] {
    match CHORD_TEMPLATES.get(quality) {
        Some(template) => *template,
        None => {
            log::debug!("chord_intervals: unknown quality '{}', using dominant 7th", quality);
            DOMINANT_SEVENTH
        }
    }
}

/// Semitones above the chord root for an extension name ("9", "#11", ...)
pub fn extension_interval(extension: &str) -> Option<i32> {
    EXTENSION_SEMITONES.get(extension).copied()
}

/// Chord tones of `quality` built on the note at `degree` of `scale`
///
/// If `degree` is past the end of `scale`, the chord is built on `root`
/// instead. The result is never empty.
pub fn get_chord<S: AsRef<str>>(
    root: &str,
    scale: &[S],
    degree: usize,
    quality: &str,
) -> Vec<String> {
    let chord_root = scale.get(degree).map(|note| note.as_ref()).unwrap_or(root);

    chord_intervals(quality)
        .iter()
        .map(|&interval| note_at_interval(chord_root, interval, Spelling::Sharps))
        .collect()
}

/// Tones of the named extensions above `note`; unknown names are skipped
pub fn extension_notes<S: AsRef<str>>(note: &str, extensions: &[S]) -> Vec<String> {
    extensions
        .iter()
        .filter_map(|ext| extension_interval(ext.as_ref()))
        .map(|interval| note_at_interval(note, interval, Spelling::Sharps))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const C_MAJOR: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

    #[test]
    fn test_tonic_maj7() {
        assert_eq!(get_chord("C", &C_MAJOR, 0, "maj7"), vec!["C", "E", "G", "B"]);
    }

    #[test]
    fn test_supertonic_m9() {
        assert_eq!(get_chord("C", &C_MAJOR, 1, "m9"), vec!["D", "F", "A", "C", "E"]);
    }

    #[test]
    fn test_dominant_thirteenth() {
        assert_eq!(
            get_chord("C", &C_MAJOR, 4, "13"),
            vec!["G", "B", "D", "F", "A", "C", "E"]
        );
    }

    #[test]
    fn test_unknown_quality_falls_back_to_dominant_seventh() {
        assert_eq!(get_chord("C", &C_MAJOR, 0, "sus4add9"), vec!["C", "E", "G", "A#"]);
        assert_eq!(get_chord("C", &C_MAJOR, 0, ""), vec!["C", "E", "G", "A#"]);
    }

    #[test]
    fn test_degree_out_of_range_uses_root() {
        assert_eq!(get_chord("D", &C_MAJOR, 9, "m7"), vec!["D", "F", "A", "C"]);
    }

    #[test]
    fn test_never_empty() {
        let empty: [&str; 0] = [];
        for quality in ["maj7", "m7b5", "dim7", "nonsense", "13"] {
            assert!(!get_chord("C", &C_MAJOR, 3, quality).is_empty());
            assert!(!get_chord("X", &empty, 0, quality).is_empty());
        }
    }

    #[test]
    fn test_extension_notes() {
        assert_eq!(extension_notes("C", &["9", "#11", "13"]), vec!["D", "F#", "A"]);
        assert_eq!(extension_notes("B", &["11", "b13"]), vec!["E", "G"]);
    }

    #[test]
    fn test_extension_notes_skip_unknown() {
        assert_eq!(extension_notes("C", &["9", "add2", "b9"]), vec!["D", "C#"]);
    }
}
