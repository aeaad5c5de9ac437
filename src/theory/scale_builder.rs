//! Scale construction from step patterns

use crate::models::Spelling;

use super::interval::note_at_interval;

/// Build the note sequence of a scale from its step pattern
///
/// Each step is applied to the previous note, always spelled with sharps.
/// A pattern that closes the octave would end on the tonic again; that
/// trailing duplicate is dropped.
pub fn build_scale(root: &str, pattern: &[i32]) -> Vec<String> {
    let mut scale = Vec::with_capacity(pattern.len() + 1);
    scale.push(root.to_string());

    let mut current = root.to_string();
    for &step in pattern {
        current = note_at_interval(&current, step, Spelling::Sharps);
        scale.push(current.clone());
    }

    if scale.last().map(String::as_str) == Some(root) {
        scale.pop();
    }

    scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScaleKind;

    #[test]
    fn test_c_major() {
        let scale = build_scale("C", ScaleKind::Ionian.pattern());
        assert_eq!(scale, vec!["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn test_a_harmonic_minor() {
        let scale = build_scale("A", ScaleKind::HarmonicMinor.pattern());
        assert_eq!(scale, vec!["A", "B", "C", "D", "E", "F", "G#"]);
    }

    #[test]
    fn test_length_matches_pattern_for_every_scale_and_root() {
        for kind in ScaleKind::ALL {
            for root in ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"] {
                let pattern = kind.pattern();
                let scale = build_scale(root, pattern);
                assert_eq!(scale.len(), pattern.len(), "{} {}", root, kind);
                assert_eq!(scale[0], root);
            }
        }
    }

    #[test]
    fn test_whole_tone_and_chromatic() {
        assert_eq!(
            build_scale("C", ScaleKind::WholeTone.pattern()),
            vec!["C", "D", "E", "F#", "G#", "A#"]
        );
        assert_eq!(build_scale("F", ScaleKind::Chromatic.pattern()).len(), 12);
    }

    #[test]
    fn test_pattern_not_closing_the_octave_keeps_last_note() {
        assert_eq!(build_scale("C", &[2, 2]), vec!["C", "D", "E"]);
    }

    #[test]
    fn test_unrecognised_root_repeats() {
        let scale = build_scale("X", ScaleKind::Ionian.pattern());
        assert_eq!(scale.len(), 7);
        assert!(scale.iter().all(|n| n == "X"));
    }
}
