//! Static per-mode reference tables
//!
//! Every table is a compile-time constant keyed by `ScaleKind`. Nothing here
//! is mutated; lookups for names that are not a `ScaleKind` are handled by
//! the callers (ionian fallback or empty lists).

use crate::models::ScaleKind;

type Row = &'static [&'static str];

const DOMINANT_TENSIONS: Row = &["9", "13"];
const WHOLE_TONE_TENSIONS: Row = &["9", "#11", "13"];
const CHROMATIC_TENSIONS: Row = &["b9", "11", "b13"];

impl ScaleKind {
    /// Semitone steps from the root, one per scale step
    pub fn pattern(self) -> &'static [i32] {
        match self {
            ScaleKind::Ionian => &[2, 2, 1, 2, 2, 2, 1],
            ScaleKind::Dorian => &[2, 1, 2, 2, 2, 1, 2],
            ScaleKind::Phrygian => &[1, 2, 2, 2, 1, 2, 2],
            ScaleKind::Lydian => &[2, 2, 2, 1, 2, 2, 1],
            ScaleKind::Mixolydian => &[2, 2, 1, 2, 2, 1, 2],
            ScaleKind::Aeolian => &[2, 1, 2, 2, 1, 2, 2],
            ScaleKind::Locrian => &[1, 2, 2, 1, 2, 2, 2],
            ScaleKind::HarmonicMinor => &[2, 1, 2, 2, 1, 3, 1],
            ScaleKind::MelodicMinor => &[2, 1, 2, 2, 2, 2, 1],
            ScaleKind::PentatonicMajor => &[2, 2, 3, 2, 3],
            ScaleKind::PentatonicMinor => &[3, 2, 2, 3, 2],
            ScaleKind::Blues => &[3, 2, 1, 1, 3, 2],
            ScaleKind::WholeTone => &[2, 2, 2, 2, 2, 2],
            ScaleKind::Chromatic => &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        }
    }

    /// Seventh-chord quality per degree
    pub fn seventh_qualities(self) -> Row {
        match self {
            ScaleKind::Ionian => &["maj7", "m7", "m7", "maj7", "7", "m7", "m7b5"],
            ScaleKind::Dorian => &["m7", "m7", "maj7", "7", "m7", "m7b5", "maj7"],
            ScaleKind::Phrygian => &["m7", "maj7", "7", "m7", "m7b5", "maj7", "m7"],
            ScaleKind::Lydian => &["maj7", "7", "m7", "m7b5", "maj7", "m7", "m7"],
            ScaleKind::Mixolydian => &["7", "m7", "m7b5", "maj7", "m7", "m7", "maj7"],
            ScaleKind::Aeolian => &["m7", "m7b5", "maj7", "m7", "m7", "maj7", "7"],
            ScaleKind::Locrian => &["m7b5", "maj7", "m7", "m7", "maj7", "7", "m7"],
            ScaleKind::HarmonicMinor => {
                &["m(maj7)", "m7b5", "maj7#5", "m7", "7", "maj7", "dim7"]
            }
            ScaleKind::MelodicMinor => {
                &["m(maj7)", "m7", "maj7#5", "7", "7", "m7b5", "m7b5"]
            }
            ScaleKind::PentatonicMajor => &["maj7", "m7", "m7", "maj7", "7"],
            ScaleKind::PentatonicMinor => &["m7", "m7", "maj7", "7", "m7"],
            ScaleKind::Blues | ScaleKind::WholeTone => &["7", "7", "7", "7", "7", "7"],
            ScaleKind::Chromatic => &["dim7"; 12],
        }
    }

    /// Extended ("augmented detail") chord quality per degree
    pub fn augmented_qualities(self) -> Row {
        match self {
            ScaleKind::Ionian => &["maj9", "m9", "m9", "maj11", "9", "m9", "m7b5"],
            ScaleKind::Dorian => &["m9", "m9", "maj9", "11", "m9", "m7b5", "maj9"],
            ScaleKind::Phrygian => &["m9", "maj9", "9", "11", "m7b5", "maj9", "m9"],
            ScaleKind::Lydian => &["maj9", "9", "m9", "m7b5", "maj11", "m9", "m9"],
            ScaleKind::Mixolydian => &["9", "m9", "m7b5", "maj9", "m9", "m9", "maj11"],
            ScaleKind::Aeolian => &["m9", "m7b5", "maj9", "11", "m9", "maj9", "9"],
            ScaleKind::Locrian => &["m7b5", "maj9", "m9", "11", "maj9", "9", "m9"],
            ScaleKind::HarmonicMinor => {
                &["m(maj9)", "m7b5", "maj7#5", "m9", "9", "maj11", "dim7"]
            }
            ScaleKind::MelodicMinor => {
                &["m(maj9)", "m9", "maj7#5", "9", "11", "m7b5", "m7b5"]
            }
            ScaleKind::PentatonicMajor => &["maj9", "m9", "m9", "maj11", "9"],
            ScaleKind::PentatonicMinor => &["m9", "m9", "maj9", "9", "m9"],
            ScaleKind::Blues | ScaleKind::WholeTone => &["13", "13", "13", "13", "13", "13"],
            ScaleKind::Chromatic => &["dim7"; 12],
        }
    }

    /// Available tensions per degree, by extension name
    pub fn extensions(self) -> &'static [Row] {
        match self {
            ScaleKind::Ionian => &[
                &["9", "13"],
                &["9", "11", "13"],
                &["9", "11"],
                &["9", "13"],
                &["9", "13"],
                &["9", "11"],
                // b13 over the half-diminished vii is very tense
                &["11", "b13"],
            ],
            ScaleKind::Dorian => &[
                &["9", "11", "13"],
                &["9", "11", "13"],
                &["9"],
                &["9", "13"],
                &["11"],
                &["11"],
                &["13"],
            ],
            ScaleKind::Phrygian => &[
                &["9", "11"],
                &["9"],
                &["9", "13"],
                &["11"],
                &["11"],
                &["9"],
                &["9", "11"],
            ],
            ScaleKind::Lydian => &[
                &["9", "#11", "13"],
                &["9", "13"],
                &["9", "11"],
                &["11"],
                &["9", "#11"],
                &["9", "11"],
                &["9", "11"],
            ],
            ScaleKind::Mixolydian => &[
                &["9", "13"],
                &["9", "11"],
                &["11"],
                &["9", "13"],
                &["11"],
                &["9"],
                &["13"],
            ],
            ScaleKind::Aeolian => &[
                &["9", "11"],
                &["11"],
                &["9"],
                &["9", "11"],
                &["9"],
                &["9", "13"],
                &["9", "13"],
            ],
            ScaleKind::Locrian => &[
                &["11", "b13"],
                &["9"],
                &["9", "11"],
                &["11"],
                &["9", "13"],
                &["9", "13"],
                &["9", "11"],
            ],
            ScaleKind::HarmonicMinor => &[
                &["9", "11"],
                &["11"],
                &["9", "#11", "13"],
                &["9", "11"],
                &["9", "13"],
                &["9", "#11"],
                &["13"],
            ],
            ScaleKind::MelodicMinor => &[
                &["9", "11", "13"],
                &["9", "11", "13"],
                &["9", "#11"],
                &["9", "13"],
                &["9", "13"],
                &["11"],
                &["11"],
            ],
            ScaleKind::PentatonicMajor => &[
                &["9", "13"],
                &["9", "11"],
                &["9", "11"],
                &["9", "13"],
                &["9", "13"],
            ],
            ScaleKind::PentatonicMinor => &[
                &["9", "11"],
                &["9", "11"],
                &["9"],
                &["9", "13"],
                &["9", "11"],
            ],
            ScaleKind::Blues => &[DOMINANT_TENSIONS; 6],
            ScaleKind::WholeTone => &[WHOLE_TONE_TENSIONS; 6],
            ScaleKind::Chromatic => &[CHROMATIC_TENSIONS; 12],
        }
    }

    /// Roman-numeral analysis per degree
    pub fn roman_numerals(self) -> Row {
        match self {
            ScaleKind::Ionian => &["I", "ii", "iii", "IV", "V", "vi", "vii°"],
            ScaleKind::Dorian => &["i", "ii", "III", "IV", "v", "vi°", "VII"],
            ScaleKind::Phrygian => &["i", "II", "III", "iv", "v°", "VI", "vii"],
            ScaleKind::Lydian => &["I", "II", "iii", "iv°", "V", "vi", "vii"],
            ScaleKind::Mixolydian => &["I", "ii", "iii°", "IV", "v", "vi", "VII"],
            ScaleKind::Aeolian => &["i", "ii°", "III", "iv", "v", "VI", "VII"],
            ScaleKind::Locrian => &["i°", "II", "iii", "iv", "V", "VI", "vii"],
            ScaleKind::HarmonicMinor => &["i", "ii°", "III+", "iv", "V", "VI", "vii°"],
            ScaleKind::MelodicMinor => &["i", "ii", "III+", "IV", "V", "vi°", "vii°"],
            ScaleKind::PentatonicMajor => &["I", "ii", "iii", "IV", "V"],
            ScaleKind::PentatonicMinor => &["i", "iii", "IV", "v", "vii"],
            ScaleKind::Blues | ScaleKind::WholeTone => &["I7", "I7", "I7", "I7", "I7", "I7"],
            ScaleKind::Chromatic => &["i°"; 12],
        }
    }

    /// Descriptive tags shown next to the scale
    pub fn characteristics(self) -> Row {
        match self {
            ScaleKind::Ionian => &["Bright", "Happy", "Stable", "Classical", "Traditional"],
            ScaleKind::Dorian => &["Mysterious", "Jazz", "Blues", "Minor with major 6th", "Modal"],
            ScaleKind::Phrygian => {
                &["Dark", "Spanish", "Flamenco", "Minor with minor 2nd", "Exotic"]
            }
            ScaleKind::Lydian => {
                &["Dreamy", "Floating", "Major with augmented 4th", "Modern", "Ethereal"]
            }
            ScaleKind::Mixolydian => {
                &["Bluesy", "Rock", "Country", "Major with minor 7th", "Dominant"]
            }
            ScaleKind::Aeolian => {
                &["Sad", "Melancholic", "Classical minor", "Natural minor", "Traditional"]
            }
            ScaleKind::Locrian => {
                &["Unstable", "Rare", "Diminished", "Half-diminished", "Experimental"]
            }
            ScaleKind::HarmonicMinor => {
                &["Exotic", "Classical", "Minor with major 7th", "Dramatic", "Romantic"]
            }
            ScaleKind::MelodicMinor => {
                &["Jazz", "Ascending minor", "Major 6th and 7th", "Smooth", "Sophisticated"]
            }
            ScaleKind::PentatonicMajor => &["Simple", "Folk", "Asian", "No semitones", "Universal"],
            ScaleKind::PentatonicMinor => &["Blues", "Rock", "Simple", "No semitones", "Universal"],
            ScaleKind::Blues => &["Blues", "Jazz", "Soul", "Blue notes", "Expressive"],
            ScaleKind::WholeTone => &["Floating", "Dreamy", "Debussy", "Augmented", "Modern"],
            ScaleKind::Chromatic => &["Dissonant", "Modern", "All notes", "Atonal", "Experimental"],
        }
    }

    /// Blue-note offsets from the root: minor 3rd, flat 5th, minor 7th
    pub fn blue_note_intervals(self) -> &'static [i32] {
        match self {
            ScaleKind::Blues
            | ScaleKind::PentatonicMinor
            | ScaleKind::Dorian
            | ScaleKind::Mixolydian => &[3, 6, 10],
            _ => &[],
        }
    }

    /// Common progressions, as roman numerals or explicit dominant patterns
    pub fn chord_progressions(self) -> &'static [Row] {
        match self {
            ScaleKind::Ionian => &[
                &["I", "V", "vi", "IV"],
                &["I", "vi", "IV", "V"],
                &["ii", "V", "I"],
                &["I", "IV", "V", "I"],
            ],
            ScaleKind::Dorian => &[
                &["i", "IV", "i", "v"],
                &["i", "VII", "i", "v"],
                &["i", "bVII", "i", "v"],
            ],
            ScaleKind::Aeolian => &[
                &["i", "bVII", "bVI", "bVII"],
                &["i", "iv", "V", "i"],
                &["i", "bIII", "bVII", "i"],
            ],
            ScaleKind::Blues => &[
                &["I7", "I7", "I7", "I7"],
                &["I7", "IV7", "I7", "I7"],
                &["I7", "IV7", "V7", "I7"],
            ],
            _ => &[],
        }
    }

    /// Harmonically adjacent scales, by name
    pub fn related_scales(self) -> Row {
        match self {
            ScaleKind::Ionian => &[
                "dorian",
                "phrygian",
                "lydian",
                "mixolydian",
                "aeolian (natural minor)",
                "locrian",
            ],
            ScaleKind::Dorian => &[
                "aeolian (natural minor)",
                "phrygian",
                "ionian (major)",
                "mixolydian",
            ],
            ScaleKind::Phrygian => &["locrian", "dorian", "aeolian (natural minor)"],
            ScaleKind::Lydian => &["ionian (major)", "mixolydian"],
            ScaleKind::Mixolydian => &["dorian", "ionian (major)", "lydian"],
            ScaleKind::Aeolian => &["dorian", "phrygian", "harmonic minor", "melodic minor"],
            ScaleKind::HarmonicMinor => &["aeolian (natural minor)", "melodic minor"],
            ScaleKind::MelodicMinor => &["aeolian (natural minor)", "harmonic minor"],
            ScaleKind::PentatonicMajor => &["pentatonic minor", "blues"],
            ScaleKind::PentatonicMinor => &["pentatonic major", "blues"],
            ScaleKind::Blues => &["pentatonic minor", "pentatonic major"],
            ScaleKind::Locrian | ScaleKind::WholeTone | ScaleKind::Chromatic => &[],
        }
    }
}

/// Interval names indexed by semitone distance from the root
pub const INTERVAL_NAMES: [&str; 13] = [
    "Root",
    "Minor 2nd",
    "Major 2nd",
    "Minor 3rd",
    "Major 3rd",
    "Perfect 4th",
    "Tritone",
    "Perfect 5th",
    "Minor 6th",
    "Major 6th",
    "Minor 7th",
    "Major 7th",
    "Octave",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_degree_tables_match_pattern_length() {
        for kind in ScaleKind::ALL {
            let len = kind.pattern().len();
            assert_eq!(kind.seventh_qualities().len(), len, "{}", kind);
            assert_eq!(kind.augmented_qualities().len(), len, "{}", kind);
            assert_eq!(kind.extensions().len(), len, "{}", kind);
            assert_eq!(kind.roman_numerals().len(), len, "{}", kind);
        }
    }

    #[test]
    fn test_patterns_close_the_octave() {
        for kind in ScaleKind::ALL {
            assert_eq!(kind.pattern().iter().sum::<i32>(), 12, "{}", kind);
        }
    }

    #[test]
    fn test_related_scales_are_supported_names() {
        for kind in ScaleKind::ALL {
            for related in kind.related_scales() {
                assert!(ScaleKind::from_name(related).is_some(), "{} -> {}", kind, related);
            }
        }
    }

    #[test]
    fn test_blue_notes_only_for_bluesy_modes() {
        assert_eq!(ScaleKind::Blues.blue_note_intervals(), &[3, 6, 10]);
        assert_eq!(ScaleKind::Mixolydian.blue_note_intervals(), &[3, 6, 10]);
        assert!(ScaleKind::Ionian.blue_note_intervals().is_empty());
        assert!(ScaleKind::Chromatic.blue_note_intervals().is_empty());
    }
}
