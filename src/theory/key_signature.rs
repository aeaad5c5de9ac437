//! Key signature selection for staff rendering
//!
//! The notation renderer only draws a fixed set of key signatures. Anything
//! outside that set is replaced by C major or A minor.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Key signatures the staff renderer can draw
static SUPPORTED_KEYS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Major
        "C", "G", "D", "A", "E", "B", "F#", "C#", "F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb",
        // Minor (no Cm: C-rooted minor scales are drawn with the A minor signature)
        "Am", "Em", "Bm", "F#m", "C#m", "G#m", "D#m", "A#m", "Dm", "Gm", "Fm", "Bbm", "Ebm", "Abm",
    ]
    .into_iter()
    .collect()
});

pub const MAJOR_FALLBACK: &str = "C";
pub const MINOR_FALLBACK: &str = "Am";

/// Whether a scale name belongs to the minor family ("minor" anywhere in it)
pub fn is_minor_scale(scale_name: &str) -> bool {
    scale_name.to_lowercase().contains("minor")
}

pub fn is_supported_key(key: &str) -> bool {
    SUPPORTED_KEYS.contains(key)
}

/// Key signature for `root` in the given scale
pub fn key_signature(root: &str, scale_name: &str) -> String {
    let minor = is_minor_scale(scale_name);
    let key = if minor {
        format!("{}m", root)
    } else {
        root.to_string()
    };

    if is_supported_key(&key) {
        return key;
    }

    log::debug!("key_signature: '{}' not drawable, using fallback", key);
    if minor {
        MINOR_FALLBACK.to_string()
    } else {
        MAJOR_FALLBACK.to_string()
    }
}
