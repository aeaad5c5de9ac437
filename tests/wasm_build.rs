//! WASM build test
//!
//! Exercises the exported JavaScript API inside a browser.

#![cfg(target_arch = "wasm32")]

use jazz_theory_wasm::api::*;
use jazz_theory_wasm::{DegreeChord, ScaleData};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn scale_data(root: &str, scale: &str) -> ScaleData {
    let js = get_scale_data(root, scale).unwrap();
    serde_wasm_bindgen::from_value(js).unwrap()
}

#[wasm_bindgen_test]
fn test_get_scale_data_roundtrip() {
    let data = scale_data("C", "ionian (major)");
    assert_eq!(data.notes, vec!["C", "D", "E", "F", "G", "A", "B"]);
    assert_eq!(data.key_signature, "C");
}

#[wasm_bindgen_test]
fn test_get_scale_data_strict_rejects_unknown_scale() {
    assert!(get_scale_data_strict("C", "bebop").is_err());
    assert!(get_scale_data_strict("C", "dorian").is_ok());
    assert!(get_scale_data_strict("Bb", "dorian").is_ok());
}

#[wasm_bindgen_test]
fn test_get_chord_from_js_array() {
    let scale = serde_wasm_bindgen::to_value(&vec!["C", "D", "E", "F", "G", "A", "B"]).unwrap();
    let chord = get_chord("C", scale, 4, "7").unwrap();
    let notes: Vec<String> = chord.iter().filter_map(|v| v.as_string()).collect();
    assert_eq!(notes, vec!["G", "B", "D", "F"]);
}

#[wasm_bindgen_test]
fn test_get_chord_rejects_non_array() {
    assert!(get_chord("C", JsValue::from_f64(3.0), 0, "maj7").is_err());
}

#[wasm_bindgen_test]
fn test_transpose_scale() {
    let c_dorian = get_scale_data("C", "dorian").unwrap();
    let transposed: ScaleData =
        serde_wasm_bindgen::from_value(transpose_scale(c_dorian, 2).unwrap()).unwrap();
    assert_eq!(transposed, scale_data("D", "dorian"));
}

#[wasm_bindgen_test]
fn test_degree_chords_levels() {
    let data = get_scale_data("C", "ionian (major)").unwrap();
    let augmented = get_degree_chords(data.clone(), "augmented").unwrap();
    let chords: Vec<DegreeChord> = serde_wasm_bindgen::from_value(augmented).unwrap();
    assert_eq!(chords[0].chord, "Cmaj9");

    assert!(get_degree_chords(data, "ninth").is_err());
}

#[wasm_bindgen_test]
fn test_selector_lists() {
    assert_eq!(get_available_scales().length(), 14);
    assert_eq!(get_available_notes().length(), 12);
}

#[wasm_bindgen_test]
fn test_note_at_interval_flats() {
    assert_eq!(note_at_interval("C", 10, true), "Bb");
    assert_eq!(note_at_interval("C", 10, false), "A#");
}

#[wasm_bindgen_test]
fn test_export_json() {
    let json = export_scale_data_json("A", "blues").unwrap();
    assert!(json.contains("\"blueNotes\""));
}
