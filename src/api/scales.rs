//! Scale and chord operations for the WASM API
//!
//! JavaScript-facing wrappers around the engine. Lookups follow the
//! engine's fallback rules: a bad root or scale name never throws, except
//! through `getScaleDataStrict`, which exists for callers that want to
//! validate input.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize, theory_error, to_js_array};
use crate::models::{ChordLevel, ScaleData, Spelling};
use crate::theory;
use crate::{wasm_info, wasm_log, wasm_warn};

/// Full analysis of a scale on a root
///
/// # Parameters
/// - `root`: note name, one of `getAvailableNotes()`
/// - `scale_name`: scale name, one of `getAvailableScales()`
///
/// # Returns
/// `ScaleData` object (camelCase fields)
#[wasm_bindgen(js_name = getScaleData)]
pub fn get_scale_data(root: &str, scale_name: &str) -> Result<JsValue, JsValue> {
    wasm_log!("getScaleData called: root='{}', scale='{}'", root, scale_name);

    let data = theory::get_scale_data(root, scale_name);
    serialize(&data, "ScaleData serialization error")
}

/// Same as `getScaleData`, but throws on an unknown root or scale
#[wasm_bindgen(js_name = getScaleDataStrict)]
pub fn get_scale_data_strict(root: &str, scale_name: &str) -> Result<JsValue, JsValue> {
    wasm_log!("getScaleDataStrict called: root='{}', scale='{}'", root, scale_name);

    let data = theory::scale_data_strict(root, scale_name).map_err(theory_error)?;
    serialize(&data, "ScaleData serialization error")
}

/// Chord tones for one degree of a scale
///
/// # Parameters
/// - `root`: scale root, used as chord root when `degree` is out of range
/// - `scale_js`: array of note names (usually `scaleData.notes`)
/// - `degree`: 0-based degree index
/// - `quality`: chord quality ("maj7", "m9", ...); unknown qualities give a dominant 7th
#[wasm_bindgen(js_name = getChord)]
pub fn get_chord(
    root: &str,
    scale_js: JsValue,
    degree: usize,
    quality: &str,
) -> Result<js_sys::Array, JsValue> {
    let scale: Vec<String> = deserialize(scale_js, "Scale deserialization error")?;

    if degree >= scale.len() {
        wasm_warn!(
            "getChord: degree {} out of range ({} notes), using root '{}'",
            degree,
            scale.len(),
            root
        );
    }

    let chord = theory::get_chord(root, scale.as_slice(), degree, quality);
    Ok(to_js_array(&chord))
}

/// Chords of every degree at the chosen level
///
/// # Parameters
/// - `scale_data_js`: a `ScaleData` object as returned by `getScaleData`
/// - `level`: `"seventh"` or `"augmented"`
#[wasm_bindgen(js_name = getDegreeChords)]
pub fn get_degree_chords(scale_data_js: JsValue, level: &str) -> Result<JsValue, JsValue> {
    let scale_data: ScaleData = deserialize(scale_data_js, "ScaleData deserialization error")?;
    let level: ChordLevel = level.parse().map_err(theory_error)?;

    let chords = theory::degree_chords(&scale_data, level);
    serialize(&chords, "DegreeChord serialization error")
}

/// Re-derive a scale on a new root
#[wasm_bindgen(js_name = transposeScale)]
pub fn transpose_scale(scale_data_js: JsValue, semitones: i32) -> Result<JsValue, JsValue> {
    let scale_data: ScaleData = deserialize(scale_data_js, "ScaleData deserialization error")?;
    wasm_info!("transposeScale: '{}' by {} semitones", scale_data.name, semitones);

    let transposed = theory::transpose_scale(&scale_data, semitones);
    serialize(&transposed, "ScaleData serialization error")
}

/// Note a number of semitones away from `root`
#[wasm_bindgen(js_name = noteAtInterval)]
pub fn note_at_interval(root: &str, semitones: i32, prefer_flats: bool) -> String {
    theory::note_at_interval(root, semitones, Spelling::from_prefer_flats(prefer_flats))
}

#[wasm_bindgen(js_name = getAvailableScales)]
pub fn get_available_scales() -> js_sys::Array {
    to_js_array(&theory::available_scales())
}

#[wasm_bindgen(js_name = getAvailableNotes)]
pub fn get_available_notes() -> js_sys::Array {
    to_js_array(&theory::available_notes())
}

/// Pretty JSON of a scale analysis, for debug panels
#[wasm_bindgen(js_name = exportScaleDataJson)]
pub fn export_scale_data_json(root: &str, scale_name: &str) -> Result<String, JsValue> {
    wasm_info!("exportScaleDataJson called: root='{}', scale='{}'", root, scale_name);

    theory::scale_data_json(root, scale_name).map_err(theory_error)
}
