//! Jazz theory WASM API
//!
//! This module provides the JavaScript-facing API for the theory engine.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serialization and error conversion
//! - `scales`: scale analysis, chords, transposition and selector lists

pub mod helpers;
pub mod scales;

pub use scales::{
    export_scale_data_json, get_available_notes, get_available_scales, get_chord,
    get_degree_chords, get_scale_data, get_scale_data_strict, note_at_interval, transpose_scale,
};
