//! Jazz Theory WASM Module
//!
//! Scale and chord engine for the jazz theory explorer. Given a root note and
//! a scale or mode name it derives the notes, degrees, seventh and extended
//! chord qualities, extensions, roman-numeral analysis, related scales and a
//! drawable key signature.
//!
//! The engine is total: unknown input falls back to defaults instead of
//! failing, so the UI always has something to render.

pub mod api;
pub mod error;
pub mod models;
pub mod theory;

// Re-export commonly used types
pub use error::TheoryError;
pub use models::*;
pub use theory::{
    available_notes, available_scales, build_scale, degree_chords, get_chord, get_scale_data,
    note_at_interval, scale_data_json, scale_data_strict, transpose_scale,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        wasm_warn!("Logger already initialized");
    }

    log::info!("Jazz theory WASM module initialized");
}
