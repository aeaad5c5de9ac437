//! Music theory engine
//!
//! Pure functions over immutable tables: nothing here keeps state between
//! calls, so every entry point is safe to call from anywhere, any number of
//! times.

pub mod analysis;
pub mod chord;
pub mod interval;
pub mod key_signature;
pub mod scale_builder;
pub mod tables;

pub use analysis::{
    available_notes, available_scales, degree_chords, get_scale_data, scale_data_json,
    scale_data_strict, transpose_scale,
};
pub use chord::{chord_intervals, extension_notes, get_chord};
pub use interval::{interval_names, note_at_interval};
pub use key_signature::key_signature;
pub use scale_builder::build_scale;
