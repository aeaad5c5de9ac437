//! Models module for the jazz theory engine
//!
//! Typed vocabulary (pitch classes, scale kinds, chord levels) and the
//! serializable result structures handed back to JavaScript.

pub mod pitch_class;
pub mod scale_data;
pub mod scale_kind;

// Re-export commonly used types
pub use pitch_class::{PitchClass, Spelling};
pub use scale_data::{ChordQualities, DegreeChord, ScaleData, ScaleDegree};
pub use scale_kind::{ChordLevel, ScaleKind};
