//! Classify plain-text chord sheets into typed lines and align chords with
//! the lyrics beneath them.

pub mod alignment;
pub mod formatting;
pub mod language;
pub mod parsing;
pub mod rendering;

mod regex;
