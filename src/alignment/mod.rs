//! Lining chords up with the lyric beneath them, then breaking the result
//! into words for display.

pub mod pairing;
pub mod words;

pub use pairing::pair_chords_with_lyrics;
pub use words::{merge_overhanging_words, overhang, segment_into_words, underhang};

/// Byte offset of the given character column, clamped to the end of the
/// line.
pub(crate) fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(offset, _)| offset)
}
