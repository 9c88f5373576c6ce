use crate::alignment::byte_offset;
use crate::language::{Chord, Pair};

/// Slice the lyric line at the columns of the chords above it. Text before
/// the first chord comes out as a pair without a chord; after that there is
/// one pair per chord, running to the next chord or the end of the line.
/// A chord beyond the end of the lyric gets an empty lyric.
///
/// Concatenating the lyrics of the result gives back the whole line.
pub fn pair_chords_with_lyrics<'i>(chords: &[Chord<'i>], line: &'i str) -> Vec<Pair<'i>> {
    let mut result = Vec::with_capacity(chords.len() + 1);

    let first = chords
        .first()
        .map_or(line.len(), |chord| byte_offset(line, chord.offset));
    if first > 0 {
        result.push(Pair::lyric(&line[..first]));
    }

    let mut start = first;
    for (i, chord) in chords
        .iter()
        .enumerate()
    {
        let end = match chords.get(i + 1) {
            Some(next) => byte_offset(line, next.offset).max(start),
            None => line.len(),
        };
        result.push(Pair::chord(&line[start..end], chord.name));
        start = end;
    }

    result
}
