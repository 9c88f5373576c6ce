//! Breaking aligned pairs into words, and reattaching chords that spill
//! over into the following word.

use crate::language::{Fragment, Pair, Word};

/// Chord names are set in a heavier, wider face than the lyrics, so each
/// character of a chord counts for this many characters of lyric.
pub const CHORD_WIDTH_FACTOR: usize = 2;

/// Alternating runs of whitespace and non-whitespace.
fn split_runs(lyric: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut previous: Option<bool> = None;

    for (offset, c) in lyric.char_indices() {
        let space = c.is_whitespace();
        if previous.is_some_and(|p| p != space) {
            result.push(&lyric[start..offset]);
            start = offset;
        }
        previous = Some(space);
    }

    if start < lyric.len() {
        result.push(&lyric[start..]);
    }

    result
}

/// Split the pairs into words. Whitespace runs become words of their own;
/// everything between them accumulates into a single word, even across
/// pairs. A pair's chord goes on the first fragment cut from its lyric, or
/// on an empty fragment if its lyric is empty.
///
/// Concatenating every fragment of every word gives back the lyric line.
pub fn segment_into_words<'i>(pairs: &[Pair<'i>]) -> Vec<Word<'i>> {
    let mut words = Vec::new();
    let mut current: Vec<Fragment<'i>> = Vec::new();

    for pair in pairs {
        let runs = split_runs(pair.lyric);

        let fragments: Vec<Fragment<'i>> = if runs.is_empty() {
            pair.chord
                .map(|chord| Fragment::new("", Some(chord)))
                .into_iter()
                .collect()
        } else {
            runs.into_iter()
                .enumerate()
                .map(|(i, run)| Fragment::new(run, if i == 0 { pair.chord } else { None }))
                .collect()
        };

        for fragment in fragments {
            if fragment.is_whitespace() {
                words.push(Word(std::mem::take(&mut current)));
                words.push(Word(vec![fragment]));
            } else {
                current.push(fragment);
            }
        }
    }

    words.push(Word(current));
    words
}

/// How far the last chord in the word sticks out past the end of the word:
/// twice the chord's length less the characters from the start of its
/// fragment to the end of the word. Zero if the word has no chord.
pub fn overhang(word: &Word) -> usize {
    let mut trailing = 0;
    for fragment in word
        .fragments()
        .iter()
        .rev()
    {
        trailing += fragment.width();
        if let Some(chord) = fragment.chord {
            return (chord
                .chars()
                .count()
                * CHORD_WIDTH_FACTOR)
                .saturating_sub(trailing);
        }
    }
    0
}

/// Characters before the first chord in the word, or usize::MAX if the word
/// carries no chord at all.
pub fn underhang(word: &Word) -> usize {
    let mut leading = 0;
    for fragment in word.fragments() {
        if fragment
            .chord
            .is_some()
        {
            return leading;
        }
        leading += fragment.width();
    }
    usize::MAX
}

fn should_merge(first: &Word, second: &Word) -> bool {
    let over = overhang(first);
    over > 0 && over < underhang(second)
}

/// Append the second word to the first, folding each chordless fragment
/// into the one before it.
fn join<'i>(first: Word<'i>, second: Word<'i>) -> Word<'i> {
    let fragments = first
        .0
        .into_iter()
        .chain(second.0)
        .fold(Vec::new(), |mut acc: Vec<Fragment<'i>>, fragment| {
            if fragment
                .chord
                .is_none()
            {
                if let Some(previous) = acc.last_mut() {
                    previous
                        .lyric
                        .to_mut()
                        .push_str(&fragment.lyric);
                    return acc;
                }
            }
            acc.push(fragment);
            acc
        });
    Word(fragments)
}

/// Merge each word into the one before it while the chord at the end of
/// that word overhangs the start of the next one, so a wide chord does not
/// run into unrelated text. A merged word is checked again against the word
/// after it.
pub fn merge_overhanging_words(words: Vec<Word<'_>>) -> Vec<Word<'_>> {
    words
        .into_iter()
        .fold(Vec::new(), |mut result, word| {
            match result.pop() {
                Some(last) if should_merge(&last, &word) => result.push(join(last, word)),
                Some(last) => {
                    result.push(last);
                    result.push(word);
                }
                None => result.push(word),
            }
            result
        })
}
