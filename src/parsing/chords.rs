//! Recognizing chord names within a line of text.
//!
//! A chord name is a root note A to G, any number of `b` or `#`
//! accidentals, an optional quality, an optional extension number, an
//! optional suspension (`sus` and digits), and an optional bass note after
//! a slash. Every group but the root is optional, so rather than a single
//! pattern each rule below returns all the positions it could end at and
//! the longest overall match that finishes on a word boundary wins.

const QUALITIES: [&str; 8] = ["maj", "min", "dim", "aug", "m", "M", "+", "-"];

fn is_note(c: char) -> bool {
    matches!(c, 'A'..='G')
}

fn is_accidental(c: char) -> bool {
    c == 'b' || c == '#'
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Every position reachable by consuming zero or more characters
/// satisfying the predicate, starting at `position`.
fn repeat(chars: &[char], position: usize, predicate: fn(char) -> bool) -> Vec<usize> {
    let run = chars[position.min(chars.len())..]
        .iter()
        .take_while(|c| predicate(**c))
        .count();
    (position..=position + run).collect()
}

fn starts_with(chars: &[char], position: usize, literal: &str) -> bool {
    let mut i = position;
    for expected in literal.chars() {
        match chars.get(i) {
            Some(c) if *c == expected => i += 1,
            _ => return false,
        }
    }
    true
}

fn quality(chars: &[char], position: usize) -> Vec<usize> {
    let mut result = vec![position];
    for marker in QUALITIES {
        if starts_with(chars, position, marker) {
            result.push(position + marker.len());
        }
    }
    result
}

fn suspension(chars: &[char], position: usize) -> Vec<usize> {
    let mut result = vec![position];
    if starts_with(chars, position, "sus") {
        result.extend(repeat(chars, position + 3, |c| c.is_ascii_digit()));
    }
    result
}

fn bass(chars: &[char], position: usize) -> Vec<usize> {
    let mut result = vec![position];
    if chars.get(position) == Some(&'/')
        && chars
            .get(position + 1)
            .is_some_and(|c| is_note(*c))
    {
        result.extend(repeat(chars, position + 2, is_accidental));
    }
    result
}

fn step<F>(positions: Vec<usize>, rule: F) -> Vec<usize>
where
    F: Fn(usize) -> Vec<usize>,
{
    let mut result: Vec<usize> = positions
        .into_iter()
        .flat_map(rule)
        .collect();
    result.sort_unstable();
    result.dedup();
    result
}

fn starts_word(chars: &[char], position: usize) -> bool {
    position == 0 || !is_word(chars[position - 1])
}

fn ends_word(chars: &[char], position: usize) -> bool {
    chars
        .get(position)
        .map_or(true, |c| !is_word(*c))
}

/// Try to match a chord name beginning at `start`, returning the position
/// one past its end.
fn match_chord(chars: &[char], start: usize) -> Option<usize> {
    if !chars
        .get(start)
        .is_some_and(|c| is_note(*c))
        || !starts_word(chars, start)
    {
        return None;
    }

    let positions = repeat(chars, start + 1, is_accidental);
    let positions = step(positions, |p| quality(chars, p));
    let positions = step(positions, |p| repeat(chars, p, |c| c.is_ascii_digit()));
    let positions = step(positions, |p| suspension(chars, p));
    let positions = step(positions, |p| bass(chars, p));

    positions
        .into_iter()
        .rev()
        .find(|end| ends_word(chars, *end))
}

/// Find every chord-shaped substring of the line, left to right.
pub fn detect_chords(line: &str) -> Vec<&str> {
    let indices: Vec<(usize, char)> = line
        .char_indices()
        .collect();
    let chars: Vec<char> = indices
        .iter()
        .map(|(_, c)| *c)
        .collect();
    let byte = |i: usize| {
        indices
            .get(i)
            .map_or(line.len(), |(offset, _)| *offset)
    };

    let mut result = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match match_chord(&chars, i) {
            Some(end) => {
                result.push(&line[byte(i)..byte(end)]);
                i = end;
            }
            None => i += 1,
        }
    }
    result
}

/// A line is made of chords if at least half as many chord names can be
/// found in it as there are whitespace-separated tokens.
pub fn is_chord_line(line: &str) -> bool {
    let tokens = line
        .split_whitespace()
        .count();
    if tokens == 0 {
        return false;
    }
    detect_chords(line).len() * 2 >= tokens
}
