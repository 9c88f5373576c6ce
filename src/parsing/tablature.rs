//! Lines of guitar tablature: a string label, a `|`-delimited track of `-`
//! filler and fret numbers, and whatever follows the closing bar.

use crate::language::{Tab, TabNote};
use crate::regex::*;

/// Whether the line contains a fret track such as `|--3--|`.
pub fn is_tab_line(line: &str) -> bool {
    let re = regex!(r"\|[-\d]*\|");
    re.is_match(line)
}

/// Break a tablature line into its label, notes, and trailing text. The
/// track runs from the first `|` to the last; a `|` between them is a bar
/// line and becomes a one character note of its own. Returns None if the
/// line has fewer than two `|` characters.
pub fn parse_tab_line(line: &str) -> Option<Tab<'_>> {
    let first = line.find('|')?;
    let last = line.rfind('|')?;
    if last == first {
        return None;
    }

    let track = &line[first + 1..last];

    let mut notes = Vec::new();
    let mut start: Option<(usize, usize)> = None;
    let mut length = 0;

    for (column, (offset, c)) in track
        .char_indices()
        .enumerate()
    {
        length = column + 1;

        if c == '-' || c == '|' {
            if let Some((index, begin)) = start.take() {
                notes.push(TabNote {
                    index,
                    note: &track[begin..offset],
                });
            }
            if c == '|' {
                notes.push(TabNote {
                    index: column,
                    note: &track[offset..offset + 1],
                });
            }
        } else if start.is_none() {
            start = Some((column, offset));
        }
    }

    if let Some((index, begin)) = start {
        notes.push(TabNote {
            index,
            note: &track[begin..],
        });
    }

    Some(Tab {
        string: line[..first].trim(),
        notes,
        after: &line[last + 1..],
        length,
        text: line,
    })
}

/// Write a tab record back out as a single line, notes placed at their
/// columns over `-` filler.
pub fn write_tab_line(tab: &Tab) -> String {
    let mut track: Vec<char> = vec!['-'; tab.length];

    for note in &tab.notes {
        for (i, c) in note
            .note
            .chars()
            .enumerate()
        {
            let column = note.index + i;
            if column < track.len() {
                track[column] = c;
            }
        }
    }

    let mut result = String::with_capacity(tab.length + tab.after.len() + 4);
    result.push_str(tab.string);
    result.push('|');
    result.extend(track);
    result.push('|');
    result.push_str(tab.after);
    result
}
