//! Classify each line of a chord sheet.
//!
//! Lines are taken one at a time with trailing whitespace removed. Whether
//! an ordinary line of prose is an annotation or a lyric depends on the line
//! emitted before it, so that line is carried along as the state of a fold
//! over the input.

use crate::language::{Chord, LogicalLine};
use crate::parsing::chords::is_chord_line;
use crate::parsing::diagram::decode_fret_diagram;
use crate::parsing::tablature::{is_tab_line, parse_tab_line};
use crate::regex::*;

#[derive(Default)]
struct Classifier<'i> {
    lines: Vec<LogicalLine<'i>>,
    suppressed: bool,
}

impl<'i> Classifier<'i> {
    fn previous(&self) -> Option<&LogicalLine<'i>> {
        self.lines
            .last()
    }

    /// A single blank line directly after chords is dropped, as the chords
    /// belong to whatever follows. So is a single blank between two lines
    /// of tablature, keeping a tab block together.
    fn swallows_blank(&self, next: Option<&str>) -> bool {
        if self.suppressed {
            return false;
        }
        match self.previous() {
            Some(LogicalLine::Chords { .. }) => true,
            Some(LogicalLine::Tab(_)) => next.is_some_and(|line| {
                !is_blank(line) && matches!(classify_line(line, self.previous()), LogicalLine::Tab(_))
            }),
            _ => false,
        }
    }

    fn accept(mut self, line: &'i str, next: Option<&str>) -> Self {
        if is_blank(line) {
            if self.swallows_blank(next) {
                self.suppressed = true;
                return self;
            }
            self.emit(LogicalLine::Blank)
        } else {
            let classified = classify_line(line, self.previous());
            self.emit(classified)
        }
    }

    fn emit(mut self, line: LogicalLine<'i>) -> Self {
        self.suppressed = false;
        self.lines
            .push(line);
        self
    }
}

fn is_blank(line: &str) -> bool {
    line.trim()
        .is_empty()
}

fn is_rule(line: &str) -> bool {
    line.chars()
        .all(|c| c == '-')
        || line
            .chars()
            .all(|c| c == '=')
}

/// Every maximal run of non-whitespace, with the column it starts at.
fn tokens(line: &str) -> Vec<Chord<'_>> {
    let mut result = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for (column, (offset, c)) in line
        .char_indices()
        .enumerate()
    {
        if c.is_whitespace() {
            if let Some((begin, first)) = start.take() {
                result.push(Chord {
                    name: &line[begin..offset],
                    offset: first,
                });
            }
        } else if start.is_none() {
            start = Some((offset, column));
        }
    }

    if let Some((begin, first)) = start {
        result.push(Chord {
            name: &line[begin..],
            offset: first,
        });
    }

    result
}

/// Classify a single non-blank line, given the line emitted before it.
pub fn classify_line<'i>(line: &'i str, previous: Option<&LogicalLine>) -> LogicalLine<'i> {
    let line = line.trim_end();

    if is_blank(line) {
        return LogicalLine::Blank;
    }

    if is_rule(line) {
        return LogicalLine::Rule { text: line };
    }

    if is_tab_line(line) {
        if let Some(tab) = parse_tab_line(line) {
            return LogicalLine::Tab(tab);
        }
    }

    let re = regex!(r"\[(.+)\]");
    if let Some(cap) = re.captures(line) {
        if let Some(title) = cap.get(1) {
            return LogicalLine::Section {
                title: title.as_str(),
                text: line,
            };
        }
    }

    if let Some(diagram) = decode_fret_diagram(line) {
        return LogicalLine::Diagram {
            diagram,
            text: line,
        };
    }

    if is_chord_line(line) {
        return LogicalLine::Chords {
            chords: tokens(line),
            text: line,
        };
    }

    match previous {
        Some(LogicalLine::Chords { .. }) | Some(LogicalLine::Lyrics { .. }) => {
            LogicalLine::Lyrics { text: line }
        }
        _ => LogicalLine::Annotation { text: line },
    }
}

/// Split text into lines and classify each one. Every input line yields
/// exactly one logical line, except for the blank lines swallowed after
/// chords or within tablature.
pub fn classify_lines(text: &str) -> Vec<LogicalLine<'_>> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim_end)
        .collect();

    let following = lines
        .iter()
        .skip(1)
        .copied()
        .map(Some)
        .chain(std::iter::once(None));

    lines
        .iter()
        .copied()
        .zip(following)
        .fold(Classifier::default(), |state, (line, next)| state.accept(line, next))
        .lines
}
