//! Lay a chord sheet out as text, chords set above the lyric syllables they
//! belong to.

use crate::alignment::{merge_overhanging_words, pair_chords_with_lyrics, segment_into_words};
use crate::formatting::*;
use crate::language::*;
use crate::parsing::write_tab_line;

pub fn format_with_renderer(document: &Document) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    if let Some(metadata) = &document.header {
        output.format_header(metadata);
    }

    output.format_body(&document.body);

    output.fragments
}

type Row = Vec<(Syntax, String)>;

struct Formatter {
    fragments: Vec<(Syntax, String)>,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        if content.is_empty() {
            return;
        }
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn append_newline(&mut self) {
        self.fragments
            .push((Syntax::Newline, "\n".to_string()));
    }

    fn append_row(&mut self, mut row: Row) {
        trim_row(&mut row);
        self.fragments
            .extend(row);
        self.append_newline();
    }

    fn format_header(&mut self, metadata: &Metadata) {
        let mut any = false;

        if let Some(title) = metadata.title {
            self.append(Syntax::Title, title);
            self.append_newline();
            any = true;
        }

        if let Some(artist) = metadata.artist {
            self.append(Syntax::Byline, &format!("by {}", artist));
            self.append_newline();
            any = true;
        }

        if any {
            self.append_newline();
        }
    }

    fn format_body(&mut self, lines: &[LogicalLine]) {
        let mut i = 0;
        while i < lines.len() {
            match (&lines[i], lines.get(i + 1)) {
                (LogicalLine::Chords { chords, .. }, Some(LogicalLine::Lyrics { text })) => {
                    self.append_aligned(chords, text);
                    i += 2;
                }
                (line, _) => {
                    self.append_line(line);
                    i += 1;
                }
            }
        }
    }

    fn append_line(&mut self, line: &LogicalLine) {
        match line {
            LogicalLine::Annotation { text } => {
                self.append(Syntax::Annotation, text);
                self.append_newline();
            }
            LogicalLine::Section { title, .. } => {
                self.append(Syntax::Section, &format!("[{}]", title));
                self.append_newline();
            }
            LogicalLine::Chords { chords, .. } => {
                self.append_chords(chords);
            }
            LogicalLine::Lyrics { text } => {
                self.append(Syntax::Lyric, text);
                self.append_newline();
            }
            LogicalLine::Blank => {
                self.append_newline();
            }
            LogicalLine::Rule { text } => {
                self.append(Syntax::Rule, text);
                self.append_newline();
            }
            LogicalLine::Tab(tab) => {
                self.append(Syntax::Tab, &write_tab_line(tab));
                self.append_newline();
            }
            LogicalLine::Diagram { diagram, .. } => {
                self.append_diagram(diagram);
            }
        }
    }

    /// Chords with no lyric beneath them (an intro, an instrumental), kept
    /// at the columns they were written at.
    fn append_chords(&mut self, chords: &[Chord]) {
        let mut row = Row::new();
        let mut column = 0;

        for chord in chords {
            let gap = if chord.offset > column {
                chord.offset - column
            } else if column > 0 {
                1
            } else {
                0
            };
            pad(&mut row, gap);
            row.push((Syntax::Chord, chord.name.to_string()));
            column += gap
                + chord
                    .name
                    .chars()
                    .count();
        }

        self.append_row(row);
    }

    /// A chords line and the lyric under it, as two rows. Each fragment of
    /// each word gets a cell wide enough for both its lyric and its chord.
    fn append_aligned(&mut self, chords: &[Chord], lyrics: &str) {
        let pairs = pair_chords_with_lyrics(chords, lyrics);
        let words = merge_overhanging_words(segment_into_words(&pairs));

        let mut above = Row::new();
        let mut below = Row::new();

        for fragment in words
            .iter()
            .flat_map(Word::fragments)
        {
            let lyric = fragment.width();
            let chord = fragment
                .chord
                .map_or(0, |name| {
                    name.chars()
                        .count()
                        + 1
                });
            let width = lyric.max(chord);

            match fragment.chord {
                Some(name) => {
                    above.push((Syntax::Chord, name.to_string()));
                    pad(&mut above, width + 1 - chord);
                }
                None => pad(&mut above, width),
            }

            below.push((Syntax::Lyric, fragment.lyric.to_string()));
            pad(&mut below, width - lyric);
        }

        self.append_row(above);
        self.append_row(below);
    }

    fn append_diagram(&mut self, diagram: &FretDiagram) {
        self.append(Syntax::Chord, diagram.chord);
        self.append_newline();

        let markers: Vec<String> = diagram
            .frets
            .iter()
            .map(|fret| match *fret {
                MUTED => "x".to_string(),
                OPEN => "o".to_string(),
                _ => " ".to_string(),
            })
            .collect();
        self.append_row(vec![(Syntax::Diagram, format!("   {}", markers.join(" ")))]);

        if let Some((lowest, highest)) = diagram.span() {
            for position in lowest..=highest {
                let strings: Vec<&str> = diagram
                    .frets
                    .iter()
                    .map(|fret| if *fret == position { "*" } else { "|" })
                    .collect();
                self.append_row(vec![(
                    Syntax::Diagram,
                    format!("{:>2} {}", position, strings.join(" ")),
                )]);
            }
        }
    }
}

fn pad(row: &mut Row, width: usize) {
    if width > 0 {
        row.push((Syntax::Neutral, " ".repeat(width)));
    }
}

/// Remove trailing whitespace from the end of a row, and any fragments left
/// empty by doing so.
fn trim_row(row: &mut Row) {
    while let Some((_, content)) = row.last_mut() {
        let length = content
            .trim_end()
            .len();
        content.truncate(length);
        if content.is_empty() {
            row.pop();
        } else {
            break;
        }
    }
}
