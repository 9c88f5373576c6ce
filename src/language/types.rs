//! Types representing a chord sheet once its lines have been classified,
//! and the pieces a chords/lyrics pair is broken into for alignment.

use std::borrow::Cow;

use serde::Serialize;

/// A chord sheet ready for presentation: optional heading details and the
/// classified lines of its body.
#[derive(Eq, Debug, PartialEq, Default, Serialize)]
pub struct Document<'i> {
    pub header: Option<Metadata<'i>>,
    pub body: Vec<LogicalLine<'i>>,
}

#[derive(Eq, Debug, PartialEq, Default, Serialize)]
pub struct Metadata<'i> {
    pub title: Option<&'i str>,
    pub artist: Option<&'i str>,
}

/// One line of input, classified.
#[derive(Eq, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LogicalLine<'i> {
    Annotation {
        text: &'i str,
    },
    Section {
        title: &'i str,
        text: &'i str,
    },
    Chords {
        chords: Vec<Chord<'i>>,
        text: &'i str,
    },
    Lyrics {
        text: &'i str,
    },
    Blank,
    Rule {
        text: &'i str,
    },
    Tab(Tab<'i>),
    Diagram {
        diagram: FretDiagram<'i>,
        text: &'i str,
    },
}

impl<'i> LogicalLine<'i> {
    /// Short lowercase name of the variant, as used in serialized output.
    pub fn kind(&self) -> &'static str {
        match self {
            LogicalLine::Annotation { .. } => "annotation",
            LogicalLine::Section { .. } => "section",
            LogicalLine::Chords { .. } => "chords",
            LogicalLine::Lyrics { .. } => "lyrics",
            LogicalLine::Blank => "blank",
            LogicalLine::Rule { .. } => "rule",
            LogicalLine::Tab(_) => "tab",
            LogicalLine::Diagram { .. } => "diagram",
        }
    }

    /// The source text of the line, trailing whitespace removed. Blank
    /// lines have none.
    pub fn text(&self) -> &'i str {
        match self {
            LogicalLine::Annotation { text }
            | LogicalLine::Section { text, .. }
            | LogicalLine::Chords { text, .. }
            | LogicalLine::Lyrics { text }
            | LogicalLine::Rule { text }
            | LogicalLine::Diagram { text, .. } => *text,
            LogicalLine::Tab(tab) => tab.text,
            LogicalLine::Blank => "",
        }
    }
}

/// A chord name and the zero-based column (in characters) where it begins.
#[derive(Eq, Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Chord<'i> {
    pub name: &'i str,
    pub offset: usize,
}

/// One line of ASCII tablature, e.g. `e|---0---|-3--|`.
#[derive(Eq, Debug, PartialEq, Serialize)]
pub struct Tab<'i> {
    pub string: &'i str,
    pub notes: Vec<TabNote<'i>>,
    pub after: &'i str,
    pub length: usize,
    #[serde(skip)]
    pub text: &'i str,
}

/// Something played (or a bar line) at a column of the track, counted from
/// the character after the opening `|`.
#[derive(Eq, Debug, PartialEq, Clone, Copy, Serialize)]
pub struct TabNote<'i> {
    pub index: usize,
    pub note: &'i str,
}

/// A span of lyric text with the chord (if any) sounding from its start.
#[derive(Eq, Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Pair<'i> {
    pub lyric: &'i str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord: Option<&'i str>,
}

impl<'i> Pair<'i> {
    pub fn lyric(lyric: &'i str) -> Pair<'i> {
        Pair { lyric, chord: None }
    }

    pub fn chord(lyric: &'i str, chord: &'i str) -> Pair<'i> {
        Pair {
            lyric,
            chord: Some(chord),
        }
    }
}

/// A piece of a word. The lyric is either entirely whitespace or contains
/// none; after merging it may be the concatenation of several pieces.
#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub struct Fragment<'i> {
    pub lyric: Cow<'i, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord: Option<&'i str>,
}

impl<'i> Fragment<'i> {
    pub fn new(lyric: &'i str, chord: Option<&'i str>) -> Fragment<'i> {
        Fragment {
            lyric: Cow::Borrowed(lyric),
            chord,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        !self
            .lyric
            .is_empty()
            && self
                .lyric
                .chars()
                .all(char::is_whitespace)
    }

    /// Width in characters of the lyric text.
    pub fn width(&self) -> usize {
        self.lyric
            .chars()
            .count()
    }
}

/// A run of fragments displayed as one unit. A whitespace fragment is always
/// a word on its own.
#[derive(Eq, Debug, PartialEq, Clone, Default, Serialize)]
pub struct Word<'i>(pub Vec<Fragment<'i>>);

impl<'i> Word<'i> {
    pub fn fragments(&self) -> &[Fragment<'i>] {
        &self.0
    }

    /// The lyric text of the whole word.
    pub fn text(&self) -> String {
        self.0
            .iter()
            .map(|fragment| fragment.lyric.as_ref())
            .collect()
    }
}

/// Fret value for a string that is not played.
pub const MUTED: i8 = -1;

/// Fret value for a string played open.
pub const OPEN: i8 = 0;

/// A chord shape: one fret per string, in the order written.
#[derive(Eq, Debug, PartialEq, Clone, Copy, Serialize)]
pub struct FretDiagram<'i> {
    pub chord: &'i str,
    pub frets: [i8; 6],
}

impl FretDiagram<'_> {
    /// Lowest and highest fretted positions, ignoring open and muted
    /// strings, or None if nothing is fretted.
    pub fn span(&self) -> Option<(i8, i8)> {
        self.frets
            .iter()
            .copied()
            .filter(|fret| *fret > OPEN)
            .fold(None, |span, fret| match span {
                None => Some((fret, fret)),
                Some((lowest, highest)) => Some((lowest.min(fret), highest.max(fret))),
            })
    }
}
