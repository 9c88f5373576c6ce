//! Reading chord sheets and classifying their lines

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, LogicalLine};

pub mod chords;
pub mod classifier;
pub mod diagram;
pub mod tablature;

pub use chords::{detect_chords, is_chord_line};
pub use classifier::{classify_line, classify_lines};
pub use diagram::decode_fret_diagram;
pub use tablature::{is_tab_line, parse_tab_line, write_tab_line};

/// Read a file and return an owned String, or read standard input if the
/// filename given is "-". The classified lines returned by parse() below
/// borrow from this String.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Classify the lines of a chord sheet. This never fails; anything not
/// otherwise recognized ends up as an annotation or a lyric.
pub fn parse(content: &str) -> Vec<LogicalLine<'_>> {
    let lines = classify_lines(content);

    let count = |kind: &str| {
        lines
            .iter()
            .filter(|line| line.kind() == kind)
            .count()
    };

    debug!(
        "Found {} line{}: {} chords, {} lyrics, {} sections, {} tab",
        lines.len(),
        if lines.len() == 1 { "" } else { "s" },
        count("chords"),
        count("lyrics"),
        count("section"),
        count("tab")
    );

    lines
}
