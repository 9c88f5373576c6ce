//! Chord shapes written as `<name> = <frets>`, for instance
//! `Cadd9 = x32030` or, where some fret needs two digits, `Cmaj7 = 8-10-10-900`.

use crate::language::{FretDiagram, MUTED};
use crate::regex::*;

const STRINGS: usize = 6;

fn parse_fret(text: &str) -> Option<i8> {
    if text == "x" {
        Some(MUTED)
    } else if !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_digit())
    {
        text.parse()
            .ok()
    } else {
        None
    }
}

/// Each character of the segment is a fret of its own.
fn spread(segment: &str) -> Option<Vec<i8>> {
    segment
        .char_indices()
        .map(|(i, c)| parse_fret(&segment[i..i + c.len_utf8()]))
        .collect()
}

fn parse_frets(spec: &str) -> Option<[i8; STRINGS]> {
    let frets: Vec<i8> = if spec.contains('-') {
        let segments: Vec<&str> = spec
            .split('-')
            .collect();

        if segments.len() == STRINGS {
            segments
                .iter()
                .map(|segment| parse_fret(segment))
                .collect::<Option<_>>()?
        } else {
            // Dashes mark off the frets needing more than one digit; the
            // interior segments are one fret each while the outermost
            // segments may still hold several single-digit frets.
            let last = segments.len() - 1;
            let mut frets = Vec::with_capacity(STRINGS);
            for (i, segment) in segments
                .iter()
                .enumerate()
            {
                if i == 0 || i == last {
                    frets.extend(spread(segment)?);
                } else {
                    frets.push(parse_fret(segment)?);
                }
            }
            frets
        }
    } else {
        spread(spec)?
    };

    frets
        .try_into()
        .ok()
}

/// Decode a fret diagram line, or None if the line is not one.
pub fn decode_fret_diagram(line: &str) -> Option<FretDiagram<'_>> {
    let re = regex!(r"^\s*([^\s=]+)\s*=\s*([0-9x-]+)\s*$");

    let cap = re.captures(line)?;
    let chord = cap
        .get(1)?
        .as_str();
    let frets = parse_frets(
        cap.get(2)?
            .as_str(),
    )?;

    Some(FretDiagram { chord, frets })
}
