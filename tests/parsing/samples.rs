#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use chordsheet::alignment::*;
    use chordsheet::formatting::{render, Identity};
    use chordsheet::language::*;
    use chordsheet::parsing;

    fn sample_files() -> Vec<PathBuf> {
        let dir = Path::new("tests/samples/");

        assert!(dir.exists(), "samples directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read samples directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("txt")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .txt files found in samples directory");
        files
    }

    #[test]
    fn ensure_samples_classify() {
        for file in sample_files() {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let lines = parsing::parse(&content);

            // at most one line per input line; only blanks go missing
            let total = content
                .split('\n')
                .count();
            let blanks = content
                .split('\n')
                .filter(|line| {
                    line.trim()
                        .is_empty()
                })
                .count();
            let emitted = lines
                .iter()
                .filter(|line| **line != LogicalLine::Blank)
                .count();
            assert!(lines.len() <= total, "{:?}", file);
            assert_eq!(emitted, total - blanks, "{:?}", file);

            for line in &lines {
                if let LogicalLine::Chords { chords, text } = line {
                    assert!(!chords.is_empty(), "{:?}: {}", file, text);
                    for pair in chords.windows(2) {
                        assert!(pair[0].offset < pair[1].offset, "{:?}: {}", file, text);
                    }
                    let columns = text
                        .chars()
                        .count();
                    assert!(
                        chords
                            .iter()
                            .all(|chord| chord.offset < columns),
                        "{:?}: {}",
                        file,
                        text
                    );
                }
            }
        }
    }

    #[test]
    fn ensure_samples_align() {
        for file in sample_files() {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let lines = parsing::parse(&content);

            for window in lines.windows(2) {
                if let (LogicalLine::Chords { chords, .. }, LogicalLine::Lyrics { text }) =
                    (&window[0], &window[1])
                {
                    let pairs = pair_chords_with_lyrics(chords, text);
                    let joined: String = pairs
                        .iter()
                        .map(|pair| pair.lyric)
                        .collect();
                    assert_eq!(joined, *text, "{:?}", file);

                    let words = merge_overhanging_words(segment_into_words(&pairs));
                    let joined: String = words
                        .iter()
                        .map(Word::text)
                        .collect();
                    assert_eq!(joined, *text, "{:?}", file);
                }
            }

            let document = Document {
                header: None,
                body: lines,
            };
            assert!(!render(&Identity, &document).is_empty());
        }
    }

    #[test]
    fn missing_file() {
        let path = Path::new("tests/samples/no-such-song.txt");
        let error = parsing::load(path).unwrap_err();
        assert_eq!(error.problem, "File not found");
        assert_eq!(error.filename, path);
    }
}
