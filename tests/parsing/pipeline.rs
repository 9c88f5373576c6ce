#[cfg(test)]
mod verify {
    use chordsheet::alignment::*;
    use chordsheet::language::*;
    use chordsheet::parsing;

    fn chords_and_lyrics<'i>(content: &'i str) -> (Vec<Chord<'i>>, &'i str) {
        let lines = parsing::parse(content);
        match (&lines[0], &lines[1]) {
            (LogicalLine::Chords { chords, .. }, LogicalLine::Lyrics { text }) => {
                (chords.clone(), *text)
            }
            other => panic!("expected chords then lyrics, got {:?}", other),
        }
    }

    fn fragment<'i>(lyric: &'i str, chord: Option<&'i str>) -> Fragment<'i> {
        Fragment::new(lyric, chord)
    }

    #[test]
    fn merging_a_wide_chord_into_following_words() {
        let (chords, lyrics) = chords_and_lyrics("Am7          D\nHey hey, it's morning");

        let pairs = pair_chords_with_lyrics(&chords, lyrics);
        assert_eq!(
            pairs,
            vec![Pair::chord("Hey hey, it's", "Am7"), Pair::chord(" morning", "D")]
        );

        let words = merge_overhanging_words(segment_into_words(&pairs));
        assert_eq!(
            words,
            vec![
                Word(vec![fragment("Hey hey,", Some("Am7"))]),
                Word(vec![fragment(" ", None)]),
                Word(vec![fragment("it's", None)]),
                Word(vec![fragment(" morning", Some("D"))]),
            ]
        );
    }

    #[test]
    fn nothing_to_merge() {
        let (chords, lyrics) =
            chords_and_lyrics("      C/G         D\nand someone's at the door");

        let pairs = pair_chords_with_lyrics(&chords, lyrics);
        assert_eq!(
            pairs,
            vec![
                Pair::lyric("and so"),
                Pair::chord("meone's at t", "C/G"),
                Pair::chord("he door", "D"),
            ]
        );

        let words = segment_into_words(&pairs);
        assert_eq!(
            words[2],
            Word(vec![fragment("so", None), fragment("meone's", Some("C/G"))])
        );
        assert_eq!(merge_overhanging_words(words.clone()), words);
    }

    #[test]
    fn every_stage_keeps_the_lyric() {
        let (chords, lyrics) =
            chords_and_lyrics("         C                 D                G  Em  C  D\nLet me hold it close and keep it here with me");

        let pairs = pair_chords_with_lyrics(&chords, lyrics);
        assert_eq!(pairs.len(), chords.len() + 1);
        let joined: String = pairs
            .iter()
            .map(|pair| pair.lyric)
            .collect();
        assert_eq!(joined, lyrics);

        let words = segment_into_words(&pairs);
        let joined: String = words
            .iter()
            .map(Word::text)
            .collect();
        assert_eq!(joined, lyrics);

        let merged = merge_overhanging_words(words);
        let joined: String = merged
            .iter()
            .map(Word::text)
            .collect();
        assert_eq!(joined, lyrics);

        // every chord survives, in order
        let names: Vec<&str> = merged
            .iter()
            .flat_map(Word::fragments)
            .filter_map(|fragment| fragment.chord)
            .collect();
        assert_eq!(names, vec!["C", "D", "G", "Em", "C", "D"]);
    }
}
