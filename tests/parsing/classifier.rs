#[cfg(test)]
mod verify {
    use chordsheet::language::*;
    use chordsheet::parsing;

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    fn kinds<'i>(lines: &[LogicalLine<'i>]) -> Vec<&'static str> {
        lines
            .iter()
            .map(LogicalLine::kind)
            .collect()
    }

    #[test]
    fn whole_sheet() {
        let content = trim(
            r#"
Morning Song          chords by nobody in particular
Capo 2

[Intro]

G  Em  C  D

[Verse 1]
G              Em
Open the window, let the light in
        C                  D
Sweep the dust from the floor

[Chorus]
Am7          D
Hey hey, it's morning

Cadd9 = x32030
"#,
        );

        let lines = parsing::parse(content);
        assert_eq!(
            kinds(&lines),
            vec![
                "annotation",
                "annotation",
                "blank",
                "section",
                "blank",
                "chords",
                "section",
                "chords",
                "lyrics",
                "chords",
                "lyrics",
                "blank",
                "section",
                "chords",
                "lyrics",
                "blank",
                "diagram",
                "blank",
            ]
        );

        assert_eq!(
            lines[7],
            LogicalLine::Chords {
                chords: vec![
                    Chord {
                        name: "G",
                        offset: 0
                    },
                    Chord {
                        name: "Em",
                        offset: 15
                    }
                ],
                text: "G              Em"
            }
        );
        assert_eq!(
            lines[6],
            LogicalLine::Section {
                title: "Verse 1",
                text: "[Verse 1]"
            }
        );
    }

    #[test]
    fn blanks_between_chords_and_lyrics() {
        let content = trim(
            r#"
[Chorus]

 

                C             G

But now we must pick up every piece

        C               G

Of this life we used to love
"#,
        );

        let lines = parsing::parse(content);
        assert_eq!(
            kinds(&lines),
            vec![
                "section", "blank", "blank", "blank", "chords", "lyrics", "blank", "chords",
                "lyrics", "blank",
            ]
        );
        assert_eq!(
            lines[5],
            LogicalLine::Lyrics {
                text: "But now we must pick up every piece"
            }
        );
    }

    #[test]
    fn syllables_are_not_chords() {
        let content = trim(
            r#"
la la la
D    A
la la la
da da da
"#,
        );

        let lines = parsing::parse(content);
        assert_eq!(
            kinds(&lines),
            vec!["annotation", "chords", "lyrics", "lyrics", "blank"]
        );
    }

    #[test]
    fn tablature_block() {
        let content = trim(
            r#"
[Riff]
e|-------0-----|
B|-----1---1---|

G|---2-------2-|
==============
"#,
        );

        let lines = parsing::parse(content);
        assert_eq!(kinds(&lines), vec!["section", "tab", "tab", "tab", "rule", "blank"]);

        match &lines[3] {
            LogicalLine::Tab(tab) => {
                assert_eq!(tab.string, "G");
                assert_eq!(tab.length, 13);
                assert_eq!(
                    tab.notes,
                    vec![
                        TabNote {
                            index: 3,
                            note: "2"
                        },
                        TabNote {
                            index: 11,
                            note: "2"
                        }
                    ]
                );
            }
            other => panic!("expected tab, got {:?}", other),
        }
    }

    #[test]
    fn serialized_shape() {
        let lines = parsing::parse("[Intro]\nG  Em\nla la");
        let json = serde_json::to_value(&lines).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "type": "section", "title": "Intro", "text": "[Intro]" },
                {
                    "type": "chords",
                    "chords": [ { "name": "G", "offset": 0 }, { "name": "Em", "offset": 3 } ],
                    "text": "G  Em"
                },
                { "type": "lyrics", "text": "la la" }
            ])
        );
    }

    #[test]
    fn diagram_shape() {
        let lines = parsing::parse("Cadd9 = x32030");
        let json = serde_json::to_value(&lines).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {
                    "type": "diagram",
                    "diagram": { "chord": "Cadd9", "frets": [-1, 3, 2, 0, 3, 0] },
                    "text": "Cadd9 = x32030"
                }
            ])
        );
    }
}
