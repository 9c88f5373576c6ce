#[cfg(test)]
mod layout {
    use chordsheet::formatting::*;
    use chordsheet::language::*;
    use chordsheet::parsing;
    use chordsheet::rendering::Terminal;

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    #[test]
    fn chorus_with_diagram() {
        let content = trim(
            r#"
[Chorus]
Am7          D
Hey hey, it's morning
     C     G  Em  C  D
hey ho

Cadd9 = x32030"#,
        );

        let document = Document {
            header: None,
            body: parsing::parse(content),
        };

        let expected = trim(
            r#"
[Chorus]
Am7          D
Hey hey, it's morning
     C G Em C D
hey ho

Cadd9
   x     o   o
 2 | | * | | |
 3 | * | | * |
"#,
        );

        assert_eq!(render(&Identity, &document), expected);
    }

    #[test]
    fn standalone_lines() {
        let content = trim(
            r#"
Evening   (a slow one)
(Em)   C    G    D
------
e|--3--|"#,
        );

        let document = Document {
            header: Some(Metadata {
                title: Some("Evening"),
                artist: None,
            }),
            body: parsing::parse(content),
        };

        let expected = trim(
            r#"
Evening

Evening   (a slow one)
(Em)   C    G    D
------
e|--3--|
"#,
        );

        assert_eq!(render(&Identity, &document), expected);
    }

    #[test]
    fn terminal_keeps_the_text() {
        let document = Document {
            header: None,
            body: parsing::parse("G\nla"),
        };

        let output = render(&Terminal, &document);
        assert!(output.contains("G"));
        assert!(output.contains("la"));
        assert!(output.contains('\u{1b}'));
    }
}
