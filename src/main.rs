use std::io::IsTerminal;
use std::path::Path;

use clap::{Arg, ArgAction, Command};
use tracing::{debug, Level};

use chordsheet::formatting::{self, Identity, Render};
use chordsheet::language::{Document, Metadata};
use chordsheet::parsing;
use chordsheet::rendering::Terminal;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("chordsheet")
        .version(VERSION)
        .propagate_version(true)
        .about("Turn plain-text chord sheets into aligned chord-over-lyric sheets.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log more about what is happening. Repeat for more detail."),
        )
        .subcommand(
            Command::new("check")
                .about("Classify each line of the given chord sheet")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the classified lines as JSON."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the chord sheet, or '-' to read standard input."),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Lay out the given chord sheet with chords aligned above the lyrics")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Title to print at the top of the sheet."),
                )
                .arg(
                    Arg::new("artist")
                        .long("artist")
                        .help("Artist to credit beneath the title."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the chord sheet, or '-' to read standard input."),
                ),
        )
        .get_matches();

    let level = match matches.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = filename(submatches);
            let content = load(filename);
            let lines = parsing::parse(&content);

            if submatches.get_flag("json") {
                match serde_json::to_string_pretty(&lines) {
                    Ok(json) => println!("{}", json),
                    Err(error) => {
                        eprintln!("error: unable to serialize: {}", error);
                        std::process::exit(1);
                    }
                }
            } else {
                for (i, line) in lines
                    .iter()
                    .enumerate()
                {
                    println!("{:>4} {:<10} {}", i + 1, line.kind(), line.text());
                }
            }
        }
        Some(("format", submatches)) => {
            let filename = filename(submatches);
            let content = load(filename);

            let title = submatches.get_one::<String>("title");
            let artist = submatches.get_one::<String>("artist");

            let header = if title.is_some() || artist.is_some() {
                Some(Metadata {
                    title: title.map(String::as_str),
                    artist: artist.map(String::as_str),
                })
            } else {
                None
            };

            let document = Document {
                header,
                body: parsing::parse(&content),
            };

            let renderer: &dyn Render = if submatches.get_flag("raw-control-chars")
                || std::io::stdout().is_terminal()
            {
                &Terminal
            } else {
                &Identity
            };

            print!("{}", formatting::render(renderer, &document));
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: chordsheet [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filename(submatches: &clap::ArgMatches) -> &Path {
    // required(true) means clap has already insisted on this
    let filename = submatches
        .get_one::<String>("filename")
        .map_or("-", String::as_str);
    debug!(filename);
    Path::new(filename)
}

fn load(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", error.full_details());
            std::process::exit(1);
        }
    }
}
