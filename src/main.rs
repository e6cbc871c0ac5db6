extern crate clap;

use std::io;

use clap::{App, Arg};

use prefixgrid::GridModel;

fn main() {
    let args = App::new("Prefixgrid")
        .version("0.1")
        .about("Renders the shared-prefix structure of a word list as a compact tabular encoding")
        .arg(
            Arg::with_name("wordlist")
                .help("Word list file, one word per line")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .short("j")
                .help("Output the grid as JSON instead of plain text"),
        )
        .arg(
            Arg::with_name("debug")
                .long("debug")
                .short("D")
                .help("Output debug information to stderr"),
        )
        .get_matches();

    let filename = args.value_of("wordlist").unwrap();

    let mut model = GridModel::new(args.is_present("debug"));
    model.read_wordlist(filename).expect("Error loading word list");

    model.build();

    let grid = model.grid();
    let stdout = io::stdout();
    if args.is_present("json") {
        serde_json::to_writer_pretty(&mut stdout.lock(), &grid).expect("Error serializing grid");
        println!();
    } else {
        grid.write(&mut stdout.lock()).expect("Error writing grid");
    }
}
