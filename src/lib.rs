extern crate serde;
#[macro_use]
extern crate simple_error;

use std::fs::File;
use std::io::{BufRead, BufReader};

use simple_error::SimpleError;

pub mod columns;
pub mod grid;
pub mod index;
pub mod trie;
pub mod types;

pub use crate::columns::*;
pub use crate::grid::*;
pub use crate::index::*;
pub use crate::trie::*;
pub use crate::types::*;

///Ties the phases together: the trie over all inserted words and the three
///maps derived from it. Everything is populated by `build()` and read-only
///afterwards.
pub struct GridModel {
    pub trie: Trie,

    ///Column ids keyed by branch prefix, in discovery order
    pub prefix_columns: PrefixColumns,

    ///Word buckets per column, keyed by the letter following the owning prefix
    pub prefix_words: PrefixWords,

    ///First column each starting letter resolves to
    pub letter_columns: LetterColumns,

    ///All stored words in lexicographic order
    pub words: Vec<String>,

    pub debug: bool,
}

impl GridModel {
    pub fn new(debug: bool) -> GridModel {
        GridModel {
            trie: Trie::new(),
            prefix_columns: PrefixColumns::new(),
            prefix_words: PrefixWords::new(),
            letter_columns: LetterColumns::new(),
            words: Vec::new(),
            debug,
        }
    }

    ///Read a word list from a plain text file, one word per line. Trailing
    ///line terminators are stripped by the reader, empty lines are skipped,
    ///anything else is taken as-is.
    pub fn read_wordlist(&mut self, filename: &str) -> Result<(), SimpleError> {
        if self.debug {
            eprintln!("Reading word list from {}...", filename);
        }
        let f = try_with!(File::open(filename), "unable to open word list {}", filename);
        let f_buffer = BufReader::new(f);
        for line in f_buffer.lines() {
            let line = try_with!(line, "error reading from {}", filename);
            if !line.is_empty() {
                self.add_word(&line);
            }
        }
        Ok(())
    }

    pub fn add_word(&mut self, word: &str) {
        if self.debug {
            eprintln!(" -- Adding word: {}", word);
        }
        self.trie.insert(word);
    }

    ///Derive all maps needed for rendering from the trie contents
    pub fn build(&mut self) {
        eprintln!("Assigning prefix columns...");
        let (prefix_columns, prefix_words, letter_columns) = assign_columns(&mut self.trie, self.debug);
        self.prefix_columns = prefix_columns;
        self.prefix_words = prefix_words;
        self.letter_columns = letter_columns;
        eprintln!(" - Found {} branch prefixes", self.prefix_columns.len());

        eprintln!("Collecting words...");
        self.words = self.trie.collect_words();
        eprintln!(" - Collected {} words", self.words.len());

        eprintln!("Indexing words by column...");
        index_words(&self.words, &self.prefix_columns, &mut self.prefix_words, self.debug);
    }

    pub fn grid(&self) -> Grid {
        build_grid(
            &self.words,
            &self.prefix_columns,
            &self.prefix_words,
            &self.letter_columns,
        )
    }
}
