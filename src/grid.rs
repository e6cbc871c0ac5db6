use std::collections::{HashMap, HashSet};
use std::io::{self, Write};

use serde::Serialize;

use crate::types::*;

///Placeholder for cells that carry no words and no column reference
pub const EMPTY_CELL: &str = "0";

///Label of the row preceding the A-Z rows
pub const BLANK_ROW: &str = "blank";

///Minimum width of the row label field in text output
pub const LABEL_WIDTH: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    pub label: String,
    pub cells: Vec<String>,
}

///The rendered matrix: a blank row plus one row per letter A-Z, each with
///`max_column` cells. A cell is either a literal word list, a forward column
///reference, or the zero placeholder.
#[derive(Debug, Clone, Serialize)]
pub struct Grid {
    pub max_column: ColumnId,
    pub rows: Vec<GridRow>,
}

impl Grid {
    ///Write the grid to a text sink, one row per line: the label left-aligned
    ///in a fixed-width field, then the cells joined by tabs
    pub fn write<W: Write>(&self, out: &mut W) -> Result<(), io::Error> {
        for row in self.rows.iter() {
            writeln!(out, "{:<width$}{}", row.label, row.cells.join("\t"), width = LABEL_WIDTH)?;
        }
        Ok(())
    }
}

///Populate the full grid from the derived maps. All lookups are
///membership-gated; anything absent renders as the zero placeholder.
pub fn build_grid(
    words: &[String],
    prefix_columns: &PrefixColumns,
    prefix_words: &PrefixWords,
    letter_columns: &LetterColumns,
) -> Grid {
    let max_column = prefix_columns.values().copied().max().unwrap_or(1);

    let complete: HashSet<&str> = words.iter().map(|word| word.as_str()).collect();

    //words that render literally in column 1: single letters, and words that
    //never became a branch prefix themselves
    let mut first_letter_words: HashMap<String, Vec<String>> = HashMap::new();
    for word in words {
        if let Some(first) = word.chars().next() {
            if word.chars().count() == 1 || !prefix_columns.contains_key(word) {
                first_letter_words
                    .entry(first.to_string())
                    .or_insert_with(Vec::new)
                    .push(word.clone());
            }
        }
    }

    let mut rows = Vec::with_capacity(27);
    rows.push(fill_row(
        BLANK_ROW,
        max_column,
        prefix_words,
        letter_columns,
        &first_letter_words,
        &complete,
    ));
    for letter in 'A'..='Z' {
        rows.push(fill_row(
            &letter.to_string(),
            max_column,
            prefix_words,
            letter_columns,
            &first_letter_words,
            &complete,
        ));
    }

    Grid { max_column, rows }
}

fn fill_row(
    label: &str,
    max_column: ColumnId,
    prefix_words: &PrefixWords,
    letter_columns: &LetterColumns,
    first_letter_words: &HashMap<String, Vec<String>>,
    complete: &HashSet<&str>,
) -> GridRow {
    let blank = label == BLANK_ROW;
    let mut cells = vec![EMPTY_CELL.to_string(); max_column as usize];

    //column 1: a forward reference when the letter resolved to a column,
    //otherwise the letter's literal words; the blank row stays empty
    if !blank {
        if let Some(column) = letter_columns.get(label) {
            cells[0] = column.to_string();
        } else if let Some(bucket) = first_letter_words.get(label) {
            if !bucket.is_empty() {
                cells[0] = bucket.join(", ");
            }
        }
    }

    //explicit pass over column ids, never container iteration order
    for column in 2..=max_column {
        let entry = match prefix_words.get(&column) {
            Some(entry) => entry,
            None => continue,
        };
        if blank {
            if complete.contains(entry.prefix.as_str()) {
                cells[column as usize - 1] = entry.prefix.clone();
            }
        } else if let Some(bucket) = entry.words.get(label) {
            if bucket.len() > 1 {
                //more than one word continues here: a fixed one-column-right
                //reference, not a fresh lookup of the sub-prefix
                cells[column as usize - 1] = (column + 1).to_string();
            } else if !bucket.is_empty() {
                cells[column as usize - 1] = bucket.join(", ");
            }
        }
    }

    GridRow {
        label: label.to_string(),
        cells,
    }
}
