use crate::types::*;

///File every word under every branch prefix it extends. For each prefix
///length that was assigned a column, the word lands in that column's bucket
///for the letter immediately following the prefix; a word equal to the prefix
///lands in the empty-string bucket. Bucket order is word-processing order.
pub fn index_words(
    words: &[String],
    prefix_columns: &PrefixColumns,
    prefix_words: &mut PrefixWords,
    debug: bool,
) {
    for word in words {
        let chars: Vec<char> = word.chars().collect();
        let mut prefix = String::with_capacity(word.len());
        for (i, c) in chars.iter().enumerate() {
            prefix.push(*c);
            if let Some(column) = prefix_columns.get(&prefix) {
                if let Some(entry) = prefix_words.get_mut(column) {
                    let next_letter = match chars.get(i + 1) {
                        Some(next) => next.to_string(),
                        None => String::new(),
                    };
                    if debug {
                        eprintln!(
                            " -- Filing {} under column {}, next letter \"{}\"",
                            word, column, next_letter
                        );
                    }
                    entry
                        .words
                        .entry(next_letter)
                        .or_insert_with(Vec::new)
                        .push(word.clone());
                }
            }
        }
    }
}
