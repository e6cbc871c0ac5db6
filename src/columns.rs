use crate::trie::{Trie, TrieNode};
use crate::types::*;

///One step of the depth-first walk: the node to visit, the prefix spelled out
///so far, and the letter-start marker inherited from the path above
struct Frame<'a> {
    node: &'a TrieNode,
    prefix: String,
    letter_start: String,
}

///A node is a branch prefix if it forks into more than one child, or if a
///complete word with a non-empty prefix continues into at least one child.
///The fork condition is not gated on the prefix, so a root with multiple
///children registers the empty-string prefix.
fn is_branch_prefix(node: &TrieNode, prefix: &str) -> bool {
    node.children.len() > 1 || (node.is_word && !node.children.is_empty() && !prefix.is_empty())
}

///Walk the trie depth-first in ascending letter order and hand out a column id
///to every branch prefix, in discovery order. Also records, per starting
///letter, the first column that letter's path resolves to. The id counter is
///read from and written back to the trie.
pub fn assign_columns(trie: &mut Trie, debug: bool) -> (PrefixColumns, PrefixWords, LetterColumns) {
    let mut prefix_columns = PrefixColumns::new();
    let mut prefix_words = PrefixWords::new();
    let mut letter_columns = LetterColumns::new();
    let mut next_column = trie.next_column;

    let mut stack = vec![Frame {
        node: &trie.root,
        prefix: String::new(),
        letter_start: String::new(),
    }];

    while let Some(frame) = stack.pop() {
        if is_branch_prefix(frame.node, &frame.prefix) {
            let column = match prefix_columns.get(&frame.prefix) {
                Some(column) => *column,
                None => {
                    let column = next_column;
                    next_column += 1;
                    prefix_columns.insert(frame.prefix.clone(), column);
                    prefix_words.insert(column, ColumnEntry::new(frame.prefix.clone()));
                    if debug {
                        eprintln!(" -- Assigned column {} to prefix \"{}\"", column, frame.prefix);
                    }
                    column
                }
            };
            //only the first branch point on a path claims the letter-start
            if !frame.letter_start.is_empty() && !letter_columns.contains_key(&frame.letter_start) {
                letter_columns.insert(frame.letter_start.clone(), column);
            }
        }

        //push in descending order so children pop in ascending letter order,
        //matching the recursive pre-order
        for (letter, child) in frame.node.children.iter().rev() {
            let mut prefix = frame.prefix.clone();
            prefix.push(*letter);
            let letter_start = if !frame.letter_start.is_empty() {
                frame.letter_start.clone()
            } else if !frame.prefix.is_empty() {
                frame.prefix.clone()
            } else {
                letter.to_string()
            };
            stack.push(Frame {
                node: child,
                prefix,
                letter_start,
            });
        }
    }

    trie.next_column = next_column;
    (prefix_columns, prefix_words, letter_columns)
}
