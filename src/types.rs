use std::collections::{BTreeMap, HashMap};

///Column ids are handed out from 1 upward, in the order branch prefixes are
///discovered; 0 never occurs and doubles as the empty-cell placeholder in the
///rendered grid
pub type ColumnId = u32;

///Maps each branch prefix to the column id assigned to it
pub type PrefixColumns = HashMap<String, ColumnId>;

///Maps a starting letter to the column id its chain of single-child prefixes
///first resolves to. Keys are strings rather than chars, the traversal hands
///them down as accumulated markers.
pub type LetterColumns = HashMap<String, ColumnId>;

///Word buckets per column; a BTreeMap so rendering can walk columns in id order
pub type PrefixWords = BTreeMap<ColumnId, ColumnEntry>;

///The words filed under one column, keyed by the letter that follows the
///owning prefix (the empty string when the prefix is the whole word)
#[derive(Debug, Clone)]
pub struct ColumnEntry {
    pub prefix: String,
    pub words: HashMap<String, Vec<String>>,
}

impl ColumnEntry {
    pub fn new(prefix: String) -> ColumnEntry {
        ColumnEntry {
            prefix,
            words: HashMap::new(),
        }
    }
}
