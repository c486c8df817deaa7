use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    pub word: String,
    pub definition: String,
}

/// Word entries grouped by section, in the order sections first appear.
pub type VocabBook = IndexMap<String, Vec<VocabEntry>>;
