// src/core/dictionary.rs
use std::str::FromStr;

use crate::core::types::WordFrequency;
use crate::core::{ArrayDictionary, LinkedListDictionary, TrieDictionary};

/// Maximum number of completions returned by [`Dictionary::autocomplete`].
pub const MAX_COMPLETIONS: usize = 3;

/// The capability set shared by all dictionary backends.
///
/// Callers depend only on this trait; the three backends are independent,
/// parallel implementations of it. All outcomes are signalled through return
/// values: nothing here panics on an absent or duplicate word, and a failed
/// operation leaves the structure unchanged.
pub trait Dictionary {
    /// Populates the structure from an initial list of entries.
    ///
    /// Each pair is added as by [`add_word_frequency`](Self::add_word_frequency);
    /// duplicate words later in the input are silently dropped, so the first
    /// occurrence wins.
    fn build_dictionary(&mut self, pairs: Vec<WordFrequency>) {
        for pair in pairs {
            let _ = self.add_word_frequency(pair);
        }
    }

    /// Returns the stored frequency of `word`, or `0` if it is not present.
    ///
    /// Note the contract overloads `0`: an entry legitimately stored with
    /// frequency zero is indistinguishable from "not found" through this
    /// method alone.
    fn search(&self, word: &str) -> u64;

    /// Inserts `pair` if its word is not already present.
    ///
    /// Returns `true` on insertion, `false` if the word already exists. A
    /// duplicate never updates the stored frequency.
    fn add_word_frequency(&mut self, pair: WordFrequency) -> bool;

    /// Removes the entry for `word`. Returns `false` if it was not present.
    fn delete_word(&mut self, word: &str) -> bool;

    /// Returns the at most [`MAX_COMPLETIONS`] most frequent entries whose
    /// word starts with `prefix`, most frequent first. Ties are broken by
    /// word, ascending, so every backend returns the same sequence for the
    /// same contents. The empty prefix matches everything.
    fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency>;
}

/// Orders prefix matches by descending frequency, then ascending word, and
/// truncates to [`MAX_COMPLETIONS`]. All backends rank through this one
/// helper so their autocomplete output is identical for equal contents.
pub(crate) fn rank_completions(mut matches: Vec<WordFrequency>) -> Vec<WordFrequency> {
    matches.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.word.cmp(&b.word))
    });
    matches.truncate(MAX_COMPLETIONS);
    matches
}

/// The closed set of available backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictionaryKind {
    Array,
    LinkedList,
    Trie,
}

impl DictionaryKind {
    pub const ALL: [DictionaryKind; 3] = [
        DictionaryKind::Array,
        DictionaryKind::LinkedList,
        DictionaryKind::Trie,
    ];

    /// Constructs an empty dictionary of this kind.
    pub fn create(self) -> Box<dyn Dictionary> {
        match self {
            DictionaryKind::Array => Box::new(ArrayDictionary::new()),
            DictionaryKind::LinkedList => Box::new(LinkedListDictionary::new()),
            DictionaryKind::Trie => Box::new(TrieDictionary::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DictionaryKind::Array => "array",
            DictionaryKind::LinkedList => "linkedlist",
            DictionaryKind::Trie => "trie",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown dictionary kind {0:?} (expected array, list, linkedlist or trie)")]
pub struct UnknownKind(String);

impl FromStr for DictionaryKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "array" => Ok(DictionaryKind::Array),
            "list" | "linkedlist" => Ok(DictionaryKind::LinkedList),
            "trie" => Ok(DictionaryKind::Trie),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
