// src/core/array_dict.rs
use crate::core::dictionary::{rank_completions, Dictionary};
use crate::core::types::WordFrequency;

/// Sorted-array backend.
///
/// Entries live in a single `Vec` kept strictly increasing by word, so every
/// lookup is a binary search directly on the word field. Insert and delete
/// pay the usual O(n) shift to keep the order.
#[derive(Debug, Default)]
pub struct ArrayDictionary {
    entries: Vec<WordFrequency>,
}

impl ArrayDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `Ok(index)` of the entry for `word`, or `Err(index)` where it would
    /// be inserted to keep the vector sorted.
    fn index_of(&self, word: &str) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|entry| entry.word.as_str().cmp(word))
    }
}

impl Dictionary for ArrayDictionary {
    fn search(&self, word: &str) -> u64 {
        match self.index_of(word) {
            Ok(idx) => self.entries[idx].frequency,
            Err(_) => 0,
        }
    }

    fn add_word_frequency(&mut self, pair: WordFrequency) -> bool {
        match self.index_of(&pair.word) {
            Ok(_) => false,
            Err(idx) => {
                self.entries.insert(idx, pair);
                true
            }
        }
    }

    fn delete_word(&mut self, word: &str) -> bool {
        match self.index_of(word) {
            Ok(idx) => {
                self.entries.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency> {
        // Word order says nothing about frequency order, so the whole
        // vector is scanned; no early exit is valid.
        let matches = self
            .entries
            .iter()
            .filter(|entry| entry.word.starts_with(prefix))
            .cloned()
            .collect();
        rank_completions(matches)
    }
}
