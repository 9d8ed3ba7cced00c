// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A word together with its observed frequency.
///
/// This is the value type that crosses the dictionary boundary in both
/// directions: `build_dictionary` consumes a list of these, `autocomplete`
/// hands them back. Immutable once constructed. Two instances name the same
/// dictionary entry iff their `word` fields are equal; frequency is not part
/// of identity. No `Ord` impl: backends that need word order compare the
/// `word` field directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub frequency: u64,
}

impl WordFrequency {
    pub fn new(word: impl Into<String>, frequency: u64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

impl std::fmt::Display for WordFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.word, self.frequency)
    }
}
