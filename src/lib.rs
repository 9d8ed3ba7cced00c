// src/lib.rs

pub mod core;
pub mod data;

pub use crate::core::dictionary::{Dictionary, DictionaryKind, UnknownKind, MAX_COMPLETIONS};
pub use crate::core::types::WordFrequency;
pub use crate::core::{ArrayDictionary, LinkedListDictionary, TrieDictionary};
