// src/core/mod.rs

pub mod array_dict;
pub mod dictionary;
pub mod linked_list_dict;
pub mod trie_dict;
pub mod types;

pub use array_dict::ArrayDictionary;
pub use linked_list_dict::LinkedListDictionary;
pub use trie_dict::TrieDictionary;
