// src/core/linked_list_dict.rs
use crate::core::dictionary::{rank_completions, Dictionary};
use crate::core::types::WordFrequency;

struct ListNode {
    entry: WordFrequency,
    next: Option<usize>,
}

/// Singly-linked-list backend.
///
/// Nodes live in an index-based arena: `next` is an index into `nodes`
/// rather than an owning pointer, and slots freed by `delete_word` are
/// recycled through a free list before the arena grows again. A freed slot
/// keeps its stale contents until reuse; it is unreachable from `head`.
///
/// Insertion order is preserved (append at tail); every operation is a
/// linear walk from `head`.
#[derive(Default)]
pub struct LinkedListDictionary {
    nodes: Vec<ListNode>,
    free: Vec<usize>,
    head: Option<usize>,
    len: usize,
}

impl LinkedListDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc(&mut self, entry: WordFrequency) -> usize {
        let node = ListNode { entry, next: None };
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }
}

impl Dictionary for LinkedListDictionary {
    fn search(&self, word: &str) -> u64 {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            if node.entry.word == word {
                return node.entry.frequency;
            }
            cursor = node.next;
        }
        0
    }

    fn add_word_frequency(&mut self, pair: WordFrequency) -> bool {
        // One walk does both the duplicate check and the tail lookup.
        let mut tail = None;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            if self.nodes[idx].entry.word == pair.word {
                return false;
            }
            tail = Some(idx);
            cursor = self.nodes[idx].next;
        }

        let new_idx = self.alloc(pair);
        match tail {
            Some(idx) => self.nodes[idx].next = Some(new_idx),
            None => self.head = Some(new_idx),
        }
        self.len += 1;
        true
    }

    fn delete_word(&mut self, word: &str) -> bool {
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            if self.nodes[idx].entry.word == word {
                let next = self.nodes[idx].next;
                match prev {
                    Some(prev_idx) => self.nodes[prev_idx].next = next,
                    None => self.head = next,
                }
                self.free.push(idx);
                self.len -= 1;
                return true;
            }
            prev = Some(idx);
            cursor = self.nodes[idx].next;
        }
        false
    }

    fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency> {
        let mut matches = Vec::new();
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            if node.entry.word.starts_with(prefix) {
                matches.push(node.entry.clone());
            }
            cursor = node.next;
        }
        rank_completions(matches)
    }
}
