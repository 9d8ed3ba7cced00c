// src/core/trie_dict.rs
use std::collections::HashMap;

use crate::core::dictionary::{rank_completions, Dictionary};
use crate::core::types::WordFrequency;

#[derive(Default)]
struct TrieNode {
    /// `Some` iff the root-to-node path spells a stored word.
    frequency: Option<u64>,
    children: HashMap<char, usize>,
}

impl TrieNode {
    fn is_terminal(&self) -> bool {
        self.frequency.is_some()
    }
}

/// Character-trie backend.
///
/// Nodes live in an index-based arena; `children` maps the next character to
/// a node index. Index 0 is the root, which is never removed. Deleting a
/// word prunes every node on its path that became both non-terminal and
/// childless, so the tree never accumulates dead paths; pruned slots are
/// recycled through a free list.
///
/// Search, add and delete cost O(|word|); autocomplete costs the size of the
/// subtree under the prefix node, not the whole structure.
pub struct TrieDictionary {
    nodes: Vec<TrieNode>,
    free: Vec<usize>,
    len: usize,
}

const ROOT: usize = 0;

impl Default for TrieDictionary {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            free: Vec::new(),
            len: 0,
        }
    }
}

impl TrieDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of live nodes, root included. Deleting a word that shares no
    /// prefix with any other entry brings this back to its previous value.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    fn alloc(&mut self) -> usize {
        match self.free.pop() {
            Some(idx) => idx,
            None => {
                self.nodes.push(TrieNode::default());
                self.nodes.len() - 1
            }
        }
    }

    fn recycle(&mut self, idx: usize) {
        self.nodes[idx] = TrieNode::default();
        self.free.push(idx);
    }

    /// Index of the node at the end of `path`, if the whole path exists.
    fn walk(&self, path: &str) -> Option<usize> {
        let mut idx = ROOT;
        for ch in path.chars() {
            idx = *self.nodes[idx].children.get(&ch)?;
        }
        Some(idx)
    }

    /// Depth-first collection of every terminal descendant of `idx`.
    /// `word` holds the accumulated root-to-node spelling.
    fn collect_completions(&self, idx: usize, word: &mut String, out: &mut Vec<WordFrequency>) {
        let node = &self.nodes[idx];
        if let Some(frequency) = node.frequency {
            out.push(WordFrequency::new(word.clone(), frequency));
        }
        for (&ch, &child) in &node.children {
            word.push(ch);
            self.collect_completions(child, word, out);
            word.pop();
        }
    }
}

impl Dictionary for TrieDictionary {
    fn search(&self, word: &str) -> u64 {
        match self.walk(word) {
            // A path that exists only as a prefix of other words is not a
            // stored word.
            Some(idx) => self.nodes[idx].frequency.unwrap_or(0),
            None => 0,
        }
    }

    fn add_word_frequency(&mut self, pair: WordFrequency) -> bool {
        let mut idx = ROOT;
        for ch in pair.word.chars() {
            idx = match self.nodes[idx].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.alloc();
                    self.nodes[idx].children.insert(ch, child);
                    child
                }
            };
        }
        if self.nodes[idx].is_terminal() {
            return false;
        }
        self.nodes[idx].frequency = Some(pair.frequency);
        self.len += 1;
        true
    }

    fn delete_word(&mut self, word: &str) -> bool {
        // Record the path on the way down, then unwind it pruning nodes
        // that became non-terminal and childless. The root stays.
        let mut path = Vec::with_capacity(word.len());
        let mut idx = ROOT;
        for ch in word.chars() {
            let child = match self.nodes[idx].children.get(&ch) {
                Some(&child) => child,
                None => return false,
            };
            path.push((idx, ch, child));
            idx = child;
        }
        if !self.nodes[idx].is_terminal() {
            return false;
        }
        self.nodes[idx].frequency = None;
        self.len -= 1;

        while let Some((parent, ch, child)) = path.pop() {
            if self.nodes[child].is_terminal() || !self.nodes[child].children.is_empty() {
                break;
            }
            self.nodes[parent].children.remove(&ch);
            self.recycle(child);
        }
        true
    }

    fn autocomplete(&self, prefix: &str) -> Vec<WordFrequency> {
        let Some(idx) = self.walk(prefix) else {
            return Vec::new();
        };
        let mut matches = Vec::new();
        let mut word = String::from(prefix);
        self.collect_completions(idx, &mut word, &mut matches);
        rank_completions(matches)
    }
}
