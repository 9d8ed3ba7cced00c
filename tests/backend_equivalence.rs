//! Cross-backend equivalence suite.
//!
//! The three backends are exercised in lockstep: every operation must return
//! the same value from each, and because autocomplete ties are broken by
//! word, the full completion sequences must match, not just their sets.

use proptest::prelude::*;

use dict_core::{
    ArrayDictionary, Dictionary, DictionaryKind, LinkedListDictionary, TrieDictionary,
    WordFrequency, MAX_COMPLETIONS,
};

#[derive(Debug, Clone)]
enum Op {
    Add(String, u64),
    Delete(String),
    Search(String),
    Autocomplete(String),
}

// A two-letter alphabet and short words force constant collisions between
// adds, deletes and shared prefixes.
fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => ("[ab]{1,4}", 0u64..100).prop_map(|(w, f)| Op::Add(w, f)),
        2 => "[ab]{1,4}".prop_map(Op::Delete),
        2 => "[ab]{1,4}".prop_map(Op::Search),
        2 => "[ab]{0,3}".prop_map(Op::Autocomplete),
    ]
}

proptest! {
    #[test]
    fn backends_agree_on_any_operation_sequence(
        ops in prop::collection::vec(arb_op(), 1..60)
    ) {
        let mut array = ArrayDictionary::new();
        let mut list = LinkedListDictionary::new();
        let mut trie = TrieDictionary::new();

        for op in ops {
            match op {
                Op::Add(word, frequency) => {
                    let pair = WordFrequency::new(word, frequency);
                    let a = array.add_word_frequency(pair.clone());
                    let l = list.add_word_frequency(pair.clone());
                    let t = trie.add_word_frequency(pair);
                    prop_assert_eq!(a, l);
                    prop_assert_eq!(a, t);
                }
                Op::Delete(word) => {
                    let a = array.delete_word(&word);
                    let l = list.delete_word(&word);
                    let t = trie.delete_word(&word);
                    prop_assert_eq!(a, l);
                    prop_assert_eq!(a, t);
                }
                Op::Search(word) => {
                    let a = array.search(&word);
                    prop_assert_eq!(a, list.search(&word));
                    prop_assert_eq!(a, trie.search(&word));
                }
                Op::Autocomplete(prefix) => {
                    let a = array.autocomplete(&prefix);
                    prop_assert_eq!(&a, &list.autocomplete(&prefix));
                    prop_assert_eq!(&a, &trie.autocomplete(&prefix));

                    prop_assert!(a.len() <= MAX_COMPLETIONS);
                    prop_assert!(a.iter().all(|e| e.word.starts_with(&prefix)));
                    prop_assert!(a.windows(2).all(|w| w[0].frequency >= w[1].frequency));
                }
            }
        }

        prop_assert_eq!(array.len(), list.len());
        prop_assert_eq!(array.len(), trie.len());
    }
}

#[test]
fn every_backend_walks_the_same_scenario() {
    for kind in DictionaryKind::ALL {
        let mut dict = kind.create();
        dict.build_dictionary(vec![
            WordFrequency::new("apple", 5),
            WordFrequency::new("app", 10),
            WordFrequency::new("apt", 3),
            WordFrequency::new("app", 99), // duplicate in build input: dropped
        ]);

        assert_eq!(dict.search("app"), 10, "{kind}");
        assert_eq!(
            dict.autocomplete("ap"),
            vec![
                WordFrequency::new("app", 10),
                WordFrequency::new("apple", 5),
                WordFrequency::new("apt", 3),
            ],
            "{kind}"
        );

        assert!(dict.delete_word("app"), "{kind}");
        assert_eq!(dict.search("app"), 0, "{kind}");
        assert_eq!(dict.search("apple"), 5, "{kind}");
        assert_eq!(
            dict.autocomplete("ap"),
            vec![WordFrequency::new("apple", 5), WordFrequency::new("apt", 3)],
            "{kind}"
        );
    }
}

#[test]
fn build_rejects_later_duplicates_everywhere() {
    for kind in DictionaryKind::ALL {
        let mut dict = kind.create();
        dict.build_dictionary(vec![
            WordFrequency::new("echo", 1),
            WordFrequency::new("echo", 2),
            WordFrequency::new("echo", 3),
        ]);
        assert_eq!(dict.search("echo"), 1, "{kind}");
    }
}
