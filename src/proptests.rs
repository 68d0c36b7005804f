//! Randomized equivalence tests with `BTreeMap` as the oracle, plus
//! structural validation of the compressed variant.

use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::{CompressedTrie, Dictionary, SimpleTrie};

#[derive(Clone, Debug)]
enum Op {
    Put(String, u64),
    Remove(String),
    Get(String),
}

// A narrow alphabet forces heavy prefix sharing, which is where the
// interesting split and merge paths live.
fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        5 => ("[a-e]{1,10}", any::<u64>()).prop_map(|(key, value)| Op::Put(key, value)),
        3 => "[a-e]{1,10}".prop_map(Op::Remove),
        2 => "[a-e]{1,10}".prop_map(Op::Get),
    ];
    prop::collection::vec(op, 0..=300)
}

fn assert_prefix_parity(
    trie: &CompressedTrie<u64>,
    model: &BTreeMap<String, u64>,
    prefix: &str,
    count: usize,
) {
    let expected: Vec<String> = model
        .keys()
        .filter(|key| key.starts_with(prefix))
        .take(count)
        .cloned()
        .collect();
    assert_eq!(trie.keys_with_prefix(prefix, count).unwrap(), expected);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_compressed_matches_btreemap(ops in ops_strategy()) {
        let mut trie = CompressedTrie::new();
        let mut model: BTreeMap<String, u64> = BTreeMap::new();
        let mut words: u64 = 0;

        for op in &ops {
            match op {
                Op::Put(key, value) => {
                    let old_t = trie.put(key, *value).unwrap();
                    let old_m = model.insert(key.clone(), *value);
                    prop_assert_eq!(old_t, old_m);
                    words += 1;
                }
                Op::Remove(key) => {
                    let removed = model.remove(key);
                    let removed_t = trie.remove(key).unwrap();
                    if removed.is_some() {
                        words -= 1;
                    }
                    prop_assert_eq!(removed_t, removed);
                }
                Op::Get(key) => {
                    prop_assert_eq!(trie.get(key).unwrap(), model.get(key.as_str()));
                }
            }
            prop_assert_eq!(trie.size(), words);
        }

        trie.assert_structure();

        for (key, value) in &model {
            prop_assert_eq!(trie.get(key).unwrap(), Some(value));
        }

        // Prefix queries agree with the oracle regardless of how the probe
        // relates to node boundaries.
        for key in model.keys() {
            assert_prefix_parity(&trie, &model, &key[..1], usize::MAX);
            assert_prefix_parity(&trie, &model, &key[..key.len().min(3)], 3);
            assert_prefix_parity(&trie, &model, key, usize::MAX);
        }
    }

    #[test]
    fn prop_simple_matches_btreemap(ops in ops_strategy()) {
        let mut trie = SimpleTrie::new();
        let mut model: BTreeMap<String, u64> = BTreeMap::new();
        let mut words: u64 = 0;

        for op in &ops {
            match op {
                Op::Put(key, value) => {
                    let old_t = trie.put(key, *value).unwrap();
                    let old_m = model.insert(key.clone(), *value);
                    prop_assert_eq!(old_t, old_m);
                    words += 1;
                }
                Op::Remove(key) => {
                    let removed = model.remove(key);
                    let removed_t = trie.remove(key).unwrap();
                    if removed.is_some() {
                        words -= 1;
                    }
                    prop_assert_eq!(removed_t, removed);
                }
                Op::Get(key) => {
                    prop_assert_eq!(trie.get(key).unwrap(), model.get(key.as_str()));
                }
            }
            prop_assert_eq!(trie.size(), words);
        }

        for (key, value) in &model {
            prop_assert_eq!(trie.get(key).unwrap(), Some(value));
        }

        let expected: Vec<String> = model.keys().cloned().collect();
        let mut collected = Vec::new();
        for first in ["a", "b", "c", "d", "e"] {
            collected.extend(trie.keys_with_prefix(first, usize::MAX).unwrap());
        }
        prop_assert_eq!(collected, expected);
    }

    // The compacted tree is canonical for a key set: insertion order must
    // not change its shape.
    #[test]
    fn prop_insertion_order_does_not_change_shape(
        keys in prop::collection::vec("[a-e]{1,10}", 1..40)
    ) {
        let mut forward = CompressedTrie::new();
        for (i, key) in keys.iter().enumerate() {
            forward.put(key, i as u64).unwrap();
        }

        let mut backward = CompressedTrie::new();
        for (i, key) in keys.iter().enumerate().rev() {
            backward.put(key, i as u64).unwrap();
        }

        prop_assert_eq!(forward.node_count(), backward.node_count());
        forward.assert_structure();
        backward.assert_structure();
    }
}
