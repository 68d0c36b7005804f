//! The radix-tree variant: chains of single-child nodes are folded into
//! multi-character labels.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::error::DictionaryError;
use crate::label::Label;
use crate::walk::{collect_keys, WalkNode};
use crate::Dictionary;

/// The path-compressed [`Dictionary`] variant.
///
/// Each child edge is indexed by a single character, but the child node also
/// carries a compressed label holding the rest of the run it was folded
/// from. The words `HELLO`, `HELP` and `WORLD` are stored as:
///
/// ```text
/// root
/// ├── H(EL)
/// │   ├── L(O)*
/// │   └── P*
/// └── W(ORLD)*
/// ```
///
/// where the parenthesized part is the node's label and `*` marks a node
/// that holds a value. Inserting a key that diverges inside a label splits
/// the node at the divergence point; removing a key merges any node left
/// valueless with a single child back into one node, so the tree never
/// keeps a branch point that no longer branches.
///
/// How much this saves over [`crate::SimpleTrie`] depends entirely on how
/// much prefix sharing the key set has; in the worst case every character
/// still ends up in its own node.
pub struct CompressedTrie<V> {
    root: Node<V>,
    words: u64,
    nodes: u64,
}

struct Node<V> {
    label: Label,
    children: FxHashMap<char, Node<V>>,
    value: Option<V>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self {
            label: Label::new(),
            children: FxHashMap::default(),
            value: None,
        }
    }

    fn with_label(label: &[char]) -> Self {
        Self {
            label: Label::from_chars(label),
            children: FxHashMap::default(),
            value: None,
        }
    }
}

impl<V> WalkNode for Node<V> {
    fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    fn label_chars(&self) -> &[char] {
        self.label.as_slice()
    }

    fn children(&self) -> impl Iterator<Item = (char, &Self)> {
        self.children.iter().map(|(ch, child)| (*ch, child))
    }
}

impl<V> CompressedTrie<V> {
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            words: 0,
            // The root is always there.
            nodes: 1,
        }
    }

    /// Non-mutating descent shared by lookup and prefix anchoring.
    ///
    /// Lands on the node reached once every character of `key` is consumed
    /// and reports how many characters of that node's label the key
    /// covered: the full label when the key ends at a node boundary, fewer
    /// when it ends at the edge character or partway into the label.
    /// Returns `None` when the key diverges from a stored label or needs a
    /// missing edge.
    fn descend(&self, key: &[char]) -> Option<(&Node<V>, usize)> {
        let mut current = &self.root;
        let mut depth = 0;
        while depth < key.len() {
            let child = current.children.get(&key[depth])?;
            depth += 1;

            let rest = &key[depth..];
            let common = child.label.common_prefix(rest);
            if common < child.label.len() {
                if common < rest.len() {
                    // The key diverges inside the label.
                    return None;
                }
                // The key is exhausted inside the label.
                return Some((child, common));
            }

            depth += common;
            current = child;
        }

        Some((current, current.label.len()))
    }

    /// Split `node` at `point`: a new child takes the label suffix past
    /// `point` together with `node`'s children and value, and `node` keeps
    /// the label prefix, indexing the new child by the character at
    /// `point`. The caller accounts for the extra node.
    ///
    /// # Panics
    ///
    /// Panics when `point` does not fall inside the label. Splits only
    /// happen at a computed divergence, so an out-of-range point means the
    /// tree itself is corrupt, not that the caller passed a bad key.
    fn split_node(node: &mut Node<V>, point: usize) {
        assert!(
            point < node.label.len(),
            "split point {point} outside label of length {}",
            node.label.len()
        );

        let edge = node.label.at(point);
        let lower = Node {
            label: node.label.suffix_after(point + 1),
            children: std::mem::take(&mut node.children),
            value: node.value.take(),
        };

        node.label.truncate(point);
        node.children.insert(edge, lower);
    }

    /// Restore compaction after a removal: a node left valueless with
    /// exactly one child folds that child into itself, absorbing the
    /// connecting edge character, the child's label, value and children.
    /// Never called on the root.
    fn merge_node(node: &mut Node<V>, nodes: &mut u64) {
        if node.value.is_some() || node.children.len() != 1 {
            return;
        }

        let edge = *node.children.keys().next().expect("single child");
        let lower = node.children.remove(&edge).expect("single child");

        node.label.push(edge);
        node.label.extend_from(&lower.label);
        node.value = lower.value;
        node.children = lower.children;
        *nodes -= 1;
    }

    fn remove_recurse(
        node: &mut Node<V>,
        key: &[char],
        depth: usize,
        words: &mut u64,
        nodes: &mut u64,
    ) -> Option<V> {
        if depth >= key.len() {
            let value = node.value.take()?;
            *words -= 1;
            return Some(value);
        }

        let ch = key[depth];
        let child = node.children.get_mut(&ch)?;

        let common = child.label.common_prefix(&key[depth + 1..]);
        if common < child.label.len() {
            // The key ends inside the label or diverges from it; either way
            // it is not an exact match for anything stored below.
            return None;
        }

        let value = Self::remove_recurse(child, key, depth + 1 + common, words, nodes);

        if value.is_some() {
            if child.value.is_none() && child.children.is_empty() {
                node.children.remove(&ch);
                *nodes -= 1;
            } else {
                Self::merge_node(child, nodes);
            }
        }

        value
    }
}

impl<V> Default for CompressedTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Dictionary<V> for CompressedTrie<V> {
    fn put(&mut self, key: &str, value: V) -> Result<Option<V>, DictionaryError> {
        if key.is_empty() {
            return Err(DictionaryError::EmptyKey);
        }

        let key: Vec<char> = key.chars().collect();
        let mut current = &mut self.root;
        let mut depth = 0;
        while depth < key.len() {
            let ch = key[depth];
            depth += 1;

            if !current.children.contains_key(&ch) {
                // New branch: one node absorbs the whole remaining suffix.
                self.nodes += 1;
                let rest = &key[depth..];
                current = current
                    .children
                    .entry(ch)
                    .or_insert_with(|| Node::with_label(rest));
                break;
            }

            let child = current.children.get_mut(&ch).expect("child exists");
            if !child.label.is_empty() {
                let common = child.label.common_prefix(&key[depth..]);
                if common < child.label.len() {
                    // Branch point inside the label: split before going on.
                    Self::split_node(child, common);
                    self.nodes += 1;
                }
                depth += common;
            }
            current = child;
        }

        self.words += 1;
        Ok(current.value.replace(value))
    }

    fn get(&self, key: &str) -> Result<Option<&V>, DictionaryError> {
        if key.is_empty() {
            return Err(DictionaryError::EmptyKey);
        }

        let key: Vec<char> = key.chars().collect();
        let Some((node, consumed)) = self.descend(&key) else {
            return Ok(None);
        };
        if consumed < node.label.len() {
            // The key stops short of the node's boundary, so it is at most
            // a prefix of what is stored here, not an exact match.
            return Ok(None);
        }

        Ok(node.value.as_ref())
    }

    fn remove(&mut self, key: &str) -> Result<Option<V>, DictionaryError> {
        if key.is_empty() {
            return Err(DictionaryError::EmptyKey);
        }

        let key: Vec<char> = key.chars().collect();
        Ok(Self::remove_recurse(
            &mut self.root,
            &key,
            0,
            &mut self.words,
            &mut self.nodes,
        ))
    }

    fn keys_with_prefix_by<F>(
        &self,
        prefix: &str,
        compare: F,
        count: usize,
    ) -> Result<Vec<String>, DictionaryError>
    where
        F: Fn(char, char) -> Ordering,
    {
        if prefix.is_empty() {
            return Err(DictionaryError::EmptyKey);
        }
        if count == 0 {
            return Err(DictionaryError::ZeroCount);
        }

        let chars: Vec<char> = prefix.chars().collect();
        let Some((anchor, consumed)) = self.descend(&chars) else {
            return Ok(Vec::new());
        };

        // The full key string at the anchor is the prefix plus whatever part
        // of the anchor's label the prefix did not already cover.
        let mut path = String::from(prefix);
        path.extend(&anchor.label.as_slice()[consumed..]);

        let mut out = Vec::new();
        collect_keys(anchor, path, &compare, count, &mut out);
        Ok(out)
    }

    fn size(&self) -> u64 {
        self.words
    }

    fn node_count(&self) -> u64 {
        self.nodes
    }
}

#[cfg(test)]
impl<V> CompressedTrie<V> {
    /// The node `key` lands on, regardless of where in the node's label it
    /// lands. Structural inspection for tests; exact lookup goes through
    /// [`Dictionary::get`].
    fn find(&self, key: &str) -> Option<&Node<V>> {
        let key: Vec<char> = key.chars().collect();
        self.descend(&key).map(|(node, _)| node)
    }

    /// Walk the whole tree asserting the compaction invariant and that the
    /// stored node count matches the live structure.
    pub(crate) fn assert_structure(&self) {
        fn walk<V>(node: &Node<V>, is_root: bool, live: &mut u64) {
            *live += 1;
            if is_root {
                assert!(node.label.is_empty(), "root must not carry a label");
            } else {
                assert!(
                    node.value.is_some() || node.children.len() != 1,
                    "non-root node is valueless with a single child"
                );
            }
            for child in node.children.values() {
                walk(child, false, live);
            }
        }

        let mut live = 0;
        walk(&self.root, true, &mut live);
        assert_eq!(live, self.nodes, "stored node count diverges from live nodes");
    }
}
