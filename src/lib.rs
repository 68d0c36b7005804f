//! String-keyed dictionaries built on prefix trees.
//!
//! Two variants implement the same [`Dictionary`] contract:
//!
//! - [`SimpleTrie`]: one node per key character. Simple and predictable,
//!   but wasteful on long shared prefixes.
//! - [`CompressedTrie`]: a radix tree. Chains of single-child nodes are
//!   folded into one node holding a multi-character label; insertion splits
//!   a label at a new branch point and deletion merges nodes back together
//!   to keep the tree compact.
//!
//! ```rust
//! use radix_dict::{CompressedTrie, Dictionary};
//!
//! let mut dict = CompressedTrie::new();
//! dict.put("hello", 1)?;
//! dict.put("help", 2)?;
//! dict.put("world", 3)?;
//!
//! assert_eq!(dict.get("hello")?, Some(&1));
//! assert_eq!(dict.keys_with_prefix("hel", 10)?, ["hello", "help"]);
//! # Ok::<(), radix_dict::DictionaryError>(())
//! ```
//!
//! Dictionaries are exclusively owned values; mutation goes through
//! `&mut self` and there is no internal locking. Callers that need
//! multi-threaded access must provide their own exclusion.

use std::cmp::Ordering;

mod compressed;
mod error;
mod label;
pub mod loader;
mod simple;
mod walk;

#[cfg(test)]
mod proptests;

pub use compressed::CompressedTrie;
pub use error::DictionaryError;
pub use simple::SimpleTrie;

/// The dictionary contract shared by every trie variant: exact lookup,
/// insertion, removal, and bounded ordered prefix enumeration over non-empty
/// string keys.
///
/// Handing an empty key (or prefix) to any operation is a
/// [`DictionaryError::EmptyKey`] error rather than a miss; absence of a key
/// is never an error and is reported as `Ok(None)`.
///
/// [`size`](Dictionary::size) counts successful insertions and is
/// decremented on removal. Putting an existing key again counts as another
/// insertion, so after repeated puts of the same key it reads as a
/// cumulative insertion counter, not a distinct-key count. Callers that need
/// the latter must track it themselves.
pub trait Dictionary<V> {
    /// Insert `key` mapped to `value`, returning the value it replaces.
    fn put(&mut self, key: &str, value: V) -> Result<Option<V>, DictionaryError>;

    /// Look up the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<&V>, DictionaryError>;

    /// Remove `key`, returning the value that was stored under it.
    fn remove(&mut self, key: &str) -> Result<Option<V>, DictionaryError>;

    /// Up to `count` stored keys starting with `prefix`, in ascending
    /// character order.
    fn keys_with_prefix(
        &self,
        prefix: &str,
        count: usize,
    ) -> Result<Vec<String>, DictionaryError>
    where
        Self: Sized,
    {
        self.keys_with_prefix_by(prefix, |a, b| a.cmp(&b), count)
    }

    /// Up to `count` stored keys starting with `prefix`, walking the tree
    /// depth-first with children visited in the character order `compare`
    /// imposes. A terminal node is always emitted before its descendants.
    fn keys_with_prefix_by<F>(
        &self,
        prefix: &str,
        compare: F,
        count: usize,
    ) -> Result<Vec<String>, DictionaryError>
    where
        Self: Sized,
        F: Fn(char, char) -> Ordering;

    /// Number of words inserted, cumulative across overwrites (see the trait
    /// docs). Never fails.
    fn size(&self) -> u64;

    /// Number of live nodes, root included (an empty dictionary reports 1).
    /// A structural diagnostic, mostly useful for comparing variants.
    fn node_count(&self) -> u64;

    /// Insert only if `key` is absent. Returns the already-present value,
    /// or `None` when the insertion happened.
    fn put_if_absent(&mut self, key: &str, value: V) -> Result<Option<V>, DictionaryError>
    where
        Self: Sized,
        V: Clone,
    {
        match self.get(key)?.cloned() {
            Some(existing) => Ok(Some(existing)),
            None => {
                self.put(key, value)?;
                Ok(None)
            }
        }
    }

    /// Compute and insert a value for an absent `key`, returning the value
    /// now associated with it. A `None` from `compute` records nothing.
    fn compute_if_absent<F>(&mut self, key: &str, compute: F) -> Result<Option<V>, DictionaryError>
    where
        Self: Sized,
        V: Clone,
        F: FnOnce(&str) -> Option<V>,
    {
        if let Some(existing) = self.get(key)?.cloned() {
            return Ok(Some(existing));
        }

        match compute(key) {
            Some(value) => {
                self.put(key, value.clone())?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Recompute the value of a present `key`. A `None` from `compute`
    /// removes the mapping. Returns the new value, or `None` when the key
    /// was absent or has been removed.
    fn compute_if_present<F>(
        &mut self,
        key: &str,
        compute: F,
    ) -> Result<Option<V>, DictionaryError>
    where
        Self: Sized,
        V: Clone,
        F: FnOnce(&str, &V) -> Option<V>,
    {
        let Some(old) = self.get(key)?.cloned() else {
            return Ok(None);
        };

        match compute(key, &old) {
            Some(value) => {
                self.put(key, value.clone())?;
                Ok(Some(value))
            }
            None => {
                self.remove(key)?;
                Ok(None)
            }
        }
    }
}
