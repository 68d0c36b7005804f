//! Ordered, bounded depth-first key enumeration shared by both trie
//! variants.

use std::cmp::Ordering;

/// What the enumerator needs from a trie node. The simple variant
/// contributes no label characters; the compressed variant contributes its
/// compressed label behind each edge character.
pub(crate) trait WalkNode: Sized {
    fn is_terminal(&self) -> bool;

    /// Label characters this node contributes beyond its edge character.
    fn label_chars(&self) -> &[char];

    fn children(&self) -> impl Iterator<Item = (char, &Self)>;
}

/// Pre-order walk from `node`, visiting children in the order `compare`
/// imposes on their edge characters and pushing the reconstructed key of
/// every terminal node into `out`, until `count` keys have been collected.
/// Subtrees are not expanded once the quota is reached.
///
/// `path` is the full key string reconstructed at `node`, label included.
pub(crate) fn collect_keys<N, F>(
    node: &N,
    path: String,
    compare: &F,
    count: usize,
    out: &mut Vec<String>,
) where
    N: WalkNode,
    F: Fn(char, char) -> Ordering,
{
    if out.len() >= count {
        return;
    }
    if node.is_terminal() {
        out.push(path.clone());
    }

    let mut edges: Vec<(char, &N)> = node.children().collect();
    edges.sort_by(|a, b| compare(a.0, b.0));

    for (edge, child) in edges {
        if out.len() >= count {
            return;
        }
        let mut next = path.clone();
        next.push(edge);
        next.extend(child.label_chars());
        collect_keys(child, next, compare, count, out);
    }
}
