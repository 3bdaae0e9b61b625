//! Operations on owned subtrees.
//!
//! Every walk is iterative so that a degenerated (list-shaped) tree
//! cannot overflow the stack.
use std::cmp::Ordering;
use std::mem;

use super::node::Node;

pub type Tree = Option<Box<Node>>;

/// Returns the link that either holds `key` or is the empty slot where `key` belongs.
fn search<'a>(mut link: &'a mut Tree, key: &str) -> &'a mut Tree {
    loop {
        let ordering = link.as_ref().map(|node| key.cmp(node.key.as_str()));
        link = match (ordering, link) {
            (Some(Ordering::Less), Some(node)) => &mut node.left,
            (Some(Ordering::Greater), Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

/// Inserts `key`. Returns `false` (and leaves the tree untouched) if it is already present.
pub fn insert(tree: &mut Tree, key: String) -> bool {
    let link = search(tree, &key);
    if link.is_some() {
        return false;
    }
    *link = Some(Box::new(Node::new(key)));
    true
}

/// Removes `key` and returns it, or returns `None` if it is absent.
pub fn remove(tree: &mut Tree, key: &str) -> Option<String> {
    unlink(search(tree, key))
}

/// Excises the node held by `link`.
///
/// A node with at most one child is replaced by that child.
/// A node with two children keeps its position and takes the key of its in-order predecessor,
/// which is spliced out of the left subtree instead.
fn unlink(link: &mut Tree) -> Option<String> {
    let two_children = link
        .as_ref()
        .map_or(false, |node| node.left.is_some() && node.right.is_some());

    if two_children {
        let node = link.as_mut()?;
        let predecessor = take_rightmost(&mut node.left)?;
        return Some(mem::replace(&mut node.key, predecessor));
    }

    let node = link.take()?;
    let Node { key, left, right } = *node;
    *link = left.or(right);
    Some(key)
}

/// Splices out the rightmost node of `link` and returns its key.
/// Its left subtree (if any) takes its place.
///
/// When `link` is the left slot of the node being deleted and the node it holds has no right child,
/// that slot itself is rewired.
fn take_rightmost(mut link: &mut Tree) -> Option<String> {
    while link.as_ref()?.right.is_some() {
        link = match link {
            Some(node) => &mut node.right,
            None => return None,
        };
    }

    let node = link.take()?;
    let Node { key, left, .. } = *node;
    *link = left;
    Some(key)
}

pub fn contains(tree: &Tree, key: &str) -> bool {
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match key.cmp(node.key.as_str()) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

/// Number of nodes on the longest root-to-leaf path.
pub fn height(tree: &Tree) -> usize {
    let mut max = 0;
    let mut pending: Vec<(&Node, usize)> = tree.iter().map(|node| (&**node, 1)).collect();
    while let Some((node, depth)) = pending.pop() {
        max = max.max(depth);
        pending.extend(node.left.iter().map(|child| (&**child, depth + 1)));
        pending.extend(node.right.iter().map(|child| (&**child, depth + 1)));
    }
    max
}

/// Discards the whole tree.
///
/// Children are detached before their parent is dropped, so dropping
/// a `Box<Node>` never recurses.
pub fn destroy(tree: &mut Tree) {
    let mut pending: Vec<Box<Node>> = tree.take().into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
