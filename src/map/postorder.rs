use std::ptr;
use std::iter::FusedIterator;

use super::Node;

/// Yields every node after both of its subtrees
///
/// Used to rebuild a tree bottom-up: by the time a node is yielded, its
/// children have already been visited.
pub(crate) struct IterPostorder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal-using-stack/
impl<'a, K, V> IterPostorder<'a, K, V> {
    pub(super) fn new(root: Option<&'a Node<K, V>>) -> Self {
        let mut iter = Self {stack: Vec::new()};
        if let Some(root) = root {
            iter.descend(root);
        }
        iter
    }

    /// Pushes `node` and its left spine, each node preceded by its right child
    fn descend(&mut self, mut node: &'a Node<K, V>) {
        loop {
            self.stack.extend(node.right());
            self.stack.push(node);

            match node.left() {
                Some(left) => node = left,
                None => break,
            }
        }
    }
}

/// Compares two nodes for equality using pointer equality only
fn node_eq<K, V>(left: Option<&&Node<K, V>>, right: &Node<K, V>) -> bool {
    left.map(|&left| ptr::eq(left, right))
        // default to not equal
        .unwrap_or(false)
}

impl<'a, K, V> Iterator for IterPostorder<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node.right() {
                // Right subtree not visited yet: swap it with this node and walk into it
                Some(right) if node_eq(self.stack.last(), right) => {
                    self.stack.pop();
                    self.stack.push(node);
                    self.descend(right);
                },

                _ => return Some(node),
            }
        }

        None
    }
}

impl<'a, K, V> FusedIterator for IterPostorder<'a, K, V> {}
