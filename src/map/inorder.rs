use std::iter::FusedIterator;

use super::Node;

/// Walks the tree in ascending key order without recursing
///
/// The stack always holds the left spine of the subtree still to be visited,
/// so its height is bounded by the height of the tree rather than the call
/// stack.
pub(crate) struct IterInorder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, K, V> IterInorder<'a, K, V> {
    pub(super) fn new(root: Option<&'a Node<K, V>>) -> Self {
        let mut iter = Self {stack: Vec::new()};
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<K, V>>) {
        while let Some(current_node) = current {
            self.stack.push(current_node);
            current = current_node.left();
        }
    }
}

impl<'a, K, V> Iterator for IterInorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());

        Some((node.key(), node.value()))
    }
}

impl<'a, K, V> FusedIterator for IterInorder<'a, K, V> {}
