use std::fmt;
use std::mem;

/// An owned, possibly empty position in the tree: the root of the map or a
/// child of some node
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single node of the binary search tree
///
/// Only the value of a node can change after it is created. Its key is fixed
/// since modifying it could invalidate the ordering of the tree.
pub struct Node<K, V> {
    key: K,
    value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

/// Only prints this node, never its subtrees, so formatting a node costs the same at any depth
impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Node<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", self.key())
            .field("value", self.value())
            .field("has_left", &self.has_left())
            .field("has_right", &self.has_right())
            .finish()
    }
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    /// New subtrees MUST maintain BST property
    pub(crate) fn with_children(key: K, value: V, left: Link<K, V>, right: Link<K, V>) -> Self {
        Self {key, value, left, right}
    }

    pub(crate) fn into_value(self) -> V {
        self.value
    }

    /// Returns the key of this node
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value of this node
    pub fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the value of this node, returning the previous value
    pub(crate) fn set_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns true if this node has no subtrees at all
    pub fn is_leaf(&self) -> bool {
        !self.has_left() && !self.has_right()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Detaches both subtrees from this node
    pub(crate) fn take_children(&mut self) -> (Link<K, V>, Link<K, V>) {
        (self.left.take(), self.right.take())
    }
}
