mod node;
mod inorder;
mod postorder;

pub use node::Node;

use std::fmt;
use std::borrow::Borrow;
use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::Error;
use node::Link;
use inorder::IterInorder;
use postorder::IterPostorder;

/// An ordered map backed by an unbalanced binary search tree (BST)
///
/// BST properties: For each node with key `k`:
/// - The key of each node in the left subtree is less than `k`
/// - The key of each node in the right subtree is greater than `k`
///
/// No rebalancing is ever performed. Inserting keys in sorted order produces
/// a tree with the shape of a linked list, so every traversal in this module
/// is written as a loop rather than as a recursive function.
///
/// Only leaf nodes can be removed. See [`TreeMap::remove`].
pub struct TreeMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for TreeMap<K, V> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<K, V> TreeMap<K, V> {
    /// Creates an empty `TreeMap`
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_map::TreeMap;
    /// let mut map: TreeMap<&str, i32> = TreeMap::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries in the map (i.e. the number of nodes in the binary search
    /// tree)
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.put(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`TreeMap::len`]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns true if the map is empty
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert!(map.is_empty());
    /// map.put(1, "a");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Clears the map, removing all elements
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put(1, "a");
    /// assert!(!map.is_empty());
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// The root is whichever key was inserted first and has not been removed.
    /// This is a low-level API meant to be used for implementing custom
    /// traversals. For a guaranteed ordering, use the `Display` output.
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Walks the entries in ascending key order
    fn iter_inorder(&self) -> IterInorder<'_, K, V> {
        IterInorder::new(self.root())
    }

    /// Walks the nodes so that every node comes after both of its subtrees
    fn iter_postorder(&self) -> IterPostorder<'_, K, V> {
        IterPostorder::new(self.root())
    }
}

impl<K: Ord, V> TreeMap<K, V> {
    /// Returns the slot holding `key`, or the empty slot where `key` belongs if it is not in the
    /// tree
    ///
    /// An equal key stops the descent, a greater key goes right and anything else goes left.
    fn find_slot<'a, Q>(mut slot: &'a mut Link<K, V>, key: &Q) -> &'a mut Link<K, V>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        loop {
            // Only a shared borrow may be live where `slot` is returned
            let go_right = match slot.as_deref() {
                Some(node) => match key.cmp(node.key().borrow()) {
                    Ordering::Equal => return slot,
                    Ordering::Greater => true,
                    Ordering::Less => false,
                },
                None => return slot,
            };

            if let Some(node) = slot {
                slot = if go_right { &mut node.right } else { &mut node.left };
            }
        }
    }

    /// Returns the node holding `key`, if any
    fn find_node<Q>(&self, key: &Q) -> Option<&Node<K, V>>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(node.key().borrow()) {
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
                Ordering::Less => node.left(),
            };
        }

        None
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// Time complexity: `O(h)` where `h` is the height of the tree
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put(1, "a");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Returns a reference to the value corresponding to the given key, or `None` if no such key
    /// exists in the binary search tree
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// Time complexity: `O(h)` where `h` is the height of the tree
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.find_node(key).map(Node::value)
    }

    /// Returns a mutable reference to the value corresponding to the given key, or `None` if no
    /// such key exists in the binary search tree
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map.get(&1), Some(&"b"));
    ///
    /// assert_eq!(map.get_mut(&2), None);
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        Self::find_slot(&mut self.root, key)
            .as_deref_mut()
            .map(Node::value_mut)
    }

    /// Inserts a new value into the binary search tree
    ///
    /// Returns the previous value if the key was already present in an existing node or `None` if
    /// a new leaf was inserted. Replacing a value never changes the shape of the tree or its
    /// length.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.put(37, "a"), None);
    /// assert!(!map.is_empty());
    ///
    /// map.put(37, "b");
    /// assert_eq!(map.put(37, "c"), Some("b"));
    /// assert_eq!(map.get(&37), Some(&"c"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let slot = Self::find_slot(&mut self.root, &key);
        match slot {
            Some(node) => {
                trace!(len = self.len, "replaced value of existing key");
                Some(node.set_value(value))
            },

            None => {
                *slot = Some(Box::new(Node::new(key, value)));
                self.len += 1;
                trace!(len = self.len, "inserted new leaf");
                None
            },
        }
    }

    /// Same as [`TreeMap::put`]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.put(key, value)
    }

    /// Removes a key from the map, returning the value at the key if the key was previously in the
    /// map.
    ///
    /// Only leaf nodes can be removed. If the node holding `key` has a left or right subtree,
    /// `Error::InvalidOperation` is returned and the map is left untouched. Removing a key that
    /// is not in the map is not an error and returns `Ok(None)`.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use tree_map::{TreeMap, Error};
    ///
    /// let mut map = TreeMap::new();
    /// map.put(2, "b");
    /// map.put(1, "a");
    ///
    /// // 2 is the parent of 1
    /// assert_eq!(map.remove(&2), Err(Error::InvalidOperation));
    ///
    /// assert_eq!(map.remove(&1), Ok(Some("a")));
    /// assert_eq!(map.remove(&1), Ok(None));
    /// assert_eq!(map.remove(&2), Ok(Some("b")));
    /// assert!(map.is_empty());
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Result<Option<V>, Error>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let slot = Self::find_slot(&mut self.root, key);
        if slot.as_deref().is_some_and(|node| !node.is_leaf()) {
            debug!(len = self.len, "rejected removal of a node with children");
            return Err(Error::InvalidOperation);
        }

        match slot.take() {
            Some(node) => {
                self.len -= 1;
                trace!(len = self.len, "removed leaf");
                Ok(Some(node.into_value()))
            },

            None => Ok(None),
        }
    }
}

impl<K, V> Drop for TreeMap<K, V> {
    fn drop(&mut self) {
        // Dropping a `Box<Node>` drops its subtrees recursively, so detach every node from its
        // children before it goes out of scope
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            let (left, right) = node.take_children();
            stack.extend(left);
            stack.extend(right);
        }
    }
}

impl<K: Clone, V: Clone> Clone for TreeMap<K, V> {
    /// Produces a map with exactly the same tree shape
    fn clone(&self) -> Self {
        // Post-order guarantees that the clones of a node's subtrees sit on top of `built`, right
        // above left, by the time the node itself is visited
        let mut built: Vec<Box<Node<K, V>>> = Vec::new();
        for node in self.iter_postorder() {
            let right = if node.has_right() { built.pop() } else { None };
            let left = if node.has_left() { built.pop() } else { None };
            built.push(Box::new(Node::with_children(
                node.key().clone(),
                node.value().clone(),
                left,
                right,
            )));
        }
        debug_assert!(built.len() <= 1);

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for TreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        // We can't just compare the binary trees structurally, since they may be structured
        // differently while still having all the same elements (e.g. if insertion order is
        // different). Instead, we use in-order traversal since we know that that is guaranteed to
        // produce the elements in sorted order. If their sorted orders are equal, the maps are
        // equal.

        if self.len() != other.len() {
            return false;
        }

        self.iter_inorder().zip(other.iter_inorder()).all(|((k1, v1), (k2, v2))| {
            k1.eq(k2) && v1.eq(v2)
        })
    }
}

impl<K: Eq, V: Eq> Eq for TreeMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for TreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_inorder()).finish()
    }
}

/// Writes every entry in ascending key order as `[ (k1, v1) (k2, v2) ]`
///
/// An empty map is written as `[ ]`.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for TreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for (key, value) in self.iter_inorder() {
            write!(f, "({}, {}) ", key, value)?;
        }
        f.write_str("]")
    }
}

impl<K: Ord, V> Extend<(K, V)> for TreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
