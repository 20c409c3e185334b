//! The tree itself. Each [`Node`] exclusively owns its children and nothing
//! points back up, so a parent is only ever known transiently while walking
//! down from the root.
//!
//! # Examples
//!
//! ```
//! use bst_render::{InsertOutcome, Tree};
//!
//! let mut tree = Tree::new(5);
//! for key in [10, 15, 3, 4] {
//!     assert_eq!(tree.insert(key), InsertOutcome::Inserted);
//! }
//! assert_eq!(tree.size(), 5);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.to_string(), "node value: 5 left value: 3 right value: 10");
//!
//! // 10 has a right child so it is replaced by its successor, 15.
//! tree.delete(&10);
//! assert_eq!(tree.size(), 4);
//! assert!(!tree.contains(&10));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::render;
use crate::util::DeleteResult;

type Link<K> = Option<Box<Node<K>>>;

/// Whether [`Tree::insert`] changed the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new leaf holding the key was attached.
    Inserted,
    /// The key was already stored so the tree is unchanged.
    AlreadyPresent,
}

/// An unbalanced Binary Search Tree of unique keys.
///
/// A tree is seeded with a key when constructed. It only becomes empty if every
/// key is deleted, after which the next insert seeds a new root.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Unlink iteratively so a list-shaped tree can't overflow the stack.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new `Tree` whose root holds `root`.
    pub fn new(root: K) -> Self {
        Self {
            root: Some(Node::new_boxed(root)),
        }
    }

    /// The root of the tree, or `None` once every key has been deleted.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// How many keys are stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_render::Tree;
    ///
    /// let mut tree = Tree::new(2);
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn size(&self) -> usize {
        self.root().map_or(0, Node::count_elements)
    }

    /// Whether every key has been deleted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Looks for the node holding `key`.
    ///
    /// Returns the node (if found) together with its parent. When the key isn't
    /// stored, the second element is the last node visited, i.e. the node a new
    /// leaf for `key` would be attached to.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_render::Tree;
    ///
    /// let mut tree = Tree::new(5);
    /// tree.insert(3);
    ///
    /// let (found, parent) = tree.search(&3);
    /// assert_eq!(found.map(|n| *n.key()), Some(3));
    /// assert_eq!(parent.map(|n| *n.key()), Some(5));
    ///
    /// let (found, parent) = tree.search(&4);
    /// assert!(found.is_none());
    /// assert_eq!(parent.map(|n| *n.key()), Some(3));
    /// ```
    pub fn search(&self, key: &K) -> (Option<&Node<K>>, Option<&Node<K>>)
    where
        K: Ord,
    {
        Node::search(self.root(), key, None)
    }

    /// Whether `key` is stored in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).0.is_some()
    }

    /// Inserts `key` as a new leaf. Inserting a key that is already stored
    /// leaves the tree untouched and reports [`InsertOutcome::AlreadyPresent`].
    ///
    /// Walks down with a cursor rather than recursing, so inserting into a
    /// list-shaped tree doesn't grow the stack.
    pub fn insert(&mut self, key: K) -> InsertOutcome
    where
        K: Ord,
    {
        let mut depth = 0usize;
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    debug!(depth, "key already present, not inserted");
                    return InsertOutcome::AlreadyPresent;
                }
                Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        *link = Some(Node::new_boxed(key));
        trace!(depth, "attached new leaf");
        InsertOutcome::Inserted
    }

    /// Deletes the node holding `key`. Nothing happens if the key isn't stored.
    ///
    /// A node with two children keeps its place in the tree and takes the key
    /// of its in-order successor, whose node is removed instead.
    pub fn delete(&mut self, key: &K)
    where
        K: Ord,
    {
        let (root, result) = Node::delete_from(self.root.take(), key);
        self.root = root;
        match result {
            DeleteResult::NotFound => debug!("key not found, nothing deleted"),
            DeleteResult::Removed => trace!(empty = self.is_empty(), "key deleted"),
        }
    }

    /// Draws the tree, one string per row from top to bottom. See [`render::render`].
    pub fn render(&self) -> Vec<String>
    where
        K: fmt::Display,
    {
        render::render(self.root())
    }
}

/// Writes the rows of [`Tree::render`] separated by newlines.
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.render().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// A `Node` holds a key and owns up to two children.
#[derive(Clone, Debug)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

/// The diagnostic form, e.g. `node value: 5 left value: 3 right value: 10`.
/// Absent children are left out entirely.
impl<K> fmt::Display for Node<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node value: {}", self.key)?;
        if let Some(left) = self.left() {
            write!(f, " left value: {}", left.key)?;
        }
        if let Some(right) = self.right() {
            write!(f, " right value: {}", right.key)?;
        }
        Ok(())
    }
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, holding smaller keys.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding larger keys.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Number of nodes in the subtree rooted at this node, itself included.
    pub fn count_elements(&self) -> usize {
        1 + self.left().map_or(0, Self::count_elements)
            + self.right().map_or(0, Self::count_elements)
    }

    /// Descends from `node`, threading the last visited node through as `parent`.
    fn search<'a>(
        node: Option<&'a Self>,
        key: &K,
        parent: Option<&'a Self>,
    ) -> (Option<&'a Self>, Option<&'a Self>)
    where
        K: Ord,
    {
        let Some(current) = node else {
            return (None, parent);
        };
        match key.cmp(&current.key) {
            Ordering::Less => Self::search(current.left(), key, Some(current)),
            Ordering::Equal => (Some(current), parent),
            Ordering::Greater => Self::search(current.right(), key, Some(current)),
        }
    }

    /// Deletes `key` from the subtree in `link` and returns what should be
    /// re-attached in its place.
    fn delete_from(link: Link<K>, key: &K) -> (Link<K>, DeleteResult)
    where
        K: Ord,
    {
        match link {
            Some(node) => node.delete(key),
            None => (None, DeleteResult::NotFound),
        }
    }

    fn delete(mut self: Box<Self>, key: &K) -> (Link<K>, DeleteResult)
    where
        K: Ord,
    {
        let result = match key.cmp(&self.key) {
            Ordering::Less => {
                let (left, result) = Self::delete_from(self.left.take(), key);
                self.left = left;
                result
            }
            Ordering::Greater => {
                let (right, result) = Self::delete_from(self.right.take(), key);
                self.right = right;
                result
            }
            Ordering::Equal => {
                return match (self.left.take(), self.right.take()) {
                    // Zero or one child: the child (if any) takes our place.
                    (None, right) => (right, DeleteResult::Removed),
                    (left, None) => (left, DeleteResult::Removed),
                    (left, Some(right)) => {
                        let (right, successor) = right.take_min();
                        self.key = successor;
                        self.left = left;
                        self.right = right;
                        self.debug_assert_ordered();
                        (Some(self), DeleteResult::Removed)
                    }
                };
            }
        };

        self.debug_assert_ordered();
        (Some(self), result)
    }

    /// Removes the leftmost node of this subtree, returning the remaining
    /// subtree and the removed key. The leftmost node has no left child so its
    /// right child is spliced into its place.
    fn take_min(mut self: Box<Self>) -> (Link<K>, K) {
        match self.left.take() {
            None => {
                let Node { key, right, .. } = *self;
                (right, key)
            }
            Some(left) => {
                let (left, min) = left.take_min();
                self.left = left;
                (Some(self), min)
            }
        }
    }

    fn debug_assert_ordered(&self)
    where
        K: Ord,
    {
        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(left.key < self.key);
            }
            if let Some(right) = self.right() {
                assert!(self.key < right.key);
            }
        }
    }
}
