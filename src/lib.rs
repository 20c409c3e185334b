//! An unbalanced Binary Search Tree (BST) that can draw itself as text.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are defined recursively
//! using the notion of a `Node`. A `Node` stores a key and owns at most
//! two child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! This tree never rebalances itself, so inserting keys in ascending order
//! yields a tree shaped like a list. Searching costs `O(height)`.
//!
//! ## Rendering
//!
//! [`Tree::render`] lays the tree out vertically with each key centered over
//! the span of its children.
//!
//! ```
//! use bst_render::{InsertOutcome, Tree};
//!
//! let mut tree = Tree::new(5);
//! assert_eq!(tree.insert(3), InsertOutcome::Inserted);
//! assert_eq!(tree.insert(3), InsertOutcome::AlreadyPresent);
//! assert_eq!(tree.size(), 2);
//!
//! tree.delete(&5);
//! assert_eq!(tree.render(), vec!["3".to_string()]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod render;
pub mod tree;
mod util;


pub use tree::{InsertOutcome, Node, Tree};
