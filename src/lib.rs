//! This crate exposes an AVL tree used as an ordered set of unique keys,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). An AVL tree keeps the
//! heights of every `Node`'s two subtrees within one of each other, which
//! limits the height to `O(lg N)` where `N` is the number of nodes in the
//! tree. BSTs also naturally support sorted traversal by visiting the left
//! subtree, then the subtree root, then the right subtree.
//!
//! ## Layout
//!
//! - [`SearchTree`] is the contract every tree in this crate fulfils.
//! - [`AvlTree`] is the self-balancing implementation of that contract.
//! - [`KeyList`] is the singly linked list traversals are collected into.
//!
//! # Examples
//!
//! ```
//! use avl::{AvlTree, SearchTree};
//!
//! let mut tree: Box<dyn SearchTree<i32>> = Box::new(AvlTree::new());
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key);
//! }
//! tree.remove(&3);
//! tree.remove(&8);
//!
//! assert!(!tree.contains(&3));
//! assert_eq!(tree.in_order(), [1, 4, 5, 7, 9]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
mod error;
pub mod list;
mod node;
pub mod search_tree;

pub use crate::avl::AvlTree;
pub use crate::error::InvariantViolation;
pub use crate::list::KeyList;
pub use crate::search_tree::SearchTree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
