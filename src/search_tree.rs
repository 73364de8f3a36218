//! The contract shared by the search trees in this crate. Each balancing strategy is one
//! implementation of [`SearchTree`], so callers can hold a `Box<dyn SearchTree<T>>` and not care
//! which one they were handed.

use crate::list::KeyList;

/// An ordered set of unique keys stored in a binary search tree.
///
/// Absence is never an error: looking up, measuring, or removing a key that isn't stored gives
/// `false`, `None`, or does nothing.
pub trait SearchTree<T>
where
    T: Ord + Clone,
{
    /// Whether the tree holds no keys.
    fn is_empty(&self) -> bool;

    /// How many keys are in the tree.
    fn len(&self) -> usize;

    /// Whether `key` is stored in the tree.
    fn contains(&self, key: &T) -> bool;

    /// The height of the subtree rooted at the node holding `key`, or `None` if no node does.
    /// A leaf has height 0.
    fn height_of(&self, key: &T) -> Option<usize>;

    /// Adds `key` to the tree. Inserting a key that is already present does nothing.
    fn insert(&mut self, key: T);

    /// Removes `key` from the tree. Removing a key that isn't present does nothing.
    fn remove(&mut self, key: &T);

    /// The key of the left child of the node holding `key`. `None` if there is no such node or
    /// it has no left child.
    fn left_child_of(&self, key: &T) -> Option<&T>;

    /// The key of the right child of the node holding `key`. `None` if there is no such node or
    /// it has no right child.
    fn right_child_of(&self, key: &T) -> Option<&T>;

    /// Every key in ascending order.
    fn in_order(&self) -> KeyList<T>;

    /// Every key, each node listed before the nodes of its left then right subtree.
    fn pre_order(&self) -> KeyList<T>;

    /// Every key, each node listed after the nodes of its left then right subtree.
    fn post_order(&self) -> KeyList<T>;
}
