//! The shape shared by the trees in this crate: a key, two exclusively owned
//! children and a cached height.

use std::cmp::Ordering;
use std::fmt;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Height reported for an absent subtree. A leaf has height `0`.
pub(crate) const EMPTY_HEIGHT: isize = -1;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) key: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many edges are on the longest path from this node down to a leaf.
    /// A node with no children has a height of 0.
    pub(crate) height: isize,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("height", &self.height)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Node<T> {
    /// Construct a new leaf with the given `key`.
    pub(crate) fn new_boxed(key: T) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 0,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Adjusts the height of `self` to be the max of its children's cached heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = cached_height(&self.left).max(cached_height(&self.right)) + 1;
    }

    /// The difference in height between the left and right subtrees, using the cached heights.
    /// Positive means left-heavy. See [the Wikipedia page][wiki] for more details.
    ///
    /// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Balance_factor
    pub(crate) fn balance_factor(&self) -> isize {
        cached_height(&self.left) - cached_height(&self.right)
    }

    /// The height of this node's subtree measured by walking all of it.
    pub(crate) fn measured_height(&self) -> isize {
        measured_height(&self.left).max(measured_height(&self.right)) + 1
    }

    /// Finds the node holding `key` in this subtree by comparison-based descent.
    pub(crate) fn find(&self, key: &T) -> Option<&Self>
    where
        T: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.find(key)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(key)),
        }
    }
}

/// The cached height of a subtree, [`EMPTY_HEIGHT`] when there is none.
pub(crate) fn cached_height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(EMPTY_HEIGHT, |n| n.height)
}

/// The height of a subtree measured by walking all of it, ignoring every cached height.
pub(crate) fn measured_height<T>(link: &Link<T>) -> isize {
    match link {
        None => EMPTY_HEIGHT,
        Some(n) => measured_height(&n.left).max(measured_height(&n.right)) + 1,
    }
}

/// Number of nodes in a subtree.
pub(crate) fn count<T>(link: &Link<T>) -> usize {
    match link {
        None => 0,
        Some(n) => count(&n.left) + count(&n.right) + 1,
    }
}
