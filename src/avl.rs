//! A self-balancing Binary Search Tree (specifically, an AVL tree) used as an ordered set.
//!
//! Every operation that changes the tree walks down recursively and hands the (possibly new)
//! root of each subtree back to its caller, which stores it in its own child slot. Heights are
//! fixed and rotations applied on the way back up, so no node needs a parent pointer.
//!
//! # Examples
//!
//! ```
//! use avl::AvlTree;
//!
//! let mut tree = AvlTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Keys are unique so a second insert does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.contains(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::error::InvariantViolation;
use crate::list::KeyList;
use crate::node::{self, cached_height, Link, Node, EMPTY_HEIGHT};
use crate::search_tree::SearchTree;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) holding unique keys. This can
/// be used for inserting, finding, and removing keys, and for listing them in order.
#[derive(Clone)]
pub struct AvlTree<T> {
    root: Link<T>,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for AvlTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree").field("root", &self.root()).finish()
    }
}

impl<T> AvlTree<T> {
    /// Generate a new, empty `AvlTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many keys are in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        node::count(&self.root)
    }

    /// Whether `key` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        self.find(key).is_some()
    }

    /// The height of the subtree rooted at the node holding `key`, or `None` if no node holds it.
    /// A leaf has height 0. The height is measured by walking the subtree rather than read from
    /// the heights the tree keeps for balancing.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// for key in [1, 2, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.height_of(&2), Some(1));
    /// assert_eq!(tree.height_of(&3), Some(0));
    /// assert_eq!(tree.height_of(&4), None);
    /// ```
    pub fn height_of(&self, key: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.find(key).map(|n| n.measured_height() as usize)
    }

    /// The key of the left child of the node holding `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// for key in [1, 2, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// // Inserting in ascending order rotated 2 up to the root.
    /// assert_eq!(tree.left_child_of(&2), Some(&1));
    /// assert_eq!(tree.left_child_of(&1), None);
    /// ```
    pub fn left_child_of(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.find(key).and_then(Node::left).map(|n| &n.key)
    }

    /// The key of the right child of the node holding `key`.
    pub fn right_child_of(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.find(key).and_then(Node::right).map(|n| &n.key)
    }

    /// Inserts `key` into the tree, returning whether it was newly added. Inserting a key that
    /// is already present leaves the tree as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let (root, inserted) = insert(self.root.take(), key);
        self.root = Some(root);
        inserted
    }

    /// Removes `key` from the tree, returning whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &T) -> bool
    where
        T: Ord,
    {
        let (root, removed) = remove(self.root.take(), key);
        self.root = root;
        removed
    }

    /// Every key in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// for key in [3, 1, 2] {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.in_order(), [1, 2, 3]);
    /// assert_eq!(tree.pre_order(), [2, 1, 3]);
    /// assert_eq!(tree.post_order(), [1, 3, 2]);
    /// ```
    pub fn in_order(&self) -> KeyList<T>
    where
        T: Clone,
    {
        let mut keys = KeyList::new();
        in_order(&self.root, &mut keys);
        keys
    }

    /// Every key, each node listed before its left subtree and then its right subtree.
    pub fn pre_order(&self) -> KeyList<T>
    where
        T: Clone,
    {
        let mut keys = KeyList::new();
        pre_order(&self.root, &mut keys);
        keys
    }

    /// Every key, each node listed after its left subtree and then its right subtree.
    pub fn post_order(&self) -> KeyList<T>
    where
        T: Clone,
    {
        let mut keys = KeyList::new();
        post_order(&self.root, &mut keys);
        keys
    }

    /// Walks the whole tree checking that keys are strictly ascending in order, that every cached
    /// height is correct, and that no node's subtrees differ in height by more than one.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// for key in 0..100 {
    ///     tree.insert(key);
    /// }
    ///
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantViolation>
    where
        T: Ord,
    {
        let mut previous = None;
        validate(&self.root, &mut previous).map(|_height| ())
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    fn find(&self, key: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root().and_then(|n| n.find(key))
    }
}

impl<T> SearchTree<T> for AvlTree<T>
where
    T: Ord + Clone,
{
    fn is_empty(&self) -> bool {
        AvlTree::is_empty(self)
    }

    fn len(&self) -> usize {
        AvlTree::len(self)
    }

    fn contains(&self, key: &T) -> bool {
        AvlTree::contains(self, key)
    }

    fn height_of(&self, key: &T) -> Option<usize> {
        AvlTree::height_of(self, key)
    }

    fn insert(&mut self, key: T) {
        AvlTree::insert(self, key);
    }

    fn remove(&mut self, key: &T) {
        AvlTree::remove(self, key);
    }

    fn left_child_of(&self, key: &T) -> Option<&T> {
        AvlTree::left_child_of(self, key)
    }

    fn right_child_of(&self, key: &T) -> Option<&T> {
        AvlTree::right_child_of(self, key)
    }

    fn in_order(&self) -> KeyList<T> {
        AvlTree::in_order(self)
    }

    fn pre_order(&self) -> KeyList<T> {
        AvlTree::pre_order(self)
    }

    fn post_order(&self) -> KeyList<T> {
        AvlTree::post_order(self)
    }
}

/// Inserts `key` into the subtree and returns the new subtree root along with whether the key
/// was added.
fn insert<T>(link: Link<T>, key: T) -> (Box<Node<T>>, bool)
where
    T: Ord,
{
    let Some(mut node) = link else {
        return (Node::new_boxed(key), true);
    };

    let inserted = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), key);
            node.left = Some(left);
            inserted
        }
        Ordering::Equal => false,
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), key);
            node.right = Some(right);
            inserted
        }
    };

    (balance(node), inserted)
}

/// Removes `key` from the subtree and returns the new subtree root (if anything is left) along
/// with whether the key was found.
fn remove<T>(link: Link<T>, key: &T) -> (Link<T>, bool)
where
    T: Ord,
{
    let Some(mut node) = link else {
        return (None, false);
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key);
            node.left = left;
            if !removed {
                return (Some(node), false);
            }
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key);
            node.right = right;
            if !removed {
                return (Some(node), false);
            }
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // With at most one child, that child (or nothing) takes this node's place and this
            // node is dropped here.
            (None, right) => {
                trace!(has_child = right.is_some(), "splicing out node without left child");
                return (right, true);
            }
            (left, None) => {
                trace!("splicing out node without right child");
                return (left, true);
            }

            // With two children, the in-order successor (the smallest key in the right subtree)
            // moves into this node. It never has a left child so taking it out is a splice.
            (Some(left), Some(right)) => {
                let (right, successor) = take_min(right);
                trace!("replacing removed key with its in-order successor");
                node.key = successor;
                node.left = Some(left);
                node.right = right;
            }
        },
    }

    (Some(balance(node)), true)
}

/// Detaches the node with the smallest key in the subtree, returning what is left of the subtree
/// and the detached key.
fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { key, right, .. } = *node;
            (right, key)
        }
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            (Some(balance(node)), min)
        }
    }
}

/// Fixes the height of `node` and rotates it if one of its subtrees has become more than one
/// level taller than the other. Returns the root of the rebalanced subtree.
///
/// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.fix_height();
    let node = match node.balance_factor() {
        factor if factor > 1 => match node.left().map_or(0, Node::balance_factor) {
            n if n >= 0 => rotate_right(node),
            _ => rotate_left_right(node),
        },
        factor if factor < -1 => match node.right().map_or(0, Node::balance_factor) {
            n if n <= 0 => rotate_left(node),
            _ => rotate_right_left(node),
        },
        _ => node,
    };

    if cfg!(debug_assertions) {
        let left_height = cached_height(&node.left);
        let right_height = cached_height(&node.right);
        assert_eq!(node.height, left_height.max(right_height) + 1);
        assert!(left_height.abs_diff(right_height) <= 1);
    }
    node
}

/// Rotate `old_root` to the right. This moves the left child up vertically and `old_root` down
/// vertically. Used to rebalance the tree when the left child is too tall. As such, it must only
/// be called when there _is_ a left child.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///       old_root              new_root
///        /     \              /     \
///   new_root    z   rotate ->  x    old_root
///    / \                              /  \
///   x   y                            y    z
/// ```
fn rotate_right<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = old_root.left.take().expect("Rotate right => left child");

    old_root.left = new_root.right.take();
    old_root.fix_height();

    new_root.right = Some(old_root);
    new_root.fix_height();

    trace!(height = new_root.height, "rotated right");
    new_root
}

/// Mirror image of [`rotate_right`]: the right child moves up and `old_root` becomes its left
/// child.
///
/// ## Panics
///
/// When called on a node without a right child.
fn rotate_left<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let mut new_root = old_root.right.take().expect("Rotate left => right child");

    old_root.right = new_root.left.take();
    old_root.fix_height();

    new_root.left = Some(old_root);
    new_root.fix_height();

    trace!(height = new_root.height, "rotated left");
    new_root
}

fn rotate_left_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.left = node.left.take().map(rotate_left);
    rotate_right(node)
}

fn rotate_right_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.right = node.right.take().map(rotate_right);
    rotate_left(node)
}

// The traversals push onto the front of the list, so each one visits its nodes in the exact
// reverse of the order it reports them in.

fn in_order<T>(link: &Link<T>, keys: &mut KeyList<T>)
where
    T: Clone,
{
    if let Some(n) = link {
        in_order(&n.right, keys);
        keys.push_front(n.key.clone());
        in_order(&n.left, keys);
    }
}

fn pre_order<T>(link: &Link<T>, keys: &mut KeyList<T>)
where
    T: Clone,
{
    if let Some(n) = link {
        pre_order(&n.right, keys);
        pre_order(&n.left, keys);
        keys.push_front(n.key.clone());
    }
}

fn post_order<T>(link: &Link<T>, keys: &mut KeyList<T>)
where
    T: Clone,
{
    if let Some(n) = link {
        keys.push_front(n.key.clone());
        post_order(&n.right, keys);
        post_order(&n.left, keys);
    }
}

/// Checks the subtree in order, returning its measured height. `previous` is the last key seen.
fn validate<'a, T>(
    link: &'a Link<T>,
    previous: &mut Option<&'a T>,
) -> Result<isize, InvariantViolation>
where
    T: Ord,
{
    let Some(n) = link else {
        return Ok(EMPTY_HEIGHT);
    };

    let left_height = validate(&n.left, previous)?;
    if let Some(prev) = *previous {
        if *prev >= n.key {
            return Err(InvariantViolation::OutOfOrder);
        }
    }
    *previous = Some(&n.key);
    let right_height = validate(&n.right, previous)?;

    let actual = left_height.max(right_height) + 1;
    if n.height != actual {
        return Err(InvariantViolation::StaleHeight {
            cached: n.height,
            actual,
        });
    }

    let balance_factor = left_height - right_height;
    if balance_factor.abs() > 1 {
        return Err(InvariantViolation::Unbalanced { balance_factor });
    }

    Ok(actual)
}
