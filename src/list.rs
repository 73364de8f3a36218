//! A singly linked list of keys. Tree traversals build one of these by repeatedly pushing onto
//! the front, so the only operation a traversal needs is [`KeyList::push_front`].
//!
//! # Examples
//!
//! ```
//! use avl::KeyList;
//!
//! let mut list = KeyList::new();
//! list.push_front(3);
//! list.push_front(2);
//! list.push_front(1);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list, [1, 2, 3]);
//! assert_eq!(Vec::from(list), vec![1, 2, 3]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

/// A singly linked list that owns its keys. New keys go on the front.
pub struct KeyList<T> {
    head: Option<Box<Cell<T>>>,
    len: usize,
}

struct Cell<T> {
    key: T,
    next: Option<Box<Cell<T>>>,
}

impl<T> Default for KeyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for KeyList<T> {
    // The default drop would recurse once per cell. Unlink them one at a time instead.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut cell) = next {
            next = cell.next.take();
        }
    }
}

impl<T> KeyList<T> {
    /// Generates a new, empty `KeyList`.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Puts `key` at the front of the list.
    pub fn push_front(&mut self, key: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Cell { key, next }));
        self.len += 1;
    }

    /// Removes and returns the key at the front of the list, if there is one.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|cell| {
            let Cell { key, next } = *cell;
            self.head = next;
            self.len -= 1;
            key
        })
    }

    /// The key at the front of the list.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|cell| &cell.key)
    }

    /// How many keys are in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no keys.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterates over the keys from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for KeyList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for KeyList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for KeyList<T> where T: Eq {}

impl<T> PartialEq<[T]> for KeyList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, const N: usize> PartialEq<[T; N]> for KeyList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; N]) -> bool {
        self == &other[..]
    }
}

impl<T> PartialEq<Vec<T>> for KeyList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Vec<T>) -> bool {
        self == other.as_slice()
    }
}

impl<T> From<KeyList<T>> for Vec<T> {
    fn from(list: KeyList<T>) -> Self {
        let mut keys = Vec::with_capacity(list.len());
        keys.extend(list);
        keys
    }
}

/// Borrowing iterator over a [`KeyList`], front to back.
pub struct Iter<'a, T> {
    next: Option<&'a Cell<T>>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|cell| {
            self.next = cell.next.as_deref();
            self.len -= 1;
            &cell.key
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`KeyList`], front to back.
pub struct IntoIter<T>(KeyList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for KeyList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a KeyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
