//! A doubly linked list with constant-time append and forward iteration.
//!
//! # Overview
//!
//! Nodes live in a single arena (`Vec`) and link to each other by index:
//! `next` is the forward chain that defines enumeration order and `prev` is a
//! back-reference used only for navigation. The list tracks both ends of the
//! chain, so [LinkedList::add] never walks it.
//!
//! The chain always satisfies:
//! - the first node has no `prev` and the last node has no `next`
//! - if a node's `next` is `n`, then `n`'s `prev` is that node
//! - following `next` from the first node reaches the last in `len - 1` steps
//!
//! # Example
//!
//! ```
//! use primer_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.add(1);
//! list.add(2);
//! list.add(3);
//! list.add(4);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//!
//! let first = list.first().unwrap();
//! assert_eq!(*first.value(), 1);
//! assert_eq!(*first.next().unwrap().value(), 2);
//! assert_eq!(*first.next().unwrap().prev().unwrap().value(), 1);
//!
//! let last = list.last().unwrap();
//! assert_eq!(*last.value(), 4);
//! ```

use core::{fmt, iter::FusedIterator};

type Link = Option<usize>;

#[derive(Clone)]
struct Node<T> {
    value: T,
    prev: Link,
    next: Link,
}

/// A doubly linked list that only grows at its tail.
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: Vec<Node<T>>,
    first: Link,
    last: Link,
}

impl<T> LinkedList<T> {
    /// Create a new, empty list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            first: None,
            last: None,
        }
    }

    /// Create a new, empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            first: None,
            last: None,
        }
    }

    /// Append `value` after the current last node.
    pub fn add(&mut self, value: T) {
        let index = self.nodes.len();
        self.nodes.push(Node {
            value,
            prev: self.last,
            next: None,
        });
        match self.last {
            Some(last) => self.nodes[last].next = Some(index),
            None => self.first = Some(index),
        }
        self.last = Some(index);
    }

    /// Returns a cursor at the first node, if any.
    pub fn first(&self) -> Option<Cursor<'_, T>> {
        self.cursor(self.first)
    }

    /// Returns a cursor at the last node, if any.
    pub fn last(&self) -> Option<Cursor<'_, T>> {
        self.cursor(self.last)
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over values from first to last.
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.first,
            remaining: self.nodes.len(),
        }
    }

    fn cursor(&self, link: Link) -> Option<Cursor<'_, T>> {
        link.map(|index| Cursor { list: self, index })
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed position within a [LinkedList], used to walk the chain in
/// either direction.
pub struct Cursor<'a, T> {
    list: &'a LinkedList<T>,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// Returns the value at this position.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// Returns the successor, if any.
    pub fn next(&self) -> Option<Cursor<'a, T>> {
        self.list.cursor(self.node().next)
    }

    /// Returns the predecessor, if any.
    pub fn prev(&self) -> Option<Cursor<'a, T>> {
        self.list.cursor(self.node().prev)
    }

    fn node(&self) -> &'a Node<T> {
        &self.list.nodes[self.index]
    }
}

// Manual impls avoid a `T: Clone` bound.
impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.list, other.list) && self.index == other.index
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("value", self.value())
            .finish()
    }
}

/// Iterator over the values of a [LinkedList], following `next` links.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    next: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let node = &list.nodes[self.next?];
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn one_to_four() -> LinkedList<u32> {
        let mut list = LinkedList::new();
        list.add(1);
        list.add(2);
        list.add(3);
        list.add(4);
        list
    }

    #[test]
    fn test_links() {
        let list = one_to_four();
        let first = list.first().unwrap();
        let last = list.last().unwrap();

        assert_eq!(*first.value(), 1);
        assert_eq!(*last.value(), 4);
        assert_eq!(*first.next().unwrap().value(), 2);
        assert_eq!(*first.next().unwrap().prev().unwrap().value(), 1);
        let back = last.prev().unwrap().prev().unwrap().prev().unwrap();
        assert_eq!(*back.value(), 1);
        assert_eq!(back, first);

        assert!(first.prev().is_none());
        assert!(last.next().is_none());
    }

    #[test]
    fn test_iter() {
        let list = one_to_four();
        let mut count = 0;
        let mut values = Vec::new();
        for value in &list {
            count += 1;
            values.push(*value);
        }
        assert_eq!(count, 4);
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_iter_restarts() {
        let list = one_to_four();
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.len(), 3);

        // A new traversal is unaffected by the partially consumed one
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(iter.copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_empty() {
        let list: LinkedList<u32> = LinkedList::default();
        assert!(list.is_empty());
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert_eq!(list.iter().next(), None);
        assert_eq!(format!("{list:?}"), "[]");
    }

    #[test]
    fn test_single() {
        let mut list = LinkedList::new();
        list.add(7);
        let first = list.first().unwrap();
        assert_eq!(first, list.last().unwrap());
        assert!(first.prev().is_none());
        assert!(first.next().is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_from_iter_and_debug() {
        let list: LinkedList<_> = (1..=3).collect();
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");

        let mut list = list.clone();
        list.extend([4, 5]);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(*list.last().unwrap().value(), 5);
    }

    #[test]
    fn test_random_chain_invariants() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            let n = rng.gen_range(0..200);
            let values: Vec<i64> = (0..n).map(|_| rng.gen()).collect();
            let mut list = LinkedList::with_capacity(n);
            for value in &values {
                list.add(*value);
            }

            // Iteration yields insertion order
            assert_eq!(list.len(), n);
            assert_eq!(list.iter().copied().collect::<Vec<_>>(), values);
            if n == 0 {
                assert!(list.first().is_none() && list.last().is_none());
                continue;
            }

            // Walking forward reaches the last node in exactly n - 1 steps
            let mut cursor = list.first().unwrap();
            assert!(cursor.prev().is_none());
            assert_eq!(*cursor.value(), values[0]);
            let mut steps = 0;
            while let Some(next) = cursor.next() {
                assert_eq!(next.prev(), Some(cursor));
                cursor = next;
                steps += 1;
            }
            assert_eq!(steps, n - 1);
            assert_eq!(cursor, list.last().unwrap());
            assert_eq!(*cursor.value(), values[n - 1]);
        }
    }

    #[test]
    fn test_large_append() {
        // Quadratic appends would not finish in reasonable time at this size
        let n = 1_000_000;
        let mut list = LinkedList::with_capacity(n);
        for i in 0..n {
            list.add(i);
        }
        assert_eq!(list.len(), n);
        assert_eq!(*list.last().unwrap().value(), n - 1);
        assert_eq!(list.iter().sum::<usize>(), n * (n - 1) / 2);
    }
}
