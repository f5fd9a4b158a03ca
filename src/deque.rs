//! Double-ended queue backed by a doubly-linked list.
//!
//! # Overview
//!
//! `Deque` supports adding and removing items at either end:
//!
//! - O(1) `add_first`, `add_last`, `remove_first`, `remove_last`
//! - O(1) `peek_first`, `peek_last`, `len`, `is_empty`
//! - front-to-back iteration (also reversible)
//!
//! # Node Ownership
//!
//! Nodes live in an arena (`Vec` of slots) owned by the deque, and the
//! previous/next links are slot indices. A link never owns the node it
//! points at, so the back-links used for O(1) tail removal cannot form
//! ownership cycles. Slots freed by removals are chained into a free list
//! and reused by later insertions; the arena is reset whenever the deque
//! becomes empty.
//!
//! # Examples
//!
//! ```rust
//! use randqueue::deque::Deque;
//!
//! let mut deque = Deque::new();
//! deque.add_first(1);
//! deque.add_last(2);
//! deque.add_first(0);
//! deque.add_last(3);
//!
//! let items: Vec<&i32> = deque.iter().collect();
//! assert_eq!(items, vec![&0, &1, &2, &3]);
//!
//! assert_eq!(deque.remove_last(), Ok(3));
//! assert_eq!(deque.remove_first(), Ok(0));
//! assert_eq!(deque.len(), 2);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

use crate::error::ContainerError;

const CONTAINER_NAME: &str = "Deque";

struct Node<T> {
    value: T,
    previous: Option<usize>,
    next: Option<usize>,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// A double-ended queue with constant-time operations at both ends.
///
/// Items are present by construction: `T` is never null, so inserting an
/// absent item is ruled out by the type system rather than checked at
/// runtime.
///
/// # Examples
///
/// ```rust
/// use randqueue::deque::Deque;
///
/// let mut deque: Deque<&str> = ["b", "c"].into_iter().collect();
/// deque.add_first("a");
/// assert_eq!(deque.peek_first(), Ok(&"a"));
/// assert_eq!(deque.peek_last(), Ok(&"c"));
/// assert_eq!(deque.to_string(), "a b c");
/// ```
pub struct Deque<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    length: usize,
}

impl<T> Deque<T> {
    /// Creates a new empty deque.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Creates an empty deque with room for `capacity` nodes before the
    /// arena reallocates.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of elements in the deque.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Adds an element to the front of the deque.
    pub fn add_first(&mut self, value: T) {
        let index = self.allocate(Node {
            value,
            previous: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.node_mut(head).previous = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.length += 1;
    }

    /// Adds an element to the back of the deque.
    pub fn add_last(&mut self, value: T) {
        let index = self.allocate(Node {
            value,
            previous: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.length += 1;
    }

    /// Removes and returns the element at the front.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] if the deque is empty. The deque is
    /// left unchanged.
    pub fn remove_first(&mut self) -> Result<T, ContainerError> {
        let head = self
            .head
            .ok_or(ContainerError::empty(CONTAINER_NAME, "remove_first"))?;
        let node = self.release(head);
        match node.next {
            Some(next) => self.node_mut(next).previous = None,
            None => self.tail = None,
        }
        self.head = node.next;
        self.finish_removal();
        Ok(node.value)
    }

    /// Removes and returns the element at the back.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] if the deque is empty. The deque is
    /// left unchanged.
    pub fn remove_last(&mut self) -> Result<T, ContainerError> {
        let tail = self
            .tail
            .ok_or(ContainerError::empty(CONTAINER_NAME, "remove_last"))?;
        let node = self.release(tail);
        match node.previous {
            Some(previous) => self.node_mut(previous).next = None,
            None => self.head = None,
        }
        self.tail = node.previous;
        self.finish_removal();
        Ok(node.value)
    }

    /// Returns a reference to the element at the front.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] if the deque is empty.
    pub fn peek_first(&self) -> Result<&T, ContainerError> {
        self.head
            .map(|head| &self.node(head).value)
            .ok_or(ContainerError::empty(CONTAINER_NAME, "peek_first"))
    }

    /// Returns a reference to the element at the back.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] if the deque is empty.
    pub fn peek_last(&self) -> Result<&T, ContainerError> {
        self.tail
            .map(|tail| &self.node(tail).value)
            .ok_or(ContainerError::empty(CONTAINER_NAME, "peek_last"))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Creates an iterator over references to the elements, front to back.
    ///
    /// Each call starts a fresh pass over the current contents.
    #[must_use]
    pub const fn iter(&self) -> DequeIterator<'_, T> {
        DequeIterator {
            deque: self,
            front: self.head,
            back: self.tail,
            remaining: self.length,
        }
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        match self.free_head {
            Some(index) => {
                let previous = std::mem::replace(&mut self.slots[index], Slot::Occupied(node));
                match previous {
                    Slot::Vacant { next_free } => self.free_head = next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot {index}"),
                }
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, index: usize) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(index);
                node
            }
            Slot::Vacant { .. } => unreachable!("link points at vacant slot {index}"),
        }
    }

    fn finish_removal(&mut self) {
        self.length -= 1;
        if self.length == 0 {
            self.slots.clear();
            self.free_head = None;
        }
    }

    fn node(&self, index: usize) -> &Node<T> {
        match &self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at vacant slot {index}"),
        }
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.slots[index] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link points at vacant slot {index}"),
        }
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut deque = Self::with_capacity(iter.size_hint().0);
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_last(element);
        }
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = DequeIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        DequeIntoIterator { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = DequeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Deque`], front to back.
pub struct DequeIterator<'a, T> {
    deque: &'a Deque<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for DequeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.deque.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for DequeIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.deque.node(self.back?);
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for DequeIterator<'_, T> {}

impl<T> FusedIterator for DequeIterator<'_, T> {}

/// Owning iterator over a [`Deque`], front to back.
pub struct DequeIntoIterator<T> {
    deque: Deque<T>,
}

impl<T> Iterator for DequeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for DequeIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.remove_last().ok()
    }
}

impl<T> ExactSizeIterator for DequeIntoIterator<T> {}

impl<T> FusedIterator for DequeIntoIterator<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect<T: Clone>(deque: &Deque<T>) -> Vec<T> {
        deque.iter().cloned().collect()
    }

    mod basic_structure {
        use super::*;

        #[rstest]
        fn test_deque_new() {
            let deque: Deque<i32> = Deque::new();
            assert!(deque.is_empty());
            assert_eq!(deque.len(), 0);
            assert!(deque.head.is_none());
            assert!(deque.tail.is_none());
        }

        #[rstest]
        fn test_deque_default() {
            let deque: Deque<i32> = Deque::default();
            assert!(deque.is_empty());
        }

        #[rstest]
        fn test_deque_with_capacity_is_empty() {
            let deque: Deque<i32> = Deque::with_capacity(16);
            assert!(deque.is_empty());
            assert!(deque.slots.capacity() >= 16);
        }

        #[rstest]
        fn test_single_element_is_head_and_tail() {
            let mut deque = Deque::new();
            deque.add_last(7);
            assert_eq!(deque.head, deque.tail);
            assert_eq!(deque.peek_first(), Ok(&7));
            assert_eq!(deque.peek_last(), Ok(&7));
        }
    }

    mod add_operations {
        use super::*;

        #[rstest]
        fn test_add_first_prepends() {
            let mut deque = Deque::new();
            deque.add_first(3);
            deque.add_first(2);
            deque.add_first(1);
            assert_eq!(collect(&deque), vec![1, 2, 3]);
            assert_eq!(deque.len(), 3);
        }

        #[rstest]
        fn test_add_last_appends() {
            let mut deque = Deque::new();
            deque.add_last(1);
            deque.add_last(2);
            deque.add_last(3);
            assert_eq!(collect(&deque), vec![1, 2, 3]);
        }

        #[rstest]
        fn test_mixed_adds_keep_logical_order() {
            let mut deque = Deque::new();
            deque.add_first(1);
            deque.add_last(2);
            deque.add_first(0);
            deque.add_last(3);
            assert_eq!(collect(&deque), vec![0, 1, 2, 3]);
        }

        #[rstest]
        fn test_head_and_tail_links_are_open() {
            let mut deque = Deque::new();
            deque.add_last(1);
            deque.add_last(2);
            deque.add_first(0);
            let head = deque.node(deque.head.unwrap());
            let tail = deque.node(deque.tail.unwrap());
            assert!(head.previous.is_none());
            assert!(tail.next.is_none());
        }
    }

    mod remove_operations {
        use super::*;

        #[rstest]
        fn test_remove_first_empty() {
            let mut deque: Deque<i32> = Deque::new();
            let error = deque.remove_first().unwrap_err();
            assert_eq!(error, ContainerError::empty("Deque", "remove_first"));
            assert!(deque.is_empty());
        }

        #[rstest]
        fn test_remove_last_empty() {
            let mut deque: Deque<i32> = Deque::new();
            let error = deque.remove_last().unwrap_err();
            assert_eq!(error, ContainerError::empty("Deque", "remove_last"));
        }

        #[rstest]
        fn test_peek_empty() {
            let deque: Deque<i32> = Deque::new();
            assert!(deque.peek_first().unwrap_err().is_empty_container());
            assert!(deque.peek_last().unwrap_err().is_empty_container());
        }

        #[rstest]
        fn test_remove_first_from_both_ends_inserts() {
            let mut deque = Deque::new();
            deque.add_first(1);
            deque.add_last(2);
            deque.add_first(0);
            deque.add_last(3);
            let drained: Vec<i32> = std::iter::from_fn(|| deque.remove_first().ok()).collect();
            assert_eq!(drained, vec![0, 1, 2, 3]);
            assert!(deque.is_empty());
        }

        #[rstest]
        fn test_remove_last_reverses() {
            let mut deque: Deque<i32> = (1..=4).collect();
            let drained: Vec<i32> = std::iter::from_fn(|| deque.remove_last().ok()).collect();
            assert_eq!(drained, vec![4, 3, 2, 1]);
        }

        #[rstest]
        fn test_remove_last_single_clears_head() {
            let mut deque = Deque::new();
            deque.add_first("only");
            assert_eq!(deque.remove_last(), Ok("only"));
            assert!(deque.head.is_none());
            assert!(deque.tail.is_none());
        }

        #[rstest]
        fn test_remove_first_single_clears_tail() {
            let mut deque = Deque::new();
            deque.add_last("only");
            assert_eq!(deque.remove_first(), Ok("only"));
            assert!(deque.head.is_none());
            assert!(deque.tail.is_none());
        }

        #[rstest]
        fn test_failed_remove_leaves_state_unchanged() {
            let mut deque: Deque<i32> = Deque::new();
            assert!(deque.remove_first().is_err());
            assert!(deque.remove_last().is_err());
            deque.add_last(5);
            assert_eq!(collect(&deque), vec![5]);
        }
    }

    mod arena {
        use super::*;

        #[rstest]
        fn test_freed_slots_are_reused() {
            let mut deque: Deque<i32> = (0..4).collect();
            deque.remove_first().unwrap();
            deque.remove_last().unwrap();
            deque.add_first(10);
            deque.add_last(20);
            assert_eq!(deque.slots.len(), 4);
            assert_eq!(collect(&deque), vec![10, 1, 2, 20]);
        }

        #[rstest]
        fn test_arena_resets_when_empty() {
            let mut deque: Deque<i32> = (0..8).collect();
            while deque.remove_first().is_ok() {}
            assert!(deque.slots.is_empty());
            assert!(deque.free_head.is_none());
        }

        #[rstest]
        fn test_clear() {
            let mut deque: Deque<i32> = (0..8).collect();
            deque.clear();
            assert!(deque.is_empty());
            assert_eq!(deque.iter().count(), 0);
        }

        #[rstest]
        fn test_dropping_deque_drops_all_values() {
            use std::rc::Rc;

            let marker = Rc::new(());
            let mut deque = Deque::new();
            for _ in 0..5 {
                deque.add_last(Rc::clone(&marker));
            }
            deque.remove_first().unwrap();
            assert_eq!(Rc::strong_count(&marker), 5);
            drop(deque);
            assert_eq!(Rc::strong_count(&marker), 1);
        }
    }

    mod iteration {
        use super::*;

        #[rstest]
        fn test_iter_empty() {
            let deque: Deque<i32> = Deque::new();
            assert_eq!(deque.iter().next(), None);
        }

        #[rstest]
        fn test_iter_is_restartable() {
            let deque: Deque<i32> = (1..=3).collect();
            let first_pass: Vec<&i32> = deque.iter().collect();
            let second_pass: Vec<&i32> = deque.iter().collect();
            assert_eq!(first_pass, second_pass);
        }

        #[rstest]
        fn test_iter_double_ended_meets_in_middle() {
            let deque: Deque<i32> = (1..=5).collect();
            let mut iterator = deque.iter();
            assert_eq!(iterator.next(), Some(&1));
            assert_eq!(iterator.next_back(), Some(&5));
            assert_eq!(iterator.next(), Some(&2));
            assert_eq!(iterator.next_back(), Some(&4));
            assert_eq!(iterator.next(), Some(&3));
            assert_eq!(iterator.next(), None);
            assert_eq!(iterator.next_back(), None);
        }

        #[rstest]
        fn test_iter_exact_size() {
            let deque: Deque<i32> = (0..10).collect();
            let mut iterator = deque.iter();
            assert_eq!(iterator.len(), 10);
            iterator.next();
            assert_eq!(iterator.len(), 9);
        }

        #[rstest]
        fn test_into_iter_owned() {
            let deque: Deque<String> = ["x", "y", "z"].iter().map(ToString::to_string).collect();
            let collected: Vec<String> = deque.into_iter().rev().collect();
            assert_eq!(collected, vec!["z", "y", "x"]);
        }

        #[rstest]
        fn test_for_loop_over_reference() {
            let deque: Deque<i32> = (1..=3).collect();
            let mut sum = 0;
            for element in &deque {
                sum += element;
            }
            assert_eq!(sum, 6);
        }
    }

    mod traits {
        use super::*;
        use std::hash::DefaultHasher;

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        #[rstest]
        fn test_equality_ignores_arena_layout() {
            let mut left = Deque::new();
            left.add_first(2);
            left.add_first(1);
            let right: Deque<i32> = vec![1, 2].into_iter().collect();
            assert_eq!(left, right);
            assert_eq!(hash_of(&left), hash_of(&right));
        }

        #[rstest]
        fn test_inequality() {
            let left: Deque<i32> = (1..=3).collect();
            let right: Deque<i32> = (1..=4).collect();
            assert_ne!(left, right);
        }

        #[rstest]
        fn test_clone_is_independent() {
            let original: Deque<i32> = (1..=3).collect();
            let mut cloned = original.clone();
            cloned.add_last(4);
            assert_eq!(original.len(), 3);
            assert_eq!(cloned.len(), 4);
        }

        #[rstest]
        #[case(vec![], "")]
        #[case(vec![1], "1")]
        #[case(vec![1, 2, 3], "1 2 3")]
        fn test_display(#[case] elements: Vec<i32>, #[case] expected: &str) {
            let deque: Deque<i32> = elements.into_iter().collect();
            assert_eq!(deque.to_string(), expected);
        }

        #[rstest]
        fn test_debug() {
            let deque: Deque<i32> = (1..=3).collect();
            assert_eq!(format!("{deque:?}"), "[1, 2, 3]");
        }

        #[rstest]
        fn test_extend() {
            let mut deque: Deque<i32> = (1..=2).collect();
            deque.extend(vec![3, 4]);
            assert_eq!(collect(&deque), vec![1, 2, 3, 4]);
        }
    }
}
