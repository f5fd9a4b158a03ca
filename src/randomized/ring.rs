//! Circular storage with a doubling/halving capacity policy.

use std::fmt;

/// Smallest capacity the ring ever has.
pub(super) const MIN_CAPACITY: usize = 2;

/// A growable circular buffer addressed by logical position.
///
/// Logical position `0` is the oldest slot (`first`); the `length` occupied
/// slots run forward from there, wrapping modulo the capacity. `last` is the
/// next free slot. The capacity is always a power of two and at least
/// [`MIN_CAPACITY`]:
///
/// - a push onto a full ring first doubles it;
/// - a pop that leaves the ring exactly one-quarter full (and non-empty)
///   halves it afterwards.
///
/// Between a grow and the following shrink at least half as many pops as
/// there are elements must happen, so resizing costs O(1) amortized.
pub(super) struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    first: usize,
    last: usize,
    length: usize,
}

impl<T> RingBuffer<T> {
    pub(super) fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty ring; `capacity` is rounded up to a power of two no
    /// smaller than [`MIN_CAPACITY`].
    pub(super) fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY).next_power_of_two();
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            first: 0,
            last: 0,
            length: 0,
        }
    }

    #[inline]
    pub(super) const fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub(super) const fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub(super) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn physical(&self, logical: usize) -> usize {
        (self.first + logical) % self.capacity()
    }

    /// Returns the element at `logical`, which must be below `len()`.
    pub(super) fn get(&self, logical: usize) -> &T {
        debug_assert!(logical < self.length, "logical index {logical} out of range");
        let physical = self.physical(logical);
        match &self.slots[physical] {
            Some(value) => value,
            None => unreachable!("occupied range contains vacant slot {physical}"),
        }
    }

    /// Swaps the elements at two logical positions below `len()`.
    pub(super) fn swap(&mut self, left: usize, right: usize) {
        debug_assert!(left < self.length && right < self.length);
        if left == right {
            return;
        }
        let left = self.physical(left);
        let right = self.physical(right);
        self.slots.swap(left, right);
    }

    /// Stores `value` in the `last` slot, doubling the capacity first when
    /// the ring is full. The new element ends up at logical `len() - 1`.
    pub(super) fn push_back(&mut self, value: T) {
        if self.length == self.capacity() {
            self.resize(2 * self.capacity());
        }
        self.slots[self.last] = Some(value);
        self.last = (self.last + 1) % self.capacity();
        self.length += 1;
    }

    /// Takes the element in the `first` slot, then halves the capacity when
    /// exactly a quarter of it remains occupied. Returns `None` on an empty
    /// ring without touching anything.
    pub(super) fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.first].take();
        self.first = (self.first + 1) % self.capacity();
        self.length -= 1;
        if self.length > 0 && self.length == self.capacity() / 4 {
            self.resize(self.capacity() / 2);
        }
        debug_assert!(value.is_some(), "front slot was vacant");
        value
    }

    /// Iterates the occupied slots in logical order.
    pub(super) fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        (0..self.length).map(move |logical| self.get(logical))
    }

    /// Moves the elements out in logical order.
    pub(super) fn into_vec(mut self) -> Vec<T> {
        let capacity = self.capacity();
        (0..self.length)
            .filter_map(|logical| self.slots[(self.first + logical) % capacity].take())
            .collect()
    }

    /// Copies the occupied range into a fresh buffer of `new_capacity`
    /// slots, starting at physical index 0.
    fn resize(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity.is_power_of_two() && new_capacity >= MIN_CAPACITY);
        debug_assert!(new_capacity > self.length);
        tracing::trace!(
            old_capacity = self.capacity(),
            new_capacity,
            length = self.length,
            "resizing ring buffer"
        );
        let old_capacity = self.capacity();
        let mut slots = Vec::with_capacity(new_capacity);
        slots.extend(
            (0..self.length).map(|logical| self.slots[(self.first + logical) % old_capacity].take()),
        );
        slots.resize_with(new_capacity, || None);
        self.slots = slots;
        self.first = 0;
        self.last = self.length;
    }
}

impl<T: Clone> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            first: self.first,
            last: self.last,
            length: self.length,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
