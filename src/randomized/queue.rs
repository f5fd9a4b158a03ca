use std::cell::RefCell;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

use fastrand::Rng;

use super::ring::RingBuffer;
use crate::error::ContainerError;

const CONTAINER_NAME: &str = "RandomizedQueue";

/// A queue whose removals and iteration order are uniformly random.
///
/// Items are present by construction: `T` is never null, so enqueueing an
/// absent item is ruled out by the type system rather than checked at
/// runtime.
///
/// # Examples
///
/// ```rust
/// use randqueue::randomized::RandomizedQueue;
///
/// let mut queue = RandomizedQueue::with_seed(7);
/// for word in ["to", "be", "or", "not"] {
///     queue.enqueue(word);
/// }
///
/// let peeked = *queue.sample().unwrap();
/// assert!(["to", "be", "or", "not"].contains(&peeked));
/// assert_eq!(queue.len(), 4);
///
/// let mut removed: Vec<&str> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
/// removed.sort_unstable();
/// assert_eq!(removed, vec!["be", "not", "or", "to"]);
/// ```
pub struct RandomizedQueue<T> {
    ring: RingBuffer<T>,
    rng: RefCell<Rng>,
}

impl<T> RandomizedQueue<T> {
    /// Creates an empty queue with an entropy-seeded random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(Rng::new())
    }

    /// Creates an empty queue whose random source is seeded with `seed`.
    ///
    /// Two queues built with the same seed and fed the same operations
    /// produce the same results.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Rng::with_seed(seed))
    }

    /// Creates an empty queue drawing from `rng`.
    #[must_use]
    pub fn with_rng(rng: Rng) -> Self {
        Self {
            ring: RingBuffer::new(),
            rng: RefCell::new(rng),
        }
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns the number of elements in the queue.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns the length of the backing array.
    ///
    /// Always a power of two, at least 2, and (for a non-empty queue after
    /// any removal) less than four times `len()`.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Adds an element to the queue.
    ///
    /// The element is written to the back of the ring. Once the queue holds
    /// more than two elements, it is then swapped with the element at a
    /// uniformly drawn logical position in `[0, len)`, which keeps the front
    /// slot a random pick for [`dequeue`](Self::dequeue).
    pub fn enqueue(&mut self, value: T) {
        self.ring.push_back(value);
        let length = self.ring.len();
        if length > 2 {
            let target = self.draw_index(length);
            self.ring.swap(length - 1, target);
        }
    }

    /// Returns a reference to a uniformly random element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] if the queue is empty.
    pub fn sample(&self) -> Result<&T, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::empty(CONTAINER_NAME, "sample"));
        }
        Ok(self.ring.get(self.draw_index(self.len())))
    }

    /// Removes and returns the element at the front of the ring.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::Empty`] if the queue is empty. The queue is
    /// left unchanged.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        self.ring
            .pop_front()
            .ok_or(ContainerError::empty(CONTAINER_NAME, "dequeue"))
    }

    /// Returns an iterator over the current elements in a fresh uniformly
    /// random order.
    ///
    /// The order is fixed when the iterator is created, from a shuffled
    /// snapshot of the elements, so iterators obtained from separate calls
    /// are independent of each other.
    #[must_use]
    pub fn iter(&self) -> RandomizedQueueIterator<'_, T> {
        let mut order: Vec<&T> = self.ring.iter().collect();
        self.rng.borrow_mut().shuffle(&mut order);
        RandomizedQueueIterator {
            order: order.into_iter(),
        }
    }

    fn draw_index(&self, bound: usize) -> usize {
        self.rng.borrow_mut().usize(..bound)
    }
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RandomizedQueue<T> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring.clone(),
            rng: RefCell::new(self.rng.borrow_mut().fork()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RandomizedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomizedQueue")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("elements", &self.ring)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for RandomizedQueue<T> {
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

impl<T> FromIterator<T> for RandomizedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for RandomizedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.enqueue(element);
        }
    }
}

impl<T> IntoIterator for RandomizedQueue<T> {
    type Item = T;
    type IntoIter = RandomizedQueueIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut rng = self.rng.into_inner();
        let mut order = self.ring.into_vec();
        rng.shuffle(&mut order);
        RandomizedQueueIntoIterator {
            order: order.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RandomizedQueue<T> {
    type Item = &'a T;
    type IntoIter = RandomizedQueueIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a shuffled snapshot of a [`RandomizedQueue`].
pub struct RandomizedQueueIterator<'a, T> {
    order: std::vec::IntoIter<&'a T>,
}

impl<'a, T> Iterator for RandomizedQueueIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.order.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for RandomizedQueueIterator<'_, T> {}

impl<T> FusedIterator for RandomizedQueueIterator<'_, T> {}

/// Owning iterator yielding every element of a [`RandomizedQueue`] in a
/// uniformly random order.
pub struct RandomizedQueueIntoIterator<T> {
    order: std::vec::IntoIter<T>,
}

impl<T> Iterator for RandomizedQueueIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.order.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for RandomizedQueueIntoIterator<T> {}

impl<T> FusedIterator for RandomizedQueueIntoIterator<T> {}
