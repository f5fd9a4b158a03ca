//! Randomized queue backed by a resizing circular buffer.
//!
//! # Overview
//!
//! [`RandomizedQueue`] is a bag-like queue: the element removed by
//! `dequeue` is a random one rather than the oldest.
//!
//! - O(1) amortized `enqueue` and `dequeue`
//! - O(1) `sample`, `len`, `is_empty`
//! - O(n) `iter`, which shuffles a snapshot of the contents
//!
//! # Capacity Policy
//!
//! The backing array starts at two slots. It doubles when an `enqueue`
//! finds it full and halves when a `dequeue` leaves it exactly one-quarter
//! full, so it never drops below two slots and is never more than 75% empty
//! after a removal. Reallocation unrolls the ring so the oldest slot lands
//! at index 0.
//!
//! # Randomization
//!
//! - `enqueue` swaps each new element (from the third one on) with a
//!   uniformly random logical position, so the front slot that `dequeue`
//!   takes from keeps being reshuffled as elements arrive.
//! - `sample` draws a uniform logical index on every call.
//! - Each `iter` call Fisher–Yates shuffles its own snapshot, so separate
//!   iterators are mutually independent uniform permutations.
//!
//! # Examples
//!
//! ```rust
//! use randqueue::randomized::RandomizedQueue;
//!
//! let mut queue: RandomizedQueue<u32> = (1..=10).collect();
//! assert_eq!(queue.len(), 10);
//!
//! let mut first: Vec<u32> = queue.iter().copied().collect();
//! first.sort_unstable();
//! assert_eq!(first, (1..=10).collect::<Vec<_>>());
//!
//! while queue.dequeue().is_ok() {}
//! assert!(queue.is_empty());
//! assert_eq!(queue.capacity(), 2);
//! ```

mod queue;
mod ring;

pub use queue::RandomizedQueue;
pub use queue::RandomizedQueueIntoIterator;
pub use queue::RandomizedQueueIterator;
