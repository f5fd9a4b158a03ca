//! # randqueue
//!
//! Two fixed-contract sequence containers for algorithms that need either
//! order-preserving or order-agnostic storage with strict complexity bounds.
//!
//! ## Overview
//!
//! - **[`Deque`](deque::Deque)**: doubly-linked double-ended queue with
//!   O(1) insertion and removal at both ends and front-to-back iteration.
//! - **[`RandomizedQueue`](randomized::RandomizedQueue)**: resizing circular
//!   buffer with O(1) amortized `enqueue`/`dequeue`, O(1) uniform `sample`,
//!   and iterators that each yield an independent uniform permutation.
//!
//! Both report contract violations (removing from an empty container)
//! through [`ContainerError`](error::ContainerError).
//!
//! ## Feature Flags
//!
//! - `deque`: the linked [`Deque`](deque::Deque)
//! - `randomized`: the [`RandomizedQueue`](randomized::RandomizedQueue)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use randqueue::prelude::*;
//!
//! let mut deque = Deque::new();
//! deque.add_first(1);
//! deque.add_last(2);
//! assert_eq!(deque.remove_first(), Ok(1));
//!
//! let mut queue: RandomizedQueue<&str> = ["a", "b", "c"].into_iter().collect();
//! let picked = queue.dequeue().unwrap();
//! assert!(["a", "b", "c"].contains(&picked));
//! assert_eq!(queue.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers and the error types.
///
/// # Usage
///
/// ```rust
/// use randqueue::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "deque")]
    pub use crate::deque::Deque;

    #[cfg(feature = "randomized")]
    pub use crate::randomized::RandomizedQueue;
}

pub mod error;

#[cfg(feature = "deque")]
pub mod deque;

#[cfg(feature = "randomized")]
pub mod randomized;
