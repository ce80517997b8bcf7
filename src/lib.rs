//! A growable ring buffer queue that stores its data contiguously.
//!
//! Data is appended at the back handle and removed at the front handle;
//! an index that runs past the last physical slot rolls back to the
//! start, so iteration and indexing wrap around the buffer. When an
//! append finds the buffer full, the buffer is reallocated to double the
//! size and the contents moved to the start of the new block.
//!
//! Two variants are provided:
//!
//! - [`RingQueue`] works with any element type and runs the full
//!   ownership discipline: elements are moved in on append, moved out on
//!   pop, and dropped front to back when the queue is cleared or
//!   dropped.
//! - [`TrivialRingQueue`] is restricted to `Copy` element types and
//!   skips per-element lifecycle work entirely: growth is a bulk memory
//!   copy, `clear` is `O(1)`, and raw-slot appends let the caller take
//!   over initialization.
//!
//! Neither queue is a recoverable-error API: popping or peeking an empty
//! queue and indexing out of range are caller bugs and panic, and a
//! failed allocation aborts. There is no internal synchronization; a
//! queue is a single-threaded primitive that can be sent between threads
//! but not shared mutably across them.
//!
//! Neither type implements `Clone`. Duplicating a queue is deliberately
//! left to the caller to spell out.
//!
//! # Feature Flags
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate is `no_std` and only needs
//!     `alloc`
//!
//! # Usage
//!
//! ```
//! use ringqueue::RingQueue;
//!
//! let mut queue: RingQueue<i32> = RingQueue::new();
//! assert_eq!(queue.capacity(), 0);
//!
//! queue.push_back(1);
//! queue.push_back(2);
//! assert_eq!(queue.len(), 2);
//! assert_eq!(queue.capacity(), 2);
//!
//! assert_eq!(queue.pop_front(), 1);
//! assert_eq!(queue.pop_front(), 2);
//! assert!(queue.is_empty());
//! ```
//!
//! # Indexing & Iteration
//!
//! Index 0 is the front of the queue; iteration goes front to back and
//! stays in logical order across any number of reallocations.
//!
//! ```
//! use ringqueue::RingQueue;
//!
//! let mut queue: RingQueue<i32> = (0..4).collect();
//! queue.pop_front();
//! queue.push_back(4);
//!
//! assert_eq!(queue[0], 1);
//! let collected: Vec<i32> = queue.iter().cloned().collect();
//! assert_eq!(collected, vec![1, 2, 3, 4]);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

mod buffer;
mod iter;
mod utils;

pub mod queue;
pub mod trivial;

pub use crate::iter::{Iter, IterMut};
pub use crate::queue::RingQueue;
pub use crate::trivial::TrivialRingQueue;
