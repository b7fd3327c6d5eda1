//! Deque (double-ended queue) implementation
//!
//! This module provides [`Deque`], a mutex-guarded doubly linked list with
//! optional bounded capacity.
//!
//! ## Eviction Policy
//!
//! A bounded deque restores its bound before the inserting call returns:
//!
//! - [`Deque::append`] on a full deque evicts from the left end
//! - [`Deque::append_left`] on a full deque evicts from the right end
//!
//! With a capacity of zero every inserted element is evicted immediately.
//!
//! ## Choosing a Capacity
//!
//! - Use [`Capacity::Unbounded`] for a general-purpose concurrent deque
//! - Use [`Capacity::Bounded`] for sliding windows, recent-history buffers and
//!   other "keep the last N" workloads

mod arena;
pub mod capacity;
pub mod linked;

pub use self::capacity::Capacity;
pub use self::linked::{All, Deque, Values};


#[cfg(test)]
mod proptests;
